//! Tests against a local HTTP server
//!
//! Exercise the reqwest transport, the JSON request helper and the session
//! cookie jar end to end, with an axum app standing in for the finance server.

use std::sync::Arc;

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use finance_client::models::{AssetKind, NewAsset};
use finance_client::{
    connect, get_json, try_get_json, ApiClient, ClientError, Config, CookieStore, HttpClient,
    ReqwestHttpClient, RequestOptions, SessionCookies,
};

async fn common_info() -> Json<Value> {
    Json(json!({
        "assets": [{"pk": 1, "description": "Wallet", "balance": "15.0000", "type": "CA", "explained_type": "Cash"}],
        "incomes": [{"pk": 2, "description": "Salary", "balance": 0}],
        "expenses": []
    }))
}

async fn broken() -> &'static str {
    "<html>Server Error</html>"
}

async fn login() -> impl IntoResponse {
    (
        AppendHeaders([
            (SET_COOKIE, "csrftoken=tok123; Path=/; SameSite=Lax"),
            (SET_COOKIE, "sessionid=s1; HttpOnly; Path=/"),
        ]),
        Json(json!({"key": "k-1"})),
    )
}

async fn logout() -> impl IntoResponse {
    (
        [(
            SET_COOKIE,
            "sessionid=\"\"; expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/",
        )],
        Json(json!({"detail": "Successfully logged out."})),
    )
}

/// Accepts the asset only with a matching CSRF header and session cookie
async fn create_asset(headers: HeaderMap, body: String) -> Response {
    let csrf = headers.get("x-csrftoken").and_then(|v| v.to_str().ok());
    let cookie = headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if csrf != Some("tok123") || !cookie.contains("sessionid=s1") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "CSRF Failed: CSRF token missing or incorrect."})),
        )
            .into_response();
    }

    let request: Value = serde_json::from_str(&body).unwrap_or_default();
    (
        StatusCode::CREATED,
        Json(json!({
            "pk": 9,
            "description": request["description"],
            "balance": request["balance"],
            "type": request["type"],
            "explained_type": "Bank card"
        })),
    )
        .into_response()
}

fn app() -> Router {
    Router::new()
        .route("/api/common-info/", get(common_info))
        .route("/broken/", get(broken))
        .route("/rest-auth/login/", post(login))
        .route("/rest-auth/logout/", post(logout))
        .route("/api/assets/", post(create_asset))
}

/// Serve the app on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.ok();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn get_json_returns_parsed_body() {
    let base = spawn_server().await;
    let http = ReqwestHttpClient::new();

    let value = get_json(
        &http,
        &format!("{}/api/common-info/", base),
        &RequestOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(value["assets"][0]["description"], "Wallet");
}

#[tokio::test]
async fn get_json_swallows_invalid_body() {
    let base = spawn_server().await;
    let http = ReqwestHttpClient::new();
    let url = format!("{}/broken/", base);

    assert_eq!(get_json(&http, &url, &RequestOptions::default()).await, None);
    let err = try_get_json(&http, &url, &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn get_json_swallows_network_error() {
    let http = ReqwestHttpClient::new();
    let url = "http://127.0.0.1:1/api/common-info/";

    assert_eq!(get_json(&http, url, &RequestOptions::default()).await, None);
    let err = try_get_json(&http, url, &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn session_jar_collects_set_cookie_headers() {
    let base = spawn_server().await;
    let jar = Arc::new(SessionCookies::new());
    let http = ReqwestHttpClient::with_cookies(Arc::clone(&jar));

    let response = http
        .send(
            &format!("{}/rest-auth/login/", base),
            &RequestOptions::new(reqwest::Method::POST),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.set_cookies.len(), 2);
    assert_eq!(jar.cookie_string(), "csrftoken=tok123; sessionid=s1");
}

#[tokio::test]
async fn login_then_create_asset_uses_session_and_csrf() {
    let base = spawn_server().await;
    let client = connect(&Config {
        base_url: base,
        ..Default::default()
    });

    let login = client.login("ann", "secret").await.unwrap();
    assert_eq!(login.key, "k-1");

    let asset = client
        .create_asset(&NewAsset {
            description: "Card".to_string(),
            balance: "0".to_string(),
            kind: AssetKind::BankCard,
        })
        .await
        .unwrap();
    assert_eq!(asset.pk, 9);
    assert_eq!(asset.kind, AssetKind::BankCard);

    let info = client.common_info().await.unwrap();
    assert_eq!(info.assets.len(), 1);
    assert_eq!(info.incomes[0].description, "Salary");
}

#[tokio::test]
async fn create_asset_without_login_is_forbidden() {
    let base = spawn_server().await;
    let client = connect(&Config {
        base_url: base,
        ..Default::default()
    });

    let err = client
        .create_asset(&NewAsset::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 403, .. }));
}

#[tokio::test]
async fn logout_expires_session_cookie() {
    let base = spawn_server().await;
    let jar = Arc::new(SessionCookies::new());
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_cookies(Arc::clone(&jar)));
    let client = ApiClient::new(
        &Config {
            base_url: base,
            ..Default::default()
        },
        http,
        jar.clone(),
    );

    client.login("ann", "secret").await.unwrap();
    client.logout().await.unwrap();

    assert_eq!(jar.cookie_string(), "csrftoken=tok123");
}

//! Finance API client
//!
//! Binds a server base URL, an HTTP transport and a cookie store, and exposes
//! one typed call per API action.

use std::fmt::Display;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::cookie::{get_cookie, CookieStore};
use crate::endpoint::Action;
use crate::fetch;
use crate::io::{HttpClient, RequestOptions};
use crate::models::{
    Asset, CommonInfo, Created, ExpenseCategory, ExpenseTransaction, IncomeSource,
    IncomeTransaction, LoginRequest, LoginResponse, NewAsset, NewExpense, NewExpenseTransaction,
    NewIncome, NewIncomeTransaction, Page, RegistrationRequest, User,
};

pub struct ApiClient {
    base_url: String,
    csrf_cookie_name: String,
    csrf_header_name: String,
    http: Arc<dyn HttpClient>,
    cookies: Arc<dyn CookieStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>, cookies: Arc<dyn CookieStore>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created ApiClient for {}", base_url);

        Self {
            base_url,
            csrf_cookie_name: config.csrf_cookie_name.clone(),
            csrf_header_name: config.csrf_header_name.clone(),
            http,
            cookies,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an action's endpoint
    pub fn url(&self, action: Action, param: Option<&dyn Display>) -> crate::Result<String> {
        Ok(format!("{}{}", self.base_url, action.path(param)?))
    }

    /// Request options for `method` with a JSON content type.
    ///
    /// Unsafe methods also carry the CSRF token from the cookie store, when one
    /// is set.
    pub fn options(&self, method: Method) -> RequestOptions {
        let safe = matches!(method, Method::GET | Method::HEAD | Method::OPTIONS);
        let mut options =
            RequestOptions::new(method).with_header("Content-Type", "application/json");
        if !safe {
            let token = get_cookie(self.cookies.as_ref(), &self.csrf_cookie_name);
            if token.is_empty() {
                tracing::debug!("No {} cookie, sending request without CSRF token", self.csrf_cookie_name);
            } else {
                options = options.with_header(self.csrf_header_name.as_str(), token);
            }
        }
        options
    }

    /// Call an action and decode the JSON response, logging and swallowing any
    /// failure (see [`fetch::get_json`])
    pub async fn get_json(
        &self,
        action: Action,
        param: Option<&dyn Display>,
        options: &RequestOptions,
    ) -> Option<Value> {
        let url = match self.url(action, param) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Cannot call {}: {}", action, e);
                return None;
            }
        };
        fetch::get_json(self.http.as_ref(), &url, options).await
    }

    /// Call an action with an optional JSON body and decode a typed response.
    ///
    /// Non-2xx responses become [`ClientError::Status`](crate::ClientError::Status).
    pub async fn request<T, B>(
        &self,
        action: Action,
        param: Option<&dyn Display>,
        method: Method,
        body: Option<&B>,
    ) -> crate::Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(action, param)?;
        let mut options = self.options(method);
        if let Some(body) = body {
            options = options.with_body(serde_json::to_string(body)?);
        }

        let response = self.http.send(&url, &options).await?;
        if !response.is_success() {
            tracing::debug!("{} {} -> {}", options.method, url, response.status);
            return Err(crate::ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        action: Action,
        param: Option<&dyn Display>,
    ) -> crate::Result<T> {
        self.request::<T, Value>(action, param, Method::GET, None).await
    }

    pub async fn common_info(&self) -> crate::Result<CommonInfo> {
        self.get(Action::CommonInfo, None).await
    }

    pub async fn create_asset(&self, asset: &NewAsset) -> crate::Result<Asset> {
        self.request(Action::CreateAsset, None, Method::POST, Some(asset))
            .await
    }

    pub async fn asset(&self, pk: u64) -> crate::Result<Asset> {
        self.get(Action::DetailAsset, Some(&pk)).await
    }

    /// Partially update an asset; `changes` holds only the fields to modify
    pub async fn update_asset(&self, pk: u64, changes: &Value) -> crate::Result<Asset> {
        self.request(Action::DetailAsset, Some(&pk), Method::PATCH, Some(changes))
            .await
    }

    pub async fn asset_incoming(&self, pk: u64) -> crate::Result<Page<IncomeTransaction>> {
        self.get(Action::IncomingAsset, Some(&pk)).await
    }

    pub async fn asset_outgoing(&self, pk: u64) -> crate::Result<Page<ExpenseTransaction>> {
        self.get(Action::OutgoingAsset, Some(&pk)).await
    }

    pub async fn create_income(&self, income: &NewIncome) -> crate::Result<IncomeSource> {
        self.request(Action::CreateIncome, None, Method::POST, Some(income))
            .await
    }

    pub async fn income(&self, pk: u64) -> crate::Result<IncomeSource> {
        self.get(Action::DetailIncome, Some(&pk)).await
    }

    pub async fn update_income(&self, pk: u64, changes: &Value) -> crate::Result<IncomeSource> {
        self.request(Action::DetailIncome, Some(&pk), Method::PATCH, Some(changes))
            .await
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> crate::Result<ExpenseCategory> {
        self.request(Action::CreateExpense, None, Method::POST, Some(expense))
            .await
    }

    pub async fn expense(&self, pk: u64) -> crate::Result<ExpenseCategory> {
        self.get(Action::DetailExpense, Some(&pk)).await
    }

    pub async fn update_expense(&self, pk: u64, changes: &Value) -> crate::Result<ExpenseCategory> {
        self.request(Action::DetailExpense, Some(&pk), Method::PATCH, Some(changes))
            .await
    }

    /// Every transaction booked against an expense category (not paginated)
    pub async fn expense_incoming(&self, pk: u64) -> crate::Result<Vec<ExpenseTransaction>> {
        self.get(Action::IncomingExpense, Some(&pk)).await
    }

    pub async fn create_income_transaction(
        &self,
        transaction: &NewIncomeTransaction,
    ) -> crate::Result<Created> {
        self.request(
            Action::CreateIncomeTransaction,
            None,
            Method::POST,
            Some(transaction),
        )
        .await
    }

    pub async fn income_transaction(&self, pk: u64) -> crate::Result<IncomeTransaction> {
        self.get(Action::DetailIncomeTransaction, Some(&pk)).await
    }

    pub async fn create_expense_transaction(
        &self,
        transaction: &NewExpenseTransaction,
    ) -> crate::Result<Created> {
        self.request(
            Action::CreateExpenseTransaction,
            None,
            Method::POST,
            Some(transaction),
        )
        .await
    }

    pub async fn expense_transaction(&self, pk: u64) -> crate::Result<ExpenseTransaction> {
        self.get(Action::DetailExpenseTransaction, Some(&pk)).await
    }

    pub async fn register(&self, registration: &RegistrationRequest) -> crate::Result<LoginResponse> {
        self.request(Action::CreateUser, None, Method::POST, Some(registration))
            .await
    }

    pub async fn current_user(&self) -> crate::Result<User> {
        self.get(Action::ShowUser, None).await
    }

    pub async fn login(&self, username: &str, password: &str) -> crate::Result<LoginResponse> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        tracing::debug!("Logging in as {}", username);
        self.request(Action::LoginUser, None, Method::POST, Some(&credentials))
            .await
    }

    pub async fn logout(&self) -> crate::Result<Value> {
        self.request::<Value, Value>(Action::LogoutUser, None, Method::POST, None)
            .await
    }
}

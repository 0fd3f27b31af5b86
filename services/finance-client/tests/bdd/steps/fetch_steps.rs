//! BDD step definitions for the JSON request helper

use cucumber::{given, then, when};
use serde_json::Value;

use finance_client::{get_json, HttpResponse, RequestOptions};

use crate::world::{FinanceWorld, FixedResponseClient};

#[given(expr = "a server that answers {int} with body {string}")]
fn server_answers(world: &mut FinanceWorld, status: u16, body: String) {
    world.http = Some(FixedResponseClient {
        response: Ok(HttpResponse {
            status,
            body,
            ..Default::default()
        }),
    });
}

#[given("a server that is unreachable")]
fn server_unreachable(world: &mut FinanceWorld) {
    world.http = Some(FixedResponseClient {
        response: Err("connection refused".to_string()),
    });
}

#[when(expr = "JSON is requested from {string}")]
async fn request_json(world: &mut FinanceWorld, url: String) {
    let http = world.http.as_ref().expect("server not set");
    world.json_result = Some(get_json(http, &url, &RequestOptions::default()).await);
}

#[then(expr = "the result should be the JSON {string}")]
fn result_should_be(world: &mut FinanceWorld, expected: String) {
    let result = world.json_result.as_ref().expect("no request made");
    let expected: Value = serde_json::from_str(&expected).expect("invalid expected JSON");
    assert_eq!(result.as_ref(), Some(&expected));
}

#[then("the result should be empty")]
fn result_should_be_empty(world: &mut FinanceWorld) {
    let result = world.json_result.as_ref().expect("no request made");
    assert_eq!(result, &None);
}

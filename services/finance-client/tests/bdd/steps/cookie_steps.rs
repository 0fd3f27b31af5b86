//! BDD step definitions for cookie lookup

use cucumber::{given, then, when};

use finance_client::{get_cookie, StaticCookies};

use crate::world::FinanceWorld;

#[given(expr = "the cookie string {string}")]
fn cookie_string(world: &mut FinanceWorld, cookies: String) {
    world.cookies = Some(StaticCookies::new(cookies));
}

#[when(expr = "the cookie {string} is read")]
fn read_cookie(world: &mut FinanceWorld, key: String) {
    let store = world.cookies.as_ref().expect("cookies not set");
    world.cookie_value = Some(get_cookie(store, &key));
}

#[then(expr = "the cookie value should be {string}")]
fn cookie_value_should_be(world: &mut FinanceWorld, expected: String) {
    let value = world.cookie_value.as_ref().expect("no cookie read");
    assert_eq!(value, &expected);
}

#[then("the cookie value should be empty")]
fn cookie_value_empty(world: &mut FinanceWorld) {
    let value = world.cookie_value.as_ref().expect("no cookie read");
    assert!(value.is_empty(), "expected empty value, got {value:?}");
}

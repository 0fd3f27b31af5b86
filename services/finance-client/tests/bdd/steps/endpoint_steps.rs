//! BDD step definitions for endpoint resolution

use cucumber::{then, when};

use finance_client::get_url;

use crate::world::FinanceWorld;

#[when(expr = "the action {string} is resolved")]
fn resolve_without_param(world: &mut FinanceWorld, action: String) {
    world.resolved_url = Some(get_url(&action, None));
}

#[when(expr = "the action {string} is resolved with parameter {string}")]
fn resolve_with_param(world: &mut FinanceWorld, action: String, param: String) {
    world.resolved_url = Some(get_url(&action, Some(&param)));
}

#[then(expr = "the URL should be {string}")]
fn url_should_be(world: &mut FinanceWorld, expected: String) {
    let resolved = world.resolved_url.as_ref().expect("nothing resolved");
    assert_eq!(resolved.as_deref(), Some(expected.as_str()));
}

#[then("there should be no URL")]
fn no_url(world: &mut FinanceWorld) {
    let resolved = world.resolved_url.as_ref().expect("nothing resolved");
    assert_eq!(resolved, &None);
}

//! BDD step definitions for the word-length limiter

use cucumber::{then, when};

use finance_client::limit_word_length;

use crate::world::FinanceWorld;

#[when(expr = "the text {string} is limited to {int} characters per word")]
fn limit_text(world: &mut FinanceWorld, text: String, limit: usize) {
    world.limited_text = Some(limit_word_length(&text, limit));
}

#[then(expr = "the limited text should be {string}")]
fn limited_text_should_be(world: &mut FinanceWorld, expected: String) {
    let text = world.limited_text.as_ref().expect("no text limited");
    assert_eq!(text, &expected);
}

//! BDD step definitions for the finance client

pub mod cookie_steps;
pub mod endpoint_steps;
pub mod fetch_steps;
pub mod text_steps;

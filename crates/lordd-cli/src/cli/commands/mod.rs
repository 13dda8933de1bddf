//! CLI command handlers.

mod cards;
mod fetch;

pub use cards::run_cards;
pub use fetch::run_fetch;

//! UI Components
//!
//! Leptos components for the swiping and summary views.

mod action_bar;
mod card_stack;
mod summary;

pub use action_bar::ActionBar;
pub use card_stack::CardStack;
pub use summary::SummaryView;

//! HTTP request handlers organized by functionality.

pub mod actions;
pub mod api;

// Re-export handler functions
pub use actions::{
    SearchForm, change_page, close_modal, dismiss_error, select_title, submit_search,
};
pub use api::{ApiSearchParams, api_search, api_title};

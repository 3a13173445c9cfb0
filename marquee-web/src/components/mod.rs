//! Reusable HTML components for the server-rendered UI.
//!
//! Components are HTML fragments built with `format!` and composed
//! into full pages. All styling uses Tailwind CSS classes.

pub mod layout;
pub mod pager;
pub mod title;

// Re-export main component functions
pub use layout::{error_banner, escape, page_shell};
pub use pager::pagination_bar;
pub use title::{detail_modal, result_card, result_grid};

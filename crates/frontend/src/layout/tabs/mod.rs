//! Tab management module
//!
//! - `page` - TabPage wrapper around tab content
//! - `registry` - tab key → view mapping
//! - `tab_labels` - page names and tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{pages, page_label, tab_title};

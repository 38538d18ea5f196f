pub mod document;
pub mod list_items;

pub use document::{build_html, build_html_at};
pub use list_items::{generate_list_item, generate_list_items};

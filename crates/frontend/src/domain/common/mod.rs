pub mod list_page;

pub use list_page::EntityList;

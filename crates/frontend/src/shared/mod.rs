pub mod data;
pub mod global_search;
pub mod icons;
pub mod list_utils;
pub mod number_format;

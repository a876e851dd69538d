pub mod details;

pub use details::CustomerDetails;

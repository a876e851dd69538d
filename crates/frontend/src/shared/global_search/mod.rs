//! Global search across CRM collections.
//!
//! - `permissions` - permission evaluator for the acting user
//! - `search` - category scan, gating and truncation
//! - `presenter` - display projection and navigation intent of a result
//! - `state` - query text and result panel state machine
//! - `listeners` - window/document event subscriptions bound to the component lifetime
//! - `component` - the `GlobalSearch` widget in the top header

pub mod component;
pub mod listeners;
pub mod permissions;
pub mod presenter;
pub mod search;
pub mod state;

pub use component::GlobalSearch;
pub use permissions::PermissionEvaluator;
pub use presenter::{present, select, NavigationIntent, PresentedResult};
pub use search::{search, SearchCategory, SearchCollections, SearchResult, SearchableEntity};
pub use state::{PanelEvent, PanelState, QueryState};

//! querysync-url
//!
//! The query-string side of the synchronizer: an ordered, form-urlencoded
//! multimap, `/page/<n>` path helpers and an in-memory navigation context
//! for tests and the replay CLI.

pub mod navigator;
pub mod path;
pub mod query;

pub use navigator::MemoryNavigator;
pub use path::{page_href, page_number, root_with_query, soft_navigate};
pub use query::QueryState;

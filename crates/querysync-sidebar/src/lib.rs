//! querysync-sidebar
//!
//! Keeps sidebar filter controls, the URL query and the pagination strip in
//! step. The pure pieces (`extract`, `apply`, `reconcile`, `reset`) work on
//! a [`Sidebar`](querysync_core::types::Sidebar) and a
//! [`QueryState`](querysync_url::QueryState); [`FilterSync`] wires them to
//! the navigation context and the external grid.

pub mod apply;
pub mod extract;
pub mod input;
pub mod reconcile;
pub mod reset;
pub mod sync;
pub mod widget;

pub use apply::{apply_change, Change};
pub use extract::extract_value;
pub use input::ControlInput;
pub use reconcile::{reconcile, StaleValue};
pub use reset::reset_filters;
pub use sync::FilterSync;

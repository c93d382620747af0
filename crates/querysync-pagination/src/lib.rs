pub mod summary;
pub mod view;

pub use summary::ResultsSummary;
pub use view::{PageLink, PaginationView, Paginator};

use querysync_core::config::SiteConfig;
use querysync_core::types::Location;
use querysync_url::{page_href, page_number, QueryState};
use serde::Serialize;
use tracing::warn;

use crate::summary::ResultsSummary;

/// A visible previous/next affordance.
///
/// - `offset`: pages relative to the current one
/// - `target_page`: resolved page number (never below 1)
/// - `href`: path for the target page plus the current query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub offset: i64,
    pub target_page: u64,
    pub href: String,
}

/// `None` means the affordance is hidden.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl PaginationView {
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Derives the pagination strip for one site layout.
#[derive(Debug, Clone)]
pub struct Paginator {
    root: String,
    page_size: u32,
}

impl Paginator {
    pub fn new(root: impl Into<String>, page_size: u32) -> Self {
        Self { root: root.into(), page_size: page_size.max(1) }
    }

    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(site.root(), site.paginate)
    }

    /// View for raw summary text; unrecognized text hides both links.
    pub fn view_for_text(&self, summary: &str, location: &Location) -> PaginationView {
        match summary.parse::<ResultsSummary>() {
            Ok(summary) => self.view(&summary, location),
            Err(err) => {
                warn!(error = %err, "hiding pagination");
                PaginationView::hidden()
            }
        }
    }

    pub fn view(&self, summary: &ResultsSummary, location: &Location) -> PaginationView {
        let ResultsSummary::Showing { start, end, total } = *summary else {
            return PaginationView::hidden();
        };
        let current = page_number(&location.pathname);
        let search = QueryState::parse(&location.search).to_search();

        let mut view = PaginationView::hidden();
        if end < total {
            view.next = Some(self.link(current, 1, &search));
        }
        if start > 1 {
            view.previous = Some(self.link(current, -1, &search));
        } else if summary.is_out_of_range() {
            let last_page = total.div_ceil(u64::from(self.page_size));
            let offset = i64::try_from(last_page).unwrap_or(i64::MAX) - i64::from(current);
            view.previous = Some(self.link(current, offset, &search));
            view.next = None;
        }
        view
    }

    fn link(&self, current: u32, offset: i64, search: &str) -> PageLink {
        let target = i64::from(current).saturating_add(offset).max(1);
        PageLink {
            offset,
            target_page: u64::try_from(target).unwrap_or(1),
            href: format!("{}{search}", page_href(&self.root, current, offset)),
        }
    }
}

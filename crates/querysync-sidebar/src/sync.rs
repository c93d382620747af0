use querysync_core::config::SyncConfig;
use querysync_core::error::Result;
use querysync_core::traits::{ContentSource, Navigator, Notifier, PostGrid};
use querysync_core::types::{ControlId, Sidebar};
use querysync_pagination::{PaginationView, Paginator};
use querysync_url::{root_with_query, soft_navigate, QueryState};
use tracing::{info, warn};

use crate::apply::{apply_change, Change};
use crate::reconcile::reconcile;
use crate::reset::reset_filters;

/// Sidebar, URL and pagination strip of one listing page.
///
/// The URL query held by `navigator` is authoritative; the sidebar is a
/// cache of it. Every entry point runs to completion before returning.
pub struct FilterSync<N, S, G, A>
where
    N: Navigator,
    S: ContentSource,
    G: PostGrid<S::Item>,
    A: Notifier,
{
    sidebar: Sidebar,
    navigator: N,
    source: S,
    grid: G,
    notifier: A,
    settings: SyncConfig,
    paginator: Paginator,
    pagination: PaginationView,
}

impl<N, S, G, A> FilterSync<N, S, G, A>
where
    N: Navigator,
    S: ContentSource,
    G: PostGrid<S::Item>,
    A: Notifier,
{
    pub fn new(sidebar: Sidebar, navigator: N, source: S, grid: G, notifier: A, settings: SyncConfig) -> Self {
        let paginator = Paginator::from_site(&settings.site);
        Self { sidebar, navigator, source, grid, notifier, settings, paginator, pagination: PaginationView::hidden() }
    }

    /// Page-load sequence: defaults first, then whatever the URL says.
    pub fn on_load(&mut self) {
        info!(url = %self.navigator.location(), "page load");
        self.reset_all(false);
        self.reconcile();
        self.sync_pagination_buttons();
    }

    /// User-interaction entry point for a changed control.
    pub fn update_post_grid(&mut self, id: ControlId) -> Result<Change> {
        let change = self.apply_control_change_to_url(id)?;
        let items = self.source.filtered_items(&self.navigator.location());
        self.grid.populate(items);
        Ok(change)
    }

    /// Writes control `id` into the query, moves back to page 1, then
    /// reconciles and repaginates.
    pub fn apply_control_change_to_url(&mut self, id: ControlId) -> Result<Change> {
        let mut query = self.query();
        let change = apply_change(&mut self.sidebar, &mut query, id)?;
        self.write_query(&query);
        self.reconcile();
        self.sync_pagination_buttons();
        Ok(change)
    }

    /// Applies the URL query to the sidebar, recovering from values no
    /// single-select offers.
    pub fn reconcile(&mut self) {
        let mut query = self.query();
        let stale = reconcile(&mut self.sidebar, &query);
        if stale.is_empty() {
            return;
        }
        for value in &stale {
            warn!(name = %value.name, value = %value.value, "reverting stale filter");
            self.notifier.alert(&value.message());
            query.delete(&value.name);
        }
        self.write_query(&query);
        self.grid.populate(self.source.all_items());
    }

    pub fn sync_pagination_buttons(&mut self) -> &PaginationView {
        let summary = self.grid.results_summary();
        self.pagination = self.paginator.view_for_text(&summary, &self.navigator.location());
        &self.pagination
    }

    /// Resets every filter control. With `also_reset_url`, drops the query
    /// from the current path and renders the unfiltered dataset.
    pub fn reset_all(&mut self, also_reset_url: bool) {
        let count = reset_filters(&mut self.sidebar, &self.settings.filters.class);
        info!(count, also_reset_url, "reset filters");
        if also_reset_url {
            let pathname = self.navigator.location().pathname;
            soft_navigate(&mut self.navigator, self.settings.history.mode, &pathname);
            self.grid.populate(self.source.all_items());
        }
    }

    /// The query as currently held by the navigation context.
    pub fn query(&self) -> QueryState {
        QueryState::parse(&self.navigator.location().search)
    }

    fn write_query(&mut self, query: &QueryState) {
        let url = root_with_query(&self.settings.site.root(), query);
        soft_navigate(&mut self.navigator, self.settings.history.mode, &url);
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn notifier(&self) -> &A {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut A {
        &mut self.notifier
    }

    pub fn pagination(&self) -> &PaginationView {
        &self.pagination
    }
}

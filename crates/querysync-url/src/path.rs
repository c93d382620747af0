//! Path conventions: `<root>` is page 1, `<root>page/<n>` is page n.

use std::sync::LazyLock;

use querysync_core::config::HistoryMode;
use querysync_core::traits::Navigator;
use regex::Regex;
use tracing::debug;

use crate::query::QueryState;

static PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"page/([0-9]+)").expect("Invalid page regex"));

/// Page number embedded in `pathname`; 1 when absent or out of range.
pub fn page_number(pathname: &str) -> u32 {
    PAGE_REGEX
        .captures(pathname)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// Path of the page `offset` pages away from `current`. Anything at or
/// below page 1 collapses to `root`.
pub fn page_href(root: &str, current: u32, offset: i64) -> String {
    let target = i64::from(current).saturating_add(offset);
    if target <= 1 {
        root.to_string()
    } else {
        format!("{root}page/{target}")
    }
}

/// `root`, plus the serialized query when there is one.
pub fn root_with_query(root: &str, query: &QueryState) -> String {
    format!("{root}{}", query.to_search())
}

/// Rewrites the location without reloading, honoring the history mode.
pub fn soft_navigate<N: Navigator + ?Sized>(navigator: &mut N, mode: HistoryMode, url: &str) {
    debug!(url, ?mode, "soft navigation");
    match mode {
        HistoryMode::Push => navigator.push_state(url),
        HistoryMode::Replace => navigator.replace_state(url),
    }
}

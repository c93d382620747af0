use querysync_core::types::{Sidebar, Widget};
use querysync_url::QueryState;
use tracing::{debug, warn};

use crate::widget::{select_first, Applied, WidgetState};

/// A query value no single-select option carries (stale bookmark, removed
/// choice). The select has already been put back on its first option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleValue {
    pub name: String,
    pub value: String,
}

impl StaleValue {
    pub fn message(&self) -> String {
        format!("The {} \"{}\" is not present in the database!\nReverting to \"Any\".", self.name, self.value)
    }
}

/// Pushes every query entry into all controls of the same name.
///
/// Controls whose name is absent from `query` are left alone, so callers
/// reset first when they want a clean slate. Running it twice on the same
/// query changes nothing the second time. Once a name turns out stale its
/// later entries are skipped, since the caller drops the whole name.
pub fn reconcile(sidebar: &mut Sidebar, query: &QueryState) -> Vec<StaleValue> {
    let mut stale: Vec<StaleValue> = Vec::new();
    for (name, value) in query.iter() {
        if stale.iter().any(|s| s.name == name) {
            debug!(name, value, "skipping entry of stale filter");
            continue;
        }
        for control in sidebar.iter_mut().filter(|c| c.name == name) {
            if control.widget.apply_query_value(value) == Applied::Unmatched {
                warn!(name, value, "query value matches no option");
                if let Widget::Select { options, .. } = &mut control.widget {
                    select_first(options);
                }
                stale.push(StaleValue { name: name.to_string(), value: value.to_string() });
            }
        }
    }
    debug!(entries = query.len(), stale = stale.len(), "reconciled sidebar");
    stale
}

use querysync_core::types::Sidebar;
use tracing::debug;

use crate::widget::WidgetState;

/// Puts every control carrying `class` back to its default. Returns how
/// many were touched.
pub fn reset_filters(sidebar: &mut Sidebar, class: &str) -> usize {
    let mut count = 0;
    for control in sidebar.iter_mut().filter(|c| c.has_class(class)) {
        control.widget.reset_to_default();
        count += 1;
    }
    debug!(class, count, "reset filters");
    count
}

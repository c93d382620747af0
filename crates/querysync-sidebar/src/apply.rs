use querysync_core::error::{Error, Result};
use querysync_core::types::{ControlId, Sidebar, Widget};
use querysync_url::QueryState;
use tracing::debug;

use crate::extract::extract_value;
use crate::widget::WidgetState;

/// What a control change did to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The control is back at its match-everything value.
    Cleared,
    /// An already-active checkable choice was clicked again and unchecked.
    ToggledOff,
    Set(String),
}

/// Folds the current value of control `id` into `query`.
///
/// Clicking a checkbox or radio whose value already equals the query entry
/// for its name unchecks it. For checkbox groups that compares the whole
/// group's encoding with the clicked value, so it only fires when the
/// clicked box is the group's sole checked member.
pub fn apply_change(sidebar: &mut Sidebar, query: &mut QueryState, id: ControlId) -> Result<Change> {
    let control = sidebar.get(id).ok_or_else(|| Error::NotFound(format!("control #{id}")))?;
    let value = extract_value(sidebar, control);
    let name = control.name.clone();
    let is_default = control.widget.is_default_value(&value);
    let is_checkable = control.widget.is_checkable();

    let change = if is_default {
        query.delete(&name);
        Change::Cleared
    } else if is_checkable && query.get(&name) == Some(value.as_str()) {
        if let Some(Widget::Checkbox { checked, .. } | Widget::Radio { checked, .. }) =
            sidebar.get_mut(id).map(|c| &mut c.widget)
        {
            *checked = false;
        }
        query.delete(&name);
        Change::ToggledOff
    } else {
        query.set(&name, &value);
        Change::Set(value)
    };
    debug!(name = %name, ?change, "applied control change");
    Ok(change)
}

//! Per-kind behavior of a control: how a query value lands on it, what its
//! default looks like and how it resets.

use querysync_core::types::Widget;

/// Outcome of pushing a query value into one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Updated,
    /// A single-select had no option carrying the value; nothing is selected.
    Unmatched,
    /// The control kind ignores query values.
    Skipped,
}

pub trait WidgetState {
    /// Makes the control show `value` as encoded in the query.
    fn apply_query_value(&mut self, value: &str) -> Applied;

    /// Back to the state the page markup started with.
    fn reset_to_default(&mut self);

    /// Whether `value` (as extracted from this control) filters nothing.
    fn is_default_value(&self, value: &str) -> bool;
}

impl WidgetState for Widget {
    fn apply_query_value(&mut self, value: &str) -> Applied {
        match self {
            Widget::RangeSlider(slider) => {
                let handles: Vec<&str> = value.split('-').collect();
                slider.set_str(&handles);
                Applied::Updated
            }
            Widget::Select { multiple: true, options } => {
                let wanted: Vec<&str> = value.split(',').collect();
                for option in options.iter_mut() {
                    option.selected = wanted.contains(&option.value.as_str());
                }
                Applied::Updated
            }
            Widget::Select { multiple: false, options } => {
                let position = options.iter().position(|o| o.value == value);
                for (i, option) in options.iter_mut().enumerate() {
                    option.selected = Some(i) == position;
                }
                if position.is_some() { Applied::Updated } else { Applied::Unmatched }
            }
            Widget::Text { value: text } => {
                *text = value.to_string();
                Applied::Updated
            }
            Widget::Checkbox { value: own, checked } | Widget::Radio { value: own, checked } => {
                *checked = value.split(',').any(|v| v == own.as_str());
                Applied::Updated
            }
            Widget::Static { .. } => Applied::Skipped,
        }
    }

    fn reset_to_default(&mut self) {
        match self {
            Widget::Checkbox { checked, .. } | Widget::Radio { checked, .. } => *checked = false,
            Widget::RangeSlider(slider) => slider.reset(),
            Widget::Select { multiple: true, options } => {
                for option in options.iter_mut() {
                    option.selected = false;
                }
            }
            Widget::Select { multiple: false, options } => select_first(options),
            Widget::Text { .. } | Widget::Static { .. } => {}
        }
    }

    fn is_default_value(&self, value: &str) -> bool {
        value.is_empty() || matches!(self, Widget::RangeSlider(slider) if slider.is_min_maxed())
    }
}

/// Selects the first option (the "Any" entry) and nothing else.
pub(crate) fn select_first(options: &mut [querysync_core::types::SelectOption]) {
    for (i, option) in options.iter_mut().enumerate() {
        option.selected = i == 0;
    }
}

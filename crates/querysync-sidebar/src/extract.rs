use querysync_core::types::{FilterControl, Sidebar, Widget};

/// Semantic value of `control` as it would be written to the query.
///
/// A checkbox speaks for its whole group: the result lists every checked
/// checkable control sharing its name, in sidebar order.
pub fn extract_value(sidebar: &Sidebar, control: &FilterControl) -> String {
    match &control.widget {
        Widget::Select { options, .. } => options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join(","),
        Widget::Checkbox { .. } => sidebar
            .controls()
            .iter()
            .filter(|c| c.name == control.name && c.widget.is_checked())
            .filter_map(|c| match &c.widget {
                Widget::Checkbox { value, .. } | Widget::Radio { value, .. } => Some(value.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(","),
        Widget::Text { value } => value.clone(),
        Widget::RangeSlider(slider) => slider.encoded(),
        Widget::Radio { value, .. } => value.clone(),
        Widget::Static { value } => value.clone().unwrap_or_default(),
    }
}

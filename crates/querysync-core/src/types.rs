//! Domain types shared by the codec, the synchronizer and the pagination
//! controller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_FILTER_CLASS;

/// Position of a control inside its [`Sidebar`].
pub type ControlId = usize;

/// The kinds of filter control the synchronizer knows how to drive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    SingleSelect,
    MultiSelect,
    Text,
    Checkbox,
    Radio,
    RangeSlider,
    Static,
}

impl ControlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlKind::SingleSelect => "single-select",
            ControlKind::MultiSelect => "multi-select",
            ControlKind::Text => "text",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::RangeSlider => "range-slider",
            ControlKind::Static => "static",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), selected: false }
    }
}

/// A two (or more) handle range widget.
///
/// - `min`/`max`: configured range bounds
/// - `start`: handle positions the widget was created with
/// - `handles`: current handle positions, in handle order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeSlider {
    pub min: f64,
    pub max: f64,
    pub start: Vec<f64>,
    #[serde(default)]
    pub handles: Vec<f64>,
}

impl RangeSlider {
    pub fn new(min: f64, max: f64, start: Vec<f64>) -> Self {
        let mut slider = Self { min, max, start, handles: Vec::new() };
        slider.reset();
        slider
    }

    pub fn get(&self) -> &[f64] {
        &self.handles
    }

    /// Moves handles to the given positions, clamped into `[min, max]`.
    /// `None` entries and entries past the last handle are ignored.
    pub fn set(&mut self, values: &[Option<f64>]) {
        for (handle, value) in self.handles.iter_mut().zip(values) {
            if let Some(v) = value {
                *handle = v.max(self.min).min(self.max);
            }
        }
    }

    /// Parses each textual value; unparsable entries leave their handle alone.
    pub fn set_str<S: AsRef<str>>(&mut self, values: &[S]) {
        let parsed: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.as_ref().trim().parse::<f64>().ok().filter(|n| n.is_finite()))
            .collect();
        self.set(&parsed);
    }

    pub fn reset(&mut self) {
        self.handles = self.start.iter().map(|v| v.max(self.min).min(self.max)).collect();
    }

    /// True when the slider spans its whole range, i.e. filters nothing.
    pub fn is_min_maxed(&self) -> bool {
        match (self.handles.first(), self.handles.last()) {
            (Some(first), Some(last)) if self.handles.len() >= 2 => *first == self.min && *last == self.max,
            _ => false,
        }
    }

    /// Handle values joined with `-`; integral values have no fraction.
    pub fn encoded(&self) -> String {
        self.handles.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("-")
    }
}

/// The control-specific part of a [`FilterControl`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Widget {
    Select {
        #[serde(default)]
        multiple: bool,
        options: Vec<SelectOption>,
    },
    Text {
        #[serde(default)]
        value: String,
    },
    Checkbox {
        value: String,
        #[serde(default)]
        checked: bool,
    },
    Radio {
        value: String,
        #[serde(default)]
        checked: bool,
    },
    RangeSlider(RangeSlider),
    /// Anything else; only its fixed `value` attribute is observable.
    Static {
        #[serde(default)]
        value: Option<String>,
    },
}

impl Widget {
    pub fn kind(&self) -> ControlKind {
        match self {
            Widget::Select { multiple: true, .. } => ControlKind::MultiSelect,
            Widget::Select { multiple: false, .. } => ControlKind::SingleSelect,
            Widget::Text { .. } => ControlKind::Text,
            Widget::Checkbox { .. } => ControlKind::Checkbox,
            Widget::Radio { .. } => ControlKind::Radio,
            Widget::RangeSlider(_) => ControlKind::RangeSlider,
            Widget::Static { .. } => ControlKind::Static,
        }
    }

    /// Only checkboxes and radios toggle.
    pub fn is_checkable(&self) -> bool {
        matches!(self, Widget::Checkbox { .. } | Widget::Radio { .. })
    }

    pub fn is_checked(&self) -> bool {
        match self {
            Widget::Checkbox { checked, .. } | Widget::Radio { checked, .. } => *checked,
            _ => false,
        }
    }
}

/// One sidebar control.
///
/// `name` groups controls (checkbox groups share one) and is the query key.
/// `classes` mirrors the element's CSS classes; the filter class marks the
/// control as resettable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterControl {
    pub name: String,
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
    #[serde(flatten)]
    pub widget: Widget,
}

fn default_classes() -> Vec<String> {
    vec![DEFAULT_FILTER_CLASS.to_string()]
}

impl FilterControl {
    pub fn new(name: impl Into<String>, widget: Widget) -> Self {
        Self { name: name.into(), classes: default_classes(), widget }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn kind(&self) -> ControlKind {
        self.widget.kind()
    }
}

/// All controls of one page, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<FilterControl>", into = "Vec<FilterControl>")]
pub struct Sidebar {
    controls: Vec<FilterControl>,
}

impl From<Vec<FilterControl>> for Sidebar {
    fn from(controls: Vec<FilterControl>) -> Self {
        Self::new(controls)
    }
}

impl From<Sidebar> for Vec<FilterControl> {
    fn from(sidebar: Sidebar) -> Self {
        sidebar.controls
    }
}

impl Sidebar {
    pub fn new(mut controls: Vec<FilterControl>) -> Self {
        // A slider described without explicit handles sits at its start.
        for control in &mut controls {
            if let Widget::RangeSlider(slider) = &mut control.widget {
                if slider.handles.is_empty() {
                    slider.reset();
                }
            }
        }
        Self { controls }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, id: ControlId) -> Option<&FilterControl> {
        self.controls.get(id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut FilterControl> {
        self.controls.get_mut(id)
    }

    /// First control named `name` whose own value is `value` (checkbox and
    /// radio members), or simply the first control named `name`.
    pub fn find(&self, name: &str, value: Option<&str>) -> Option<ControlId> {
        self.controls.iter().position(|c| {
            c.name == name
                && match (value, &c.widget) {
                    (Some(v), Widget::Checkbox { value, .. } | Widget::Radio { value, .. }) => value == v,
                    _ => true,
                }
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FilterControl> {
        self.controls.iter_mut()
    }
}

/// The browser location as the synchronizer sees it.
///
/// `search` keeps its leading `?` and is empty when there is no query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    /// Splits a root-relative URL into path and query, dropping any fragment.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        let pathname = if path.is_empty() { "/".to_string() } else { path.to_string() };
        let search = if query.is_empty() { String::new() } else { format!("?{query}") };
        Self { pathname, search }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

#![allow(dead_code)]

use querysync_core::config::SyncConfig;
use querysync_core::traits::{ContentSource, Notifier, PostGrid};
use querysync_core::types::{FilterControl, Location, RangeSlider, SelectOption, Sidebar, Widget};
use querysync_sidebar::FilterSync;
use querysync_url::MemoryNavigator;

pub const LAYOUT: usize = 0;
pub const SIZE: usize = 1;
pub const OS_LINUX: usize = 2;
pub const OS_MAC: usize = 3;
pub const OS_WINDOWS: usize = 4;
pub const STAGGER_COLUMN: usize = 5;
pub const STAGGER_ROW: usize = 6;
pub const KEYS: usize = 7;
pub const QUERY: usize = 8;
pub const HIDDEN: usize = 9;

pub fn options(values: &[&str]) -> Vec<SelectOption> {
    values.iter().map(|v| SelectOption::new(*v)).collect()
}

pub fn sidebar() -> Sidebar {
    Sidebar::new(vec![
        FilterControl::new("layout", Widget::Select { multiple: false, options: options(&["", "qwerty", "colemak"]) }),
        FilterControl::new("size", Widget::Select { multiple: true, options: options(&["9", "10", "11", "12"]) }),
        FilterControl::new("os", Widget::Checkbox { value: "linux".into(), checked: false }),
        FilterControl::new("os", Widget::Checkbox { value: "mac".into(), checked: false }),
        FilterControl::new("os", Widget::Checkbox { value: "windows".into(), checked: false }),
        FilterControl::new("stagger", Widget::Radio { value: "column".into(), checked: false }),
        FilterControl::new("stagger", Widget::Radio { value: "row".into(), checked: false }),
        FilterControl::new("keys", Widget::RangeSlider(RangeSlider::new(30.0, 100.0, vec![30.0, 100.0]))),
        FilterControl::new("q", Widget::Text { value: String::new() }),
        FilterControl::new("build", Widget::Static { value: Some("v1".into()) }).with_classes(Vec::<String>::new()),
    ])
}

pub struct VecSource {
    pub all: Vec<String>,
    pub filtered: Vec<String>,
}

impl ContentSource for VecSource {
    type Item = String;

    fn all_items(&self) -> Vec<String> {
        self.all.clone()
    }

    fn filtered_items(&self, _location: &Location) -> Vec<String> {
        self.filtered.clone()
    }
}

#[derive(Default)]
pub struct RecordingGrid {
    pub renders: Vec<Vec<String>>,
    pub summary: String,
}

impl PostGrid<String> for RecordingGrid {
    fn populate(&mut self, items: Vec<String>) {
        self.renders.push(items);
    }

    fn results_summary(&self) -> String {
        self.summary.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub type Page = FilterSync<MemoryNavigator, VecSource, RecordingGrid, RecordingNotifier>;

pub fn page_with(url: &str, summary: &str, settings: SyncConfig) -> Page {
    page_for(sidebar(), url, summary, settings)
}

pub fn page_for(sidebar: Sidebar, url: &str, summary: &str, settings: SyncConfig) -> Page {
    let source = VecSource {
        all: vec!["a".into(), "b".into(), "c".into()],
        filtered: vec!["b".into()],
    };
    let grid = RecordingGrid { renders: Vec::new(), summary: summary.to_string() };
    FilterSync::new(sidebar, MemoryNavigator::new(url), source, grid, RecordingNotifier::default(), settings)
}

pub fn page(url: &str) -> Page {
    page_with(url, "Showing 1 to 20 of 20 results found", SyncConfig::default())
}

pub fn selected(sidebar: &Sidebar, id: usize) -> Vec<String> {
    match &sidebar.controls()[id].widget {
        Widget::Select { options, .. } => options.iter().filter(|o| o.selected).map(|o| o.value.clone()).collect(),
        other => panic!("control {id} is not a select: {other:?}"),
    }
}

pub fn checked(sidebar: &Sidebar, id: usize) -> bool {
    sidebar.controls()[id].widget.is_checked()
}

pub fn handles(sidebar: &Sidebar, id: usize) -> Vec<f64> {
    match &sidebar.controls()[id].widget {
        Widget::RangeSlider(slider) => slider.get().to_vec(),
        other => panic!("control {id} is not a slider: {other:?}"),
    }
}

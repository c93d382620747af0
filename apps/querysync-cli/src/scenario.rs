//! Scenario files: a page, its sidebar and a script of user actions.
//!
//! ```json
//! {
//!   "url": "/page/2/?size=9",
//!   "summary": "Showing 21 to 40 of 100 results found",
//!   "sidebar": [{"name": "size", "kind": "select", "multiple": true, "options": [{"value": "9"}]}],
//!   "items": ["a", "b"],
//!   "filtered_items": ["b"],
//!   "events": [{"action": "select", "name": "size", "values": []}]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use querysync_core::config::SyncConfig;
use querysync_core::error::Error;
use querysync_core::traits::{ContentSource, Navigator, Notifier, PostGrid};
use querysync_core::types::{ControlId, ControlKind, Location, Sidebar};
use querysync_pagination::PaginationView;
use querysync_sidebar::{extract_value, ControlInput, FilterSync};
use querysync_url::MemoryNavigator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub url: String,
    pub sidebar: Sidebar,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub filtered_items: Vec<Value>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Event {
    Select { name: String, values: Vec<String> },
    Check { name: String, value: String },
    Uncheck { name: String, value: String },
    Text { name: String, text: String },
    Slider { name: String, handles: Vec<f64> },
    /// The "clear all filters" button.
    Reset,
    /// The grid now reports a different summary line.
    Summary { text: String },
}

impl Event {
    fn label(&self) -> String {
        match self {
            Event::Select { name, values } => format!("select {name}={}", values.join(",")),
            Event::Check { name, value } => format!("check {name}={value}"),
            Event::Uncheck { name, value } => format!("uncheck {name}={value}"),
            Event::Text { name, text } => format!("text {name}={text}"),
            Event::Slider { name, handles } => {
                format!("slider {name}={}", handles.iter().map(f64::to_string).collect::<Vec<_>>().join("-"))
            }
            Event::Reset => "reset".to_string(),
            Event::Summary { text } => format!("summary {text}"),
        }
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ControlValue {
    pub name: String,
    pub value: String,
}

/// State of the page after one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    pub url: String,
    pub values: Vec<ControlValue>,
    pub pagination: PaginationView,
    pub alerts: Vec<String>,
    /// Item count of each render triggered by this step.
    pub renders: Vec<usize>,
}

pub struct ScenarioSource {
    all: Vec<Value>,
    filtered: Vec<Value>,
}

impl ContentSource for ScenarioSource {
    type Item = Value;

    fn all_items(&self) -> Vec<Value> {
        self.all.clone()
    }

    fn filtered_items(&self, _location: &Location) -> Vec<Value> {
        self.filtered.clone()
    }
}

#[derive(Default)]
pub struct ScenarioGrid {
    summary: String,
    renders: Vec<usize>,
}

impl PostGrid<Value> for ScenarioGrid {
    fn populate(&mut self, items: Vec<Value>) {
        info!(count = items.len(), "render grid");
        self.renders.push(items.len());
    }

    fn results_summary(&self) -> String {
        self.summary.clone()
    }
}

#[derive(Default)]
pub struct CollectingNotifier {
    alerts: Vec<String>,
}

impl Notifier for CollectingNotifier {
    fn alert(&mut self, message: &str) {
        warn!(message, "alert");
        self.alerts.push(message.to_string());
    }
}

type ReplayPage = FilterSync<MemoryNavigator, ScenarioSource, ScenarioGrid, CollectingNotifier>;

/// Loads the page, then plays every event in order.
pub fn replay(scenario: Scenario, settings: SyncConfig) -> anyhow::Result<Vec<StepReport>> {
    let source = ScenarioSource { all: scenario.items, filtered: scenario.filtered_items };
    let grid = ScenarioGrid { summary: scenario.summary, renders: Vec::new() };
    let mut page: ReplayPage = FilterSync::new(
        scenario.sidebar,
        MemoryNavigator::new(&scenario.url),
        source,
        grid,
        CollectingNotifier::default(),
        settings,
    );

    let mut reports = Vec::with_capacity(scenario.events.len() + 1);
    page.on_load();
    reports.push(snapshot(&mut page, "load".to_string()));

    for event in scenario.events {
        let label = event.label();
        info!(step = %label, "replay");
        play(&mut page, &event).with_context(|| format!("Step '{label}' failed"))?;
        reports.push(snapshot(&mut page, label));
    }
    Ok(reports)
}

fn play(page: &mut ReplayPage, event: &Event) -> anyhow::Result<()> {
    match event {
        Event::Select { name, values } => {
            let id = locate(page.sidebar(), name, None)?;
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            page.sidebar_mut().select_values(id, &values)?;
            page.update_post_grid(id)?;
        }
        Event::Check { name, value } | Event::Uncheck { name, value } => {
            let id = locate(page.sidebar(), name, Some(value.as_str()))?;
            page.sidebar_mut().set_checked(id, matches!(event, Event::Check { .. }))?;
            page.update_post_grid(id)?;
        }
        Event::Text { name, text } => {
            let id = locate(page.sidebar(), name, None)?;
            page.sidebar_mut().set_text(id, text)?;
            page.update_post_grid(id)?;
        }
        Event::Slider { name, handles } => {
            let id = locate(page.sidebar(), name, None)?;
            page.sidebar_mut().set_slider(id, handles)?;
            page.update_post_grid(id)?;
        }
        Event::Reset => page.reset_all(true),
        Event::Summary { text } => {
            page.grid_mut().summary.clone_from(text);
            page.sync_pagination_buttons();
        }
    }
    Ok(())
}

fn locate(sidebar: &Sidebar, name: &str, value: Option<&str>) -> Result<ControlId, Error> {
    sidebar.find(name, value).ok_or_else(|| match value {
        Some(value) => Error::NotFound(format!("control {name}={value}")),
        None => Error::NotFound(format!("control {name}")),
    })
}

/// Captures the page and drains per-step alerts and renders.
fn snapshot(page: &mut ReplayPage, step: String) -> StepReport {
    let sidebar = page.sidebar();
    let mut values: Vec<ControlValue> = Vec::new();
    for control in sidebar.controls() {
        if values.iter().any(|v| v.name == control.name) {
            continue;
        }
        // A radio's own value says nothing about which member is chosen.
        let value = if control.kind() == ControlKind::Radio {
            sidebar
                .controls()
                .iter()
                .find(|c| c.name == control.name && c.widget.is_checked())
                .map(|c| extract_value(sidebar, c))
                .unwrap_or_default()
        } else {
            extract_value(sidebar, control)
        };
        values.push(ControlValue { name: control.name.clone(), value });
    }
    let url = page.navigator().location().href();
    let pagination = page.pagination().clone();
    let alerts = std::mem::take(&mut page.notifier_mut().alerts);
    let renders = std::mem::take(&mut page.grid_mut().renders);
    StepReport { step, url, values, pagination, alerts, renders }
}

//! What the user does to a control before its change event fires.

use querysync_core::error::{Error, Result};
use querysync_core::types::{ControlId, FilterControl, Sidebar, Widget};

pub trait ControlInput {
    /// Chooses options by value. Single-selects take the first value only.
    fn select_values(&mut self, id: ControlId, values: &[&str]) -> Result<()>;

    /// Ticks or clears a checkbox/radio. Checking a radio clears the rest
    /// of its group.
    fn set_checked(&mut self, id: ControlId, checked: bool) -> Result<()>;

    fn set_text(&mut self, id: ControlId, text: &str) -> Result<()>;

    fn set_slider(&mut self, id: ControlId, handles: &[f64]) -> Result<()>;
}

fn control_mut(sidebar: &mut Sidebar, id: ControlId) -> Result<&mut FilterControl> {
    sidebar.get_mut(id).ok_or_else(|| Error::NotFound(format!("control #{id}")))
}

fn wrong_kind(control: &FilterControl, operation: &'static str) -> Error {
    Error::ControlKind { name: control.name.clone(), kind: control.kind().as_str(), operation }
}

impl ControlInput for Sidebar {
    fn select_values(&mut self, id: ControlId, values: &[&str]) -> Result<()> {
        let control = control_mut(self, id)?;
        let name = control.name.clone();
        let Widget::Select { multiple, options } = &mut control.widget else {
            return Err(wrong_kind(control, "select options"));
        };
        if let Some(missing) = values.iter().find(|v| !options.iter().any(|o| o.value == **v)) {
            return Err(Error::NotFound(format!("option '{missing}' of '{name}'")));
        }
        let wanted: &[&str] = if *multiple { values } else { &values[..values.len().min(1)] };
        for option in options.iter_mut() {
            option.selected = wanted.contains(&option.value.as_str());
        }
        Ok(())
    }

    fn set_checked(&mut self, id: ControlId, checked: bool) -> Result<()> {
        let control = control_mut(self, id)?;
        let is_radio = matches!(control.widget, Widget::Radio { .. });
        match &mut control.widget {
            Widget::Checkbox { checked: state, .. } | Widget::Radio { checked: state, .. } => *state = checked,
            _ => return Err(wrong_kind(control, "be checked")),
        }
        if is_radio && checked {
            let name = control.name.clone();
            for (other, c) in self.iter_mut().enumerate() {
                if other != id && c.name == name {
                    if let Widget::Radio { checked: state, .. } = &mut c.widget {
                        *state = false;
                    }
                }
            }
        }
        Ok(())
    }

    fn set_text(&mut self, id: ControlId, text: &str) -> Result<()> {
        let control = control_mut(self, id)?;
        match &mut control.widget {
            Widget::Text { value } => {
                *value = text.to_string();
                Ok(())
            }
            _ => Err(wrong_kind(control, "take text")),
        }
    }

    fn set_slider(&mut self, id: ControlId, handles: &[f64]) -> Result<()> {
        let control = control_mut(self, id)?;
        match &mut control.widget {
            Widget::RangeSlider(slider) => {
                let values: Vec<Option<f64>> = handles.iter().copied().map(Some).collect();
                slider.set(&values);
                Ok(())
            }
            _ => Err(wrong_kind(control, "slide")),
        }
    }
}

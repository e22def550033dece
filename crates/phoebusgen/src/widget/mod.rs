// crates/phoebusgen/src/widget/mod.rs

//! Widget constructors.
//!
//! Every widget wraps one `<widget type="..." version="2.0.0">` element. The
//! [`Widget`] trait carries the properties every widget has; the property
//! groups in [`props`] add the rest.

pub mod props;

use crate::element::Element;
use crate::error::Result;
use crate::properties::{self, set_bool, set_int, set_text};
use crate::types::{ActionTarget, BoolValue, Number};

/// Schema version written on every widget and display element.
pub const WIDGET_VERSION: &str = "2.0.0";

/// Common behaviour of all widgets.
pub trait Widget {
    /// Value of the `type` attribute.
    const KIND: &'static str;

    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    fn into_element(self) -> Element
    where
        Self: Sized;

    /// Current value of the `name` property.
    fn widget_name(&self) -> Option<&str> {
        self.element().find("name").and_then(Element::text)
    }

    fn name(&mut self, name: &str) -> &mut Self {
        set_text(self.element_mut(), "name", name);
        self
    }

    fn x(&mut self, x: i64) -> &mut Self {
        set_int(self.element_mut(), "x", x);
        self
    }

    fn y(&mut self, y: i64) -> &mut Self {
        set_int(self.element_mut(), "y", y);
        self
    }

    fn width(&mut self, width: i64) -> &mut Self {
        set_int(self.element_mut(), "width", width);
        self
    }

    fn height(&mut self, height: i64) -> &mut Self {
        set_int(self.element_mut(), "height", height);
        self
    }

    fn position(&mut self, x: i64, y: i64) -> &mut Self {
        self.x(x).y(y)
    }

    fn size(&mut self, width: i64, height: i64) -> &mut Self {
        self.width(width).height(height)
    }

    fn visible(&mut self, visible: bool) -> &mut Self {
        set_bool(self.element_mut(), "visible", visible);
        self
    }

    fn tooltip(&mut self, tooltip: &str) -> &mut Self {
        set_text(self.element_mut(), "tooltip", tooltip);
        self
    }

    fn add_macro(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        properties::add_macro(self.element_mut(), name, value)?;
        Ok(self)
    }

    /// Sets an arbitrary property by tag, for properties without a typed setter.
    fn generic_property(&mut self, tag: &str, value: Option<&str>) -> Result<&mut Self> {
        properties::checked_generic_property(self.element_mut(), tag, value)?;
        Ok(self)
    }

    fn integer_property(&mut self, tag: &str, value: impl Into<Number>) -> Result<&mut Self> {
        properties::integer_property(self.element_mut(), tag, value)?;
        Ok(self)
    }

    fn number_property(&mut self, tag: &str, value: impl Into<Number>) -> Result<&mut Self> {
        properties::number_property(self.element_mut(), tag, value)?;
        Ok(self)
    }

    fn boolean_property(&mut self, tag: &str, value: impl Into<BoolValue>) -> Result<&mut Self> {
        properties::boolean_property(self.element_mut(), tag, value)?;
        Ok(self)
    }

    /// Appends an action to the widget's action list.
    fn add_action(&mut self, action: Action) -> Result<&mut Self> {
        let element = action.to_element()?;
        self.element_mut().get_or_insert("actions").push(element);
        Ok(self)
    }

    /// Run all actions at once instead of offering a menu.
    fn actions_execute_as_one(&mut self, as_one: bool) -> &mut Self {
        self.element_mut()
            .get_or_insert("actions")
            .set_attribute("execute_as_one", properties::bool_text(as_one));
        self
    }

    fn action_open_display(
        &mut self,
        file: &str,
        target: ActionTarget,
        description: Option<&str>,
    ) -> &mut Self {
        let action = Action::OpenDisplay {
            file: file.to_string(),
            target,
            description: description.map(str::to_string),
            macros: Vec::new(),
        };
        // Without macros there is nothing to validate.
        push_action(self.element_mut(), action.element_unchecked());
        self
    }

    fn action_write_pv(&mut self, pv: &str, value: &str, description: Option<&str>) -> &mut Self {
        let action = Action::WritePv {
            pv: pv.to_string(),
            value: value.to_string(),
            description: description.map(str::to_string),
        };
        push_action(self.element_mut(), action.element_unchecked());
        self
    }

    fn action_execute_command(&mut self, command: &str, description: Option<&str>) -> &mut Self {
        let action = Action::ExecuteCommand {
            command: command.to_string(),
            description: description.map(str::to_string),
        };
        push_action(self.element_mut(), action.element_unchecked());
        self
    }

    fn action_open_file(&mut self, file: &str, description: Option<&str>) -> &mut Self {
        let action = Action::OpenFile {
            file: file.to_string(),
            description: description.map(str::to_string),
        };
        push_action(self.element_mut(), action.element_unchecked());
        self
    }

    fn action_open_webpage(&mut self, url: &str, description: Option<&str>) -> &mut Self {
        let action = Action::OpenWebpage {
            url: url.to_string(),
            description: description.map(str::to_string),
        };
        push_action(self.element_mut(), action.element_unchecked());
        self
    }
}

fn push_action(root: &mut Element, action: Element) {
    root.get_or_insert("actions").push(action);
}

/// An entry of a widget's `<actions>` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenDisplay {
        file: String,
        target: ActionTarget,
        description: Option<String>,
        macros: Vec<(String, String)>,
    },
    WritePv {
        pv: String,
        value: String,
        description: Option<String>,
    },
    ExecuteCommand {
        command: String,
        description: Option<String>,
    },
    OpenFile {
        file: String,
        description: Option<String>,
    },
    OpenWebpage {
        url: String,
        description: Option<String>,
    },
}

impl Action {
    /// Value of the action's `type` attribute.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::OpenDisplay { .. } => "open_display",
            Action::WritePv { .. } => "write_pv",
            Action::ExecuteCommand { .. } => "command",
            Action::OpenFile { .. } => "open_file",
            Action::OpenWebpage { .. } => "open_webpage",
        }
    }

    fn default_description(&self) -> &'static str {
        match self {
            Action::OpenDisplay { .. } => "Open Display",
            Action::WritePv { .. } => "Write PV",
            Action::ExecuteCommand { .. } => "Execute Command",
            Action::OpenFile { .. } => "Open File",
            Action::OpenWebpage { .. } => "Open Webpage",
        }
    }

    /// Builds the `<action>` element, validating macro names.
    pub fn to_element(&self) -> Result<Element> {
        let mut element = self.element_unchecked();
        if let Action::OpenDisplay { macros, .. } = self {
            for (name, value) in macros {
                properties::add_macro(&mut element, name, value)?;
            }
        }
        Ok(element)
    }

    // Everything except the macros of an open-display action.
    fn element_unchecked(&self) -> Element {
        let mut element = Element::new("action").with_attribute("type", self.kind());
        let description = match self {
            Action::OpenDisplay {
                file,
                target,
                description,
                ..
            } => {
                set_text(&mut element, "file", file);
                set_text(&mut element, "target", target.as_str());
                description
            }
            Action::WritePv {
                pv,
                value,
                description,
            } => {
                set_text(&mut element, "pv_name", pv);
                set_text(&mut element, "value", value);
                description
            }
            Action::ExecuteCommand {
                command,
                description,
            } => {
                set_text(&mut element, "command", command);
                description
            }
            Action::OpenFile { file, description } => {
                set_text(&mut element, "file", file);
                description
            }
            Action::OpenWebpage { url, description } => {
                set_text(&mut element, "url", url);
                description
            }
        };
        let description = description.as_deref().unwrap_or(self.default_description());
        set_text(&mut element, "description", description);
        element
    }
}

/// Creates the `<widget>` element with the geometry every widget carries.
pub(crate) fn widget_element(
    kind: &str,
    name: &str,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
) -> Element {
    let mut root = Element::new("widget")
        .with_attribute("type", kind)
        .with_attribute("version", WIDGET_VERSION);
    set_text(&mut root, "name", name);
    set_int(&mut root, "x", x);
    set_int(&mut root, "y", y);
    set_int(&mut root, "width", width);
    set_int(&mut root, "height", height);
    root
}

/// Declares a widget struct, its `Widget` impl and the property groups it supports.
macro_rules! widget {
    ($(#[$meta:meta])* $ty:ident => $kind:literal $(: $($prop:ident),+)? $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            root: $crate::element::Element,
        }

        impl $crate::widget::Widget for $ty {
            const KIND: &'static str = $kind;

            fn element(&self) -> &$crate::element::Element {
                &self.root
            }

            fn element_mut(&mut self) -> &mut $crate::element::Element {
                &mut self.root
            }

            fn into_element(self) -> $crate::element::Element {
                self.root
            }
        }

        impl From<$ty> for $crate::element::Element {
            fn from(widget: $ty) -> Self {
                widget.root
            }
        }

        $($(impl $crate::widget::props::$prop for $ty {})+)?
    };
}

mod controls;
mod graphics;
mod monitors;
mod plots;
mod structure;

pub use controls::{
    ActionButton, BooleanButton, CheckBox, ChoiceButton, ComboBox, FileSelector, RadioButton,
    ScaledSlider, SlideButton, Spinner, TextEntry,
};
pub use graphics::{Arc, Ellipse, Label, Picture, Polygon, Polyline, Rectangle};
pub use monitors::{
    ByteMonitor, Image, Led, Meter, MultiStateLed, ProgressBar, Tank, TextUpdate, Thermometer,
};
pub use plots::{Axis, StripChart, Trace, XyPlot};
pub use structure::{EmbeddedDisplay, Group, Tabs};

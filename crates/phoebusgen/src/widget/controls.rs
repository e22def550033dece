// crates/phoebusgen/src/widget/controls.rs

//! Widgets that write to PVs or trigger actions.

use super::props::{LabelText, Text};
use super::{Widget, widget_element};
use crate::definitions::ColorValue;
use crate::element::Element;
use crate::properties::{self, option_property, set_bool, set_text};
use crate::types::{ButtonMode, FileComponent};

fn pv_widget(kind: &str, name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Element {
    let mut root = widget_element(kind, name, x, y, width, height);
    set_text(&mut root, "pv_name", pv);
    root
}

widget! {
    /// A button that runs its actions when pressed.
    ActionButton => "action_button": PvName, Text, ForegroundColor, BackgroundColor,
        Transparent, FontProperty, Rotation, Enabled, Border
}

impl ActionButton {
    pub fn new(name: &str, text: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut button = Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        };
        button.text(text);
        button
    }
}

widget! {
    BooleanButton => "bool_button": PvName, Bit, OnOffColors, OnOffLabels, ForegroundColor,
        BackgroundColor, FontProperty, Enabled, Border
}

impl BooleanButton {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn mode(&mut self, mode: ButtonMode) -> &mut Self {
        option_property(&mut self.root, "mode", mode);
        self
    }

    pub fn show_led(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_led", show);
        self
    }

    pub fn labels_from_pv(&mut self, from_pv: bool) -> &mut Self {
        set_bool(&mut self.root, "labels_from_pv", from_pv);
        self
    }
}

widget! {
    CheckBox => "checkbox": PvName, LabelText, Bit, ForegroundColor, FontProperty, AutoSize,
        Enabled, Border
}

impl CheckBox {
    pub fn new(name: &str, label: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut check = Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        };
        check.label(label);
        check
    }
}

widget! {
    /// A row or column of buttons, one per item.
    ChoiceButton => "choice": PvName, Items, ForegroundColor, BackgroundColor, FontProperty,
        Horizontal, Enabled, Border
}

impl ChoiceButton {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn selected_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "selected_color", color);
        self
    }
}

widget! {
    ComboBox => "combo": PvName, Items, ForegroundColor, BackgroundColor, FontProperty,
        Enabled, Border
}

impl ComboBox {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    /// Allow values other than the listed items.
    pub fn editable(&mut self, editable: bool) -> &mut Self {
        set_bool(&mut self.root, "editable", editable);
        self
    }
}

widget! {
    RadioButton => "radio": PvName, Items, ForegroundColor, FontProperty, Horizontal, Enabled,
        Border
}

impl RadioButton {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }
}

widget! {
    TextEntry => "textentry": PvName, ForegroundColor, BackgroundColor, FontProperty,
        Formatting, Alignment, WrapWords, Enabled, Border
}

impl TextEntry {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn multi_line(&mut self, multi_line: bool) -> &mut Self {
        set_bool(&mut self.root, "multi_line", multi_line);
        self
    }
}

widget! {
    Spinner => "spinner": PvName, ForegroundColor, BackgroundColor, FontProperty, Formatting,
        Limits, Increment, Enabled, Border
}

impl Spinner {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn buttons_on_left(&mut self, on_left: bool) -> &mut Self {
        set_bool(&mut self.root, "buttons_on_left", on_left);
        self
    }
}

widget! {
    ScaledSlider => "scaledslider": PvName, ForegroundColor, BackgroundColor, FontProperty,
        Limits, Increment, Horizontal, Scale, Transparent, Enabled, Border
}

impl ScaledSlider {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }
}

widget! {
    SlideButton => "slide_button": PvName, LabelText, Bit, OnOffColors, ForegroundColor,
        FontProperty, AutoSize, Enabled, Border
}

impl SlideButton {
    pub fn new(name: &str, label: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut slide = Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        };
        slide.label(label);
        slide
    }
}

widget! {
    /// Opens a file dialog and writes the chosen path to a PV.
    FileSelector => "fileselector": PvName, Enabled, Border
}

impl FileSelector {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    /// Which part of the selected path is written to the PV.
    pub fn component(&mut self, component: FileComponent) -> &mut Self {
        option_property(&mut self.root, "component", component);
        self
    }
}

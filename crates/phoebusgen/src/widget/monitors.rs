// crates/phoebusgen/src/widget/monitors.rs

//! Read-only widgets that show a PV value.

use super::{Widget, widget_element};
use crate::definitions::ColorValue;
use crate::element::Element;
use crate::properties::{self, option_property, set_bool, set_int, set_text};
use crate::types::{ColorMode, Interpolation};

/// Creates a widget element and sets its PV.
fn pv_widget(kind: &str, name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Element {
    let mut root = widget_element(kind, name, x, y, width, height);
    set_text(&mut root, "pv_name", pv);
    root
}

widget! {
    /// Shows a PV value as text.
    TextUpdate => "textupdate": PvName, ForegroundColor, BackgroundColor, Transparent,
        FontProperty, Formatting, Alignment, Rotation, WrapWords, Border
}

impl TextUpdate {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }
}

widget! {
    Led => "led": PvName, Bit, OnOffColors, OnOffLabels, ForegroundColor, LineColor,
        FontProperty, Border
}

impl Led {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn square(&mut self, square: bool) -> &mut Self {
        set_bool(&mut self.root, "square", square);
        self
    }

    pub fn labels_from_pv(&mut self, from_pv: bool) -> &mut Self {
        set_bool(&mut self.root, "labels_from_pv", from_pv);
        self
    }
}

widget! {
    /// An LED with one color and label per PV value.
    MultiStateLed => "multi_state_led": PvName, ForegroundColor, LineColor, FontProperty, Border
}

impl MultiStateLed {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    /// Appends a state shown when the PV equals `value`.
    pub fn add_state(&mut self, value: i64, label: &str, color: impl Into<ColorValue>) -> &mut Self {
        let mut state = Element::new("state");
        set_int(&mut state, "value", value);
        set_text(&mut state, "label", label);
        properties::color_property(&mut state, "color", color);
        self.root.get_or_insert("states").push(state);
        self
    }

    pub fn fallback_label(&mut self, label: &str) -> &mut Self {
        set_text(&mut self.root, "fallback_label", label);
        self
    }

    pub fn fallback_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "fallback_color", color);
        self
    }

    pub fn square(&mut self, square: bool) -> &mut Self {
        set_bool(&mut self.root, "square", square);
        self
    }
}

widget! {
    ProgressBar => "progressbar": PvName, FillColor, BackgroundColor, Limits, Horizontal, Border
}

impl ProgressBar {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }
}

widget! {
    Meter => "meter": PvName, ForegroundColor, BackgroundColor, FontProperty, Formatting,
        Limits, Border
}

impl Meter {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn needle_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "needle_color", color);
        self
    }

    pub fn show_value(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_value", show);
        self
    }
}

widget! {
    Tank => "tank": PvName, ForegroundColor, BackgroundColor, FillColor, FontProperty, Limits,
        Scale, Border
}

impl Tank {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn empty_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "empty_color", color);
        self
    }
}

widget! {
    Thermometer => "thermometer": PvName, FillColor, Limits, Border
}

impl Thermometer {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }
}

widget! {
    /// One LED per bit of an integer PV.
    ByteMonitor => "byte_monitor": PvName, OnOffColors, ForegroundColor, FontProperty,
        Horizontal, Border
}

impl ByteMonitor {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn start_bit(&mut self, bit: i64) -> &mut Self {
        set_int(&mut self.root, "startBit", bit);
        self
    }

    pub fn num_bits(&mut self, count: i64) -> &mut Self {
        set_int(&mut self.root, "numBits", count);
        self
    }

    pub fn bit_reverse(&mut self, reverse: bool) -> &mut Self {
        set_bool(&mut self.root, "bitReverse", reverse);
        self
    }

    pub fn square(&mut self, square: bool) -> &mut Self {
        set_bool(&mut self.root, "square", square);
        self
    }
}

widget! {
    /// Shows a waveform PV as a 2D image.
    Image => "image": PvName, Limits, Border
}

impl Image {
    pub fn new(name: &str, pv: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: pv_widget(Self::KIND, name, pv, x, y, width, height),
        }
    }

    pub fn color_mode(&mut self, mode: ColorMode) -> &mut Self {
        option_property(&mut self.root, "color_mode", mode);
        self
    }

    pub fn interpolation(&mut self, interpolation: Interpolation) -> &mut Self {
        option_property(&mut self.root, "interpolation", interpolation);
        self
    }

    pub fn unsigned(&mut self, unsigned: bool) -> &mut Self {
        set_bool(&mut self.root, "unsigned", unsigned);
        self
    }

    pub fn data_width(&mut self, width: i64) -> &mut Self {
        set_int(&mut self.root, "data_width", width);
        self
    }

    pub fn data_height(&mut self, height: i64) -> &mut Self {
        set_int(&mut self.root, "data_height", height);
        self
    }

    pub fn autoscale(&mut self, autoscale: bool) -> &mut Self {
        set_bool(&mut self.root, "autoscale", autoscale);
        self
    }
}

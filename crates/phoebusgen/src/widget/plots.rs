// crates/phoebusgen/src/widget/plots.rs

//! XY plots and strip charts, with their axis and trace descriptions.

use super::{Widget, widget_element};
use crate::definitions::ColorValue;
use crate::element::Element;
use crate::error::Result;
use crate::properties::{self, option_property, set_bool, set_float, set_int, set_text};
use crate::types::{PointType, TraceType};

/// One plot axis. Unset fields are left to the display builder's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub title: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub autoscale: Option<bool>,
    pub log_scale: Option<bool>,
    pub show_grid: Option<bool>,
    pub visible: Option<bool>,
}

impl Axis {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub fn autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale = Some(autoscale);
        self
    }

    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = Some(log_scale);
        self
    }

    pub fn show_grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Builds the axis element under the given tag (`x_axis` or `y_axis`).
    ///
    /// Fails if the range is not finite.
    pub fn to_element(&self, tag: &str) -> Result<Element> {
        let mut element = Element::new(tag);
        if let Some(title) = &self.title {
            set_text(&mut element, "title", title);
        }
        if let Some(autoscale) = self.autoscale {
            set_bool(&mut element, "autoscale", autoscale);
        }
        if let Some(log_scale) = self.log_scale {
            set_bool(&mut element, "log_scale", log_scale);
        }
        if let Some(minimum) = self.minimum {
            set_float(&mut element, "minimum", minimum)?;
        }
        if let Some(maximum) = self.maximum {
            set_float(&mut element, "maximum", maximum)?;
        }
        if let Some(show_grid) = self.show_grid {
            set_bool(&mut element, "show_grid", show_grid);
        }
        if let Some(visible) = self.visible {
            set_bool(&mut element, "visible", visible);
        }
        Ok(element)
    }
}

/// One data series of a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub x_pv: Option<String>,
    pub y_pv: String,
    pub err_pv: Option<String>,
    /// Index of the Y axis the trace is drawn against.
    pub axis: i64,
    pub trace_type: Option<TraceType>,
    pub color: Option<ColorValue>,
    pub line_width: Option<i64>,
    pub point_type: Option<PointType>,
    pub point_size: Option<i64>,
    pub visible: Option<bool>,
}

impl Trace {
    pub fn new(name: &str, y_pv: &str) -> Self {
        Self {
            name: name.to_string(),
            x_pv: None,
            y_pv: y_pv.to_string(),
            err_pv: None,
            axis: 0,
            trace_type: None,
            color: None,
            line_width: None,
            point_type: None,
            point_size: None,
            visible: None,
        }
    }

    pub fn x_pv(mut self, pv: &str) -> Self {
        self.x_pv = Some(pv.to_string());
        self
    }

    pub fn err_pv(mut self, pv: &str) -> Self {
        self.err_pv = Some(pv.to_string());
        self
    }

    pub fn axis(mut self, index: i64) -> Self {
        self.axis = index;
        self
    }

    pub fn trace_type(mut self, trace_type: TraceType) -> Self {
        self.trace_type = Some(trace_type);
        self
    }

    pub fn color(mut self, color: impl Into<ColorValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn line_width(mut self, width: i64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn points(mut self, point_type: PointType, size: i64) -> Self {
        self.point_type = Some(point_type);
        self.point_size = Some(size);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn to_element(&self) -> Element {
        let mut element = Element::new("trace");
        set_text(&mut element, "name", &self.name);
        if let Some(x_pv) = &self.x_pv {
            set_text(&mut element, "x_pv", x_pv);
        }
        set_text(&mut element, "y_pv", &self.y_pv);
        if let Some(err_pv) = &self.err_pv {
            set_text(&mut element, "err_pv", err_pv);
        }
        set_int(&mut element, "axis", self.axis);
        if let Some(trace_type) = self.trace_type {
            option_property(&mut element, "trace_type", trace_type);
        }
        if let Some(color) = &self.color {
            properties::color_property(&mut element, "color", color.clone());
        }
        if let Some(width) = self.line_width {
            set_int(&mut element, "line_width", width);
        }
        if let Some(point_type) = self.point_type {
            option_property(&mut element, "point_type", point_type);
        }
        if let Some(size) = self.point_size {
            set_int(&mut element, "point_size", size);
        }
        if let Some(visible) = self.visible {
            set_bool(&mut element, "visible", visible);
        }
        element
    }
}

fn push_y_axis(root: &mut Element, axis: &Axis) -> Result<()> {
    let element = axis.to_element("y_axis")?;
    root.get_or_insert("y_axes").push(element);
    Ok(())
}

fn push_trace(root: &mut Element, trace: &Trace) {
    root.get_or_insert("traces").push(trace.to_element());
}

widget! {
    XyPlot => "xyplot": ForegroundColor, BackgroundColor
}

impl XyPlot {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    pub fn title(&mut self, title: &str) -> &mut Self {
        set_text(&mut self.root, "title", title);
        self
    }

    pub fn show_toolbar(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_toolbar", show);
        self
    }

    pub fn show_legend(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_legend", show);
        self
    }

    pub fn x_axis(&mut self, axis: &Axis) -> Result<&mut Self> {
        self.root.replace_child(axis.to_element("x_axis")?);
        Ok(self)
    }

    pub fn add_y_axis(&mut self, axis: &Axis) -> Result<&mut Self> {
        push_y_axis(&mut self.root, axis)?;
        Ok(self)
    }

    pub fn add_trace(&mut self, trace: &Trace) -> &mut Self {
        push_trace(&mut self.root, trace);
        self
    }
}

widget! {
    /// Plots PV values over time.
    StripChart => "stripchart": ForegroundColor, BackgroundColor
}

impl StripChart {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    pub fn title(&mut self, title: &str) -> &mut Self {
        set_text(&mut self.root, "title", title);
        self
    }

    /// Visible time span, e.g. `"1 minute"` or `"2 hours"`.
    pub fn time_range(&mut self, range: &str) -> &mut Self {
        set_text(&mut self.root, "time_range", range);
        self
    }

    pub fn show_toolbar(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_toolbar", show);
        self
    }

    pub fn show_legend(&mut self, show: bool) -> &mut Self {
        set_bool(&mut self.root, "show_legend", show);
        self
    }

    pub fn add_y_axis(&mut self, axis: &Axis) -> Result<&mut Self> {
        push_y_axis(&mut self.root, axis)?;
        Ok(self)
    }

    pub fn add_trace(&mut self, trace: &Trace) -> &mut Self {
        push_trace(&mut self.root, trace);
        self
    }
}

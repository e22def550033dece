// crates/phoebusgen/src/widget/props.rs

//! Property groups shared between widgets.
//!
//! Each group is a trait with default methods; a widget opts into a group by
//! implementing the trait (see the `widget!` declarations). Setters return
//! `&mut Self` so calls can be chained.

use super::Widget;
use crate::definitions::{ColorValue, FontValue};
use crate::element::Element;
use crate::error::Result;
use crate::properties::{self, set_bool, set_float, set_int, set_text};
use crate::types::{
    ArrowType, Format, FontStyle, HorizontalAlignment, LineStyle, Number, RotationStep,
    VerticalAlignment,
};

pub trait PvName: Widget {
    /// Process variable the widget reads or writes.
    fn pv_name(&mut self, pv: &str) -> &mut Self {
        set_text(self.element_mut(), "pv_name", pv);
        self
    }
}

pub trait Text: Widget {
    fn text(&mut self, text: &str) -> &mut Self {
        set_text(self.element_mut(), "text", text);
        self
    }
}

pub trait LabelText: Widget {
    fn label(&mut self, label: &str) -> &mut Self {
        set_text(self.element_mut(), "label", label);
        self
    }
}

pub trait ForegroundColor: Widget {
    fn foreground_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "foreground_color", color);
        self
    }
}

pub trait BackgroundColor: Widget {
    fn background_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "background_color", color);
        self
    }
}

pub trait FillColor: Widget {
    fn fill_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "fill_color", color);
        self
    }
}

pub trait Transparent: Widget {
    fn transparent(&mut self, transparent: bool) -> &mut Self {
        set_bool(self.element_mut(), "transparent", transparent);
        self
    }
}

pub trait FontProperty: Widget {
    /// Replaces the font with a named or custom font.
    fn font(&mut self, font: impl Into<FontValue>) -> &mut Self {
        properties::font_property(self.element_mut(), "font", font);
        self
    }

    fn font_family(&mut self, family: &str) -> &mut Self {
        properties::font_family(self.element_mut(), "font", family);
        self
    }

    fn font_size(&mut self, size: impl Into<Number>) -> Result<&mut Self> {
        properties::font_size(self.element_mut(), "font", size)?;
        Ok(self)
    }

    fn font_style(&mut self, style: FontStyle) -> &mut Self {
        properties::font_style(self.element_mut(), "font", style);
        self
    }
}

pub trait Alignment: Widget {
    fn horizontal_alignment(&mut self, alignment: HorizontalAlignment) -> &mut Self {
        properties::option_property(self.element_mut(), "horizontal_alignment", alignment);
        self
    }

    fn vertical_alignment(&mut self, alignment: VerticalAlignment) -> &mut Self {
        properties::option_property(self.element_mut(), "vertical_alignment", alignment);
        self
    }
}

pub trait Rotation: Widget {
    fn rotation_step(&mut self, step: RotationStep) -> &mut Self {
        properties::option_property(self.element_mut(), "rotation_step", step);
        self
    }
}

pub trait WrapWords: Widget {
    fn wrap_words(&mut self, wrap: bool) -> &mut Self {
        set_bool(self.element_mut(), "wrap_words", wrap);
        self
    }
}

pub trait AutoSize: Widget {
    fn auto_size(&mut self, auto_size: bool) -> &mut Self {
        set_bool(self.element_mut(), "auto_size", auto_size);
        self
    }
}

pub trait Border: Widget {
    fn border_width(&mut self, width: i64) -> &mut Self {
        set_int(self.element_mut(), "border_width", width);
        self
    }

    fn border_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "border_color", color);
        self
    }

    fn border_alarm_sensitive(&mut self, sensitive: bool) -> &mut Self {
        set_bool(self.element_mut(), "border_alarm_sensitive", sensitive);
        self
    }
}

pub trait Formatting: Widget {
    fn format(&mut self, format: Format) -> &mut Self {
        properties::option_property(self.element_mut(), "format", format);
        self
    }

    fn precision(&mut self, precision: i64) -> &mut Self {
        set_int(self.element_mut(), "precision", precision);
        self
    }

    fn show_units(&mut self, show: bool) -> &mut Self {
        set_bool(self.element_mut(), "show_units", show);
        self
    }
}

pub trait Limits: Widget {
    fn minimum(&mut self, minimum: f64) -> Result<&mut Self> {
        set_float(self.element_mut(), "minimum", minimum)?;
        Ok(self)
    }

    fn maximum(&mut self, maximum: f64) -> Result<&mut Self> {
        set_float(self.element_mut(), "maximum", maximum)?;
        Ok(self)
    }

    /// Whether display limits come from the PV instead of `minimum`/`maximum`.
    fn limits_from_pv(&mut self, from_pv: bool) -> &mut Self {
        set_bool(self.element_mut(), "limits_from_pv", from_pv);
        self
    }
}

pub trait Increment: Widget {
    fn increment(&mut self, increment: f64) -> Result<&mut Self> {
        set_float(self.element_mut(), "increment", increment)?;
        Ok(self)
    }
}

pub trait Scale: Widget {
    fn show_scale(&mut self, show: bool) -> &mut Self {
        set_bool(self.element_mut(), "show_scale", show);
        self
    }

    fn show_minor_ticks(&mut self, show: bool) -> &mut Self {
        set_bool(self.element_mut(), "show_minor_ticks", show);
        self
    }
}

pub trait LineWidth: Widget {
    fn line_width(&mut self, width: i64) -> &mut Self {
        set_int(self.element_mut(), "line_width", width);
        self
    }
}

pub trait LineColor: Widget {
    fn line_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "line_color", color);
        self
    }
}

pub trait LineStyleProperty: Widget {
    fn line_style(&mut self, style: LineStyle) -> &mut Self {
        properties::option_property(self.element_mut(), "line_style", style);
        self
    }
}

pub trait Arrows: Widget {
    fn arrows(&mut self, arrows: ArrowType) -> &mut Self {
        properties::option_property(self.element_mut(), "arrows", arrows);
        self
    }

    fn arrow_length(&mut self, length: i64) -> &mut Self {
        set_int(self.element_mut(), "arrow_length", length);
        self
    }
}

pub trait Points: Widget {
    /// Appends a vertex, relative to the widget's origin.
    fn add_point(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let point = Element::new("point")
            .with_attribute("x", Number::Float(x).to_xml("point x")?)
            .with_attribute("y", Number::Float(y).to_xml("point y")?);
        self.element_mut().get_or_insert("points").push(point);
        Ok(self)
    }

    fn clear_points(&mut self) -> &mut Self {
        self.element_mut().remove("points");
        self
    }
}

pub trait OnOffColors: Widget {
    fn off_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "off_color", color);
        self
    }

    fn on_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(self.element_mut(), "on_color", color);
        self
    }
}

pub trait OnOffLabels: Widget {
    fn off_label(&mut self, label: &str) -> &mut Self {
        set_text(self.element_mut(), "off_label", label);
        self
    }

    fn on_label(&mut self, label: &str) -> &mut Self {
        set_text(self.element_mut(), "on_label", label);
        self
    }
}

pub trait Bit: Widget {
    /// Bit of the PV value to use; -1 uses the whole value.
    fn bit(&mut self, bit: i64) -> &mut Self {
        set_int(self.element_mut(), "bit", bit);
        self
    }
}

pub trait Items: Widget {
    fn add_item(&mut self, item: &str) -> &mut Self {
        self.element_mut()
            .get_or_insert("items")
            .push(Element::new("item").with_text(item));
        self
    }

    fn items_from_pv(&mut self, from_pv: bool) -> &mut Self {
        set_bool(self.element_mut(), "items_from_pv", from_pv);
        self
    }
}

pub trait Enabled: Widget {
    fn enabled(&mut self, enabled: bool) -> &mut Self {
        set_bool(self.element_mut(), "enabled", enabled);
        self
    }
}

pub trait Horizontal: Widget {
    fn horizontal(&mut self, horizontal: bool) -> &mut Self {
        set_bool(self.element_mut(), "horizontal", horizontal);
        self
    }
}

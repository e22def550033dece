// crates/phoebusgen/src/widget/graphics.rs

//! Static graphics: labels, shapes and pictures.

use super::props::{Points, Text};
use super::{Widget, widget_element};
use crate::error::Result;
use crate::properties::{set_bool, set_float, set_int, set_text};

widget! {
    /// Static text.
    Label => "label": Text, ForegroundColor, BackgroundColor, Transparent, FontProperty,
        Alignment, Rotation, WrapWords, AutoSize, Border
}

impl Label {
    pub fn new(name: &str, text: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut label = Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        };
        label.text(text);
        label
    }
}

widget! {
    Rectangle => "rectangle": LineWidth, LineColor, LineStyleProperty, BackgroundColor, Transparent
}

impl Rectangle {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    /// Horizontal radius of rounded corners.
    pub fn corner_width(&mut self, width: i64) -> &mut Self {
        set_int(&mut self.root, "corner_width", width);
        self
    }

    /// Vertical radius of rounded corners.
    pub fn corner_height(&mut self, height: i64) -> &mut Self {
        set_int(&mut self.root, "corner_height", height);
        self
    }
}

widget! {
    Ellipse => "ellipse": LineWidth, LineColor, LineStyleProperty, BackgroundColor, Transparent
}

impl Ellipse {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }
}

widget! {
    Arc => "arc": LineWidth, LineColor, LineStyleProperty, BackgroundColor, Transparent
}

impl Arc {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    /// Start angle in degrees, counter-clockwise from 3 o'clock.
    pub fn angle_start(&mut self, degrees: f64) -> Result<&mut Self> {
        set_float(&mut self.root, "start_angle", degrees)?;
        Ok(self)
    }

    pub fn angle_size(&mut self, degrees: f64) -> Result<&mut Self> {
        set_float(&mut self.root, "total_angle", degrees)?;
        Ok(self)
    }
}

widget! {
    Polyline => "polyline": LineWidth, LineColor, LineStyleProperty, Arrows, Points
}

impl Polyline {
    /// Creates a polyline through `points`, given relative to the widget origin.
    pub fn new(
        name: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        points: &[(f64, f64)],
    ) -> Result<Self> {
        let mut line = Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        };
        for &(px, py) in points {
            line.add_point(px, py)?;
        }
        Ok(line)
    }
}

widget! {
    Polygon => "polygon": LineWidth, LineColor, LineStyleProperty, BackgroundColor, Points
}

impl Polygon {
    pub fn new(
        name: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        points: &[(f64, f64)],
    ) -> Result<Self> {
        let mut polygon = Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        };
        for &(px, py) in points {
            polygon.add_point(px, py)?;
        }
        Ok(polygon)
    }
}

widget! {
    /// An image file shown as a static graphic.
    Picture => "picture"
}

impl Picture {
    pub fn new(name: &str, file: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut picture = Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        };
        picture.file(file);
        picture
    }

    pub fn file(&mut self, file: &str) -> &mut Self {
        set_text(&mut self.root, "file", file);
        self
    }

    /// Stretch the image to the widget instead of keeping its aspect ratio.
    pub fn stretch(&mut self, stretch: bool) -> &mut Self {
        set_bool(&mut self.root, "stretch_image", stretch);
        self
    }

    pub fn rotation(&mut self, degrees: f64) -> Result<&mut Self> {
        set_float(&mut self.root, "rotation", degrees)?;
        Ok(self)
    }
}

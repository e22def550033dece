// crates/phoebusgen/src/types.rs

//! Primitive property values and the closed option sets used by widget properties.

use crate::error::{PhoebusError, Result};
use core::fmt;
use core::str::FromStr;

/// A numeric property value as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($src:ty),+) => {
        $(
            impl From<$src> for Number {
                fn from(v: $src) -> Self {
                    Number::$variant(v as $target)
                }
            }
        )+
    };
}

number_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);

impl Number {
    /// Parses a decimal string, preferring an integer reading.
    pub fn parse(property: &str, s: &str) -> Result<Number> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Integer(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| PhoebusError::InvalidProperty {
                property: property.to_string(),
                value: s.to_string(),
                expected: "a number",
            })
    }

    /// Integer view of the value; floats are truncated toward zero.
    ///
    /// Floats that are not finite or do not fit in an `i64` are rejected.
    pub fn to_integer(self, property: &str) -> Result<i64> {
        // `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound.
        const LOWER: f64 = i64::MIN as f64;
        const UPPER: f64 = i64::MAX as f64;
        match self {
            Number::Integer(i) => Ok(i),
            Number::Float(f) if f.is_finite() && f.trunc() >= LOWER && f.trunc() < UPPER => {
                Ok(f.trunc() as i64)
            }
            Number::Float(f) => Err(PhoebusError::InvalidProperty {
                property: property.to_string(),
                value: f.to_string(),
                expected: "an integer",
            }),
        }
    }

    /// Text written into the display file.
    pub fn to_xml(self, property: &str) -> Result<String> {
        match self {
            Number::Integer(i) => Ok(i.to_string()),
            Number::Float(f) if f.is_finite() => Ok(format_float(f)),
            Number::Float(f) => Err(PhoebusError::InvalidProperty {
                property: property.to_string(),
                value: f.to_string(),
                expected: "a finite number",
            }),
        }
    }
}

/// Formats a float so that whole values keep a decimal point (`5.0`, not `5`).
pub(crate) fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// A boolean property value as supplied by the caller.
///
/// Integers follow the usual truthiness rule and strings must spell
/// `true` or `false` (any case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl From<bool> for BoolValue {
    fn from(v: bool) -> Self {
        BoolValue::Bool(v)
    }
}

impl From<i32> for BoolValue {
    fn from(v: i32) -> Self {
        BoolValue::Integer(v.into())
    }
}

impl From<i64> for BoolValue {
    fn from(v: i64) -> Self {
        BoolValue::Integer(v)
    }
}

impl From<u8> for BoolValue {
    fn from(v: u8) -> Self {
        BoolValue::Integer(v.into())
    }
}

impl From<&str> for BoolValue {
    fn from(v: &str) -> Self {
        BoolValue::Text(v.to_string())
    }
}

impl From<String> for BoolValue {
    fn from(v: String) -> Self {
        BoolValue::Text(v)
    }
}

impl BoolValue {
    pub fn resolve(&self, property: &str) -> Result<bool> {
        match self {
            BoolValue::Bool(b) => Ok(*b),
            BoolValue::Integer(i) => Ok(*i != 0),
            BoolValue::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            BoolValue::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            BoolValue::Text(s) => Err(PhoebusError::InvalidProperty {
                property: property.to_string(),
                value: s.clone(),
                expected: "a boolean value",
            }),
        }
    }
}

/// An option set whose members are written as a small integer.
pub trait PropertyOption: Copy {
    fn value(self) -> u8;
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident = $value:literal => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name accepted by `FromStr`.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl PropertyOption for $name {
            fn value(self) -> u8 {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl FromStr for $name {
            type Err = PhoebusError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.key().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| PhoebusError::InvalidOption {
                        option: $label,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

option_set! {
    HorizontalAlignment, "horizontal alignment" {
        Left = 0 => "left",
        Center = 1 => "center",
        Right = 2 => "right",
    }
}

option_set! {
    VerticalAlignment, "vertical alignment" {
        Top = 0 => "top",
        Middle = 1 => "middle",
        Bottom = 2 => "bottom",
    }
}

option_set! {
    RotationStep, "rotation step" {
        Zero = 0 => "zero",
        Ninety = 1 => "ninety",
        OneHundredEighty = 2 => "one_hundred_eighty",
        NegativeNinety = 3 => "negative_ninety",
    }
}

option_set! {
    /// Behaviour of a boolean button.
    ButtonMode, "button mode" {
        Toggle = 0 => "toggle",
        Push = 1 => "push",
        PushInverted = 2 => "push_inverted",
    }
}

option_set! {
    Interpolation, "interpolation" {
        None = 0 => "none",
        Interpolate = 1 => "interpolate",
        Automatic = 2 => "automatic",
    }
}

option_set! {
    /// Pixel layout of image data.
    ColorMode, "color mode" {
        Custom = 0 => "TYPE_CUSTOM",
        Mono = 1 => "TYPE_MONO",
        Bayer = 2 => "TYPE_BAYER",
        Rgb1 = 3 => "TYPE_RGB1",
        Rgb2 = 4 => "TYPE_RGB2",
        Rgb3 = 5 => "TYPE_RGB3",
        Yuv444 = 6 => "TYPE_YUV444",
        Yuv422 = 7 => "TYPE_YUV422",
        Yuv411 = 8 => "TYPE_YUV411",
        ThreeByteBgr = 9 => "TYPE_3BYTE_BGR",
        FourByteAbgr = 10 => "TYPE_4BYTE_ABGR",
        FourByteAbgrPre = 11 => "TYPE_4BYTE_ABGR_PRE",
        ByteBinary = 12 => "TYPE_BYTE_BINARY",
        ByteGray = 13 => "TYPE_BYTE_GRAY",
        ByteIndexed = 14 => "TYPE_BYTE_INDEXED",
        IntArgb = 15 => "TYPE_INT_ARGB",
        IntArgbPre = 16 => "TYPE_INT_ARGB_PRE",
        IntBgr = 17 => "TYPE_INT_BGR",
        IntRgb = 18 => "TYPE_INT_RGB",
        Ushort555Rgb = 19 => "TYPE_USHORT_555_RGB",
        Ushort565Rgb = 20 => "TYPE_USHORT_565_RGB",
        UshortGray = 21 => "TYPE_USHORT_GRAY",
    }
}

option_set! {
    GroupStyle, "group style" {
        GroupBox = 0 => "group_box",
        TitleBar = 1 => "title_bar",
        Line = 2 => "line",
        None = 3 => "none",
    }
}

option_set! {
    /// How an embedded display is fitted into its widget.
    Resize, "resize behaviour" {
        NoResize = 0 => "no_resize",
        SizeContentToFitWidget = 1 => "size_content_to_fit_widget",
        SizeWidgetToMatchContent = 2 => "size_widget_to_match_content",
        StretchContentToFitWidget = 3 => "stretch_content_to_fit_widget",
        CropContent = 4 => "crop_content",
    }
}

option_set! {
    FileComponent, "file component" {
        FullPath = 0 => "full_path",
        Directory = 1 => "directory",
        NameAndExtension = 2 => "name_and_extension",
        BaseName = 3 => "base_name",
    }
}

option_set! {
    ArrowType, "arrow type" {
        None = 0 => "None",
        From = 1 => "From",
        To = 2 => "To",
        Both = 3 => "Both",
    }
}

option_set! {
    LineStyle, "line style" {
        Solid = 0 => "Solid",
        Dashed = 1 => "Dashed",
        Dot = 2 => "Dot",
        DashDot = 3 => "Dash-Dot",
        DashDotDot = 4 => "Dash-Dot-Dot",
    }
}

option_set! {
    /// Number formats offered by text widgets.
    Format, "format" {
        Default = 0 => "default",
        Decimal = 1 => "decimal",
        Exponential = 2 => "exponential",
        Engineering = 3 => "engineering",
        Hexadecimal = 4 => "hexadecimal",
        Compact = 5 => "compact",
        String = 6 => "string",
        Sexagesimal = 7 => "sexagesimal hh:mm:ss",
        SexagesimalHms = 8 => "sexagesimal hms 24h rad",
        SexagesimalDms = 9 => "sexagesimal dms 360deg rad",
        Binary = 10 => "binary",
    }
}

option_set! {
    /// How an XY plot trace connects its samples.
    TraceType, "trace type" {
        None = 0 => "none",
        Line = 1 => "line",
        Step = 2 => "step",
        ErrorBars = 3 => "error_bars",
        LineErrorBars = 4 => "line_error_bars",
        Bars = 5 => "bars",
    }
}

option_set! {
    PointType, "point type" {
        None = 0 => "none",
        Squares = 1 => "squares",
        Circles = 2 => "circles",
        Diamonds = 3 => "diamonds",
        XMarks = 4 => "x_marks",
        Triangles = 5 => "triangles",
    }
}

/// Font style; unlike the other option sets it is written as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Italic,
    Bold,
    BoldItalic,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Regular => "REGULAR",
            FontStyle::Italic => "ITALIC",
            FontStyle::Bold => "BOLD",
            FontStyle::BoldItalic => "BOLD_ITALIC",
        }
    }
}

impl FromStr for FontStyle {
    type Err = PhoebusError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        let words: Vec<&str> = normalized.split_whitespace().collect();
        match words.as_slice() {
            ["regular"] | ["plain"] => Ok(FontStyle::Regular),
            ["italic"] => Ok(FontStyle::Italic),
            ["bold"] => Ok(FontStyle::Bold),
            ["bold", "italic"] | ["bold", "and", "italic"] => Ok(FontStyle::BoldItalic),
            _ => Err(PhoebusError::InvalidOption {
                option: "font style",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an "open display" action shows the new display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionTarget {
    Replace,
    #[default]
    Tab,
    Window,
}

impl ActionTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionTarget::Replace => "replace",
            ActionTarget::Tab => "tab",
            ActionTarget::Window => "window",
        }
    }
}

impl FromStr for ActionTarget {
    type Err = PhoebusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(ActionTarget::Replace),
            "tab" => Ok(ActionTarget::Tab),
            "window" => Ok(ActionTarget::Window),
            _ => Err(PhoebusError::InvalidOption {
                option: "action target",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::from(5u8), Number::Integer(5));
        assert_eq!(Number::from(-3i32), Number::Integer(-3));
        assert_eq!(Number::from(2.5f64), Number::Float(2.5));

        assert_eq!(Number::Float(7.9).to_integer("x").unwrap(), 7);
        assert_eq!(Number::Float(-7.9).to_integer("x").unwrap(), -7);
        assert!(Number::Float(f64::NAN).to_integer("x").is_err());

        assert!(matches!(
            Number::Float(1e30).to_integer("x"),
            Err(PhoebusError::InvalidProperty { expected: "an integer", .. })
        ));
        assert!(Number::Float(-1e30).to_integer("x").is_err());
        assert!(Number::Float(9_223_372_036_854_775_808.0).to_integer("x").is_err());
        assert_eq!(
            Number::Float(-9_223_372_036_854_775_808.0).to_integer("x").unwrap(),
            i64::MIN
        );
        assert_eq!(Number::Float(1e15).to_integer("x").unwrap(), 1_000_000_000_000_000);
    }

    #[test]
    fn test_number_xml_text() {
        assert_eq!(Number::Integer(10).to_xml("p").unwrap(), "10");
        assert_eq!(Number::Float(5.0).to_xml("p").unwrap(), "5.0");
        assert_eq!(Number::Float(0.25).to_xml("p").unwrap(), "0.25");
        assert!(Number::Float(f64::INFINITY).to_xml("p").is_err());
    }

    #[test]
    fn test_number_parse() {
        assert_eq!(Number::parse("p", " 12 ").unwrap(), Number::Integer(12));
        assert_eq!(Number::parse("p", "1.5").unwrap(), Number::Float(1.5));
        let err = Number::parse("precision", "twelve").unwrap_err();
        assert!(matches!(err, PhoebusError::InvalidProperty { expected: "a number", .. }));
    }

    #[test]
    fn test_bool_value_resolution() {
        assert!(BoolValue::from(true).resolve("p").unwrap());
        assert!(BoolValue::from(1).resolve("p").unwrap());
        assert!(!BoolValue::from(0).resolve("p").unwrap());
        assert!(BoolValue::from("TRUE").resolve("p").unwrap());
        assert!(!BoolValue::from("False").resolve("p").unwrap());
        assert!(BoolValue::from("yes").resolve("p").is_err());
    }

    #[test]
    fn test_option_values_and_names() {
        assert_eq!(HorizontalAlignment::Right.value(), 2);
        assert_eq!(RotationStep::NegativeNinety.value(), 3);
        assert_eq!(ColorMode::UshortGray.value(), 21);
        assert_eq!(ColorMode::ALL.len(), 22);
        assert_eq!(Format::ALL.len(), 11);
        assert_eq!(Format::Binary.value(), 10);

        assert_eq!("dash-dot".parse::<LineStyle>().unwrap(), LineStyle::DashDot);
        assert_eq!("Both".parse::<ArrowType>().unwrap(), ArrowType::Both);
        assert_eq!(
            "sexagesimal hms 24h rad".parse::<Format>().unwrap(),
            Format::SexagesimalHms
        );
        assert_eq!("type_rgb2".parse::<ColorMode>().unwrap(), ColorMode::Rgb2);
    }

    #[test]
    fn test_invalid_option_is_rejected() {
        let err = "diagonal".parse::<HorizontalAlignment>().unwrap_err();
        match err {
            PhoebusError::InvalidOption { option, value } => {
                assert_eq!(option, "horizontal alignment");
                assert_eq!(value, "diagonal");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_font_style_parsing() {
        assert_eq!("regular".parse::<FontStyle>().unwrap(), FontStyle::Regular);
        assert_eq!("BOLD".parse::<FontStyle>().unwrap(), FontStyle::Bold);
        assert_eq!("bold italic".parse::<FontStyle>().unwrap(), FontStyle::BoldItalic);
        assert_eq!("BOLD_ITALIC".parse::<FontStyle>().unwrap(), FontStyle::BoldItalic);
        assert_eq!(
            "bold_and_italic".parse::<FontStyle>().unwrap(),
            FontStyle::BoldItalic
        );
        assert!("heavy".parse::<FontStyle>().is_err());
        assert_eq!(FontStyle::BoldItalic.to_string(), "BOLD_ITALIC");
    }

    #[test]
    fn test_action_target() {
        assert_eq!("Window".parse::<ActionTarget>().unwrap(), ActionTarget::Window);
        assert_eq!(ActionTarget::default().as_str(), "tab");
        assert!("popup".parse::<ActionTarget>().is_err());
    }
}

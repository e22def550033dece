// crates/phoebusgen/src/lib.rs

#![doc = "Generates Phoebus display builder (`.bob`) screens from Rust code."]
#![doc = ""]
#![doc = "Widgets and screens are built as an ordered XML tree through typed setters"]
#![doc = "and written with `quick-xml`. Named colors and fonts are resolved against"]
#![doc = "tables parsed from the display builder's `color.def` and `font.def` files."]
#![doc = ""]
#![doc = "- `Screen`: the top-level display and its widgets."]
#![doc = "- `widget`: one constructor per widget kind, plus shared property groups."]
#![doc = "- `Definitions`: named color and font tables, loaded via `Config`."]
#![doc = "- `read_outline`: structural read-back of generated files."]

// --- Foundation Modules ---
pub mod element;
pub mod error;
pub mod types;

// --- Definitions and Configuration ---
pub mod config;
pub mod definitions;

// --- Display Building ---
pub mod properties;
pub mod screen;
pub mod widget;

// --- Read-back ---
pub mod outline;

// --- Top-level Exports ---
pub use config::Config;
pub use definitions::{
    Color, ColorTable, ColorValue, Definitions, Font, FontTable, FontValue, NamedColor, NamedFont,
};
pub use element::Element;
pub use error::{PhoebusError, Result};
pub use outline::{DisplayOutline, WidgetOutline, read_outline};
pub use screen::Screen;
pub use types::{
    ActionTarget, ArrowType, BoolValue, ButtonMode, ColorMode, FileComponent, FontStyle, Format,
    GroupStyle, HorizontalAlignment, Interpolation, LineStyle, Number, PointType, PropertyOption,
    Resize, RotationStep, TraceType, VerticalAlignment,
};
pub use widget::props::*;
pub use widget::*;

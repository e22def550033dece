// crates/phoebusgen/src/definitions/color.rs

use super::definition_lines;
use crate::error::{PhoebusError, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// An opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Builds a color from unchecked components, each of which must lie in 0..=255.
    pub fn try_from_components(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self> {
        Ok(Self {
            red: checked_component("red", red)?,
            green: checked_component("green", green)?,
            blue: checked_component("blue", blue)?,
            alpha: checked_component("alpha", alpha)?,
        })
    }

    /// Attributes of the `<color>` element, in display builder order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("red", self.red.to_string()),
            ("green", self.green.to_string()),
            ("blue", self.blue.to_string()),
            ("alpha", self.alpha.to_string()),
        ]
    }
}

fn checked_component(component: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| PhoebusError::InvalidColorComponent {
        component,
        value: value.to_string(),
        line: None,
    })
}

fn parse_component(component: &'static str, text: &str, line: usize) -> Result<u8> {
    text.parse::<u8>()
        .map_err(|_| PhoebusError::InvalidColorComponent {
            component,
            value: text.to_string(),
            line: Some(line),
        })
}

/// A color taken from a color table, carrying its name into the display file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![("name", self.name.clone())];
        attributes.extend(self.color.attributes());
        attributes
    }
}

/// Anything a color property accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    Named(NamedColor),
    Rgba(Color),
}

impl ColorValue {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            ColorValue::Named(named) => named.attributes(),
            ColorValue::Rgba(color) => color.attributes(),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(c: Color) -> Self {
        ColorValue::Rgba(c)
    }
}

impl From<NamedColor> for ColorValue {
    fn from(c: NamedColor) -> Self {
        ColorValue::Named(c)
    }
}

impl From<&NamedColor> for ColorValue {
    fn from(c: &NamedColor) -> Self {
        ColorValue::Named(c.clone())
    }
}

/// Colors by name, as read from a `color.def` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: BTreeMap<String, Color>,
}

impl ColorTable {
    /// Parses the contents of a `color.def` file.
    ///
    /// Values are `red, green, blue` or `red, green, blue, alpha` (alpha
    /// defaults to 255). A single name instead of numbers aliases a color
    /// defined on an earlier line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut colors: BTreeMap<String, Color> = BTreeMap::new();

        for entry in definition_lines(content) {
            let entry = entry?;
            let values: Vec<&str> = entry.value.split(',').map(str::trim).collect();

            let color = match values.as_slice() {
                [alias] => *colors.get(*alias).ok_or_else(|| PhoebusError::UndefinedAlias {
                    line: entry.number,
                    name: entry.name.to_string(),
                    target: alias.to_string(),
                })?,
                [red, green, blue] => Color::rgb(
                    parse_component("red", red, entry.number)?,
                    parse_component("green", green, entry.number)?,
                    parse_component("blue", blue, entry.number)?,
                ),
                [red, green, blue, alpha] => Color::rgba(
                    parse_component("red", red, entry.number)?,
                    parse_component("green", green, entry.number)?,
                    parse_component("blue", blue, entry.number)?,
                    parse_component("alpha", alpha, entry.number)?,
                ),
                _ => {
                    return Err(PhoebusError::InvalidDefinition {
                        line: entry.number,
                        reason: format!(
                            "color '{}' needs 3 or 4 components or one alias, found {}",
                            entry.name,
                            values.len()
                        ),
                    });
                }
            };

            if colors.insert(entry.name.to_string(), color).is_some() {
                warn!(
                    "Color '{}' redefined on line {}",
                    entry.name, entry.number
                );
            }
        }

        debug!("Parsed {} color definitions", colors.len());
        Ok(Self { colors })
    }

    /// Reads and parses a `color.def` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PhoebusError::DefinitionFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Using color definitions at {}", path.display());
        Self::parse(&content)
    }

    pub fn get(&self, name: &str) -> Option<NamedColor> {
        self.colors
            .get(name)
            .map(|color| NamedColor::new(name, *color))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Adds or replaces a color.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in name order.
    pub fn iter(&self) -> impl Iterator<Item = NamedColor> + '_ {
        self.colors
            .iter()
            .map(|(name, color)| NamedColor::new(name.as_str(), *color))
    }
}

// crates/phoebusgen/src/definitions/font.rs

use super::definition_lines;
use crate::error::{PhoebusError, Result};
use crate::types::{FontStyle, format_float};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A font description.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size: f64,
}

impl Default for Font {
    /// The display builder's default: Liberation Sans, regular, 14.
    fn default() -> Self {
        Self {
            family: "Liberation Sans".to_string(),
            style: FontStyle::Regular,
            size: 14.0,
        }
    }
}

impl Font {
    pub fn new(family: impl Into<String>, style: FontStyle, size: f64) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Attributes of the inner `<font>` element.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("family", self.family.clone()),
            ("style", self.style.as_str().to_string()),
            ("size", format_float(self.size)),
        ]
    }
}

/// A font taken from a font table.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedFont {
    pub name: String,
    pub font: Font,
}

impl NamedFont {
    pub fn new(name: impl Into<String>, font: Font) -> Self {
        Self {
            name: name.into(),
            font,
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![("name", self.name.clone())];
        attributes.extend(self.font.attributes());
        attributes
    }
}

/// Anything a font property accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FontValue {
    Named(NamedFont),
    Custom(Font),
}

impl FontValue {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            FontValue::Named(named) => named.attributes(),
            FontValue::Custom(font) => font.attributes(),
        }
    }
}

impl From<Font> for FontValue {
    fn from(f: Font) -> Self {
        FontValue::Custom(f)
    }
}

impl From<NamedFont> for FontValue {
    fn from(f: NamedFont) -> Self {
        FontValue::Named(f)
    }
}

impl From<&NamedFont> for FontValue {
    fn from(f: &NamedFont) -> Self {
        FontValue::Named(f.clone())
    }
}

/// Fonts by name, as read from a `font.def` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontTable {
    fonts: BTreeMap<String, Font>,
}

impl FontTable {
    /// Parses the contents of a `font.def` file.
    ///
    /// Values are `family - style - size`, split from the right so that the
    /// family may itself contain `-`. A value naming a font defined on an
    /// earlier line is an alias, even when that name contains `-`.
    pub fn parse(content: &str) -> Result<Self> {
        let mut fonts: BTreeMap<String, Font> = BTreeMap::new();

        for entry in definition_lines(content) {
            let entry = entry?;
            let invalid = |reason: String| PhoebusError::InvalidDefinition {
                line: entry.number,
                reason,
            };

            let font = if let Some(target) = fonts.get(entry.value) {
                target.clone()
            } else if !entry.value.contains('-') {
                return Err(PhoebusError::UndefinedAlias {
                    line: entry.number,
                    name: entry.name.to_string(),
                    target: entry.value.to_string(),
                });
            } else {
                let mut parts = entry.value.rsplitn(3, '-').map(str::trim);
                let (size, style, family) = match (parts.next(), parts.next(), parts.next()) {
                    (Some(size), Some(style), Some(family)) if !family.is_empty() => {
                        (size, style, family)
                    }
                    _ => {
                        return Err(invalid(format!(
                            "font '{}' must be 'family - style - size'",
                            entry.name
                        )));
                    }
                };
                let style: FontStyle = style
                    .parse()
                    .map_err(|_| invalid(format!("unknown font style '{}'", style)))?;
                let size = size
                    .parse::<f64>()
                    .ok()
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| invalid(format!("invalid font size '{}'", size)))?;
                Font::new(family, style, size)
            };

            if fonts.insert(entry.name.to_string(), font).is_some() {
                warn!("Font '{}' redefined on line {}", entry.name, entry.number);
            }
        }

        debug!("Parsed {} font definitions", fonts.len());
        Ok(Self { fonts })
    }

    /// Reads and parses a `font.def` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PhoebusError::DefinitionFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Using font definitions at {}", path.display());
        Self::parse(&content)
    }

    pub fn get(&self, name: &str) -> Option<NamedFont> {
        self.fonts
            .get(name)
            .map(|font| NamedFont::new(name, font.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, font: Font) {
        self.fonts.insert(name.into(), font);
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NamedFont> + '_ {
        self.fonts
            .iter()
            .map(|(name, font)| NamedFont::new(name.as_str(), font.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fonts() {
        let table = FontTable::parse(
            "Default = Liberation Sans - regular - 14\n\
             Header 1 = Liberation Sans - bold - 22\n\
             Oddball = Comic-Like Sans - bold italic - 9.5\n",
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Default").unwrap().font, Font::default());
        let header = table.get("Header 1").unwrap().font;
        assert_eq!(header.style, FontStyle::Bold);
        assert_eq!(header.size, 22.0);

        let odd = table.get("Oddball").unwrap().font;
        assert_eq!(odd.family, "Comic-Like Sans");
        assert_eq!(odd.style, FontStyle::BoldItalic);
        assert_eq!(odd.size, 9.5);
    }

    #[test]
    fn test_font_alias() {
        let table = FontTable::parse("Default = Liberation Sans - regular - 14\nBody = Default\n").unwrap();
        assert_eq!(table.get("Body").unwrap().font, Font::default());

        let err = FontTable::parse("Body = Default\n").unwrap_err();
        assert!(matches!(err, PhoebusError::UndefinedAlias { line: 1, .. }));
    }

    #[test]
    fn test_invalid_fonts() {
        assert!(matches!(
            FontTable::parse("A = Sans - heavy - 12"),
            Err(PhoebusError::InvalidDefinition { line: 1, .. })
        ));
        assert!(matches!(
            FontTable::parse("A = Sans - bold - big"),
            Err(PhoebusError::InvalidDefinition { .. })
        ));
        assert!(matches!(
            FontTable::parse("A = bold - 12"),
            Err(PhoebusError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_alias_to_name_with_dash() {
        let table = FontTable::parse("Sans-Bold = Sans - bold - 12\nHead = Sans-Bold\n").unwrap();
        let head = table.get("Head").unwrap();
        assert_eq!(head.font, Font::new("Sans", FontStyle::Bold, 12.0));
        assert_eq!(head.name, "Head");
    }

    #[test]
    fn test_font_attributes() {
        let named = NamedFont::new("Header 2", Font::new("Liberation Sans", FontStyle::Bold, 18.0));
        assert_eq!(
            named.attributes(),
            vec![
                ("name", "Header 2".to_string()),
                ("family", "Liberation Sans".to_string()),
                ("style", "BOLD".to_string()),
                ("size", "18.0".to_string()),
            ]
        );
    }
}

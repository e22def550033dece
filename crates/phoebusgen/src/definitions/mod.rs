// crates/phoebusgen/src/definitions/mod.rs

//! Named color and font tables.
//!
//! Both tables are read from the display builder's `name = value` definition
//! files (`color.def`, `font.def`). An entry whose value is a single name is an
//! alias and copies an entry defined earlier in the same file.

pub mod color;
pub mod font;

use crate::config::Config;
use crate::error::{PhoebusError, Result};
use log::debug;

pub use color::{Color, ColorTable, ColorValue, NamedColor};
pub use font::{Font, FontTable, FontValue, NamedFont};

/// The color and font tables a screen is built against.
#[derive(Debug, Clone, PartialEq)]
pub struct Definitions {
    colors: ColorTable,
    fonts: FontTable,
}

impl Definitions {
    pub fn new(colors: ColorTable, fonts: FontTable) -> Self {
        Self { colors, fonts }
    }

    /// Tables parsed from the definition files bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::load(&Config::default())
    }

    /// Tables parsed from the files selected by `config`.
    pub fn load(config: &Config) -> Result<Self> {
        let colors = ColorTable::parse(&config.color_source()?)?;
        let fonts = FontTable::parse(&config.font_source()?)?;
        debug!(
            "Loaded {} colors and {} fonts",
            colors.len(),
            fonts.len()
        );
        Ok(Self { colors, fonts })
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Looks up a named color.
    pub fn color(&self, name: &str) -> Result<NamedColor> {
        self.colors
            .get(name)
            .ok_or_else(|| PhoebusError::UnknownColor(name.to_string()))
    }

    /// Looks up a named font.
    pub fn font(&self, name: &str) -> Result<NamedFont> {
        self.fonts
            .get(name)
            .ok_or_else(|| PhoebusError::UnknownFont(name.to_string()))
    }
}

/// One meaningful line of a definition file.
pub(crate) struct DefinitionLine<'a> {
    pub number: usize,
    pub name: &'a str,
    pub value: &'a str,
}

/// Yields the `name = value` entries of a definition file.
///
/// Text after `#` is a comment and blank lines are skipped. A line that does
/// not split into exactly one name and one value is an error.
pub(crate) fn definition_lines(content: &str) -> impl Iterator<Item = Result<DefinitionLine<'_>>> {
    content.lines().enumerate().filter_map(|(index, raw)| {
        let number = index + 1;
        let line = raw.split('#').next().unwrap_or("").trim_end();
        if line.trim().is_empty() {
            return None;
        }

        let mut parts = line.split('=');
        let entry = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) if !name.trim().is_empty() => Ok(DefinitionLine {
                number,
                name: name.trim(),
                value: value.trim(),
            }),
            _ => Err(PhoebusError::InvalidDefinition {
                line: number,
                reason: format!("expected 'name = value', found '{}'", line.trim()),
            }),
        };
        Some(entry)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_lines_skip_comments_and_blanks() {
        let content = "# header\n\nA = 1, 2, 3 # trailing\n   \nB=A\n";
        let lines: Vec<_> = definition_lines(content)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[0].name, "A");
        assert_eq!(lines[0].value, "1, 2, 3");
        assert_eq!(lines[1].number, 5);
        assert_eq!(lines[1].value, "A");
    }

    #[test]
    fn test_definition_lines_reject_bad_split() {
        for bad in ["no equals sign", "A = B = C", " = 1, 2, 3"] {
            let result: Result<Vec<_>> = definition_lines(bad).collect();
            assert!(
                matches!(result, Err(PhoebusError::InvalidDefinition { line: 1, .. })),
                "expected InvalidDefinition for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_builtin_definitions() {
        let defs = Definitions::builtin().unwrap();
        let text = defs.color("Text").unwrap();
        assert_eq!(text.color, Color::rgb(0, 0, 0));
        assert!(defs.color("Transparent").unwrap().color.alpha == 0);
        assert_eq!(defs.font("Default").unwrap().font, Font::default());
    }

    #[test]
    fn test_unknown_names() {
        let defs = Definitions::builtin().unwrap();
        assert!(matches!(
            defs.color("NoSuchColor"),
            Err(PhoebusError::UnknownColor(name)) if name == "NoSuchColor"
        ));
        assert!(matches!(
            defs.font("NoSuchFont"),
            Err(PhoebusError::UnknownFont(_))
        ));
    }
}

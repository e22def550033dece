// crates/phoebusgen/src/properties.rs

//! Typed setters shared by every widget and the screen itself.
//!
//! Each setter writes one child element under `root` and keeps at most one
//! element per property tag; setting a property twice replaces the first
//! value.

use crate::definitions::{ColorValue, Font, FontValue};
use crate::element::Element;
use crate::error::{PhoebusError, Result};
use crate::types::{BoolValue, FontStyle, Number, PropertyOption};

/// Writes `<tag>value</tag>`, or an empty `<tag/>` when `value` is `None`.
///
/// The tag is written as given; it must be a valid XML element name, which
/// [`is_valid_tag`] checks. The public escape hatches go through
/// [`checked_generic_property`] instead.
pub fn generic_property<'a>(root: &'a mut Element, tag: &str, value: Option<&str>) -> &'a mut Element {
    let mut element = Element::new(tag);
    if let Some(value) = value {
        element.set_text(value);
    }
    root.replace_child(element)
}

/// Like [`generic_property`], but rejects tags that are not valid XML element names.
pub fn checked_generic_property<'a>(
    root: &'a mut Element,
    tag: &str,
    value: Option<&str>,
) -> Result<&'a mut Element> {
    check_tag(tag)?;
    Ok(generic_property(root, tag, value))
}

/// Writes an integer property. Floats are truncated toward zero.
pub fn integer_property(root: &mut Element, tag: &str, value: impl Into<Number>) -> Result<()> {
    check_tag(tag)?;
    let value = value.into().to_integer(tag)?;
    generic_property(root, tag, Some(&value.to_string()));
    Ok(())
}

/// Writes a numeric property as given.
pub fn number_property(root: &mut Element, tag: &str, value: impl Into<Number>) -> Result<()> {
    check_tag(tag)?;
    let text = value.into().to_xml(tag)?;
    generic_property(root, tag, Some(&text));
    Ok(())
}

/// Writes `true` or `false`.
pub fn boolean_property(root: &mut Element, tag: &str, value: impl Into<BoolValue>) -> Result<()> {
    check_tag(tag)?;
    let value = value.into().resolve(tag)?;
    generic_property(root, tag, Some(bool_text(value)));
    Ok(())
}

pub(crate) fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Infallible setters used by the typed widget methods.
pub(crate) fn set_text(root: &mut Element, tag: &str, value: &str) {
    generic_property(root, tag, Some(value));
}

pub(crate) fn set_int(root: &mut Element, tag: &str, value: i64) {
    generic_property(root, tag, Some(&value.to_string()));
}

/// Non-finite values are rejected and leave `root` untouched.
pub(crate) fn set_float(root: &mut Element, tag: &str, value: f64) -> Result<()> {
    let text = Number::Float(value).to_xml(tag)?;
    generic_property(root, tag, Some(&text));
    Ok(())
}

pub(crate) fn set_bool(root: &mut Element, tag: &str, value: bool) {
    generic_property(root, tag, Some(bool_text(value)));
}

/// Writes an option set member as its integer value.
pub fn option_property<T: PropertyOption>(root: &mut Element, tag: &str, option: T) {
    set_int(root, tag, i64::from(option.value()));
}

/// Appends `<name>value</name>` to the `<macros>` child, creating it if needed.
pub fn add_macro(root: &mut Element, name: &str, value: &str) -> Result<()> {
    if !is_valid_tag(name) {
        return Err(PhoebusError::InvalidMacroName(name.to_string()));
    }
    let macros = root.get_or_insert("macros");
    match macros.find_mut(name) {
        Some(existing) => existing.set_text(value),
        None => macros.push(Element::new(name).with_text(value)),
    }
    Ok(())
}

fn check_tag(tag: &str) -> Result<()> {
    if is_valid_tag(tag) {
        Ok(())
    } else {
        Err(PhoebusError::InvalidTag(tag.to_string()))
    }
}

/// Whether `name` can be used as an XML element name (macro names included).
pub fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !name.to_ascii_lowercase().starts_with("xml")
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Builds a standalone `<color .../>` element.
pub fn color_element(color: &ColorValue) -> Element {
    let mut element = Element::new("color");
    element.set_attributes(color.attributes());
    element
}

/// Writes `<tag><color .../></tag>`.
pub fn color_property(root: &mut Element, tag: &str, color: impl Into<ColorValue>) {
    let color = color.into();
    root.replace_child(Element::new(tag).with_child(color_element(&color)));
}

/// Writes `<tag><font .../></tag>`.
pub fn font_property(root: &mut Element, tag: &str, font: impl Into<FontValue>) {
    let mut inner = Element::new("font");
    inner.set_attributes(font.into().attributes());
    root.replace_child(Element::new(tag).with_child(inner));
}

/// Returns the inner `<font>` of `<tag>`, creating it with the default font on first use.
pub fn font_element<'a>(root: &'a mut Element, tag: &str) -> &'a mut Element {
    let wrapper = root.get_or_insert(tag);
    if wrapper.find("font").is_none() {
        let mut inner = Element::new("font");
        inner.set_attributes(Font::default().attributes());
        wrapper.push(inner);
    }
    // The inner element was created just above if missing.
    wrapper.get_or_insert("font")
}

pub fn font_family(root: &mut Element, tag: &str, family: &str) {
    let font = font_element(root, tag);
    font.set_attribute("family", family);
    drop_font_name(font);
}

pub fn font_size(root: &mut Element, tag: &str, size: impl Into<Number>) -> Result<()> {
    let text = size.into().to_xml(tag)?;
    let font = font_element(root, tag);
    font.set_attribute("size", text);
    drop_font_name(font);
    Ok(())
}

pub fn font_style(root: &mut Element, tag: &str, style: FontStyle) {
    let font = font_element(root, tag);
    font.set_attribute("style", style.as_str());
    drop_font_name(font);
}

// A named font that is edited no longer matches its name.
fn drop_font_name(font: &mut Element) {
    let remaining: Vec<(String, String)> = font
        .attributes()
        .filter(|(k, _)| *k != "name")
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    font.set_attributes(remaining);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{Color, NamedColor, NamedFont};
    use crate::types::HorizontalAlignment;

    fn text_of<'a>(root: &'a Element, tag: &str) -> Option<&'a str> {
        root.find(tag).and_then(Element::text)
    }

    #[test]
    fn test_integer_property() {
        let mut root = Element::new("widget");
        integer_property(&mut root, "x", 10).unwrap();
        assert_eq!(text_of(&root, "x"), Some("10"));
        integer_property(&mut root, "x", 12.7).unwrap();
        assert_eq!(text_of(&root, "x"), Some("12"));
        assert_eq!(root.find_all("x").count(), 1);
        assert!(integer_property(&mut root, "x", f64::NAN).is_err());
        assert!(integer_property(&mut root, "x", 1e30).is_err());
        // A failed set leaves the previous value untouched.
        assert_eq!(text_of(&root, "x"), Some("12"));
    }

    #[test]
    fn test_float_setter_rejects_non_finite() {
        let mut root = Element::new("widget");
        set_float(&mut root, "minimum", 1.5).unwrap();
        assert!(set_float(&mut root, "minimum", f64::NAN).is_err());
        assert!(set_float(&mut root, "maximum", f64::INFINITY).is_err());
        assert_eq!(text_of(&root, "minimum"), Some("1.5"));
        assert!(root.find("maximum").is_none());
    }

    #[test]
    fn test_property_tags_must_be_xml_names() {
        let mut root = Element::new("widget");
        for bad in ["has space", "", "9lives", "a<b"] {
            assert!(
                matches!(
                    checked_generic_property(&mut root, bad, Some("v")),
                    Err(PhoebusError::InvalidTag(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
        assert!(matches!(
            number_property(&mut root, "bad tag", 1),
            Err(PhoebusError::InvalidTag(_))
        ));
        assert!(root.children().is_empty());

        checked_generic_property(&mut root, "border_alarm_sensitive", Some("false")).unwrap();
        assert_eq!(text_of(&root, "border_alarm_sensitive"), Some("false"));
    }

    #[test]
    fn test_number_property() {
        let mut root = Element::new("widget");
        number_property(&mut root, "minimum", 5).unwrap();
        assert_eq!(text_of(&root, "minimum"), Some("5"));
        number_property(&mut root, "maximum", 100.0).unwrap();
        assert_eq!(text_of(&root, "maximum"), Some("100.0"));
        number_property(&mut root, "maximum", 0.5).unwrap();
        assert_eq!(text_of(&root, "maximum"), Some("0.5"));
    }

    #[test]
    fn test_boolean_property() {
        let mut root = Element::new("widget");
        boolean_property(&mut root, "visible", false).unwrap();
        assert_eq!(text_of(&root, "visible"), Some("false"));
        boolean_property(&mut root, "visible", 1).unwrap();
        assert_eq!(text_of(&root, "visible"), Some("true"));
        boolean_property(&mut root, "visible", "FALSE").unwrap();
        assert_eq!(text_of(&root, "visible"), Some("false"));

        let err = boolean_property(&mut root, "visible", "maybe").unwrap_err();
        assert_eq!(err.to_string(), "Property visible must be a boolean value! Not: maybe");
    }

    #[test]
    fn test_generic_property_without_value() {
        let mut root = Element::new("widget");
        generic_property(&mut root, "points", None);
        let points = root.find("points").unwrap();
        assert_eq!(points.text(), None);
        assert!(points.children().is_empty());
    }

    #[test]
    fn test_option_property() {
        let mut root = Element::new("widget");
        option_property(&mut root, "horizontal_alignment", HorizontalAlignment::Center);
        assert_eq!(text_of(&root, "horizontal_alignment"), Some("1"));
    }

    #[test]
    fn test_add_macro() {
        let mut root = Element::new("display");
        add_macro(&mut root, "P", "SYS:").unwrap();
        add_macro(&mut root, "R", "Motor1").unwrap();
        add_macro(&mut root, "P", "LAB:").unwrap();

        let macros = root.find("macros").unwrap();
        assert_eq!(macros.children().len(), 2);
        assert_eq!(text_of(macros, "P"), Some("LAB:"));
        assert_eq!(text_of(macros, "R"), Some("Motor1"));

        for bad in ["", "1P", "has space", "xmlThing", "a<b"] {
            assert!(
                matches!(add_macro(&mut root, bad, "v"), Err(PhoebusError::InvalidMacroName(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_color_property() {
        let mut root = Element::new("widget");
        color_property(
            &mut root,
            "foreground_color",
            NamedColor::new("Text", Color::rgb(0, 0, 0)),
        );
        color_property(&mut root, "background_color", Color::rgba(1, 2, 3, 4));

        let fg = root.find("foreground_color").unwrap().find("color").unwrap();
        assert_eq!(fg.attribute("name"), Some("Text"));
        assert_eq!(fg.attribute("alpha"), Some("255"));

        let bg = root.find("background_color").unwrap().find("color").unwrap();
        assert_eq!(bg.attribute("name"), None);
        assert_eq!(bg.attribute("blue"), Some("3"));
        assert_eq!(bg.attribute("alpha"), Some("4"));

        color_property(&mut root, "foreground_color", Color::rgb(9, 9, 9));
        assert_eq!(root.find_all("foreground_color").count(), 1);
    }

    #[test]
    fn test_font_element_defaults_and_edits() {
        let mut root = Element::new("widget");
        font_style(&mut root, "font", FontStyle::Italic);
        font_size(&mut root, "font", 18).unwrap();

        let font = root.find("font").unwrap().find("font").unwrap();
        assert_eq!(font.attribute("family"), Some("Liberation Sans"));
        assert_eq!(font.attribute("style"), Some("ITALIC"));
        assert_eq!(font.attribute("size"), Some("18"));
    }

    #[test]
    fn test_named_font_loses_name_when_edited() {
        let mut root = Element::new("widget");
        font_property(&mut root, "font", NamedFont::new("Header 1", Font::new("Liberation Sans", FontStyle::Bold, 22.0)));
        assert_eq!(
            root.find("font").unwrap().find("font").unwrap().attribute("name"),
            Some("Header 1")
        );

        font_family(&mut root, "font", "DejaVu Sans");
        let font = root.find("font").unwrap().find("font").unwrap();
        assert_eq!(font.attribute("name"), None);
        assert_eq!(font.attribute("family"), Some("DejaVu Sans"));
        assert_eq!(font.attribute("size"), Some("22.0"));
    }
}

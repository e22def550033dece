// crates/phoebusgen/src/screen.rs

//! The top-level `<display>` element.

use crate::definitions::ColorValue;
use crate::element::Element;
use crate::error::Result;
use crate::properties::{self, set_bool, set_int, set_text};
use crate::widget::WIDGET_VERSION;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One display page.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    root: Element,
}

impl Screen {
    pub fn new(name: &str) -> Self {
        let mut root = Element::new("display").with_attribute("version", WIDGET_VERSION);
        set_text(&mut root, "name", name);
        Self { root }
    }

    pub fn element(&self) -> &Element {
        &self.root
    }

    pub fn into_element(self) -> Element {
        self.root
    }

    pub fn name(&self) -> Option<&str> {
        self.root.find("name").and_then(Element::text)
    }

    pub fn width(&mut self, width: i64) -> &mut Self {
        set_int(&mut self.root, "width", width);
        self
    }

    pub fn height(&mut self, height: i64) -> &mut Self {
        set_int(&mut self.root, "height", height);
        self
    }

    pub fn background_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "background_color", color);
        self
    }

    pub fn grid_visible(&mut self, visible: bool) -> &mut Self {
        set_bool(&mut self.root, "grid_visible", visible);
        self
    }

    pub fn grid_color(&mut self, color: impl Into<ColorValue>) -> &mut Self {
        properties::color_property(&mut self.root, "grid_color", color);
        self
    }

    pub fn grid_step_x(&mut self, step: i64) -> &mut Self {
        set_int(&mut self.root, "grid_step_x", step);
        self
    }

    pub fn grid_step_y(&mut self, step: i64) -> &mut Self {
        set_int(&mut self.root, "grid_step_y", step);
        self
    }

    /// Adds a display-wide macro, available to every widget.
    pub fn add_macro(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        properties::add_macro(&mut self.root, name, value)?;
        Ok(self)
    }

    /// Appends a widget. Widgets are written in the order they are added.
    pub fn add_widget(&mut self, widget: impl Into<Element>) -> &mut Self {
        self.root.push(widget.into());
        self
    }

    pub fn add_widgets<I>(&mut self, widgets: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        for widget in widgets {
            self.add_widget(widget);
        }
        self
    }

    /// Top-level widgets, excluding those nested in groups or tabs.
    pub fn widgets(&self) -> impl Iterator<Item = &Element> {
        self.root.find_all("widget")
    }

    /// Finds a widget by name, searching nested groups and tabs as well.
    pub fn find_widget(&self, name: &str) -> Option<&Element> {
        find_named(&self.root, name)
    }

    pub fn find_widget_mut(&mut self, name: &str) -> Option<&mut Element> {
        find_named_mut(&mut self.root, name)
    }

    /// Removes the first widget with the given name and returns it.
    pub fn remove_widget(&mut self, name: &str) -> Option<Element> {
        let removed = remove_named(&mut self.root, name);
        if removed.is_some() {
            debug!("Removed widget {} from screen", name);
        }
        removed
    }

    pub fn to_xml_string(&self) -> Result<String> {
        self.root.to_xml_string()
    }

    /// Writes the screen to `path`, replacing any existing file.
    pub fn write_screen(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.root.write_to(&mut out)?;
        out.flush()?;
        info!(
            "Wrote screen {} to {}",
            self.name().unwrap_or_default(),
            path.display()
        );
        Ok(())
    }
}

fn is_named(element: &Element, name: &str) -> bool {
    element.name() == "widget" && element.find("name").and_then(Element::text) == Some(name)
}

// Direct children are checked before descending, so a top-level widget wins
// over a nested one with the same name.
fn find_named<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element
        .children()
        .iter()
        .find(|c| is_named(c, name))
        .or_else(|| element.children().iter().find_map(|c| find_named(c, name)))
}

fn find_named_mut<'a>(element: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    let index = element.children().iter().position(|c| is_named(c, name));
    match index {
        Some(index) => Some(&mut element.children_mut()[index]),
        None => element
            .children_mut()
            .iter_mut()
            .find_map(|c| find_named_mut(c, name)),
    }
}

fn remove_named(element: &mut Element, name: &str) -> Option<Element> {
    let children = element.children_mut();
    if let Some(index) = children.iter().position(|c| is_named(c, name)) {
        return Some(children.remove(index));
    }
    children.iter_mut().find_map(|c| remove_named(c, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::Color;
    use crate::widget::{Group, Label, Tabs, TextUpdate, Widget};

    fn sample_screen() -> Screen {
        let mut group = Group::new("Axis", 0, 50, 200, 100);
        group.add_widget(TextUpdate::new("RBV", "SYS:M1.RBV", 0, 0, 100, 20));

        let mut tabs = Tabs::new("Pages", 0, 200, 200, 100);
        tabs.add_tab("Expert");
        tabs.add_widget_to_tab("Expert", Label::new("Hint", "Careful", 0, 0, 80, 20))
            .unwrap();

        let mut screen = Screen::new("Motor");
        screen
            .width(800)
            .height(600)
            .add_widget(Label::new("Title", "Motor", 0, 0, 200, 40))
            .add_widget(group)
            .add_widget(tabs);
        screen
    }

    #[test]
    fn test_new_screen() {
        let mut screen = Screen::new("Main");
        screen
            .background_color(Color::rgb(200, 200, 200))
            .grid_visible(false)
            .grid_step_x(5)
            .add_macro("P", "SYS:")
            .unwrap();

        let root = screen.element();
        assert_eq!(root.name(), "display");
        assert_eq!(root.attribute("version"), Some("2.0.0"));
        assert_eq!(screen.name(), Some("Main"));
        assert_eq!(root.find("grid_visible").unwrap().text(), Some("false"));
        assert_eq!(root.find("grid_step_x").unwrap().text(), Some("5"));
        assert_eq!(
            root.find("macros").unwrap().find("P").unwrap().text(),
            Some("SYS:")
        );
    }

    #[test]
    fn test_add_widgets_keeps_order() {
        let mut screen = Screen::new("Main");
        screen.add_widgets(vec![
            Label::new("A", "a", 0, 0, 10, 10),
            Label::new("B", "b", 0, 10, 10, 10),
        ]);
        screen.add_widget(TextUpdate::new("C", "SYS:C", 0, 20, 10, 10));
        let names: Vec<_> = screen
            .widgets()
            .filter_map(|w| w.find("name").and_then(Element::text))
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_find_nested_widgets() {
        let mut screen = sample_screen();
        assert_eq!(screen.widgets().count(), 3);
        assert!(screen.find_widget("Title").is_some());
        assert_eq!(
            screen.find_widget("RBV").unwrap().attribute("type"),
            Some("textupdate")
        );
        assert!(screen.find_widget("Hint").is_some());
        assert!(screen.find_widget("Nope").is_none());

        let rbv = screen.find_widget_mut("RBV").unwrap();
        properties::generic_property(rbv, "pv_name", Some("SYS:M2.RBV"));
        let rbv = screen.find_widget("RBV").unwrap();
        assert_eq!(rbv.find("pv_name").unwrap().text(), Some("SYS:M2.RBV"));
    }

    #[test]
    fn test_remove_widget() {
        let mut screen = sample_screen();
        let removed = screen.remove_widget("RBV").unwrap();
        assert_eq!(removed.attribute("type"), Some("textupdate"));
        assert!(screen.find_widget("RBV").is_none());
        assert!(screen.remove_widget("RBV").is_none());

        screen.remove_widget("Title").unwrap();
        assert_eq!(screen.widgets().count(), 2);
    }

    #[test]
    fn test_write_screen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motor.bob");
        let screen = sample_screen();
        screen.write_screen(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, screen.to_xml_string().unwrap());
        assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));

        // Overwrites an existing file.
        Screen::new("Other").write_screen(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<name>Other</name>"));
        assert!(!written.contains("Motor"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_screen_reports_full_device() {
        // Every write to /dev/full fails with ENOSPC, including the final flush.
        let err = Screen::new("S").write_screen("/dev/full").unwrap_err();
        assert!(matches!(err, crate::error::PhoebusError::Io(_)), "{:?}", err);
    }

    #[test]
    fn test_widget_trait_used_on_nested_label() {
        let mut label = Label::new("L", "x", 0, 0, 10, 10);
        label.visible(false);
        let mut screen = Screen::new("S");
        screen.add_widget(label);
        let found = screen.find_widget("L").unwrap();
        assert_eq!(found.find("visible").unwrap().text(), Some("false"));
    }
}

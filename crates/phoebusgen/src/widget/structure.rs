// crates/phoebusgen/src/widget/structure.rs

//! Widgets that contain other widgets or whole displays.

use super::{Widget, widget_element};
use crate::element::Element;
use crate::error::{PhoebusError, Result};
use crate::properties::{option_property, set_int, set_text};
use crate::types::{GroupStyle, Resize};
use log::debug;

widget! {
    /// A frame around nested widgets.
    Group => "group": ForegroundColor, BackgroundColor, Transparent, FontProperty, LineColor
}

impl Group {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    pub fn style(&mut self, style: GroupStyle) -> &mut Self {
        option_property(&mut self.root, "style", style);
        self
    }

    /// Nests a widget inside the group. Its position is relative to the group.
    pub fn add_widget<W: Widget>(&mut self, widget: W) -> &mut Self {
        self.root.push(widget.into_element());
        self
    }
}

widget! {
    /// Shows another `.bob` file inside this one.
    EmbeddedDisplay => "embedded": Border
}

impl EmbeddedDisplay {
    pub fn new(name: &str, file: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        let mut embedded = Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        };
        embedded.file(file);
        embedded
    }

    pub fn file(&mut self, file: &str) -> &mut Self {
        set_text(&mut self.root, "file", file);
        self
    }

    pub fn resize(&mut self, resize: Resize) -> &mut Self {
        option_property(&mut self.root, "resize", resize);
        self
    }

    /// Only show the group with this name from the embedded file.
    pub fn group_name(&mut self, group: &str) -> &mut Self {
        set_text(&mut self.root, "group_name", group);
        self
    }
}

widget! {
    Tabs => "tabs": BackgroundColor, FontProperty
}

impl Tabs {
    pub fn new(name: &str, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            root: widget_element(Self::KIND, name, x, y, width, height),
        }
    }

    /// Appends an empty tab.
    pub fn add_tab(&mut self, name: &str) -> &mut Self {
        let mut tab = Element::new("tab");
        set_text(&mut tab, "name", name);
        tab.push(Element::new("children"));
        self.root.get_or_insert("tabs").push(tab);
        self
    }

    /// Names of the tabs, in order.
    pub fn tab_names(&self) -> Vec<&str> {
        self.root
            .find("tabs")
            .map(|tabs| {
                tabs.find_all("tab")
                    .filter_map(|tab| tab.find("name").and_then(Element::text))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nests a widget inside the named tab.
    pub fn add_widget_to_tab<W: Widget>(&mut self, tab: &str, widget: W) -> Result<&mut Self> {
        let children = self
            .root
            .find_mut("tabs")
            .and_then(|tabs| {
                tabs.children_mut().iter_mut().find(|t| {
                    t.name() == "tab" && t.find("name").and_then(Element::text) == Some(tab)
                })
            })
            .map(|t| t.get_or_insert("children"))
            .ok_or_else(|| PhoebusError::UnknownTab(tab.to_string()))?;
        debug!("Adding {} widget to tab {}", W::KIND, tab);
        children.push(widget.into_element());
        Ok(self)
    }

    /// Index of the tab shown first.
    pub fn active_tab(&mut self, index: i64) -> &mut Self {
        set_int(&mut self.root, "active_tab", index);
        self
    }

    pub fn tab_height(&mut self, height: i64) -> &mut Self {
        set_int(&mut self.root, "tab_height", height);
        self
    }
}

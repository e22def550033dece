// crates/phoebusgen/src/outline.rs

//! Read-back of generated `.bob` files.
//!
//! Only the structure is recovered: widget kinds, names, geometry and a few
//! common properties. Everything else in the document is skipped.

use crate::error::Result;
use serde::Deserialize;

/// Root `<display>` of a `.bob` document.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct DisplayOutline {
    #[serde(rename = "@version", default)]
    pub version: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub width: Option<i64>,

    #[serde(default)]
    pub height: Option<i64>,

    #[serde(rename = "widget", default)]
    pub widgets: Vec<WidgetOutline>,
}

/// One `<widget>`, with the widgets nested inside it.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct WidgetOutline {
    #[serde(rename = "@type")]
    pub kind: String,

    #[serde(rename = "@version", default)]
    pub version: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub x: Option<i64>,

    #[serde(default)]
    pub y: Option<i64>,

    #[serde(default)]
    pub width: Option<i64>,

    #[serde(default)]
    pub height: Option<i64>,

    #[serde(default)]
    pub pv_name: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// Widgets nested directly, as in a group.
    #[serde(rename = "widget", default)]
    pub widgets: Vec<WidgetOutline>,

    /// Tabs of a tabs widget.
    #[serde(rename = "tabs", default)]
    pub tabs: Option<TabListOutline>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct TabListOutline {
    #[serde(rename = "tab", default)]
    pub tabs: Vec<TabOutline>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct TabOutline {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub children: Option<TabChildrenOutline>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct TabChildrenOutline {
    #[serde(rename = "widget", default)]
    pub widgets: Vec<WidgetOutline>,
}

impl DisplayOutline {
    /// Finds a widget by name at any nesting depth.
    pub fn find(&self, name: &str) -> Option<&WidgetOutline> {
        self.widgets.iter().find_map(|w| w.find(name))
    }

    /// Number of widgets in the document, nested ones included.
    pub fn widget_count(&self) -> usize {
        self.widgets.iter().map(WidgetOutline::count).sum()
    }
}

impl WidgetOutline {
    /// Returns this widget or a descendant with the given name.
    pub fn find(&self, name: &str) -> Option<&WidgetOutline> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.nested().find_map(|w| w.find(name))
    }

    /// Widgets nested directly or inside tabs.
    pub fn nested(&self) -> impl Iterator<Item = &WidgetOutline> {
        let in_tabs = self
            .tabs
            .iter()
            .flat_map(|list| list.tabs.iter())
            .filter_map(|tab| tab.children.as_ref())
            .flat_map(|children| children.widgets.iter());
        self.widgets.iter().chain(in_tabs)
    }

    fn count(&self) -> usize {
        1 + self.nested().map(WidgetOutline::count).sum::<usize>()
    }
}

/// Deserializes the outline of a `.bob` document.
pub fn read_outline(xml: &str) -> Result<DisplayOutline> {
    let outline = quick_xml::de::from_str(xml)?;
    Ok(outline)
}

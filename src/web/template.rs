//! The stamp new item elements are cloned from.
//!
//! The first item found in the markup is cloned and sanitized (unchecked, no
//! label text). A page without items gets a synthetic `div.item` holding a
//! checkbox and a label, built the first time an item is needed.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::binder::query_in;
use crate::config::WidgetConfig;
use crate::task::Task;

pub struct ItemTemplate {
    stamp: Option<Element>,
    config: WidgetConfig,
}

impl ItemTemplate {
    /// Capture the template from the first item under `list_root`.
    pub fn capture(list_root: Option<&Element>, config: &WidgetConfig) -> Self {
        let mut template = Self { stamp: None, config: config.clone() };
        if let Some(first) = list_root.and_then(|root| query_in(root, &config.selectors.item)) {
            template.adopt(&first);
        }
        template
    }

    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.stamp.is_some()
    }

    /// Take a sanitized copy of `element` as the stamp.
    pub fn adopt(&mut self, element: &Element) {
        self.stamp = self.sanitize(element);
    }

    /// Build a filled-in item element for `task`.
    pub fn stamp(&mut self, document: &Document, task: &Task) -> Option<Element> {
        let element = match &self.stamp {
            Some(stamp) => deep_clone(stamp)?,
            None => self.synthetic(document)?,
        };
        self.fill(&element, task);
        if self.stamp.is_none() {
            self.adopt(&element);
        }
        Some(element)
    }

    /// Write `done` onto an existing item: checkbox state and checked class.
    pub fn set_checked(&self, element: &Element, done: bool) {
        if let Some(checkbox) = self.checkbox(element) {
            checkbox.set_checked(done);
        }
        let _ = element.class_list().toggle_with_force(&self.config.classes.checked, done);
    }

    pub fn checkbox(&self, element: &Element) -> Option<HtmlInputElement> {
        query_in(element, &self.config.selectors.checkbox).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    pub fn label(&self, element: &Element) -> Option<Element> {
        query_in(element, &self.config.selectors.label)
    }

    fn fill(&self, element: &Element, task: &Task) {
        if let Some(label) = self.label(element) {
            label.set_text_content(Some(&task.text));
        }
        self.set_checked(element, task.done);
    }

    fn sanitize(&self, element: &Element) -> Option<Element> {
        let clone = deep_clone(element)?;
        let _ = clone.class_list().remove_1(&self.config.classes.checked);
        if let Some(checkbox) = self.checkbox(&clone) {
            checkbox.set_checked(false);
            let _ = checkbox.remove_attribute("checked");
        }
        if let Some(label) = self.label(&clone) {
            label.set_text_content(Some(""));
        }
        Some(clone)
    }

    fn synthetic(&self, document: &Document) -> Option<Element> {
        let element = document.create_element("div").ok()?;
        let _ = element.class_list().add_1(&self.config.classes.item);
        let checkbox = document.create_element("input").ok()?;
        let _ = checkbox.set_attribute("type", "checkbox");
        let label = document.create_element("span").ok()?;
        element.append_child(&checkbox).ok()?;
        element.append_child(&label).ok()?;
        Some(element)
    }
}

fn deep_clone(element: &Element) -> Option<Element> {
    element.clone_node_with_deep(true).ok()?.dyn_into::<Element>().ok()
}

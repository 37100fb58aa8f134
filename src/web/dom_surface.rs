//! [`Surface`] backed by the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use super::binder::{Anchors, query_all, query_in};
use super::template::ItemTemplate;
use crate::config::WidgetConfig;
use crate::markup;
use crate::surface::Surface;
use crate::task::{Filter, Task};

pub struct DomSurface {
    document: Document,
    anchors: Anchors,
    template: ItemTemplate,
    config: WidgetConfig,
}

impl DomSurface {
    pub fn new(document: Document, anchors: Anchors, config: WidgetConfig) -> Self {
        let template = ItemTemplate::capture(anchors.list_root.as_ref(), &config);
        Self { document, anchors, template, config }
    }

    #[must_use]
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Rendered item elements, in list order.
    #[must_use]
    pub fn item_elements(&self) -> Vec<Element> {
        self.anchors
            .list_root
            .as_ref()
            .map(|root| query_all(root, &self.config.selectors.item))
            .unwrap_or_default()
    }

    /// Position of `item` among the rendered items.
    #[must_use]
    pub fn index_of(&self, item: &Element) -> Option<usize> {
        let item: &Node = item;
        self.item_elements().iter().position(|el| el.is_same_node(Some(item)))
    }

    fn scrape(&self, element: &Element) -> Task {
        let label = self.template.label(element).and_then(|label| label.text_content());
        markup::scraped_task(
            label.as_deref(),
            element.class_list().contains(&self.config.classes.checked),
            self.template.checkbox(element).is_some_and(|c| c.checked()),
        )
    }
}

impl Surface for DomSurface {
    fn scrape_items(&self) -> Vec<Task> {
        self.item_elements().iter().map(|el| self.scrape(el)).collect()
    }

    fn render_items(&mut self, tasks: &[Task]) {
        let Some(root) = self.anchors.list_root.clone() else {
            return;
        };
        let fresh: Vec<Element> = tasks.iter().filter_map(|task| self.template.stamp(&self.document, task)).collect();

        for old in self.item_elements() {
            old.remove();
        }
        for element in &fresh {
            if let Err(e) = root.append_child(element) {
                log::warn!("failed to attach item: {e:?}");
            }
        }

        if !self.template.is_captured() {
            if let Some(first) = query_in(&root, &self.config.selectors.item) {
                self.template.adopt(&first);
            }
        }
    }

    fn mark_item(&mut self, index: usize, done: bool) {
        if let Some(element) = self.item_elements().get(index) {
            self.template.set_checked(element, done);
        }
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        let Some(element) = self.item_elements().into_iter().nth(index) else {
            return;
        };
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }

    fn set_counter(&mut self, text: &str) {
        if let Some(counter) = &self.anchors.counter {
            counter.set_text_content(Some(text));
        }
    }

    fn highlight_filter(&mut self, filter: Filter) {
        for (link_filter, link) in &self.anchors.filter_links {
            let active = *link_filter == filter;
            let _ = link.class_list().toggle_with_force(&self.config.classes.active, active);
            let _ = link.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
    }

    fn is_dark(&self) -> bool {
        self.anchors.body.as_ref().is_some_and(|body| body.class_list().contains(&self.config.classes.dark))
    }

    fn set_dark(&mut self, dark: bool) {
        if let Some(body) = &self.anchors.body {
            let _ = body.class_list().toggle_with_force(&self.config.classes.dark, dark);
        }
    }

    fn set_theme_pressed(&mut self, pressed: bool) {
        if let Some(toggle) = &self.anchors.theme_toggle {
            let _ = toggle.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
        }
    }
}

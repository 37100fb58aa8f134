//! Shared fixtures for unit tests.

use crate::surface::Surface;
use crate::task::{Filter, Task};

/// One rendered item as the fake page holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeItem {
    pub text: String,
    pub checked: bool,
    pub visible: bool,
}

/// Recording in-memory page. Each anchor can be switched off to exercise
/// missing-markup paths.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub has_list: bool,
    pub has_counter: bool,
    pub has_links: bool,
    pub has_toggle: bool,
    pub items: Vec<FakeItem>,
    pub counter: Option<String>,
    /// `(filter, active, aria-pressed)` per link.
    pub links: Vec<(Filter, bool, &'static str)>,
    pub dark: bool,
    pub theme_pressed: Option<&'static str>,
    pub renders: usize,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            has_list: true,
            has_counter: true,
            has_links: true,
            has_toggle: true,
            items: Vec::new(),
            counter: None,
            links: Filter::ALL.iter().map(|f| (*f, false, "false")).collect(),
            dark: false,
            theme_pressed: None,
            renders: 0,
        }
    }
}

impl FakeSurface {
    /// A page with pre-rendered items, as authored in the markup.
    #[must_use]
    pub fn with_markup(items: &[(&str, bool)]) -> Self {
        Self {
            items: items
                .iter()
                .map(|(text, checked)| FakeItem { text: (*text).to_owned(), checked: *checked, visible: true })
                .collect(),
            ..Self::default()
        }
    }

    /// A page with no anchors at all.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            has_list: false,
            has_counter: false,
            has_links: false,
            has_toggle: false,
            links: Vec::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.text.as_str()).collect()
    }

    #[must_use]
    pub fn visible_texts(&self) -> Vec<&str> {
        self.items.iter().filter(|i| i.visible).map(|i| i.text.as_str()).collect()
    }

    #[must_use]
    pub fn link(&self, filter: Filter) -> Option<(bool, &'static str)> {
        self.links.iter().find(|(f, _, _)| *f == filter).map(|(_, active, pressed)| (*active, *pressed))
    }
}

impl Surface for FakeSurface {
    fn scrape_items(&self) -> Vec<Task> {
        if !self.has_list {
            return Vec::new();
        }
        self.items.iter().map(|i| Task { text: i.text.trim().to_owned(), done: i.checked }).collect()
    }

    fn render_items(&mut self, tasks: &[Task]) {
        if !self.has_list {
            return;
        }
        self.renders += 1;
        self.items = tasks
            .iter()
            .map(|t| FakeItem { text: t.text.clone(), checked: t.done, visible: true })
            .collect();
    }

    fn mark_item(&mut self, index: usize, done: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = done;
        }
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.visible = visible;
        }
    }

    fn set_counter(&mut self, text: &str) {
        if self.has_counter {
            self.counter = Some(text.to_owned());
        }
    }

    fn highlight_filter(&mut self, filter: Filter) {
        if !self.has_links {
            return;
        }
        for (f, active, pressed) in &mut self.links {
            *active = *f == filter;
            *pressed = if *active { "true" } else { "false" };
        }
    }

    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_theme_pressed(&mut self, pressed: bool) {
        if self.has_toggle {
            self.theme_pressed = Some(if pressed { "true" } else { "false" });
        }
    }
}

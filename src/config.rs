//! Widget configuration: where state is persisted and how the page is read.
//!
//! DESIGN
//! ======
//! The host markup is not owned by this crate, so element discovery is driven
//! by named structural roles instead of fixed ids. Every role has a default
//! matching the stock to-do page. A host page overrides individual fields
//! with a JSON object in the `data-todo-config` attribute of `<html>`, e.g.
//! `{"keys": {"items": "work:todoItems"}, "classes": {"dark": "night"}}`.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_ITEMS_KEY: &str = "todoItems";

/// Attribute on the root element carrying configuration overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-todo-config";

/// Storage keys for the two persisted records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub theme: String,
    pub items: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { theme: DEFAULT_THEME_KEY.to_owned(), items: DEFAULT_ITEMS_KEY.to_owned() }
    }
}

/// CSS selectors naming each structural role in the host page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    /// A rendered task element.
    pub item: String,
    /// Outer wrapper searched when no item exists yet.
    pub container: String,
    /// List-like descendants of the container, tried in order.
    pub list_candidates: Vec<String>,
    /// Region holding the counter, filter links, and reset link.
    pub footer: String,
    /// Anchors inside the footer that may be routes.
    pub footer_links: String,
    pub theme_toggle: String,
    pub text_input: String,
    /// Checkbox inside an item.
    pub checkbox: String,
    /// Label inside an item.
    pub label: String,
    /// Counter lookup used when the footer has no bare text node.
    pub counter_fallback: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item: ".item".to_owned(),
            container: ".container".to_owned(),
            list_candidates: [".todo-items", ".todo-list", ".items", ".list", ".tasks", ".task-list", "ul", "ol"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            footer: ".footer".to_owned(),
            footer_links: "a[href]".to_owned(),
            theme_toggle: ".darkmode-toggle".to_owned(),
            text_input: "input[type=\"text\"]".to_owned(),
            checkbox: "input[type=\"checkbox\"]".to_owned(),
            label: "span".to_owned(),
            counter_fallback: "[data-counter], .item-count, .count, span, p".to_owned(),
        }
    }
}

/// Class names the widget reads and toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    /// Class given to items built from the synthetic template.
    pub item: String,
    /// Marks an item as completed.
    pub checked: String,
    /// Marks the filter link currently applied.
    pub active: String,
    /// Set on `<body>` while the dark theme is on.
    pub dark: String,
    /// Class of the footer region, used to reject list candidates.
    pub footer: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            item: "item".to_owned(),
            checked: "item-checked".to_owned(),
            active: "active".to_owned(),
            dark: "darkmode".to_owned(),
            footer: "footer".to_owned(),
        }
    }
}

/// Full widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub keys: StorageKeys,
    pub selectors: Selectors,
    pub classes: ClassNames,
}

impl WidgetConfig {
    /// Build the configuration from the root element's override attribute.
    ///
    /// A missing or blank attribute yields the defaults; so does malformed
    /// JSON, after logging it. Fields left out keep their defaults.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::error!("ignoring invalid {CONFIG_ATTRIBUTE}: {e}");
            Self::default()
        })
    }
}

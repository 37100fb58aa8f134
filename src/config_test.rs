use super::*;

#[test]
fn default_keys_match_stock_page() {
    let keys = StorageKeys::default();
    assert_eq!(keys.theme, "theme");
    assert_eq!(keys.items, "todoItems");
}

#[test]
fn list_candidates_keep_priority_order() {
    let selectors = Selectors::default();
    assert_eq!(selectors.list_candidates.first().map(String::as_str), Some(".todo-items"));
    assert_eq!(selectors.list_candidates.last().map(String::as_str), Some("ol"));
    assert_eq!(selectors.list_candidates.len(), 8);
}

#[test]
fn default_classes() {
    let classes = ClassNames::default();
    assert_eq!(classes.checked, "item-checked");
    assert_eq!(classes.active, "active");
    assert_eq!(classes.dark, "darkmode");
}

// =============================================================
// from_attribute
// =============================================================

#[test]
fn missing_or_blank_attribute_gives_defaults() {
    assert_eq!(WidgetConfig::from_attribute(None), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_attribute(Some("  ")), WidgetConfig::default());
}

#[test]
fn attribute_overrides_only_named_fields() {
    let config = WidgetConfig::from_attribute(Some(
        r#"{"keys": {"items": "work:todoItems"}, "classes": {"dark": "night"}}"#,
    ));
    assert_eq!(config.keys.items, "work:todoItems");
    assert_eq!(config.keys.theme, "theme");
    assert_eq!(config.classes.dark, "night");
    assert_eq!(config.classes.checked, "item-checked");
    assert_eq!(config.selectors, Selectors::default());
}

#[test]
fn attribute_uses_camel_case_field_names() {
    let config = WidgetConfig::from_attribute(Some(
        r##"{"selectors": {"listCandidates": [".my-list"], "themeToggle": "#theme"}}"##,
    ));
    assert_eq!(config.selectors.list_candidates, vec![".my-list".to_owned()]);
    assert_eq!(config.selectors.theme_toggle, "#theme");
    assert_eq!(config.selectors.item, ".item");
}

#[test]
fn malformed_attribute_falls_back_to_defaults() {
    assert_eq!(WidgetConfig::from_attribute(Some("{keys:")), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_attribute(Some(r#"{"keys": 5}"#)), WidgetConfig::default());
}

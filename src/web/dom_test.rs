use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node};

use super::binder::{Anchors, query_all, query_in};
use super::dom_surface::DomSurface;
use crate::app::TodoApp;
use crate::config::WidgetConfig;
use crate::storage::{KeyValueStore, MemoryStore, TaskStorage};
use crate::surface::Surface;
use crate::task::{Filter, Task};

wasm_bindgen_test_configure!(run_in_browser);

const TODO_PAGE: &str = r##"
<div class="container">
  <input type="text">
  <div class="todo-items">
    <div class="item item-checked"><input type="checkbox"><span>  Walk dog </span></div>
    <div class="item"><input type="checkbox" checked><span>Read</span></div>
    <div class="item"><input type="checkbox"><span>Cook</span></div>
  </div>
  <div class="footer">
    3 itens restantes
    <a href="#todos">Todos</a>
    <a href="#ATIVOS">Ativos</a>
    <a href="#concluidos">Concluidos</a>
    <a href="#reset">Limpar</a>
    <a href="https://example.com">Sobre</a>
  </div>
</div>
<a class="darkmode-toggle" href="#">tema</a>
"##;

/// Replace the test page body with `markup`.
fn page(markup: &str) -> Document {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let body = document.body().expect("body");
    body.set_class_name("");
    body.set_inner_html(markup);
    document
}

fn surface(markup: &str) -> DomSurface {
    let document = page(markup);
    let config = WidgetConfig::default();
    let anchors = Anchors::bind(&document, &config);
    DomSurface::new(document, anchors, config)
}

fn checkbox(item: &Element) -> HtmlInputElement {
    query_in(item, "input[type=\"checkbox\"]").and_then(|el| el.dyn_into().ok()).expect("checkbox")
}

fn label_text(item: &Element) -> String {
    query_in(item, "span").and_then(|el| el.text_content()).unwrap_or_default()
}

fn display(item: &Element) -> String {
    item.dyn_ref::<HtmlElement>().expect("html element").style().get_property_value("display").unwrap_or_default()
}

// =============================================================
// Anchors::bind
// =============================================================

#[wasm_bindgen_test]
fn bind_finds_every_anchor_on_stock_page() {
    let document = page(TODO_PAGE);
    let anchors = Anchors::bind(&document, &WidgetConfig::default());

    assert_eq!(anchors.list_root.as_ref().map(Element::class_name).as_deref(), Some("todo-items"));
    assert!(anchors.input.is_some());
    assert!(anchors.theme_toggle.is_some());
    assert!(anchors.body.is_some());
    assert_eq!(anchors.reset.and_then(|r| r.get_attribute("href")).as_deref(), Some("#reset"));

    let filters: Vec<Filter> = anchors.filter_links.iter().map(|(f, _)| *f).collect();
    assert_eq!(filters, vec![Filter::All, Filter::Active, Filter::Completed]);
    assert_eq!(anchors.filter_links[1].1.get_attribute("data-filter").as_deref(), Some("ativos"));
}

#[wasm_bindgen_test]
fn counter_is_first_non_blank_footer_text_node() {
    let document = page(TODO_PAGE);
    let counter = Anchors::bind(&document, &WidgetConfig::default()).counter.expect("counter");
    assert_eq!(counter.node_type(), Node::TEXT_NODE);
    assert_eq!(counter.text_content().map(|t| t.trim().to_owned()).as_deref(), Some("3 itens restantes"));
}

#[wasm_bindgen_test]
fn counter_falls_back_to_counter_like_element() {
    let document = page(r#"<div class="container"><ul></ul><div class="footer">  <span></span> </div></div>"#);
    let counter = Anchors::bind(&document, &WidgetConfig::default()).counter.expect("counter");
    assert_eq!(counter.node_name(), "SPAN");
}

#[wasm_bindgen_test]
fn list_root_skips_candidates_inside_footer() {
    let document = page(
        r#"<div class="container">
             <div class="footer"><ul class="todo-items"></ul></div>
             <ol class="todo-list"></ol>
           </div>"#,
    );
    let anchors = Anchors::bind(&document, &WidgetConfig::default());
    assert_eq!(anchors.list_root.map(|el| el.class_name()).as_deref(), Some("todo-list"));
}

#[wasm_bindgen_test]
fn list_root_falls_back_to_container() {
    let document = page(r#"<div class="container"><div class="footer"><ul></ul></div></div>"#);
    let anchors = Anchors::bind(&document, &WidgetConfig::default());
    assert_eq!(anchors.list_root.map(|el| el.class_name()).as_deref(), Some("container"));
}

#[wasm_bindgen_test]
fn bare_page_binds_nothing_and_renders_nothing() {
    let mut surface = surface("<p>nothing here</p>");
    assert!(surface.anchors().list_root.is_none());
    assert!(surface.anchors().counter.is_none());
    assert!(surface.anchors().filter_links.is_empty());
    surface.render_items(&[Task::new("a")]);
    surface.set_counter("1 item restante");
    assert!(surface.item_elements().is_empty());
}

// =============================================================
// DomSurface::scrape_items
// =============================================================

#[wasm_bindgen_test]
fn scrape_reads_trimmed_label_and_checked_class_or_checkbox() {
    let surface = surface(TODO_PAGE);
    assert_eq!(
        surface.scrape_items(),
        vec![
            Task { text: "Walk dog".into(), done: true },
            Task { text: "Read".into(), done: true },
            Task { text: "Cook".into(), done: false },
        ]
    );
}

// =============================================================
// ItemTemplate via render_items
// =============================================================

#[wasm_bindgen_test]
fn rendered_items_come_from_sanitized_template() {
    let mut surface = surface(
        r#"<div class="container"><div class="todo-items">
             <div class="item item-checked"><input type="checkbox" checked><span>Old</span></div>
           </div></div>"#,
    );
    surface.render_items(&[Task::new("x"), Task { text: "y".into(), done: true }]);

    let items = surface.item_elements();
    assert_eq!(items.len(), 2);

    let open = &items[0];
    assert!(!open.class_list().contains("item-checked"));
    assert!(!checkbox(open).checked());
    assert!(!checkbox(open).has_attribute("checked"));
    assert_eq!(label_text(open), "x");

    let done = &items[1];
    assert!(done.class_list().contains("item-checked"));
    assert!(checkbox(done).checked());
    assert_eq!(label_text(done), "y");
}

#[wasm_bindgen_test]
fn synthetic_template_is_used_when_page_has_no_items() {
    let mut surface = surface(r#"<div class="container"><ul class="todo-list"></ul></div>"#);
    surface.render_items(&[Task::new("first")]);

    let root = surface.anchors().list_root.clone().expect("list root");
    let items = query_all(&root, ".item");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].tag_name(), "DIV");
    assert!(!checkbox(&items[0]).checked());
    assert_eq!(label_text(&items[0]), "first");

    surface.render_items(&[Task::new("a"), Task::new("b")]);
    let texts: Vec<String> = surface.item_elements().iter().map(label_text).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

// =============================================================
// TodoApp on the real page
// =============================================================

#[wasm_bindgen_test]
fn bootstrap_seeds_storage_from_markup() {
    let surface = surface(TODO_PAGE);
    let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut app = TodoApp::new(TaskStorage::new(backend, WidgetConfig::default().keys), surface);
    app.bootstrap();

    assert_eq!(
        app.storage().load_tasks(),
        vec![
            Task { text: "Walk dog".into(), done: true },
            Task { text: "Read".into(), done: true },
            Task { text: "Cook".into(), done: false },
        ]
    );
    assert_eq!(app.surface().item_elements().len(), 3);
    let counter = app.surface().anchors().counter.clone().expect("counter");
    assert_eq!(counter.text_content().as_deref(), Some("1 item restante"));
}

#[wasm_bindgen_test]
fn active_filter_hides_done_items_and_presses_link() {
    let surface = surface(TODO_PAGE);
    let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut app = TodoApp::new(TaskStorage::new(backend, WidgetConfig::default().keys), surface);
    app.bootstrap();
    app.apply_filter(Filter::Active);

    let shown: Vec<String> = app.surface().item_elements().iter().map(display).collect();
    assert_eq!(shown, vec!["none", "none", ""]);
    for (filter, link) in &app.surface().anchors().filter_links {
        let active = *filter == Filter::Active;
        assert_eq!(link.class_list().contains("active"), active);
        assert_eq!(link.get_attribute("aria-pressed").as_deref(), Some(if active { "true" } else { "false" }));
    }
}

//! Discovery of the widget's anchors in the host document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup is authored elsewhere and carries no fixed ids, so every anchor
//! is found through the structural roles in [`Selectors`]. Whatever is not
//! found stays `None` and the operations that need it do nothing.
//!
//! TRADE-OFFS
//! ==========
//! Counter and footer-link discovery is purely structural (first non-blank
//! text node, first anchors with known hash routes). Unusual markup can make
//! it pick the wrong node; that degrades silently rather than erroring.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node};

use crate::config::{ClassNames, Selectors, WidgetConfig};
use crate::markup;
use crate::router::FooterRoute;
use crate::task::Filter;

/// `NodeFilter.SHOW_TEXT`.
const SHOW_TEXT: u32 = 0x4;

/// Best-effort references into the host document.
#[derive(Debug, Clone, Default)]
pub struct Anchors {
    pub body: Option<HtmlElement>,
    pub list_root: Option<Element>,
    /// Text node or element whose content is the remaining-count label.
    pub counter: Option<Node>,
    pub filter_links: Vec<(Filter, Element)>,
    pub reset: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub input: Option<HtmlInputElement>,
}

impl Anchors {
    /// Locate every anchor in `document`.
    pub fn bind(document: &Document, config: &WidgetConfig) -> Self {
        let selectors = &config.selectors;
        let footer = query(document, &selectors.footer);
        let (filter_links, reset) = footer.as_ref().map(|f| footer_links(f, selectors)).unwrap_or_default();

        let anchors = Self {
            body: document.body(),
            list_root: find_list_root(document, selectors, &config.classes),
            counter: footer.as_ref().and_then(|f| locate_counter(document, f, selectors)),
            filter_links,
            reset,
            theme_toggle: query(document, &selectors.theme_toggle),
            input: query(document, &selectors.text_input).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        };
        log::debug!(
            "bound anchors: list={} counter={} filters={} reset={} toggle={} input={}",
            anchors.list_root.is_some(),
            anchors.counter.is_some(),
            anchors.filter_links.len(),
            anchors.reset.is_some(),
            anchors.theme_toggle.is_some(),
            anchors.input.is_some(),
        );
        anchors
    }
}

/// First element matching `selector`. Invalid selectors match nothing.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The parent of the first item; else the first list-like descendant of the
/// container that is not part of the footer; else the container itself.
fn find_list_root(document: &Document, selectors: &Selectors, classes: &ClassNames) -> Option<Element> {
    let first_item_parent = query(document, &selectors.item).and_then(|item| item.parent_element());
    markup::choose_list_root(first_item_parent, query(document, &selectors.container), |container| {
        selectors
            .list_candidates
            .iter()
            .filter_map(|selector| query_in(container, selector))
            .map(|candidate| {
                let in_footer = candidate.class_list().contains(&classes.footer)
                    || candidate.closest(&selectors.footer).ok().flatten().is_some();
                (candidate, in_footer)
            })
            .collect::<Vec<_>>()
    })
}

/// Split footer anchors into filter links and the reset link. Filter links
/// are tagged with `data-filter` so the click handler can read them back.
fn footer_links(footer: &Element, selectors: &Selectors) -> (Vec<(Filter, Element)>, Option<Element>) {
    let mut filters = Vec::new();
    let mut reset = None;
    for link in query_all(footer, &selectors.footer_links) {
        let href = link.get_attribute("href").unwrap_or_default();
        match FooterRoute::classify(&href) {
            Some(FooterRoute::Filter(filter)) => {
                let _ = link.set_attribute("data-filter", filter.route());
                filters.push((filter, link));
            }
            Some(FooterRoute::Reset) => reset = Some(link),
            None => {}
        }
    }
    (filters, reset)
}

/// First non-blank text node in the footer, else the first counter-like
/// element.
fn locate_counter(document: &Document, footer: &Element, selectors: &Selectors) -> Option<Node> {
    if let Ok(walker) = document.create_tree_walker_with_what_to_show(footer, SHOW_TEXT) {
        while let Ok(Some(node)) = walker.next_node() {
            if markup::is_counter_text(node.text_content().as_deref()) {
                return Some(node);
            }
        }
    }
    query_in(footer, &selectors.counter_fallback).map(Node::from)
}

//! Browser entry point and `web-sys` glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Start-up order: read overrides from `<html data-todo-config>`, apply the
//! stored theme as early as possible, wait for the document to finish
//! parsing, bind anchors, load or seed tasks, paint, then attach listeners. The resulting [`events::SharedApp`] is never torn down.

pub mod binder;
pub mod dom_surface;
pub mod events;
pub mod local_storage;
pub mod template;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use self::binder::Anchors;
use self::dom_surface::DomSurface;
use crate::app::TodoApp;
use crate::config::{CONFIG_ATTRIBUTE, WidgetConfig};
use crate::storage::{KeyValueStore, TaskStorage};
use crate::task::Theme;

/// Module start hook: read configuration overrides from the root element
/// and mount.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; widget not mounted");
        return;
    };
    let raw = document.document_element().and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    start_with_config(document, WidgetConfig::from_attribute(raw.as_deref()));
}

fn start_with_config(document: Document, config: WidgetConfig) {
    let storage = TaskStorage::new(local_storage::open_or_memory(), config.keys.clone());
    apply_theme_early(&document, storage.load_theme(), &config);

    if document.ready_state() == "loading" {
        let target = document.clone();
        let listener = Closure::once(move |_: Event| mount(&target, storage, config));
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
        {
            log::error!("failed to wait for DOMContentLoaded: {e:?}");
        }
        listener.forget();
    } else {
        mount(&document, storage, config);
    }
}

// Runs before the body is parsed when the module loads from <head>; the
// theme is reapplied at mount in that case.
fn apply_theme_early(document: &Document, theme: Option<Theme>, config: &WidgetConfig) {
    let (Some(body), Some(theme)) = (document.body(), theme) else {
        return;
    };
    let _ = body.class_list().toggle_with_force(&config.classes.dark, theme.is_dark());
}

fn mount(document: &Document, storage: TaskStorage<Box<dyn KeyValueStore>>, config: WidgetConfig) {
    let anchors = Anchors::bind(document, &config);
    let item_selector = config.selectors.item.clone();
    let surface = DomSurface::new(document.clone(), anchors, config);

    let mut app = TodoApp::new(storage, surface);
    app.apply_stored_theme();
    app.bootstrap();
    log::info!("todo widget mounted with {} tasks", app.store().len());

    let app = Rc::new(RefCell::new(app));
    events::bind(&app, &item_selector);
}

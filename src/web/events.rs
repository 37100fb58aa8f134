//! DOM listener wiring.
//!
//! Each listener turns one DOM event into one [`UiEvent`]. Footer links and
//! the theme toggle are `href` anchors used as buttons, so their default
//! navigation is always prevented. Listeners live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

use super::dom_surface::DomSurface;
use crate::app::TodoApp;
use crate::router::{Reaction, UiEvent, is_submit_key};
use crate::storage::KeyValueStore;
use crate::task::Filter;

pub type SharedApp = Rc<RefCell<TodoApp<Box<dyn KeyValueStore>, DomSurface>>>;

/// Attach every listener whose anchor was found.
pub fn bind(app: &SharedApp, item_selector: &str) {
    let anchors = app.borrow().surface().anchors().clone();

    if let Some(toggle) = &anchors.theme_toggle {
        bind_button(app, toggle, || UiEvent::ToggleTheme);
    }

    if let Some(root) = &anchors.list_root {
        let app = Rc::clone(app);
        let item_selector = item_selector.to_owned();
        listen(root, "change", move |event: Event| {
            if let Some(ui_event) = checkbox_change(&app, &event, &item_selector) {
                dispatch(&app, ui_event);
            }
        });
    }

    if let Some(input) = &anchors.input {
        let app = Rc::clone(app);
        let field = input.clone();
        listen(input, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if !is_submit_key(&key) {
                return;
            }
            if dispatch(&app, UiEvent::Submitted(field.value())) == Reaction::ClearInput {
                field.set_value("");
            }
        });
    }

    for (_, link) in &anchors.filter_links {
        let tagged = link.clone();
        bind_button(app, link, move || {
            let filter = tagged.get_attribute("data-filter").and_then(|route| Filter::from_route(&route));
            UiEvent::FilterSelected(filter)
        });
    }

    if let Some(reset) = &anchors.reset {
        bind_button(app, reset, || UiEvent::ClearCompleted);
    }
}

/// Resolve a `change` event on the list to the item it came from. Events
/// that are not from a checkbox inside an item are dropped.
fn checkbox_change(app: &SharedApp, event: &Event, item_selector: &str) -> Option<UiEvent> {
    let checkbox = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    if checkbox.type_() != "checkbox" {
        return None;
    }
    let item = checkbox.closest(item_selector).ok().flatten()?;
    let index = app.try_borrow().ok()?.surface().index_of(&item)?;
    Some(UiEvent::CheckboxChanged { index, checked: checkbox.checked() })
}

/// Click handler for an anchor repurposed as a button.
fn bind_button(app: &SharedApp, element: &Element, mut to_event: impl FnMut() -> UiEvent + 'static) {
    let app = Rc::clone(app);
    listen(element, "click", move |event: Event| {
        event.prevent_default();
        dispatch(&app, to_event());
    });
}

fn dispatch(app: &SharedApp, event: UiEvent) -> Reaction {
    match app.try_borrow_mut() {
        Ok(mut app) => app.dispatch(event),
        Err(_) => {
            log::debug!("dropped re-entrant {event:?}");
            Reaction::Ignored
        }
    }
}

fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {name}: {e:?}");
    }
    cb.forget();
}

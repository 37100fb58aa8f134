//! To-do list widget that binds to an already-rendered page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It keeps
//! three representations of one task list in step: the in-memory
//! [`store::TaskStore`], the serialized copy in `localStorage`, and the item
//! elements rendered inside the page's list container. The host page owns the
//! markup and styling; the widget discovers what it needs at start-up and
//! quietly skips whatever it cannot find.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Storage keys, structural selectors, and class names |
//! | [`markup`] | Container choice and scrape rules for host markup |
//! | [`task`] | `Task`, `Filter`, and `Theme` value types |
//! | [`storage`] | Key-value store seam and the task/theme storage adapter |
//! | [`store`] | In-memory task list and active filter |
//! | [`surface`] | What the core needs from a rendered document |
//! | [`render`] | Projection of store state onto a [`surface::Surface`] |
//! | [`router`] | UI events and footer route classification |
//! | [`app`] | [`app::TodoApp`]: bootstrap and event dispatch |
//! | `web` | `web-sys` shell (feature `browser`) |

pub mod app;
pub mod config;
pub mod markup;
pub mod render;
pub mod router;
pub mod storage;
pub mod store;
pub mod surface;
pub mod task;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
pub mod test_helpers;

//! The widget's single application-state object.
//!
//! DESIGN
//! ======
//! `TodoApp` owns the task store, the storage adapter, and the surface. It is
//! created once at start-up and lives for the rest of the page session. Every
//! handler runs to completion inside one event-loop turn: mutate, persist,
//! repaint. A reader inspecting storage right after a handler returns sees
//! the latest state.
//!
//! ERROR HANDLING
//! ==============
//! Persistence failures are logged and otherwise ignored; the in-memory list
//! and the page stay updated, so the session keeps working.

use crate::render;
use crate::router::{Reaction, UiEvent};
use crate::storage::{KeyValueStore, TaskStorage};
use crate::store::TaskStore;
use crate::surface::Surface;
use crate::task::{Filter, Theme};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub struct TodoApp<K, S> {
    store: TaskStore,
    storage: TaskStorage<K>,
    surface: S,
}

impl<K: KeyValueStore, S: Surface> TodoApp<K, S> {
    pub fn new(storage: TaskStorage<K>, surface: S) -> Self {
        Self { store: TaskStore::new(), storage, surface }
    }

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    #[must_use]
    pub fn storage(&self) -> &TaskStorage<K> {
        &self.storage
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply the stored theme to the page. No stored preference leaves the
    /// document default in place.
    pub fn apply_stored_theme(&mut self) {
        if let Some(theme) = self.storage.load_theme() {
            self.surface.set_dark(theme.is_dark());
        }
    }

    /// Load tasks and paint the first frame.
    ///
    /// Persisted tasks win. With nothing persisted, the items authored in the
    /// markup become the list and are written back once, so they survive the
    /// next reload.
    pub fn bootstrap(&mut self) {
        let stored = self.storage.load_tasks();
        if stored.is_empty() {
            let scraped = self.surface.scrape_items();
            log::debug!("no saved tasks; seeding {} from markup", scraped.len());
            self.store = TaskStore::from_tasks(scraped);
            self.persist();
        } else {
            log::debug!("loaded {} saved tasks", stored.len());
            self.store = TaskStore::from_tasks(stored);
        }
        render::paint(&mut self.surface, &self.store);
        self.sync_theme_toggle();
    }

    /// Route one UI event to its store operation.
    pub fn dispatch(&mut self, event: UiEvent) -> Reaction {
        match event {
            UiEvent::CheckboxChanged { index, checked } => self.set_done(index, checked),
            UiEvent::Submitted(text) => {
                if self.add_task(&text) { Reaction::ClearInput } else { Reaction::Ignored }
            }
            UiEvent::FilterSelected(filter) => {
                self.apply_filter(filter.unwrap_or_default());
                Reaction::Applied
            }
            UiEvent::ClearCompleted => {
                if self.clear_completed() { Reaction::Applied } else { Reaction::Ignored }
            }
            UiEvent::ToggleTheme => {
                self.toggle_theme();
                Reaction::Applied
            }
        }
    }

    /// Flip the task at `index`. Out-of-range indices are ignored.
    pub fn toggle_done(&mut self, index: usize) -> bool {
        match self.store.toggle_done(index) {
            Some(done) => {
                self.after_check(index, done);
                true
            }
            None => false,
        }
    }

    /// Append a task. Blank text is rejected without persisting.
    pub fn add_task(&mut self, text: &str) -> bool {
        if !self.store.add_task(text) {
            return false;
        }
        self.persist();
        render::paint(&mut self.surface, &self.store);
        true
    }

    /// Remove finished tasks. Does nothing, not even a write, when none are
    /// finished.
    pub fn clear_completed(&mut self) -> bool {
        if self.store.clear_completed() == 0 {
            return false;
        }
        self.persist();
        render::paint(&mut self.surface, &self.store);
        true
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        render::apply_filter(&mut self.surface, &self.store);
    }

    /// Flip the page theme and persist the result.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = Theme::from_dark(!self.surface.is_dark());
        self.surface.set_dark(theme.is_dark());
        if let Err(e) = self.storage.save_theme(theme) {
            log::error!("failed to save theme: {e}");
        }
        self.sync_theme_toggle();
        theme
    }

    fn set_done(&mut self, index: usize, done: bool) -> Reaction {
        if !self.store.set_done(index, done) {
            return Reaction::Ignored;
        }
        self.after_check(index, done);
        Reaction::Applied
    }

    // The checked item is restyled in place rather than re-rendered, so the
    // checkbox keeps focus.
    fn after_check(&mut self, index: usize, done: bool) {
        self.surface.mark_item(index, done);
        self.persist();
        render::refresh(&mut self.surface, &self.store);
    }

    fn sync_theme_toggle(&mut self) {
        let dark = self.surface.is_dark();
        self.surface.set_theme_pressed(dark);
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save_tasks(self.store.tasks()) {
            log::error!("failed to save tasks: {e}");
        }
    }
}

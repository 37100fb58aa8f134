//! In-memory task list and active filter.
//!
//! DESIGN
//! ======
//! `TaskStore` is the only owner of the task list. Rendered elements and the
//! persisted record are projections of it. Mutations report whether anything
//! changed so the caller can skip persisting and repainting on no-ops.

use crate::task::{Filter, Task};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing list. The filter starts at [`Filter::All`].
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, filter: Filter::All }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks not yet done.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    /// Flip `done` at `index`. Returns the new value, or `None` if the index
    /// is out of range.
    pub fn toggle_done(&mut self, index: usize) -> Option<bool> {
        let task = self.tasks.get_mut(index)?;
        task.done = !task.done;
        Some(task.done)
    }

    /// Set `done` at `index`. Returns `false` if the index is out of range.
    pub fn set_done(&mut self, index: usize, done: bool) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    /// Append a new open task. Blank text is rejected and returns `false`.
    pub fn add_task(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text));
        true
    }

    /// Drop every finished task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }
}

//! Task, filter, and theme value types.
//!
//! A task has no identifier: its position in the list is its identity, and
//! insertion order is display order is persisted order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

/// One to-do entry. Serialized as `{"text": ..., "done": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), done: false }
    }

    /// Coerce one stored record into a task.
    ///
    /// Returns `None` unless the record is an object with a string `text`.
    /// `done` follows JavaScript truthiness, so `1` or `"yes"` count as done
    /// and `null`, `0`, `""`, or a missing field do not.
    #[must_use]
    pub fn from_record(record: &Value) -> Option<Self> {
        let object = record.as_object()?;
        let text = object.get("text")?.as_str()?.to_owned();
        let done = object.get("done").is_some_and(is_truthy);
        Some(Self { text, done })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Visibility predicate over the task list. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// `todos`: every task.
    #[default]
    All,
    /// `ativos`: tasks not yet done.
    Active,
    /// `concluidos`: finished tasks.
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Route name used in footer hrefs and `data-filter` attributes.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::All => "todos",
            Self::Active => "ativos",
            Self::Completed => "concluidos",
        }
    }

    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.route() == route)
    }

    /// Whether a task with the given completion state is shown.
    #[must_use]
    pub fn shows(self, done: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !done,
            Self::Completed => done,
        }
    }
}

/// Persisted colour scheme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than the two literals is treated
    /// as no preference.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

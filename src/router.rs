//! UI events understood by the widget and how footer links map onto them.
//!
//! Each DOM interaction becomes exactly one [`UiEvent`]; [`crate::app::TodoApp::dispatch`]
//! turns it into one store operation and tells the shell what to do with the
//! originating control through a [`Reaction`].

use crate::task::Filter;

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A checkbox inside the item at `index` changed to `checked`.
    CheckboxChanged { index: usize, checked: bool },
    /// Enter pressed in the text input holding `value`.
    Submitted(String),
    /// A filter link was clicked. `None` when the link names no filter.
    FilterSelected(Option<Filter>),
    /// The reset link was clicked.
    ClearCompleted,
    /// The theme toggle was clicked.
    ToggleTheme,
}

/// What the shell should do after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// The event was rejected or changed nothing.
    Ignored,
    Applied,
    /// A task was added from the input; empty the field.
    ClearInput,
}

/// Role of an anchor found in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterRoute {
    Filter(Filter),
    Reset,
}

impl FooterRoute {
    /// Classify an anchor by its `href` (`#todos`, `#ativos`,
    /// `#concluidos`, `#reset`), ignoring case.
    #[must_use]
    pub fn classify(href: &str) -> Option<Self> {
        let href = href.trim().to_ascii_lowercase();
        let route = href.strip_prefix('#')?;
        if route == "reset" {
            return Some(Self::Reset);
        }
        Filter::from_route(route).map(Self::Filter)
    }
}

/// Is this a keydown that should submit the input?
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

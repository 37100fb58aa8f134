//! Projection of [`TaskStore`] state onto a [`Surface`].
//!
//! Rendering replaces item elements wholesale; there is no diffing. Filtering
//! only changes visibility and link styling, never the list or its order.

use crate::store::TaskStore;
use crate::surface::Surface;
use crate::task::{Filter, Task};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Remaining-count label: `"1 item restante"` or `"N itens restantes"`.
#[must_use]
pub fn counter_label(remaining: usize) -> String {
    if remaining == 1 {
        format!("{remaining} item restante")
    } else {
        format!("{remaining} itens restantes")
    }
}

/// Per-item visibility under `filter`, in list order.
#[must_use]
pub fn visibility(tasks: &[Task], filter: Filter) -> Vec<bool> {
    tasks.iter().map(|t| filter.shows(t.done)).collect()
}

pub fn update_counter(surface: &mut impl Surface, store: &TaskStore) {
    surface.set_counter(&counter_label(store.remaining()));
}

/// Hide items the active filter rejects and highlight its link.
pub fn apply_filter(surface: &mut impl Surface, store: &TaskStore) {
    for (index, visible) in visibility(store.tasks(), store.filter()).into_iter().enumerate() {
        surface.set_item_visible(index, visible);
    }
    surface.highlight_filter(store.filter());
}

/// Full repaint: items, counter, filter.
pub fn paint(surface: &mut impl Surface, store: &TaskStore) {
    surface.render_items(store.tasks());
    refresh(surface, store);
}

/// Counter and filter only, for changes that leave the item elements alone.
pub fn refresh(surface: &mut impl Surface, store: &TaskStore) {
    update_counter(surface, store);
    apply_filter(surface, store);
}

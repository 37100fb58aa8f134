//! Rules for reading the host markup, independent of any DOM binding.
//!
//! `web::binder` and `web::dom_surface` feed element facts into these
//! functions and act on the answer, so the selection order and the scrape
//! rule are the same whether the page is real or not.

use crate::task::Task;

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Pick the list container.
///
/// The parent of the first item wins. Otherwise `candidates` is asked for
/// the container's list-like descendants in priority order, each paired with
/// whether it sits inside the footer; the first one outside the footer wins.
/// With no such candidate the container itself is used.
pub fn choose_list_root<T, I>(
    first_item_parent: Option<T>,
    container: Option<T>,
    candidates: impl FnOnce(&T) -> I,
) -> Option<T>
where
    I: IntoIterator<Item = (T, bool)>,
{
    if first_item_parent.is_some() {
        return first_item_parent;
    }
    let container = container?;
    let chosen = candidates(&container).into_iter().find(|(_, in_footer)| !in_footer).map(|(candidate, _)| candidate);
    Some(chosen.unwrap_or(container))
}

/// Whether a footer text node can hold the remaining-count label.
#[must_use]
pub fn is_counter_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Task read from one pre-rendered item. The label text is trimmed; the
/// item is done if it carries the checked class or its checkbox is ticked.
#[must_use]
pub fn scraped_task(label: Option<&str>, has_checked_class: bool, checkbox_checked: bool) -> Task {
    Task {
        text: label.map(str::trim).unwrap_or_default().to_owned(),
        done: has_checked_class || checkbox_checked,
    }
}

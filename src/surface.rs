//! The rendered document as seen by the core.
//!
//! DESIGN
//! ======
//! The browser implementation (`web::dom_surface`) resolves every call
//! against anchors discovered at start-up. An anchor that was not found turns
//! the matching calls into no-ops, so implementations never fail.

use crate::task::{Filter, Task};

/// Operations the renderer and event router perform on the page.
///
/// Item indices are positions among the currently rendered item elements.
pub trait Surface {
    /// Read tasks from items already present in the markup.
    fn scrape_items(&self) -> Vec<Task>;

    /// Replace every rendered item with fresh elements for `tasks`.
    fn render_items(&mut self, tasks: &[Task]);

    /// Set the checked styling of one rendered item.
    fn mark_item(&mut self, index: usize, done: bool);

    fn set_item_visible(&mut self, index: usize, visible: bool);

    fn set_counter(&mut self, text: &str);

    /// Mark `filter`'s link active and pressed; clear the others.
    fn highlight_filter(&mut self, filter: Filter);

    /// Whether the page currently shows the dark theme.
    fn is_dark(&self) -> bool;

    fn set_dark(&mut self, dark: bool);

    /// Reflect the theme state on the toggle's `aria-pressed`.
    fn set_theme_pressed(&mut self, pressed: bool);
}

//! Keyboard navigation.

use crate::input::{EventResult, Key};

use super::List;

impl<T> List<T> {
    /// Handle a key press.
    ///
    /// Up/Down move focus by one row, PageUp/PageDown by a viewport worth of
    /// rows and Home/End to the ends. Focus changes scroll the focused item
    /// into view. Space and Enter activate the focused item.
    pub fn handle_key(&mut self, key: Key) -> EventResult {
        let count = self.len();
        if count == 0 {
            return EventResult::Ignored;
        }

        let last = count - 1;
        let page = (self.scroll.max_display().floor() as usize).max(1);
        let current = self.focus_index();

        let next = match key {
            Key::Up => current.map_or(0, |i| i.saturating_sub(1)),
            Key::Down => current.map_or(0, |i| i.saturating_add(1).min(last)),
            Key::PageUp => current.map_or(0, |i| i.saturating_sub(page)),
            Key::PageDown => current.map_or(0, |i| i.saturating_add(page).min(last)),
            Key::Home => 0,
            Key::End => last,
            Key::Space | Key::Enter => return self.activate().into(),
            Key::Char(_) => return EventResult::Ignored,
        };

        if current != Some(next) {
            log::trace!("{}: focus {:?} -> {}", self.id, current, next);
        }

        let events = self.selection.focus(Some(next), count);
        self.ensure_visible(next);
        self.refresh();
        self.emit(events);
        EventResult::Consumed
    }
}

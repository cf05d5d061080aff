//! Single selection, optionally following focus.

use log::trace;

use crate::error::{ListError, Result};
use crate::input::Modifiers;

use super::shift;
use super::{SelectionEvent, SelectionStrategy};

/// At most one selected item plus a focus index.
///
/// When the selection follows focus (the default), moving focus moves the
/// selection. Otherwise an item can be focused without being selected and
/// activation selects the focused item, which is how radio-style lists work.
#[derive(Debug, Clone)]
pub struct SingleSelection {
    selected: Option<usize>,
    focus: Option<usize>,
    follows_focus: bool,
}

impl Default for SingleSelection {
    fn default() -> Self {
        Self {
            selected: None,
            focus: None,
            follows_focus: true,
        }
    }
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn follows_focus(&self) -> bool {
        self.follows_focus
    }

    /// Select `index`, or clear the selection with `None`.
    ///
    /// Fails if `index` is not below `count`.
    pub fn set_selected_index(
        &mut self,
        index: Option<usize>,
        count: usize,
    ) -> Result<Vec<SelectionEvent>> {
        if let Some(i) = index
            && i >= count
        {
            return Err(ListError::out_of_range(i, count));
        }

        if self.follows_focus {
            self.focus = index;
        }
        Ok(self.select(index))
    }

    /// Change whether the selection follows focus.
    ///
    /// Turning it on while focus and selection differ moves the selection to
    /// the focused item.
    pub fn set_follows_focus(&mut self, value: bool) -> Vec<SelectionEvent> {
        let mut events = Vec::new();

        if value && !self.follows_focus {
            if self.focus.is_some() {
                events = self.select(self.focus);
            } else {
                self.focus = self.selected;
            }
        }

        self.follows_focus = value;
        events
    }

    /// Select an explicit index regardless of focus policy.
    pub fn toggle(&mut self, index: usize) -> Vec<SelectionEvent> {
        if self.follows_focus {
            self.focus = Some(index);
        }
        self.select(Some(index))
    }

    fn select(&mut self, index: Option<usize>) -> Vec<SelectionEvent> {
        if self.selected == index {
            return Vec::new();
        }
        trace!("single selection {:?} -> {:?}", self.selected, index);
        self.selected = index;
        vec![SelectionEvent::Changed(index)]
    }
}

impl SelectionStrategy for SingleSelection {
    fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    fn focus(&mut self, index: Option<usize>, count: usize) -> Vec<SelectionEvent> {
        let index = index.filter(|&i| i < count);
        self.focus = index;
        if self.follows_focus {
            self.select(index)
        } else {
            Vec::new()
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    fn selection_count(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    fn click(&mut self, index: usize, _modifiers: Modifiers) -> Vec<SelectionEvent> {
        self.focus = Some(index);
        if self.follows_focus {
            self.select(Some(index))
        } else {
            Vec::new()
        }
    }

    fn activate(&mut self) -> Option<Vec<SelectionEvent>> {
        if self.follows_focus {
            return None;
        }
        let focus = self.focus?;
        Some(self.select(Some(focus)))
    }

    fn insert(&mut self, index: usize, count: usize) {
        shift::insert_one(&mut self.focus, index, count);
        shift::insert_one(&mut self.selected, index, count);
    }

    fn remove(&mut self, index: usize, count: usize) -> Vec<SelectionEvent> {
        shift::remove_one(&mut self.focus, index, count);
        if shift::remove_one(&mut self.selected, index, count) {
            vec![SelectionEvent::Changed(None)]
        } else {
            Vec::new()
        }
    }

    fn relocate(&mut self, index: usize, target: usize) {
        shift::relocate_one(&mut self.focus, index, target);
        shift::relocate_one(&mut self.selected, index, target);
    }

    fn as_single(&self) -> Option<&SingleSelection> {
        Some(self)
    }

    fn as_single_mut(&mut self) -> Option<&mut SingleSelection> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_follows_focus() {
        let mut sel = SingleSelection::new();
        assert_eq!(
            sel.click(2, Modifiers::new()),
            vec![SelectionEvent::Changed(Some(2))]
        );
        assert_eq!(sel.focus_index(), Some(2));
        assert!(sel.click(2, Modifiers::new()).is_empty());
    }

    #[test]
    fn test_focus_only_until_activated() {
        let mut sel = SingleSelection::new();
        sel.set_follows_focus(false);

        assert!(sel.click(1, Modifiers::new()).is_empty());
        assert_eq!(sel.selected_index(), None);
        assert_eq!(sel.focus_index(), Some(1));

        assert_eq!(sel.activate(), Some(vec![SelectionEvent::Changed(Some(1))]));
        assert_eq!(sel.selected_index(), Some(1));
    }

    #[test]
    fn test_enable_follow_moves_selection_to_focus() {
        let mut sel = SingleSelection::new();
        sel.set_follows_focus(false);
        sel.set_selected_index(Some(0), 5).unwrap();
        sel.focus(Some(3), 5);

        let events = sel.set_follows_focus(true);
        assert_eq!(events, vec![SelectionEvent::Changed(Some(3))]);
        assert_eq!(sel.selected_index(), Some(3));
    }

    #[test]
    fn test_enable_follow_without_focus_adopts_selection() {
        let mut sel = SingleSelection::new();
        sel.set_follows_focus(false);
        sel.set_selected_index(Some(4), 5).unwrap();

        assert!(sel.set_follows_focus(true).is_empty());
        assert_eq!(sel.focus_index(), Some(4));
    }

    #[test]
    fn test_set_selected_index_out_of_range() {
        let mut sel = SingleSelection::new();
        assert_eq!(
            sel.set_selected_index(Some(3), 3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_remove_selected_clears() {
        let mut sel = SingleSelection::new();
        sel.set_selected_index(Some(2), 5).unwrap();
        assert_eq!(sel.remove(2, 1), vec![SelectionEvent::Changed(None)]);
        assert_eq!(sel.selected_index(), None);
        assert_eq!(sel.focus_index(), None);
    }

    #[test]
    fn test_insert_before_selected() {
        let mut sel = SingleSelection::new();
        sel.set_selected_index(Some(2), 5).unwrap();
        sel.insert(1, 1);
        assert_eq!(sel.selected_index(), Some(3));
        assert_eq!(sel.focus_index(), Some(3));
    }
}

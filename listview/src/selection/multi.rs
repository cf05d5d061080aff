//! Multi selection over a sorted index set.

use log::trace;

use crate::error::{ListError, Result};
use crate::input::Modifiers;

use super::shift;
use super::{EventMethod, SelectionEvent, SelectionMethod, SelectionStrategy};

/// Any number of selected items plus a focus index.
///
/// The selected indices are kept sorted ascending and unique after every
/// operation, whatever order or duplication the caller's input has.
#[derive(Debug, Clone, Default)]
pub struct MultiSelection {
    selected: Vec<usize>,
    focus: Option<usize>,
    method: SelectionMethod,
    events: EventMethod,
}

impl MultiSelection {
    pub fn new(method: SelectionMethod, events: EventMethod) -> Self {
        Self {
            method,
            events,
            ..Default::default()
        }
    }

    pub fn selection_method(&self) -> SelectionMethod {
        self.method
    }

    pub fn set_selection_method(&mut self, method: SelectionMethod) {
        self.method = method;
    }

    pub fn event_method(&self) -> EventMethod {
        self.events
    }

    pub fn set_event_method(&mut self, method: EventMethod) {
        self.events = method;
    }

    /// Selected indices, ascending.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Select every index in `[0, count)`.
    pub fn select_all(&mut self, count: usize) -> Vec<SelectionEvent> {
        self.replace((0..count).collect())
    }

    /// Deselect everything.
    pub fn clear(&mut self) -> Vec<SelectionEvent> {
        self.replace(Vec::new())
    }

    /// Select exactly the unselected indices of `[0, count)`.
    pub fn invert(&mut self, count: usize) -> Vec<SelectionEvent> {
        let inverted = (0..count)
            .filter(|i| self.selected.binary_search(i).is_err())
            .collect();
        self.replace(inverted)
    }

    /// Replace the selection with the given indices.
    pub fn set(&mut self, indices: &[usize], count: usize) -> Result<Vec<SelectionEvent>> {
        check_range(indices, count)?;
        Ok(self.replace(shift::normalize(indices.to_vec())))
    }

    /// Add the given indices to the selection.
    pub fn add(&mut self, indices: &[usize], count: usize) -> Result<Vec<SelectionEvent>> {
        check_range(indices, count)?;
        let mut merged = self.selected.clone();
        merged.extend_from_slice(indices);
        Ok(self.replace(shift::normalize(merged)))
    }

    /// Remove the given indices from the selection. Unselected or unknown
    /// indices are ignored.
    pub fn remove_from(&mut self, indices: &[usize]) -> Vec<SelectionEvent> {
        let removed = shift::normalize(indices.to_vec());
        let kept = self
            .selected
            .iter()
            .copied()
            .filter(|i| removed.binary_search(i).is_err())
            .collect();
        self.replace(kept)
    }

    /// Flip a single index.
    pub fn toggle(&mut self, index: usize) -> Vec<SelectionEvent> {
        let selected = match self.selected.binary_search(&index) {
            Ok(pos) => {
                self.selected.remove(pos);
                false
            }
            Err(pos) => {
                self.selected.insert(pos, index);
                true
            }
        };
        self.report(vec![(index, selected)])
    }

    /// Install a new sorted, unique set and report the difference.
    fn replace(&mut self, next: Vec<usize>) -> Vec<SelectionEvent> {
        let changes = diff(&self.selected, &next);
        self.selected = next;
        self.report(changes)
    }

    fn report(&self, changes: Vec<(usize, bool)>) -> Vec<SelectionEvent> {
        if changes.is_empty() {
            return Vec::new();
        }
        trace!("multi selection: {} changes", changes.len());
        match self.events {
            EventMethod::ForEachItem => changes
                .into_iter()
                .map(|(index, selected)| SelectionEvent::Item { index, selected })
                .collect(),
            EventMethod::Once => vec![SelectionEvent::Batch],
        }
    }
}

fn check_range(indices: &[usize], count: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= count) {
        Some(&i) => Err(ListError::out_of_range(i, count)),
        None => Ok(()),
    }
}

/// Merge two sorted sets into the list of flipped indices, ascending.
fn diff(old: &[usize], new: &[usize]) -> Vec<(usize, bool)> {
    let mut changes = Vec::new();
    let (mut a, mut b) = (0, 0);

    while a < old.len() || b < new.len() {
        match (old.get(a), new.get(b)) {
            (Some(&o), Some(&n)) if o == n => {
                a += 1;
                b += 1;
            }
            (Some(&o), Some(&n)) if o < n => {
                changes.push((o, false));
                a += 1;
            }
            (Some(_), Some(&n)) => {
                changes.push((n, true));
                b += 1;
            }
            (Some(&o), None) => {
                changes.push((o, false));
                a += 1;
            }
            (None, Some(&n)) => {
                changes.push((n, true));
                b += 1;
            }
            (None, None) => break,
        }
    }

    changes
}

impl SelectionStrategy for MultiSelection {
    fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    fn focus(&mut self, index: Option<usize>, count: usize) -> Vec<SelectionEvent> {
        self.focus = index.filter(|&i| i < count);
        Vec::new()
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected.binary_search(&index).is_ok()
    }

    fn selection_count(&self) -> usize {
        self.selected.len()
    }

    fn click(&mut self, index: usize, modifiers: Modifiers) -> Vec<SelectionEvent> {
        self.focus = Some(index);
        match self.method {
            SelectionMethod::Toggle => self.toggle(index),
            SelectionMethod::UseCtrl if modifiers.ctrl => self.toggle(index),
            SelectionMethod::UseCtrl => self.replace(vec![index]),
        }
    }

    fn activate(&mut self) -> Option<Vec<SelectionEvent>> {
        let focus = self.focus?;
        Some(self.toggle(focus))
    }

    fn insert(&mut self, index: usize, count: usize) {
        shift::insert_one(&mut self.focus, index, count);
        shift::insert(&mut self.selected, index, count);
    }

    fn remove(&mut self, index: usize, count: usize) -> Vec<SelectionEvent> {
        shift::remove_one(&mut self.focus, index, count);
        let dropped = shift::remove(&mut self.selected, index, count);
        self.report(dropped.into_iter().map(|i| (i, false)).collect())
    }

    fn relocate(&mut self, index: usize, target: usize) {
        shift::relocate_one(&mut self.focus, index, target);
        shift::relocate(&mut self.selected, index, target);
    }

    fn as_multi(&self) -> Option<&MultiSelection> {
        Some(self)
    }

    fn as_multi_mut(&mut self) -> Option<&mut MultiSelection> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, selected: bool) -> SelectionEvent {
        SelectionEvent::Item { index, selected }
    }

    #[test]
    fn test_set_normalizes_input() {
        let mut sel = MultiSelection::default();
        sel.set(&[4, 1, 4, 2], 6).unwrap();
        assert_eq!(sel.selected(), &[1, 2, 4]);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut sel = MultiSelection::default();
        assert_eq!(
            sel.set(&[1, 6], 6),
            Err(ListError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn test_add_reports_only_new_indices() {
        let mut sel = MultiSelection::default();
        sel.set(&[1, 3], 6).unwrap();
        let events = sel.add(&[3, 0, 0], 6).unwrap();
        assert_eq!(events, vec![item(0, true)]);
        assert_eq!(sel.selected(), &[0, 1, 3]);
    }

    #[test]
    fn test_invert() {
        let mut sel = MultiSelection::default();
        sel.set(&[0, 2], 4).unwrap();
        let events = sel.invert(4);
        assert_eq!(sel.selected(), &[1, 3]);
        assert_eq!(
            events,
            vec![item(0, false), item(1, true), item(2, false), item(3, true)]
        );
    }

    #[test]
    fn test_once_reports_single_batch() {
        let mut sel = MultiSelection::new(SelectionMethod::Toggle, EventMethod::Once);
        assert_eq!(sel.select_all(5), vec![SelectionEvent::Batch]);
        assert!(sel.select_all(5).is_empty());
    }

    #[test]
    fn test_use_ctrl_click() {
        let mut sel = MultiSelection::new(SelectionMethod::UseCtrl, EventMethod::ForEachItem);
        sel.set(&[0, 1], 5).unwrap();

        let events = sel.click(3, Modifiers::new());
        assert_eq!(sel.selected(), &[3]);
        assert_eq!(events, vec![item(0, false), item(1, false), item(3, true)]);

        sel.click(1, Modifiers::ctrl());
        assert_eq!(sel.selected(), &[1, 3]);
        assert_eq!(sel.focus_index(), Some(1));
    }

    #[test]
    fn test_toggle_click() {
        let mut sel = MultiSelection::new(SelectionMethod::Toggle, EventMethod::ForEachItem);
        sel.click(2, Modifiers::new());
        sel.click(4, Modifiers::new());
        sel.click(2, Modifiers::new());
        assert_eq!(sel.selected(), &[4]);
    }

    #[test]
    fn test_remove_from_ignores_unknown() {
        let mut sel = MultiSelection::default();
        sel.set(&[1, 2, 3], 5).unwrap();
        let events = sel.remove_from(&[2, 9]);
        assert_eq!(events, vec![item(2, false)]);
        assert_eq!(sel.selected(), &[1, 3]);
    }

    #[test]
    fn test_item_removal_shifts() {
        let mut sel = MultiSelection::default();
        sel.set(&[1, 3, 4], 6).unwrap();
        assert!(sel.remove(2, 1).is_empty());
        assert_eq!(sel.selected(), &[1, 2, 3]);
    }

    #[test]
    fn test_activate_toggles_focused() {
        let mut sel = MultiSelection::default();
        assert_eq!(sel.activate(), None);
        sel.focus(Some(2), 5);
        assert_eq!(sel.activate(), Some(vec![item(2, true)]));
        assert_eq!(sel.activate(), Some(vec![item(2, false)]));
    }
}

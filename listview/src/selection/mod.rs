//! Selection strategies.
//!
//! A list owns exactly one selection strategy, chosen at construction:
//! [`SingleSelection`] (selection follows focus by default) or
//! [`MultiSelection`] (sorted index set). Both keep their indices consistent
//! across storage mutations through the shift operations, and report changes
//! as [`SelectionEvent`]s which the list forwards to its observers.

mod multi;
pub mod shift;
mod single;

pub use multi::MultiSelection;
pub use single::SingleSelection;

use serde::{Deserialize, Serialize};

use crate::input::Modifiers;

/// How clicks change a multi selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Every click flips the clicked item.
    Toggle,
    /// A plain click selects only the clicked item; Ctrl+click flips it.
    #[default]
    UseCtrl,
}

/// How multi selection changes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMethod {
    /// One event per index whose state changed.
    #[default]
    ForEachItem,
    /// One [`SelectionEvent::Batch`] per operation that changed anything.
    Once,
}

/// A change in selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Single selection moved. `None` means the selection was cleared.
    Changed(Option<usize>),
    /// A multi selection item changed state.
    Item { index: usize, selected: bool },
    /// A multi selection operation changed one or more items.
    Batch,
}

/// Selection and focus marks applied to a display object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionMarks {
    pub selected: bool,
    pub focused: bool,
}

/// Contract shared by both selection variants.
///
/// Mutating operations return the events they caused; an empty vector means
/// nothing observable changed.
pub trait SelectionStrategy {
    /// Index holding keyboard focus.
    fn focus_index(&self) -> Option<usize>;

    /// Move focus. `count` is the current number of items.
    fn focus(&mut self, index: Option<usize>, count: usize) -> Vec<SelectionEvent>;

    fn is_selected(&self, index: usize) -> bool;

    /// Number of selected items.
    fn selection_count(&self) -> usize;

    /// Marks to apply to the object representing `index`.
    fn marks(&self, index: usize) -> SelectionMarks {
        SelectionMarks {
            selected: self.is_selected(index),
            focused: self.focus_index() == Some(index),
        }
    }

    /// The user clicked the item at `index`.
    fn click(&mut self, index: usize, modifiers: Modifiers) -> Vec<SelectionEvent>;

    /// Activate the focused item. Returns `None` if activation means nothing
    /// for this strategy.
    fn activate(&mut self) -> Option<Vec<SelectionEvent>>;

    /// `count` items were inserted before `index`.
    fn insert(&mut self, index: usize, count: usize);

    /// `count` items starting at `index` were removed.
    fn remove(&mut self, index: usize, count: usize) -> Vec<SelectionEvent>;

    /// The item at `index` now lives at `target`.
    fn relocate(&mut self, index: usize, target: usize);

    fn as_single(&self) -> Option<&SingleSelection> {
        None
    }

    fn as_single_mut(&mut self) -> Option<&mut SingleSelection> {
        None
    }

    fn as_multi(&self) -> Option<&MultiSelection> {
        None
    }

    fn as_multi_mut(&mut self) -> Option<&mut MultiSelection> {
        None
    }
}

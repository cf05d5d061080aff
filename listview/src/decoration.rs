//! Type strategies: per-item presentation attributes.
//!
//! A type strategy decides which tag an item is displayed with, whether it is
//! displayed at all, and applies positional decorations (parity, position in
//! the list) to the display object bound to it.

use crate::host::{DisplayObject, ItemPosition, Parity, Tag};
use crate::selection::shift;

/// Presentation attributes derived from item position.
pub trait TypeStrategy<T> {
    /// Tag used to pick the template for the item.
    fn tag(&self, _index: usize, _item: &T) -> Tag {
        Tag::Item
    }

    /// Whether the item takes part in the display walk.
    fn is_visible(&self, _index: usize, _item: &T) -> bool {
        true
    }

    /// Apply decorations to the object representing `index`.
    fn apply(&self, object: &mut dyn DisplayObject<T>, index: usize, count: usize, item: &T);

    /// Hide or show the item at `index`. Strategies without visibility
    /// flags ignore this.
    fn set_hidden(&mut self, _index: usize, _hidden: bool) {}

    /// One-time preparation of a freshly created display object.
    fn prepare(&mut self, _object: &mut dyn DisplayObject<T>) {}

    /// `count` items were inserted before `index`.
    fn insert(&mut self, _index: usize, _count: usize) {}

    /// `count` items starting at `index` were removed.
    fn remove(&mut self, _index: usize, _count: usize) {}

    /// The item at `index` now lives at `target`.
    fn relocate(&mut self, _index: usize, _target: usize) {}
}

/// No decorations at all. Suited to very long lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorations;

impl<T> TypeStrategy<T> for PlainDecorations {
    fn apply(&self, _object: &mut dyn DisplayObject<T>, _index: usize, _count: usize, _item: &T) {}
}

/// Computes the parity of a logical index.
pub fn parity_of(index: usize) -> Parity {
    if index % 2 == 0 { Parity::Even } else { Parity::Odd }
}

/// Computes where a logical index sits in a list of `count` items.
pub fn position_of(index: usize, count: usize) -> ItemPosition {
    match (index, count) {
        (_, 0) => ItemPosition::Nowhere,
        (0, 1) => ItemPosition::Alone,
        (0, _) => ItemPosition::First,
        (i, n) if i + 1 == n => ItemPosition::Last,
        (i, n) if i < n => ItemPosition::Middle,
        _ => ItemPosition::Nowhere,
    }
}

type Tagger<T> = Box<dyn Fn(&T) -> Tag>;

/// Striping, positional cues, per-item visibility and per-item tags.
///
/// Hidden flags are stored per logical index and follow their items through
/// insertions, removals and moves.
pub struct ItemDecorations<T> {
    striped: bool,
    positioned: bool,
    /// Sorted, unique indices of hidden items.
    hidden: Vec<usize>,
    tagger: Option<Tagger<T>>,
}

impl<T> Default for ItemDecorations<T> {
    fn default() -> Self {
        Self {
            striped: true,
            positioned: true,
            hidden: Vec::new(),
            tagger: None,
        }
    }
}

impl<T> std::fmt::Debug for ItemDecorations<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDecorations")
            .field("striped", &self.striped)
            .field("positioned", &self.positioned)
            .field("hidden", &self.hidden)
            .field("tagger", &self.tagger.is_some())
            .finish()
    }
}

impl<T> ItemDecorations<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable odd/even parity.
    pub fn striped(mut self, enabled: bool) -> Self {
        self.striped = enabled;
        self
    }

    /// Enable or disable first/middle/last cues.
    pub fn positioned(mut self, enabled: bool) -> Self {
        self.positioned = enabled;
        self
    }

    /// Choose a tag per item.
    pub fn with_tagger(mut self, tagger: impl Fn(&T) -> Tag + 'static) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    /// Hide or show the item at `index`.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) {
        match (self.hidden.binary_search(&index), hidden) {
            (Err(pos), true) => self.hidden.insert(pos, index),
            (Ok(pos), false) => {
                self.hidden.remove(pos);
            }
            _ => {}
        }
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.binary_search(&index).is_ok()
    }

    /// Indices of hidden items, ascending.
    pub fn hidden(&self) -> &[usize] {
        &self.hidden
    }
}

impl<T> TypeStrategy<T> for ItemDecorations<T> {
    fn tag(&self, _index: usize, item: &T) -> Tag {
        self.tagger.as_ref().map(|tagger| tagger(item)).unwrap_or_default()
    }

    fn is_visible(&self, index: usize, _item: &T) -> bool {
        !self.is_hidden(index)
    }

    fn apply(&self, object: &mut dyn DisplayObject<T>, index: usize, count: usize, _item: &T) {
        if self.striped {
            object.set_parity(parity_of(index));
        }
        if self.positioned {
            object.set_item_position(position_of(index, count));
        }
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        ItemDecorations::set_hidden(self, index, hidden);
    }

    fn insert(&mut self, index: usize, count: usize) {
        shift::insert(&mut self.hidden, index, count);
    }

    fn remove(&mut self, index: usize, count: usize) {
        shift::remove(&mut self.hidden, index, count);
    }

    fn relocate(&mut self, index: usize, target: usize) {
        shift::relocate(&mut self.hidden, index, target);
    }
}

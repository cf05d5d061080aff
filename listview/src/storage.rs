//! Storage strategies: ownership of the logical item sequence.
//!
//! Storage only keeps items in order. Index shifting of selection and
//! decoration state is driven by the list after each mutation.

use crate::error::{ListError, Result};

/// Ordered item storage used by a list.
pub trait StorageStrategy<T> {
    /// Number of items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`, if it exists.
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable item at `index`, if it exists.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Append an item.
    fn push(&mut self, item: T);

    /// Insert an item before `index`. `index == len` appends.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Remove and return the item at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Move the item at `index` so it ends up at position `target`.
    fn relocate(&mut self, index: usize, target: usize) -> Result<()>;

    /// Index of the first item matching the predicate, by linear scan.
    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Option<usize>;

    /// Remove every item.
    fn clear(&mut self);
}

/// Items stored by value in a `Vec`.
#[derive(Debug, Clone)]
pub struct VecStorage<T> {
    items: Vec<T>,
}

impl<T> Default for VecStorage<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> VecStorage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for VecStorage<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> StorageStrategy<T> for VecStorage<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.items.len() {
            return Err(ListError::out_of_range(index, self.items.len()));
        }
        self.items.insert(index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(ListError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    fn relocate(&mut self, index: usize, target: usize) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return Err(ListError::out_of_range(index, len));
        }
        if target >= len {
            return Err(ListError::out_of_range(target, len));
        }

        if index < target {
            self.items[index..=target].rotate_left(1);
        } else if index > target {
            self.items[target..=index].rotate_right(1);
        }
        Ok(())
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Final position of an item moved before `before`.
///
/// `before` is an index into the sequence *prior* to the move, so moving an
/// item forward lands one slot earlier than `before`.
pub fn move_target(index: usize, before: usize) -> usize {
    if before > index { before - 1 } else { before }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(items: &[&'static str]) -> VecStorage<&'static str> {
        VecStorage::with_items(items.to_vec())
    }

    #[test]
    fn test_relocate_forward() {
        let mut s = storage(&["a", "b", "c", "d"]);
        s.relocate(0, 2).unwrap();
        assert_eq!(s.items(), &["b", "c", "a", "d"]);
    }

    #[test]
    fn test_relocate_backward() {
        let mut s = storage(&["a", "b", "c", "d"]);
        s.relocate(3, 1).unwrap();
        assert_eq!(s.items(), &["a", "d", "b", "c"]);
    }

    #[test]
    fn test_relocate_out_of_range() {
        let mut s = storage(&["a"]);
        assert_eq!(
            s.relocate(0, 1),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_insert_at_end_appends() {
        let mut s = storage(&["a"]);
        s.insert(1, "b").unwrap();
        assert_eq!(s.items(), &["a", "b"]);
        assert!(s.insert(5, "c").is_err());
    }

    #[test]
    fn test_move_target() {
        assert_eq!(move_target(1, 1), 1);
        assert_eq!(move_target(1, 2), 1);
        assert_eq!(move_target(1, 4), 3);
        assert_eq!(move_target(3, 0), 0);
    }

    #[test]
    fn test_find_by() {
        let s = storage(&["a", "b", "b"]);
        assert_eq!(s.find_by(&|item| *item == "b"), Some(1));
        assert_eq!(s.find_by(&|item| *item == "z"), None);
    }
}

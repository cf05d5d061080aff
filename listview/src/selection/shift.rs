//! Index shifting under insert/remove/move.
//!
//! The set variants operate on a sorted, duplicate-free `Vec<usize>` and only
//! touch the affected sub-range, located by binary search. They keep the set
//! sorted and unique.

/// `count` items were inserted before `index`: shift every index `>= index`.
pub fn insert(set: &mut [usize], index: usize, count: usize) {
    if count == 0 {
        return;
    }
    let start = set.partition_point(|&i| i < index);
    for i in &mut set[start..] {
        *i += count;
    }
}

/// `count` items starting at `index` were removed.
///
/// Indices inside the removed range are dropped and returned; indices past it
/// move down by `count`.
pub fn remove(set: &mut Vec<usize>, index: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let start = set.partition_point(|&i| i < index);
    let end = set.partition_point(|&i| i < index + count);
    let dropped: Vec<usize> = set.drain(start..end).collect();
    for i in &mut set[start..] {
        *i -= count;
    }
    dropped
}

/// The item at `index` was moved to final position `target`.
///
/// The moved index is relabelled to `target`; every index strictly between
/// the old and the new position shifts by one towards the vacated slot.
pub fn relocate(set: &mut Vec<usize>, index: usize, target: usize) {
    if index == target {
        return;
    }

    let moved = match set.binary_search(&index) {
        Ok(pos) => {
            set.remove(pos);
            true
        }
        Err(_) => false,
    };

    if index < target {
        // (index, target] slides down by one
        let start = set.partition_point(|&i| i <= index);
        let end = set.partition_point(|&i| i <= target);
        for i in &mut set[start..end] {
            *i -= 1;
        }
    } else {
        // [target, index) slides up by one
        let start = set.partition_point(|&i| i < target);
        let end = set.partition_point(|&i| i < index);
        for i in &mut set[start..end] {
            *i += 1;
        }
    }

    if moved {
        let pos = set.partition_point(|&i| i < target);
        set.insert(pos, target);
    }
}

/// Scalar form of [`insert`] for a single optional index.
pub fn insert_one(slot: &mut Option<usize>, index: usize, count: usize) {
    if let Some(i) = slot
        && *i >= index
    {
        *i += count;
    }
}

/// Scalar form of [`remove`]. Returns true if the index was dropped.
pub fn remove_one(slot: &mut Option<usize>, index: usize, count: usize) -> bool {
    match *slot {
        Some(i) if i >= index && i < index + count => {
            *slot = None;
            true
        }
        Some(i) if i >= index + count => {
            *slot = Some(i - count);
            false
        }
        _ => false,
    }
}

/// Scalar form of [`relocate`].
pub fn relocate_one(slot: &mut Option<usize>, index: usize, target: usize) {
    let Some(i) = *slot else { return };

    *slot = Some(if i == index {
        target
    } else if index < i && i <= target {
        i - 1
    } else if target <= i && i < index {
        i + 1
    } else {
        i
    });
}

/// Sort and de-duplicate an arbitrary index list.
pub fn normalize(mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_unstable();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_tail() {
        let mut set = vec![1, 3, 4];
        insert(&mut set, 3, 2);
        assert_eq!(set, vec![1, 5, 6]);
    }

    #[test]
    fn test_insert_before_everything() {
        let mut set = vec![0, 2];
        insert(&mut set, 0, 1);
        assert_eq!(set, vec![1, 3]);
    }

    #[test]
    fn test_remove_below_selection() {
        let mut set = vec![1, 3, 4];
        let dropped = remove(&mut set, 2, 1);
        assert!(dropped.is_empty());
        assert_eq!(set, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_drops_range() {
        let mut set = vec![0, 2, 3, 5, 9];
        let dropped = remove(&mut set, 2, 4);
        assert_eq!(dropped, vec![2, 3, 5]);
        assert_eq!(set, vec![0, 5]);
    }

    #[test]
    fn test_relocate_forward_selected() {
        // items a b c d e, a moved to position 3: b c d a e
        let mut set = vec![0, 2, 4];
        relocate(&mut set, 0, 3);
        assert_eq!(set, vec![1, 3, 4]);
    }

    #[test]
    fn test_relocate_backward_selected() {
        let mut set = vec![1, 4];
        relocate(&mut set, 4, 1);
        assert_eq!(set, vec![1, 2]);
    }

    #[test]
    fn test_relocate_adjacent() {
        let mut set = vec![2];
        relocate(&mut set, 2, 3);
        assert_eq!(set, vec![3]);

        let mut set = vec![3];
        relocate(&mut set, 2, 3);
        assert_eq!(set, vec![2]);
    }

    #[test]
    fn test_relocate_unselected_item() {
        let mut set = vec![0, 1, 2, 3];
        relocate(&mut set, 5, 1);
        assert_eq!(set, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_scalar_forms() {
        let mut slot = Some(3);
        insert_one(&mut slot, 3, 2);
        assert_eq!(slot, Some(5));

        assert!(!remove_one(&mut slot, 0, 2));
        assert_eq!(slot, Some(3));

        relocate_one(&mut slot, 3, 0);
        assert_eq!(slot, Some(0));

        relocate_one(&mut slot, 4, 0);
        assert_eq!(slot, Some(1));

        assert!(remove_one(&mut slot, 1, 1));
        assert_eq!(slot, None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(vec![4, 1, 4, 0, 1]), vec![0, 1, 4]);
    }
}

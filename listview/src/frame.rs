//! Frame tick registration.
//!
//! Smooth scrolling is a state machine stepped once per frame. A list that
//! starts animating registers itself with a [`FrameTicker`]; the host calls
//! [`List::tick`](crate::List::tick) for every registered list each frame and
//! the list unregisters itself when the animation completes or the list is
//! dropped.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Unique identifier for a List instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(usize);

impl ListId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__list_{}", self.0)
    }
}

/// Host service that delivers per-frame callbacks.
pub trait FrameTicker {
    /// Start delivering ticks to the list.
    fn register(&mut self, list: ListId);

    /// Stop delivering ticks to the list.
    fn unregister(&mut self, list: ListId);
}

/// Reference [`FrameTicker`]: a shared set of registered lists.
///
/// Clones share the same registrations, so the host keeps one handle and
/// gives clones to its lists.
///
/// # Example
///
/// ```ignore
/// let clock = FrameClock::new();
/// let mut list = List::single(style, Box::new(clock.clone()));
///
/// // every frame:
/// if clock.is_registered(list.id()) {
///     list.tick(delta_ms);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    registered: Arc<RwLock<BTreeSet<ListId>>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a list currently wants ticks.
    pub fn is_registered(&self, list: ListId) -> bool {
        self.registered
            .read()
            .map(|guard| guard.contains(&list))
            .unwrap_or(false)
    }

    /// All lists that currently want ticks.
    pub fn registered(&self) -> Vec<ListId> {
        self.registered
            .read()
            .map(|guard| guard.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Whether any list wants ticks.
    pub fn is_idle(&self) -> bool {
        self.registered
            .read()
            .map(|guard| guard.is_empty())
            .unwrap_or(true)
    }
}

impl FrameTicker for FrameClock {
    fn register(&mut self, list: ListId) {
        if let Ok(mut guard) = self.registered.write() {
            guard.insert(list);
        }
    }

    fn unregister(&mut self, list: ListId) {
        if let Ok(mut guard) = self.registered.write() {
            guard.remove(&list);
        }
    }
}

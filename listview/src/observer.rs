//! Explicit observer lists.
//!
//! Observers are registered and unregistered by id. They are called in
//! registration order and are dropped together with their owner.

/// Handle returned when registering an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Callback<E> = Box<dyn FnMut(&E)>;

pub(crate) struct Observers<E> {
    next: usize,
    entries: Vec<(ObserverId, Callback<E>)>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            next: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Observers<E> {
    pub fn register(&mut self, callback: impl FnMut(&E) + 'static) -> ObserverId {
        let id = ObserverId(self.next);
        self.next += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the id was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }
}

//! Stats store — the dashboard's single snapshot cell.

use std::cell::RefCell;
use std::rc::Rc;

use nodewatch_domain::snapshot::Snapshot;

/// Holds the most recently fetched [`Snapshot`], if any.
///
/// A new snapshot replaces the previous one in a single assignment; readers
/// get a shared handle and never observe a partially updated snapshot. The
/// store lives on one thread and is never borrowed across an `.await`.
#[derive(Debug, Default)]
pub struct StatsStore {
    current: RefCell<Option<Rc<Snapshot>>>,
}

impl StatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, or `None` before the first successful fetch.
    #[must_use]
    pub fn get(&self) -> Option<Rc<Snapshot>> {
        self.current.borrow().clone()
    }

    /// Replace the current snapshot.
    pub fn set(&self, snapshot: Snapshot) -> Rc<Snapshot> {
        let snapshot = Rc::new(snapshot);
        *self.current.borrow_mut() = Some(Rc::clone(&snapshot));
        snapshot
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }
}

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::Tracked;

/// Counts element lifecycle events for one test scenario.
///
/// Clones of a probe share the same counters, so a probe can be handed to every element of a
/// scenario and inspected afterwards. The probe is deliberately `!Send`: each scenario owns its
/// counters and nothing is shared across tests.
///
/// The probe can also be armed to make a future construction panic, which lets tests exercise
/// the rollback paths of container operations.
#[derive(Clone, Default)]
pub struct LifecycleProbe {
    counts: Rc<Counts>,
}

#[derive(Default)]
struct Counts {
    constructed: Cell<usize>,
    cloned: Cell<usize>,
    clone_assigned: Cell<usize>,
    dropped: Cell<usize>,

    /// If `Some(n)`, the n-th construction from now panics instead of producing an element.
    construction_countdown: Cell<Option<usize>>,
}

impl LifecycleProbe {
    /// Creates a probe with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new tracked element with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the probe was armed via [`fail_construction_at()`](Self::fail_construction_at)
    /// and this is the construction it was armed for. A failed construction is not counted.
    #[must_use]
    pub fn make(&self, id: u32) -> Tracked {
        match self.counts.construction_countdown.get() {
            Some(1) => {
                self.counts.construction_countdown.set(None);
                panic!("construction of tracked element {id} failed on request");
            }
            Some(remaining) => {
                self.counts
                    .construction_countdown
                    .set(Some(remaining.wrapping_sub(1)));
            }
            None => {}
        }

        increment(&self.counts.constructed);

        Tracked::new(id, self.clone())
    }

    /// Arms the probe so that the `nth` call to [`make()`](Self::make) from now (1-based)
    /// panics. Calls before it succeed normally.
    ///
    /// # Panics
    ///
    /// Panics if `nth` is zero.
    pub fn fail_construction_at(&self, nth: usize) {
        assert!(nth > 0, "construction countdown must start at 1 or more");

        self.counts.construction_countdown.set(Some(nth));
    }

    /// Number of elements created via [`make()`](Self::make).
    #[must_use]
    pub fn constructed(&self) -> usize {
        self.counts.constructed.get()
    }

    /// Number of elements created by cloning another element.
    #[must_use]
    pub fn cloned(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Number of times an existing element was overwritten via `Clone::clone_from()`.
    #[must_use]
    pub fn clone_assigned(&self) -> usize {
        self.counts.clone_assigned.get()
    }

    /// Number of elements dropped.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Number of elements currently alive: everything created minus everything dropped.
    #[must_use]
    pub fn live(&self) -> usize {
        self.constructed()
            .wrapping_add(self.cloned())
            .wrapping_sub(self.dropped())
    }

    pub(crate) fn record_clone(&self) {
        increment(&self.counts.cloned);
    }

    pub(crate) fn record_clone_assign(&self) {
        increment(&self.counts.clone_assigned);
    }

    pub(crate) fn record_drop(&self) {
        increment(&self.counts.dropped);
    }
}

impl fmt::Debug for LifecycleProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleProbe")
            .field("constructed", &self.constructed())
            .field("cloned", &self.cloned())
            .field("clone_assigned", &self.clone_assigned())
            .field("dropped", &self.dropped())
            .field("live", &self.live())
            .finish_non_exhaustive()
    }
}

fn increment(counter: &Cell<usize>) {
    // Cannot overflow because that would require more elements than fit in memory.
    counter.set(counter.get().wrapping_add(1));
}

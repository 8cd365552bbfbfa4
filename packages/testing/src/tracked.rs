use std::fmt;

use crate::LifecycleProbe;

/// An element type that reports its lifecycle to a [`LifecycleProbe`].
///
/// Create instances via [`LifecycleProbe::make()`]. Equality compares ids only.
pub struct Tracked {
    id: u32,
    panic_on_clone: bool,
    probe: LifecycleProbe,
}

impl Tracked {
    pub(crate) fn new(id: u32, probe: LifecycleProbe) -> Self {
        Self {
            id,
            panic_on_clone: false,
            probe,
        }
    }

    /// The id the element was created or last assigned with.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Replaces the id of the element.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// When set, any attempt to clone this element (or to clone-assign from it) panics.
    ///
    /// The flag is not carried over to clones.
    pub fn set_panic_on_clone(&mut self, panic_on_clone: bool) {
        self.panic_on_clone = panic_on_clone;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        assert!(
            !self.panic_on_clone,
            "clone of tracked element {} refused on request",
            self.id
        );

        self.probe.record_clone();

        Self::new(self.id, self.probe.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        assert!(
            !source.panic_on_clone,
            "clone of tracked element {} refused on request",
            source.id
        );

        self.probe.record_clone_assign();

        self.id = source.id;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.probe.record_drop();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("id", &self.id)
            .field("panic_on_clone", &self.panic_on_clone)
            .finish_non_exhaustive()
    }
}

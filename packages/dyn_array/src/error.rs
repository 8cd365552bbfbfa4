use std::alloc::{Layout, handle_alloc_error};

use thiserror::Error;

/// Errors that can occur when acquiring storage for a [`DynArray`][crate::DynArray].
///
/// Every operation that returns this error leaves the array exactly as it was before the call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The byte size of the requested number of slots cannot be represented.
    #[error("capacity overflow: storage for {requested} slots exceeds the maximum allocation size")]
    CapacityOverflow {
        /// The number of slots that was requested, saturated at `usize::MAX` if the request
        /// itself is not representable.
        requested: usize,
    },

    /// The allocator could not satisfy the memory request.
    #[error("allocation of {} bytes (align {}) failed", layout.size(), layout.align())]
    AllocationFailed {
        /// The layout of the memory block that could not be allocated.
        layout: Layout,
    },
}

impl Error {
    /// Escalates the error to the standard fatal allocation-failure path.
    ///
    /// Used where a trait signature leaves no room for returning the error, which is how
    /// the standard collections treat allocation failure as well.
    #[cfg_attr(test, mutants::skip)] // Every path here diverges, there is nothing to mutate.
    pub(crate) fn escalate(self) -> ! {
        match self {
            Self::AllocationFailed { layout } => handle_alloc_error(layout),
            Self::CapacityOverflow { .. } => panic!("{self}"),
        }
    }
}

/// A specialized `Result` type for storage operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn capacity_overflow_message_names_request() {
        let error = Error::CapacityOverflow { requested: 42 };

        assert!(error.to_string().contains("42"));
    }

    #[test]
    fn allocation_failed_message_names_layout() {
        let layout = Layout::from_size_align(64, 8).unwrap();
        let error = Error::AllocationFailed { layout };

        let message = error.to_string();
        assert!(message.contains("64 bytes"));
        assert!(message.contains("align 8"));
    }

    #[test]
    #[should_panic]
    fn escalate_capacity_overflow_panics() {
        Error::CapacityOverflow { requested: usize::MAX }.escalate();
    }
}

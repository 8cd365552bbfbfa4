use std::alloc::{Layout, alloc, dealloc};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::{fmt, mem};

use crate::{Error, Result};

/// An owned block of uninitialized memory with room for a fixed number of `T` slots.
///
/// The storage never constructs, reads or drops elements. It only knows how many slots it has,
/// not which of them are live; that bookkeeping belongs to the owner (see [`DynArray`]).
/// Dropping the storage releases the memory block without running any element destructor,
/// so the owner must drop every live element first.
///
/// A raw block cannot be cloned because cloning requires knowing which slots are live.
/// Ownership moves either by a plain Rust move, by [`take()`](Self::take) or by
/// [`swap()`](Self::swap), none of which can fail.
///
/// # Zero-sized types
///
/// For zero-sized `T`, a non-zero capacity is backed by a dangling, well-aligned pointer and
/// no memory is requested from the allocator.
///
/// [`DynArray`]: crate::DynArray
pub struct RawStorage<T> {
    /// Base of the memory block. `Some` if and only if `capacity > 0`.
    buffer: Option<NonNull<T>>,

    /// Number of `T` slots in the block.
    capacity: usize,

    _owns: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Creates an empty storage handle that owns no memory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: None,
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates storage for `capacity` uninitialized slots of `T`.
    ///
    /// Returns an empty handle without touching the allocator if `capacity` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if the byte size of `capacity` slots is not
    /// representable and [`Error::AllocationFailed`] if the allocator cannot provide the block.
    pub fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let Ok(layout) = Layout::array::<T>(capacity) else {
            return Err(Error::CapacityOverflow {
                requested: capacity,
            });
        };

        let buffer = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: The layout has a non-zero size, as checked above.
            let ptr = unsafe { alloc(layout) };

            NonNull::new(ptr)
                .ok_or(Error::AllocationFailed { layout })?
                .cast::<T>()
        };

        Ok(Self {
            buffer: Some(buffer),
            capacity,
            _owns: PhantomData,
        })
    }

    /// Returns the number of slots in the block.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the storage owns no memory.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns a pointer to the first slot, dangling if the storage is empty.
    #[must_use]
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.base().as_ptr()
    }

    /// Returns a mutable pointer to the first slot, dangling if the storage is empty.
    #[must_use]
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.base().as_ptr()
    }

    /// Returns the address of slot `index`.
    ///
    /// The slot does not need to be initialized; the returned pointer is valid for writes of `T`
    /// as long as `index < capacity()`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index <= capacity()`. One past the last slot is a valid
    /// address but must not be dereferenced.
    #[must_use]
    #[inline]
    pub unsafe fn slot_ptr(&self, index: usize) -> NonNull<T> {
        debug_assert!(
            index <= self.capacity,
            "slot {index} out of bounds in storage of capacity {}",
            self.capacity
        );

        // SAFETY: Forwarding the bounds requirement to the caller, which keeps the result within
        // the allocation or one past its end.
        unsafe { self.base().add(index) }
    }

    /// Returns a shared reference to the element in slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < capacity()` and that the slot currently holds an
    /// initialized `T` that is not mutably borrowed elsewhere.
    #[must_use]
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> &T {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: The caller guarantees the slot is initialized and not mutably aliased.
        unsafe { ptr.as_ref() }
    }

    /// Returns an exclusive reference to the element in slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < capacity()` and that the slot currently holds an
    /// initialized `T`.
    #[must_use]
    #[inline]
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: Forwarding the bounds requirement to the caller.
        let mut ptr = unsafe { self.slot_ptr(index) };

        // SAFETY: The caller guarantees the slot is initialized and we hold `&mut self`, so no
        // other reference into the block can exist.
        unsafe { ptr.as_mut() }
    }

    /// Moves the memory block out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the memory blocks (and capacities) of `self` and `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn base(&self) -> NonNull<T> {
        self.buffer.unwrap_or(NonNull::dangling())
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        let Some(buffer) = self.buffer else {
            return;
        };

        let layout = Layout::array::<T>(self.capacity)
            .expect("layout was already validated when the block was allocated");

        if layout.size() == 0 {
            return;
        }

        // SAFETY: The block was allocated in allocate() with this exact layout and ownership
        // is unique, so it has not been released yet.
        unsafe {
            dealloc(buffer.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("buffer", &self.buffer)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

// SAFETY: The storage owns its block exclusively, the same as `Box<[T]>`, so sending it to
// another thread is sound whenever the slot type itself may be sent.
unsafe impl<T: Send> Send for RawStorage<T> {}

// SAFETY: Shared access to the storage only hands out shared access to slots.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(RawStorage<u32>: Send, Sync);
    assert_not_impl_any!(RawStorage<Rc<u32>>: Send, Sync);
    assert_not_impl_any!(RawStorage<Cell<u32>>: Sync, Clone);

    #[test]
    fn zero_capacity_owns_nothing() {
        let storage = RawStorage::<u64>::allocate(0).unwrap();

        assert_eq!(storage.capacity(), 0);
        assert!(storage.is_empty());
        assert_eq!(storage.as_ptr(), NonNull::<u64>::dangling().as_ptr().cast_const());
    }

    #[test]
    fn allocates_requested_capacity() {
        let storage = RawStorage::<u64>::allocate(16).unwrap();

        assert_eq!(storage.capacity(), 16);
        assert!(!storage.is_empty());
        assert_ne!(storage.as_ptr(), NonNull::<u64>::dangling().as_ptr().cast_const());
        assert!(storage.as_ptr().is_aligned());
    }

    #[test]
    fn slots_are_contiguous() {
        let storage = RawStorage::<u32>::allocate(4).unwrap();

        // SAFETY: Both indexes are within capacity.
        let first = unsafe { storage.slot_ptr(0) };
        // SAFETY: Both indexes are within capacity.
        let third = unsafe { storage.slot_ptr(2) };

        // SAFETY: Both pointers are derived from the same allocation.
        let distance = unsafe { third.offset_from(first) };
        assert_eq!(distance, 2);
    }

    #[test]
    fn slot_write_then_read() {
        let mut storage = RawStorage::<u32>::allocate(3).unwrap();

        for (index, value) in [10_u32, 11, 12].into_iter().enumerate() {
            // SAFETY: The index is within capacity and the slot is not live yet.
            unsafe { storage.slot_ptr(index).write(value) };
        }

        // SAFETY: Slot 1 was initialized above.
        unsafe { *storage.slot_mut(1) = 21 };

        // SAFETY: Slots 0..3 were initialized above and u32 needs no drop.
        unsafe {
            assert_eq!(*storage.slot(0), 10);
        }
        // SAFETY: As above.
        unsafe {
            assert_eq!(*storage.slot(1), 21);
        }
        // SAFETY: As above.
        unsafe {
            assert_eq!(*storage.slot(2), 12);
        }
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source = RawStorage::<u16>::allocate(8).unwrap();
        let source_ptr = source.as_ptr();

        let taken = source.take();

        assert_eq!(taken.capacity(), 8);
        assert_eq!(taken.as_ptr(), source_ptr);
        assert_eq!(source.capacity(), 0);
        assert!(source.is_empty());
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = RawStorage::<u16>::allocate(2).unwrap();
        let mut b = RawStorage::<u16>::allocate(5).unwrap();
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        a.swap(&mut b);

        assert_eq!(a.capacity(), 5);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.as_ptr(), b_ptr);
        assert_eq!(b.as_ptr(), a_ptr);
    }

    #[test]
    fn drop_does_not_drop_slots() {
        struct PanicOnDrop;

        impl Drop for PanicOnDrop {
            fn drop(&mut self) {
                panic!("storage must never drop slot contents");
            }
        }

        let mut storage = RawStorage::<PanicOnDrop>::allocate(2).unwrap();

        // SAFETY: The index is within capacity.
        unsafe { storage.slot_ptr(0).write(PanicOnDrop) };

        // The live element is intentionally leaked together with the block contents.
        drop(storage);
    }

    #[test]
    fn zero_sized_type_uses_no_memory() {
        let mut storage = RawStorage::<()>::allocate(1_000).unwrap();

        assert_eq!(storage.capacity(), 1_000);
        assert!(!storage.is_empty());
        assert_eq!(storage.as_mut_ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    fn unrepresentable_size_is_capacity_overflow() {
        let result = RawStorage::<u64>::allocate(usize::MAX);

        assert!(matches!(
            result,
            Err(Error::CapacityOverflow {
                requested: usize::MAX
            })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[cfg_attr(miri, ignore)] // Miri aborts on allocation requests of this size.
    fn impossible_allocation_is_reported() {
        // Valid layout (size fits in isize) but far beyond any real address space.
        let capacity = usize::MAX / 4 / size_of::<u64>();

        let result = RawStorage::<u64>::allocate(capacity);

        assert!(matches!(result, Err(Error::AllocationFailed { .. })));
    }
}

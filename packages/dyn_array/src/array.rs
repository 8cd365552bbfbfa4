use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::{fmt, mem, slice};

use crate::{Error, RawStorage, Result};

/// An owning, contiguous, growable array of `T` built on a [`RawStorage<T>`] block.
///
/// The first [`len()`](Self::len) slots of the storage hold live elements, the remaining slots
/// up to [`capacity()`](Self::capacity) are uninitialized memory.
///
/// # Growth
///
/// [`push()`](Self::push) and [`insert()`](Self::insert) double the capacity when the array is
/// full (starting at 1), so a sequence of N appends relocates O(N) elements in total.
/// [`reserve()`](Self::reserve) and [`resize()`](Self::resize) grow to the exact size requested.
/// Capacity never shrinks on its own.
///
/// Relocation into a new block is a bitwise move. Moves in Rust never run user code and cannot
/// fail, so relocation never calls `Clone` and growth cannot leave elements split between two
/// blocks.
///
/// # Failure safety
///
/// Operations that acquire storage return [`Error`] if the memory cannot be obtained, leaving
/// the array exactly as it was. If constructing or cloning an element panics, the operation
/// drops whatever it already created and releases any block it allocated before the panic
/// continues, so the array is observed either unchanged or in the state documented on the
/// operation. No partially built element and no leaked block is ever observable.
///
/// # Invalidation
///
/// Any operation that changes the capacity moves every element to a new address. The borrow
/// checker rules out dangling references; raw pointers obtained via [`as_ptr()`](Self::as_ptr)
/// must not be used across such an operation.
///
/// # Example
///
/// ```
/// use dyn_array::DynArray;
///
/// let mut numbers = DynArray::new();
/// numbers.push(1).unwrap();
/// numbers.push(3).unwrap();
/// numbers.insert(1, 2).unwrap();
///
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
/// assert_eq!(numbers.capacity(), 4);
/// ```
pub struct DynArray<T> {
    storage: RawStorage<T>,

    /// Number of live elements, always `<= storage.capacity()`.
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
        }
    }

    /// Creates an array of `len` default-constructed elements with capacity `len`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated.
    ///
    /// # Panics
    ///
    /// If `T::default()` panics, the elements constructed so far are dropped and the storage is
    /// released before the panic propagates.
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates an array of `len` elements with capacity `len`, constructing the element at each
    /// index by calling `f(index)` in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. `f` is not called in that case.
    ///
    /// # Panics
    ///
    /// If `f` panics, the elements constructed so far are dropped and the storage is released
    /// before the panic propagates.
    ///
    /// # Example
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let squares = DynArray::from_fn(4, |index| index * index).unwrap();
    ///
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<Self> {
        // If `f` panics, dropping the partially filled array cleans up the live prefix.
        let mut array = Self {
            storage: RawStorage::allocate(len)?,
            len: 0,
        };

        for index in 0..len {
            array.push_within_capacity(f(index));
        }

        #[cfg(debug_assertions)]
        array.integrity_check();

        Ok(array)
    }

    /// Creates a copy of the array holding a clone of every element, with capacity equal to the
    /// length of the source.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated.
    ///
    /// # Panics
    ///
    /// If cloning an element panics, the clones made so far are dropped and the new storage is
    /// released before the panic propagates. `self` is never modified.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut clone = Self {
            storage: RawStorage::allocate(self.len)?,
            len: 0,
        };

        for item in self {
            clone.push_within_capacity(item.clone());
        }

        Ok(clone)
    }

    /// Replaces the contents of `self` with clones of the elements of `source`.
    ///
    /// If `source` is longer than the current capacity, a complete copy of `source` is built in
    /// new storage and swapped in, so `self` stays untouched if that copy fails. Otherwise no
    /// allocation happens: the overlapping prefix is assigned element by element via
    /// [`Clone::clone_from()`], surplus elements are dropped and missing ones are cloned into
    /// the spare capacity.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if new storage is needed and cannot be allocated. `self` is
    /// unchanged in that case.
    ///
    /// # Panics
    ///
    /// If cloning panics while building new storage, `self` is unchanged. If it panics while
    /// reusing the existing storage, `self` remains a valid array whose prefix may already hold
    /// the assigned values.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        if source.len > self.capacity() {
            let mut replacement = source.try_clone()?;
            self.swap_with(&mut replacement);
            return Ok(());
        }

        let common = self.len.min(source.len);
        let (overlap, missing) = source.as_slice().split_at(common);

        for (target, item) in self.iter_mut().zip(overlap) {
            target.clone_from(item);
        }

        self.truncate(source.len);

        for item in missing {
            self.push_within_capacity(item.clone());
        }

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Moves the contents out of `self`, leaving it empty with zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut source = DynArray::from_fn(3, |index| index).unwrap();
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.len(), 3);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the storage and contents of `self` and `other`.
    ///
    /// Neither side can fail or drop elements. To swap two elements, use the slice method
    /// `swap(a, b)` available through `Deref`.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the number of live elements.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without acquiring new storage.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first `len` slots are initialized, the pointer is non-null and aligned
        // even when the storage is empty, and `&self` prevents mutation for the lifetime.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;

        // SAFETY: The first `len` slots are initialized, the pointer is non-null and aligned
        // even when the storage is empty, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), len) }
    }

    /// Returns a pointer to the first element, dangling if the array has no storage.
    ///
    /// The pointer is invalidated by any operation that changes the capacity.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// For bounds-checked access, index the slice the array dereferences to.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < len()`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds in array of length {}",
            self.len
        );

        // SAFETY: The caller guarantees the index is within the live prefix.
        unsafe { self.storage.slot(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < len()`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds in array of length {}",
            self.len
        );

        // SAFETY: The caller guarantees the index is within the live prefix.
        unsafe { self.storage.slot_mut(index) }
    }

    /// Ensures the capacity is at least `new_capacity`, acquiring a block of exactly
    /// `new_capacity` slots if the current one is smaller.
    ///
    /// Never decreases the capacity and never changes the length or any element.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. The array is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut new_storage = RawStorage::allocate(new_capacity)?;

        // SAFETY: The new block has room for all live elements and is a different allocation.
        unsafe {
            relocate(&self.storage, 0, &mut new_storage, 0, self.len);
        }

        self.adopt(new_storage);

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Resizes the array to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`resize_with()`](Self::resize_with) for the growth and failure behavior.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. The array is unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes the array to `new_len`.
    ///
    /// Shrinking drops the trailing elements and keeps the capacity. Growing first reserves
    /// exactly `new_len` slots if the capacity does not cover it, then fills the new slots in
    /// order with values returned by `f`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. The array is unchanged.
    ///
    /// # Panics
    ///
    /// If `f` panics, the elements added by this call are dropped again and the length is
    /// restored. The capacity may already have grown by then.
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) -> Result<()> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len)?;

        let guard = LenRollback::new(self);

        while guard.array.len < new_len {
            guard.array.push_within_capacity(f());
        }

        guard.commit();

        Ok(())
    }

    /// Drops every element at index `new_len` and above. Has no effect if `new_len >= len()`.
    ///
    /// The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        // Cannot underflow, checked above.
        let tail_len = self.len.wrapping_sub(new_len);

        // SAFETY: new_len < len <= capacity.
        let tail_start = unsafe { self.storage.slot_ptr(new_len) };
        let tail = ptr::slice_from_raw_parts_mut(tail_start.as_ptr(), tail_len);

        // Shorten first so that a panicking destructor cannot cause a double drop.
        self.len = new_len;

        // SAFETY: The tail slots were live and are no longer reachable through the array.
        unsafe {
            ptr::drop_in_place(tail);
        }
    }

    /// Drops all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// Grows the capacity to `max(1, 2 * capacity)` if the array is full.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. The array is unchanged and
    /// `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<&mut T> {
        self.push_with(|| value)
    }

    /// Appends the element returned by `f` and returns a reference to it.
    ///
    /// If the array is full, new storage is acquired and the new element is constructed into
    /// it before any existing element is relocated.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. `f` is not called and the array
    /// is unchanged.
    ///
    /// # Panics
    ///
    /// If `f` panics, the array is unchanged and any newly acquired storage is released.
    pub fn push_with(&mut self, f: impl FnOnce() -> T) -> Result<&mut T> {
        let index = self.len;

        if self.len == self.capacity() {
            // A panic in `f` drops `new_storage` and leaves the current block untouched.
            let mut new_storage = RawStorage::allocate(self.grown_capacity()?)?;
            let value = f();

            // SAFETY: index == len < new capacity and the slot is uninitialized.
            let slot = unsafe { new_storage.slot_ptr(index) };

            // SAFETY: The slot is in bounds, aligned and not live.
            unsafe {
                slot.write(value);
            }

            // SAFETY: The new block has room for all live elements and is a different allocation.
            unsafe {
                relocate(&self.storage, 0, &mut new_storage, 0, self.len);
            }

            self.adopt(new_storage);

            // Cannot overflow because the capacity is above the old length.
            self.len = self.len.wrapping_add(1);
        } else {
            self.push_within_capacity(f());
        }

        #[cfg(debug_assertions)]
        self.integrity_check();

        // SAFETY: The element at `index` was initialized above.
        Ok(unsafe { self.storage.slot_mut(index) })
    }

    /// Inserts `value` at `index`, shifting every element at `index` and above up by one, and
    /// returns a reference to the inserted element.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. The array is unchanged and
    /// `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.insert_with(index, || value)
    }

    /// Inserts the element returned by `f` at `index`, shifting every element at `index` and
    /// above up by one, and returns a reference to the inserted element.
    ///
    /// If the array is full, new storage is acquired, the new element is constructed into its
    /// final slot, and only then are the elements before and after `index` relocated around it.
    /// Otherwise the element is produced first and the tail is shifted afterwards, so a
    /// panicking `f` never leaves a gap.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the storage cannot be allocated. `f` is not called and the array
    /// is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`. If `f` panics, the array is unchanged and any newly acquired
    /// storage is released.
    pub fn insert_with(&mut self, index: usize, f: impl FnOnce() -> T) -> Result<&mut T> {
        assert!(
            index <= self.len,
            "insertion index {index} out of bounds in array of length {}",
            self.len
        );

        // Cannot underflow, checked above.
        let tail_len = self.len.wrapping_sub(index);

        if self.len == self.capacity() {
            // A panic in `f` drops `new_storage` and leaves the current block untouched.
            let mut new_storage = RawStorage::allocate(self.grown_capacity()?)?;
            let value = f();

            // SAFETY: index <= len < new capacity and the slot is uninitialized.
            let slot = unsafe { new_storage.slot_ptr(index) };

            // SAFETY: The slot is in bounds, aligned and not live.
            unsafe {
                slot.write(value);
            }

            // SAFETY: The new block has room for the prefix and it does not overlap the old one.
            unsafe {
                relocate(&self.storage, 0, &mut new_storage, 0, index);
            }

            // SAFETY: The suffix lands in slots index + 1 ..= len, all within the new capacity.
            unsafe {
                relocate(
                    &self.storage,
                    index,
                    &mut new_storage,
                    index.wrapping_add(1),
                    tail_len,
                );
            }

            self.adopt(new_storage);
        } else {
            let value = f();

            // SAFETY: index <= len <= capacity.
            let gap = unsafe { self.storage.slot_ptr(index) };

            // SAFETY: index < capacity because len < capacity, so index + 1 is at most capacity.
            let shifted = unsafe { gap.add(1) };

            // SAFETY: Moves the live tail up by one slot. The last destination slot is slot `len`,
            // which exists because len < capacity. Source and destination may overlap.
            unsafe {
                gap.copy_to(shifted, tail_len);
            }

            // SAFETY: The slot at `index` no longer holds a live element after the shift.
            unsafe {
                gap.write(value);
            }
        }

        // Cannot overflow because the capacity is above the old length.
        self.len = self.len.wrapping_add(1);

        #[cfg(debug_assertions)]
        self.integrity_check();

        // SAFETY: The element at `index` was initialized above.
        Ok(unsafe { self.storage.slot_mut(index) })
    }

    /// Removes the element at `index` and returns it, shifting every element above it down by
    /// one. The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index {index} out of bounds in array of length {}",
            self.len
        );

        // Cannot underflow, index < len.
        let tail_len = self.len.wrapping_sub(index).wrapping_sub(1);

        // SAFETY: index < len <= capacity.
        let hole = unsafe { self.storage.slot_ptr(index) };

        // SAFETY: The slot is live. Its contents are logically moved out here and the slot is
        // overwritten or excluded from the live range below.
        let value = unsafe { hole.read() };

        // SAFETY: index < len, so index + 1 <= len <= capacity.
        let next = unsafe { hole.add(1) };

        // SAFETY: Moves the live elements after the hole down by one slot. Both ranges lie within
        // the live prefix and may overlap.
        unsafe {
            next.copy_to(hole, tail_len);
        }

        // Cannot underflow, index < len.
        self.len = self.len.wrapping_sub(1);

        #[cfg(debug_assertions)]
        self.integrity_check();

        value
    }

    /// Removes the last element and returns it. The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop() called on an empty array");

        // Cannot underflow, checked above.
        self.len = self.len.wrapping_sub(1);

        // SAFETY: The slot at the old last index is live and is excluded from the live range.
        let last = unsafe { self.storage.slot_ptr(self.len) };

        // SAFETY: The slot holds an initialized element which we move out exactly once.
        unsafe { last.read() }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Capacity for the next push or insert into a full array.
    ///
    /// If doubling is not representable, the error reports `usize::MAX` slots as requested.
    fn grown_capacity(&self) -> Result<usize> {
        if self.capacity() == 0 {
            return Ok(1);
        }

        self.capacity()
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow {
                requested: usize::MAX,
            })
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if the array is full. Callers ensure there is room.
    fn push_within_capacity(&mut self, value: T) {
        assert!(
            self.len < self.capacity(),
            "no spare capacity in array of length {}",
            self.len
        );

        // SAFETY: len < capacity, checked above.
        let slot = unsafe { self.storage.slot_ptr(self.len) };

        // SAFETY: The slot is in bounds, aligned and not live.
        unsafe {
            slot.write(value);
        }

        // Cannot overflow because len < capacity.
        self.len = self.len.wrapping_add(1);
    }

    /// Takes ownership of `new_storage`, into which the live elements have already been
    /// relocated, and releases the previous block.
    fn adopt(&mut self, mut new_storage: RawStorage<T>) {
        self.storage.swap(&mut new_storage);

        // The previous block only holds relocated (logically moved-out) elements, so releasing
        // the memory is all that is left to do.
        drop(new_storage);
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        assert!(
            self.len <= self.capacity(),
            "array length {} exceeds capacity {}",
            self.len,
            self.capacity()
        );
    }
}

/// Bitwise-moves `count` live elements from slot `from` of `source` into the uninitialized
/// slots starting at `to` in `target`. Afterwards the source slots are logically uninitialized.
///
/// # Safety
///
/// The caller must ensure that the source range is live, the target range is within capacity
/// and not live, and the two storages are different blocks.
#[expect(
    clippy::needless_pass_by_ref_mut,
    reason = "the target block is written through the slot pointer"
)]
unsafe fn relocate<T>(
    source: &RawStorage<T>,
    from: usize,
    target: &mut RawStorage<T>,
    to: usize,
    count: usize,
) {
    // SAFETY: Forwarding the bounds requirement to the caller.
    let source_start: NonNull<T> = unsafe { source.slot_ptr(from) };

    // SAFETY: Forwarding the bounds requirement to the caller.
    let target_start: NonNull<T> = unsafe { target.slot_ptr(to) };

    // SAFETY: Both ranges are valid for `count` elements and belong to different blocks, so they
    // cannot overlap.
    unsafe {
        source_start.copy_to_nonoverlapping(target_start, count);
    }
}

/// Restores the length of an array to a previous value when dropped, dropping any elements
/// added since. Disarmed via [`commit()`](Self::commit).
struct LenRollback<'a, T> {
    array: &'a mut DynArray<T>,
    len: usize,
}

impl<'a, T> LenRollback<'a, T> {
    fn new(array: &'a mut DynArray<T>) -> Self {
        let len = array.len;
        Self { array, len }
    }

    fn commit(self) {
        mem::forget(self);
    }
}

impl<T> Drop for LenRollback<'_, T> {
    fn drop(&mut self) {
        self.array.truncate(self.len);
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // The storage releases its block afterwards, when the field is dropped.
        self.clear();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|error| error.escalate())
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.try_clone_from(source) {
            error.escalate();
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<DynArray<U>> for DynArray<T> {
    fn eq(&self, other: &DynArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! An owning, contiguous, growable array built directly on raw, uninitialized memory.
//!
//! The crate is split into two layers:
//!
//! - [`RawStorage<T>`] owns one block of uninitialized memory with room for a fixed number of
//!   `T` slots. It never constructs or drops elements.
//! - [`DynArray<T>`] owns exactly one [`RawStorage<T>`] and tracks which prefix of its slots holds
//!   live elements. It implements amortized growth and every mutating operation on top of the
//!   storage.
//!
//! # Key Features
//!
//! - **Amortized growth**: appending doubles the capacity when full, starting at 1
//! - **Strong failure safety**: a panicking constructor or clone never leaves a partially
//!   mutated array, a partially built element or a leaked block behind
//! - **Fallible allocation**: every operation that may acquire storage returns [`Error`] instead
//!   of aborting, leaving the array untouched
//! - **Relocation without cloning**: growth moves elements bitwise and never calls `Clone`
//! - **Slice access**: [`DynArray<T>`] dereferences to `[T]` for bounds-checked indexing,
//!   iteration and the rest of the slice API
//!
//! # Failure model
//!
//! Running out of memory is reported as an [`Error`]. A panic raised by element code (`Default`,
//! `Clone` or a constructor closure) propagates to the caller after the operation has cleaned
//! up after itself. Precondition violations, such as removing past the end or popping an empty
//! array, panic.
//!
//! # Examples
//!
//! ## Growing and shrinking
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut array = DynArray::new();
//! array.reserve(100_000)?;
//!
//! for value in 0..5 {
//!     array.push(value)?;
//! }
//!
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.capacity(), 100_000);
//!
//! assert_eq!(array.pop(), 4);
//! assert_eq!(array.as_slice(), &[0, 1, 2, 3]);
//! # Ok::<(), dyn_array::Error>(())
//! ```
//!
//! ## Positional insert and remove
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut words = DynArray::from_fn(3, |index| ["a", "c", "d"][index])?;
//!
//! words.insert(1, "b")?;
//! assert_eq!(words.as_slice(), &["a", "b", "c", "d"]);
//!
//! assert_eq!(words.remove(3), "d");
//! assert_eq!(words.as_slice(), &["a", "b", "c"]);
//! # Ok::<(), dyn_array::Error>(())
//! ```
//!
//! ## Panic safety
//!
//! ```rust
//! use std::panic::{AssertUnwindSafe, catch_unwind};
//!
//! use dyn_array::DynArray;
//!
//! let mut array = DynArray::from_fn(4, |index| index.to_string())?;
//!
//! // The array is full, so this push needs new storage. The constructor panics
//! // before any existing element is relocated.
//! let result = catch_unwind(AssertUnwindSafe(|| {
//!     _ = array.push_with(|| panic!("constructor failed"));
//! }));
//!
//! assert!(result.is_err());
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.capacity(), 4);
//! # Ok::<(), dyn_array::Error>(())
//! ```

mod array;
mod error;
mod storage;

pub use array::DynArray;
pub use error::Error;
pub(crate) use error::Result;
pub use storage::RawStorage;

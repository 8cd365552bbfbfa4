//! Basic usage example for `DynArray`.
//!
//! Shows capacity growth, positional insert and remove, and what happens to the array when an
//! element constructor panics.

use std::panic::{self, AssertUnwindSafe};

use dyn_array::{DynArray, Error};

fn main() -> Result<(), Error> {
    let mut array = DynArray::new();

    println!(
        "Created empty DynArray: len {}, capacity {}",
        array.len(),
        array.capacity()
    );

    for value in 0..10_u32 {
        array.push(value)?;
        println!(
            "Pushed {value}: len {}, capacity {}",
            array.len(),
            array.capacity()
        );
    }

    array.insert(0, 100)?;
    println!("Inserted 100 at the front: {array:?}");

    let removed = array.remove(5);
    println!("Removed {removed} from index 5: {array:?}");

    let popped = array.pop();
    println!("Popped {popped}: {array:?}");

    array.resize(4)?;
    println!(
        "Resized to 4: {array:?} (capacity stays at {})",
        array.capacity()
    );

    // Fill up the spare capacity so the next push has to acquire new storage.
    array.resize(array.capacity())?;
    let capacity_before = array.capacity();

    // Silence the default panic message for the intentional panic below.
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        _ = array.push_with(|| panic!("element constructor failed"));
    }));

    panic::set_hook(previous_hook);

    println!(
        "Push with a panicking constructor failed: {}; array unchanged: len {}, capacity {} (was {capacity_before})",
        result.is_err(),
        array.len(),
        array.capacity()
    );

    let copy = array.try_clone()?;
    println!("Cloned array: {copy:?}");

    Ok(())
}

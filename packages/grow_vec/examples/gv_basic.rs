//! Basic usage of the `grow_vec` crate:
//!
//! * Creating a container and watching the capacity double.
//! * Inserting and erasing in the middle.
//! * Converting between item types.
//! * Comparing containers of different item types.

use grow_vec::{GrowVec, grow_vec};

fn main() {
    let mut names = GrowVec::<String>::new();

    // The capacity is always zero or a power of two, doubling when the container is full.
    for name in ["Alice", "Bob", "Charlie"] {
        names.push_back(name.to_string());
        println!(
            "Container holds {} items with a capacity of {}",
            names.len(),
            names.capacity()
        );
    }

    names.insert(1, "Dave".to_string());
    names.erase(0);
    println!("After insert and erase: {names:?}");
    println!("First: {}, last: {}", names.front(), names.back());

    // Item types convert into each other where a conversion exists.
    let readings: GrowVec<f32> = grow_vec![1.5, 2.0, 3.25];
    let truncated = GrowVec::<i64>::from_converted(&readings);
    println!("Truncated readings: {truncated:?}");

    // Comparison works across item types too.
    let whole: GrowVec<u8> = grow_vec![1, 2, 3];
    println!("Truncated readings equal {whole:?}: {}", truncated == whole);

    // Clearing releases the buffer.
    names.clear();
    println!(
        "After clear: {} items with a capacity of {}",
        names.len(),
        names.capacity()
    );
}

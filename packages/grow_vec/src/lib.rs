#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A contiguous growable array with power-of-two capacity growth and element-type converting
//! construction, assignment and comparison.
//!
//! This crate provides [`GrowVec`], a single-allocation sequence container similar to `Vec`, with
//! a few deliberate differences:
//!
//! - **Power-of-two capacity**: capacity is always zero or the smallest power of two that holds
//!   the largest length or reservation requested so far. Appending to an empty container yields
//!   capacities 1, 2, 4, 8 and so on.
//! - **Always-initialized slots**: every allocated slot holds a valid item, default-constructed
//!   on allocation and overwritten afterwards.
//! - **Cross-type conversion**: containers of different item types can be created from, assigned
//!   from and compared with each other when the item types allow it via [`AssignFrom`] and
//!   [`ElementEq`]. The primitive numeric types support this out of the box.
//! - **Explicit release**: [`clear()`](GrowVec::clear) releases the allocation instead of only
//!   dropping the items.
//! - **Checked preconditions**: out-of-bounds positions and operations on an empty container
//!   panic with a descriptive message, with `try_` counterparts returning an [`Error`].
//!
//! # Examples
//!
//! ```
//! use grow_vec::{GrowVec, grow_vec};
//!
//! let mut items: GrowVec<i32> = grow_vec![1, 2, 3];
//! assert_eq!(items.capacity(), 4);
//!
//! items.push_back(4);
//! items.push_back(5);
//! assert_eq!(items.len(), 5);
//! assert_eq!(items.capacity(), 8);
//!
//! items.insert(0, 0);
//! items.erase(items.len() - 1);
//! assert_eq!(items.as_slice(), &[0, 1, 2, 3, 4]);
//!
//! // Containers of different item types compare item by item.
//! let floats: GrowVec<f64> = grow_vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! assert_eq!(items, floats);
//! ```

mod assign;
mod buffer;
mod builder;
mod error;
mod grow_vec;
mod growth;

pub use assign::*;
pub use builder::*;
pub use error::Error;
pub use grow_vec::GrowVec;

/// Creates a [`GrowVec`] from a list of values or from a value and a length.
///
/// - `grow_vec![]` creates an empty container.
/// - `grow_vec![a, b, c]` creates a container holding the values in order.
/// - `grow_vec![value; len]` creates a container of `len` items assigned from `value`.
///
/// The item type of the container comes from context and may differ from the type of the
/// values, as long as it implements [`AssignFrom`] for them.
///
/// # Examples
///
/// ```
/// use grow_vec::{GrowVec, grow_vec};
///
/// let empty: GrowVec<u8> = grow_vec![];
/// assert_eq!(empty.capacity(), 0);
///
/// let listed: GrowVec<u8> = grow_vec![1, 2, 3, 4, 5];
/// assert_eq!(listed.capacity(), 8);
///
/// let filled: GrowVec<f32> = grow_vec![7; 3];
/// assert_eq!(filled.as_slice(), &[7.0, 7.0, 7.0]);
/// ```
#[macro_export]
macro_rules! grow_vec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $len:expr) => {
        $crate::GrowVec::from_elem($len, &$value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($value),+])
    };
}

//! The capacity policy shared by every growth path of the container.
//!
//! Capacity is always either zero (nothing allocated) or a power of two. Every path that needs
//! more room asks this module for the capacity to allocate, so the policy lives in one place.

/// Returns the capacity to allocate in order to hold `requested` items.
///
/// This is zero for zero and otherwise the smallest power of two that is `>= requested`.
///
/// # Panics
///
/// Panics if the resulting power of two does not fit in `usize`.
#[must_use]
pub(crate) fn capacity_for(requested: usize) -> usize {
    checked_capacity_for(requested).expect("capacity overflow")
}

/// Returns the capacity to allocate in order to hold `requested` items, or `None` if the
/// resulting power of two does not fit in `usize`.
#[must_use]
pub(crate) fn checked_capacity_for(requested: usize) -> Option<usize> {
    if requested == 0 {
        return Some(0);
    }

    requested.checked_next_power_of_two()
}

use thiserror::Error;

/// Errors reported by the fallible (`try_`) operations of [`GrowVec`][crate::GrowVec].
///
/// The panicking counterparts of these operations panic with the `Display` text of the same
/// variant, so a caller sees the same diagnostic either way.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The index did not refer to a valid position in the container.
    #[error("index {index} out of bounds for container of length {len}")]
    OutOfBounds {
        /// The index the caller provided.
        index: usize,

        /// The length of the container at the time of the call.
        len: usize,
    },

    /// The operation requires at least one item but the container is empty.
    #[error("container is empty")]
    Empty,

    /// The requested capacity cannot be represented, either because the next power of two does
    /// not fit in `usize` or because the resulting allocation would exceed `isize::MAX` bytes.
    #[error("capacity overflow: cannot allocate room for {requested} items")]
    CapacityOverflow {
        /// The number of items the caller asked room for.
        requested: usize,
    },
}

/// A specialized `Result` type for container operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, Clone);

    #[test]
    fn out_of_bounds_names_index_and_length() {
        let error = Error::OutOfBounds { index: 8, len: 8 };

        assert_eq!(
            error.to_string(),
            "index 8 out of bounds for container of length 8"
        );
    }

    #[test]
    fn empty_message() {
        assert_eq!(Error::Empty.to_string(), "container is empty");
    }

    #[test]
    fn capacity_overflow_names_request() {
        let error = Error::CapacityOverflow {
            requested: usize::MAX,
        };

        assert!(error.to_string().starts_with("capacity overflow"));
        assert!(error.to_string().contains(&usize::MAX.to_string()));
    }

    #[test]
    fn usable_in_result() {
        let result: Result<()> = Err(Error::Empty);

        assert_eq!(result, Err(Error::Empty));
    }
}

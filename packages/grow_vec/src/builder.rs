use std::marker::PhantomData;

use crate::GrowVec;

/// Builder for creating an instance of [`GrowVec`].
///
/// You only need to use this builder if you want to create a container with both an initial
/// length and additional reserved capacity in one step. The constructors on [`GrowVec`] cover
/// the common cases.
///
/// # Examples
///
/// ```
/// use grow_vec::GrowVec;
///
/// let items = GrowVec::<u32>::builder().len(3).reserve(10).build();
///
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.capacity(), 16);
/// ```
#[must_use]
pub struct GrowVecBuilder<T> {
    len: usize,
    reserve: usize,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for GrowVecBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowVecBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("len", &self.len)
            .field("reserve", &self.reserve)
            .finish()
    }
}

impl<T> GrowVecBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            len: 0,
            reserve: 0,
            _item: PhantomData,
        }
    }

    /// Sets the number of default-constructed items the container starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let items = GrowVec::<String>::builder().len(2).build();
    ///
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[1], "");
    /// ```
    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Sets the minimum capacity the container starts with.
    ///
    /// The actual capacity is the smallest power of two that holds both this many items and the
    /// initial length.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let items = GrowVec::<u8>::builder().reserve(100).build();
    ///
    /// assert!(items.is_empty());
    /// assert_eq!(items.capacity(), 128);
    /// ```
    pub fn reserve(mut self, capacity: usize) -> Self {
        self.reserve = capacity;
        self
    }

    /// Builds the container with the specified configuration.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity overflows `usize` or the maximum allocation size.
    #[must_use]
    pub fn build(self) -> GrowVec<T>
    where
        T: Default,
    {
        GrowVec::with_len_reserved(self.len, self.reserve)
    }
}

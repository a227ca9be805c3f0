use std::any::type_name;
use std::fmt;
use std::mem;
use std::ops::{
    Deref, DerefMut, Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo,
    RangeToInclusive,
};
use std::slice;

use tracing::trace;

use crate::buffer::RawBuffer;
use crate::error::Result;
use crate::growth::{capacity_for, checked_capacity_for};
use crate::{AssignFrom, ElementEq, Error, GrowVecBuilder};

/// A contiguous growable array with power-of-two capacity.
///
/// The container owns a single heap allocation of `capacity()` slots, of which the first `len()`
/// form the logical sequence. Capacity is always either zero (nothing allocated) or a power of two
/// and only grows, except for [`clear()`][1], which releases the allocation entirely.
///
/// # Slots are always initialized
///
/// Every slot of the allocation holds a valid `T`. When the container allocates, it fills every
/// new slot with `T::default()`; afterwards slots are only ever overwritten. This is why most
/// operations that may allocate require `T: Default`. A side effect is that slots beyond the
/// logical length keep whatever value was last stored there: shrinking via [`pop_back()`][2],
/// [`erase()`][6] or [`resize()`][3] and then growing the length again without reallocating
/// exposes those values.
///
/// # Converting between item types
///
/// A `GrowVec<T>` can be created from, assigned from and compared with a `GrowVec<V>` of a
/// different item type, as long as the item types allow it via [`AssignFrom`] and [`ElementEq`].
///
/// ```
/// use grow_vec::GrowVec;
///
/// let floats: GrowVec<f32> = GrowVec::from([3.0, 5.0]);
/// let ints = GrowVec::<i32>::from_converted(&floats);
///
/// assert_eq!(ints, floats);
/// ```
///
/// # Preconditions
///
/// Operations with a precondition on the index or on the container being non-empty panic when
/// the precondition is violated. Each has a `try_` counterpart that returns an [`Error`] instead.
///
/// # Invalidation
///
/// Any operation that reallocates or releases the buffer invalidates pointers obtained from
/// [`begin()`][4], [`end()`][5] and similar methods. References are protected by the borrow
/// checker as usual.
///
/// [1]: Self::clear
/// [2]: Self::pop_back
/// [3]: Self::resize
/// [4]: Self::begin
/// [5]: Self::end
/// [6]: Self::erase
pub struct GrowVec<T> {
    buffer: RawBuffer<T>,

    /// Number of leading slots of `buffer` that form the logical sequence.
    len: usize,
}

#[cold]
#[track_caller]
fn fail(error: Error) -> ! {
    panic!("{error}")
}

impl<T> GrowVec<T> {
    /// Creates an empty container. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let items = GrowVec::<u32>::new();
    ///
    /// assert!(items.is_empty());
    /// assert_eq!(items.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: RawBuffer::new(),
            len: 0,
        }
    }

    /// Starts building a new [`GrowVec`] with a custom initial length and capacity.
    pub fn builder() -> GrowVecBuilder<T> {
        GrowVecBuilder::new()
    }

    /// The number of items in the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of slots allocated. Always zero or a power of two.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the container has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all items and releases the allocation, leaving both length and capacity at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items = GrowVec::<u32>::with_len(8);
    /// items.clear();
    ///
    /// assert!(items.is_empty());
    /// assert_eq!(items.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        if self.capacity() > 0 {
            trace!(
                item_type = type_name::<T>(),
                capacity = self.capacity(),
                len = self.len,
                "releasing buffer"
            );
        }

        // The length goes first, so a panic while dropping items cannot leave it dangling.
        self.len = 0;
        self.buffer = RawBuffer::new();
    }

    /// Removes the last item by shortening the length by one.
    ///
    /// The vacated slot keeps its value and the capacity does not change.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        if let Err(error) = self.try_pop_back() {
            fail(error);
        }
    }

    /// Removes the last item by shortening the length by one, or returns [`Error::Empty`] if
    /// there is no item to remove.
    pub fn try_pop_back(&mut self) -> Result<()> {
        self.len = self.len.checked_sub(1).ok_or(Error::Empty)?;
        Ok(())
    }

    /// Exchanges the contents of two containers without touching any items.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// The first item.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[must_use]
    #[track_caller]
    pub fn front(&self) -> &T {
        let Some(item) = self.as_slice().first() else {
            fail(Error::Empty);
        };

        item
    }

    /// The first item.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[must_use]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        let Some(item) = self.as_mut_slice().first_mut() else {
            fail(Error::Empty);
        };

        item
    }

    /// The last item.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[must_use]
    #[track_caller]
    pub fn back(&self) -> &T {
        let Some(item) = self.as_slice().last() else {
            fail(Error::Empty);
        };

        item
    }

    /// The last item.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[must_use]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        let Some(item) = self.as_mut_slice().last_mut() else {
            fail(Error::Empty);
        };

        item
    }

    /// The items of the container as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer
            .slots()
            .get(..self.len)
            .expect("length never exceeds capacity")
    }

    /// The items of the container as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;

        self.buffer
            .slots_mut()
            .get_mut(..len)
            .expect("length never exceeds capacity")
    }

    /// Pointer to the first item, or to where it would be if the container is empty.
    ///
    /// The pointer is invalidated by any operation that reallocates or releases the buffer.
    #[must_use]
    pub fn begin(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Pointer one past the last item.
    ///
    /// The pointer is invalidated by any operation that reallocates or releases the buffer.
    #[must_use]
    pub fn end(&self) -> *const T {
        self.as_ptr_range().end
    }

    /// Mutable pointer to the first item, or to where it would be if the container is empty.
    ///
    /// The pointer is invalidated by any operation that reallocates or releases the buffer.
    #[must_use]
    pub fn begin_mut(&mut self) -> *mut T {
        self.buffer.as_mut_ptr()
    }

    /// Mutable pointer one past the last item.
    ///
    /// The pointer is invalidated by any operation that reallocates or releases the buffer.
    #[must_use]
    pub fn end_mut(&mut self) -> *mut T {
        self.as_mut_ptr_range().end
    }

    /// The half-open pointer range `[begin(), end())` spanning the items.
    #[must_use]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// The half-open mutable pointer range `[begin_mut(), end_mut())` spanning the items.
    #[must_use]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        let capacity = self.capacity();

        assert!(
            self.len <= capacity,
            "length {} exceeds capacity {} in container of {}",
            self.len,
            capacity,
            type_name::<T>()
        );

        assert!(
            capacity == 0 || capacity.is_power_of_two(),
            "capacity {} is not a power of two in container of {}",
            capacity,
            type_name::<T>()
        );
    }
}

impl<T: Clone> GrowVec<T> {
    /// Removes the item at `index`, shifting all items after it one position to the left.
    ///
    /// Each following item is copied one slot down, so the removed item is dropped right away
    /// and the vacated last slot keeps a copy of the previous last item.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items: GrowVec<u32> = GrowVec::from([1, 2, 3]);
    /// items.erase(0);
    ///
    /// assert_eq!(items.as_slice(), &[2, 3]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        if let Err(error) = self.try_erase(index) {
            fail(error);
        }
    }

    /// Removes the item at `index`, shifting all items after it one position to the left, or
    /// returns [`Error::OutOfBounds`] if `index >= len()`.
    pub fn try_erase(&mut self, index: usize) -> Result<()> {
        let len = self.len;

        let shifted = self
            .as_mut_slice()
            .get_mut(index..)
            .filter(|shifted| !shifted.is_empty())
            .ok_or(Error::OutOfBounds { index, len })?;

        for next in 1..shifted.len() {
            let (head, tail) = shifted.split_at_mut(next);

            if let (Some(target), Some(source)) = (head.last_mut(), tail.first()) {
                target.clone_from(source);
            }
        }

        self.len = len
            .checked_sub(1)
            .expect("guarded by bounds check above");

        Ok(())
    }
}

impl<T: Default> GrowVec<T> {
    /// Creates a container of `len` default-constructed items.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let items = GrowVec::<u32>::with_len(7);
    ///
    /// assert_eq!(items.len(), 7);
    /// assert_eq!(items.capacity(), 8);
    /// assert!(items.iter().all(|item| *item == 0));
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::with_len_reserved(len, 0)
    }

    /// Creates a container of `len` default-constructed items in a single allocation large
    /// enough for both `len` and `reserve` items.
    pub(crate) fn with_len_reserved(len: usize, reserve: usize) -> Self {
        Self {
            buffer: RawBuffer::with_default(capacity_for(len.max(reserve))),
            len,
        }
    }

    /// Creates a container of `len` items, each assigned from `value`.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let items = GrowVec::<i32>::from_elem(3, &2.5_f64);
    ///
    /// assert_eq!(items.as_slice(), &[2, 2, 2]);
    /// assert_eq!(items.capacity(), 4);
    /// ```
    #[must_use]
    pub fn from_elem<V>(len: usize, value: &V) -> Self
    where
        T: AssignFrom<V>,
    {
        let mut result = Self::with_len(len);

        for slot in result.as_mut_slice() {
            slot.assign_from(value);
        }

        result
    }

    /// Creates a container holding a copy of every item of `other`, converted via
    /// [`AssignFrom`]. The new container has the same capacity as `other`.
    #[must_use]
    pub fn from_converted<V>(other: &GrowVec<V>) -> Self
    where
        T: AssignFrom<V>,
    {
        let mut result = Self {
            buffer: RawBuffer::with_default(other.capacity()),
            len: other.len(),
        };

        for (slot, value) in result.as_mut_slice().iter_mut().zip(other.as_slice()) {
            slot.assign_from(value);
        }

        result
    }

    /// Creates a container by moving every item out of `other`, converted via [`AssignFrom`].
    /// The new container has the same capacity as `other`, which is left empty with no
    /// allocation.
    ///
    /// Unlike a plain move of a container, this visits every item because the item type
    /// changes. To move a container of the same item type, move the value itself or use
    /// [`std::mem::take()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut names: GrowVec<String> = GrowVec::from(["a".to_string(), "b".to_string()]);
    /// let moved = GrowVec::<String>::from_moved(&mut names);
    ///
    /// assert_eq!(moved.len(), 2);
    /// assert!(names.is_empty());
    /// assert_eq!(names.capacity(), 0);
    /// ```
    #[must_use]
    pub fn from_moved<V: Default>(other: &mut GrowVec<V>) -> Self
    where
        T: AssignFrom<V>,
    {
        let mut result = Self {
            buffer: RawBuffer::with_default(other.capacity()),
            len: other.len(),
        };

        for (slot, value) in result.as_mut_slice().iter_mut().zip(other.as_mut_slice()) {
            slot.assign_from_owned(mem::take(value));
        }

        other.clear();
        result
    }

    /// Replaces the contents of this container with converted copies of the items of `other`.
    ///
    /// The current allocation is released first; the result has the same capacity as `other`.
    pub fn assign_converted<V>(&mut self, other: &GrowVec<V>)
    where
        T: AssignFrom<V>,
    {
        self.clear();
        *self = Self::from_converted(other);
    }

    /// Replaces the contents of this container with the items moved out of `other`, converted
    /// via [`AssignFrom`]. `other` is left empty with no allocation.
    ///
    /// The current allocation is released first; the result has the capacity `other` had.
    pub fn assign_moved<V: Default>(&mut self, other: &mut GrowVec<V>)
    where
        T: AssignFrom<V>,
    {
        self.clear();
        *self = Self::from_moved(other);
    }

    /// Ensures the container has room for at least `capacity` items in total.
    ///
    /// If `capacity` exceeds the current capacity, the buffer is reallocated with the smallest
    /// power of two that fits and the items are moved into it. Otherwise, this does nothing.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items = GrowVec::<u64>::new();
    /// items.reserve(10);
    ///
    /// assert_eq!(items.capacity(), 16);
    /// assert!(items.is_empty());
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.buffer.grow(self.len, capacity_for(capacity));

            #[cfg(debug_assertions)]
            self.integrity_check();
        }
    }

    /// Ensures the container has room for at least `capacity` items in total, or returns
    /// [`Error::CapacityOverflow`] if such a buffer cannot be described.
    ///
    /// Failure of the allocator itself is not reported here; it is handled by
    /// [`std::alloc::handle_alloc_error()`].
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let new_capacity = checked_capacity_for(capacity)
            .filter(|new_capacity| RawBuffer::<T>::layout_fits(*new_capacity))
            .ok_or(Error::CapacityOverflow {
                requested: capacity,
            })?;

        self.buffer.grow(self.len, new_capacity);

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Sets the length of the container to `len`, growing the capacity if needed.
    ///
    /// Slots that become part of the sequence keep whatever value they hold: `T::default()` if
    /// they were never written since allocation, otherwise the value last stored there. Shrinking
    /// never reduces the capacity.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items = GrowVec::<u32>::from_elem(10, &1);
    ///
    /// items.resize(17);
    /// assert_eq!(items.len(), 17);
    /// assert_eq!(items.capacity(), 32);
    ///
    /// items.resize(10);
    /// assert_eq!(items.len(), 10);
    /// assert_eq!(items.capacity(), 32);
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.reserve(len);
        self.len = len;
    }

    /// Appends a value, converted via [`AssignFrom`], to the end of the container.
    ///
    /// If the container is full, the capacity grows to the next power of two first.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items = GrowVec::<i32>::new();
    /// items.push_back(1);
    /// items.push_back(2);
    /// items.push_back(3);
    ///
    /// assert_eq!(items.len(), 3);
    /// assert_eq!(items.capacity(), 4);
    /// ```
    pub fn push_back<V>(&mut self, value: V)
    where
        T: AssignFrom<V>,
    {
        let index = self.make_room_for_one();

        self.slot_mut(index).assign_from_owned(value);
        self.len = index.checked_add(1).expect("guarded by growth above");
    }

    /// Appends a copy of a value, converted via [`AssignFrom`], to the end of the container.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    pub fn push_back_ref<V>(&mut self, value: &V)
    where
        T: AssignFrom<V>,
    {
        let index = self.make_room_for_one();

        self.slot_mut(index).assign_from(value);
        self.len = index.checked_add(1).expect("guarded by growth above");
    }

    /// Constructs a new item from `args` and appends it to the end of the container.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut names = GrowVec::<String>::new();
    /// names.emplace_back("hello");
    ///
    /// assert_eq!(names[0], "hello");
    /// ```
    pub fn emplace_back<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_back_with(|| T::from(args))
    }

    /// Constructs a new item by calling `constructor` and appends it to the end of the container.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut pairs = GrowVec::<(i32, String)>::new();
    /// pairs.emplace_back_with(|| (1, "hello".to_string()));
    ///
    /// assert_eq!(pairs[0].0, 1);
    /// assert_eq!(pairs[0].1, "hello");
    /// ```
    pub fn emplace_back_with<F>(&mut self, constructor: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = constructor();
        let index = self.make_room_for_one();

        *self.slot_mut(index) = value;
        self.len = index.checked_add(1).expect("guarded by growth above");

        self.slot_mut(index)
    }

    /// Inserts a value, converted via [`AssignFrom`], at `index`, shifting all items at and after
    /// it one position to the right. Inserting at `len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or if the required capacity overflows `usize` or the maximum
    /// allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut items = GrowVec::<i32>::with_len(1);
    /// items.insert(0, 1);
    ///
    /// assert_eq!(items.as_slice(), &[1, 0]);
    /// ```
    #[track_caller]
    pub fn insert<V>(&mut self, index: usize, value: V)
    where
        T: AssignFrom<V>,
    {
        if let Err(error) = self.try_insert(index, value) {
            fail(error);
        }
    }

    /// Inserts a value, converted via [`AssignFrom`], at `index`, shifting all items at and after
    /// it one position to the right, or returns [`Error::OutOfBounds`] if `index > len()`.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the maximum allocation size.
    pub fn try_insert<V>(&mut self, index: usize, value: V) -> Result<()>
    where
        T: AssignFrom<V>,
    {
        let len = self.len;

        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }

        let spare = self.make_room_for_one();

        // The spare slot past the end rotates down to `index` and is then overwritten.
        self.buffer
            .slots_mut()
            .get_mut(index..=spare)
            .expect("guarded by bounds check and growth above")
            .rotate_right(1);

        self.slot_mut(index).assign_from_owned(value);
        self.len = spare.checked_add(1).expect("guarded by growth above");

        Ok(())
    }

    /// Grows the buffer if there is no spare slot past the end and returns the index of that
    /// spare slot (which equals the current length).
    fn make_room_for_one(&mut self) -> usize {
        if self.len == self.capacity() {
            let required = self.len.checked_add(1).expect("capacity overflow");
            self.buffer.grow(self.len, capacity_for(required));

            #[cfg(debug_assertions)]
            self.integrity_check();
        }

        self.len
    }

    /// Any slot of the buffer, including those past the end of the sequence.
    fn slot_mut(&mut self, index: usize) -> &mut T {
        self.buffer
            .slots_mut()
            .get_mut(index)
            .expect("caller guarantees the slot is within capacity")
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// Copies every item into a new container with the same capacity as the original.
    fn clone(&self) -> Self {
        Self::from_converted(self)
    }

    /// Releases the current allocation and then copies every item of `source`, as
    /// [`assign_converted()`][GrowVec::assign_converted] does.
    fn clone_from(&mut self, source: &Self) {
        self.assign_converted(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len;

        let Some(item) = self.as_slice().get(index) else {
            fail(Error::OutOfBounds { index, len });
        };

        item
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;

        let Some(item) = self.as_mut_slice().get_mut(index) else {
            fail(Error::OutOfBounds { index, len });
        };

        item
    }
}

macro_rules! range_index {
    ($($range:ty),+ $(,)?) => {
        $(
            impl<T> Index<$range> for GrowVec<T> {
                type Output = [T];

                #[expect(
                    clippy::indexing_slicing,
                    reason = "ranges past the length panic exactly as they do on a slice"
                )]
                #[track_caller]
                fn index(&self, range: $range) -> &[T] {
                    &self.as_slice()[range]
                }
            }

            impl<T> IndexMut<$range> for GrowVec<T> {
                #[expect(
                    clippy::indexing_slicing,
                    reason = "ranges past the length panic exactly as they do on a slice"
                )]
                #[track_caller]
                fn index_mut(&mut self, range: $range) -> &mut [T] {
                    &mut self.as_mut_slice()[range]
                }
            }
        )+
    };
}

range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
);

impl<T, V> PartialEq<GrowVec<V>> for GrowVec<T>
where
    T: ElementEq<V>,
{
    fn eq(&self, other: &GrowVec<V>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(ours, theirs)| ours.element_eq(theirs))
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, V> Extend<V> for GrowVec<T>
where
    T: AssignFrom<V> + Default,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, V> FromIterator<V> for GrowVec<T>
where
    T: AssignFrom<V> + Default,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T, V, const N: usize> From<[V; N]> for GrowVec<T>
where
    T: AssignFrom<V> + Default,
{
    /// Creates a container from a fixed list of values, in list order, with the smallest
    /// power-of-two capacity that holds them.
    fn from(values: [V; N]) -> Self {
        let mut result = Self::with_len(N);

        for (slot, value) in result.as_mut_slice().iter_mut().zip(values) {
            slot.assign_from_owned(value);
        }

        result
    }
}

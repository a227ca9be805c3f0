use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::any::type_name;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ptr::{self, NonNull};
use std::slice;

use scopeguard::ScopeGuard;
use tracing::trace;

/// The backing storage of a `GrowVec`: an exclusively owned heap allocation of `capacity` slots.
///
/// Every slot in `[0, capacity)` holds an initialized `T` for as long as the buffer exists.
/// Slots are default-initialized when allocated and only ever overwritten afterwards, so the
/// owner can expose any prefix of the slots as the logical sequence without tracking which
/// slots have been written.
///
/// A zero-sized layout (capacity zero or a zero-sized `T`) never touches the allocator and uses
/// a dangling pointer instead.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,

    // We own `T` values and drop them when we are dropped.
    _owns: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with zero capacity. Does not allocate.
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if an allocation of `capacity` slots of `T` can be described by a layout.
    #[must_use]
    pub(crate) fn layout_fits(capacity: usize) -> bool {
        Layout::array::<T>(capacity).is_ok()
    }

    #[must_use]
    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("capacity overflow")
    }

    #[must_use]
    fn allocate(capacity: usize) -> NonNull<T> {
        let layout = Self::layout(capacity);

        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: The layout is valid for an array of `T` and is not zero-sized (checked above).
        let ptr = unsafe { alloc(layout) }.cast::<T>();

        NonNull::new(ptr).unwrap_or_else(|| handle_alloc_error(layout))
    }

    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate(capacity)` with the same `capacity` and must not
    /// have been deallocated yet. Any values still in the slots are not dropped.
    unsafe fn deallocate(ptr: NonNull<T>, capacity: usize) {
        let layout = Self::layout(capacity);

        if layout.size() == 0 {
            return;
        }

        // SAFETY: Forwarding guarantees from the caller; the layout is the one we allocated with.
        unsafe {
            dealloc(ptr.as_ptr().cast(), layout);
        }
    }

    /// # Safety
    ///
    /// The slots `[start, end)` of the allocation at `ptr` must be initialized and must not be
    /// used again after this call.
    unsafe fn drop_slots(ptr: NonNull<T>, start: usize, end: usize) {
        let count = end
            .checked_sub(start)
            .expect("slot range must not be inverted");

        // SAFETY: Forwarding guarantees from the caller; `start` is within the allocation.
        let first = unsafe { ptr.add(start) };

        // SAFETY: Forwarding guarantees from the caller.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first.as_ptr(), count));
        }
    }

    /// Writes `T::default()` into the slots `[start, end)` of an allocation of `capacity` slots.
    ///
    /// If `T::default()` panics, the slots initialized by this call are dropped and the
    /// allocation is released before the panic continues.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate(capacity)` and `end` must not exceed `capacity`.
    /// No slot in `[start, end)` may be initialized. Slots outside the range are not touched, so
    /// nothing outside the range may need dropping if a panic occurs.
    unsafe fn fill_default(ptr: NonNull<T>, capacity: usize, start: usize, end: usize)
    where
        T: Default,
    {
        let mut initialized_end = scopeguard::guard(start, |initialized_end| {
            // SAFETY: Exactly the slots `[start, initialized_end)` have been written by the loop
            // below. Nothing else in the allocation is initialized, per the safety contract.
            unsafe {
                Self::drop_slots(ptr, start, initialized_end);
                Self::deallocate(ptr, capacity);
            }
        });

        for index in start..end {
            // SAFETY: `index < end <= capacity`, so the slot is within the allocation.
            let slot = unsafe { ptr.add(index) };

            // SAFETY: The slot is valid for writes and not yet initialized.
            unsafe {
                slot.as_ptr().write(T::default());
            }

            *initialized_end = index
                .checked_add(1)
                .expect("guarded by index < end <= capacity");
        }

        ScopeGuard::into_inner(initialized_end);
    }

    /// Allocates a buffer of `capacity` slots, each holding `T::default()`.
    #[must_use]
    pub(crate) fn with_default(capacity: usize) -> Self
    where
        T: Default,
    {
        let ptr = Self::allocate(capacity);

        // SAFETY: Fresh allocation of exactly `capacity` slots, none of them initialized.
        unsafe {
            Self::fill_default(ptr, capacity, 0, capacity);
        }

        Self {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    /// Replaces the buffer with a larger one of `new_capacity` slots, moving the first `live`
    /// values across. Every other slot of the new buffer holds `T::default()`. Values in the old
    /// slots `[live, capacity)` are dropped.
    ///
    /// If `T::default()` panics, `self` is left exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if `live` exceeds the current capacity or if `new_capacity` is smaller than the
    /// current capacity.
    pub(crate) fn grow(&mut self, live: usize, new_capacity: usize)
    where
        T: Default,
    {
        assert!(
            live <= self.capacity,
            "cannot preserve {live} values from a buffer of {} slots of {}",
            self.capacity,
            type_name::<T>()
        );
        assert!(
            new_capacity >= self.capacity,
            "cannot shrink a buffer of {} from {} to {} slots",
            type_name::<T>(),
            self.capacity,
            new_capacity
        );

        trace!(
            item_type = type_name::<T>(),
            old_capacity = self.capacity,
            new_capacity,
            live,
            "growing buffer"
        );

        let new_ptr = Self::allocate(new_capacity);

        // The tail goes first because it is the only step that can panic. Until the live values
        // are moved below, the old buffer is untouched.
        //
        // SAFETY: Fresh allocation of `new_capacity` slots and `live <= new_capacity`.
        unsafe {
            Self::fill_default(new_ptr, new_capacity, live, new_capacity);
        }

        // SAFETY: Both allocations hold at least `live` slots and do not overlap. The old slots
        // are treated as moved-from afterwards and never dropped.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
        }

        let old = ManuallyDrop::new(mem::replace(
            self,
            Self {
                ptr: new_ptr,
                capacity: new_capacity,
                _owns: PhantomData,
            },
        ));

        let old_ptr = old.ptr;
        let old_capacity = old.capacity;

        // Release the old allocation even if dropping a leftover value panics.
        let _release = scopeguard::guard((), move |()| {
            // SAFETY: The old allocation was made with `old_capacity` and is not referenced by
            // `self` anymore.
            unsafe {
                Self::deallocate(old_ptr, old_capacity);
            }
        });

        // SAFETY: The old slots `[live, old_capacity)` are initialized and were not moved.
        unsafe {
            Self::drop_slots(old_ptr, live, old_capacity);
        }
    }

    #[must_use]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[must_use]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// All `capacity` slots, including those beyond the logical length of the owner.
    #[must_use]
    pub(crate) fn slots(&self) -> &[T] {
        // SAFETY: Every slot in `[0, capacity)` is initialized for the lifetime of the buffer and
        // the pointer is non-null and aligned (dangling is fine for an empty or ZST slice).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// All `capacity` slots, including those beyond the logical length of the owner.
    #[must_use]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        // SAFETY: As in `slots()`, plus we hold an exclusive reference to the buffer.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let ptr = self.ptr;
        let capacity = self.capacity;

        // Release the allocation even if dropping a value panics.
        let _release = scopeguard::guard((), move |()| {
            // SAFETY: The allocation was made with `capacity` and nothing refers to it anymore.
            unsafe {
                Self::deallocate(ptr, capacity);
            }
        });

        // SAFETY: All slots are initialized and this is the last use of them.
        unsafe {
            Self::drop_slots(ptr, 0, capacity);
        }
    }
}

impl<T> std::fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

// SAFETY: The buffer exclusively owns its values. There is nothing thread-bound about a heap
// allocation, so as long as T itself can move between threads, the buffer can do so, too.
unsafe impl<T: Send> Send for RawBuffer<T> {}

// SAFETY: Shared access only hands out shared references to the values, so sharing the buffer
// is as safe as sharing the values themselves.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(RawBuffer<u32>: Send, Sync);
    assert_not_impl_any!(RawBuffer<Cell<u32>>: Sync);

    thread_local! {
        static LIVE: Cell<isize> = const { Cell::new(0) };
        static DEFAULTS_BEFORE_PANIC: Cell<Option<usize>> = const { Cell::new(None) };
    }

    /// Keeps a per-thread count of live instances and can be told to panic on construction.
    #[derive(Debug)]
    struct Tracked(u32);

    impl Default for Tracked {
        fn default() -> Self {
            DEFAULTS_BEFORE_PANIC.with(|remaining| {
                if let Some(count) = remaining.get() {
                    assert!(count > 0, "Tracked::default() told to panic");
                    remaining.set(Some(count - 1));
                }
            });

            LIVE.with(|live| live.set(live.get() + 1));
            Self(0)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            LIVE.with(|live| live.set(live.get() - 1));
        }
    }

    fn live_count() -> isize {
        LIVE.with(Cell::get)
    }

    fn panic_after_defaults(count: Option<usize>) {
        DEFAULTS_BEFORE_PANIC.with(|remaining| remaining.set(count));
    }

    #[test]
    fn empty_buffer_has_no_slots() {
        let buffer = RawBuffer::<u64>::new();

        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.slots().is_empty());
    }

    #[test]
    fn with_default_initializes_every_slot() {
        let buffer = RawBuffer::<String>::with_default(4);

        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.slots().len(), 4);
        assert!(buffer.slots().iter().all(String::is_empty));
    }

    #[test]
    fn grow_moves_live_values_and_defaults_the_rest() {
        let mut buffer = RawBuffer::<String>::with_default(2);
        buffer.slots_mut()[0] = "first".to_string();
        buffer.slots_mut()[1] = "leftover".to_string();

        buffer.grow(1, 8);

        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.slots()[0], "first");
        assert!(buffer.slots()[1..].iter().all(String::is_empty));
    }

    #[test]
    fn grow_from_empty() {
        let mut buffer = RawBuffer::<u32>::new();

        buffer.grow(0, 1);

        assert_eq!(buffer.slots(), &[0]);
    }

    #[test]
    fn drop_drops_every_slot() {
        panic_after_defaults(None);
        let before = live_count();

        let mut buffer = RawBuffer::<Tracked>::with_default(4);
        assert_eq!(live_count(), before + 4);

        buffer.grow(2, 16);
        assert_eq!(live_count(), before + 16);

        drop(buffer);
        assert_eq!(live_count(), before);
    }

    #[test]
    fn panicking_default_during_allocation_cleans_up() {
        let before = live_count();
        panic_after_defaults(Some(3));

        let result = catch_unwind(|| RawBuffer::<Tracked>::with_default(8));

        panic_after_defaults(None);
        assert!(result.is_err());
        assert_eq!(live_count(), before);
    }

    #[test]
    fn panicking_default_during_growth_keeps_old_buffer() {
        panic_after_defaults(None);
        let before = live_count();

        let mut buffer = RawBuffer::<Tracked>::with_default(2);
        buffer.slots_mut()[0].0 = 7;

        panic_after_defaults(Some(1));
        let result = catch_unwind(AssertUnwindSafe(|| buffer.grow(2, 8)));
        panic_after_defaults(None);

        assert!(result.is_err());
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.slots()[0].0, 7);
        assert_eq!(live_count(), before + 2);

        drop(buffer);
        assert_eq!(live_count(), before);
    }

    #[test]
    fn zero_sized_items_do_not_allocate() {
        let mut buffer = RawBuffer::<()>::with_default(4);
        assert_eq!(buffer.slots().len(), 4);

        buffer.grow(4, 64);
        assert_eq!(buffer.capacity(), 64);
        assert_eq!(buffer.slots().len(), 64);
    }

    #[test]
    fn layout_fits_rejects_huge_capacity() {
        assert!(RawBuffer::<u64>::layout_fits(1024));
        assert!(!RawBuffer::<u64>::layout_fits(usize::MAX));
    }

    #[test]
    #[should_panic]
    fn grow_cannot_preserve_more_than_capacity() {
        let mut buffer = RawBuffer::<u32>::with_default(2);

        buffer.grow(3, 4);
    }

    #[test]
    #[should_panic]
    fn grow_cannot_shrink() {
        let mut buffer = RawBuffer::<u32>::with_default(4);

        buffer.grow(1, 2);
    }
}

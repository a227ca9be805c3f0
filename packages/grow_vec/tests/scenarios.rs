//! Scenarios exercising `GrowVec` purely through its public API, the way a downstream crate
//! would use it.

use std::mem;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread;

use grow_vec::{AssignFrom, ElementEq, Error, GrowVec, grow_vec};

#[derive(Clone, Debug, Default, PartialEq)]
struct Meters(f64);

#[derive(Clone, Debug, Default, PartialEq)]
struct Millimeters(u64);

impl AssignFrom<Millimeters> for Meters {
    #[expect(
        clippy::cast_precision_loss,
        reason = "test values are far below 2^52"
    )]
    fn assign_from(&mut self, value: &Millimeters) {
        self.0 = value.0 as f64 / 1000.0;
    }
}

impl ElementEq<Millimeters> for Meters {
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_cmp,
        reason = "test values are exactly representable"
    )]
    fn element_eq(&self, other: &Millimeters) -> bool {
        self.0 == other.0 as f64 / 1000.0
    }
}

#[test]
fn sizing() {
    let seven = GrowVec::<i32>::with_len(7);
    assert_eq!(seven.len(), 7);
    assert_eq!(seven.capacity(), 8);

    let nine = GrowVec::<i32>::with_len(9);
    assert_eq!(nine.len(), 9);
    assert_eq!(nine.capacity(), 16);

    let zero = GrowVec::<i32>::with_len(0);
    assert_eq!(zero.len(), 0);
    assert_eq!(zero.capacity(), 0);
}

#[test]
fn push_growth() {
    let mut items = GrowVec::<i32>::new();

    items.push_back(1);
    items.push_back(2);
    items.push_back(3);

    assert_eq!(items.len(), 3);
    assert_eq!(items.capacity(), 4);
}

#[test]
fn insert_then_erase() {
    let mut items = GrowVec::<i32>::with_len(1);

    items.insert(0, 1);
    assert_eq!(items.as_slice(), &[1, 0]);
    assert_eq!(items.len(), 2);

    items.erase(0);
    assert_eq!(items.as_slice(), &[0]);
    assert_eq!(items.len(), 1);
}

#[test]
fn cross_type_equality() {
    let floats: GrowVec<f32> = grow_vec![3.0, 5.0];
    let ints: GrowVec<i32> = grow_vec![3, 5];

    assert_eq!(floats, ints);
    assert_eq!(ints, floats);
}

#[test]
fn user_defined_conversion() {
    let lengths: GrowVec<Millimeters> = grow_vec![Millimeters(1500), Millimeters(250)];

    let converted = GrowVec::<Meters>::from_converted(&lengths);

    assert_eq!(converted.as_slice(), &[Meters(1.5), Meters(0.25)]);
    assert_eq!(converted, lengths);
}

#[test]
fn user_defined_move_conversion() {
    let mut lengths: GrowVec<Millimeters> = grow_vec![Millimeters(1000); 3];

    let mut converted = GrowVec::<Meters>::new();
    converted.assign_moved(&mut lengths);

    assert_eq!(converted.as_slice(), &[Meters(1.0), Meters(1.0), Meters(1.0)]);
    assert_eq!(converted.capacity(), 4);
    assert!(lengths.is_empty());
    assert_eq!(lengths.capacity(), 0);
}

#[test]
fn move_empties_source() {
    let mut items: GrowVec<String> = grow_vec!["a".to_string(), "b".to_string()];
    let before = items.clone();

    let moved = mem::take(&mut items);

    assert_eq!(items.len(), 0);
    assert_eq!(items.capacity(), 0);
    assert_eq!(moved, before);
}

#[test]
fn precondition_violations_panic_with_diagnostics() {
    fn panic_message(operation: impl FnOnce()) -> String {
        let payload = catch_unwind(AssertUnwindSafe(operation))
            .expect_err("operation was expected to panic");

        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string))
            .expect("panic payload is a string")
    }

    let mut items: GrowVec<i32> = grow_vec![1, 2];

    let index_message = panic_message(|| {
        let _item = items[2];
    });
    assert!(index_message.contains("out of bounds"));
    assert!(panic_message(|| items.insert(3, 0)).contains("out of bounds"));
    assert!(panic_message(|| items.erase(2)).contains("out of bounds"));

    items.clear();

    assert!(panic_message(|| items.pop_back()).contains("container is empty"));
    assert!(panic_message(|| _ = items.front()).contains("container is empty"));
    assert!(panic_message(|| _ = items.back()).contains("container is empty"));
}

#[test]
fn fallible_operations_report_errors() {
    let mut items: GrowVec<i32> = grow_vec![1, 2];

    assert_eq!(
        items.try_insert(5, 0),
        Err(Error::OutOfBounds { index: 5, len: 2 })
    );
    assert_eq!(
        items.try_erase(2),
        Err(Error::OutOfBounds { index: 2, len: 2 })
    );
    assert!(items.get(2).is_none());

    items.try_pop_back().unwrap();
    items.try_pop_back().unwrap();
    assert_eq!(items.try_pop_back(), Err(Error::Empty));

    assert!(matches!(
        items.try_reserve(usize::MAX),
        Err(Error::CapacityOverflow { .. })
    ));
}

#[test]
fn builder_configures_initial_state() {
    let items = GrowVec::<u16>::builder().len(3).reserve(5).build();

    assert_eq!(items.as_slice(), &[0, 0, 0]);
    assert_eq!(items.capacity(), 8);
}

#[test]
fn works_as_slice() {
    let mut items: GrowVec<u32> = grow_vec![5, 3, 9, 1];

    items.sort_unstable();

    assert_eq!(items.first(), Some(&1));
    assert_eq!(items.iter().sum::<u32>(), 18);
    assert!(items.contains(&9));
    assert_eq!(&items[1..3], &[3, 5]);
}

#[test]
fn moves_between_threads() {
    let items: GrowVec<String> = grow_vec!["sent".to_string()];

    let returned = thread::spawn(move || {
        let mut items = items;
        items.push_back("back".to_string());
        items
    })
    .join()
    .unwrap();

    assert_eq!(returned.as_slice(), &["sent".to_string(), "back".to_string()]);
}

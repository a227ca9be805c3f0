//! Element-level capabilities that let a container of one item type be built from, assigned from
//! or compared with a container of another item type.
//!
//! The container itself has no conversion policy. Whether a `GrowVec<T>` can be created from a
//! `GrowVec<V>` is decided entirely by whether `T: AssignFrom<V>`, and whether the two can be
//! compared by whether `T: ElementEq<V>`. Both are checked at compile time.
//!
//! Every item type can be assigned from and compared with itself (given `Clone` and `PartialEq`,
//! respectively). The primitive numeric types can additionally be assigned from and compared
//! with each other, using `as` conversion for assignment and a common wide type for comparison.
//! Your own types opt in by implementing the traits:
//!
//! ```
//! use grow_vec::{AssignFrom, GrowVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Celsius(f64);
//!
//! #[derive(Clone, Debug, Default)]
//! struct Fahrenheit(f64);
//!
//! impl AssignFrom<Fahrenheit> for Celsius {
//!     fn assign_from(&mut self, value: &Fahrenheit) {
//!         self.0 = (value.0 - 32.0) * 5.0 / 9.0;
//!     }
//! }
//!
//! let readings: GrowVec<Fahrenheit> = GrowVec::from([Fahrenheit(212.0), Fahrenheit(32.0)]);
//! let converted = GrowVec::<Celsius>::from_converted(&readings);
//!
//! assert_eq!(converted[0].0, 100.0);
//! assert_eq!(converted[1].0, 0.0);
//! ```

/// Assignment of a value of type `V` into an existing slot of type `Self`.
///
/// This is the capability the container relies on whenever it stores a foreign value into one of
/// its slots: fill construction, converting copies and moves, `push_back()` and `insert()`.
pub trait AssignFrom<V> {
    /// Overwrites `self` with a value derived from a borrowed `value`.
    fn assign_from(&mut self, value: &V);

    /// Overwrites `self` with a value derived from an owned `value`.
    ///
    /// The default implementation borrows `value` and delegates to [`assign_from()`][1].
    /// Implement this if ownership of `value` allows a cheaper conversion.
    ///
    /// [1]: Self::assign_from
    #[inline]
    fn assign_from_owned(&mut self, value: V) {
        self.assign_from(&value);
    }
}

impl<T: Clone> AssignFrom<T> for T {
    #[inline]
    fn assign_from(&mut self, value: &T) {
        self.clone_from(value);
    }

    #[inline]
    fn assign_from_owned(&mut self, value: T) {
        *self = value;
    }
}

/// Equality between a value of type `Self` and a value of type `V`.
///
/// Two containers compare equal if they have the same length and every pair of items at the same
/// position is equal according to this trait.
pub trait ElementEq<V: ?Sized> {
    /// Returns `true` if `self` and `other` are equal.
    fn element_eq(&self, other: &V) -> bool;
}

impl<T: PartialEq + ?Sized> ElementEq<T> for T {
    #[inline]
    fn element_eq(&self, other: &T) -> bool {
        self == other
    }
}

macro_rules! numeric_assign {
    ($target:ty => $($source:ty),+ $(,)?) => {
        $(
            impl AssignFrom<$source> for $target {
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    reason = "numeric assignment follows `as` conversion semantics"
                )]
                #[inline]
                fn assign_from(&mut self, value: &$source) {
                    *self = *value as $target;
                }
            }
        )+
    };
}

macro_rules! numeric_eq {
    ($via:ty; $lhs:ty => $($rhs:ty),+ $(,)?) => {
        $(
            impl ElementEq<$rhs> for $lhs {
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::float_cmp,
                    clippy::unnecessary_cast,
                    reason = "both sides are widened to a common type before comparing"
                )]
                #[inline]
                fn element_eq(&self, other: &$rhs) -> bool {
                    (*self as $via) == (*other as $via)
                }
            }
        )+
    };
}

numeric_assign!(i8 => i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
numeric_assign!(i16 => i8, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
numeric_assign!(i32 => i8, i16, i64, isize, u8, u16, u32, u64, usize, f32, f64);
numeric_assign!(i64 => i8, i16, i32, isize, u8, u16, u32, u64, usize, f32, f64);
numeric_assign!(isize => i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);
numeric_assign!(u8 => i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64);
numeric_assign!(u16 => i8, i16, i32, i64, isize, u8, u32, u64, usize, f32, f64);
numeric_assign!(u32 => i8, i16, i32, i64, isize, u8, u16, u64, usize, f32, f64);
numeric_assign!(u64 => i8, i16, i32, i64, isize, u8, u16, u32, usize, f32, f64);
numeric_assign!(usize => i8, i16, i32, i64, isize, u8, u16, u32, u64, f32, f64);
numeric_assign!(f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);
numeric_assign!(f64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

// Integers compare exactly through i128; anything involving a float compares through f64.
numeric_eq!(i128; i8 => i16, i32, i64, isize, u8, u16, u32, u64, usize);
numeric_eq!(i128; i16 => i8, i32, i64, isize, u8, u16, u32, u64, usize);
numeric_eq!(i128; i32 => i8, i16, i64, isize, u8, u16, u32, u64, usize);
numeric_eq!(i128; i64 => i8, i16, i32, isize, u8, u16, u32, u64, usize);
numeric_eq!(i128; isize => i8, i16, i32, i64, u8, u16, u32, u64, usize);
numeric_eq!(i128; u8 => i8, i16, i32, i64, isize, u16, u32, u64, usize);
numeric_eq!(i128; u16 => i8, i16, i32, i64, isize, u8, u32, u64, usize);
numeric_eq!(i128; u32 => i8, i16, i32, i64, isize, u8, u16, u64, usize);
numeric_eq!(i128; u64 => i8, i16, i32, i64, isize, u8, u16, u32, usize);
numeric_eq!(i128; usize => i8, i16, i32, i64, isize, u8, u16, u32, u64);
numeric_eq!(f64; i8 => f32, f64);
numeric_eq!(f64; i16 => f32, f64);
numeric_eq!(f64; i32 => f32, f64);
numeric_eq!(f64; i64 => f32, f64);
numeric_eq!(f64; isize => f32, f64);
numeric_eq!(f64; u8 => f32, f64);
numeric_eq!(f64; u16 => f32, f64);
numeric_eq!(f64; u32 => f32, f64);
numeric_eq!(f64; u64 => f32, f64);
numeric_eq!(f64; usize => f32, f64);
numeric_eq!(f64; f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);
numeric_eq!(f64; f64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Letter {
        value: u8,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Offset {
        value: i32,
    }

    impl AssignFrom<Letter> for Offset {
        fn assign_from(&mut self, value: &Letter) {
            self.value = i32::from(value.value) - i32::from(b'a');
        }
    }

    #[test]
    fn same_type_assign_clones() {
        let mut target = String::from("old");
        let source = String::from("new");

        target.assign_from(&source);

        assert_eq!(target, "new");
        assert_eq!(source, "new");
    }

    #[test]
    fn same_type_assign_owned_moves() {
        let mut target = vec![1, 2];

        target.assign_from_owned(vec![3, 4, 5]);

        assert_eq!(target, vec![3, 4, 5]);
    }

    #[test]
    fn custom_assign() {
        let mut target = Offset::default();

        target.assign_from(&Letter { value: b'b' });
        assert_eq!(target.value, 1);

        // The owned variant falls back to the borrowing one.
        target.assign_from_owned(Letter { value: b'e' });
        assert_eq!(target.value, 4);
    }

    #[test]
    fn float_to_int_truncates() {
        let mut target = 0_i32;

        target.assign_from(&14.6_f64);
        assert_eq!(target, 14);

        target.assign_from(&-2.9_f32);
        assert_eq!(target, -2);
    }

    #[test]
    fn int_to_float_converts() {
        let mut target = 0.0_f32;

        target.assign_from(&4_i32);
        assert_eq!(target, 4.0);
    }

    #[test]
    fn narrowing_int_wraps() {
        let mut target = 0_u8;

        target.assign_from(&300_u32);
        assert_eq!(target, 44);
    }

    #[test]
    fn cross_integer_equality() {
        assert!(3_i32.element_eq(&3_u64));
        assert!(!(-1_i32).element_eq(&u32::MAX));
        assert!(u8::MAX.element_eq(&255_i64));
    }

    #[test]
    fn float_and_int_equality() {
        assert!(3.0_f32.element_eq(&3_i32));
        assert!(5_i64.element_eq(&5.0_f64));
        assert!(!3.5_f32.element_eq(&3_i32));
        assert!(!3_i32.element_eq(&3.5_f64));
    }

    #[test]
    fn float_widths_compare_after_widening() {
        assert!(0.5_f32.element_eq(&0.5_f64));
        assert!(!0.1_f32.element_eq(&0.1_f64));
    }

    #[test]
    fn same_type_equality_uses_partial_eq() {
        assert!("abc".element_eq("abc"));
        assert!(!Letter { value: b'a' }.element_eq(&Letter { value: b'b' }));
    }
}

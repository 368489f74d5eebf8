/// Divisibility test for integers.
pub trait IsMultiple: Copy {
    /// Returns `true` if `self` is `of` times some integer.
    ///
    /// Zero is a multiple of everything, and the only multiple of zero.
    fn is_multiple(self, of: Self) -> bool;
}

impl IsMultiple for i64 {
    fn is_multiple(self, of: i64) -> bool {
        if of == 0 { self == 0 } else { self.wrapping_rem(of) == 0 }
    }
}

/// A filter predicate that lives for the whole program.
pub type Predicate = &'static dyn Fn(&i64) -> bool;

/// Returns a predicate that accepts multiples of `divisor`.
///
/// The returned closure owns its copy of `divisor`.
pub fn make_function_to_check_if_is_multiple(divisor: i64) -> impl Fn(&i64) -> bool {
    move |int| int.is_multiple(divisor)
}

// ----------------------------------------------------------------------------

mod integer;
pub use integer::{
    is_multiple_of_five, IS_MULTIPLE_OF_TEN,
    multiples_of_three_by_loop, multiples_of_three,
    even_multiples_of_three, square_even_multiples_of_three,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero() {
        assert!(0i64.is_multiple(0));
        assert!(!7i64.is_multiple(0));
        assert!(0i64.is_multiple(7));
        assert!(i64::MIN.is_multiple(-1));
    }

    #[test]
    fn negative() {
        assert!((-9i64).is_multiple(3));
        assert!(9i64.is_multiple(-3));
        assert!(!(-10i64).is_multiple(3));
    }

    proptest! {
        /// The factory accepts exactly the multiples of its divisor.
        #[test]
        fn prop_factory_filters_multiples(divisor in 1i64..=100) {
            let is_multiple = make_function_to_check_if_is_multiple(divisor);
            let filtered: Vec<i64> = (0..=100).filter(is_multiple).collect();
            let expected: Vec<i64> = (0..=100 / divisor).map(|k| k * divisor).collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn prop_multiple_of_products(a in -10_000i64..10_000, b in -10_000i64..10_000) {
            prop_assert!((a * b).is_multiple(b));
        }
    }
}

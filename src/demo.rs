//! High level part of the calculator demo.

use crate::calc::Calc;
use crate::error::DemoError;
use tracing::trace;

/// Applies the operation supplied by `U` and remembers the last result.
///
/// `Demo` only knows the [`Calc`] contract; swapping `Plus` for `Times` (or
/// any other provider) changes the type, never this code.
#[derive(Debug, Clone)]
pub struct Demo<U, T> {
    oper: U,
    result: Option<T>,
}

impl<U: Calc<T>, T> Demo<U, T> {
    pub fn new() -> Self {
        Self {
            oper: U::create(),
            result: None,
        }
    }

    pub fn provider(&self) -> &U {
        &self.oper
    }

    /// Borrowing view of the saved result; `None` until the first `apply`.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn reset(&mut self) {
        self.result = None;
    }
}

impl<U: Calc<T>, T: Clone> Demo<U, T> {
    /// Computes `a <op> b`, saves it as the result and returns it.
    pub fn apply(&mut self, a: T, b: T) -> T {
        trace!(provider = U::NAME, "apply");
        let rslt = self.oper.apply(a, b);
        self.result = Some(rslt.clone());
        rslt
    }

    pub fn get_result(&self) -> Result<T, DemoError> {
        self.result.clone().ok_or(DemoError::NoResult)
    }
}

impl<U: Calc<T>, T> Default for Demo<U, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{Plus, Times};
    use proptest::prelude::*;

    #[test]
    fn test_plus_int_scenario() {
        let mut demo = Demo::<Plus, i32>::new();
        assert_eq!(demo.apply(40, 2), 42);
        assert_eq!(demo.get_result().unwrap(), 42);
    }

    #[test]
    fn test_times_double_scenario() {
        let mut demo = Demo::<Times, f64>::new();
        assert_eq!(demo.apply(42.5, 2.0), 85.0);
        assert_eq!(demo.get_result().unwrap(), 85.0);
    }

    #[test]
    fn test_get_result_before_apply() {
        let demo = Demo::<Plus, i32>::new();
        assert!(matches!(demo.get_result(), Err(DemoError::NoResult)));
        assert_eq!(demo.result(), None);
    }

    #[test]
    fn test_later_apply_overwrites_result() {
        let mut demo = Demo::<Times, i64>::default();
        demo.apply(40, 2);
        demo.apply(3, 5);
        assert_eq!(demo.get_result().unwrap(), 15);
        assert_eq!(demo.result(), Some(&15));
    }

    #[test]
    fn test_reset_clears_result() {
        let mut demo = Demo::<Plus, i32>::new();
        demo.apply(1, 1);
        demo.reset();
        assert!(demo.get_result().is_err());
    }

    #[test]
    fn test_owned_operands() {
        // Clone-only operand type: the saved copy and the returned value are independent.
        #[derive(Debug, Clone, PartialEq)]
        struct Tally(Vec<u32>);

        impl std::ops::Add for Tally {
            type Output = Tally;

            fn add(mut self, rhs: Tally) -> Tally {
                self.0.extend(rhs.0);
                self
            }
        }

        let mut demo = Demo::<Plus, Tally>::new();
        let out = demo.apply(Tally(vec![1]), Tally(vec![2, 3]));
        assert_eq!(out, Tally(vec![1, 2, 3]));
        assert_eq!(demo.result(), Some(&out));
        assert_eq!(demo.provider(), &Plus);
    }

    proptest! {
        #[test]
        fn prop_plus_matches_operator(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let mut demo = Demo::<Plus, i64>::new();
            prop_assert_eq!(demo.apply(a, b), a + b);
            prop_assert_eq!(demo.get_result().unwrap(), a + b);
        }

        #[test]
        fn prop_times_matches_operator(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let mut demo = Demo::<Times, f64>::new();
            let expected = a * b;
            prop_assert!((demo.apply(a, b) - expected).abs() <= f64::EPSILON * expected.abs());
        }

        #[test]
        fn prop_apply_is_idempotent(a in any::<i32>(), b in any::<i32>()) {
            let mut demo = Demo::<Times, i64>::new();
            let first = demo.apply(a as i64, b as i64);
            let second = demo.apply(a as i64, b as i64);
            prop_assert_eq!(first, second);
            prop_assert_eq!(demo.get_result().unwrap(), first);
        }

        #[test]
        fn prop_last_apply_wins(a in any::<i16>(), b in any::<i16>(), c in any::<i16>(), d in any::<i16>()) {
            let mut demo = Demo::<Plus, i32>::new();
            demo.apply(a as i32, b as i32);
            demo.apply(c as i32, d as i32);
            prop_assert_eq!(demo.get_result().unwrap(), c as i32 + d as i32);
        }
    }
}

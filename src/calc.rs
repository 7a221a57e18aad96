//! Low level operation providers and the abstraction they share.
//!
//! `Plus` and `Times` are plain tags: they hold no state, and each one is
//! usable with any operand type that supports its operator.

use std::ops::{Add, Mul};

/// Display labels of an operation; these do not depend on the operand type.
pub trait Named {
    /// Short lowercase name, as used in run files.
    const NAME: &'static str;
    /// Operator symbol for display.
    const SYMBOL: &'static str;
}

/// Abstraction the high level [`Demo`](crate::demo::Demo) depends on.
pub trait Calc<T>: Named {
    fn create() -> Self;
    fn apply(&self, a: T, b: T) -> T;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Plus;

impl Named for Plus {
    const NAME: &'static str = "plus";
    const SYMBOL: &'static str = "+";
}

impl<T: Add<Output = T>> Calc<T> for Plus {
    fn create() -> Self {
        Plus
    }

    fn apply(&self, a: T, b: T) -> T {
        a + b
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Times;

impl Named for Times {
    const NAME: &'static str = "times";
    const SYMBOL: &'static str = "*";
}

impl<T: Mul<Output = T>> Calc<T> for Times {
    fn create() -> Self {
        Times
    }

    fn apply(&self, a: T, b: T) -> T {
        a * b
    }
}

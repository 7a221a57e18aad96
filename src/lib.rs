//! # Dependency Inversion with Generics
//!
//! "High level modules should not depend on low level modules. Both should
//! depend on abstractions."
//!
//! ## Generic calculator
//! - High level part: [`Demo<U, T>`](demo::Demo)
//! - Low level parts: [`Plus`](calc::Plus), [`Times`](calc::Times)
//! - Abstraction: [`Calc<T>`](calc::Calc), labelled through [`Named`](calc::Named)
//!
//! The provider is a type parameter, so dispatch is static and `Demo` never
//! names a concrete operation.
//!
//! ## Self-announcing parts
//! - High level part: [`SayDemo<T>`](say::SayDemo)
//! - Low level parts: [`First`](say::First), [`Second`](say::Second)
//! - Abstraction: [`Say`](say::Say)
//!
//! Run the demos with: `cargo run --bin generic_dip` and
//! `cargo run --bin basic_dip`

pub mod calc;
pub mod demo;
pub mod error;
pub mod runs;
pub mod say;

pub use calc::{Calc, Named, Plus, Times};
pub use demo::Demo;
pub use error::DemoError;
pub use runs::{CalcRun, Number, OpKind, Outcome, RunFile};
pub use say::{First, Say, SayDemo, Second};

//! Run files: a TOML list of calculations, each executed through a
//! statically typed [`Demo`].
//!
//! ```toml
//! [[run]]
//! kind = "int"
//! op = "plus"
//! lhs = 40
//! rhs = 2
//! ```

use crate::calc::{self, Calc, Named};
use crate::demo::Demo;
use crate::error::DemoError;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Plus,
    Times,
}

impl OpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Plus => calc::Plus::SYMBOL,
            OpKind::Times => calc::Times::SYMBOL,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Plus => calc::Plus::NAME,
            OpKind::Times => calc::Times::NAME,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on whole floats.
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// One calculation from a run file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalcRun {
    Int { op: OpKind, lhs: i64, rhs: i64 },
    Float { op: OpKind, lhs: f64, rhs: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub op: OpKind,
    pub lhs: Number,
    pub rhs: Number,
    /// Value returned by `apply`.
    pub value: Number,
    /// Value read back through `get_result`.
    pub saved: Number,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op.symbol(), self.rhs, self.value)
    }
}

fn run_typed<U: Calc<T>, T: Clone>(lhs: T, rhs: T) -> Result<(T, T), DemoError> {
    let mut demo = Demo::<U, T>::new();
    let value = demo.apply(lhs, rhs);
    let saved = demo.get_result()?;
    Ok((value, saved))
}

impl CalcRun {
    pub fn op(&self) -> OpKind {
        match self {
            CalcRun::Int { op, .. } | CalcRun::Float { op, .. } => *op,
        }
    }

    pub fn execute(&self) -> Result<Outcome, DemoError> {
        debug!(run = ?self, "executing run");
        let op = self.op();
        let outcome = match *self {
            CalcRun::Int { lhs, rhs, .. } => {
                // Demo keeps native i64 overflow; reject it here before dispatch.
                let fits = match op {
                    OpKind::Plus => lhs.checked_add(rhs),
                    OpKind::Times => lhs.checked_mul(rhs),
                };
                if fits.is_none() {
                    return Err(DemoError::Overflow { op, lhs, rhs });
                }
                let (value, saved) = match op {
                    OpKind::Plus => run_typed::<calc::Plus, i64>(lhs, rhs)?,
                    OpKind::Times => run_typed::<calc::Times, i64>(lhs, rhs)?,
                };
                Outcome {
                    op,
                    lhs: Number::Int(lhs),
                    rhs: Number::Int(rhs),
                    value: Number::Int(value),
                    saved: Number::Int(saved),
                }
            }
            CalcRun::Float { lhs, rhs, .. } => {
                let (value, saved) = match op {
                    OpKind::Plus => run_typed::<calc::Plus, f64>(lhs, rhs)?,
                    OpKind::Times => run_typed::<calc::Times, f64>(lhs, rhs)?,
                };
                Outcome {
                    op,
                    lhs: Number::Float(lhs),
                    rhs: Number::Float(rhs),
                    value: Number::Float(value),
                    saved: Number::Float(saved),
                }
            }
        };
        Ok(outcome)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunFile {
    #[serde(rename = "run", default)]
    pub runs: Vec<CalcRun>,
}

impl RunFile {
    /// The two canonical scenarios: `40 + 2` on ints and `42.5 * 2.0` on doubles.
    pub fn builtin() -> Self {
        Self {
            runs: vec![
                CalcRun::Int {
                    op: OpKind::Plus,
                    lhs: 40,
                    rhs: 2,
                },
                CalcRun::Float {
                    op: OpKind::Times,
                    lhs: 42.5,
                    rhs: 2.0,
                },
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        let file: RunFile = toml::from_str(content)?;
        if file.runs.is_empty() {
            return Err(DemoError::NoRuns);
        }
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::io(path, err))?;
        debug!(path = %path.display(), "loaded run file");
        Self::from_toml_str(&content)
    }

    pub fn execute_all(&self) -> Result<Vec<Outcome>, DemoError> {
        self.runs.iter().map(CalcRun::execute).collect()
    }
}

use crate::runs::OpKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("No result yet: apply has not been called on this demo")]
    NoResult,

    #[error("Failed to read run file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse run file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Run file declares no runs")]
    NoRuns,

    #[error("Integer overflow: {lhs} {} {rhs} does not fit in i64", .op.symbol())]
    Overflow { op: OpKind, lhs: i64, rhs: i64 },
}

impl DemoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

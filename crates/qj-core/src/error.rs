use qj_lang::{CompileError, PredicateError};

/// Failures that halt one `execute` call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecError {
    #[error("cannot index into non-array: segment {position} (index {index}) applied to {found}")]
    IndexNonArray {
        position: usize,
        index: usize,
        found: &'static str,
    },
    #[error("filter predicate at segment {position}: {source}")]
    Predicate {
        position: usize,
        source: PredicateError,
    },
}

impl ExecError {
    /// Zero-based segment position where execution stopped.
    pub fn position(&self) -> usize {
        match self {
            Self::IndexNonArray { position, .. } | Self::Predicate { position, .. } => *position,
        }
    }
}

pub type ExecResult<T> = Result<T, ExecError>;

/// Compile-then-execute failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

use thiserror::Error;

/// Query text that cannot be compiled into segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Only the leading segment may omit the field in front of `[...]`.
    #[error("filter without field in query '{query}' (segment {position})")]
    FilterWithoutField { query: String, position: usize },
}

/// Bracket filter text that cannot be parsed into a predicate chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    #[error("invalid condition: '{condition}'")]
    InvalidCondition { condition: String },
}

/// Malformed `qjson` block text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("no #qj-id directive found")]
    MissingId,
    #[error("#qj-id must be a number, got '{found}'")]
    InvalidId { found: String },
    #[error("block syntax error: {message}")]
    Syntax { message: String },
}

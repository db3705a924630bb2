//! Execution side of qj: streams a JSON document through compiled query
//! segments and renders the results.

#[macro_use]
mod log_macros;

pub mod coerce;
pub mod error;
pub mod eval;
mod executor;
pub mod format;

pub use error::{ExecError, ExecResult, QueryError};
pub use eval::{eval_chain, eval_condition};
pub use executor::{execute, query, value_kind};
pub use format::{format_compact, format_output, format_string, get_json_path};

#[doc(hidden)]
pub use tracing as __tracing;

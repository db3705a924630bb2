pub mod ast;
pub mod block;
mod compiler;
pub mod error;
pub mod parse_utils;
mod predicate;

pub use ast::{CmpOp, CompiledQuery, Condition, Connective, Predicate, PredicateChain, Segment};
pub use block::{Block, parse_block};
pub use compiler::compile;
pub use error::{BlockError, CompileError, PredicateError};
pub use predicate::{parse_condition, parse_predicate};

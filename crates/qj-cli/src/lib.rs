pub mod cmd_block;
pub mod cmd_explain;
pub mod cmd_format;
pub mod cmd_query;
pub mod tracing_init;

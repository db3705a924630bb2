pub mod logging;
pub mod output;
pub mod project;
pub mod qj;
mod validate;

pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use qj::QjConfig;

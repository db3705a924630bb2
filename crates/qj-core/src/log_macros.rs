/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field automatically so callers never need to
/// remember the string literal. Domains in use: `sys`, `conf`, `io`, `pipe`.
///
/// # Usage
///
/// ```ignore
/// qj_info!(sys, config = %path.display(), "configuration loaded");
/// qj_debug!(pipe, position, predicate = %src, "filter predicate parsed");
/// qj_warn!(io, line = n, error = %e, "skipping malformed ndjson line");
/// ```
///
/// The domain identifier is a bare identifier that the macro converts to a
/// `&str` literal, not a string.

// ---------------------------------------------------------------------------
// Core macro: dispatches to the matching tracing level macro.
// ---------------------------------------------------------------------------

/// Internal helper. Do not call directly; use `qj_error!` … `qj_trace!`.
#[doc(hidden)]
#[macro_export]
macro_rules! qj_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        $crate::__tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

// ---------------------------------------------------------------------------
// Public per-level macros
// ---------------------------------------------------------------------------

/// Log at ERROR level with an automatic `domain` field.
#[macro_export]
macro_rules! qj_error {
    ($domain:ident, $($rest:tt)*) => {
        $crate::qj_log!(error, $domain, $($rest)*)
    };
}

/// Log at WARN level with an automatic `domain` field.
#[macro_export]
macro_rules! qj_warn {
    ($domain:ident, $($rest:tt)*) => {
        $crate::qj_log!(warn, $domain, $($rest)*)
    };
}

/// Log at INFO level with an automatic `domain` field.
#[macro_export]
macro_rules! qj_info {
    ($domain:ident, $($rest:tt)*) => {
        $crate::qj_log!(info, $domain, $($rest)*)
    };
}

/// Log at DEBUG level with an automatic `domain` field.
#[macro_export]
macro_rules! qj_debug {
    ($domain:ident, $($rest:tt)*) => {
        $crate::qj_log!(debug, $domain, $($rest)*)
    };
}

/// Log at TRACE level with an automatic `domain` field.
#[macro_export]
macro_rules! qj_trace {
    ($domain:ident, $($rest:tt)*) => {
        $crate::qj_log!(trace, $domain, $($rest)*)
    };
}

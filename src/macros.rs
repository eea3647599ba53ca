//! Logging macros taking printf-style templates.
//!
//! Arguments may be any `Display` value; they are substituted into the
//! template by the logger's message composer, not by `format!`.
//!
//! # Examples
//!
//! ```
//! use minlog::prelude::*;
//! use minlog::info;
//!
//! let logger = Logger::new(MemorySink::new()).unwrap();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port %d", port);
//!
//! // No template: the arguments are joined with spaces
//! info!(logger, "", "user", 42, "logged in");
//! ```

/// Log at an explicit severity.
///
/// # Examples
///
/// ```
/// # use minlog::prelude::*;
/// # let logger = Logger::new(MemorySink::new()).unwrap();
/// use minlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use minlog::prelude::*;
/// # let logger = Logger::new(MemorySink::new()).unwrap();
/// use minlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing %d items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use minlog::prelude::*;
/// # let logger = Logger::new(MemorySink::new()).unwrap();
/// use minlog::error;
/// error!(logger, "Error code: %d, message: %s", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}

//! Error types for object dispatch.
//!
//! Resolution itself never fails: an unresolvable or protected path is a
//! normal outcome reported through the terminal [`Crumb`](crate::Crumb).
//! These errors cover the edges around it: invoking a resolved handler and
//! loading configuration.

use thiserror::Error;

/// Errors raised outside the resolution walk.
#[derive(Debug, Error)]
pub enum Error {
    /// A routine was invoked with the wrong number of arguments.
    #[error("{routine}() takes {expected} argument(s) but {given} were given")]
    Arguments {
        routine: String,
        expected: usize,
        given: usize,
    },

    /// The node cannot be invoked.
    #[error("{handler} is not callable")]
    NotCallable { handler: String },

    /// A handler reported a failure while being invoked.
    #[error("handler failed: {message}")]
    Handler { message: String },

    /// Configuration could not be applied.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Configuration JSON could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn arguments_display() {
        let e = Error::Arguments {
            routine: "foo".to_string(),
            expected: 1,
            given: 3,
        };
        let display = e.to_string();
        assert!(display.contains("foo()"));
        assert!(display.contains("takes 1"));
        assert!(display.contains("3 were given"));
    }

    #[test]
    fn not_callable_display() {
        let e = Error::NotCallable {
            handler: "\"static\"".to_string(),
        };
        assert_eq!(e.to_string(), "\"static\" is not callable");
    }

    #[test]
    fn config_display() {
        let e = Error::Config {
            message: "bad flag".to_string(),
        };
        assert!(e.to_string().contains("invalid configuration"));
        assert!(e.to_string().contains("bad flag"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Json(_)));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("missing"));
    }

    #[test]
    fn handler_error_source_is_none() {
        let e = Error::Handler {
            message: "boom".to_string(),
        };
        assert!(StdError::source(&e).is_none());
    }
}

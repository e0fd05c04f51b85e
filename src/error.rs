//! Error types for INI decoding, encoding and the serde layer.
//!
//! Parsing itself is lenient: malformed lines are dropped rather than reported,
//! so most errors come from the edges of the crate.
//!
//! ## Error Categories
//!
//! - **Interceptor failures**: a registered value transform rejected a value
//! - **Unsupported values**: the encoder met a shape it cannot express (strict mode only)
//! - **Type mismatches**: a [`Value`](crate::Value) could not be deserialized into the requested type
//! - **I/O errors**: reading from or writing to a caller-supplied stream failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_xini::{Error, Parser, Value};
//!
//! let mut parser = Parser::new();
//! parser.add_interceptor(|value, _| match value {
//!     Value::String(s) if s == "forbidden" => Err(Error::custom("value not allowed")),
//!     other => Ok(other),
//! });
//!
//! let err = parser.parse("name = forbidden").unwrap_err();
//! assert!(matches!(err, Error::Interceptor { index: 0, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A registered interceptor failed while the value for `key` was collected
    #[error("Interceptor #{index} failed on key '{key}': {msg}")]
    Interceptor {
        index: usize,
        key: String,
        msg: String,
    },

    /// The encoder met a value it cannot express in strict mode
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Type mismatch during deserialization
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an interceptor error for the interceptor at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::Error;
    ///
    /// let err = Error::interceptor(1, "name", "rejected");
    /// assert!(err.to_string().contains("#1"));
    /// assert!(err.to_string().contains("'name'"));
    /// ```
    pub fn interceptor<T: fmt::Display>(index: usize, key: &str, msg: T) -> Self {
        Error::Interceptor {
            index,
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported value error, raised by the encoder in strict mode.
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a type mismatch error when deserialization fails due to incompatible types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for types that cannot be represented as INI.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for directive parsing.
//!
//! Rendering a table of contents never fails once options are resolved, so
//! the only domain error is an option whose value does not fit its kind.
//! Parsing stops at the first offending line; there is no error aggregation.
//!
//! ## Examples
//!
//! ```rust
//! use tocdown::{parse_options, Error};
//!
//! let result = parse_options("maxLevel: -1");
//! assert!(matches!(result, Err(Error::InvalidOptionValue { .. })));
//!
//! if let Err(err) = result {
//!     assert_eq!(err.to_string(), "Invalid value for `maxLevel`");
//!     assert_eq!(err.option_name(), Some("maxLevel"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while resolving TOC options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A recognized option carried a value that failed type, range or
    /// membership validation.
    #[error("Invalid value for `{name}`")]
    InvalidOptionValue { name: String },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid value error for the named option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tocdown::Error;
    ///
    /// let err = Error::invalid_value("style");
    /// assert!(err.to_string().contains("`style`"));
    /// ```
    pub fn invalid_value(name: &str) -> Self {
        Error::InvalidOptionValue {
            name: name.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Name of the option that failed validation, if any.
    #[must_use]
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Error::InvalidOptionValue { name } => Some(name),
            Error::Custom(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

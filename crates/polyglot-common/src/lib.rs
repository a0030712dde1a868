//! # Polyglot Common
//!
//! Shared error type, structured logging setup and test helpers used across
//! the Polyglot workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PolyglotError, Result};
pub use logging::{init_logging, LoggingConfig};

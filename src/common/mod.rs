//! Shared infrastructure: errors, logging, project paths

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};

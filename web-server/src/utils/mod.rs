//! Utilities: logging setup and request validation

pub mod logger;
pub mod validation;

pub use logger::{init_logger, init_logger_with_file};

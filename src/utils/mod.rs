//! Shared utilities: errors, extraction, logging, validation.

pub mod error;
pub mod extract;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, ErrorResponse};
pub use extract::{AppJson, AppQuery};
pub use result::AppResult;

pub mod auth;
pub mod config;
pub mod error;
pub mod geo;

// Re-export common error type
pub use error::{Result, WayfindError};

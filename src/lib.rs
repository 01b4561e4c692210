pub mod clockify;
pub mod config;
pub mod date;
pub mod entries;
pub mod error;
pub mod login;
pub mod models;
pub mod prompt;
pub mod report;

// Re-export commonly used types
pub use clockify::{ClockifyApi, ClockifyClient};
pub use config::Config;
pub use error::{ClockidupError, Result};

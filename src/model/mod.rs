pub mod config;
pub mod response;

pub use config::{Config, ConfigError, OutputFormat};
pub use response::*;

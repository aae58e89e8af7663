pub mod cli;
pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod output;
pub mod services;
pub mod types;

pub use config::{AppConfig, ConfigManager};
pub use error::{MinsetError, Result};
pub use services::MinsetRunner;

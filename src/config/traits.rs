use crate::error::{MinsetError, Result};
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<()>;

    /// Configuration error prefixed with the section name.
    fn invalid(message: impl AsRef<str>) -> MinsetError {
        MinsetError::Configuration(format!("[{}] {}", Self::section_name(), message.as_ref()))
    }
}

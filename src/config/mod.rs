pub mod traits;
pub mod ga;
pub mod minset;
pub mod output;
pub mod run;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use ga::{BreedingMode, GaConfig, InitMode};
pub use minset::MinsetConfig;
pub use output::{OutputConfig, SnapshotFormat};
pub use run::RunConfig;
pub use traits::ConfigSection;

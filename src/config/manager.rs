use super::{
    ga::GaConfig, minset::MinsetConfig, output::OutputConfig, run::RunConfig,
    traits::ConfigSection,
};
use crate::engines::generation::genome::GeneEncoding;
use crate::error::{MinsetError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides, e.g. `MINSET_GA__POPSIZE=500`.
pub const ENV_PREFIX: &str = "MINSET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ga: GaConfig,
    pub minset: MinsetConfig,
    pub output: OutputConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.ga.validate()?;
        self.minset.validate()?;
        self.output.validate()?;
        self.run.validate()?;

        let bounds = self.ga.bounds();
        if self.run.gene_encoding == GeneEncoding::Bit && (bounds.low, bounds.up) != (0, 1) {
            return Err(MinsetError::Configuration(format!(
                "bit gene encoding requires lowlim 0 and uplim 1, got [{}, {}]",
                bounds.low, bounds.up
            )));
        }
        if let Some(gene) = self.run.seed_genome.iter().find(|&&g| !bounds.contains(g)) {
            return Err(MinsetError::Configuration(format!(
                "seed genome value {} lies outside [{}, {}]",
                gene, bounds.low, bounds.up
            )));
        }
        Ok(())
    }

    /// Checks that depend on the number of loaded sequences.
    pub fn validate_for_gene_count(&self, gene_count: usize) -> Result<()> {
        if gene_count == 0 {
            return Err(MinsetError::Configuration(
                "base set contains no sequences".to_string(),
            ));
        }
        if let Some(maxgenes) = self.minset.max_selected(gene_count) {
            if maxgenes <= 1 {
                return Err(MinsetError::Configuration(format!(
                    "subsetsize {}% of {} sequences leaves {} selectable; need more than 1",
                    self.minset.subsetsize, gene_count, maxgenes
                )));
            }
        }
        if !self.run.seed_genome.is_empty() && self.run.seed_genome.len() != gene_count {
            return Err(MinsetError::Configuration(format!(
                "seed genome has {} genes but the base set has {} sequences",
                self.run.seed_genome.len(),
                gene_count
            )));
        }
        Ok(())
    }
}

/// Owns the effective configuration and knows how to layer its sources.
pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the optional TOML file, then `MINSET_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(path, Self::environment())
    }

    /// Layer defaults, an optional TOML file and `env` without validating.
    ///
    /// Validation happens once all layers, including command-line overrides,
    /// have been applied through [`ConfigManager::update`].
    pub fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(MinsetError::resource(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                ));
            }
            builder = builder.add_source(File::from(path));
        }

        let config: AppConfig = builder.add_source(env).build()?.try_deserialize()?;
        if let Some(path) = path {
            log::debug!("Configuration file {} applied", path.display());
        }

        Ok(Self { config })
    }

    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Replace the configuration with the contents of a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| MinsetError::resource(path, e))?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?).map_err(|e| MinsetError::resource(path, e))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.config)?)
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_inner(self) -> AppConfig {
        self.config
    }

    /// Apply `f` and validate the result; the previous configuration is kept on error.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

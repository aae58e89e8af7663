use super::traits::ConfigSection;
use crate::engines::generation::selection::OptimizationDirection;
use crate::error::Result;
use crate::types::{Gene, GeneBounds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    #[default]
    Random,
    Seeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreedingMode {
    #[default]
    Crossover,
    Equilibrium,
}

/// Genetic algorithm parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub popsize: usize,
    pub fitmate: usize,
    /// Gene count; replaced by the number of loaded sequences.
    pub genenum: usize,
    pub generation: usize,
    pub lowlim: Gene,
    pub uplim: Gene,
    pub direction: OptimizationDirection,
    pub init: InitMode,
    pub maxvar: u32,
    pub breeding: BreedingMode,
    pub jackknife: usize,
    pub repeat: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            popsize: 2500,
            fitmate: 250,
            genenum: 2,
            generation: 100,
            lowlim: 0,
            uplim: 1,
            direction: OptimizationDirection::Maximize,
            init: InitMode::Random,
            maxvar: 4,
            breeding: BreedingMode::Crossover,
            jackknife: 1,
            repeat: 1,
        }
    }
}

impl GaConfig {
    pub fn bounds(&self) -> GeneBounds {
        GeneBounds::new(self.lowlim, self.uplim)
    }
}

impl ConfigSection for GaConfig {
    fn section_name() -> &'static str {
        "ga"
    }

    fn validate(&self) -> Result<()> {
        if self.popsize < 2 {
            return Err(Self::invalid("popsize must be greater than 1"));
        }
        if self.fitmate >= self.popsize {
            return Err(Self::invalid(format!(
                "fitmate ({}) must be smaller than popsize ({})",
                self.fitmate, self.popsize
            )));
        }
        match self.breeding {
            BreedingMode::Crossover if self.fitmate < 2 => {
                return Err(Self::invalid(
                    "crossover needs at least 2 parents (fitmate >= 2)",
                ))
            }
            BreedingMode::Equilibrium if self.fitmate < 1 => {
                return Err(Self::invalid("equilibrium needs at least 1 parent"))
            }
            _ => {}
        }
        if self.genenum == 0 {
            return Err(Self::invalid("genenum must be positive"));
        }
        if self.generation == 0 {
            return Err(Self::invalid("generation must be positive"));
        }
        if self.uplim <= self.lowlim {
            return Err(Self::invalid(format!(
                "uplim ({}) must be greater than lowlim ({})",
                self.uplim, self.lowlim
            )));
        }
        if self.jackknife == 0 {
            return Err(Self::invalid("jackknife must be at least 1"));
        }
        if self.repeat == 0 {
            return Err(Self::invalid("repeat must be at least 1"));
        }
        Ok(())
    }
}

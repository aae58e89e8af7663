use super::traits::ConfigSection;
use crate::engines::generation::genome::GeneEncoding;
use crate::error::Result;
use crate::types::Gene;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Base seed; every fold derives its own seed from it. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub gene_encoding: GeneEncoding,
    /// Starting genome for seeded initialization; empty means all genes at `lowlim`.
    pub seed_genome: Vec<Gene>,
}

impl ConfigSection for RunConfig {
    fn section_name() -> &'static str {
        "run"
    }

    fn validate(&self) -> Result<()> {
        if self.gene_encoding == GeneEncoding::Bit
            && self.seed_genome.iter().any(|&g| g != 0 && g != 1)
        {
            return Err(Self::invalid("seed genome must hold only 0 and 1 with bit encoding"));
        }
        Ok(())
    }
}

//! Genome representation for subset search
//!
//! A genome is a fixed-length vector of bounded integers, one gene per
//! sequence of the base set. A gene at the upper bound selects its sequence
//! for the candidate subset.
//!
//! With [`GeneEncoding::Bit`] every gene is forced into `{0, 1}` whenever it
//! is written, which mirrors a packed bit-field genome without changing the
//! storage type used by the operators.

use crate::types::{Gene, GeneBounds};
use serde::{Deserialize, Serialize};

pub type Genome = Vec<Gene>;

/// How gene values are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneEncoding {
    #[default]
    Integer,
    Bit,
}

impl GeneEncoding {
    /// Map a raw value onto the representable domain of this encoding.
    pub fn encode(self, value: Gene) -> Gene {
        match self {
            GeneEncoding::Integer => value,
            GeneEncoding::Bit => {
                if value > 0 {
                    1
                } else {
                    0
                }
            }
        }
    }
}

/// One candidate solution: a genome and its fitness.
///
/// `fitness` is `None` until the genome has been evaluated. A computed score
/// of `0.0` is a real score.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genome: Genome,
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new(gene_count: usize, fill: Gene) -> Self {
        Self {
            genome: vec![fill; gene_count],
            fitness: None,
        }
    }

    pub fn with_fitness(genome: Genome, fitness: f64) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
        }
    }

    pub fn is_scored(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn reset_fitness(&mut self) {
        self.fitness = None;
    }

    pub fn same_genome(&self, other: &Individual) -> bool {
        self.genome == other.genome
    }

    pub fn selected_count(&self, bounds: GeneBounds) -> usize {
        bounds.selected_count(&self.genome)
    }

    /// Indices of the selected genes.
    pub fn selected_indices(&self, bounds: GeneBounds) -> Vec<usize> {
        self.genome
            .iter()
            .enumerate()
            .filter(|(_, &g)| bounds.is_selected(g))
            .map(|(j, _)| j)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_encoding() {
        assert_eq!(GeneEncoding::Bit.encode(7), 1);
        assert_eq!(GeneEncoding::Bit.encode(0), 0);
        assert_eq!(GeneEncoding::Bit.encode(-3), 0);
        assert_eq!(GeneEncoding::Integer.encode(7), 7);
    }

    #[test]
    fn test_new_individual_is_unscored() {
        let ind = Individual::new(4, 0);
        assert_eq!(ind.genome, vec![0, 0, 0, 0]);
        assert!(!ind.is_scored());
    }

    #[test]
    fn test_zero_is_a_real_score() {
        let ind = Individual::with_fitness(vec![1, 0], 0.0);
        assert!(ind.is_scored());
    }

    #[test]
    fn test_selected_indices() {
        let ind = Individual::with_fitness(vec![1, 0, 1, 0, 1], 0.5);
        let bounds = GeneBounds::new(0, 1);
        assert_eq!(ind.selected_indices(bounds), vec![0, 2, 4]);
        assert_eq!(ind.selected_count(bounds), 3);
    }
}

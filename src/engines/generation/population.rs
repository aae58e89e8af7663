use crate::engines::generation::genome::Individual;
use crate::engines::generation::selection::{sort_by_fitness, OptimizationDirection};
use crate::error::{MinsetError, Result};
use crate::types::Gene;
use std::ops::Range;

/// Gene pool of `popsize` individuals.
///
/// After [`Population::sort`] the first `fitmate` individuals are the parents
/// of the next generation; the remaining slots are overwritten by breeding.
/// Genome buffers are allocated once and reused for the whole run.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    fitmate: usize,
}

impl Population {
    pub fn new(popsize: usize, fitmate: usize, gene_count: usize, fill: Gene) -> Self {
        Self {
            individuals: (0..popsize).map(|_| Individual::new(gene_count, fill)).collect(),
            fitmate,
        }
    }

    /// Build a pool from existing individuals. All genomes must have the same length.
    pub fn from_individuals(individuals: Vec<Individual>, fitmate: usize) -> Result<Self> {
        if fitmate >= individuals.len() {
            return Err(MinsetError::Configuration(format!(
                "fitmate ({}) must be smaller than the population size ({})",
                fitmate,
                individuals.len()
            )));
        }
        if let Some(first) = individuals.first() {
            let len = first.genome.len();
            if individuals.iter().any(|ind| ind.genome.len() != len) {
                return Err(MinsetError::Configuration(
                    "all genomes in a population must have the same length".to_string(),
                ));
            }
        }
        Ok(Self {
            individuals,
            fitmate,
        })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn fitmate(&self) -> usize {
        self.fitmate
    }

    pub fn gene_count(&self) -> usize {
        self.individuals.first().map_or(0, |ind| ind.genome.len())
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn get(&self, ix: usize) -> Option<&Individual> {
        self.individuals.get(ix)
    }

    pub fn get_mut(&mut self, ix: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(ix)
    }

    /// The parents kept from the last selection: indices `[0, fitmate)`.
    pub fn fittest(&self) -> &[Individual] {
        &self.individuals[..self.fitmate]
    }

    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Slots rewritten by breeding: `[fitmate, popsize)`.
    pub fn offspring_range(&self) -> Range<usize> {
        self.fitmate..self.individuals.len()
    }

    /// Split into the read-only parents and the writable offspring slots.
    pub fn split_parents_mut(&mut self) -> (&[Individual], &mut [Individual]) {
        let (parents, offspring) = self.individuals.split_at_mut(self.fitmate);
        (parents, offspring)
    }

    pub fn sort(&mut self, direction: OptimizationDirection) {
        sort_by_fitness(&mut self.individuals, direction);
    }

    /// True when every genome equals its predecessor.
    pub fn is_converged(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|pair| pair[0].same_genome(&pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_population_shape() {
        let pop = Population::new(6, 2, 5, 0);
        assert_eq!(pop.len(), 6);
        assert_eq!(pop.gene_count(), 5);
        assert_eq!(pop.offspring_range(), 2..6);
        assert!(pop.individuals().iter().all(|ind| !ind.is_scored()));
    }

    #[test]
    fn test_from_individuals_rejects_fitmate_too_large() {
        let inds = vec![Individual::new(2, 0), Individual::new(2, 0)];
        assert!(Population::from_individuals(inds, 2).is_err());
    }

    #[test]
    fn test_from_individuals_rejects_ragged_genomes() {
        let inds = vec![Individual::new(2, 0), Individual::new(3, 0)];
        assert!(Population::from_individuals(inds, 1).is_err());
    }

    #[test]
    fn test_split_parents() {
        let mut pop = Population::new(5, 2, 3, 1);
        let (parents, offspring) = pop.split_parents_mut();
        assert_eq!(parents.len(), 2);
        assert_eq!(offspring.len(), 3);
    }

    #[test]
    fn test_converged_when_all_identical() {
        let inds = vec![
            Individual::with_fitness(vec![1, 0], 0.5),
            Individual::with_fitness(vec![1, 0], 0.5),
            Individual::with_fitness(vec![1, 0], 0.5),
        ];
        let pop = Population::from_individuals(inds, 1).unwrap();
        assert!(pop.is_converged());
    }

    #[test]
    fn test_not_converged_when_one_gene_differs() {
        let inds = vec![
            Individual::with_fitness(vec![1, 0], 0.5),
            Individual::with_fitness(vec![1, 0], 0.5),
            Individual::with_fitness(vec![1, 1], 0.4),
        ];
        let pop = Population::from_individuals(inds, 1).unwrap();
        assert!(!pop.is_converged());
    }
}

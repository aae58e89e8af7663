use crate::engines::generation::population::Population;
use crate::error::{MinsetError, Result};
use crate::types::Gene;
use serde::Serialize;
use std::ops::{AddAssign, Range};

/// Objective function plugged into the GA.
pub trait FitnessFunction {
    fn evaluate(&self, genome: &[Gene]) -> Result<f64>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[Gene]) -> Result<f64>,
{
    fn evaluate(&self, genome: &[Gene]) -> Result<f64> {
        self(genome)
    }
}

/// Counts of objective calls versus memoized fitness copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationStats {
    pub computed: usize,
    pub memoized: usize,
}

impl AddAssign for EvaluationStats {
    fn add_assign(&mut self, other: Self) {
        self.computed += other.computed;
        self.memoized += other.memoized;
    }
}

/// Scores genomes, reusing the fitness of identical genomes already in the pool.
pub struct FitnessEvaluator<'a, F: FitnessFunction> {
    objective: &'a F,
}

impl<'a, F: FitnessFunction> FitnessEvaluator<'a, F> {
    pub fn new(objective: &'a F) -> Self {
        Self { objective }
    }

    /// Score genome `ix`, copying the fitness of an identical, already scored
    /// genome in `[0, ix)` when there is one.
    pub fn evaluate(&self, population: &mut Population, ix: usize) -> Result<f64> {
        let (fitness, _) = self.evaluate_slot(population, ix)?;
        Ok(fitness)
    }

    /// Score every slot in `range`, in index order.
    pub fn evaluate_range(
        &self,
        population: &mut Population,
        range: Range<usize>,
    ) -> Result<EvaluationStats> {
        if range.end > population.len() {
            return Err(MinsetError::Evaluation(format!(
                "evaluation range {:?} exceeds population size {}",
                range,
                population.len()
            )));
        }

        let mut stats = EvaluationStats::default();
        for ix in range {
            let (_, memoized) = self.evaluate_slot(population, ix)?;
            if memoized {
                stats.memoized += 1;
            } else {
                stats.computed += 1;
            }
        }
        Ok(stats)
    }

    fn evaluate_slot(&self, population: &mut Population, ix: usize) -> Result<(f64, bool)> {
        if let Some(fitness) = memoized_fitness(population, ix) {
            set_fitness(population, ix, fitness)?;
            return Ok((fitness, true));
        }

        let genome = &population
            .get(ix)
            .ok_or_else(|| MinsetError::Evaluation(format!("no genome at index {}", ix)))?
            .genome;
        let fitness = checked(self.objective.evaluate(genome)?, ix)?;
        set_fitness(population, ix, fitness)?;
        Ok((fitness, false))
    }
}

/// Fitness of the first genome in `[0, ix)` identical to genome `ix` that is already scored.
pub fn memoized_fitness(population: &Population, ix: usize) -> Option<f64> {
    let individuals = population.individuals();
    let target = individuals.get(ix)?;
    individuals[..ix]
        .iter()
        .filter(|ind| ind.same_genome(target))
        .find_map(|ind| ind.fitness)
}

fn set_fitness(population: &mut Population, ix: usize, fitness: f64) -> Result<()> {
    let individual = population
        .get_mut(ix)
        .ok_or_else(|| MinsetError::Evaluation(format!("no genome at index {}", ix)))?;
    individual.fitness = Some(fitness);
    Ok(())
}

fn checked(fitness: f64, ix: usize) -> Result<f64> {
    if fitness.is_finite() {
        Ok(fitness)
    } else {
        Err(MinsetError::Evaluation(format!(
            "objective returned non-finite fitness {} for genome {}",
            fitness, ix
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::genome::Individual;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pool(genomes: Vec<Vec<Gene>>) -> Population {
        let individuals = genomes
            .into_iter()
            .map(|g| Individual {
                genome: g,
                fitness: None,
            })
            .collect();
        Population::from_individuals(individuals, 1).unwrap()
    }

    #[test]
    fn test_memoized_fitness_requires_scored_match() {
        let mut pop = pool(vec![vec![1, 0], vec![1, 0]]);
        assert_eq!(memoized_fitness(&pop, 1), None);
        pop.get_mut(0).unwrap().fitness = Some(0.0);
        assert_eq!(memoized_fitness(&pop, 1), Some(0.0));
    }

    #[test]
    fn test_duplicate_genomes_scored_once() {
        let calls = AtomicUsize::new(0);
        let objective = |g: &[Gene]| -> Result<f64> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(g.iter().sum::<Gene>() as f64 + 0.5)
        };
        let mut pop = pool(vec![vec![1, 0], vec![0, 1], vec![1, 0], vec![1, 0]]);

        let stats = FitnessEvaluator::new(&objective)
            .evaluate_range(&mut pop, 0..4)
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(stats, EvaluationStats { computed: 2, memoized: 2 });
        assert!(pop.individuals().iter().all(|i| i.fitness == Some(1.5)));
    }

    #[test]
    fn test_non_finite_fitness_is_an_error() {
        let objective = |_: &[Gene]| -> Result<f64> { Ok(f64::NAN) };
        let mut pop = pool(vec![vec![1], vec![0]]);
        let result = FitnessEvaluator::new(&objective).evaluate(&mut pop, 0);
        assert!(matches!(result, Err(MinsetError::Evaluation(_))));
    }

    #[test]
    fn test_range_past_end_is_rejected() {
        let objective = |_: &[Gene]| -> Result<f64> { Ok(1.0) };
        let mut pop = pool(vec![vec![1], vec![0]]);
        assert!(FitnessEvaluator::new(&objective)
            .evaluate_range(&mut pop, 0..3)
            .is_err());
    }
}

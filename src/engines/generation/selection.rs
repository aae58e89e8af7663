use crate::engines::generation::genome::Individual;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Defines whether low or high fitness values are fittest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationDirection {
    Minimize,
    #[default]
    Maximize,
}

impl OptimizationDirection {
    /// Orders `a` before `b` when `a` is fitter.
    ///
    /// Unscored individuals (and NaN scores) rank behind every scored one in
    /// both directions.
    pub fn compare(self, a: &Individual, b: &Individual) -> Ordering {
        match (rank_key(a.fitness), rank_key(b.fitness)) {
            (Some(x), Some(y)) => match self {
                OptimizationDirection::Maximize => y.total_cmp(&x),
                OptimizationDirection::Minimize => x.total_cmp(&y),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    pub fn better_or_equal(self, a: &Individual, b: &Individual) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

fn rank_key(fitness: Option<f64>) -> Option<f64> {
    fitness.filter(|f| !f.is_nan())
}

/// Sort individuals so that index 0 holds the fittest.
pub fn sort_by_fitness(individuals: &mut [Individual], direction: OptimizationDirection) {
    individuals.sort_by(|a, b| direction.compare(a, b));
}

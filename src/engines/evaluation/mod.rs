pub mod entropy;
pub mod fitness;
pub mod objective;
pub mod oracle;

pub use fitness::{EvaluationStats, FitnessEvaluator, FitnessFunction};
pub use objective::MinsetObjective;
pub use oracle::{EntropyOracle, SuffixArrayOracle, WordEntropy};

use crate::engines::evaluation::EvaluationStats;
use crate::engines::generation::RunOutcome;
use crate::types::Gene;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SequenceScore {
    pub name: String,
    pub length: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoldSummary {
    pub repeat: usize,
    pub fold: usize,
    pub generations_run: usize,
    pub best_fitness: Option<f64>,
}

/// Machine-readable record of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub alphabet: String,
    pub sequence_count: usize,
    pub max_selected: Option<usize>,
    pub best_fitness: Option<f64>,
    pub best_genome: Vec<Gene>,
    pub selected: Vec<String>,
    pub evaluations: EvaluationStats,
    pub folds: Vec<FoldSummary>,
    pub sequence_scores: Vec<SequenceScore>,
}

impl RunSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

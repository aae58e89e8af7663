use crate::config::AppConfig;
use crate::data::{Corpus, SEQUENCE_DELIMITER};
use crate::engines::evaluation::{MinsetObjective, SuffixArrayOracle};
use crate::engines::generation::{
    ConsoleProgressCallback, EvolutionConfig, EvolutionEngine, ProgressCallback, RunResult,
};
use crate::error::Result;
use crate::output::{FoldSummary, OutputWriter, RunSummary, SequenceScore};
use rayon::prelude::*;

/// Loads the base set, runs the GA and writes every result file.
pub struct MinsetRunner {
    config: AppConfig,
}

impl MinsetRunner {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut callback = ConsoleProgressCallback::new(self.config.ga.generation);
        self.run_with(&mut callback)
    }

    pub fn run_with<C: ProgressCallback>(&self, callback: &mut C) -> Result<RunSummary> {
        let corpus = Corpus::load(&self.config.minset)?;

        let mut config = self.config.clone();
        config.ga.genenum = corpus.len();
        config.validate_for_gene_count(corpus.len())?;

        let output = OutputWriter::prepare(&config.output.directory)?;
        output.write_parameters(&config)?;
        output.write_baseset(&corpus)?;

        let oracle = SuffixArrayOracle::build(corpus.reference(), SEQUENCE_DELIMITER);
        let bounds = config.ga.bounds();
        let objective =
            MinsetObjective::new(&corpus, &oracle, config.minset.kwordlength, bounds)?;
        let sequence_scores = score_sequences(&corpus, &objective);

        let engine_config = EvolutionConfig::from_app_config(&config, corpus.len());
        let max_selected = engine_config.max_selected;
        log::info!(
            "Running GA: {} genomes, {} parents, {} generations, {} fold(s) x {} repeat(s)",
            engine_config.popsize,
            engine_config.fitmate,
            engine_config.generations,
            engine_config.jackknife,
            engine_config.repeat
        );

        let mut engine = EvolutionEngine::new(engine_config)?;
        let mut snapshots = output.snapshot_writer(&config);
        let result = engine.run(&objective, callback, &mut snapshots)?;

        output.write_subset(&corpus, &result.population, bounds)?;

        let summary = summarize(&config, &corpus, &result, max_selected, sequence_scores);
        if config.output.write_summary {
            output.write_summary(&summary)?;
        }
        log::info!(
            "Best fitness {} with {} of {} sequences selected",
            summary
                .best_fitness
                .map_or_else(|| "n/a".to_string(), |f| format!("{:.4}", f)),
            summary.selected.len(),
            summary.sequence_count
        );

        Ok(summary)
    }
}

fn score_sequences(
    corpus: &Corpus,
    objective: &MinsetObjective<'_, SuffixArrayOracle>,
) -> Vec<SequenceScore> {
    corpus
        .entries()
        .par_iter()
        .map(|entry| {
            let score = objective.score_sequence(entry);
            log::debug!("{} ({} residues): {:.4}", entry.name, entry.len(), score);
            SequenceScore {
                name: entry.name.clone(),
                length: entry.len(),
                score,
            }
        })
        .collect()
}

fn summarize(
    config: &AppConfig,
    corpus: &Corpus,
    result: &RunResult,
    max_selected: Option<usize>,
    sequence_scores: Vec<SequenceScore>,
) -> RunSummary {
    let bounds = config.ga.bounds();
    let best = result.best();
    let best_genome = best.map(|b| b.genome.clone()).unwrap_or_default();
    let selected = corpus
        .selected(&best_genome, bounds)
        .map(|entry| entry.name.clone())
        .collect();

    RunSummary {
        outcome: result.outcome,
        alphabet: corpus.alphabet().name().to_string(),
        sequence_count: corpus.len(),
        max_selected,
        best_fitness: best.and_then(|b| b.fitness),
        best_genome,
        selected,
        evaluations: result.stats(),
        folds: result
            .folds
            .iter()
            .map(|f| FoldSummary {
                repeat: f.repeat,
                fold: f.fold,
                generations_run: f.generations_run,
                best_fitness: f.best.as_ref().and_then(|b| b.fitness),
            })
            .collect(),
        sequence_scores,
    }
}

use crate::config::{AppConfig, BreedingMode, InitMode};
use crate::engines::evaluation::{EvaluationStats, FitnessEvaluator, FitnessFunction};
use crate::engines::generation::{
    genome::{GeneEncoding, Genome, Individual},
    operators::{
        breed_crossover, breed_equilibrium, constrain_genome, gene_averages, init_random_pool,
        init_seeded_pool, GeneSpace,
    },
    population::Population,
    selection::OptimizationDirection,
};
use crate::error::{MinsetError, Result};
use crate::types::GeneBounds;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::ops::Range;

/// Fully resolved parameters of one GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    pub popsize: usize,
    pub fitmate: usize,
    pub generations: usize,
    pub gene_count: usize,
    pub bounds: GeneBounds,
    pub direction: OptimizationDirection,
    pub init: InitMode,
    pub maxvar: u32,
    pub breeding: BreedingMode,
    pub encoding: GeneEncoding,
    pub jackknife: usize,
    pub repeat: usize,

    /// Upper bound on selected genes per genome; `None` disables repair.
    pub max_selected: Option<usize>,
    pub seed_genome: Genome,
    pub seed: Option<u64>,
    /// Snapshot every generation instead of only the last one of a fold.
    pub record_history: bool,
}

impl EvolutionConfig {
    /// Resolve the run parameters for a base set of `gene_count` sequences.
    pub fn from_app_config(config: &AppConfig, gene_count: usize) -> Self {
        let ga = &config.ga;
        let seed_genome = if config.run.seed_genome.is_empty() {
            vec![ga.lowlim; gene_count]
        } else {
            config.run.seed_genome.clone()
        };

        Self {
            popsize: ga.popsize,
            fitmate: ga.fitmate,
            generations: ga.generation,
            gene_count,
            bounds: ga.bounds(),
            direction: ga.direction,
            init: ga.init,
            maxvar: ga.maxvar,
            breeding: ga.breeding,
            encoding: config.run.gene_encoding,
            jackknife: ga.jackknife,
            repeat: ga.repeat,
            max_selected: config.minset.max_selected(gene_count),
            seed_genome,
            seed: config.run.seed,
            record_history: config.output.write_history,
        }
    }

    pub fn gene_space(&self) -> GeneSpace {
        GeneSpace::new(self.bounds, self.maxvar, self.encoding)
    }

    /// Seed of fold `fold` in repeat `repeat`, when the run is seeded.
    pub fn fold_seed(&self, repeat: usize, fold: usize) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add((repeat * self.jackknife + fold) as u64))
    }

    fn validate(&self) -> Result<()> {
        if self.popsize < 2 || self.fitmate >= self.popsize {
            return Err(MinsetError::Configuration(format!(
                "invalid pool shape: popsize {} with fitmate {}",
                self.popsize, self.fitmate
            )));
        }
        if self.breeding == BreedingMode::Crossover && self.fitmate < 2 {
            return Err(MinsetError::Configuration(
                "crossover needs at least 2 parents".to_string(),
            ));
        }
        if self.fitmate == 0 || self.generations == 0 || self.gene_count == 0 {
            return Err(MinsetError::Configuration(
                "fitmate, generation count and gene count must be positive".to_string(),
            ));
        }
        if self.seed_genome.len() != self.gene_count {
            return Err(MinsetError::Configuration(format!(
                "seed genome has {} genes, expected {}",
                self.seed_genome.len(),
                self.gene_count
            )));
        }
        Ok(())
    }
}

pub trait ProgressCallback: Send {
    fn on_fold_start(&mut self, repeat: usize, fold: usize);
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: Option<f64>,
        stats: &EvaluationStats,
    );
    fn on_converged(&mut self, repeat: usize, fold: usize, generation: usize);
}

/// Receives pool snapshots; one fold is bracketed by `begin_fold`/`end_fold`.
pub trait SnapshotSink {
    fn begin_fold(&mut self, repeat: usize, fold: usize) -> Result<()>;
    fn record(&mut self, population: &Population, generation: usize, is_final: bool) -> Result<()>;
    fn end_fold(&mut self) -> Result<()>;
}

/// Discards every snapshot.
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn begin_fold(&mut self, _repeat: usize, _fold: usize) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, _population: &Population, _generation: usize, _is_final: bool) -> Result<()> {
        Ok(())
    }

    fn end_fold(&mut self) -> Result<()> {
        Ok(())
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunOutcome {
    Completed {
        repeats: usize,
        folds: usize,
        generations: usize,
    },
    /// The whole pool became identical; no further generations, folds or repeats ran.
    Converged {
        repeat: usize,
        fold: usize,
        generation: usize,
    },
}

#[derive(Debug, Clone)]
pub struct FoldReport {
    pub repeat: usize,
    pub fold: usize,
    pub generations_run: usize,
    pub best: Option<Individual>,
    pub stats: EvaluationStats,
}

pub struct RunResult {
    pub outcome: RunOutcome,
    /// Sorted pool at the end of the last fold that ran.
    pub population: Population,
    pub folds: Vec<FoldReport>,
}

impl RunResult {
    pub fn best(&self) -> Option<&Individual> {
        self.population.best()
    }

    pub fn is_converged(&self) -> bool {
        matches!(self.outcome, RunOutcome::Converged { .. })
    }

    pub fn stats(&self) -> EvaluationStats {
        let mut total = EvaluationStats::default();
        for fold in &self.folds {
            total += fold.stats;
        }
        total
    }
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Run every repeat and jackknife fold, stopping early on convergence.
    pub fn run<F, C, S>(&mut self, objective: &F, callback: &mut C, sink: &mut S) -> Result<RunResult>
    where
        F: FitnessFunction,
        C: ProgressCallback,
        S: SnapshotSink,
    {
        let mut folds = Vec::with_capacity(self.config.repeat * self.config.jackknife);
        let mut population = self.allocate_population();

        for repeat in 0..self.config.repeat {
            for fold in 0..self.config.jackknife {
                let (report, converged) =
                    self.run_fold(&mut population, repeat, fold, objective, callback, sink)?;
                folds.push(report);

                if let Some(generation) = converged {
                    log::info!(
                        "Pool converged in repeat {}, fold {}, generation {}",
                        repeat + 1,
                        fold + 1,
                        generation
                    );
                    return Ok(RunResult {
                        outcome: RunOutcome::Converged {
                            repeat,
                            fold,
                            generation,
                        },
                        population,
                        folds,
                    });
                }
            }
        }

        Ok(RunResult {
            outcome: RunOutcome::Completed {
                repeats: self.config.repeat,
                folds: self.config.jackknife,
                generations: self.config.generations,
            },
            population,
            folds,
        })
    }

    /// One fold: re-initialize `population` in place, then the generation loop.
    ///
    /// Leaves the pool sorted. Returns the fold report and the generation at
    /// which the pool converged, if it did.
    pub fn run_fold<F, C, S>(
        &mut self,
        population: &mut Population,
        repeat: usize,
        fold: usize,
        objective: &F,
        callback: &mut C,
        sink: &mut S,
    ) -> Result<(FoldReport, Option<usize>)>
    where
        F: FitnessFunction,
        C: ProgressCallback,
        S: SnapshotSink,
    {
        self.reseed(repeat, fold);
        callback.on_fold_start(repeat, fold);
        sink.begin_fold(repeat, fold)?;

        self.initialize_population(population)?;
        self.constrain(population, 0..self.config.popsize);

        let evaluator = FitnessEvaluator::new(objective);
        let mut fold_stats = EvaluationStats::default();
        let mut generations_run = 0;
        let mut converged_at = None;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            let range = if generation == 0 {
                0..population.len()
            } else {
                population.offspring_range()
            };
            let stats = evaluator.evaluate_range(population, range)?;
            fold_stats += stats;

            population.sort(self.config.direction);
            generations_run = generation + 1;
            callback.on_generation_complete(
                generation,
                population.best().and_then(|b| b.fitness),
                &stats,
            );

            let converged = population.is_converged();
            let is_last = converged || generation + 1 == self.config.generations;
            if self.config.record_history || is_last {
                sink.record(population, generation, is_last)?;
            }

            if converged {
                callback.on_converged(repeat, fold, generation);
                converged_at = Some(generation);
                break;
            }
            if !is_last {
                self.breed(population);
                let offspring = population.offspring_range();
                self.constrain(population, offspring);
            }
        }

        sink.end_fold()?;

        let report = FoldReport {
            repeat,
            fold,
            generations_run,
            best: population.best().cloned(),
            stats: fold_stats,
        };
        Ok((report, converged_at))
    }

    /// The pool buffer shared by every fold of a run.
    pub fn allocate_population(&self) -> Population {
        Population::new(
            self.config.popsize,
            self.config.fitmate,
            self.config.gene_count,
            self.config.bounds.low,
        )
    }

    /// Overwrite every genome of `population` and clear its fitness.
    pub fn initialize_population(&mut self, population: &mut Population) -> Result<()> {
        let config = &self.config;
        if population.len() != config.popsize || population.gene_count() != config.gene_count {
            return Err(MinsetError::Configuration(format!(
                "pool of {} x {} does not match popsize {} and gene count {}",
                population.len(),
                population.gene_count(),
                config.popsize,
                config.gene_count
            )));
        }

        let space = config.gene_space();
        match config.init {
            InitMode::Random => init_random_pool(population, &space, &mut self.rng),
            InitMode::Seeded => {
                init_seeded_pool(population, &config.seed_genome, &space, &mut self.rng)
            }
        }
        Ok(())
    }

    /// Overwrite the offspring slots from the current fittest parents.
    pub fn breed(&mut self, population: &mut Population) {
        let space = self.config.gene_space();
        let (parents, offspring) = population.split_parents_mut();

        match self.config.breeding {
            BreedingMode::Crossover => {
                for child in offspring.iter_mut() {
                    breed_crossover(parents, child, &mut self.rng);
                }
            }
            BreedingMode::Equilibrium => {
                let averages = gene_averages(parents);
                for child in offspring.iter_mut() {
                    breed_equilibrium(&averages, child, &space, &mut self.rng);
                }
            }
        }
    }

    /// Apply the selected-gene limit to the genomes in `range`.
    pub fn constrain(&mut self, population: &mut Population, range: Range<usize>) {
        let Some(maxgenes) = self.config.max_selected else {
            return;
        };
        let bounds = self.config.bounds;
        let mut removed = 0;
        for individual in &mut population.individuals_mut()[range] {
            removed += constrain_genome(individual, bounds, maxgenes, &mut self.rng);
        }
        if removed > 0 {
            log::debug!("Deselected {} genes to keep subsets at {} or fewer", removed, maxgenes);
        }
    }

    fn reseed(&mut self, repeat: usize, fold: usize) {
        if let Some(seed) = self.config.fold_seed(repeat, fold) {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}

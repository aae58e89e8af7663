use minset::config::{BreedingMode, InitMode};
use minset::engines::evaluation::{EvaluationStats, FitnessEvaluator};
use minset::engines::generation::{
    EvolutionConfig, EvolutionEngine, GeneEncoding, Individual, NullSink, OptimizationDirection,
    Population, ProgressCallback, RunOutcome,
};
use minset::types::{Gene, GeneBounds};
use minset::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct Recorder {
    converged: Option<(usize, usize, usize)>,
    generations: usize,
}

impl ProgressCallback for Recorder {
    fn on_fold_start(&mut self, _repeat: usize, _fold: usize) {}

    fn on_generation_start(&mut self, _generation: usize) {
        self.generations += 1;
    }

    fn on_generation_complete(&mut self, _: usize, _: Option<f64>, _: &EvaluationStats) {}

    fn on_converged(&mut self, repeat: usize, fold: usize, generation: usize) {
        self.converged = Some((repeat, fold, generation));
    }
}

fn engine_config() -> EvolutionConfig {
    EvolutionConfig {
        popsize: 16,
        fitmate: 4,
        generations: 6,
        gene_count: 6,
        bounds: GeneBounds::new(0, 1),
        direction: OptimizationDirection::Maximize,
        init: InitMode::Random,
        maxvar: 1,
        breeding: BreedingMode::Crossover,
        encoding: GeneEncoding::Integer,
        jackknife: 1,
        repeat: 1,
        max_selected: None,
        seed_genome: vec![0; 6],
        seed: Some(9),
        record_history: false,
    }
}

#[test]
fn test_selection_scenario() {
    let mut pool = Population::from_individuals(
        vec![
            Individual::with_fitness(vec![0, 0, 0], 0.2),
            Individual::with_fitness(vec![1, 1, 0], 0.4),
            Individual::with_fitness(vec![1, 0, 1], 0.8),
            Individual::with_fitness(vec![0, 1, 1], 0.6),
        ],
        2,
    )
    .unwrap();

    pool.sort(OptimizationDirection::Maximize);

    let best = pool.best().unwrap();
    assert_eq!(best.genome, vec![1, 0, 1]);
    assert_eq!(best.fitness, Some(0.8));
    assert_eq!(pool.fittest()[1].genome, vec![0, 1, 1]);

    pool.sort(OptimizationDirection::Minimize);
    assert_eq!(pool.best().unwrap().genome, vec![0, 0, 0]);
}

#[test]
fn test_identical_pool_is_converged() {
    let individuals = vec![Individual::new(2, 1); 3];
    let pool = Population::from_individuals(individuals, 1).unwrap();
    assert!(pool.is_converged());
}

#[test]
fn test_zero_fitness_is_a_score() {
    let mut pool = Population::from_individuals(
        vec![Individual::with_fitness(vec![0, 0], 0.0), Individual::new(2, 0)],
        1,
    )
    .unwrap();
    let calls = AtomicUsize::new(0);
    let objective = |_: &[Gene]| -> Result<f64> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(5.0)
    };

    let fitness = FitnessEvaluator::new(&objective).evaluate(&mut pool, 1).unwrap();

    assert_eq!(fitness, 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_duplicates_are_scored_once_per_pool() {
    let genomes: Vec<Vec<Gene>> = (0..40).map(|i| vec![i % 3, (i / 3) % 2, i % 2]).collect();
    let individuals = genomes
        .iter()
        .map(|g| Individual {
            genome: g.clone(),
            fitness: None,
        })
        .collect();
    let mut pool = Population::from_individuals(individuals, 5).unwrap();

    let calls = AtomicUsize::new(0);
    let objective = |g: &[Gene]| -> Result<f64> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(g.iter().enumerate().map(|(j, &v)| (j + 1) as f64 * v as f64).sum())
    };

    let stats = FitnessEvaluator::new(&objective)
        .evaluate_range(&mut pool, 0..40)
        .unwrap();

    // Six distinct genomes repeat with period six.
    assert_eq!(stats, EvaluationStats { computed: 6, memoized: 34 });
    assert_eq!(calls.load(Ordering::SeqCst), 6);
    for (ix, individual) in pool.individuals().iter().enumerate() {
        assert_eq!(individual.fitness, pool.individuals()[ix % 6].fitness);
    }
}

#[test]
fn test_converged_pool_stops_the_whole_run() {
    let mut config = engine_config();
    config.init = InitMode::Seeded;
    config.maxvar = 0;
    config.repeat = 3;
    config.jackknife = 2;

    let objective = |g: &[Gene]| -> Result<f64> { Ok(g.len() as f64) };
    let mut recorder = Recorder::default();
    let mut engine = EvolutionEngine::new(config).unwrap();
    let result = engine.run(&objective, &mut recorder, &mut NullSink).unwrap();

    assert_eq!(
        result.outcome,
        RunOutcome::Converged {
            repeat: 0,
            fold: 0,
            generation: 0
        }
    );
    assert!(result.is_converged());
    assert_eq!(result.folds.len(), 1);
    assert_eq!(recorder.generations, 1);
    assert_eq!(recorder.converged, Some((0, 0, 0)));
}

#[test]
fn test_completed_run_visits_every_fold() {
    let mut config = engine_config();
    config.repeat = 2;
    config.jackknife = 3;
    config.generations = 2;

    // Distinct scores per genome keep the pool from collapsing in two generations.
    let objective = |g: &[Gene]| -> Result<f64> {
        Ok(g.iter().enumerate().map(|(j, &v)| (v as f64) * 2f64.powi(j as i32)).sum())
    };
    let mut recorder = Recorder::default();
    let mut engine = EvolutionEngine::new(config).unwrap();
    let result = engine.run(&objective, &mut recorder, &mut NullSink).unwrap();

    assert_eq!(
        result.outcome,
        RunOutcome::Completed {
            repeats: 2,
            folds: 3,
            generations: 2
        }
    );
    assert!(!result.is_converged());
    assert_eq!(result.folds.len(), 6);
    assert_eq!(recorder.generations, 12);
    assert_eq!(recorder.converged, None);
}

#[test]
fn test_equilibrium_breeding_keeps_genes_in_range() {
    let mut config = engine_config();
    config.breeding = BreedingMode::Equilibrium;
    config.bounds = GeneBounds::new(0, 9);
    config.maxvar = 3;
    config.seed_genome = vec![0; 6];

    let objective = |g: &[Gene]| -> Result<f64> { Ok(g.iter().sum::<Gene>() as f64) };
    let mut engine = EvolutionEngine::new(config).unwrap();
    let result = engine
        .run(&objective, &mut Recorder::default(), &mut NullSink)
        .unwrap();

    for individual in result.population.individuals() {
        assert!(individual.genome.iter().all(|&g| (0..=9).contains(&g)));
        assert!(individual.is_scored());
    }
}

fn bit_genes_only(g: &[Gene]) -> Result<f64> {
    if g.iter().any(|&v| v != 0 && v != 1) {
        return Err(minset::MinsetError::Evaluation(format!("non-bit genome {:?}", g)));
    }
    Ok(g.iter().enumerate().map(|(j, &v)| v as f64 * (j + 1) as f64).sum())
}

#[test]
fn test_bit_encoding_keeps_genomes_binary_and_within_limit() {
    for breeding in [BreedingMode::Crossover, BreedingMode::Equilibrium] {
        for init in [InitMode::Random, InitMode::Seeded] {
            let mut config = engine_config();
            config.encoding = GeneEncoding::Bit;
            config.breeding = breeding;
            config.init = init;
            config.maxvar = 3;
            config.max_selected = Some(2);
            config.seed_genome = vec![1, 1, 1, 1, 0, 0];
            config.jackknife = 2;

            let mut engine = EvolutionEngine::new(config).unwrap();
            let result = engine
                .run(&bit_genes_only, &mut Recorder::default(), &mut NullSink)
                .unwrap();

            let bounds = GeneBounds::new(0, 1);
            for individual in result.population.individuals() {
                assert!(individual.genome.iter().all(|&g| g == 0 || g == 1));
                assert!(individual.selected_count(bounds) <= 2, "{:?}", individual.genome);
                assert!(individual.is_scored());
            }
            let best = result.best().unwrap();
            assert!(best.fitness.unwrap() <= 11.0);
        }
    }
}

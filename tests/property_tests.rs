//! Property-based tests for the genetic operators

use minset::engines::generation::operators::{
    breed_crossover, constrain_genome, init_random_pool, vary_value, GeneSpace,
};
use minset::engines::generation::selection::sort_by_fitness;
use minset::engines::generation::{GeneEncoding, Individual, OptimizationDirection, Population};
use minset::types::{Gene, GeneBounds};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arb_bounds()(low in -20..20i32, width in 1..30i32) -> GeneBounds {
        GeneBounds::new(low, low + width)
    }
}

prop_compose! {
    fn arb_direction()(maximize in any::<bool>()) -> OptimizationDirection {
        if maximize {
            OptimizationDirection::Maximize
        } else {
            OptimizationDirection::Minimize
        }
    }
}

prop_compose! {
    fn arb_fitness()(score in prop::option::of(-1.0e3..1.0e3f64)) -> Option<f64> {
        score
    }
}

proptest! {
    #[test]
    fn vary_value_stays_in_range(
        bounds in arb_bounds(),
        offset in 0..30i32,
        maxvar in 0..50u32,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let value = bounds.clamp((bounds.low + offset) as i64);
        let varied = vary_value(value, bounds, maxvar, &mut rng);
        prop_assert!(bounds.contains(varied));
        prop_assert!((varied - value).abs() as u32 <= maxvar);
    }

    #[test]
    fn random_pool_stays_in_range(bounds in arb_bounds(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pool = Population::new(12, 3, 9, bounds.low);
        let space = GeneSpace::new(bounds, 2, GeneEncoding::Integer);
        init_random_pool(&mut pool, &space, &mut rng);
        for individual in pool.individuals() {
            prop_assert!(individual.genome.iter().all(|&g| bounds.contains(g)));
            prop_assert!(!individual.is_scored());
        }
    }

    #[test]
    fn sorted_pool_is_totally_ordered(
        scores in prop::collection::vec(arb_fitness(), 2..40),
        direction in arb_direction(),
    ) {
        let mut individuals: Vec<Individual> = scores
            .into_iter()
            .map(|fitness| Individual { genome: vec![0], fitness })
            .collect();
        sort_by_fitness(&mut individuals, direction);
        for pair in individuals.windows(2) {
            prop_assert!(direction.better_or_equal(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn crossover_genes_come_from_parents(
        parents in prop::collection::vec(prop::collection::vec(0..5i32, 6), 2..6),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let parents: Vec<Individual> = parents
            .into_iter()
            .map(|genome| Individual::with_fitness(genome, 1.0))
            .collect();
        let mut child = Individual::new(6, 0);
        breed_crossover(&parents, &mut child, &mut rng);

        prop_assert!(!child.is_scored());
        for (j, gene) in child.genome.iter().enumerate() {
            prop_assert!(parents.iter().any(|p| p.genome[j] == *gene));
        }
    }

    #[test]
    fn repair_enforces_subset_limit(
        genome in prop::collection::vec(0..=1i32, 1..60),
        maxgenes in 0..20usize,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = GeneBounds::new(0, 1);
        let before = bounds.selected_count(&genome);
        let mut individual = Individual { genome: genome.clone(), fitness: None };

        let removed = constrain_genome(&mut individual, bounds, maxgenes, &mut rng);

        let after = individual.selected_count(bounds);
        prop_assert_eq!(after, before.min(maxgenes));
        prop_assert_eq!(removed, before - after);
        if before <= maxgenes {
            prop_assert_eq!(individual.genome, genome);
        } else {
            // Only selected genes are switched off.
            for (old, new) in genome.iter().zip(&individual.genome) {
                prop_assert!(old == new || (*old == 1 && *new == 0));
            }
        }
    }
}

#[test]
fn bit_encoding_maps_into_zero_one() {
    let values: Vec<Gene> = (-3..4).map(|v| GeneEncoding::Bit.encode(v)).collect();
    assert!(values.iter().all(|&v| v == 0 || v == 1));
}

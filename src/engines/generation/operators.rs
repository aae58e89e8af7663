use crate::engines::generation::genome::{GeneEncoding, Individual};
use crate::engines::generation::population::Population;
use crate::types::{Gene, GeneBounds};
use rand::Rng;

/// Upper bound on resampling rounds in [`vary_value`] before clamping.
pub const MAX_VARY_ATTEMPTS: usize = 64;

/// Value domain shared by all genetic operators of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneSpace {
    pub bounds: GeneBounds,
    pub maxvar: u32,
    pub encoding: GeneEncoding,
}

impl GeneSpace {
    pub fn new(bounds: GeneBounds, maxvar: u32, encoding: GeneEncoding) -> Self {
        Self {
            bounds,
            maxvar,
            encoding,
        }
    }

    /// Uniform draw from `[low, up]`, inclusive on both ends.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        self.encoding
            .encode(rng.gen_range(self.bounds.low..=self.bounds.up))
    }

    pub fn vary<R: Rng>(&self, value: Gene, rng: &mut R) -> Gene {
        self.encoding
            .encode(vary_value(value, self.bounds, self.maxvar, rng))
    }
}

/// Mutate `value` by a random step of at most `maxvar` in a random direction.
///
/// Candidates outside `[low, up]` are rejected and redrawn. After
/// [`MAX_VARY_ATTEMPTS`] rejections the last candidate is clamped into range.
pub fn vary_value<R: Rng>(value: Gene, bounds: GeneBounds, maxvar: u32, rng: &mut R) -> Gene {
    let downward = rng.gen_bool(0.5);
    let mut candidate = value as i64;

    for _ in 0..MAX_VARY_ATTEMPTS {
        let step = rng.gen_range(0..=maxvar) as i64;
        candidate = if downward {
            value as i64 - step
        } else {
            value as i64 + step
        };
        if candidate >= bounds.low as i64 && candidate <= bounds.up as i64 {
            return candidate as Gene;
        }
    }

    bounds.clamp(candidate)
}

/// Fill every genome with uniform random genes and clear all fitness.
pub fn init_random_pool<R: Rng>(population: &mut Population, space: &GeneSpace, rng: &mut R) {
    for individual in population.individuals_mut() {
        for gene in individual.genome.iter_mut() {
            *gene = space.random_gene(rng);
        }
        individual.reset_fitness();
    }
}

/// Genome 0 becomes `seed`; every other genome is an independent variation of it.
pub fn init_seeded_pool<R: Rng>(
    population: &mut Population,
    seed: &[Gene],
    space: &GeneSpace,
    rng: &mut R,
) {
    for (i, individual) in population.individuals_mut().iter_mut().enumerate() {
        for (gene, &seed_gene) in individual.genome.iter_mut().zip(seed) {
            let seed_gene = space.encoding.encode(seed_gene);
            *gene = if i == 0 {
                seed_gene
            } else {
                space.vary(seed_gene, rng)
            };
        }
        individual.reset_fitness();
    }
}

/// Uniform crossover: each gene comes from one of two distinct random parents.
///
/// Requires at least two parents.
pub fn breed_crossover<R: Rng>(parents: &[Individual], child: &mut Individual, rng: &mut R) {
    for (j, gene) in child.genome.iter_mut().enumerate() {
        let (ia, ib) = pick_parent_pair(parents.len(), rng);
        let donor = if rng.gen_bool(0.5) { ib } else { ia };
        *gene = parents[donor].genome[j];
    }
    child.reset_fitness();
}

fn pick_parent_pair<R: Rng>(fitmate: usize, rng: &mut R) -> (usize, usize) {
    let ia = rng.gen_range(0..fitmate);
    let mut ib = rng.gen_range(0..fitmate - 1);
    if ib >= ia {
        ib += 1;
    }
    (ia, ib)
}

/// Per-gene mean over `parents`, truncated towards zero.
pub fn gene_averages(parents: &[Individual]) -> Vec<Gene> {
    let gene_count = parents.first().map_or(0, |p| p.genome.len());
    if parents.is_empty() {
        return vec![0; gene_count];
    }

    (0..gene_count)
        .map(|j| {
            let sum: i64 = parents.iter().map(|p| p.genome[j] as i64).sum();
            (sum / parents.len() as i64) as Gene
        })
        .collect()
}

/// Equilibrium breeding: every gene drifts around the parent mean.
pub fn breed_equilibrium<R: Rng>(
    averages: &[Gene],
    child: &mut Individual,
    space: &GeneSpace,
    rng: &mut R,
) {
    for (gene, &average) in child.genome.iter_mut().zip(averages) {
        *gene = space.vary(average, rng);
    }
    child.reset_fitness();
}

/// Deselect random selected genes until at most `maxgenes` remain selected.
///
/// Returns the number of genes that were switched off.
pub fn constrain_genome<R: Rng>(
    individual: &mut Individual,
    bounds: GeneBounds,
    maxgenes: usize,
    rng: &mut R,
) -> usize {
    let mut selected = individual.selected_indices(bounds);
    let mut removed = 0;

    while selected.len() > maxgenes {
        let pick = rng.gen_range(0..selected.len());
        let j = selected.swap_remove(pick);
        individual.genome[j] = bounds.low;
        removed += 1;
    }

    removed
}

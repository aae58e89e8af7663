//! Command-line interface
//!
//! Every flag overrides the matching configuration key after defaults, the
//! configuration file and `MINSET_*` environment variables have been applied.
//! Both flags of an exclusive pair (`--minimize`/`--maximize` and so on) are
//! rejected by the parser.

use crate::config::{AppConfig, BreedingMode, InitMode, SnapshotFormat};
use crate::engines::generation::{GeneEncoding, OptimizationDirection};
use crate::types::Gene;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// MinSet - minimal representative subset search with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "minset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory receiving all output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// List the built-in alphabets and exit
    #[arg(long)]
    pub list_alphabets: bool,

    // GA parameters
    /// Number of genomes in the pool
    #[arg(long)]
    pub popsize: Option<usize>,

    /// Number of fittest genomes kept as parents
    #[arg(long)]
    pub fitmate: Option<usize>,

    /// Gene count (replaced by the base-set size)
    #[arg(long)]
    pub genenum: Option<usize>,

    /// Number of generations
    #[arg(long)]
    pub generation: Option<usize>,

    /// Lowest gene value
    #[arg(long, allow_hyphen_values = true)]
    pub lowlim: Option<Gene>,

    /// Highest gene value; a gene at this value selects its sequence
    #[arg(long, allow_hyphen_values = true)]
    pub uplim: Option<Gene>,

    /// Lower fitness is better
    #[arg(long, conflicts_with = "maximize")]
    pub minimize: bool,

    /// Higher fitness is better
    #[arg(long)]
    pub maximize: bool,

    /// Initialize the pool with random genomes
    #[arg(long, conflicts_with = "seeded")]
    pub random: bool,

    /// Initialize the pool with variations of the seed genome
    #[arg(long)]
    pub seeded: bool,

    /// Largest mutation step
    #[arg(long)]
    pub maxvar: Option<u32>,

    /// Breed by uniform crossover of two parents
    #[arg(long, conflicts_with = "equilibrium")]
    pub crossover: bool,

    /// Breed by drifting around the parent mean
    #[arg(long)]
    pub equilibrium: bool,

    /// Number of jackknife folds per repeat
    #[arg(long)]
    pub jackknife: Option<usize>,

    /// Number of independent repeats
    #[arg(long)]
    pub repeat: Option<usize>,

    // Base set and objective
    /// File listing the base-set sequence identifiers
    #[arg(long)]
    pub baseset: Option<PathBuf>,

    /// Directory holding one FASTA file per identifier
    #[arg(long)]
    pub seqdir: Option<PathBuf>,

    /// Coding alphabet of the sequences
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Maximum subset size, in percent of the base set
    #[arg(long)]
    pub subsetsize: Option<f64>,

    /// Word length used for the word entropy
    #[arg(long)]
    pub kwordlength: Option<usize>,

    // Run control
    /// Seed of the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Gene storage
    #[arg(long, value_enum)]
    pub gene_encoding: Option<EncodingArg>,

    /// Seed genome for --seeded, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub seed_genome: Option<Vec<Gene>>,

    /// Snapshot file layout
    #[arg(long, value_enum)]
    pub snapshot_format: Option<SnapshotFormatArg>,

    /// Snapshot the pool after every generation
    #[arg(long)]
    pub history: bool,

    /// Do not write summary.json
    #[arg(long)]
    pub no_summary: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EncodingArg {
    Integer,
    Bit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SnapshotFormatArg {
    Ascii,
    Binary,
}

impl Cli {
    /// Write every flag that was given into `config`.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        let ga = &mut config.ga;
        set(&mut ga.popsize, self.popsize);
        set(&mut ga.fitmate, self.fitmate);
        set(&mut ga.genenum, self.genenum);
        set(&mut ga.generation, self.generation);
        set(&mut ga.lowlim, self.lowlim);
        set(&mut ga.uplim, self.uplim);
        set(&mut ga.maxvar, self.maxvar);
        set(&mut ga.jackknife, self.jackknife);
        set(&mut ga.repeat, self.repeat);

        if self.minimize {
            ga.direction = OptimizationDirection::Minimize;
        } else if self.maximize {
            ga.direction = OptimizationDirection::Maximize;
        }
        if self.random {
            ga.init = InitMode::Random;
        } else if self.seeded {
            ga.init = InitMode::Seeded;
        }
        if self.crossover {
            ga.breeding = BreedingMode::Crossover;
        } else if self.equilibrium {
            ga.breeding = BreedingMode::Equilibrium;
        }

        let minset = &mut config.minset;
        set(&mut minset.baseset, self.baseset.clone());
        set(&mut minset.seqdir, self.seqdir.clone());
        set(&mut minset.alphabet, self.alphabet.clone());
        set(&mut minset.subsetsize, self.subsetsize);
        set(&mut minset.kwordlength, self.kwordlength);

        let run = &mut config.run;
        if self.seed.is_some() {
            run.seed = self.seed;
        }
        if let Some(encoding) = self.gene_encoding {
            run.gene_encoding = match encoding {
                EncodingArg::Integer => GeneEncoding::Integer,
                EncodingArg::Bit => GeneEncoding::Bit,
            };
        }
        set(&mut run.seed_genome, self.seed_genome.clone());

        let output = &mut config.output;
        set(&mut output.directory, self.output_dir.clone());
        if let Some(format) = self.snapshot_format {
            output.snapshot_format = match format {
                SnapshotFormatArg::Ascii => SnapshotFormat::Ascii,
                SnapshotFormatArg::Binary => SnapshotFormat::Binary,
            };
        }
        if self.history {
            output.write_history = true;
        }
        if self.no_summary {
            output.write_summary = false;
        }
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

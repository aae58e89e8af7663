pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod population;
pub mod progress;
pub mod selection;

pub use evolution_engine::{
    EvolutionConfig, EvolutionEngine, FoldReport, NullSink, ProgressCallback, RunOutcome,
    RunResult, SnapshotSink,
};
pub use genome::{GeneEncoding, Genome, Individual};
pub use operators::GeneSpace;
pub use population::Population;
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
pub use selection::OptimizationDirection;

use super::evolution_engine::ProgressCallback;
use crate::engines::evaluation::EvaluationStats;
use std::sync::mpsc::Sender;

/// Reports progress through the `log` facade.
pub struct ConsoleProgressCallback {
    generations: usize,
}

impl ConsoleProgressCallback {
    pub fn new(generations: usize) -> Self {
        Self { generations }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_fold_start(&mut self, repeat: usize, fold: usize) {
        log::info!("Repeat {}, fold {} starting", repeat + 1, fold + 1);
    }

    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {}/{} starting", generation + 1, self.generations);
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: Option<f64>,
        stats: &EvaluationStats,
    ) {
        let best = best_fitness.map_or_else(|| "unscored".to_string(), |f| format!("{:.4}", f));
        log::info!(
            "Generation {}/{} complete. Best fitness: {}, evaluated: {}, memoized: {}",
            generation + 1,
            self.generations,
            best,
            stats.computed,
            stats.memoized
        );
    }

    fn on_converged(&mut self, repeat: usize, fold: usize, generation: usize) {
        log::info!(
            "Converged at generation {} (repeat {}, fold {})",
            generation + 1,
            repeat + 1,
            fold + 1
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    FoldStart { repeat: usize, fold: usize },
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best_fitness: Option<f64>,
        stats: EvaluationStats,
    },
    Converged { repeat: usize, fold: usize, generation: usize },
}

/// Forwards progress events over a channel, for a caller driving the run
/// from another thread.
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_fold_start(&mut self, repeat: usize, fold: usize) {
        let _ = self.sender.send(ProgressMessage::FoldStart { repeat, fold });
    }

    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: Option<f64>,
        stats: &EvaluationStats,
    ) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            stats: *stats,
        });
    }

    fn on_converged(&mut self, repeat: usize, fold: usize, generation: usize) {
        let _ = self.sender.send(ProgressMessage::Converged {
            repeat,
            fold,
            generation,
        });
    }
}

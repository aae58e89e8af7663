use serde::{Deserialize, Serialize};

/// A single gene value.
pub type Gene = i32;

/// Inclusive value range `[low, up]` every gene must stay within.
///
/// A gene sitting at `up` counts as "selected": for subset search the upper
/// bound switches the corresponding sequence on, the lower bound switches it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneBounds {
    pub low: Gene,
    pub up: Gene,
}

impl GeneBounds {
    pub fn new(low: Gene, up: Gene) -> Self {
        Self { low, up }
    }

    pub fn contains(&self, value: Gene) -> bool {
        value >= self.low && value <= self.up
    }

    pub fn clamp(&self, value: i64) -> Gene {
        value.clamp(self.low as i64, self.up as i64) as Gene
    }

    pub fn is_selected(&self, value: Gene) -> bool {
        value == self.up
    }

    /// Number of selected genes in `genes`.
    pub fn selected_count(&self, genes: &[Gene]) -> usize {
        genes.iter().filter(|&&g| self.is_selected(g)).count()
    }
}

impl Default for GeneBounds {
    fn default() -> Self {
        Self { low: 0, up: 1 }
    }
}

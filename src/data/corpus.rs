use super::alphabet::Alphabet;
use super::connectors::{BaseSetConnector, FastaConnector, SequenceEntry};
use crate::config::MinsetConfig;
use crate::error::{MinsetError, Result};
use crate::types::{Gene, GeneBounds};

/// Separates sequences in the reference and in queries; never part of an alphabet.
pub const SEQUENCE_DELIMITER: char = '-';
/// Terminates each sequence in the exported subset.
pub const SUBSET_DELIMITER: char = '+';

/// The base set: one sequence per gene, in base-set list order.
#[derive(Debug, Clone)]
pub struct Corpus {
    alphabet: Alphabet,
    entries: Vec<SequenceEntry>,
    reference: String,
}

impl Corpus {
    pub fn new(alphabet: Alphabet, entries: Vec<SequenceEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MinsetError::Configuration(
                "base set contains no sequences".to_string(),
            ));
        }

        let separator = SEQUENCE_DELIMITER.to_string();
        let reference = entries
            .iter()
            .map(|e| e.residues.as_str())
            .collect::<Vec<_>>()
            .join(separator.as_str());

        Ok(Self {
            alphabet,
            entries,
            reference,
        })
    }

    /// Read the base-set list and every listed FASTA file.
    pub fn load(config: &MinsetConfig) -> Result<Self> {
        let alphabet = Alphabet::by_name(&config.alphabet)?;
        let names = BaseSetConnector::load(&config.baseset)?;
        let fold_case = !alphabet.is_case_sensitive();

        let entries = names
            .iter()
            .map(|name| FastaConnector::load(config.sequence_path(name), name, fold_case))
            .collect::<Result<Vec<_>>>()?;

        let corpus = Self::new(alphabet, entries)?;
        corpus.log_statistics();
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// All sequences joined by [`SEQUENCE_DELIMITER`].
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn total_residues(&self) -> usize {
        self.entries.iter().map(SequenceEntry::len).sum()
    }

    /// Entries whose gene is selected in `genome`.
    pub fn selected<'a>(
        &'a self,
        genome: &'a [Gene],
        bounds: GeneBounds,
    ) -> impl Iterator<Item = &'a SequenceEntry> + 'a {
        self.entries
            .iter()
            .zip(genome)
            .filter(move |(_, gene)| bounds.is_selected(**gene))
            .map(|(entry, _)| entry)
    }

    /// Selected sequences, each followed by [`SEQUENCE_DELIMITER`].
    pub fn selection_query(&self, genome: &[Gene], bounds: GeneBounds) -> String {
        self.join_selected(genome, bounds, SEQUENCE_DELIMITER)
    }

    /// Selected sequences, each followed by [`SUBSET_DELIMITER`].
    pub fn subset_text(&self, genome: &[Gene], bounds: GeneBounds) -> String {
        self.join_selected(genome, bounds, SUBSET_DELIMITER)
    }

    fn join_selected(&self, genome: &[Gene], bounds: GeneBounds, terminator: char) -> String {
        let mut text = String::new();
        for entry in self.selected(genome, bounds) {
            text.push_str(&entry.residues);
            text.push(terminator);
        }
        text
    }

    fn log_statistics(&self) {
        log::info!(
            "Loaded {} sequences, {} residues, alphabet {}",
            self.len(),
            self.total_residues(),
            self.alphabet.name()
        );

        let (counts, letters) = self.alphabet.letter_counts(&self.reference);
        for (letter, count) in self.alphabet.code().chars().zip(&counts) {
            log::debug!("  {}: {}", letter, count);
        }
        let coded: usize = counts.iter().sum();
        if coded < letters {
            log::warn!(
                "{} residues are not part of alphabet {}",
                letters - coded,
                self.alphabet.name()
            );
        }
    }
}

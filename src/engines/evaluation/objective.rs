use super::entropy::{relative_entropy, shannon_entropy};
use super::fitness::FitnessFunction;
use super::oracle::EntropyOracle;
use crate::data::{Corpus, SequenceEntry, SEQUENCE_DELIMITER};
use crate::error::{MinsetError, Result};
use crate::types::{Gene, GeneBounds};

/// Subset score: word entropy relative to the background entropy, penalized
/// by the divergence of the subset's composition from the background.
///
/// `fitness = (H / E) * (1 - D)` with `H` the word entropy of the query
/// against the full reference, `E` the background entropy and `D` the
/// relative entropy of the query's letter frequencies.
pub struct MinsetObjective<'a, O: EntropyOracle> {
    corpus: &'a Corpus,
    oracle: &'a O,
    word_len: usize,
    bounds: GeneBounds,
    background_entropy: f64,
}

impl<'a, O: EntropyOracle> MinsetObjective<'a, O> {
    pub fn new(corpus: &'a Corpus, oracle: &'a O, word_len: usize, bounds: GeneBounds) -> Result<Self> {
        let background_entropy = shannon_entropy(corpus.alphabet().frequencies());
        if !(background_entropy > 0.0) {
            return Err(MinsetError::Evaluation(format!(
                "background entropy of alphabet {} is not positive",
                corpus.alphabet().name()
            )));
        }

        Ok(Self {
            corpus,
            oracle,
            word_len,
            bounds,
            background_entropy,
        })
    }

    pub fn background_entropy(&self) -> f64 {
        self.background_entropy
    }

    /// Score a delimiter-separated query; a query without letters scores 0.
    pub fn score_query(&self, query: &str) -> f64 {
        let alphabet = self.corpus.alphabet();
        let (counts, letters) = alphabet.letter_counts(query);
        if letters == 0 {
            return 0.0;
        }

        let frequencies: Vec<f64> = counts
            .iter()
            .map(|&c| c as f64 / letters as f64)
            .collect();
        let divergence = relative_entropy(&frequencies, alphabet.frequencies());
        let word_entropy = self.oracle.query_entropy(query, self.word_len);

        log::trace!(
            "query of {} letters: H={:.4} ({} words) D={:.4}",
            letters,
            word_entropy.entropy,
            word_entropy.symbol_count,
            divergence
        );

        (word_entropy.entropy / self.background_entropy) * (1.0 - divergence)
    }

    /// Score a single sequence as if it were the whole subset.
    pub fn score_sequence(&self, entry: &SequenceEntry) -> f64 {
        let mut query = String::with_capacity(entry.len() + 1);
        query.push_str(&entry.residues);
        query.push(SEQUENCE_DELIMITER);
        self.score_query(&query)
    }
}

impl<O: EntropyOracle> FitnessFunction for MinsetObjective<'_, O> {
    fn evaluate(&self, genome: &[Gene]) -> Result<f64> {
        if genome.len() != self.corpus.len() {
            return Err(MinsetError::Evaluation(format!(
                "genome has {} genes but the base set has {} sequences",
                genome.len(),
                self.corpus.len()
            )));
        }
        Ok(self.score_query(&self.corpus.selection_query(genome, self.bounds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Alphabet;
    use crate::engines::evaluation::oracle::{SuffixArrayOracle, WordEntropy};

    struct FixedOracle(f64);

    impl EntropyOracle for FixedOracle {
        fn query_entropy(&self, _query: &str, _word_len: usize) -> WordEntropy {
            WordEntropy {
                entropy: self.0,
                symbol_count: 1,
            }
        }
    }

    fn corpus() -> Corpus {
        let entry = |name: &str, residues: &str| SequenceEntry {
            name: name.to_string(),
            description: String::new(),
            residues: residues.to_string(),
        };
        Corpus::new(
            Alphabet::by_name("MV2000").unwrap(),
            vec![entry("a", "ARNDCQEGHILKMFPSTWYV"), entry("b", "AAAA")],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let corpus = corpus();
        let oracle = FixedOracle(3.0);
        let objective = MinsetObjective::new(&corpus, &oracle, 2, GeneBounds::new(0, 1)).unwrap();
        assert_eq!(objective.evaluate(&[0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_background_entropy_comes_from_alphabet_frequencies() {
        let corpus = corpus();
        let oracle = FixedOracle(1.0);
        let objective = MinsetObjective::new(&corpus, &oracle, 2, GeneBounds::new(0, 1)).unwrap();
        let expected = shannon_entropy(corpus.alphabet().frequencies());
        assert!(expected > 4.0 && expected < 4.33);
        assert_eq!(objective.background_entropy(), expected);
    }

    #[test]
    fn test_formula() {
        let corpus = corpus();
        let oracle = FixedOracle(2.0);
        let objective = MinsetObjective::new(&corpus, &oracle, 2, GeneBounds::new(0, 1)).unwrap();

        let query = corpus.selection_query(&[0, 1], GeneBounds::new(0, 1));
        let freq = corpus.alphabet().letter_frequencies(&query);
        let d = relative_entropy(&freq, corpus.alphabet().frequencies());
        let expected = 2.0 / objective.background_entropy() * (1.0 - d);

        assert!((objective.evaluate(&[0, 1]).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_genome_length_mismatch() {
        let corpus = corpus();
        let oracle = SuffixArrayOracle::build(corpus.reference(), SEQUENCE_DELIMITER);
        let objective = MinsetObjective::new(&corpus, &oracle, 2, GeneBounds::new(0, 1)).unwrap();
        assert!(objective.evaluate(&[1]).is_err());
    }

    #[test]
    fn test_diverse_sequence_beats_repetitive_one() {
        let corpus = corpus();
        let oracle = SuffixArrayOracle::build(corpus.reference(), SEQUENCE_DELIMITER);
        let objective = MinsetObjective::new(&corpus, &oracle, 2, GeneBounds::new(0, 1)).unwrap();
        let diverse = objective.score_sequence(&corpus.entries()[0]);
        let repetitive = objective.score_sequence(&corpus.entries()[1]);
        assert!(diverse > repetitive);
    }
}

use super::traits::ConfigSection;
use crate::data::alphabet::Alphabet;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input corpus and objective parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinsetConfig {
    /// File listing one sequence identifier per line.
    pub baseset: PathBuf,
    pub seqdir: PathBuf,
    pub sequence_extension: String,
    pub alphabet: String,
    /// Maximum share of selected sequences, in percent.
    pub subsetsize: f64,
    pub kwordlength: usize,
}

impl Default for MinsetConfig {
    fn default() -> Self {
        Self {
            baseset: PathBuf::from("masterfilelist"),
            seqdir: PathBuf::from("fastas/"),
            sequence_extension: "tseq".to_string(),
            alphabet: "TOP2006".to_string(),
            subsetsize: 20.0,
            kwordlength: 2,
        }
    }
}

impl MinsetConfig {
    /// Path of the FASTA file for sequence `name`.
    pub fn sequence_path(&self, name: &str) -> PathBuf {
        self.seqdir
            .join(format!("{}.{}", name, self.sequence_extension))
    }

    /// Upper bound on selected genes for `gene_count` sequences, or `None`
    /// when the whole base set may be selected.
    pub fn max_selected(&self, gene_count: usize) -> Option<usize> {
        if self.subsetsize >= 100.0 {
            None
        } else {
            Some((gene_count as f64 * self.subsetsize / 100.0).floor() as usize)
        }
    }
}

impl ConfigSection for MinsetConfig {
    fn section_name() -> &'static str {
        "minset"
    }

    fn validate(&self) -> Result<()> {
        if !(self.subsetsize > 0.0 && self.subsetsize <= 100.0) {
            return Err(Self::invalid(format!(
                "subsetsize must be in (0, 100], got {}",
                self.subsetsize
            )));
        }
        if self.kwordlength == 0 {
            return Err(Self::invalid("kwordlength must be positive"));
        }
        if self.sequence_extension.is_empty() {
            return Err(Self::invalid("sequence_extension must not be empty"));
        }
        Alphabet::by_name(&self.alphabet)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_path() {
        let config = MinsetConfig::default();
        assert_eq!(config.sequence_path("d1a"), PathBuf::from("fastas/d1a.tseq"));
    }

    #[test]
    fn test_max_selected() {
        let config = MinsetConfig::default();
        assert_eq!(config.max_selected(50), Some(10));
        assert_eq!(config.max_selected(9), Some(1));

        let all = MinsetConfig {
            subsetsize: 100.0,
            ..MinsetConfig::default()
        };
        assert_eq!(all.max_selected(50), None);
    }

    #[test]
    fn test_fractional_subset_size() {
        let config = MinsetConfig {
            subsetsize: 2.5,
            ..MinsetConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.max_selected(200), Some(5));
        assert_eq!(config.max_selected(119), Some(2));
    }

    #[test]
    fn test_subset_size_outside_range_is_rejected() {
        for subsetsize in [0.0, -1.5, 100.5, f64::NAN] {
            let config = MinsetConfig {
                subsetsize,
                ..MinsetConfig::default()
            };
            assert!(config.validate().is_err(), "{}", subsetsize);
        }
    }

    #[test]
    fn test_fractional_subset_size_from_toml() {
        let config: MinsetConfig = toml::from_str("subsetsize = 7.5\nkwordlength = 3\n").unwrap();
        assert_eq!(config.subsetsize, 7.5);
        assert_eq!(config.kwordlength, 3);
        assert_eq!(config.alphabet, "TOP2006");
    }

    #[test]
    fn test_unknown_alphabet_is_rejected() {
        let config = MinsetConfig {
            alphabet: "DNA".to_string(),
            ..MinsetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

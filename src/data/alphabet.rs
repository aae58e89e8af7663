use crate::error::{MinsetError, Result};

/// Amino acid frequencies (ARNDCQEGHILKMFPSTWYV).
/// Mueller, T. & Vingron, M., J Comp Biol (2000) 7:761-776, Table 3.
const MV2000: &[f64] = &[
    0.0771, 0.0501, 0.0462, 0.0538, 0.0146, 0.0409, 0.0634, 0.0656, 0.0219, 0.0592, 0.0976,
    0.0592, 0.0221, 0.0414, 0.0477, 0.0707, 0.0568, 0.0127, 0.0324, 0.0669,
];

/// Structural alphabet frequencies (aAVWZBCDEOSRQIFUPHGYJKLNMTX).
/// Camproux, A.C., Gautier, R. and Tuffery, P., J Mol Biol (2004) 339:591-605, Table 1.
const CGT2004: &[f64] = &[
    0.026, 0.126, 0.056, 0.053, 0.045, 0.047, 0.018, 0.020, 0.020, 0.015, 0.032, 0.017, 0.041,
    0.029, 0.019, 0.020, 0.044, 0.027, 0.034, 0.020, 0.020, 0.041, 0.051, 0.049, 0.053, 0.030,
    0.047,
];

/// Topology alphabet (ABCDEFGHIJKLabcdefghijkl), derived from concatenated
/// SCOP 1.67 topology strings.
const TOP2006: &[f64] = &[
    0.113757, 0.015368, 0.004562, 0.087518, 0.007862, 0.003041, 0.090818, 0.006147, 0.002653,
    0.104665, 0.025689, 0.007150, 0.156950, 0.041737, 0.021904, 0.107221, 0.020674, 0.011065,
    0.093536, 0.020480, 0.009318, 0.027113, 0.013459, 0.007312,
];

/// Coding alphabet with its background letter frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alphabet {
    name: &'static str,
    code: &'static str,
    frequencies: &'static [f64],
    description: &'static str,
}

const ALPHABETS: &[Alphabet] = &[
    Alphabet {
        name: "MV2000",
        code: "ARNDCQEGHILKMFPSTWYV",
        frequencies: MV2000,
        description: "amino acids (Mueller and Vingron 2000)",
    },
    Alphabet {
        name: "CGT2004",
        code: "aAVWZBCDEOSRQIFUPHGYJKLNMTX",
        frequencies: CGT2004,
        description: "structural fragments (Camproux et al. 2004)",
    },
    Alphabet {
        name: "TOP2006",
        code: "ABCDEFGHIJKLabcdefghijkl",
        frequencies: TOP2006,
        description: "topology code (Kleinjung 2006)",
    },
];

impl Alphabet {
    /// Look up a built-in alphabet by name.
    pub fn by_name(name: &str) -> Result<Alphabet> {
        ALPHABETS
            .iter()
            .find(|a| a.name == name)
            .copied()
            .ok_or_else(|| {
                MinsetError::Configuration(format!(
                    "alphabet '{}' not implemented; available: {}",
                    name,
                    Self::available()
                        .iter()
                        .map(|a| a.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }

    pub fn available() -> &'static [Alphabet] {
        ALPHABETS
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Background frequencies, aligned with [`Alphabet::code`].
    pub fn frequencies(&self) -> &'static [f64] {
        self.frequencies
    }

    /// Alphabets with lower-case code letters must not be case-folded.
    pub fn is_case_sensitive(&self) -> bool {
        self.code.bytes().any(|b| b.is_ascii_lowercase())
    }

    pub fn index_of(&self, letter: u8) -> Option<usize> {
        self.code.bytes().position(|c| c == letter)
    }

    /// Count each code letter in `text`; non-letters are ignored.
    ///
    /// Returns the per-code counts and the total number of letters seen,
    /// including letters outside the code.
    pub fn letter_counts(&self, text: &str) -> (Vec<usize>, usize) {
        let mut counts = vec![0; self.len()];
        let mut letters = 0;
        for b in text.bytes().filter(|b| b.is_ascii_alphabetic()) {
            letters += 1;
            if let Some(i) = self.index_of(b) {
                counts[i] += 1;
            }
        }
        (counts, letters)
    }

    /// Relative frequency of each code letter among all letters of `text`.
    pub fn letter_frequencies(&self, text: &str) -> Vec<f64> {
        let (counts, letters) = self.letter_counts(text);
        if letters == 0 {
            return vec![0.0; self.len()];
        }
        counts
            .into_iter()
            .map(|c| c as f64 / letters as f64)
            .collect()
    }
}

/// Shannon term `-p * log2(p)` for a single probability.
pub fn shannon(p: f64) -> f64 {
    -(p * p.log2())
}

/// Shannon entropy in bits; zero probabilities contribute nothing.
pub fn shannon_entropy(p: &[f64]) -> f64 {
    p.iter().filter(|&&pi| pi != 0.0).map(|&pi| shannon(pi)).sum()
}

/// Relative entropy (Kullback-Leibler divergence) of `p` from `q`, in bits.
///
/// Terms where either probability is zero are skipped. Extra elements of the
/// longer slice are ignored.
pub fn relative_entropy(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q)
        .filter(|(&pi, &qi)| pi != 0.0 && qi != 0.0)
        .map(|(&pi, &qi)| pi * (pi / qi).log2())
        .sum()
}

/// Shannon entropy of the empirical distribution given by `counts`.
pub fn entropy_of_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&c| shannon(c as f64 / total as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_two_symbol_entropy_is_one_bit() {
        assert!((shannon_entropy(&[0.5, 0.5]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_certain_outcome_has_zero_entropy() {
        assert_eq!(shannon_entropy(&[1.0]), 0.0);
        assert_eq!(shannon_entropy(&[0.0, 1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_relative_entropy_of_identical_distributions() {
        let p = [0.25, 0.25, 0.5];
        assert!(relative_entropy(&p, &p).abs() < 1e-12);
    }

    #[test]
    fn test_relative_entropy_skips_zero_terms() {
        // Only the first term survives: 1.0 * log2(1.0 / 0.5) = 1.
        let d = relative_entropy(&[1.0, 0.0, 0.3], &[0.5, 0.5, 0.0]);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_of_counts() {
        assert!((entropy_of_counts([3, 3, 3, 3]) - 2.0).abs() < 1e-12);
        assert_eq!(entropy_of_counts([0, 0]), 0.0);
    }
}

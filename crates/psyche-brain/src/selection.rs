use psyche_core::DeterministicRng;

use crate::config::{MultiSelectCount, SelectionConfig};
use crate::error::{BrainError, Result};

/// Turns per-choice utilities into chosen indices.
///
/// Single-select draws once from a temperature-scaled softmax. Multi-select ranks by utility
/// (ties keep option order) and takes the top `k`. NaN utilities are treated as `-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    temperature: f64,
    count: MultiSelectCount,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}

impl SelectionPolicy {
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            temperature: config.effective_temperature(),
            count: config.multi_select_count,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Softmax probabilities, `p_i = exp(U_i/τ) / Σ exp(U_j/τ)`.
    ///
    /// Computed relative to the maximum so large utilities cannot overflow. If some utilities are
    /// `+inf` they share the mass; if none is above `-inf` the distribution is uniform.
    pub fn probabilities(&self, utilities: &[f64]) -> Vec<f64> {
        let n = utilities.len();
        if n == 0 {
            return Vec::new();
        }
        let u: Vec<f64> = utilities.iter().copied().map(sanitize).collect();
        let max = u.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == f64::INFINITY {
            let top = u.iter().filter(|&&x| x == f64::INFINITY).count() as f64;
            return u
                .iter()
                .map(|&x| if x == f64::INFINITY { 1.0 / top } else { 0.0 })
                .collect();
        }
        if max == f64::NEG_INFINITY {
            return vec![1.0 / n as f64; n];
        }

        let weights: Vec<f64> = u
            .iter()
            .map(|&x| ((x - max) / self.temperature).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect()
    }

    /// Choose indices for an event with `[min_select, max_select]` cardinality.
    ///
    /// `max_select <= 1` is single-select. The result is sorted ascending.
    pub fn select<R: DeterministicRng>(
        &self,
        utilities: &[f64],
        rng: &mut R,
        min_select: u32,
        max_select: u32,
    ) -> Result<Vec<usize>> {
        if utilities.is_empty() {
            return Err(BrainError::NoCandidates);
        }

        let hi = max_select.max(min_select) as usize;
        if hi <= 1 {
            return Ok(vec![self.draw(utilities, rng)]);
        }

        let n = utilities.len();
        let hi = hi.min(n);
        let lo = (min_select as usize).min(hi);
        let k = match self.count {
            MultiSelectCount::Max => hi,
            MultiSelectCount::Min => lo,
            MultiSelectCount::Random => lo + rng.next_below((hi - lo + 1) as u64) as usize,
        };

        let mut ranked: Vec<usize> = (0..n).collect();
        ranked.sort_by(|&a, &b| sanitize(utilities[b]).total_cmp(&sanitize(utilities[a])));
        let mut chosen: Vec<usize> = ranked.into_iter().take(k).collect();
        chosen.sort_unstable();
        Ok(chosen)
    }

    /// One softmax draw. Always consumes exactly one value from `rng`.
    fn draw<R: DeterministicRng>(&self, utilities: &[f64], rng: &mut R) -> usize {
        let probs = self.probabilities(utilities);
        let roll = rng.next_f64_unit();

        let mut cumulative = 0.0;
        let mut last_viable = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_viable = i;
            if roll < cumulative {
                return i;
            }
        }
        // Rounding left the cumulative sum just under 1.
        last_viable
    }
}

fn sanitize(u: f64) -> f64 {
    if u.is_nan() {
        f64::NEG_INFINITY
    } else {
        u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psyche_core::SplitMix64;

    fn policy(temperature: f64, count: MultiSelectCount) -> SelectionPolicy {
        SelectionPolicy::from_config(&SelectionConfig {
            temperature,
            multi_select_count: count,
        })
    }

    #[test]
    fn empty_utilities_are_a_fault() {
        let mut rng = SplitMix64::new(1);
        let err = SelectionPolicy::default()
            .select(&[], &mut rng, 1, 1)
            .unwrap_err();
        assert_eq!(err, BrainError::NoCandidates);
    }

    #[test]
    fn probabilities_sum_to_one_and_order_by_utility() {
        let p = policy(0.5, MultiSelectCount::Random).probabilities(&[0.2, 1.0, -0.4]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[1] > p[0] && p[0] > p[2]);
    }

    #[test]
    fn low_temperature_is_nearly_argmax() {
        let policy = policy(0.001, MultiSelectCount::Random);
        let mut rng = SplitMix64::new(9);
        for _ in 0..200 {
            assert_eq!(policy.select(&[0.1, 0.9, 0.3], &mut rng, 1, 1).unwrap(), vec![1]);
        }
    }

    #[test]
    fn nan_is_never_drawn() {
        let p = SelectionPolicy::default().probabilities(&[f64::NAN, 0.0]);
        assert_eq!(p, vec![0.0, 1.0]);

        let all_nan = SelectionPolicy::default().probabilities(&[f64::NAN, f64::NAN]);
        assert_eq!(all_nan, vec![0.5, 0.5]);
    }

    #[test]
    fn infinite_utilities_share_the_mass() {
        let p = SelectionPolicy::default().probabilities(&[f64::INFINITY, 3.0, f64::INFINITY]);
        assert_eq!(p, vec![0.5, 0.0, 0.5]);
    }

    #[test]
    fn multi_select_takes_top_k_with_stable_ties() {
        let policy = policy(0.15, MultiSelectCount::Max);
        let mut rng = SplitMix64::new(3);
        let chosen = policy
            .select(&[0.5, 0.9, 0.5, 0.1, 0.5], &mut rng, 1, 3)
            .unwrap();
        assert_eq!(chosen, vec![0, 1, 2]);
    }

    #[test]
    fn multi_select_bounds_clamp_to_candidate_count() {
        let mut rng = SplitMix64::new(3);
        let chosen = policy(0.15, MultiSelectCount::Min)
            .select(&[0.1, 0.2], &mut rng, 4, 6)
            .unwrap();
        assert_eq!(chosen, vec![0, 1]);
    }

    #[test]
    fn random_k_stays_within_bounds() {
        let policy = policy(0.15, MultiSelectCount::Random);
        let utilities = [0.3, 0.1, 0.7, 0.2, 0.9, 0.4];
        let mut seen = [false; 7];
        for seed in 0..256 {
            let mut rng = SplitMix64::new(seed);
            let chosen = policy.select(&utilities, &mut rng, 2, 4).unwrap();
            assert!((2..=4).contains(&chosen.len()));
            seen[chosen.len()] = true;
        }
        assert!(seen[2] && seen[3] && seen[4]);
    }
}

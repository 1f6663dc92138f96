//! Appraisal resolution: one choice to a six-dimensional normalized appraisal.
//!
//! Authored appraisal fields win. Anything the author left out is derived from the choice's trait
//! deltas with a closed-form fallback, so resolution is total and deterministic.

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, ChoiceEffects};
use crate::math::{clamp01, clamp_signed};

/// Trait deltas are authored in trait points; their mean is divided by this to get `t`.
pub const TRAIT_DELTA_NORMALIZER: f64 = 10.0;

/// Fallback social soothing, independent of the choice.
pub const FALLBACK_SOCIAL_SOOTHING: f64 = 0.30;

/// How a choice looks to the scoring models. All fields in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppraisalVector {
    pub comfort_value: f64,
    pub energy_cost: f64,
    pub safety_risk: f64,
    pub novelty_load: f64,
    pub familiarity: f64,
    pub social_soothing: f64,
}

impl AppraisalVector {
    /// Closed-form appraisal for a signed trait signal `t ∈ [-1, 1]`.
    pub fn fallback(t: f64) -> Self {
        let t = clamp_signed(t);
        let pos = t.max(0.0);
        let neg = (-t).max(0.0);
        let mag = t.abs();
        Self {
            comfort_value: clamp01(0.45 + 0.35 * t),
            energy_cost: clamp01(0.30 + 0.30 * pos + 0.15 * neg),
            safety_risk: clamp01(0.20 + 0.40 * neg),
            novelty_load: clamp01(0.35 + 0.40 * mag),
            familiarity: clamp01(0.55 - 0.35 * mag),
            social_soothing: FALLBACK_SOCIAL_SOOTHING,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            comfort_value: clamp01(self.comfort_value),
            energy_cost: clamp01(self.energy_cost),
            safety_risk: clamp01(self.safety_risk),
            novelty_load: clamp01(self.novelty_load),
            familiarity: clamp01(self.familiarity),
            social_soothing: clamp01(self.social_soothing),
        }
    }
}

/// `clamp(mean(trait deltas) / TRAIT_DELTA_NORMALIZER, -1, 1)`, or 0 without trait deltas.
///
/// Non-finite deltas are skipped.
pub fn trait_signal(effects: &ChoiceEffects) -> f64 {
    let (sum, count) = effects
        .traits
        .values()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    clamp_signed(sum / count as f64 / TRAIT_DELTA_NORMALIZER)
}

/// Resolve the appraisal of `choice`.
pub fn resolve_appraisal(choice: &Choice) -> AppraisalVector {
    let derived = AppraisalVector::fallback(trait_signal(&choice.effects));
    let Some(authored) = choice.appraisal else {
        return derived;
    };

    let pick = |field: Option<f64>, fallback: f64| match field {
        Some(v) if !v.is_nan() => clamp01(v),
        _ => fallback,
    };
    AppraisalVector {
        comfort_value: pick(authored.comfort_value, derived.comfort_value),
        energy_cost: pick(authored.energy_cost, derived.energy_cost),
        safety_risk: pick(authored.safety_risk, derived.safety_risk),
        novelty_load: pick(authored.novelty_load, derived.novelty_load),
        familiarity: pick(authored.familiarity, derived.familiarity),
        social_soothing: pick(authored.social_soothing, derived.social_soothing),
    }
}

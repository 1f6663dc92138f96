use crate::appraisal::AppraisalVector;
use crate::choice::{stat_keys, ChoiceEffects};
use crate::config::InfantTuning;
use crate::math::{clamp01, lerp};
use crate::profile::InternalState;
use crate::traits::InfantDrive;

/// Utility of one candidate plus the overload pressure it would cause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfantScore {
    pub utility: f64,
    /// `clamp01(0.6·stimulation + 0.4·last_novelty + novelty_load − self_regulation)`.
    pub overload: f64,
}

/// Temperament-driven scoring for infant-stage agents.
///
/// Scoring is pure. [`advance`](Self::advance) is the only state transition and runs once per
/// chosen option after selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfantModel {
    tuning: InfantTuning,
    drive: InfantDrive,
}

impl InfantModel {
    pub fn new(tuning: InfantTuning, drive: InfantDrive) -> Self {
        Self {
            tuning: tuning.sanitized(),
            drive,
        }
    }

    pub fn drive(&self) -> &InfantDrive {
        &self.drive
    }

    pub fn score(&self, a: &AppraisalVector, s: &InternalState) -> InfantScore {
        let d = &self.drive;
        let t = &self.tuning;

        let need_comfort = 1.0 - (0.5 * s.satiety_level + 0.5 * s.security_level);
        let energy_margin = s.energy_level - a.energy_cost;
        let novelty_mismatch = (a.novelty_load - d.novelty_tolerance).abs();
        let overload = clamp01(
            0.6 * s.stimulation_load + 0.4 * s.last_event_novelty + a.novelty_load
                - d.self_regulation,
        );

        let comfort_term = a.comfort_value * (0.55 + 0.45 * d.comfort_bias)
            + a.social_soothing * (0.35 + 0.65 * need_comfort)
            + a.familiarity * (0.20 + 0.30 * d.threat_sensitivity);
        let cost_term = a.energy_cost * (0.45 + 0.55 * (1.0 - d.energy_budget))
            + a.safety_risk * (0.40 + 0.60 * d.threat_sensitivity);
        let fit_term = 0.30 * (1.0 - novelty_mismatch) - 0.35 * overload;

        let mut utility = comfort_term - cost_term + fit_term;
        if energy_margin < t.energy_deficit_threshold {
            utility -= t.energy_deficit_penalty;
        }
        if a.safety_risk > t.risk_threshold && d.threat_sensitivity > t.threat_threshold {
            utility -= t.risk_penalty;
        }

        InfantScore { utility, overload }
    }

    /// State after living through the chosen option.
    pub fn advance(
        &self,
        s: &InternalState,
        chosen: &AppraisalVector,
        overload: f64,
        effects: &ChoiceEffects,
    ) -> InternalState {
        let t = &self.tuning;
        let scale = t.stat_delta_scale;

        InternalState {
            energy_level: s.energy_level - t.energy_spend_rate * chosen.energy_cost
                + effects.stat(stat_keys::ENERGY) / scale,
            satiety_level: s.satiety_level + effects.stat(stat_keys::SATIETY) / scale,
            security_level: s.security_level
                + t.security_soothing_rate * (chosen.social_soothing - chosen.safety_risk)
                + effects.stat(stat_keys::SECURITY) / scale,
            stimulation_load: lerp(s.stimulation_load, overload, t.stimulation_blend),
            last_event_novelty: chosen.novelty_load,
        }
        .clamped()
    }
}

use crate::appraisal::{resolve_appraisal, AppraisalVector, TRAIT_DELTA_NORMALIZER};
use crate::choice::Choice;
use crate::config::GenericWeights;
use crate::math::clamp_signed;
use crate::traits::{BigFive, GenericDrive, Personality};

/// What the generic model looks at for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericFeatures {
    pub appraisal: AppraisalVector,
    /// Mean agreement between the choice's Big-Five deltas and the agent's personality, in
    /// `[-1, 1]`. Zero when the choice touches no Big-Five trait.
    pub alignment: f64,
}

impl GenericFeatures {
    pub fn from_choice(choice: &Choice, personality: &Personality) -> Self {
        Self {
            appraisal: resolve_appraisal(choice),
            alignment: trait_alignment(choice, personality),
        }
    }
}

/// Agents are drawn to choices that push them further the way they already lean: an extravert
/// likes gaining extraversion, an introvert does not.
pub fn trait_alignment(choice: &Choice, personality: &Personality) -> f64 {
    let (sum, count) = choice
        .effects
        .traits
        .iter()
        .filter(|(_, delta)| delta.is_finite())
        .filter_map(|(key, delta)| BigFive::from_key(key).map(|t| (t, *delta)))
        .fold((0.0, 0usize), |(sum, n), (t, delta)| {
            let push = clamp_signed(delta / TRAIT_DELTA_NORMALIZER);
            (sum + personality.z(t) * push, n + 1)
        });
    if count == 0 {
        0.0
    } else {
        clamp_signed(sum / count as f64)
    }
}

/// Personality-driven scoring for every agent the infant model does not cover.
///
/// The weight table comes from configuration; this type only fixes which features each weight
/// multiplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericModel {
    weights: GenericWeights,
    drive: GenericDrive,
}

impl GenericModel {
    pub fn new(weights: GenericWeights, drive: GenericDrive) -> Self {
        Self { weights, drive }
    }

    pub fn drive(&self) -> &GenericDrive {
        &self.drive
    }

    pub fn score(&self, f: &GenericFeatures) -> f64 {
        let w = &self.weights;
        let d = &self.drive;
        let a = &f.appraisal;

        let attraction = w.alignment * f.alignment
            + w.comfort * a.comfort_value
            + w.novelty * a.novelty_load * (d.curiosity - d.caution)
            + w.social * a.social_soothing * d.sociability
            + w.familiarity * a.familiarity * d.caution;
        let cost = w.energy_cost * a.energy_cost * (1.0 - 0.5 * (d.stamina + d.diligence))
            + w.risk * a.safety_risk * d.caution;

        let mut utility = attraction - cost;
        if a.safety_risk > w.risk_threshold && d.caution > w.caution_threshold {
            utility -= w.risk_penalty;
        }
        if a.energy_cost - d.stamina > w.exhaustion_threshold {
            utility -= w.exhaustion_penalty;
        }
        utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitProjection;

    #[test]
    fn alignment_follows_personality_lean() {
        let extravert = Personality {
            extraversion: 100.0,
            ..Personality::default()
        };
        let introvert = Personality {
            extraversion: 0.0,
            ..Personality::default()
        };
        let party = Choice::new().with_trait("extraversion", 5.0);

        assert!((trait_alignment(&party, &extravert) - 0.5).abs() < 1e-12);
        assert!((trait_alignment(&party, &introvert) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_traits_do_not_align() {
        let choice = Choice::new().with_trait("charisma", 10.0);
        assert_eq!(trait_alignment(&choice, &Personality::default()), 0.0);
    }

    #[test]
    fn risk_penalty_hits_cautious_agents_only() {
        let anxious = Personality {
            neuroticism: 100.0,
            conscientiousness: 100.0,
            ..Personality::default()
        };
        let model = GenericModel::new(GenericWeights::default(), anxious.project());
        assert!(model.drive().caution > 0.6);

        let dare = GenericFeatures {
            appraisal: AppraisalVector {
                safety_risk: 0.9,
                ..AppraisalVector::fallback(0.0)
            },
            alignment: 0.0,
        };
        let safe = GenericFeatures {
            appraisal: AppraisalVector {
                safety_risk: 0.7,
                ..AppraisalVector::fallback(0.0)
            },
            alignment: 0.0,
        };

        let d = model.drive();
        let gap = model.score(&safe) - model.score(&dare);
        let linear = GenericWeights::default().risk * 0.2 * d.caution;
        assert!((gap - linear - GenericWeights::default().risk_penalty).abs() < 1e-9);
    }
}

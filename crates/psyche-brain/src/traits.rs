//! Trait projection: raw temperament/personality scores to normalized drive parameters.
//!
//! Every raw trait lives on a 0–100 scale. Projection centres it to `z ∈ [-1, 1]`, takes a fixed
//! weighted sum around a 0.5 base and clamps the result into `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::math::{clamp01, clamp_signed};

pub const TRAIT_MIDPOINT: f64 = 50.0;
pub const TRAIT_HALF_RANGE: f64 = 50.0;

const DRIVE_BASE: f64 = 0.5;

/// Centre and scale a raw trait score into `[-1, 1]`. NaN maps to the midpoint.
pub fn center(raw: f64) -> f64 {
    clamp_signed((raw - TRAIT_MIDPOINT) / TRAIT_HALF_RANGE)
}

/// Maps a raw trait vector to the drive parameters its scoring model consumes.
pub trait TraitProjection {
    type Drive;

    fn project(&self) -> Self::Drive;
}

type WeightRow<T> = &'static [(T, f64)];

fn weighted<T: Copy>(row: WeightRow<T>, z: impl Fn(T) -> f64) -> f64 {
    clamp01(DRIVE_BASE + row.iter().map(|&(t, w)| w * z(t)).sum::<f64>())
}

// ----------------------------------------------------------------------------
// Infant temperament
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperamentTrait {
    Activity,
    Rhythmicity,
    Approach,
    Adaptability,
    Intensity,
    Mood,
    Persistence,
    Distractibility,
    Threshold,
}

/// Nine-dimension infant temperament, each on 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperament {
    pub activity: f64,
    pub rhythmicity: f64,
    /// Approach (high) versus withdrawal (low) toward new situations.
    pub approach: f64,
    pub adaptability: f64,
    pub intensity: f64,
    /// Positive (high) versus negative (low) baseline mood.
    pub mood: f64,
    pub persistence: f64,
    pub distractibility: f64,
    /// Sensory threshold; low means easily overwhelmed.
    pub threshold: f64,
}

impl Default for Temperament {
    fn default() -> Self {
        Self {
            activity: TRAIT_MIDPOINT,
            rhythmicity: TRAIT_MIDPOINT,
            approach: TRAIT_MIDPOINT,
            adaptability: TRAIT_MIDPOINT,
            intensity: TRAIT_MIDPOINT,
            mood: TRAIT_MIDPOINT,
            persistence: TRAIT_MIDPOINT,
            distractibility: TRAIT_MIDPOINT,
            threshold: TRAIT_MIDPOINT,
        }
    }
}

impl Temperament {
    pub fn get(&self, t: TemperamentTrait) -> f64 {
        match t {
            TemperamentTrait::Activity => self.activity,
            TemperamentTrait::Rhythmicity => self.rhythmicity,
            TemperamentTrait::Approach => self.approach,
            TemperamentTrait::Adaptability => self.adaptability,
            TemperamentTrait::Intensity => self.intensity,
            TemperamentTrait::Mood => self.mood,
            TemperamentTrait::Persistence => self.persistence,
            TemperamentTrait::Distractibility => self.distractibility,
            TemperamentTrait::Threshold => self.threshold,
        }
    }

    pub fn z(&self, t: TemperamentTrait) -> f64 {
        center(self.get(t))
    }
}

/// Drive parameters for the infant model. All fields in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfantDrive {
    pub novelty_tolerance: f64,
    pub threat_sensitivity: f64,
    pub energy_budget: f64,
    pub self_regulation: f64,
    pub comfort_bias: f64,
}

mod infant_table {
    use super::TemperamentTrait::{self, *};
    use super::WeightRow;

    pub const NOVELTY_TOLERANCE: WeightRow<TemperamentTrait> =
        &[(Approach, 0.30), (Adaptability, 0.15), (Mood, 0.05)];
    pub const THREAT_SENSITIVITY: WeightRow<TemperamentTrait> =
        &[(Threshold, -0.25), (Approach, -0.15), (Intensity, 0.10)];
    pub const ENERGY_BUDGET: WeightRow<TemperamentTrait> =
        &[(Activity, 0.30), (Persistence, 0.10), (Rhythmicity, 0.10)];
    pub const SELF_REGULATION: WeightRow<TemperamentTrait> =
        &[(Adaptability, 0.20), (Rhythmicity, 0.15), (Distractibility, -0.15)];
    pub const COMFORT_BIAS: WeightRow<TemperamentTrait> =
        &[(Mood, -0.20), (Intensity, 0.15), (Adaptability, -0.15)];
}

impl TraitProjection for Temperament {
    type Drive = InfantDrive;

    fn project(&self) -> InfantDrive {
        let z = |t| self.z(t);
        InfantDrive {
            novelty_tolerance: weighted(infant_table::NOVELTY_TOLERANCE, z),
            threat_sensitivity: weighted(infant_table::THREAT_SENSITIVITY, z),
            energy_budget: weighted(infant_table::ENERGY_BUDGET, z),
            self_regulation: weighted(infant_table::SELF_REGULATION, z),
            comfort_bias: weighted(infant_table::COMFORT_BIAS, z),
        }
    }
}

// ----------------------------------------------------------------------------
// Big-Five personality
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigFive {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFive {
    pub const ALL: [BigFive; 5] = [
        BigFive::Openness,
        BigFive::Conscientiousness,
        BigFive::Extraversion,
        BigFive::Agreeableness,
        BigFive::Neuroticism,
    ];

    /// Key under which authored content names this trait in effect deltas.
    pub fn key(self) -> &'static str {
        match self {
            BigFive::Openness => "openness",
            BigFive::Conscientiousness => "conscientiousness",
            BigFive::Extraversion => "extraversion",
            BigFive::Agreeableness => "agreeableness",
            BigFive::Neuroticism => "neuroticism",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Big-Five personality, each facet on 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            openness: TRAIT_MIDPOINT,
            conscientiousness: TRAIT_MIDPOINT,
            extraversion: TRAIT_MIDPOINT,
            agreeableness: TRAIT_MIDPOINT,
            neuroticism: TRAIT_MIDPOINT,
        }
    }
}

impl Personality {
    pub fn get(&self, t: BigFive) -> f64 {
        match t {
            BigFive::Openness => self.openness,
            BigFive::Conscientiousness => self.conscientiousness,
            BigFive::Extraversion => self.extraversion,
            BigFive::Agreeableness => self.agreeableness,
            BigFive::Neuroticism => self.neuroticism,
        }
    }

    pub fn z(&self, t: BigFive) -> f64 {
        center(self.get(t))
    }
}

/// Drive parameters for the generic model. All fields in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenericDrive {
    pub curiosity: f64,
    pub caution: f64,
    pub sociability: f64,
    pub diligence: f64,
    pub stamina: f64,
}

mod generic_table {
    use super::BigFive::{self, *};
    use super::WeightRow;

    pub const CURIOSITY: WeightRow<BigFive> = &[(Openness, 0.35), (Extraversion, 0.15)];
    pub const CAUTION: WeightRow<BigFive> =
        &[(Neuroticism, 0.25), (Conscientiousness, 0.15), (Openness, -0.10)];
    pub const SOCIABILITY: WeightRow<BigFive> = &[(Extraversion, 0.30), (Agreeableness, 0.20)];
    pub const DILIGENCE: WeightRow<BigFive> = &[(Conscientiousness, 0.40), (Neuroticism, -0.10)];
    pub const STAMINA: WeightRow<BigFive> =
        &[(Neuroticism, -0.25), (Extraversion, 0.15), (Conscientiousness, 0.10)];
}

impl TraitProjection for Personality {
    type Drive = GenericDrive;

    fn project(&self) -> GenericDrive {
        let z = |t| self.z(t);
        GenericDrive {
            curiosity: weighted(generic_table::CURIOSITY, z),
            caution: weighted(generic_table::CAUTION, z),
            sociability: weighted(generic_table::SOCIABILITY, z),
            diligence: weighted(generic_table::DILIGENCE, z),
            stamina: weighted(generic_table::STAMINA, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_traits_project_to_half() {
        let d = Temperament::default().project();
        assert_eq!(d.novelty_tolerance, 0.5);
        assert_eq!(d.threat_sensitivity, 0.5);
        assert_eq!(d.comfort_bias, 0.5);

        let g = Personality::default().project();
        assert_eq!(g.curiosity, 0.5);
        assert_eq!(g.stamina, 0.5);
    }

    #[test]
    fn approach_raises_novelty_tolerance() {
        let bold = Temperament {
            approach: 100.0,
            ..Temperament::default()
        };
        let shy = Temperament {
            approach: 0.0,
            ..Temperament::default()
        };
        assert!(bold.project().novelty_tolerance > shy.project().novelty_tolerance);
    }

    #[test]
    fn low_threshold_raises_threat_sensitivity() {
        let sensitive = Temperament {
            threshold: 0.0,
            ..Temperament::default()
        };
        assert!((sensitive.project().threat_sensitivity - 0.75).abs() < 1e-12);
    }

    #[test]
    fn out_of_scale_input_is_clamped() {
        assert_eq!(center(400.0), 1.0);
        assert_eq!(center(-30.0), -1.0);
        assert_eq!(center(f64::NAN), 0.0);
    }

    #[test]
    fn big_five_keys_roundtrip() {
        for t in BigFive::ALL {
            assert_eq!(BigFive::from_key(t.key()), Some(t));
        }
        assert_eq!(BigFive::from_key("charisma"), None);
    }
}

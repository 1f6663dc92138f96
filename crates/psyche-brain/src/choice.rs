//! Authored event content as the decision core sees it.
//!
//! Event loading belongs to the content pipeline; these types only describe the shape this crate
//! reads. Maps are ordered so any iteration over authored effects is reproducible.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::appraisal::AppraisalVector;

/// Stat keys the infant model reads when advancing internal state.
pub mod stat_keys {
    pub const ENERGY: &str = "energy";
    pub const SATIETY: &str = "satiety";
    pub const SECURITY: &str = "security";
}

/// Effect deltas a choice applies once resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceEffects {
    pub stats: BTreeMap<String, f64>,
    pub traits: BTreeMap<String, f64>,
    pub flags: BTreeSet<String>,
}

impl ChoiceEffects {
    /// Finite stat delta for `key`, or 0.
    pub fn stat(&self, key: &str) -> f64 {
        self.stats
            .get(key)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Explicit appraisal block. Each field is optional; absent fields take the derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoredAppraisal {
    pub comfort_value: Option<f64>,
    pub energy_cost: Option<f64>,
    pub safety_risk: Option<f64>,
    pub novelty_load: Option<f64>,
    pub familiarity: Option<f64>,
    pub social_soothing: Option<f64>,
}

impl From<AppraisalVector> for AuthoredAppraisal {
    fn from(v: AppraisalVector) -> Self {
        Self {
            comfort_value: Some(v.comfort_value),
            energy_cost: Some(v.energy_cost),
            safety_risk: Some(v.safety_risk),
            novelty_load: Some(v.novelty_load),
            familiarity: Some(v.familiarity),
            social_soothing: Some(v.social_soothing),
        }
    }
}

/// One option of a life event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub effects: ChoiceEffects,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appraisal: Option<AuthoredAppraisal>,
}

impl Choice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, key: impl Into<String>, delta: f64) -> Self {
        self.effects.stats.insert(key.into(), delta);
        self
    }

    pub fn with_trait(mut self, key: impl Into<String>, delta: f64) -> Self {
        self.effects.traits.insert(key.into(), delta);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.effects.flags.insert(flag.into());
        self
    }

    pub fn with_appraisal(mut self, appraisal: impl Into<AuthoredAppraisal>) -> Self {
        self.appraisal = Some(appraisal.into());
        self
    }
}

fn one() -> u32 {
    1
}

/// A life event offering one or more choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default = "one")]
    pub min_select: u32,
    #[serde(default = "one")]
    pub max_select: u32,
    /// Whether the infant model may score this event.
    #[serde(default)]
    pub infant_eligible: bool,
}

impl LifeEvent {
    pub fn new(id: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            choices,
            min_select: 1,
            max_select: 1,
            infant_eligible: false,
        }
    }

    pub fn with_selection(mut self, min_select: u32, max_select: u32) -> Self {
        self.min_select = min_select;
        self.max_select = max_select;
        self
    }

    pub fn infant_eligible(mut self, eligible: bool) -> Self {
        self.infant_eligible = eligible;
        self
    }

    pub fn is_multi_select(&self) -> bool {
        self.max_select.max(self.min_select) > 1
    }
}

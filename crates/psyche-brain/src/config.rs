//! Global decision-core configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Oldest age, in months, at which an agent may still be scored by the infant model.
///
/// Inclusive, and not configurable.
pub const INFANT_MODEL_MAX_AGE_MONTHS: u32 = 24;

/// Lower bound on the softmax temperature.
pub const MIN_TEMPERATURE: f64 = 1e-3;

/// Decision-core configuration, typically loaded from `brain.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    /// Enables the specialised infant model for eligible events.
    pub infant_model_enabled: bool,

    /// Emit one debug line per resolved decision.
    pub debug_logging: bool,

    pub selection: SelectionConfig,

    /// Penalties and state-update rates for the infant model.
    pub infant: InfantTuning,

    /// Term weights for the generic model.
    pub generic: GenericWeights,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            infant_model_enabled: false,
            debug_logging: false,
            selection: SelectionConfig::default(),
            infant: InfantTuning::default(),
            generic: GenericWeights::default(),
        }
    }
}

/// How many options a multi-select event takes within its `[min, max]` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectCount {
    Max,
    Min,
    /// Uniform in `[min, max]`, drawn from the decision's own random source.
    #[default]
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default)]
    pub multi_select_count: MultiSelectCount,
}

fn default_temperature() -> f64 {
    0.15
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            multi_select_count: MultiSelectCount::default(),
        }
    }
}

impl SelectionConfig {
    pub fn effective_temperature(&self) -> f64 {
        if self.temperature.is_nan() {
            default_temperature()
        } else {
            self.temperature.max(MIN_TEMPERATURE)
        }
    }
}

/// Tunables of the infant model.
///
/// The utility formula itself is fixed; these are the penalty gates around it and the rates at
/// which a resolved choice moves the internal state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfantTuning {
    /// Energy margin below which the deficit penalty applies.
    pub energy_deficit_threshold: f64,
    pub energy_deficit_penalty: f64,
    /// Safety risk above which a threat-sensitive infant is penalised.
    pub risk_threshold: f64,
    pub threat_threshold: f64,
    pub risk_penalty: f64,
    /// Weight of the chosen overload pressure when blending `stimulation_load`.
    pub stimulation_blend: f64,
    /// Fraction of the chosen energy cost drained from `energy_level`.
    pub energy_spend_rate: f64,
    /// Rate at which soothing minus risk moves `security_level`.
    pub security_soothing_rate: f64,
    /// Authored stat deltas are divided by this before being applied to state.
    pub stat_delta_scale: f64,
}

impl Default for InfantTuning {
    fn default() -> Self {
        Self {
            energy_deficit_threshold: -0.25,
            energy_deficit_penalty: 0.35,
            risk_threshold: 0.75,
            threat_threshold: 0.60,
            risk_penalty: 0.40,
            stimulation_blend: 0.5,
            energy_spend_rate: 0.10,
            security_soothing_rate: 0.10,
            stat_delta_scale: 100.0,
        }
    }
}

impl InfantTuning {
    /// Replaces unusable values with defaults and clamps rates into range. Idempotent.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let finite = |x: f64, fallback: f64| if x.is_finite() { x } else { fallback };
        Self {
            energy_deficit_threshold: finite(self.energy_deficit_threshold, d.energy_deficit_threshold)
                .clamp(-1.0, 1.0),
            energy_deficit_penalty: finite(self.energy_deficit_penalty, d.energy_deficit_penalty)
                .max(0.0),
            risk_threshold: finite(self.risk_threshold, d.risk_threshold).clamp(0.0, 1.0),
            threat_threshold: finite(self.threat_threshold, d.threat_threshold).clamp(0.0, 1.0),
            risk_penalty: finite(self.risk_penalty, d.risk_penalty).max(0.0),
            stimulation_blend: finite(self.stimulation_blend, d.stimulation_blend).clamp(0.0, 1.0),
            energy_spend_rate: finite(self.energy_spend_rate, d.energy_spend_rate).clamp(0.0, 1.0),
            security_soothing_rate: finite(self.security_soothing_rate, d.security_soothing_rate)
                .clamp(0.0, 1.0),
            stat_delta_scale: if self.stat_delta_scale.is_finite() && self.stat_delta_scale > 0.0 {
                self.stat_delta_scale
            } else {
                d.stat_delta_scale
            },
        }
    }
}

/// Weight table of the generic model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericWeights {
    /// How strongly a choice's trait deltas that match the agent's personality attract.
    pub alignment: f64,
    pub comfort: f64,
    pub novelty: f64,
    pub social: f64,
    pub familiarity: f64,
    pub energy_cost: f64,
    pub risk: f64,
    pub risk_threshold: f64,
    pub caution_threshold: f64,
    pub risk_penalty: f64,
    /// Energy cost in excess of stamina above which the exhaustion penalty applies.
    pub exhaustion_threshold: f64,
    pub exhaustion_penalty: f64,
}

impl Default for GenericWeights {
    fn default() -> Self {
        Self {
            alignment: 0.60,
            comfort: 0.40,
            novelty: 0.30,
            social: 0.30,
            familiarity: 0.20,
            energy_cost: 0.35,
            risk: 0.50,
            risk_threshold: 0.75,
            caution_threshold: 0.60,
            risk_penalty: 0.30,
            exhaustion_threshold: 0.40,
            exhaustion_penalty: 0.20,
        }
    }
}

impl BrainConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read brain config from {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse brain config from {}", path.display()))
    }

    /// Load from a directory, falling back to defaults when `brain.yaml` is absent.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("brain.yaml");
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("invalid brain config YAML")?;
        Ok(config.sanitized())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("invalid brain config JSON")?;
        Ok(config.sanitized())
    }

    pub fn sanitized(mut self) -> Self {
        self.infant = self.infant.sanitized();
        self
    }
}

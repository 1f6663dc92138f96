//! Per-agent brain profile and its load-time schema normalization.
//!
//! Profiles are persisted as JSON next to the rest of the agent record. Every load goes through
//! [`BrainProfile::normalize`], which accepts any older schema version:
//!
//! - v1: `version`, `infant_model_active`
//! - v2: adds optional `tuning` (per-agent override of the global infant tuning)
//! - v3: adds `state`
//!
//! Missing fields get defaults; only fields of the wrong JSON type fail.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::{BrainConfig, InfantTuning};
use crate::error::{BrainError, Result};
use crate::math::clamp01;

pub const CURRENT_PROFILE_VERSION: u32 = 3;

/// Slowly changing per-agent scalars carried between decisions. All fields in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalState {
    pub energy_level: f64,
    pub satiety_level: f64,
    pub security_level: f64,
    pub stimulation_load: f64,
    pub last_event_novelty: f64,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            energy_level: 0.75,
            satiety_level: 0.70,
            security_level: 0.75,
            stimulation_load: 0.15,
            last_event_novelty: 0.10,
        }
    }
}

impl InternalState {
    pub fn clamped(self) -> Self {
        Self {
            energy_level: clamp01(self.energy_level),
            satiety_level: clamp01(self.satiety_level),
            security_level: clamp01(self.security_level),
            stimulation_load: clamp01(self.stimulation_load),
            last_event_novelty: clamp01(self.last_event_novelty),
        }
    }
}

/// Persisted record of an agent's decision model.
///
/// Deserializing goes through [`BrainProfile::load`] with the default configuration, so any
/// stored schema version is accepted and partial tuning is completed from default tuning. Hosts
/// running a custom [`BrainConfig`] call [`BrainProfile::load`] themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct BrainProfile {
    pub version: u32,
    /// Whether the infant model served this agent's latest decision.
    pub infant_model_active: bool,
    /// Per-agent tuning override; `None` follows the global configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<InfantTuning>,
    pub state: InternalState,
}

impl Default for BrainProfile {
    fn default() -> Self {
        Self {
            version: CURRENT_PROFILE_VERSION,
            infant_model_active: false,
            tuning: None,
            state: InternalState::default(),
        }
    }
}

impl From<Value> for BrainProfile {
    fn from(raw: Value) -> Self {
        Self::load(&raw, &BrainConfig::default())
    }
}

impl BrainProfile {
    /// Normalize a raw persisted profile to the current schema.
    ///
    /// `null` is an absent profile and yields defaults. Idempotent: normalizing the
    /// [`to_value`](Self::to_value) of a normalized profile returns it unchanged.
    pub fn normalize(raw: &Value, config: &BrainConfig) -> Result<Self> {
        let obj = match raw {
            Value::Null => return Ok(Self::default()),
            Value::Object(obj) => obj,
            other => {
                return Err(malformed(format!(
                    "expected an object, found {}",
                    kind(other)
                )))
            }
        };

        let version = match present(obj, "version") {
            None => CURRENT_PROFILE_VERSION,
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| malformed(format!("version: expected u32, found {v}")))?
                .max(CURRENT_PROFILE_VERSION),
        };

        let infant_model_active = match present(obj, "infant_model_active") {
            None => false,
            Some(v) => v.as_bool().ok_or_else(|| {
                malformed(format!("infant_model_active: expected bool, found {}", kind(v)))
            })?,
        };

        let tuning = match present(obj, "tuning") {
            None => None,
            Some(Value::Object(t)) => Some(normalize_tuning(t, &config.infant)?),
            Some(other) => {
                return Err(malformed(format!(
                    "tuning: expected object, found {}",
                    kind(other)
                )))
            }
        };

        let state = match present(obj, "state") {
            None => InternalState::default(),
            Some(Value::Object(s)) => normalize_state(s)?,
            Some(other) => {
                return Err(malformed(format!(
                    "state: expected object, found {}",
                    kind(other)
                )))
            }
        };

        Ok(Self {
            version,
            infant_model_active,
            tuning,
            state,
        })
    }

    /// [`normalize`](Self::normalize), substituting full defaults for a malformed profile.
    pub fn load(raw: &Value, config: &BrainConfig) -> Self {
        match Self::normalize(raw, config) {
            Ok(profile) => profile,
            Err(err) => {
                tracing::debug!(error = %err, "replacing malformed brain profile with defaults");
                Self::default()
            }
        }
    }

    /// Typed counterpart of [`normalize`](Self::normalize) for profiles already in memory.
    pub fn normalized(self) -> Self {
        Self {
            version: self.version.max(CURRENT_PROFILE_VERSION),
            infant_model_active: self.infant_model_active,
            tuning: self.tuning.map(InfantTuning::sanitized),
            state: self.state.clamped(),
        }
    }

    /// Persisted layout of this profile.
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "version": self.version,
            "infant_model_active": self.infant_model_active,
            "state": {
                "energy_level": self.state.energy_level,
                "satiety_level": self.state.satiety_level,
                "security_level": self.state.security_level,
                "stimulation_load": self.state.stimulation_load,
                "last_event_novelty": self.state.last_event_novelty,
            },
        });
        if let (Some(t), Value::Object(obj)) = (self.tuning, &mut value) {
            obj.insert(
                "tuning".to_string(),
                json!({
                    "energy_deficit_threshold": t.energy_deficit_threshold,
                    "energy_deficit_penalty": t.energy_deficit_penalty,
                    "risk_threshold": t.risk_threshold,
                    "threat_threshold": t.threat_threshold,
                    "risk_penalty": t.risk_penalty,
                    "stimulation_blend": t.stimulation_blend,
                    "energy_spend_rate": t.energy_spend_rate,
                    "security_soothing_rate": t.security_soothing_rate,
                    "stat_delta_scale": t.stat_delta_scale,
                }),
            );
        }
        value
    }

    /// Tuning in effect for this agent.
    pub fn effective_tuning(&self, config: &BrainConfig) -> InfantTuning {
        self.tuning.unwrap_or(config.infant).sanitized()
    }

    /// Retire the infant model: clear the flag and reset internal state.
    ///
    /// Per-agent tuning is kept; it only applies if the infant model is ever reinstated.
    pub fn retire(&mut self) {
        self.infant_model_active = false;
        self.state = InternalState::default();
    }
}

fn malformed(msg: String) -> BrainError {
    BrainError::MalformedProfile(msg)
}

/// Field value, treating explicit `null` as absent.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn number(obj: &Map<String, Value>, section: &str, key: &str) -> Result<Option<f64>> {
    match present(obj, key) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| malformed(format!("{section}.{key}: expected number, found {}", kind(v)))),
    }
}

fn normalize_state(obj: &Map<String, Value>) -> Result<InternalState> {
    let d = InternalState::default();
    let field = |key: &str, fallback: f64| -> Result<f64> {
        Ok(number(obj, "state", key)?.unwrap_or(fallback))
    };
    Ok(InternalState {
        energy_level: field("energy_level", d.energy_level)?,
        satiety_level: field("satiety_level", d.satiety_level)?,
        security_level: field("security_level", d.security_level)?,
        stimulation_load: field("stimulation_load", d.stimulation_load)?,
        last_event_novelty: field("last_event_novelty", d.last_event_novelty)?,
    }
    .clamped())
}

fn normalize_tuning(obj: &Map<String, Value>, global: &InfantTuning) -> Result<InfantTuning> {
    let field = |key: &str, fallback: f64| -> Result<f64> {
        Ok(number(obj, "tuning", key)?.unwrap_or(fallback))
    };
    Ok(InfantTuning {
        energy_deficit_threshold: field("energy_deficit_threshold", global.energy_deficit_threshold)?,
        energy_deficit_penalty: field("energy_deficit_penalty", global.energy_deficit_penalty)?,
        risk_threshold: field("risk_threshold", global.risk_threshold)?,
        threat_threshold: field("threat_threshold", global.threat_threshold)?,
        risk_penalty: field("risk_penalty", global.risk_penalty)?,
        stimulation_blend: field("stimulation_blend", global.stimulation_blend)?,
        energy_spend_rate: field("energy_spend_rate", global.energy_spend_rate)?,
        security_soothing_rate: field("security_soothing_rate", global.security_soothing_rate)?,
        stat_delta_scale: field("stat_delta_scale", global.stat_delta_scale)?,
    }
    .sanitized())
}

//! Deterministic choice resolution for simulated agents.
//!
//! When a life event offers several options, [`DecisionEngine::resolve`] picks one (or a set, for
//! multi-select events) on behalf of an NPC. Scoring is driven by the agent's temperament or
//! personality; randomness comes from a per-decision key so results replay exactly from the world
//! seed. Applying the chosen effects is the caller's job.
//!
//! Pipeline, leaf first:
//!
//! - [`traits`]: raw traits to drive parameters
//! - [`appraisal`]: authored choice data to an [`AppraisalVector`]
//! - [`profile`]: persisted [`BrainProfile`] and its schema normalization
//! - [`model`]: the closed set of utility models
//! - [`selection`]: utilities to chosen indices
//! - [`engine`]: orchestration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod appraisal;
pub mod choice;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod model;
pub mod profile;
pub mod selection;
pub mod traits;

pub use appraisal::{resolve_appraisal, trait_signal, AppraisalVector};
pub use choice::{AuthoredAppraisal, Choice, ChoiceEffects, LifeEvent};
pub use config::{
    BrainConfig, GenericWeights, InfantTuning, MultiSelectCount, SelectionConfig,
    INFANT_MODEL_MAX_AGE_MONTHS,
};
pub use engine::{AgentSnapshot, Decision, DecisionEngine, PendingDecision, ResolvedDecision};
pub use error::{BrainError, Result};
pub use model::{GenericFeatures, GenericModel, InfantModel, InfantScore, ModelKind, UtilityModel};
pub use profile::{BrainProfile, InternalState, CURRENT_PROFILE_VERSION};
pub use selection::SelectionPolicy;
pub use traits::{
    BigFive, GenericDrive, InfantDrive, Personality, Temperament, TemperamentTrait,
    TraitProjection,
};

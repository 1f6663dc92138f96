//! Utility models.
//!
//! The set of models is closed: [`UtilityModel`] is matched exhaustively by the engine, so adding
//! a variant forces every call site to be revisited.

mod generic;
mod infant;

pub use generic::{trait_alignment, GenericFeatures, GenericModel};
pub use infant::{InfantModel, InfantScore};

use serde::{Deserialize, Serialize};

use crate::config::{BrainConfig, INFANT_MODEL_MAX_AGE_MONTHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Generic,
    Infant,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Generic => "generic",
            ModelKind::Infant => "infant",
        }
    }

    /// Which model scores a decision.
    ///
    /// The infant model needs all four: the global flag, an agent at or below
    /// [`INFANT_MODEL_MAX_AGE_MONTHS`], temperament data, and an infant-eligible event.
    pub fn route(
        config: &BrainConfig,
        age_months: u32,
        has_temperament: bool,
        infant_eligible: bool,
    ) -> Self {
        if config.infant_model_enabled
            && age_months <= INFANT_MODEL_MAX_AGE_MONTHS
            && has_temperament
            && infant_eligible
        {
            ModelKind::Infant
        } else {
            ModelKind::Generic
        }
    }
}

/// A scoring strategy bound to one agent's drive parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UtilityModel {
    Generic(GenericModel),
    Infant(InfantModel),
}

impl UtilityModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            UtilityModel::Generic(_) => ModelKind::Generic,
            UtilityModel::Infant(_) => ModelKind::Infant,
        }
    }
}

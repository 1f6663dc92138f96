//! Decision orchestration.
//!
//! One call resolves one event for one agent: route to a model, derive the decision's private
//! random source, score every choice, select, and hand back the profile to persist. Nothing is
//! retained between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use psyche_core::{order_for_tick, MonthContext, TickSlot, NPC_CHOICE_DOMAIN};
use psyche_tools::{DecisionTrace, NullTraceSink, TraceSink};

use crate::appraisal::{resolve_appraisal, AppraisalVector};
use crate::choice::LifeEvent;
use crate::config::{BrainConfig, INFANT_MODEL_MAX_AGE_MONTHS};
use crate::error::{BrainError, Result};
use crate::model::{GenericFeatures, GenericModel, InfantModel, ModelKind, UtilityModel};
use crate::profile::BrainProfile;
use crate::selection::SelectionPolicy;
use crate::traits::{Personality, Temperament, TraitProjection};

/// The slice of an agent record the decision core reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u64,
    pub age_months: u32,
    #[serde(default)]
    pub temperament: Option<Temperament>,
    #[serde(default)]
    pub personality: Personality,
    #[serde(default)]
    pub brain: BrainProfile,
}

impl AgentSnapshot {
    pub fn new(id: u64, age_months: u32) -> Self {
        Self {
            id,
            age_months,
            temperament: None,
            personality: Personality::default(),
            brain: BrainProfile::default(),
        }
    }

    pub fn with_temperament(mut self, temperament: Temperament) -> Self {
        self.temperament = Some(temperament);
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }

    pub fn with_brain(mut self, brain: BrainProfile) -> Self {
        self.brain = brain;
        self
    }
}

/// Outcome of one resolved decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Chosen choice indices, ascending. Exactly one for single-select events.
    pub chosen: Vec<usize>,
    pub model: ModelKind,
    pub utilities: Vec<f64>,
    /// Profile to persist in place of the agent's previous one.
    pub profile: BrainProfile,
}

/// An entry of a month's decision batch.
#[derive(Debug, Clone, Copy)]
pub struct PendingDecision<'a> {
    pub slot: TickSlot,
    pub agent: &'a AgentSnapshot,
    pub event: &'a LifeEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDecision {
    pub agent: u64,
    pub event_id: String,
    pub result: Result<Decision>,
}

/// Infant-only data kept from scoring for the post-selection state update.
struct InfantPass {
    model: InfantModel,
    appraisals: Vec<AppraisalVector>,
    overloads: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DecisionEngine {
    world_seed: u64,
    config: BrainConfig,
    policy: SelectionPolicy,
}

impl DecisionEngine {
    pub fn new(world_seed: u64, config: BrainConfig) -> Self {
        let config = config.sanitized();
        let policy = SelectionPolicy::from_config(&config.selection);
        Self {
            world_seed,
            config,
            policy,
        }
    }

    pub fn world_seed(&self) -> u64 {
        self.world_seed
    }

    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    pub fn route(&self, agent: &AgentSnapshot, event: &LifeEvent) -> ModelKind {
        ModelKind::route(
            &self.config,
            agent.age_months,
            agent.temperament.is_some(),
            event.infant_eligible,
        )
    }

    /// Whether the infant model can no longer serve `agent` whatever the event.
    ///
    /// An event that is merely not infant-eligible does not end the stage.
    pub fn infant_stage_over(&self, agent: &AgentSnapshot) -> bool {
        !self.config.infant_model_enabled
            || agent.age_months > INFANT_MODEL_MAX_AGE_MONTHS
            || agent.temperament.is_none()
    }

    /// Build the scoring strategy for this agent and event.
    pub fn model_for(
        &self,
        agent: &AgentSnapshot,
        event: &LifeEvent,
        profile: &BrainProfile,
    ) -> UtilityModel {
        match (self.route(agent, event), agent.temperament.as_ref()) {
            (ModelKind::Infant, Some(temperament)) => UtilityModel::Infant(InfantModel::new(
                profile.effective_tuning(&self.config),
                temperament.project(),
            )),
            _ => UtilityModel::Generic(GenericModel::new(
                self.config.generic,
                agent.personality.project(),
            )),
        }
    }

    pub fn resolve(&self, agent: &AgentSnapshot, event: &LifeEvent, month: u32) -> Result<Decision> {
        self.resolve_traced(agent, event, month, &mut NullTraceSink)
    }

    /// [`resolve`](Self::resolve), also emitting a [`DecisionTrace`] to `sink`.
    pub fn resolve_traced(
        &self,
        agent: &AgentSnapshot,
        event: &LifeEvent,
        month: u32,
        sink: &mut dyn TraceSink,
    ) -> Result<Decision> {
        if event.choices.is_empty() {
            tracing::debug!(agent = agent.id, event = %event.id, month, "event has no choices");
            return Err(BrainError::NoCandidates);
        }

        let mut profile = agent.brain.clone().normalized();
        let model = self.model_for(agent, event, &profile);
        let kind = model.kind();

        let mut rng = MonthContext::new(self.world_seed, month)
            .decision_key(agent.id, &event.id, NPC_CHOICE_DOMAIN)
            .rng();

        let (utilities, infant): (Vec<f64>, Option<InfantPass>) = match model {
            UtilityModel::Infant(m) => {
                let appraisals: Vec<AppraisalVector> =
                    event.choices.iter().map(resolve_appraisal).collect();
                let scores: Vec<_> = appraisals
                    .iter()
                    .map(|a| m.score(a, &profile.state))
                    .collect();
                let utilities = scores.iter().map(|s| s.utility).collect();
                let pass = InfantPass {
                    model: m,
                    appraisals,
                    overloads: scores.iter().map(|s| s.overload).collect(),
                };
                (utilities, Some(pass))
            }
            UtilityModel::Generic(m) => {
                let utilities = event
                    .choices
                    .iter()
                    .map(|c| m.score(&GenericFeatures::from_choice(c, &agent.personality)))
                    .collect();
                (utilities, None)
            }
        };

        let chosen = self
            .policy
            .select(&utilities, &mut rng, event.min_select, event.max_select)?;

        match infant {
            Some(pass) => {
                for &i in &chosen {
                    profile.state = pass.model.advance(
                        &profile.state,
                        &pass.appraisals[i],
                        pass.overloads[i],
                        &event.choices[i].effects,
                    );
                }
                profile.infant_model_active = true;
            }
            None if profile.infant_model_active && self.infant_stage_over(agent) => {
                tracing::debug!(agent = agent.id, month, "retiring infant model");
                profile.retire();
            }
            None => {}
        }

        if self.config.debug_logging {
            tracing::debug!(
                agent = agent.id,
                event = %event.id,
                month,
                model = kind.as_str(),
                chosen = ?chosen,
                "resolved npc decision"
            );
            tracing::trace!(agent = agent.id, event = %event.id, utilities = ?utilities);
        }

        let probabilities = if event.is_multi_select() {
            Vec::new()
        } else {
            self.policy.probabilities(&utilities)
        };
        sink.emit(
            DecisionTrace::new(month, agent.id, event.id.clone(), kind.as_str())
                .with_utilities(utilities.clone())
                .with_probabilities(probabilities)
                .with_chosen(chosen.clone()),
        );

        Ok(Decision {
            chosen,
            model: kind,
            utilities,
            profile,
        })
    }

    /// Resolve a month's batch in tick order.
    ///
    /// An agent with several pending events sees the profile produced by its previous decision in
    /// the batch. A fault in one entry does not affect the others.
    pub fn resolve_pending(
        &self,
        month: u32,
        mut pending: Vec<PendingDecision<'_>>,
        sink: &mut dyn TraceSink,
    ) -> Vec<ResolvedDecision> {
        order_for_tick(&mut pending, |p| (p.slot, p.agent.id));

        let mut profiles: BTreeMap<u64, BrainProfile> = BTreeMap::new();
        let mut out = Vec::with_capacity(pending.len());

        for p in pending {
            let result = match profiles.get(&p.agent.id) {
                Some(brain) => {
                    let agent = p.agent.clone().with_brain(brain.clone());
                    self.resolve_traced(&agent, p.event, month, sink)
                }
                None => self.resolve_traced(p.agent, p.event, month, sink),
            };
            if let Ok(decision) = &result {
                profiles.insert(p.agent.id, decision.profile.clone());
            }
            out.push(ResolvedDecision {
                agent: p.agent.id,
                event_id: p.event.id.clone(),
                result,
            });
        }
        out
    }
}

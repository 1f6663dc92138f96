use crate::{AgentId, DecisionKey};

/// Read-only context for one simulated month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthContext {
    pub world_seed: u64,
    pub month: u32,
}

impl MonthContext {
    pub fn new(world_seed: u64, month: u32) -> Self {
        Self { world_seed, month }
    }

    pub fn decision_key<'a, A: AgentId>(
        &self,
        agent: A,
        event_id: &'a str,
        domain: &'a str,
    ) -> DecisionKey<'a> {
        DecisionKey::new(self.world_seed, agent.stable_id(), self.month, event_id, domain)
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Record of one resolved decision.
///
/// This is "dumb data" so it can be captured during simulation and rendered later. Probabilities
/// are only filled for single-select events, where a softmax draw actually happened.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionTrace {
    pub month: u32,
    pub agent: u64,
    pub event_id: String,
    pub model: Cow<'static, str>,
    pub utilities: Vec<f64>,
    pub probabilities: Vec<f64>,
    pub chosen: Vec<usize>,
}

impl DecisionTrace {
    pub fn new(
        month: u32,
        agent: u64,
        event_id: impl Into<String>,
        model: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            month,
            agent,
            event_id: event_id.into(),
            model: model.into(),
            utilities: Vec::new(),
            probabilities: Vec::new(),
            chosen: Vec::new(),
        }
    }

    pub fn with_utilities(mut self, utilities: Vec<f64>) -> Self {
        self.utilities = utilities;
        self
    }

    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = probabilities;
        self
    }

    pub fn with_chosen(mut self, chosen: Vec<usize>) -> Self {
        self.chosen = chosen;
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, trace: DecisionTrace);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _trace: DecisionTrace) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub traces: Vec<DecisionTrace>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, trace: DecisionTrace) {
        self.traces.push(trace);
    }
}

/// Serializable collection of traces, e.g. one per simulated month.
#[derive(Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub traces: Vec<DecisionTrace>,
}

impl TraceLog {
    pub fn push(&mut self, trace: DecisionTrace) {
        self.traces.push(trace);
    }

    pub fn for_agent(&self, agent: u64) -> impl Iterator<Item = &DecisionTrace> {
        self.traces.iter().filter(move |t| t.agent == agent)
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, trace: DecisionTrace) {
        self.push(trace);
    }
}

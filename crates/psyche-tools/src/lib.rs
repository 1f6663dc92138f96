//! Tooling primitives for deterministic NPC decisions.
//!
//! This crate is intentionally lightweight: it only records what the decision core did. Rendering
//! or inspecting traces belongs to whatever tooling consumes them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{DecisionTrace, NullTraceSink, TraceLog, TraceSink, VecTraceSink};

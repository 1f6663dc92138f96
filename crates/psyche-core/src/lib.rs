//! Deterministic, engine-agnostic primitives for NPC decision making.
//!
//! Nothing in here owns mutable shared state: every decision derives its own random source from a
//! [`DecisionKey`], so decisions can be replayed bit-for-bit from the world seed alone.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod key;
pub mod month;
pub mod order;
pub mod rng;

pub use agent::AgentId;
pub use key::{DecisionKey, NPC_CHOICE_DOMAIN};
pub use month::MonthContext;
pub use order::{order_for_tick, TickSlot};
pub use rng::{hash_str, mix64, DeterministicRng, SplitMix64};

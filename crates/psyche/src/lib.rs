//! Umbrella crate that re-exports the `psyche-*` building blocks.
//!
//! Most users want [`brain::DecisionEngine`]; the lower crates are exposed for hosts that drive
//! ordering or tracing themselves.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use psyche_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use psyche_tools as tools;

#[cfg(feature = "brain")]
#[cfg_attr(docsrs, doc(cfg(feature = "brain")))]
pub use psyche_brain as brain;

//! # Distinction Core
//!
//! Deterministic graph-synthesis engine: a minimal substrate in which atomic
//! distinctions combine pairwise under a fixed, parameter-free rule to build
//! up a single persistent universe graph.
//!
//! This crate contains the whole generative core:
//! - Canonical identifier derivation (the load-bearing pure function)
//! - The append-only registry of distinctions and relations
//! - The synthesis operator and snapshot projection
//! - Configuration for the external growth driver
//! - Metrics collection and structured logging
//!
//! External collaborators (analysis, visualization, persistence) only ever
//! consume the snapshot read interface; none of their logic lives here.
//!
//! ## Example
//!
//! ```
//! use distinction_core::Engine;
//!
//! let mut engine = Engine::new();
//! let a = engine.d0().id.clone();
//! let b = engine.d1().id.clone();
//!
//! // Synthesis is deterministic and order-independent.
//! let c = engine.synthesize(&a, &b).unwrap();
//! assert_eq!(engine.synthesize(&b, &a).unwrap(), c);
//! assert_eq!(engine.distinction_count(), 3);
//! ```

/// Configuration for the growth driver and snapshot cadence
pub mod config;
/// Canonical identifier derivation
pub mod derive;
/// The engine: primordial pair, synthesis operator, snapshot projection
pub mod engine;
/// Typed failure classes of the core
pub mod error;
/// Counters and structured logging for growth runs
pub mod metrics;
/// Append-only ownership of all distinctions and relations
pub mod registry;

pub use config::{AppConfig, GrowthConfig, OutputConfig, PairStrategy};
pub use derive::derive_id;
pub use engine::{Engine, PRIMORDIAL_ONE, PRIMORDIAL_ZERO};
pub use error::{EngineError, Result};
pub use metrics::{init_logging, Metrics, StepOutcome};
pub use registry::Registry;

//! Typed failure classes of the core engine.
//!
//! Every variant is a programming-error class: synthesis over registered
//! operands always succeeds, so an error here indicates a broken caller or a
//! corrupted snapshot, never a recoverable runtime condition. Errors are not
//! caught inside the core; they propagate to the embedding tool.

use distinction_data::DistinctionId;
use thiserror::Error;

/// Main error type for core engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Operand not present in the registry.
    #[error("unknown distinction: {0}")]
    UnknownDistinction(DistinctionId),

    /// Attempt to register an identifier that already exists.
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(DistinctionId),

    /// Attempt to relate a distinction to itself.
    #[error("reflexive relation on distinction: {0}")]
    ReflexiveRelation(DistinctionId),

    /// Snapshot restore is missing one of the primordial distinctions.
    #[error("missing primordial distinction: {0}")]
    MissingPrimordial(DistinctionId),
}

/// Result type alias for core engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

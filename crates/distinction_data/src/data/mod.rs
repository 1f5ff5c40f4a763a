//! Core data structures for the distinction universe.

pub mod distinction;
pub mod relation;
pub mod snapshot;

//! Plain data types shared by the distinction engine and its collaborators.

pub mod data;

pub use data::distinction::{Distinction, DistinctionId};
pub use data::relation::Relation;
pub use data::snapshot::UniverseSnapshot;

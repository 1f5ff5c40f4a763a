use super::distinction::{Distinction, DistinctionId};
use super::relation::Relation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only projection of one point in a registry's append-only history.
///
/// Distinctions appear in creation order, relations in first-insertion
/// order. Consumers (analysis, visualization) build their own graph
/// representation from the two lists; the engine guarantees that every
/// relation endpoint appears in `distinctions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSnapshot {
    pub distinctions: Vec<Distinction>,
    pub relations: Vec<Relation>,
}

impl UniverseSnapshot {
    #[must_use]
    pub fn distinction_count(&self) -> usize {
        self.distinctions.len()
    }

    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    #[must_use]
    pub fn contains(&self, id: &DistinctionId) -> bool {
        self.distinctions.iter().any(|d| &d.id == id)
    }

    /// True when every relation references identifiers present in the node
    /// list.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let ids: HashSet<&DistinctionId> = self.distinctions.iter().map(|d| &d.id).collect();
        self.relations.iter().all(|relation| {
            let (lo, hi) = relation.endpoints();
            ids.contains(lo) && ids.contains(hi)
        })
    }
}

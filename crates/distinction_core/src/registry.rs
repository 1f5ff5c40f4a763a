//! Canonical state: every distinction and relation ever created.

use crate::error::{EngineError, Result};
use distinction_data::{Distinction, DistinctionId, Relation, UniverseSnapshot};
use std::collections::{HashMap, HashSet};

/// Exclusive, append-only owner of all distinctions and relations for one
/// engine instance.
///
/// Distinctions live in a hash map for O(1) expected lookup; creation order
/// and relation-insertion order are kept alongside so every snapshot reflects
/// one point in the registry's history. Nothing is ever removed or
/// overwritten: both counts are monotonically non-decreasing over the
/// registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    distinctions: HashMap<DistinctionId, Distinction>,
    creation_order: Vec<DistinctionId>,
    relations: HashSet<Relation>,
    relation_order: Vec<Relation>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) expected-time existence check; used to test memoization before
    /// creating new entities.
    #[must_use]
    pub fn lookup(&self, id: &DistinctionId) -> Option<&Distinction> {
        self.distinctions.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &DistinctionId) -> bool {
        self.distinctions.contains_key(id)
    }

    /// Registers a new distinction.
    ///
    /// A duplicate identifier means uniqueness was violated upstream; the
    /// insert is rejected, never silently overwritten.
    pub fn insert(&mut self, distinction: Distinction) -> Result<()> {
        if self.distinctions.contains_key(&distinction.id) {
            return Err(EngineError::DuplicateIdentifier(distinction.id));
        }
        self.creation_order.push(distinction.id.clone());
        self.distinctions.insert(distinction.id.clone(), distinction);
        Ok(())
    }

    /// Records the symmetric relation between two registered distinctions.
    ///
    /// Set semantics: inserting the same unordered pair twice leaves the
    /// relation set unchanged. Both endpoints must exist and differ.
    pub fn add_relation(&mut self, a: &DistinctionId, b: &DistinctionId) -> Result<()> {
        if a == b {
            return Err(EngineError::ReflexiveRelation(a.clone()));
        }
        for id in [a, b] {
            if !self.distinctions.contains_key(id) {
                return Err(EngineError::UnknownDistinction(id.clone()));
            }
        }
        let relation = Relation::new(a.clone(), b.clone());
        if self.relations.insert(relation.clone()) {
            self.relation_order.push(relation);
        }
        Ok(())
    }

    #[must_use]
    pub fn has_relation(&self, a: &DistinctionId, b: &DistinctionId) -> bool {
        self.relations
            .contains(&Relation::new(a.clone(), b.clone()))
    }

    #[must_use]
    pub fn distinction_count(&self) -> usize {
        self.distinctions.len()
    }

    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relation_order.len()
    }

    /// Identifiers in creation order.
    #[must_use]
    pub fn ids(&self) -> &[DistinctionId] {
        &self.creation_order
    }

    /// Relations in first-insertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relation_order
    }

    /// Consistent deep copy of the current state.
    ///
    /// The copy can never mix entities and relations from different points
    /// in history: it is taken under the same borrow, and no relation can
    /// reference a distinction absent from the returned node list.
    #[must_use]
    pub fn snapshot(&self) -> UniverseSnapshot {
        UniverseSnapshot {
            distinctions: self
                .creation_order
                .iter()
                .map(|id| self.distinctions[id].clone())
                .collect(),
            relations: self.relation_order.clone(),
        }
    }
}

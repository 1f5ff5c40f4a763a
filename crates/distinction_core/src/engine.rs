//! The engine: primordial pair, synthesis operator, snapshot projection.

use crate::derive::derive_id;
use crate::error::{EngineError, Result};
use crate::registry::Registry;
use distinction_data::{Distinction, DistinctionId, Relation, UniverseSnapshot};
use sha2::{Digest, Sha256};

/// Identifier of the first primordial distinction.
pub const PRIMORDIAL_ZERO: &str = "0";
/// Identifier of the second primordial distinction.
pub const PRIMORDIAL_ONE: &str = "1";

/// A self-contained universe: the registry plus the synthesis rule.
///
/// Every engine instance owns its entire state; multiple instances coexist
/// without interference. `synthesize` is the only mutating operation and
/// runs to completion without yielding, so `&mut self` is the entire write
/// discipline: exactly one writer at a time, arbitrarily many readers of a
/// frozen snapshot.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Registry,
    d0: Distinction,
    d1: Distinction,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a universe holding exactly the two primordial distinctions,
    /// initially disconnected.
    #[must_use]
    pub fn new() -> Self {
        let d0 = Distinction::new(DistinctionId::new(PRIMORDIAL_ZERO));
        let d1 = Distinction::new(DistinctionId::new(PRIMORDIAL_ONE));
        let mut registry = Registry::new();
        registry
            .insert(d0.clone())
            .expect("fresh registry accepts the primordial pair");
        registry
            .insert(d1.clone())
            .expect("primordial identifiers are distinct");
        Self { registry, d0, d1 }
    }

    /// Rebuilds an engine from a previously captured snapshot.
    ///
    /// Every registry invariant is re-validated: identifiers must be unique,
    /// every relation must reference two distinct registered distinctions,
    /// and the primordial pair must be present.
    pub fn from_snapshot(snapshot: &UniverseSnapshot) -> Result<Self> {
        let mut registry = Registry::new();
        for distinction in &snapshot.distinctions {
            registry.insert(distinction.clone())?;
        }
        for relation in &snapshot.relations {
            let (lo, hi) = relation.endpoints();
            registry.add_relation(lo, hi)?;
        }
        let d0 = registry
            .lookup(&DistinctionId::new(PRIMORDIAL_ZERO))
            .cloned()
            .ok_or_else(|| EngineError::MissingPrimordial(DistinctionId::new(PRIMORDIAL_ZERO)))?;
        let d1 = registry
            .lookup(&DistinctionId::new(PRIMORDIAL_ONE))
            .cloned()
            .ok_or_else(|| EngineError::MissingPrimordial(DistinctionId::new(PRIMORDIAL_ONE)))?;
        Ok(Self { registry, d0, d1 })
    }

    /// The first primordial distinction, id `"0"`.
    #[must_use]
    pub fn d0(&self) -> &Distinction {
        &self.d0
    }

    /// The second primordial distinction, id `"1"`.
    #[must_use]
    pub fn d1(&self) -> &Distinction {
        &self.d1
    }

    /// Combines two registered distinctions into a third.
    ///
    /// Synthesizing a distinction with itself returns it unchanged (a
    /// designed fixed point). A pair that was already synthesized returns
    /// the existing result without touching the registry. Otherwise exactly
    /// one distinction is created and related to both parents.
    ///
    /// Both operands must already be registered; an unknown operand is a
    /// caller bug and fails immediately.
    pub fn synthesize(&mut self, a: &DistinctionId, b: &DistinctionId) -> Result<Distinction> {
        let Some(first) = self.registry.lookup(a).cloned() else {
            return Err(EngineError::UnknownDistinction(a.clone()));
        };
        if !self.registry.contains(b) {
            return Err(EngineError::UnknownDistinction(b.clone()));
        }

        if a == b {
            tracing::trace!(id = %a, "reflexive synthesis");
            return Ok(first);
        }

        let candidate = derive_id(a, b);
        if let Some(existing) = self.registry.lookup(&candidate) {
            tracing::trace!(id = %candidate, "memoized synthesis");
            return Ok(existing.clone());
        }

        let novel = Distinction::new(candidate.clone());
        self.registry.insert(novel.clone())?;
        // Canonical operand order keeps the registry history identical for
        // (a, b) and (b, a).
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.registry.add_relation(lo, &candidate)?;
        self.registry.add_relation(hi, &candidate)?;
        tracing::debug!(id = %candidate, parent_lo = %lo, parent_hi = %hi, "synthesized distinction");
        Ok(novel)
    }

    #[must_use]
    pub fn lookup(&self, id: &DistinctionId) -> Option<&Distinction> {
        self.registry.lookup(id)
    }

    #[must_use]
    pub fn contains(&self, id: &DistinctionId) -> bool {
        self.registry.contains(id)
    }

    #[must_use]
    pub fn has_relation(&self, a: &DistinctionId, b: &DistinctionId) -> bool {
        self.registry.has_relation(a, b)
    }

    #[must_use]
    pub fn distinction_count(&self) -> usize {
        self.registry.distinction_count()
    }

    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.registry.relation_count()
    }

    /// Identifiers in creation order.
    #[must_use]
    pub fn ids(&self) -> &[DistinctionId] {
        self.registry.ids()
    }

    /// Relations in first-insertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        self.registry.relations()
    }

    /// Read-only projection of the current state.
    #[must_use]
    pub fn snapshot(&self) -> UniverseSnapshot {
        self.registry.snapshot()
    }

    /// Content digest of the graph, independent of creation order.
    ///
    /// Node and edge sets are sorted before hashing, so two universes
    /// containing the same distinctions and relations produce the same
    /// fingerprint regardless of the sequence that built them.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut ids: Vec<&DistinctionId> = self.registry.ids().iter().collect();
        ids.sort();
        let mut relations: Vec<&Relation> = self.registry.relations().iter().collect();
        relations.sort();

        let mut hasher = Sha256::new();
        for id in ids {
            hasher.update(id.as_str().as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(b"--\n");
        for relation in relations {
            let (lo, hi) = relation.endpoints();
            hasher.update(lo.as_str().as_bytes());
            hasher.update(b":");
            hasher.update(hi.as_str().as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

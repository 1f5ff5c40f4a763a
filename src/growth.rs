//! Pair-selection strategies for growing the universe.
//!
//! Selection is entirely external to the engine: strategies only read the
//! public view (identifier list and relation list) and propose operand
//! pairs. The same seed against the same engine state always proposes the
//! same pair.

use distinction_core::{Engine, PairStrategy};
use distinction_data::DistinctionId;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Selects the next operand pair under the given strategy.
///
/// The two draws are independent, so a reflexive pair is possible; the
/// engine treats it as a fixed point rather than an error.
pub fn select_pair(
    engine: &Engine,
    strategy: PairStrategy,
    rng: &mut ChaCha8Rng,
) -> (DistinctionId, DistinctionId) {
    match strategy {
        PairStrategy::Random => select_uniform(engine, rng),
        PairStrategy::DegreeWeighted => select_degree_weighted(engine, rng),
    }
}

fn select_uniform(engine: &Engine, rng: &mut ChaCha8Rng) -> (DistinctionId, DistinctionId) {
    let ids = engine.ids();
    let a = ids[rng.gen_range(0..ids.len())].clone();
    let b = ids[rng.gen_range(0..ids.len())].clone();
    (a, b)
}

fn select_degree_weighted(engine: &Engine, rng: &mut ChaCha8Rng) -> (DistinctionId, DistinctionId) {
    let ids = engine.ids();
    let mut degrees: HashMap<&DistinctionId, u64> = HashMap::new();
    for relation in engine.relations() {
        let (lo, hi) = relation.endpoints();
        *degrees.entry(lo).or_insert(0) += 1;
        *degrees.entry(hi).or_insert(0) += 1;
    }
    // Degree + 1 keeps never-connected distinctions selectable.
    let weights: Vec<u64> = ids
        .iter()
        .map(|id| degrees.get(id).copied().unwrap_or(0) + 1)
        .collect();
    let index = WeightedIndex::new(&weights).expect("weights are all positive");
    let a = ids[index.sample(rng)].clone();
    let b = ids[index.sample(rng)].clone();
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_selection_is_deterministic_per_seed() {
        let engine = Engine::new();
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                select_pair(&engine, PairStrategy::Random, &mut rng1),
                select_pair(&engine, PairStrategy::Random, &mut rng2)
            );
        }
    }

    #[test]
    fn test_selection_returns_registered_ids() {
        let mut engine = Engine::new();
        let d0 = engine.d0().id.clone();
        let d1 = engine.d1().id.clone();
        engine.synthesize(&d0, &d1).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for strategy in [PairStrategy::Random, PairStrategy::DegreeWeighted] {
            for _ in 0..20 {
                let (a, b) = select_pair(&engine, strategy, &mut rng);
                assert!(engine.contains(&a));
                assert!(engine.contains(&b));
            }
        }
    }
}

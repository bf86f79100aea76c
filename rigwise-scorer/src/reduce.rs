//! Group reduction: collapse a build set to the best entry per group.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use rigwise_core::RankedBuild;

/// Keep only the highest-scoring item within each group.
///
/// Items are partitioned by `key_fn`; within each partition the single item
/// with the maximum `score_fn` value survives. Ties on exactly equal scores
/// resolve to the **first encountered** item in input order: a later item
/// replaces the incumbent only when strictly greater. This rule is pinned
/// here deliberately so reductions are deterministic and reproducible.
///
/// Winners are re-sorted by score, descending and stable: winners keep
/// their input encounter order when scores tie across groups.
#[must_use]
pub fn top_per_group<T, K, KF, SF>(items: Vec<T>, key_fn: KF, score_fn: SF) -> Vec<T>
where
    K: Hash + Eq,
    KF: Fn(&T) -> K,
    SF: Fn(&T) -> f64,
{
    let mut slot_by_key: HashMap<K, usize> = HashMap::new();
    let mut winners: Vec<T> = Vec::new();

    for item in items {
        match slot_by_key.entry(key_fn(&item)) {
            Entry::Vacant(vacant) => {
                vacant.insert(winners.len());
                winners.push(item);
            }
            Entry::Occupied(occupied) => {
                if let Some(incumbent) = winners.get_mut(*occupied.get())
                    && score_fn(&item) > score_fn(incumbent)
                {
                    *incumbent = item;
                }
            }
        }
    }

    winners.sort_by(|a, b| score_fn(b).total_cmp(&score_fn(a)));
    winners
}

/// Collapse ranked builds to the best one per (GPU, CPU) pairing.
///
/// The surviving row per pair is the one with the maximum recommendation
/// score, which in practice selects the best RAM choice for that pairing.
#[must_use]
pub fn best_per_pair(ranked: Vec<RankedBuild>) -> Vec<RankedBuild> {
    let reduced = top_per_group(
        ranked,
        |entry| (entry.build.gpu.clone(), entry.build.cpu.clone()),
        |entry| entry.recommendation_score,
    );
    log::debug!("{} builds after pair reduction", reduced.len());
    reduced
}

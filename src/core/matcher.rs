//! Nearest-enrolled-face search.

use crate::errors::AppResult;
use crate::models::{Embedding, Worker};

/// Default maximum Euclidean distance for a probe to count as a match.
pub const DEFAULT_MAX_DISTANCE: f32 = 0.6;

/// Find the enrolled worker nearest to `probe`, if any is closer than
/// `max_distance`.
///
/// The running threshold starts at `max_distance` and only tightens
/// (strict `<`), so the first candidate at the minimal distance wins ties.
/// Candidates must be iterated in enrollment order for that reason.
///
/// Pure: no side effects. Dimensionality is re-checked here because
/// deserialized documents bypass the `Embedding` constructor.
pub fn best_match<'a>(
    probe: &Embedding,
    candidates: &'a [Worker],
    max_distance: f32,
) -> AppResult<Option<&'a Worker>> {
    probe.check_dim()?;

    let mut best: Option<&Worker> = None;
    let mut best_distance = max_distance;

    for worker in candidates {
        worker.descriptor.check_dim()?;
        let distance = probe.distance(&worker.descriptor);
        if distance < best_distance {
            best_distance = distance;
            best = Some(worker);
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EMBEDDING_DIM;

    fn embedding(fill: f32) -> Embedding {
        Embedding::new(vec![fill; EMBEDDING_DIM]).unwrap()
    }

    fn worker(id: &str, fill: f32) -> Worker {
        Worker::new(id.to_string(), id.to_string(), embedding(fill), None)
    }

    #[test]
    fn returns_the_nearest_candidate_under_threshold() {
        let candidates = vec![worker("far", 0.5), worker("near", 0.01)];
        let probe = embedding(0.0);

        let m = best_match(&probe, &candidates, DEFAULT_MAX_DISTANCE).unwrap();
        assert_eq!(m.unwrap().id, "near");
    }

    #[test]
    fn no_match_when_all_candidates_are_at_or_over_threshold() {
        // distance = sqrt(128 * 0.25) ~ 5.66, far over 0.6
        let candidates = vec![worker("far", 0.5)];
        let probe = embedding(0.0);

        let m = best_match(&probe, &candidates, DEFAULT_MAX_DISTANCE).unwrap();
        assert!(m.is_none());
    }

    #[test]
    fn empty_roster_never_matches() {
        let probe = embedding(0.0);
        let m = best_match(&probe, &[], DEFAULT_MAX_DISTANCE).unwrap();
        assert!(m.is_none());
    }

    #[test]
    fn ties_resolve_to_the_earliest_enrolled() {
        // identical embeddings, identical distances
        let candidates = vec![worker("first", 0.01), worker("second", 0.01)];
        let probe = embedding(0.0);

        let m = best_match(&probe, &candidates, DEFAULT_MAX_DISTANCE).unwrap();
        assert_eq!(m.unwrap().id, "first");
    }

    #[test]
    fn exact_threshold_distance_is_not_a_match() {
        let candidates = vec![worker("edge", 0.0)];
        let probe = embedding(0.0);

        // threshold 0.0: distance 0.0 is not strictly less
        let m = best_match(&probe, &candidates, 0.0).unwrap();
        assert!(m.is_none());
    }

    #[test]
    fn bad_candidate_dimensionality_is_an_error() {
        let bad: Embedding = serde_json::from_str("[1.0, 2.0]").unwrap();
        let candidates = vec![Worker::new("w".into(), "w".into(), bad, None)];
        let probe = embedding(0.0);

        assert!(best_match(&probe, &candidates, DEFAULT_MAX_DISTANCE).is_err());
    }
}

//! Placeholder rows for the demo scroll body.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOPICS: [&str; 8] = [
    "Harbor", "Summit", "Lagoon", "Canyon", "Meadow", "Glacier", "Dune", "Fjord",
];

/// One row of the demo feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRow {
    pub title: String,
    pub detail: String,
    /// Accent hue in [0, 1)
    pub hue: f32,
}

/// Generates `count` rows deterministically from `seed`.
pub fn generate_rows(count: usize, seed: u64) -> Vec<FeedRow> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|index| {
            let topic = TOPICS[rng.gen_range(0..TOPICS.len())];
            let distance = rng.gen_range(1..250);
            FeedRow {
                title: format!("{} #{}", topic, index + 1),
                detail: format!("{} km away, {} photos", distance, rng.gen_range(0..40)),
                hue: rng.gen_range(0.0..1.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_rows(20, 42), generate_rows(20, 42));
    }

    #[test]
    fn test_generation_respects_count() {
        let rows = generate_rows(7, 1);
        assert_eq!(rows.len(), 7);
        assert!(rows[6].title.ends_with("#7"));
        assert!(rows.iter().all(|r| (0.0..1.0).contains(&r.hue)));
    }

    #[test]
    fn test_empty_feed() {
        assert!(generate_rows(0, 42).is_empty());
    }
}

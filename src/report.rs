use crate::combo::Combination;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Descending,
    Ascending,
}

/// Pairs every label with its score and sorts by score.
pub fn rank_entries(
    labels: &[String],
    scores: &[f64],
    direction: SortDirection,
) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = labels
        .iter()
        .cloned()
        .zip(scores.iter().copied())
        .collect();
    entries.sort_by(|lhs, rhs| match direction {
        SortDirection::Descending => rhs.1.total_cmp(&lhs.1),
        SortDirection::Ascending => lhs.1.total_cmp(&rhs.1),
    });
    entries
}

pub fn format_ranking(title: &str, entries: &[(String, f64)], count: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{title}:\n"));
    for (rank, (label, score)) in entries.iter().take(count).enumerate() {
        out.push_str(&format!("{:>3}. {:<20} {:.4}\n", rank + 1, label, score));
    }
    out
}

/// Seeded sample of combination labels, drawn with replacement.
pub fn sample_combinations(combos: &[Combination], count: usize, seed: u64) -> Vec<String> {
    if combos.is_empty() {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| combos[rng.gen_range(0..combos.len())].label().to_string())
        .collect()
}

use crate::chart::TypeChart;

/// A single type or an unordered pair of distinct types, identified by
/// registry indices. A same-type pair collapses to one member so dual
/// evaluation degenerates to the single-type case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    members: Vec<usize>,
    label: String,
}

impl Combination {
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Enumerates every single and dual typing in combinations-with-replacement
/// order over the registry, T + C(T,2) entries in total. Every matrix row
/// and column index downstream is a position in this sequence.
pub fn combinations(chart: &TypeChart) -> Vec<Combination> {
    let count = chart.type_count();
    let mut combos = Vec::new();
    for first in 0..count {
        for second in first..count {
            let (members, label) = if first == second {
                (vec![first], chart.name(first).to_string())
            } else {
                (
                    vec![first, second],
                    format!("{}/{}", chart.name(first), chart.name(second)),
                )
            };
            combos.push(Combination { members, label });
        }
    }
    combos
}

/// The degenerate single-type universe, one combination per registry
/// entry. Row/column order matches the base table exactly.
pub fn single_combinations(chart: &TypeChart) -> Vec<Combination> {
    (0..chart.type_count())
        .map(|id| Combination {
            members: vec![id],
            label: chart.name(id).to_string(),
        })
        .collect()
}

pub fn labels(combos: &[Combination]) -> Vec<String> {
    combos.iter().map(|combo| combo.label.clone()).collect()
}

use nalgebra::DMatrix;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart has {rows} rows for {types} types")]
    RowCountMismatch { rows: usize, types: usize },

    #[error("row for {name} has {got} entries, expected {expected}")]
    RowLengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("negative multiplier {value} for {attacker} vs {defender}")]
    NegativeMultiplier {
        attacker: String,
        defender: String,
        value: f64,
    },

    #[error("unknown type name: {0}")]
    UnknownType(String),
}

const STANDARD_TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

#[rustfmt::skip]
const STANDARD_TABLE: [[f64; 18]; 18] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0], // Normal
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0], // Fire
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0], // Water
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0], // Electric
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0], // Grass
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0], // Ice
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5], // Fighting
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0], // Poison
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0], // Ground
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0], // Flying
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0], // Psychic
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5], // Bug
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0], // Rock
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0], // Ghost
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0], // Dragon
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5], // Dark
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0], // Steel
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0], // Fairy
];

/// Ordered type registry plus the attacker-by-defender multiplier table.
/// Row/column order is the registry order and every downstream matrix
/// index depends on it.
#[derive(Debug, Clone)]
pub struct TypeChart {
    names: Vec<String>,
    table: DMatrix<f64>,
}

impl TypeChart {
    pub fn new(names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ChartError> {
        let expected = names.len();
        if rows.len() != expected {
            return Err(ChartError::RowCountMismatch {
                rows: rows.len(),
                types: expected,
            });
        }
        for (name, row) in names.iter().zip(&rows) {
            if row.len() != expected {
                return Err(ChartError::RowLengthMismatch {
                    name: name.clone(),
                    got: row.len(),
                    expected,
                });
            }
        }
        for (attacker, row) in rows.iter().enumerate() {
            for (defender, &value) in row.iter().enumerate() {
                if value < 0.0 {
                    return Err(ChartError::NegativeMultiplier {
                        attacker: names[attacker].clone(),
                        defender: names[defender].clone(),
                        value,
                    });
                }
            }
        }
        let table = DMatrix::from_fn(expected, expected, |a, d| rows[a][d]);
        Ok(TypeChart { names, table })
    }

    pub fn standard() -> Self {
        let names = STANDARD_TYPES.iter().map(|name| name.to_string()).collect();
        let count = STANDARD_TYPES.len();
        let table = DMatrix::from_fn(count, count, |a, d| STANDARD_TABLE[a][d]);
        TypeChart { names, table }
    }

    pub fn type_count(&self) -> usize {
        self.names.len()
    }

    pub fn type_names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub fn index_of(&self, name: &str) -> Result<usize, ChartError> {
        self.names
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .ok_or_else(|| ChartError::UnknownType(name.to_string()))
    }

    pub fn multiplier(&self, attacker: usize, defender: usize) -> f64 {
        self.table[(attacker, defender)]
    }

    pub fn base_matrix(&self) -> &DMatrix<f64> {
        &self.table
    }

    /// Effectiveness of one typing attacking another. Each attacking type
    /// hits through the full defending combination (product of base
    /// multipliers over every defending type); the result is the best of
    /// those per-attacker values. The max is over attacker types only,
    /// never a joint product across both.
    pub fn effectiveness(&self, attackers: &[usize], defenders: &[usize]) -> f64 {
        attackers
            .iter()
            .map(|&attacker| {
                defenders
                    .iter()
                    .map(|&defender| self.multiplier(attacker, defender))
                    .product::<f64>()
            })
            .fold(0.0, f64::max)
    }
}

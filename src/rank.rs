use nalgebra::{DMatrix, DVector};
use thiserror::Error;

const MAX_ITERATIONS: usize = 10_000;
const TOLERANCE: f64 = 1e-10;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Orientation {
    Offense,
    Defense,
}

#[derive(Error, Debug)]
pub enum CentralityError {
    #[error("power iteration did not converge within {0} iterations")]
    NoConvergence(usize),

    #[error("eigenvector sum {0} is too close to zero to normalize")]
    DegenerateSum(f64),
}

/// Dominant-eigenvector centrality of a matchup matrix, one score per
/// row/column position. Offense reads the matrix as-is; defense works on
/// the transpose and flips the scale (`2 - v`) so that higher is better
/// in both orientations. Entries of the returned vector sum to the
/// matrix dimension.
pub fn centrality(
    matrix: &DMatrix<f64>,
    orientation: Orientation,
) -> Result<Vec<f64>, CentralityError> {
    let working = match orientation {
        Orientation::Offense => matrix.clone(),
        Orientation::Defense => matrix.transpose(),
    };
    let mut vector = dominant_eigenvector(&working)?;

    // Eigenvectors are only determined up to sign; orient so the sum is
    // positive before normalizing.
    let mut sum: f64 = vector.iter().sum();
    if sum < 0.0 {
        vector.neg_mut();
        sum = -sum;
    }
    if sum < TOLERANCE {
        return Err(CentralityError::DegenerateSum(sum));
    }

    let scale = matrix.nrows() as f64 / sum;
    let scores = vector.iter().map(|value| value * scale);
    Ok(match orientation {
        Orientation::Offense => scores.collect(),
        Orientation::Defense => scores.map(|value| 2.0 - value).collect(),
    })
}

/// Power iteration to the eigenvector of the spectral radius. The matchup
/// matrices are entry-wise non-negative, so the dominant eigenvalue is
/// real and its eigenvector can be taken non-negative, which is exactly
/// the fixed point this converges to.
fn dominant_eigenvector(matrix: &DMatrix<f64>) -> Result<DVector<f64>, CentralityError> {
    let size = matrix.nrows();
    let mut vector = DVector::from_element(size, 1.0 / (size as f64).sqrt());
    for iteration in 0..MAX_ITERATIONS {
        let next = matrix * &vector;
        let norm = next.norm();
        if norm < TOLERANCE {
            return Err(CentralityError::DegenerateSum(norm));
        }
        let next = next / norm;
        let delta = (&next - &vector).norm();
        vector = next;
        if delta < TOLERANCE {
            log::debug!("power iteration converged after {} iterations", iteration + 1);
            return Ok(vector);
        }
    }
    Err(CentralityError::NoConvergence(MAX_ITERATIONS))
}

/// Weighted blend of offensive and defensive centrality, position by
/// position. Weights need not sum to 1.
pub fn combine_scores(
    offense: &[f64],
    defense: &[f64],
    offense_weight: f64,
    defense_weight: f64,
) -> Vec<f64> {
    offense
        .iter()
        .zip(defense)
        .map(|(off, def)| offense_weight * off + defense_weight * def)
        .collect()
}

/// Row sums of the log-advantage matrix: each combination's total net
/// advantage across every opponent.
pub fn net_advantage(log_matrix: &DMatrix<f64>) -> Vec<f64> {
    (0..log_matrix.nrows())
        .map(|row| log_matrix.row(row).sum())
        .collect()
}

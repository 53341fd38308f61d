use crate::chart::TypeChart;
use crate::combo::Combination;
use nalgebra::DMatrix;
use rayon::prelude::*;

/// Combination-vs-combination effectiveness, rows = attacker.
pub fn effectiveness_matrix(chart: &TypeChart, combos: &[Combination]) -> DMatrix<f64> {
    build_matrix(combos, |attacker, defender| {
        chart.effectiveness(attacker.members(), defender.members())
    })
}

/// Pairwise log2 matchup scores. Always finite because `matchup_score`
/// is strictly positive. Feeds the net-advantage row sums.
pub fn log_advantage_matrix(chart: &TypeChart, combos: &[Combination]) -> DMatrix<f64> {
    build_matrix(combos, |attacker, defender| {
        matchup_score(chart, attacker, defender).log2()
    })
}

/// Directional advantage ratio between two typings: how hard x hits y
/// divided by how hard y hits back. A side with zero effectiveness is
/// substituted with 0.25 before dividing so the ratio stays positive;
/// mutual immunity is a neutral 1.
pub fn matchup_score(chart: &TypeChart, x: &Combination, y: &Combination) -> f64 {
    let mut forward = chart.effectiveness(x.members(), y.members());
    let mut reverse = chart.effectiveness(y.members(), x.members());

    if forward == 0.0 && reverse == 0.0 {
        return 1.0;
    } else if forward == 0.0 {
        forward = 0.25;
    } else if reverse == 0.0 {
        reverse = 0.25;
    }

    forward / reverse
}

fn build_matrix<F>(combos: &[Combination], cell: F) -> DMatrix<f64>
where
    F: Fn(&Combination, &Combination) -> f64 + Sync,
{
    let size = combos.len();
    let tasks: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    let cells: Vec<(usize, usize, f64)> = tasks
        .par_iter()
        .map(|&(row, col)| (row, col, cell(&combos[row], &combos[col])))
        .collect();

    let mut matrix = DMatrix::zeros(size, size);
    for (row, col, value) in cells {
        matrix[(row, col)] = value;
    }
    log::debug!("built {size}x{size} combination matrix");
    matrix
}

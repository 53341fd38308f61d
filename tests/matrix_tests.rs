use type_matchup_matrix::chart::TypeChart;
use type_matchup_matrix::combo::{combinations, labels, single_combinations, Combination};
use type_matchup_matrix::matrix::{effectiveness_matrix, log_advantage_matrix, matchup_score};

fn chart_from(names: &[&str], rows: Vec<Vec<f64>>) -> TypeChart {
    TypeChart::new(names.iter().map(|n| n.to_string()).collect(), rows).unwrap()
}

fn toy_chart() -> TypeChart {
    chart_from(&["X", "Y"], vec![vec![1.0, 2.0], vec![0.5, 1.0]])
}

fn combo<'a>(combos: &'a [Combination], label: &str) -> &'a Combination {
    combos
        .iter()
        .find(|c| c.label() == label)
        .unwrap_or_else(|| panic!("no combination labelled {label}"))
}

#[test]
fn standard_universe_has_171_unique_combinations() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    assert_eq!(combos.len(), 171); // 18 + C(18,2)

    let unique: std::collections::HashSet<&str> =
        combos.iter().map(|c| c.label()).collect();
    assert_eq!(unique.len(), combos.len());
}

#[test]
fn universe_order_and_labels_are_canonical() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    assert_eq!(combos[0].label(), "Normal");
    assert_eq!(combos[1].label(), "Normal/Fire");
    assert_eq!(combos[18].label(), "Fire");
    assert_eq!(combos[170].label(), "Fairy");

    // Pair labels always list the lower registry index first.
    let all = labels(&combos);
    assert!(all.contains(&"Fire/Fairy".to_string()));
    assert!(!all.contains(&"Fairy/Fire".to_string()));
}

#[test]
fn toy_universe_matches_hand_enumeration() {
    let combos = combinations(&toy_chart());
    assert_eq!(labels(&combos), vec!["X", "X/Y", "Y"]);
    assert_eq!(combos[0].members(), &[0]);
    assert_eq!(combos[1].members(), &[0, 1]);
}

#[test]
fn single_universe_matrix_equals_the_base_table() {
    let chart = TypeChart::standard();
    let singles = single_combinations(&chart);
    assert_eq!(singles.len(), 18);
    assert_eq!(singles[4].label(), "Grass");

    let matrix = effectiveness_matrix(&chart, &singles);
    assert_eq!(&matrix, chart.base_matrix());
}

#[test]
fn toy_effectiveness_matrix_matches_hand_computation() {
    let chart = toy_chart();
    let combos = combinations(&chart);
    let matrix = effectiveness_matrix(&chart, &combos);

    let expected = [
        [1.0, 2.0, 2.0],
        [1.0, 2.0, 2.0],
        [0.5, 0.5, 1.0],
    ];
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(matrix[(row, col)], expected[row][col], "cell ({row}, {col})");
        }
    }
}

#[test]
fn dual_matrix_entries_stay_in_composed_domain() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    let matrix = effectiveness_matrix(&chart, &combos);
    let allowed = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];
    for row in 0..combos.len() {
        for col in 0..combos.len() {
            let value = matrix[(row, col)];
            assert!(
                allowed.contains(&value),
                "{} vs {} produced {value}",
                combos[row].label(),
                combos[col].label()
            );
        }
    }
}

#[test]
fn matrix_cells_agree_with_direct_evaluation() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    let matrix = effectiveness_matrix(&chart, &combos);
    for &(row, col) in &[(0usize, 0usize), (3, 140), (98, 17), (170, 42)] {
        assert_eq!(
            matrix[(row, col)],
            chart.effectiveness(combos[row].members(), combos[col].members())
        );
    }
}

#[test]
fn toy_matchup_follows_the_ratio_contract() {
    let chart = toy_chart();
    let combos = combinations(&chart);
    let x = combo(&combos, "X");
    let y = combo(&combos, "Y");

    assert_eq!(chart.effectiveness(x.members(), y.members()), 2.0);
    assert_eq!(matchup_score(&chart, x, y), 4.0); // 2 / 0.5
    assert_eq!(matchup_score(&chart, y, x), 0.25);

    let log_matrix = log_advantage_matrix(&chart, &combos);
    assert_eq!(log_matrix[(0, 2)], 2.0);
    assert_eq!(log_matrix[(2, 0)], -2.0);
    for idx in 0..combos.len() {
        assert_eq!(log_matrix[(idx, idx)], 0.0);
    }
}

#[test]
fn every_combination_is_neutral_against_itself() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    for c in &combos {
        assert_eq!(matchup_score(&chart, c, c), 1.0, "{}", c.label());
    }
}

#[test]
fn self_immune_type_hits_the_mutual_immunity_branch() {
    let chart = chart_from(&["Z"], vec![vec![0.0]]);
    let combos = combinations(&chart);
    let z = combo(&combos, "Z");
    assert_eq!(chart.effectiveness(z.members(), z.members()), 0.0);
    assert_eq!(matchup_score(&chart, z, z), 1.0);
}

#[test]
fn one_sided_immunity_substitutes_a_quarter() {
    // B never touches A, but A hits B for 2x: the zero side becomes 0.25.
    let chart = chart_from(&["A", "B"], vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
    let combos = combinations(&chart);
    let a = combo(&combos, "A");
    let b = combo(&combos, "B");
    assert_eq!(matchup_score(&chart, a, b), 8.0); // 2 / 0.25
    assert_eq!(matchup_score(&chart, b, a), 0.125); // 0.25 / 2
}

#[test]
fn matchups_invert_when_neither_side_is_immune() {
    let chart = TypeChart::standard();
    let combos = combinations(&chart);
    for row in 0..combos.len() {
        for col in (row + 1)..combos.len() {
            let x = &combos[row];
            let y = &combos[col];
            let forward_hit = chart.effectiveness(x.members(), y.members());
            let reverse_hit = chart.effectiveness(y.members(), x.members());
            if forward_hit == 0.0 || reverse_hit == 0.0 {
                continue;
            }
            let product = matchup_score(&chart, x, y) * matchup_score(&chart, y, x);
            assert!(
                (product - 1.0).abs() < 1e-9,
                "{} vs {} ratio product {product}",
                x.label(),
                y.label()
            );
        }
    }
}

pub mod chart;
pub mod combo;
pub mod matrix;
pub mod model;
pub mod rank;
pub mod report;

use crate::chart::TypeChart;
use crate::combo::{combinations, labels, single_combinations};
use crate::matrix::{effectiveness_matrix, log_advantage_matrix};
use crate::model::ChartFile;
use crate::rank::{centrality, combine_scores, net_advantage, Orientation};
use crate::report::{format_ranking, rank_entries, sample_combinations, SortDirection};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub chart_path: Option<PathBuf>,
    pub singles: bool,
    pub top: usize,
    pub direction: SortDirection,
    pub offense_weight: f64,
    pub defense_weight: f64,
    pub sample: usize,
    pub seed: u64,
}

pub fn load_chart(path: &Path) -> anyhow::Result<TypeChart> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart file at {}", path.display()))?;
    let parsed: ChartFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let chart = parsed
        .into_chart()
        .with_context(|| format!("Invalid type chart in {}", path.display()))?;
    Ok(chart)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.top == 0 {
        anyhow::bail!("--top must be > 0");
    }
    if opts.offense_weight < 0.0 || opts.defense_weight < 0.0 {
        anyhow::bail!("blend weights must be non-negative");
    }
    let chart = match &opts.chart_path {
        Some(path) => load_chart(path)?,
        None => TypeChart::standard(),
    };
    let combos = if opts.singles {
        single_combinations(&chart)
    } else {
        combinations(&chart)
    };
    let combo_labels = labels(&combos);
    log::info!(
        "analyzing {} combinations over {} types",
        combos.len(),
        chart.type_count()
    );

    // The single-type universe is the base table itself.
    let matrix = if opts.singles {
        chart.base_matrix().clone()
    } else {
        effectiveness_matrix(&chart, &combos)
    };
    let offense = centrality(&matrix, Orientation::Offense)?;
    let defense = centrality(&matrix, Orientation::Defense)?;
    let overall = combine_scores(
        &offense,
        &defense,
        opts.offense_weight,
        opts.defense_weight,
    );
    let advantage = net_advantage(&log_advantage_matrix(&chart, &combos));

    let heading = match opts.direction {
        SortDirection::Descending => "Top",
        SortDirection::Ascending => "Bottom",
    };
    print!(
        "{}",
        format_ranking(
            &format!("{heading} {} Offensive Type Combinations", opts.top),
            &rank_entries(&combo_labels, &offense, opts.direction),
            opts.top,
        )
    );
    print!(
        "\n{}",
        format_ranking(
            &format!("{heading} {} Defensive Type Combinations", opts.top),
            &rank_entries(&combo_labels, &defense, opts.direction),
            opts.top,
        )
    );
    print!(
        "\n{}",
        format_ranking(
            &format!(
                "{heading} {} Overall Type Combinations (Offense {}:Defense {})",
                opts.top, opts.offense_weight, opts.defense_weight
            ),
            &rank_entries(&combo_labels, &overall, opts.direction),
            opts.top,
        )
    );
    print!(
        "\n{}",
        format_ranking(
            &format!("{heading} {} Net Advantage Type Combinations", opts.top),
            &rank_entries(&combo_labels, &advantage, opts.direction),
            opts.top,
        )
    );

    if opts.sample > 0 {
        println!("\nRandom type combinations:");
        for label in sample_combinations(&combos, opts.sample, opts.seed) {
            println!("{label}");
        }
    }
    Ok(())
}

use std::env;
use std::path::PathBuf;
use type_matchup_matrix::report::SortDirection;
use type_matchup_matrix::{run, CliOptions};

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--chart chart.json] [--singles] [--top N] [--bottom] \
[--offense-weight W] [--defense-weight W] [--sample N] [--seed SEED]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut chart_path = None;
    let mut singles = false;
    let mut top = 10usize;
    let mut direction = SortDirection::Descending;
    let mut offense_weight = 0.5f64;
    let mut defense_weight = 0.5f64;
    let mut sample = 0usize;
    let mut seed = 0u64;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chart" => {
                chart_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--chart requires a path (e.g. --chart chart.json)")
                })?);
            }
            "--singles" => {
                singles = true;
            }
            "--top" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--top requires a number"))?;
                top = val.parse()?;
            }
            "--bottom" => {
                direction = SortDirection::Ascending;
            }
            "--offense-weight" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--offense-weight requires a float"))?;
                offense_weight = val.parse()?;
            }
            "--defense-weight" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--defense-weight requires a float"))?;
                defense_weight = val.parse()?;
            }
            "--sample" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sample requires a number"))?;
                sample = val.parse()?;
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        chart_path,
        singles,
        top,
        direction,
        offense_weight,
        defense_weight,
        sample,
        seed,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = parse_args()?;
    run(opts)
}

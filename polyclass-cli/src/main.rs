//! Command-line consumer for the point-in-polygon engine.
//!
//! Provides:
//! - Random problem generation from an edge count and a point count
//! - Classification of the query points against the polygon
//! - Plain-text and JSON reporting of the edges and classified sets

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use polyclass_core::{parse_log_level, Point, Problem, Segment, Solution, DEFAULT_SEED};

#[derive(Parser)]
#[command(name = "polyclass")]
#[command(about = "Generate and solve random point-in-polygon problems", long_about = None)]
struct Cli {
    /// Number of polygon edges (even values produce one fewer)
    #[arg(short, long, default_value = "7")]
    sides: usize,

    /// Number of query points to classify
    #[arg(short, long, default_value = "20")]
    points: usize,

    /// RNG seed (defaults to the engine's fixed seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the unclassified point set instead of solving
    #[arg(long)]
    unsolved: bool,

    /// Output file for a JSON report
    #[arg(short, long)]
    output: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    edges: &'a [Segment],
    points: &'a [Point],
    solution: Option<&'a Solution>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(parse_log_level(cli.log_level.as_deref()))
        .init();

    let seed = cli.seed.unwrap_or(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut problem =
        Problem::generate(cli.sides, cli.points, &mut rng).context("problem generation failed")?;
    info!(
        "generated {} edges and {} query points (seed {})",
        problem.polygon().num_sides(),
        problem.points().len(),
        seed,
    );

    println!("polygon:");
    for segment in problem.polygon() {
        println!("  {}", segment);
    }

    if cli.unsolved {
        print_points("points", problem.points());
    } else {
        problem.solve().context("classification failed")?;
        if let Some(solution) = problem.solution() {
            print_points("on boundary", &solution.on_boundary);
            print_points("inside", &solution.inside);
            print_points("outside", &solution.outside);
        }
    }

    if let Some(path) = cli.output {
        let report = Report {
            edges: problem.polygon().segments(),
            points: problem.points(),
            solution: problem.solution(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path))?;
        info!("wrote report to {}", path);
    }

    Ok(())
}

fn print_points(label: &str, points: &[Point]) {
    println!("{} ({}):", label, points.len());
    for p in points {
        println!("  {}", p);
    }
}

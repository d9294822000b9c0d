use std::path::PathBuf;

use anyhow::Context as _;
use evoroute_field::RouteField;
use evoroute_search::{
    search::{RouteSearch, SearchParams, SolveOutcome},
    seed::SearchSeed,
};
use rand::Rng as _;

use crate::{
    maps,
    schema::{field_file::FieldFile, solve_report::SolveReport},
    util,
};

/// Progress lines are emitted on every improvement plus this cadence.
const PROGRESS_EVERY: usize = 200;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// Built-in map id (see the `maps` subcommand)
    #[arg(long, conflicts_with = "field")]
    map: Option<u32>,
    /// Field description JSON file
    #[arg(long, required_unless_present = "map")]
    field: Option<PathBuf>,
    /// 32-character hex seed; random when omitted
    #[arg(long)]
    seed: Option<SearchSeed>,
    /// Routes per generation
    #[arg(long, default_value_t = SearchParams::default().population_size)]
    population: usize,
    /// Generation cap
    #[arg(long, default_value_t = SearchParams::default().max_generations)]
    generations: usize,
    /// Per-route waypoint mutation probability
    #[arg(long, default_value_t = SearchParams::default().mutation_probability)]
    mutation_probability: f64,
    /// Report output path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let field = load_field(arg)?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let params = SearchParams {
        population_size: arg.population,
        max_generations: arg.generations,
        mutation_probability: arg.mutation_probability,
        ..SearchParams::default()
    };

    eprintln!("Seed: {seed}");
    eprintln!(
        "Field: {}x{}, {} obstacle(s), {} -> {}",
        field.width(),
        field.height(),
        field.obstacles().len(),
        field.start(),
        field.end(),
    );

    let mut search = RouteSearch::new(&field, params, seed)?;
    while !search.is_terminated() {
        let summary = search.step()?;
        if summary.improved || summary.generation % PROGRESS_EVERY == 0 {
            if let Some(best) = search.best() {
                eprintln!(
                    "Generation #{}: best {:.3} ({} intersection(s)), population mean {:.3}",
                    summary.generation, best.fitness, best.intersections, summary.fitness.mean,
                );
            }
        }
    }

    let outcome = search
        .into_outcome()
        .context("search finished without recording a route")?;

    match &outcome {
        SolveOutcome::CollisionFree(best) => {
            eprintln!("Fitness: {:.3}", best.fitness);
            eprintln!("Intersections: {}", best.intersections);
            eprintln!("Found in generation {}", best.generation);
            eprintln!("Route: {}", best.route);
        }
        SolveOutcome::BestEffort(best) => {
            eprintln!(
                "No collision-free route found; the best attempt still crosses {} (segment, obstacle) pair(s)",
                best.intersections,
            );
            eprintln!("Fitness: {:.3}", best.fitness);
            eprintln!("Route: {}", best.route);
        }
    }

    let report = SolveReport::new(seed, &params, &outcome);
    util::Output::save_json(&report, arg.output.clone())?;

    Ok(())
}

fn load_field(arg: &SolveArg) -> anyhow::Result<RouteField> {
    if let Some(id) = arg.map {
        let map = maps::find(id).with_context(|| format!("unknown built-in map id: {id}"))?;
        return (map.build)().with_context(|| format!("built-in map {id} failed to build"));
    }
    let path = arg
        .field
        .as_ref()
        .context("either --map or --field is required")?;
    let file: FieldFile = util::read_json_file("field", path)?;
    file.into_field()
        .context("invalid field description")
}

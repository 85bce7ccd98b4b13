use clap::{Parser, Subcommand};
use routeplan::map::{location_from_tag, CityMap, MapError, Tag};
use routeplan::search::{
    a_star_reduction, validate, BoundedProblem, HeuristicName, Plan, SearchEngine, SearchError,
    SearchProblem, SearchResult, ShortestPathProblem, UniformCostSearch, ValidationError,
    Verbosity, WaypointsShortestPathProblem,
};
use std::{path::PathBuf, process::ExitCode, rc::Rc};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find the cheapest route through a map.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The map description file, TOML or JSON")]
    map: PathBuf,
    #[arg(
        help = "A tag of the start location, as key=value",
        short = 's',
        long = "start-tag",
        id = "START_TAG"
    )]
    start_tag: String,
    #[arg(
        help = "The tag any end location must carry, as key=value",
        short = 't',
        long = "end-tag",
        id = "END_TAG"
    )]
    end_tag: String,
    #[arg(
        value_enum,
        help = "The heuristic to run A* with, through the reduction to uniform cost search",
        short = 'e',
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Zero
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "Give up after this many expansions",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
    #[arg(
        help = "Give up after this much time, e.g. 30s or 2m",
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<humantime::Duration>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route to the closest location carrying the end tag.
    ShortestPath,
    /// Route to a location carrying the end tag, passing through locations
    /// that together carry every waypoint tag, in any order.
    Waypoints {
        #[arg(
            help = "A tag the route has to collect, as key=value",
            short = 'w',
            long = "waypoint",
            id = "WAYPOINT",
            required = true
        )]
        waypoint_tags: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum PlannerError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("search returned an invalid route: {0}")]
    Validation(#[from] ValidationError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn plan(cli: Cli) -> Result<(), PlannerError> {
    let city_map = Rc::new(CityMap::from_path(&cli.map)?);
    let start_location = location_from_tag(Tag::new(&cli.start_tag), &city_map)?;
    let end_tag = Tag::new(&cli.end_tag);
    info!(%start_location, %end_tag);

    let problem: Box<dyn SearchProblem> = match cli.command {
        Commands::ShortestPath => Box::new(ShortestPathProblem::new(
            start_location,
            end_tag,
            city_map.clone(),
        )),
        Commands::Waypoints { waypoint_tags } => Box::new(WaypointsShortestPathProblem::new(
            start_location,
            waypoint_tags.iter().map(|tag| Tag::new(tag)),
            end_tag,
            city_map.clone(),
        )),
    };
    let heuristic = cli.heuristic_name.create(end_tag, city_map.clone())?;
    let reduced = a_star_reduction(problem.as_ref(), heuristic.as_ref());
    let bounded = BoundedProblem::new(
        &reduced,
        cli.max_expansions,
        cli.time_limit.map(Into::into),
    );

    let (result, _statistics) = UniformCostSearch::new().search(&bounded)?;
    match result {
        SearchResult::Success(solution) => {
            info!("validating route");
            let total_cost = validate(&solution.plan, problem.as_ref())?;
            info!("route is valid");
            info!(
                plan_length = solution.plan.len(),
                total_cost = reduced.true_cost(solution.total_cost)?.into_inner()
            );

            println!("Route found:");
            println!("{}", Plan::new(solution.plan.route_from(start_location)));
            println!("Total cost: {}", total_cost);
            println!("States explored: {}", solution.states_explored);
        }
        SearchResult::ProvablyUnsolvable => {
            info!("no route found");
            println!("No route found");
        }
    }
    Ok(())
}

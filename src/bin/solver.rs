use clap::{Parser, Subcommand};
use puzzlesearch::{
    problems::{ParkingHeuristicName, ParkingProblem, SokobanHeuristicName, SokobanProblem},
    search::{
        search_engines::{SearchEngineName, SearchResult},
        validate, Heuristic, Problem, SearchConfig, Verbosity,
    },
};
use std::{error::Error, fmt::Display, path::PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(version)]
/// Solve a puzzle level with one of the search engines.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The level file")]
    level: PathBuf,
    #[arg(
        help = "The output plan file, defaults to the level file with a .plan extension",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "A TOML file with search settings, command line options take \
        precedence over it",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Stop searching after this long, e.g. \"30s\" or \"2m 30s\"",
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<String>,
    #[arg(
        help = "Stop searching after expanding this many states",
        long = "expansion-limit",
        id = "EXPANSION_LIMIT"
    )]
    expansion_limit: Option<usize>,
    #[arg(
        help = "Stop searching once the process uses this many megabytes",
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
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
    /// Push every crate onto a goal.
    Sokoban {
        #[arg(
            value_enum,
            help = "The heuristic to use with informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = SokobanHeuristicName::Strong
        )]
        heuristic_name: SokobanHeuristicName,
    },
    /// Move every car into its own slot.
    Parking {
        #[arg(
            value_enum,
            help = "The heuristic to use with informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = ParkingHeuristicName::WeightedManhattan
        )]
        heuristic_name: ParkingHeuristicName,
    },
}

impl Cli {
    /// Search settings from the command line, with the config file filling
    /// in whatever was not given.
    fn search_config(&self) -> Result<SearchConfig, Box<dyn Error>> {
        let from_cli = SearchConfig {
            engine: self.search_engine_name,
            time_limit: self.time_limit.clone(),
            expansion_limit: self.expansion_limit,
            memory_limit_mb: self.memory_limit_mb,
        };
        Ok(match &self.config {
            Some(path) => from_cli.or(SearchConfig::from_path(path)?),
            None => from_cli,
        })
    }

    fn plan_path(&self) -> PathBuf {
        self.plan
            .clone()
            .unwrap_or_else(|| self.level.with_extension("plan"))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match &cli.command {
        Commands::Sokoban { heuristic_name } => {
            let problem = SokobanProblem::from_path(&cli.level)?;
            let mut heuristic = heuristic_name.create();
            solve(&cli, &problem, &mut *heuristic, |state| problem.render(state))
        }
        Commands::Parking { heuristic_name } => {
            let problem = ParkingProblem::from_path(&cli.level)?;
            let mut heuristic = heuristic_name.create();
            solve(&cli, &problem, &mut *heuristic, |state| problem.render(state))
        }
    }
}

fn solve<P>(
    cli: &Cli,
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
    render: impl Fn(&P::State) -> String,
) -> Result<(), Box<dyn Error>>
where
    P: Problem,
    P::Action: Display,
{
    let config = cli.search_config()?;
    let engine_name = config.engine.unwrap_or(SearchEngineName::Astar);
    info!(engine = ?engine_name);
    let mut engine = engine_name.create::<P>(config.termination_condition()?);

    let initial_state = problem.initial_state();
    debug!("initial state:\n{}", render(&initial_state));
    let (result, statistics) = engine.search(problem, initial_state.clone(), heuristic)?;

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            validate(problem, &initial_state, &plan)?;
            info!("plan is valid");

            let cost = plan.cost(problem, &initial_state)?;
            info!(plan_length = plan.len(), plan_cost = cost);

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);
            println!("Expanded nodes: {}", statistics.expanded_nodes());

            std::fs::write(cli.plan_path(), plan.to_string())?;
        }
        result => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
        }
    }
    Ok(())
}

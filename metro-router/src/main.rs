use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use metro_router::domain::{Coord, StationId};
use metro_router::network::Network;
use metro_router::planner::{
    Criterion, Planner, SearchConfig, SearchResult, TimeCalibration, TracingObserver,
};
use metro_router::report::describe;

#[derive(Parser)]
#[command(name = "metro-router")]
#[command(author, version, about = "Find routes through a metro network")]
struct Cli {
    /// Network description (JSON)
    #[arg(long, short)]
    network: PathBuf,

    /// Stop after expanding this many paths
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Between {
    /// Origin station id
    #[arg(long)]
    from: StationId,

    /// Destination station id
    #[arg(long)]
    to: StationId,
}

#[derive(Subcommand)]
enum Command {
    /// Depth-first search between two stations
    Dfs(Between),

    /// Breadth-first search (fewest connections) between two stations
    Bfs(Between),

    /// Uniform-cost search between two stations
    Ucs {
        #[command(flatten)]
        between: Between,

        /// adjacency, time, distance, transfers (or 0-3)
        #[arg(long, short, default_value = "time")]
        criterion: Criterion,
    },

    /// A* between two points, each resolved to its nearest stations
    Astar {
        /// Origin point, `x,y`
        #[arg(long, allow_hyphen_values = true)]
        from: Coord,

        /// Destination point, `x,y`
        #[arg(long, allow_hyphen_values = true)]
        to: Coord,

        /// adjacency, time, distance, transfers (or 0-3)
        #[arg(long, short, default_value = "time")]
        criterion: Criterion,

        /// Time heuristic divisor: fixed, derived, or a positive number
        #[arg(long, default_value = "fixed")]
        calibration: TimeCalibration,

        /// Try destination candidates one after another
        #[arg(long)]
        sequential: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "metro_router=debug",
        _ => "metro_router=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let network = Network::load(&cli.network)
        .with_context(|| format!("loading network from {}", cli.network.display()))?;

    let mut config = SearchConfig::default();
    if let Some(limit) = cli.max_expansions {
        config = config.with_max_expansions(limit);
    }

    let result = match cli.command {
        Command::Dfs(Between { from, to }) => planner(&network, &config).depth_first(from, to)?,
        Command::Bfs(Between { from, to }) => planner(&network, &config).breadth_first(from, to)?,
        Command::Ucs { between, criterion } => {
            planner(&network, &config).uniform_cost(between.from, between.to, criterion)?
        }
        Command::Astar {
            from,
            to,
            criterion,
            calibration,
            sequential,
        } => {
            config = config.with_time_calibration(calibration);
            if sequential {
                config = config.sequential();
            }
            planner(&network, &config).astar(&from, &to, criterion)?
        }
    };

    print_result(&result, &network);
    Ok(())
}

fn planner<'a>(network: &'a Network, config: &'a SearchConfig) -> Planner<'a, TracingObserver> {
    Planner::new(network, config).with_observer(TracingObserver)
}

fn print_result(result: &SearchResult, network: &Network) {
    match &result.path {
        Some(path) => println!("{}", describe(path, network)),
        None => println!("no route"),
    }
    tracing::debug!(expanded = result.expanded, "Done");
}

//! Console driver: load a route network, then answer queries read from stdin.

use std::io::{self, BufRead, Lines};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};

use route_network::command::{COMMAND_NOT_RECOGNIZED, HELP};
use route_network::input::read_routes_csv;
use route_network::{Command, Network};

#[derive(Parser)]
#[command(name = "route-network")]
#[command(about = "Distance, trip count and shortest route queries over a route network")]
#[command(long_about = "Loads a route network, then reads one query per line from stdin:
  route-network --graph \"AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7\"
  route-network --routes routes.csv        # CSV with a from,to,distance header
  route-network                            # prompt for a graph on stdin")]
#[command(version)]
struct Cli {
    /// Inline graph description, e.g. "AB5, BC4"
    #[arg(short, long, conflicts_with = "routes")]
    graph: Option<String>,

    /// CSV file of routes with a from,to,distance header
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let mut lines = io::stdin().lock().lines();

    let network: Network = match (cli.graph, cli.routes) {
        (Some(graph), _) => graph.parse()?,
        (None, Some(path)) => read_routes_csv(path)?.into_iter().collect(),
        (None, None) => match prompt_for_network(&mut lines)? {
            Some(network) => network,
            None => return Ok(()),
        },
    };
    info!("Loaded network with {} stops", network.len());

    println!("{HELP}");

    for line in lines {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                debug!("Running {command:?}");
                if let Some(output) = command.execute(&network) {
                    println!("{output}");
                }
            }
            Err(e) => {
                debug!("{e}");
                println!("{COMMAND_NOT_RECOGNIZED}");
            }
        }
    }

    Ok(())
}

/// Asks for a graph description until one parses. Returns `None` on end of input.
fn prompt_for_network<B: BufRead>(lines: &mut Lines<B>) -> Result<Option<Network>> {
    loop {
        println!("Enter a graph to begin.");

        let Some(line) = lines.next() else {
            return Ok(None);
        };

        match line?.parse::<Network>() {
            Ok(network) => return Ok(Some(network)),
            Err(e) => {
                warn!("{e}");
                println!("{COMMAND_NOT_RECOGNIZED}");
            }
        }
    }
}

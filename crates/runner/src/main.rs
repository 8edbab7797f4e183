pub mod config;
pub mod csv_loader;
pub mod error;
pub mod generator;
pub mod report;
pub mod searcher;
pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bellman_ford_core::BellmanFordSolver;
use csv_loader::CsvGraphLoader;
use error::Error;
use generator::RandomGraphGenerator;
use searcher::PathSearcher;
use types::GraphProvider;

/// Single-source shortest paths with negative cycle detection
#[derive(Parser, Debug)]
#[command(name = "runner")]
#[command(about = "Bellman-Ford shortest paths with negative cycle detection", long_about = None)]
struct Cli {
    /// Configuration file (default: crates/runner/Config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source vertex, overrides query.source
    #[arg(long)]
    source: Option<usize>,

    /// Target vertex for the path query, overrides query.target
    #[arg(long)]
    target: Option<usize>,

    /// Random generator seed, overrides graph.seed
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Mode {
    /// Generate a seeded random graph from the `[graph]` settings
    Random,
    /// Read edges from a `from,to,weight` CSV file
    Csv {
        path: PathBuf,

        /// Vertex count; inferred from the largest endpoint when omitted
        #[arg(long)]
        vertices: Option<usize>,
    },
}

impl Cli {
    fn apply_overrides(&self, config: &mut config::Config) {
        if let Some(source) = self.source {
            config.query.source = source;
        }
        if let Some(target) = self.target {
            config.query.target = Some(target);
        }
        if let Some(seed) = self.seed {
            config.graph.seed = seed;
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!(error = %e, "runner failed");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    let mut config = config::load_config(&config_path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    info!(path = %config_path.display(), "configuration loaded");

    let mode = cli.mode.clone().unwrap_or(Mode::Random);
    let provider = build_provider(&mode, &config);
    let graph = provider.load()?;

    let searcher = PathSearcher::new(BellmanFordSolver, config.query.source, config.query.target);
    let report = searcher.search(&graph)?;

    println!("{}", report);
    Ok(())
}

/// Picks the graph source for the selected mode.
fn build_provider(mode: &Mode, config: &config::Config) -> Box<dyn GraphProvider> {
    match mode {
        Mode::Random => {
            info!(seed = config.graph.seed, "using random graph generator");
            Box::new(RandomGraphGenerator::new(&config.graph))
        }
        Mode::Csv { path, vertices } => {
            info!(path = %path.display(), "using CSV graph file");
            Box::new(CsvGraphLoader::new(path.clone(), *vertices))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> config::Config {
        config::Config {
            graph: config::GraphConfig {
                vertex_count: 10,
                edge_attempts: 30,
                weight_min: -10,
                weight_max: 9,
                seed: 1,
            },
            query: config::QueryConfig {
                source: 3,
                target: None,
            },
        }
    }

    #[test]
    fn test_default_mode_is_random() {
        let cli = Cli::try_parse_from(["runner"]).unwrap();
        assert_eq!(cli.mode, None);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_csv_mode_parsing() {
        let cli = Cli::try_parse_from(["runner", "csv", "edges.csv", "--vertices", "7"]).unwrap();

        assert_eq!(
            cli.mode,
            Some(Mode::Csv {
                path: PathBuf::from("edges.csv"),
                vertices: Some(7),
            })
        );
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["runner", "sim"]).is_err());
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from(["runner", "--source", "0", "--target", "4", "--seed", "77"])
            .unwrap();
        let mut config = sample_config();
        cli.apply_overrides(&mut config);

        assert_eq!(config.query.source, 0);
        assert_eq!(config.query.target, Some(4));
        assert_eq!(config.graph.seed, 77);
    }

    #[test]
    fn test_no_overrides_keep_config_values() {
        let cli = Cli::try_parse_from(["runner", "random"]).unwrap();
        let mut config = sample_config();
        cli.apply_overrides(&mut config);

        assert_eq!(config.query.source, 3);
        assert_eq!(config.query.target, None);
        assert_eq!(config.graph.seed, 1);
    }

    #[test]
    fn test_random_provider_uses_config() {
        let config = sample_config();
        let graph = build_provider(&Mode::Random, &config).load().unwrap();

        assert_eq!(graph.vertex_count(), 10);
    }
}

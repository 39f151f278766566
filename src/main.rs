//! Baseball Solver - CLI
//!
//! Number baseball with TUI and CLI modes, using minimax guess selection.

use anyhow::{Context, Result};
use baseball_solver::{
    commands::{
        SolveConfig, analyze_code, random_secrets, run_benchmark, run_simple, solve_code,
    },
    core::Scale,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    session::{Mode, SolverConfig},
    solver::{ExecutorType, Universe},
};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "baseball_solver",
    about = "Number baseball solver using minimax search over every possible code",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in a code (3-9)
    #[arg(short = 'n', long, global = true, default_value_t = 4)]
    scale: usize,

    /// Executor: offload (default, worker thread) or direct
    #[arg(short, long, global = true, default_value = "offload")]
    executor: String,

    /// Milliseconds between stop checks while a worker searches
    #[arg(long, global = true, default_value_t = 50)]
    poll_ms: u64,

    /// Engine turns allowed before giving up
    #[arg(long, global = true, default_value_t = 10)]
    max_turns: usize,

    /// Search the first guess too instead of opening with 0123...
    #[arg(long, global = true)]
    search_opening: bool,

    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// attack (you guess), defense (I guess) or autoplay
        #[arg(short, long, default_value = "defense")]
        mode: Mode,

        /// Secret for attack or autoplay (random if omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Simple CLI mode (interactive play without TUI)
    Simple {
        /// attack (you guess), defense (I guess) or autoplay
        #[arg(short, long, default_value = "defense")]
        mode: Mode,

        /// Secret for attack or autoplay (random if omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Solve a specific secret code
    Solve {
        /// The secret to solve
        secret: String,

        /// Show candidate counts for every turn
        #[arg(long)]
        detail: bool,
    },

    /// Show how a code partitions every possible secret
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to play
        #[arg(short, long, default_value_t = 50)]
        count: usize,

        /// Play every possible secret instead
        #[arg(long)]
        all: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scale = Scale::new(cli.scale).context("invalid --scale")?;
    let config = SolverConfig::new()
        .with_max_turns(cli.max_turns)
        .with_fixed_opening(!cli.search_opening)
        .with_executor(ExecutorType::from_name(
            &cli.executor,
            Duration::from_millis(cli.poll_ms),
        ));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: Mode::Defense,
        secret: None,
    });

    match command {
        Commands::Play { mode, secret } => run_play_command(scale, mode, secret, config),
        Commands::Simple { mode, secret } => run_simple(scale, mode, secret.as_deref(), config),
        Commands::Solve { secret, detail } => run_solve_command(scale, secret, detail, config),
        Commands::Analyze { code } => run_analyze_command(scale, &code),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(scale, count, all, config);
            Ok(())
        }
    }
}

fn run_solve_command(
    scale: Scale,
    secret: String,
    detail: bool,
    config: SolverConfig,
) -> Result<()> {
    let mut solve_config = SolveConfig::new(secret, scale);
    solve_config.solver = config;

    let result = solve_code(solve_config).context("invalid secret")?;
    print_solve_result(&result, scale, detail);
    Ok(())
}

fn run_analyze_command(scale: Scale, code: &str) -> Result<()> {
    let result = analyze_code(code, scale).context("invalid code")?;
    print_analysis_result(&result, scale);
    Ok(())
}

fn run_benchmark_command(scale: Scale, count: usize, all: bool, config: SolverConfig) {
    let universe = Universe::generate(scale);
    let secrets = if all {
        println!("Running benchmark on all {} secrets...", universe.len());
        universe.as_slice().to_vec()
    } else {
        println!("Running benchmark on {count} random secrets...");
        random_secrets(universe.as_slice(), count, &mut rand::rng())
    };

    let result = run_benchmark(scale, &secrets, config, true);
    print_benchmark_result(&result);
}

fn run_play_command(
    scale: Scale,
    mode: Mode,
    secret: Option<String>,
    config: SolverConfig,
) -> Result<()> {
    use baseball_solver::interactive::{App, run_tui};

    let app = App::new(scale, mode, secret, config);
    run_tui(app)
}

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use domino_circle::{
    commands,
    config::CircleConfig,
    error::CircleResult,
    report::OutputFormat,
    shell::Shell,
};
use domino_sdk::parse_count;
use dotenv::dotenv;
use log::error;

#[derive(Parser)]
#[command(
    version,
    about = "Find every circular chain through a set of dominoes",
    long_about = None
)]
struct Cli {
    /// Print solutions as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu {},

    /// Solve a tile list such as "2 1, 2 3, 1 3"
    Solve { tiles: String },

    /// Solve the tiles stored in a file
    Load { path: PathBuf },

    /// Store a tile list in a file
    Save { path: PathBuf, tiles: String },

    /// Generate random tiles and solve them
    Random { count: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenv().ok();
    env_logger::init();

    let mut config = CircleConfig::from_env();
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    match run(cli.command.unwrap_or(Commands::Menu {}), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: CircleConfig) -> CircleResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Menu {} => {
            let rng = config.rng();
            return Shell::new(io::stdin().lock(), out, rng, config).run();
        }
        Commands::Solve { tiles } => commands::solve_text(&mut out, &tiles, &config)?,
        Commands::Load { path } => commands::solve_file(&mut out, &path, &config)?,
        Commands::Save { path, tiles } => commands::save_text(&mut out, &path, &tiles)?,
        Commands::Random { count } => {
            let count = parse_count(&count)?;
            commands::solve_random(&mut out, &mut config.rng(), count, &config)?;
        }
    }

    out.flush()?;
    Ok(())
}

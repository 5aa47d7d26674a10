//! CLI for Ganit column arithmetic worksheets

use clap::Parser;
use ganit::{GanitApp, GanitConfig, Operation};
use ganit_cli::{OutputFormat, commands, error::CliError};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ganit")]
#[command(about = "Column arithmetic worksheets with carries and borrows", long_about = None)]
struct Cli {
    /// Config file path (JSON or TOML)
    #[arg(short, long, global = true, env = "GANIT_CONFIG")]
    config_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "GANIT_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum LessonCommands {
    /// Count two groups of objects
    Objects {
        /// First number (0-9)
        first: String,
        /// Second number (0-9)
        second: String,
    },
    /// Hop along a number line from 0 to 20
    NumberLine {
        /// First number (0-9)
        first: String,
        /// Second number (0-9)
        second: String,
    },
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the column grid for two numbers
    Grid {
        /// Top number
        left: String,
        /// Bottom number
        right: String,
        /// Operation (addition, subtraction)
        #[arg(long, short, default_value = "addition")]
        op: Operation,
        /// Number of digit columns (defaults to the wider number)
        #[arg(long)]
        cols: Option<usize>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Hide the place-value header
        #[arg(long)]
        no_header: bool,
    },
    /// Check the numbers, solve and explain every column
    Solve {
        /// Top number
        left: String,
        /// Bottom number
        right: String,
        /// Operation (addition, subtraction)
        #[arg(long, short, default_value = "addition")]
        op: Operation,
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Single-digit addition slides
    Lesson {
        #[command(subcommand)]
        command: LessonCommands,
    },
    /// List the place-value labels
    PlaceValues,
}

fn load_config(path: Option<&PathBuf>) -> Result<GanitConfig, CliError> {
    match path {
        Some(path) => {
            let config = GanitConfig::load_from_file(path)
                .map_err(|e| CliError::Config(e.to_string()))?;
            tracing::info!("Configuration loaded from: {}", path.display());
            Ok(config)
        }
        None => Ok(GanitConfig::default()),
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let filter = format!("ganit={},ganit_cli={}", cli.log_level, cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(cli.config_file.as_ref())?;
    let app = GanitApp::builder().config(config).build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Grid {
            left,
            right,
            op,
            cols,
            format,
            no_header,
        }) => {
            let args = commands::GridArgs {
                left: left.clone(),
                right: right.clone(),
                operation: *op,
                num_cols: *cols,
                format: *format,
                show_header: !*no_header,
            };
            commands::run_grid(&app, &mut out, &args)?;
        }
        Some(Commands::Solve {
            left,
            right,
            op,
            format,
        }) => {
            commands::run_solve(&app, &mut out, left, right, *op, *format)?;
        }
        Some(Commands::Lesson { command }) => match command {
            LessonCommands::Objects { first, second } => {
                commands::run_objects(&mut out, first, second)?;
            }
            LessonCommands::NumberLine { first, second } => {
                commands::run_number_line(&mut out, first, second)?;
            }
        },
        Some(Commands::PlaceValues) => {
            commands::run_place_values(&mut out)?;
        }
        None => {
            writeln!(out, "Ganit column arithmetic worksheets")?;
            writeln!(out, "Use --help for more information")?;
        }
    }

    Ok(())
}

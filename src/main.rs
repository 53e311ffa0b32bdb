use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;
use wktlib::WktConfig;

mod cli_commands;

/// Read, inspect and rewrite Well-Known Text geometries
#[derive(Parser, Debug)]
#[command(version, long_about = None, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    format: FormatArgs,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Character separating geometries in a document
    #[arg(long, default_value_t = ';', global = true)]
    delimiter: char,

    /// Character separating components inside a geometry
    #[arg(long, default_value_t = ',', global = true)]
    separator: char,

    /// Write multipoint members as (x y)
    #[arg(long, global = true)]
    wrap_vertices: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the type and size of each geometry in a document
    Inspect {
        /// WKT text, or '-' to read from stdin
        input: String,
    },

    /// Rewrite a document in canonical form
    Normalize {
        /// WKT text, or '-' to read from stdin
        input: String,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print each geometry of a document as GeoJSON
    Geojson {
        /// WKT text, or '-' to read from stdin
        input: String,
    },
}

impl From<&FormatArgs> for WktConfig {
    fn from(args: &FormatArgs) -> Self {
        WktConfig::default()
            .with_delimiter(args.delimiter)
            .with_separator(args.separator)
            .with_wrap_vertices(args.wrap_vertices)
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = WktConfig::from(&cli.format);
    config.validate().map_err(|e| e.to_string())?;
    log::debug!("Using {config:?}");

    match cli.command {
        Commands::Inspect { input } => cli_commands::inspect(input, config),
        Commands::Normalize { input, output } => cli_commands::normalize(input, output, config),
        Commands::Geojson { input } => cli_commands::geojson(input, config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

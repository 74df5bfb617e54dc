mod query;
mod serve;

use aurmirror_api::models::SearchBy;
use aurmirror_runtime::Settings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aurmirror",
    version,
    about = "In-memory mirror of the AUR package metadata catalog",
    long_about = "aurmirror loads the full AUR metadata dump, builds name, base-name and \
                  reverse-relationship lookups over it, and answers package queries from an \
                  immutable snapshot that is refreshed in the background."
)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the catalog once and print its statistics
    Stats,
    /// Print the records for the given package names
    Info {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
    /// Search the catalog
    #[command(
        long_about = "Searches package names (name), names and descriptions (name-desc), or one \
                      of the relationship fields: depends, makedepends, optdepends, checkdepends, \
                      provides, conflicts, replaces, groups, keywords."
    )]
    Search {
        /// Field to match against
        #[arg(long, default_value_t = SearchBy::NameDesc)]
        by: SearchBy,

        #[arg(value_name = "ARG")]
        arg: String,
    },
    /// Package names starting with a prefix
    Suggest {
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,
    },
    /// Package base names starting with a prefix
    SuggestBase {
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,
    },
    /// Keep the catalog loaded and refresh it periodically until Ctrl+C
    Serve,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Settings::load_from_file(path)?),
        None => Ok(Settings::default()),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    let component = match &cli.command {
        Commands::Serve => "serve",
        _ => "cli",
    };
    let _guard = aurmirror_runtime::init_logging(component, &settings, cli.verbose);

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Stats => rt.block_on(query::stats(&settings)),
        Commands::Info { names } => rt.block_on(query::info(&settings, names)),
        Commands::Search { by, arg } => rt.block_on(query::search(&settings, by, arg)),
        Commands::Suggest { prefix } => rt.block_on(query::suggest(&settings, prefix, false)),
        Commands::SuggestBase { prefix } => rt.block_on(query::suggest(&settings, prefix, true)),
        Commands::Serve => rt.block_on(serve::run(&settings)),
    }
}

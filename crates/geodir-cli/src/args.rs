use clap::{Parser, Subcommand};

/// CLI arguments for geodir-cli
#[derive(Debug, Parser)]
#[command(
    name = "geodir",
    version,
    about = "Search countries and inspect aggregated country details"
)]
pub struct CliArgs {
    /// Base URL of the REST Countries compatible service
    #[arg(long = "base-url", env = "GEODIR_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", env = "GEODIR_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the suggestion list for a typed query
    Suggest {
        /// Text as typed into the search box (e.g. "ger")
        query: String,
    },

    /// Show the aggregated detail page for a country
    Show {
        /// Exact country name (e.g. "Germany")
        name: String,
    },

    /// Interactive search box on stdin
    ///
    /// Each line replaces the query text. Commands: `:down`, `:up`,
    /// `:hover N`, `:pick N`, `:enter`, `:clear`, `:quit`.
    Browse,
}

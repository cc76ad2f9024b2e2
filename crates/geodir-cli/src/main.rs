//! geodir-cli — Command-line shell for geodir-core
//!
//! This binary drives the incremental country search and the aggregated
//! detail page from your terminal. Lookups go to a REST Countries compatible
//! service.
//!
//! Usage examples
//! --------------
//!
//! - Show suggestions for a partially typed name
//!   $ geodir suggest ger
//!
//! - Show the detail page of a country (related countries included)
//!   $ geodir show Germany
//!   $ geodir --json show "united states"
//!
//! - Interactive search box: every line replaces the query text
//!   $ geodir browse
//!   > swi
//!   > :down
//!   > :enter
//!
//! Configuration
//! -------------
//!
//! `GEODIR_BASE_URL` and `GEODIR_TIMEOUT_SECS` (or `--base-url` and
//! `--timeout`) point the client at another service. Logs go to stderr and
//! follow `RUST_LOG`, falling back to `-v`/`-vv`.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geodir_core::{
    detail_path, DetailAggregator, DirectoryClient, DirectoryConfig, NavDirection,
    RestCountriesClient, SearchSession, SearchState,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &CliArgs) -> anyhow::Result<DirectoryConfig> {
    let mut config = DirectoryConfig::from_env().context("reading GEODIR_* environment")?;
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs)?;
    }
    Ok(config)
}

fn print_state(state: &SearchState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        print!("{}", render::search_state(state));
    }
    Ok(())
}

async fn show<C>(aggregator: &DetailAggregator<C>, name: &str, json: bool) -> anyhow::Result<()>
where
    C: DirectoryClient + ?Sized,
{
    let outcome = aggregator.aggregate(name).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render::detail_outcome(&outcome));
    }
    Ok(())
}

/// One line of `browse` input.
enum BrowseCommand {
    Type(String),
    Nav(NavDirection),
    Hover(usize),
    Pick(usize),
    Enter,
    Clear,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    fn parse(line: &str) -> Self {
        let Some(cmd) = line.trim().strip_prefix(':') else {
            return BrowseCommand::Type(line.to_string());
        };
        let mut parts = cmd.split_whitespace();
        let word = parts.next().unwrap_or("");
        // suggestion numbers are 1-based on screen
        let index = parts
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1));
        match (word, index) {
            ("down", _) => BrowseCommand::Nav(NavDirection::Down),
            ("up", _) => BrowseCommand::Nav(NavDirection::Up),
            ("hover", Some(i)) => BrowseCommand::Hover(i),
            ("pick", Some(i)) => BrowseCommand::Pick(i),
            ("enter", _) => BrowseCommand::Enter,
            ("clear", _) => BrowseCommand::Clear,
            ("quit" | "q", _) => BrowseCommand::Quit,
            _ => BrowseCommand::Unknown(cmd.to_string()),
        }
    }
}

/// Either the user typed something or a lookup finished.
enum BrowseEvent {
    Line(Option<String>),
    Completed,
}

async fn browse(client: Arc<RestCountriesClient>, json: bool) -> anyhow::Result<()> {
    let aggregator = DetailAggregator::new(Arc::clone(&client));
    let navigator = |name: &str| eprintln!("-> {}", detail_path(name));
    let mut session = SearchSession::new(client, navigator);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let in_flight = session.pending_lookups() > 0;
        let event = tokio::select! {
            line = lines.next_line() => BrowseEvent::Line(line?),
            Some(completion) = session.next_completion(), if in_flight => {
                debug!(?completion, "lookup finished");
                BrowseEvent::Completed
            }
        };

        let line = match event {
            BrowseEvent::Completed => {
                print_state(session.state(), json)?;
                continue;
            }
            BrowseEvent::Line(None) => break,
            BrowseEvent::Line(Some(line)) => line,
        };

        match BrowseCommand::parse(&line) {
            BrowseCommand::Type(text) => {
                if session.input_changed(text).is_none() {
                    print_state(session.state(), json)?;
                }
            }
            BrowseCommand::Nav(direction) => {
                if session.key_navigated(direction) {
                    print_state(session.state(), json)?;
                }
            }
            BrowseCommand::Hover(i) => {
                session.hover(i);
                print_state(session.state(), json)?;
            }
            BrowseCommand::Pick(i) => match session.select(i) {
                Some(name) => show(&aggregator, &name, json).await?,
                None => eprintln!("no suggestion #{}", i + 1),
            },
            BrowseCommand::Enter => {
                if let Some(name) = session.confirm() {
                    show(&aggregator, &name, json).await?;
                }
            }
            BrowseCommand::Clear => {
                session.input_changed("");
                print_state(session.state(), json)?;
            }
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown(cmd) => {
                eprintln!("unknown command :{cmd} (try :down :up :hover N :pick N :enter :clear :quit)")
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = build_config(&args)?;
    debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "directory configured");
    let client = Arc::new(RestCountriesClient::new(config)?);

    match args.command {
        Commands::Suggest { query } => {
            let mut session = SearchSession::new(Arc::clone(&client), |_: &str| {});
            session.input_changed(query);
            session.settle().await;
            print_state(session.state(), args.json)?;
        }

        Commands::Show { name } => {
            let aggregator = DetailAggregator::new(client);
            show(&aggregator, &name, args.json).await?;
        }

        Commands::Browse => browse(client, args.json).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browse_commands() {
        assert!(matches!(BrowseCommand::parse("ger"), BrowseCommand::Type(t) if t == "ger"));
        assert!(matches!(
            BrowseCommand::parse(":down"),
            BrowseCommand::Nav(NavDirection::Down)
        ));
        assert!(matches!(BrowseCommand::parse(":hover 2"), BrowseCommand::Hover(1)));
        assert!(matches!(BrowseCommand::parse(":pick 1"), BrowseCommand::Pick(0)));
        assert!(matches!(BrowseCommand::parse(":pick 0"), BrowseCommand::Unknown(_)));
        assert!(matches!(BrowseCommand::parse(":pick"), BrowseCommand::Unknown(_)));
        assert!(matches!(BrowseCommand::parse(" :quit "), BrowseCommand::Quit));
    }

    #[test]
    fn cli_overrides_config() {
        let args = CliArgs::parse_from([
            "geodir",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "3",
            "suggest",
            "ger",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 3);
    }
}

//! Command-line interface for bazaar
//!
//! Annotates listing text, shows listings from the marketplace API (or from an already fetched
//! JSON dump) and checks usernames against the scammer blacklist.
//!
//! Usage:
//!   bazaar annotate [`<path>`] [--to `<format>`]                  - Linkify a file or stdin
//!   bazaar listings --cat `<category>` [--type `<type>`] [--from-file `<ads.json>`]
//!   bazaar myads [--user-id `<id>`]                               - Listings of the session user
//!   bazaar check `<username>`                                     - Blacklist verdict
//!   bazaar config                                                 - Print effective configuration
//!   bazaar formats                                                - List output formats

mod commands;

use bazaar_config::{BazaarConfig, Loader};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bazaar", version, about = "Tools for the bazaar listing screens")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Override the API origin (e.g. https://market.example)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Override the session theme (light or dark)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Turn urls and Telegram handles in text into links
    Annotate {
        /// File to read, `-` or nothing for stdin
        path: Option<PathBuf>,
        /// Output format
        #[arg(long, short = 't', default_value = "html")]
        to: String,
    },
    /// Show listings of a category, premium first
    Listings {
        /// services, buysell or other
        #[arg(long)]
        cat: String,
        /// Type filter within the category
        #[arg(long = "type", default_value = "all")]
        type_filter: String,
        /// Read ads from a JSON array instead of calling the API
        #[arg(long)]
        from_file: Option<PathBuf>,
        #[arg(long, short = 't', default_value = "plain")]
        to: String,
    },
    /// Show the session user's own listings
    Myads {
        /// User id; defaults to session.user_id from the configuration
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long, short = 't', default_value = "plain")]
        to: String,
    },
    /// Check a username against the scammer blacklist
    Check { username: String },
    /// Print the effective configuration as JSON
    Config,
    /// List available output formats
    Formats,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let result = match cli.command {
        Command::Annotate { path, to } => commands::annotate(&config, path.as_deref(), &to),
        Command::Listings {
            cat,
            type_filter,
            from_file,
            to,
        } => commands::listings(&config, &cat, &type_filter, from_file.as_deref(), &to),
        Command::Myads { user_id, to } => commands::my_ads(&config, user_id.as_deref(), &to),
        Command::Check { username } => commands::check(&config, &username),
        Command::Config => commands::show_config(&config),
        Command::Formats => Ok(commands::list_formats(&config)),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bazaar_cli=info,bazaar_market=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<BazaarConfig, bazaar_config::ConfigError> {
    let mut loader = Loader::new();
    loader = match &cli.config {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file("bazaar.toml"),
    };
    if let Some(base) = &cli.api_base {
        loader = loader.set_override("api.base_url", base.as_str())?;
    }
    if let Some(theme) = &cli.theme {
        loader = loader.set_override("session.theme", theme.as_str())?;
    }
    loader.build()
}

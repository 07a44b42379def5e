//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use linkboard::build_info::LONG_VERSION;
use linkboard::ui::LinkTab;

/// Terminal dashboard for link-shortener analytics.
#[derive(Debug, Parser)]
#[command(name = "linkboard", version, long_version = LONG_VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ./linkboard.toml or ~/.config/linkboard/linkboard.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the dashboard endpoint URL.
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Override the bearer token.
    #[arg(long = "token")]
    pub token: Option<String>,

    /// Link list to show.
    #[arg(long = "tab", value_enum)]
    pub tab: Option<LinkTab>,

    /// Print the decoded snapshot as JSON instead of rendering it.
    #[arg(long = "json")]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the default config to ~/.config/linkboard/linkboard.toml.
    Init {
        /// Overwrite an existing file (a timestamped backup is kept).
        #[arg(long = "force")]
        force: bool,
    },
    /// Show how hex color strings resolve to ARGB channels.
    Color {
        /// Hex strings such as `#fff`, `006AF9`, or `80FF0000`.
        #[arg(required = true)]
        values: Vec<String>,
    },
}

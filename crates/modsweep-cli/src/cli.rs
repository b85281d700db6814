//! Command-line argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::client::parse_url;

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser)]
#[command(name = "modsweep", about = "Bulk moderation client for imageboard admin endpoints")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "MODSWEEP_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(long, global = true, env = "MODSWEEP_SESSION")]
    pub(crate) session: Option<String>,
    #[arg(
        long,
        global = true,
        env = "MODSWEEP_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long,
        global = true,
        help = "Preference file (defaults to the user config dir)"
    )]
    pub(crate) prefs_file: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Delete the given posts in one request.
    Delete(DeleteArgs),
    /// Ban the authors of the given posts in one request.
    Ban(BanArgs),
    /// Show or toggle the selection-checkbox preference.
    Checkboxes(CheckboxesArgs),
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    #[arg(required = true, help = "Post identifiers")]
    pub(crate) ids: Vec<u64>,
    #[arg(long, help = "Board the posts belong to")]
    pub(crate) board: String,
}

#[derive(Args)]
pub(crate) struct BanArgs {
    #[arg(required = true, help = "Post identifiers")]
    pub(crate) ids: Vec<u64>,
    #[arg(long, help = "Board the posts belong to")]
    pub(crate) board: String,
    #[arg(long, help = "Ban length in days")]
    pub(crate) day: Option<u64>,
    #[arg(long, help = "Ban length in hours")]
    pub(crate) hour: Option<u64>,
    #[arg(long, help = "Ban length in minutes")]
    pub(crate) minute: Option<u64>,
    #[arg(long, help = "Reason shown to the banned poster")]
    pub(crate) reason: String,
}

#[derive(Args)]
pub(crate) struct CheckboxesArgs {
    #[arg(value_enum, help = "New state; omit to print the current one")]
    pub(crate) state: Option<CheckboxState>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum CheckboxState {
    /// Display the per-post selection checkboxes.
    Show,
    /// Hide the per-post selection checkboxes.
    Hide,
}

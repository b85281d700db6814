//! Shared client plumbing: context, error types, exit-code policy.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use url::Url;

use modsweep_core::ModerationError;
use modsweep_panel::HttpTransport;

use crate::cli::Cli;
use crate::surface::SessionAuth;

/// CLI-level error distinguishing validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

/// Collaborator context shared by the command handlers.
pub(crate) struct AppContext {
    pub(crate) api_url: Url,
    pub(crate) session: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) prefs_file: Option<PathBuf>,
}

impl AppContext {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            session: cli.session.clone(),
            timeout: Duration::from_secs(cli.timeout),
            prefs_file: cli.prefs_file.clone(),
        }
    }

    /// Build the HTTP transport for one command invocation.
    pub(crate) fn transport(&self) -> CliResult<HttpTransport> {
        HttpTransport::new(self.api_url.clone(), self.timeout).map_err(CliError::failure)
    }

    /// Require the moderation session token.
    pub(crate) fn session_auth(&self) -> CliResult<SessionAuth> {
        self.session
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(SessionAuth::new)
            .ok_or_else(|| {
                CliError::validation(
                    "session token is required (pass --session or set MODSWEEP_SESSION)",
                )
            })
    }

    /// Resolve the preference file, defaulting into the user config dir.
    pub(crate) fn prefs_path(&self) -> CliResult<PathBuf> {
        if let Some(path) = &self.prefs_file {
            return Ok(path.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("modsweep").join("prefs.json"))
            .ok_or_else(|| {
                CliError::validation("no user config directory available; pass --prefs-file")
            })
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Map a moderation error into the CLI failure surface.
///
/// A server rejection keeps the body text verbatim so the moderator sees
/// exactly what the server said.
pub(crate) fn moderation_failure(err: ModerationError) -> CliError {
    match err {
        ModerationError::RequestRejected { status, body } => {
            if body.is_empty() {
                CliError::failure(anyhow!("request failed with status {status}"))
            } else {
                CliError::failure(anyhow!("{body} (status {status})"))
            }
        }
        other => CliError::failure(other),
    }
}

//! One-shot CLI command handlers.
//!
//! Each handler loads config, talks to the API through [`Client`], and
//! renders through the `output` module. The interactive dashboard has its
//! own rendering path and does not go through here.

pub mod auth;
pub mod config;
pub mod service;

use crate::api::Client;
use crate::config::Config;
use crate::output::Format;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub(crate) fn client(config: Config) -> Result<Client> {
    Client::new(config).context("failed to build API client")
}

/// Resolve the output format: explicit flag wins, then the config default.
pub(crate) fn format(explicit: Option<Format>, config: &Config) -> Format {
    explicit.unwrap_or_else(|| Format::from_config(&config.defaults.output))
}

/// Prompt on stderr and read one trimmed line from stdin.
pub(crate) fn prompt(label: &str) -> Result<String> {
    eprint!("{label}: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question, defaulting to no.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"))?;
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes"))
}

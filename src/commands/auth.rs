//! `qspin auth` subcommands.

use super::{client, format, prompt};
use crate::config::Config;
use crate::output::{self, Format};
use anyhow::{bail, Result};
use colored::Colorize;

/// `qspin auth login`
pub async fn login(
    config: Config,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt("Password")?,
    };
    if email.is_empty() || password.is_empty() {
        bail!("email and password are required");
    }

    let client = client(config)?;
    let response = client.login(&email, &password).await?;
    println!(
        "{} Logged in as {}",
        "✓".green(),
        response.user.email.bold()
    );
    Ok(())
}

/// `qspin auth logout`
pub async fn logout(config: Config) -> Result<()> {
    let client = client(config)?;
    client.logout().await?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

/// `qspin auth whoami`
pub async fn whoami(config: Config, output_format: Option<Format>) -> Result<()> {
    let fmt = format(output_format, &config);
    let client = client(config)?;
    let user = client.whoami().await?;
    output::print_user(&user, fmt)
}

/// `qspin auth token`: print the stored access token for scripting.
pub async fn token(config: Config) -> Result<()> {
    match config.token() {
        Some(token) => {
            println!("{token}");
            Ok(())
        }
        None => bail!("no token stored; run 'qspin auth login' first"),
    }
}

/// `qspin auth refresh`: force a token refresh.
pub async fn refresh(config: Config) -> Result<()> {
    let client = client(config)?;
    client.refresh_token().await?;
    println!("{} Token refreshed", "✓".green());
    Ok(())
}

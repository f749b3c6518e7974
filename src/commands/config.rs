//! `qspin config` subcommands.

use crate::config::Config;
use anyhow::{bail, Result};
use colored::Colorize;

/// `qspin config init`: write the default config file.
pub fn init(mut config: Config, force: bool) -> Result<()> {
    let path = config.config_file();
    if path.exists() {
        if !force {
            bail!(
                "config file {} already exists (use --force to overwrite)",
                path.display()
            );
        }
        config.reset_defaults();
    }
    config.save()?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

/// `qspin config view`: dump the effective configuration as TOML.
pub fn view(config: Config) -> Result<()> {
    println!("# {}", config.config_file().display());
    print!("{}", toml::to_string_pretty(&config)?);
    println!();
    println!("# effective environment: {}", config.environment());
    println!("# effective api url: {}", config.api_url());
    Ok(())
}

/// `qspin config get <key>`
pub fn get(config: Config, key: String) -> Result<()> {
    match config.get_value(&key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("unknown config key: {key}"),
    }
}

/// `qspin config set <key> <value>`
pub fn set(mut config: Config, key: String, value: String) -> Result<()> {
    config.set_value(&key, &value)?;
    config.save()?;
    println!("{} {key} = {value}", "✓".green());
    Ok(())
}

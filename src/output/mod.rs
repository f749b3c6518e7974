//! Output rendering for the non-interactive command path.
//!
//! The interactive dashboard renders itself; these helpers only back the
//! one-shot CLI commands (`qspin service list`, `qspin auth whoami`, ...).

use crate::models::{Service, ServiceLogEntry, User};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selected by `--output` or the config default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Table,
    Json,
}

impl Format {
    pub fn from_config(name: &str) -> Self {
        match name {
            "json" => Format::Json,
            _ => Format::Table,
        }
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    service_type: String,
    #[tabled(rename = "TIER")]
    tier: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "REGION")]
    region: String,
}

fn status_cell(service: &Service) -> String {
    use crate::models::ServiceStatus;
    let text = service.status.as_str();
    match service.status {
        ServiceStatus::Running => text.green().to_string(),
        ServiceStatus::Failed => text.red().to_string(),
        ServiceStatus::Stopped => text.yellow().to_string(),
        _ => text.to_string(),
    }
}

/// Render the service list in the requested format.
pub fn print_services(services: &[Service], format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&services),
        Format::Table => {
            if services.is_empty() {
                println!("{}", "No services found".dimmed());
                return Ok(());
            }
            let rows: Vec<ServiceRow> = services
                .iter()
                .map(|s| ServiceRow {
                    name: s.name.clone(),
                    service_type: s.service_type.to_string(),
                    tier: s.tier.to_string(),
                    status: status_cell(s),
                    region: s.region.clone(),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::blank());
            println!("{table}");
            Ok(())
        }
    }
}

/// Render one service in detail.
pub fn print_service(service: &Service, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(service),
        Format::Table => {
            println!("{}  {}", "Name:".bold(), service.name);
            println!("{}    {}", "ID:".bold(), service.id);
            println!("{}  {}", "Type:".bold(), service.service_type);
            println!("{}  {}", "Tier:".bold(), service.tier);
            println!("{} {}", "Status:".bold(), status_cell(service));
            if !service.region.is_empty() {
                println!("{} {}", "Region:".bold(), service.region);
            }
            if let Some(resources) = &service.resources {
                println!(
                    "{} cpu={} memory={} storage={}",
                    "Resources:".bold(),
                    resources.cpu,
                    resources.memory,
                    resources.storage
                );
            }
            if let Some(credentials) = &service.credentials {
                println!(
                    "{} {}:{}",
                    "Endpoint:".bold(),
                    credentials.host,
                    credentials.port
                );
            }
            Ok(())
        }
    }
}

/// Render the authenticated user.
pub fn print_user(user: &User, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(user),
        Format::Table => {
            println!("{} {}", "Email:".bold(), user.email);
            if !user.name.is_empty() {
                println!("{}  {}", "Name:".bold(), user.name);
            }
            println!("{}    {}", "ID:".bold(), user.id);
            Ok(())
        }
    }
}

/// Render service log lines.
pub fn print_logs(entries: &[ServiceLogEntry], format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&entries),
        Format::Table => {
            for entry in entries {
                let level = match entry.level.as_str() {
                    "error" | "ERROR" => entry.level.red().to_string(),
                    "warn" | "WARN" | "warning" => entry.level.yellow().to_string(),
                    _ => entry.level.dimmed().to_string(),
                };
                println!(
                    "{} {:>5} {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
                    level,
                    entry.message
                );
            }
            Ok(())
        }
    }
}

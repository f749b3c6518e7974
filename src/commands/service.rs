//! `qspin service` subcommands.

use super::{client, confirm, format};
use crate::api::{ApiError, Client};
use crate::config::Config;
use crate::models::{CreateServiceRequest, Service, ServiceTier, ServiceType};
use crate::output::{self, Format};
use anyhow::{bail, Result};
use colored::Colorize;

/// `qspin service list`
pub async fn list(config: Config, output_format: Option<Format>) -> Result<()> {
    let fmt = format(output_format, &config);
    let client = client(config)?;
    let services = client.list_services().await?;
    output::print_services(&services, fmt)
}

/// `qspin service describe <service>`
pub async fn describe(
    config: Config,
    service: String,
    output_format: Option<Format>,
) -> Result<()> {
    let fmt = format(output_format, &config);
    let client = client(config)?;
    let service = resolve(&client, &service).await?;
    output::print_service(&service, fmt)
}

/// `qspin service create`
#[allow(clippy::too_many_arguments)]
pub async fn create(
    config: Config,
    name: String,
    service_type: Option<ServiceType>,
    tier: Option<ServiceTier>,
    region: Option<String>,
    description: Option<String>,
    output_format: Option<Format>,
) -> Result<()> {
    let fmt = format(output_format, &config);

    // Unset flags fall back to the configured defaults.
    let service_type = match service_type {
        Some(t) => t,
        None => config
            .defaults
            .service_type
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
    };
    let tier = match tier {
        Some(t) => t,
        None => config
            .defaults
            .tier
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
    };
    let region = region.or_else(|| {
        if config.defaults.region.is_empty() {
            None
        } else {
            Some(config.defaults.region.clone())
        }
    });

    let client = client(config)?;
    let request = CreateServiceRequest {
        name,
        service_type,
        tier,
        region,
        description,
    };
    let service = client.create_service(&request).await?;
    println!(
        "{} Service {} created ({})",
        "✓".green(),
        service.name.bold(),
        service.status
    );
    output::print_service(&service, fmt)
}

/// `qspin service delete <service>`
pub async fn delete(config: Config, service: String, yes: bool) -> Result<()> {
    let client = client(config)?;
    let service = resolve(&client, &service).await?;

    if !yes && !confirm(&format!("Delete service '{}'? This cannot be undone", service.name))? {
        println!("Aborted");
        return Ok(());
    }

    client.delete_service(&service.id).await?;
    println!("{} Service {} deleted", "✓".green(), service.name.bold());
    Ok(())
}

/// `qspin service scale <service> --tier <tier>`
pub async fn scale(
    config: Config,
    service: String,
    tier: ServiceTier,
    output_format: Option<Format>,
) -> Result<()> {
    let fmt = format(output_format, &config);
    let client = client(config)?;
    let service = resolve(&client, &service).await?;
    let scaled = client.scale_service(&service.id, tier).await?;
    println!(
        "{} Service {} scaling to {}",
        "✓".green(),
        scaled.name.bold(),
        tier
    );
    output::print_service(&scaled, fmt)
}

/// `qspin service logs <service>`
pub async fn logs(
    config: Config,
    service: String,
    lines: usize,
    output_format: Option<Format>,
) -> Result<()> {
    let fmt = format(output_format, &config);
    let client = client(config)?;
    let service = resolve(&client, &service).await?;
    let entries = client.service_logs(&service.id, lines).await?;
    output::print_logs(&entries, fmt)
}

/// Accept either a service id or a unique service name.
async fn resolve(client: &Client, id_or_name: &str) -> Result<Service> {
    match client.get_service(id_or_name).await {
        Ok(service) => return Ok(service),
        Err(ApiError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let services = client.list_services().await?;
    let mut matches = services.into_iter().filter(|s| s.name == id_or_name);
    match (matches.next(), matches.next()) {
        (Some(service), None) => Ok(service),
        (Some(_), Some(_)) => bail!("service name '{id_or_name}' is ambiguous, use its id"),
        (None, _) => bail!("no service found with id or name '{id_or_name}'"),
    }
}

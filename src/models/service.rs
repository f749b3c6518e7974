//! Managed service instances and the requests that operate on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of managed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Redis,
    Rabbitmq,
    Elasticsearch,
    Postgresql,
    Mongodb,
    Mysql,
}

impl ServiceType {
    /// All types, in the order the create wizard offers them.
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Redis,
        ServiceType::Rabbitmq,
        ServiceType::Postgresql,
        ServiceType::Mongodb,
        ServiceType::Mysql,
        ServiceType::Elasticsearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Redis => "redis",
            ServiceType::Rabbitmq => "rabbitmq",
            ServiceType::Elasticsearch => "elasticsearch",
            ServiceType::Postgresql => "postgresql",
            ServiceType::Mongodb => "mongodb",
            ServiceType::Mysql => "mysql",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown service type: {s}"))
    }
}

/// Pricing tier of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Starter,
    Developer,
    Basic,
    Standard,
    Pro,
    Premium,
    Enterprise,
}

impl ServiceTier {
    /// Tiers selectable in the create wizard.
    pub const SELECTABLE: [ServiceTier; 5] = [
        ServiceTier::Developer,
        ServiceTier::Basic,
        ServiceTier::Standard,
        ServiceTier::Pro,
        ServiceTier::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Starter => "starter",
            ServiceTier::Developer => "developer",
            ServiceTier::Basic => "basic",
            ServiceTier::Standard => "standard",
            ServiceTier::Pro => "pro",
            ServiceTier::Premium => "premium",
            ServiceTier::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ServiceTier::Starter,
            ServiceTier::Developer,
            ServiceTier::Basic,
            ServiceTier::Standard,
            ServiceTier::Pro,
            ServiceTier::Premium,
            ServiceTier::Enterprise,
        ]
        .iter()
        .find(|t| t.as_str() == s)
        .copied()
        .ok_or_else(|| format!("unknown tier: {s}"))
    }
}

/// Lifecycle state of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pending,
    Creating,
    Running,
    Stopped,
    Failed,
    Deleting,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::Creating => "creating",
            ServiceStatus::Running => "running",
            ServiceStatus::Stopped => "stopped",
            ServiceStatus::Failed => "failed",
            ServiceStatus::Deleting => "deleting",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection details for a provisioned service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCredentials {
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Resource allocation for a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResources {
    pub cpu: String,
    pub memory: String,
    pub storage: String,
}

/// A managed service instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub tier: ServiceTier,
    pub status: ServiceStatus,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ServiceCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ServiceResources>,
}

/// Request body for `POST /api/v1/services`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub tier: ServiceTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `POST /api/v1/services/{id}/scale`.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleServiceRequest {
    pub tier: ServiceTier,
}

/// Envelope for paginated service listings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
    #[serde(default)]
    pub total: usize,
}

/// One log line from `GET /api/v1/services/{id}/logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_round_trips_through_str() {
        for ty in ServiceType::ALL {
            let parsed: ServiceType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty);
        }
        assert!("memcached".parse::<ServiceType>().is_err());
    }

    #[test]
    fn service_deserializes_from_api_shape() {
        let json = r#"{
            "id": "svc-1",
            "name": "cache",
            "type": "redis",
            "tier": "developer",
            "status": "running",
            "region": "us-east-1",
            "organization_id": "org-1"
        }"#;
        let svc: Service = serde_json::from_str(json).unwrap();
        assert_eq!(svc.service_type, ServiceType::Redis);
        assert_eq!(svc.status, ServiceStatus::Running);
        assert!(svc.credentials.is_none());
    }

    #[test]
    fn create_request_omits_empty_optionals() {
        let req = CreateServiceRequest {
            name: "db".into(),
            service_type: ServiceType::Postgresql,
            tier: ServiceTier::Basic,
            region: None,
            description: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("region"));
        assert!(!json.contains("description"));
    }
}

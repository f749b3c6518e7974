//! Wire-format types shared by the API client, the CLI output layer, and the TUI.

mod service;
mod user;

pub use service::{
    CreateServiceRequest, ScaleServiceRequest, Service, ServiceCredentials, ServiceListResponse,
    ServiceLogEntry, ServiceResources, ServiceStatus, ServiceTier, ServiceType,
};
pub use user::{AuthTokens, LoginRequest, LoginResponse, RefreshTokenRequest, User, UserRole};

use serde::{Deserialize, Serialize};

/// Response from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Response from `GET /version`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
}

//! Service CRUD endpoints.

use super::{ApiError, Client};
use crate::models::{
    CreateServiceRequest, ScaleServiceRequest, Service, ServiceListResponse, ServiceLogEntry,
    ServiceTier,
};

impl Client {
    /// List all services visible to the current user.
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let response: ServiceListResponse = self.get("/api/v1/services").await?;
        Ok(response.services)
    }

    /// Fetch one service by id.
    pub async fn get_service(&self, service_id: &str) -> Result<Service, ApiError> {
        self.get(&format!("/api/v1/services/{service_id}")).await
    }

    /// Provision a new service.
    pub async fn create_service(&self, request: &CreateServiceRequest) -> Result<Service, ApiError> {
        self.post("/api/v1/services", request).await
    }

    /// Delete a service by id.
    pub async fn delete_service(&self, service_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/v1/services/{service_id}")).await
    }

    /// Move a service to a different tier.
    pub async fn scale_service(
        &self,
        service_id: &str,
        tier: ServiceTier,
    ) -> Result<Service, ApiError> {
        let request = ScaleServiceRequest { tier };
        self.post(&format!("/api/v1/services/{service_id}/scale"), &request)
            .await
    }

    /// Tail recent log lines for a service.
    pub async fn service_logs(
        &self,
        service_id: &str,
        lines: usize,
    ) -> Result<Vec<ServiceLogEntry>, ApiError> {
        self.get(&format!("/api/v1/services/{service_id}/logs?lines={lines}"))
            .await
    }
}

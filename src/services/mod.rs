//! Business logic services

pub mod analytics;
pub mod auth;
pub mod equipment;
pub mod reports;
pub mod tickets;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub tickets: tickets::TicketsService,
    pub analytics: analytics::AnalyticsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            equipment: equipment::EquipmentService::new(repository.clone()),
            tickets: tickets::TicketsService::new(repository.clone()),
            analytics: analytics::AnalyticsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository),
        }
    }
}

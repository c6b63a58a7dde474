//! School ICT equipment maintenance and ticketing server
//!
//! A REST JSON API for reporting equipment issues, tracking their
//! resolution, and deriving maintenance analytics (health scores,
//! predictions, schedules and budgets) from the ticket history.

use std::sync::Arc;

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

//! Analytics service.
//!
//! Fetches ticket/equipment snapshots and feeds them to the pure
//! analytics core. A single `now` is captured per entry point so every
//! window boundary within one request agrees on the reference time.

use chrono::{DateTime, Duration, Utc};

use crate::{
    analytics::{
        estimate_budget, health_label, health_score, issue_patterns, predict_one,
        rank_predictions, round1, schedule_for, HEALTH_WINDOW_DAYS, PATTERN_WINDOW_DAYS,
    },
    error::AppResult,
    models::{
        analytics::{
            BudgetEstimate, EquipmentHealth, IssuePatterns, MaintenancePrediction,
            MaintenanceSchedule,
        },
        equipment::Equipment,
        ticket::Ticket,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
}

impl AnalyticsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    async fn scoring_tickets(
        &self,
        equipment_id: i32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Ticket>> {
        self.repository
            .tickets
            .list_for_equipment_since(equipment_id, now - Duration::days(HEALTH_WINDOW_DAYS))
            .await
    }

    fn build_health(equipment: &Equipment, tickets: &[Ticket], now: DateTime<Utc>) -> EquipmentHealth {
        let score = health_score(tickets, now);
        EquipmentHealth {
            equipment_id: equipment.id,
            equipment_type: equipment.equipment_type,
            location: equipment.location.clone(),
            serial_number: equipment.serial_number.clone(),
            health_score: round1(score),
            status: health_label(score).to_string(),
        }
    }

    /// Health summary for one equipment unit. Missing equipment is a
    /// NotFound error for the caller to handle, not a sentinel score.
    pub async fn equipment_health(&self, equipment_id: i32) -> AppResult<EquipmentHealth> {
        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;
        let now = Utc::now();
        let tickets = self.scoring_tickets(equipment_id, now).await?;
        Ok(Self::build_health(&equipment, &tickets, now))
    }

    /// Health summaries for the whole fleet
    pub async fn equipment_health_overview(&self) -> AppResult<Vec<EquipmentHealth>> {
        let now = Utc::now();
        let fleet = self.repository.equipment.list().await?;
        let mut overview = Vec::with_capacity(fleet.len());
        for equipment in &fleet {
            let tickets = self.scoring_tickets(equipment.id, now).await?;
            overview.push(Self::build_health(equipment, &tickets, now));
        }
        Ok(overview)
    }

    /// Maintenance predictions for all equipment, most urgent first
    pub async fn predict_maintenance(&self) -> AppResult<Vec<MaintenancePrediction>> {
        let now = Utc::now();
        let fleet = self.repository.equipment.list().await?;
        let mut predictions = Vec::new();
        for equipment in &fleet {
            let tickets = self.scoring_tickets(equipment.id, now).await?;
            if let Some(prediction) = predict_one(equipment, &tickets, now) {
                predictions.push(prediction);
            }
        }
        tracing::debug!(
            fleet = fleet.len(),
            flagged = predictions.len(),
            "maintenance prediction pass complete"
        );
        Ok(rank_predictions(predictions))
    }

    /// Preventive maintenance schedule for the whole fleet
    pub async fn maintenance_schedule(&self) -> AppResult<MaintenanceSchedule> {
        let now = Utc::now();
        let fleet = self.repository.equipment.list().await?;
        let mut schedule = MaintenanceSchedule::default();
        for equipment in &fleet {
            let tickets = self.scoring_tickets(equipment.id, now).await?;
            if let Some((cadence, entry)) = schedule_for(equipment, &tickets, now) {
                schedule.push(cadence, entry);
            }
        }
        Ok(schedule)
    }

    /// Estimated maintenance budget for the next quarter
    pub async fn maintenance_budget(&self) -> AppResult<BudgetEstimate> {
        let predictions = self.predict_maintenance().await?;
        Ok(estimate_budget(&predictions))
    }

    /// Issue pattern analysis over the trailing 180 days
    pub async fn issue_patterns(&self) -> AppResult<IssuePatterns> {
        let now = Utc::now();
        let fleet = self.repository.equipment.list().await?;
        let tickets = self
            .repository
            .tickets
            .list_since(now - Duration::days(PATTERN_WINDOW_DAYS))
            .await?;
        Ok(issue_patterns(&fleet, &tickets, now))
    }
}

//! Operational reporting service.
//!
//! Plain SQL aggregations over the full ticket history, distinct from
//! the windowed analytics core.

use sqlx::Row;

use crate::{
    api::reports::{EquipmentStatusEntry, ReportEntry, TurnaroundReport},
    error::AppResult,
    models::enums::TicketStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Ticket counts per issue category, most frequent first
    pub async fn frequent_issues(&self) -> AppResult<Vec<ReportEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT issue_category AS label, COUNT(*) AS value
            FROM tickets
            GROUP BY issue_category
            ORDER BY value DESC, label
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ReportEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Mean turnaround in days over all resolved tickets
    pub async fn turnaround_time(&self) -> AppResult<TurnaroundReport> {
        let avg: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT AVG(EXTRACT(EPOCH FROM (updated_at - created_at)) / 86400.0)::double precision
            FROM tickets
            WHERE status = $1
            "#,
        )
        .bind(TicketStatus::Resolved)
        .fetch_one(&self.repository.pool)
        .await?;

        Ok(TurnaroundReport {
            average_turnaround_days: avg,
        })
    }

    /// Equipment counts grouped by working flag
    pub async fn equipment_status(&self) -> AppResult<Vec<EquipmentStatusEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT is_working, COUNT(*) AS value
            FROM equipment
            GROUP BY is_working
            ORDER BY value DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| EquipmentStatusEntry {
                is_working: row.get("is_working"),
                count: row.get("value"),
            })
            .collect())
    }

    /// Ticket counts per equipment kind over the full history
    pub async fn failure_patterns(&self) -> AppResult<Vec<ReportEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT e.equipment_type::text AS label, COUNT(t.id) AS value
            FROM tickets t
            JOIN equipment e ON t.equipment_id = e.id
            GROUP BY e.equipment_type
            ORDER BY value DESC, label
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ReportEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Ticket counts per school, busiest first
    pub async fn school_issues(&self) -> AppResult<Vec<ReportEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT e.school AS label, COUNT(t.id) AS value
            FROM tickets t
            JOIN equipment e ON t.equipment_id = e.id
            GROUP BY e.school
            ORDER BY value DESC, label
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ReportEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }
}

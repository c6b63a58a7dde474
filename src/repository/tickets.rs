//! Ticket and comment repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::ticket::{Comment, CreateComment, CreateTicket, Ticket, TicketQuery, UpdateTicket},
};

#[derive(Clone)]
pub struct TicketsRepository {
    pool: Pool<Postgres>,
}

impl TicketsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List tickets, optionally filtered by equipment, status and
    /// creation cutoff, most recent first
    pub async fn list(&self, query: &TicketQuery) -> AppResult<Vec<Ticket>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.equipment_id.is_some() {
            conditions.push(format!("equipment_id = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if query.created_after.is_some() {
            conditions.push(format!("created_at >= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT * FROM tickets {} ORDER BY created_at DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Ticket>(&sql);
        if let Some(equipment_id) = query.equipment_id {
            builder = builder.bind(equipment_id);
        }
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(created_after) = query.created_after {
            builder = builder.bind(created_after);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Tickets for one equipment unit created on or after the cutoff,
    /// most recent first
    pub async fn list_for_equipment_since(
        &self,
        equipment_id: i32,
        cutoff: DateTime<Utc>,
    ) -> AppResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT * FROM tickets
            WHERE equipment_id = $1 AND created_at >= $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(equipment_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All tickets created on or after the cutoff (pattern analysis
    /// snapshot)
    pub async fn list_since(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE created_at >= $1 ORDER BY created_at DESC",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))
    }

    /// Create a ticket on behalf of the reporting user
    pub async fn create(&self, data: &CreateTicket, created_by: i32) -> AppResult<Ticket> {
        let row = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (equipment_id, issue_category, description, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.issue_category)
        .bind(&data.description)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a ticket; always bumps updated_at so resolution-time
    /// reporting reflects the last status change
    pub async fn update(&self, id: i32, data: &UpdateTicket) -> AppResult<Ticket> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.issue_category, "issue_category");
        add_field!(data.description, "description");
        add_field!(data.status, "status");
        add_field!(data.assigned_to, "assigned_to");

        let query = format!(
            "UPDATE tickets SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Ticket>(&query).bind(now);

        if let Some(ref category) = data.issue_category {
            builder = builder.bind(category);
        }
        if let Some(ref description) = data.description {
            builder = builder.bind(description);
        }
        if let Some(status) = data.status {
            builder = builder.bind(status);
        }
        if let Some(assigned_to) = data.assigned_to {
            builder = builder.bind(assigned_to);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))
    }

    /// Delete a ticket
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ticket {} not found", id)));
        }
        Ok(())
    }

    /// List comments for a ticket, oldest first
    pub async fn list_comments(&self, ticket_id: i32) -> AppResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE ticket_id = $1 ORDER BY created_at",
        )
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Add a comment to a ticket
    pub async fn create_comment(
        &self,
        ticket_id: i32,
        user_id: i32,
        data: &CreateComment,
    ) -> AppResult<Comment> {
        let row = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (ticket_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(ticket_id)
        .bind(user_id)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

//! Ticket service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::ticket::{Comment, CreateComment, CreateTicket, Ticket, TicketQuery, UpdateTicket},
    repository::Repository,
};

#[derive(Clone)]
pub struct TicketsService {
    repository: Repository,
}

impl TicketsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &TicketQuery) -> AppResult<Vec<Ticket>> {
        self.repository.tickets.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Ticket> {
        self.repository.tickets.get_by_id(id).await
    }

    /// Create a ticket against existing equipment
    pub async fn create(&self, data: &CreateTicket, created_by: i32) -> AppResult<Ticket> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        // Surface a clean 404 instead of a foreign-key violation
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.tickets.create(data, created_by).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTicket) -> AppResult<Ticket> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.tickets.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.tickets.delete(id).await
    }

    pub async fn list_comments(&self, ticket_id: i32) -> AppResult<Vec<Comment>> {
        // 404 for comments on a missing ticket
        self.repository.tickets.get_by_id(ticket_id).await?;
        self.repository.tickets.list_comments(ticket_id).await
    }

    pub async fn create_comment(
        &self,
        ticket_id: i32,
        user_id: i32,
        data: &CreateComment,
    ) -> AppResult<Comment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.tickets.get_by_id(ticket_id).await?;
        self.repository
            .tickets
            .create_comment(ticket_id, user_id, data)
            .await
    }
}

//! Ticket API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::ticket::{Comment, CreateComment, CreateTicket, Ticket, TicketQuery, UpdateTicket},
};

use super::AuthenticatedUser;

/// List tickets with optional filters
#[utoipa::path(
    get,
    path = "/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(TicketQuery),
    responses(
        (status = 200, description = "Ticket list", body = Vec<Ticket>)
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<TicketQuery>,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = state.services.tickets.list(&query).await?;
    Ok(Json(tickets))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket details", body = Ticket)
    )
)]
pub async fn get_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Report a new issue. Any authenticated user may create tickets.
#[utoipa::path(
    post,
    path = "/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created", body = Ticket)
    )
)]
pub async fn create_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    let ticket = state.services.tickets.create(&data, claims.user_id).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Update a ticket (technician only)
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateTicket,
    responses(
        (status = 200, description = "Ticket updated", body = Ticket)
    )
)]
pub async fn update_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    claims.require_technician()?;
    let ticket = state.services.tickets.update(id, &data).await?;
    Ok(Json(ticket))
}

/// Delete a ticket (technician only)
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted")
    )
)]
pub async fn delete_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_technician()?;
    state.services.tickets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List comments on a ticket
#[utoipa::path(
    get,
    path = "/tickets/{id}/comments",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Comment list", body = Vec<Comment>)
    )
)]
pub async fn list_comments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.services.tickets.list_comments(id).await?;
    Ok(Json(comments))
}

/// Comment on a ticket
#[utoipa::path(
    post,
    path = "/tickets/{id}/comments",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = CreateComment,
    responses(
        (status = 201, description = "Comment created", body = Comment)
    )
)]
pub async fn create_comment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let comment = state
        .services
        .tickets
        .create_comment(id, claims.user_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

//! Note CRUD handlers.
//!
//! Thin JSON transport over `NoteService`; every rule lives in the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use notecache_core::note::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};

use crate::{context::RequestCtx, handlers::AppError, state::AppState};

/// List all notes (GET /api/notes).
pub async fn list_notes(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state.notes.list_all(&ctx).await?;
    Ok(Json(notes))
}

/// Create a note (POST /api/notes).
pub async fn create_note(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    Json(request): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let note = state.notes.create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Get a single note (GET /api/notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>, AppError> {
    let note = state.notes.get_by_id(&ctx, id).await?;
    Ok(Json(note))
}

/// Update a note (PUT /api/notes/{id}). Omitted fields keep their value.
pub async fn update_note(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<NoteId>,
    Json(request): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, AppError> {
    let note = state.notes.update(&ctx, id, request).await?;
    Ok(Json(note))
}

/// Delete a note (DELETE /api/notes/{id}).
pub async fn delete_note(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    Path(id): Path<NoteId>,
) -> Result<StatusCode, AppError> {
    state.notes.delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

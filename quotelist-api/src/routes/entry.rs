//! Entry endpoints
//!
//! # Endpoints
//!
//! - `POST /entry` - create an entry
//! - `PUT /entry/:id` - replace an entry's fields
//! - `DELETE /entry/:id` - delete an entry
//!
//! Referential validity of `listId`/`enteredById`/`statedById` is not
//! pre-checked here: a dangling reference fails at the foreign-key
//! constraint and surfaces as a 500.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quotelist_shared::models::entry::{CreateEntry, Entry, UpdateEntry};
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    validation::{parse_id, validate},
};

/// Entry payload, shared by create and update (updates are full replaces)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    /// The quoted statement
    #[validate(length(min = 1, message = "statement is not allowed to be empty"))]
    pub statement: String,

    /// List the entry belongs to
    #[validate(range(min = 1, message = "listId must be a positive number"))]
    pub list_id: i64,

    /// Author who recorded the entry
    #[validate(range(min = 1, message = "enteredById must be a positive number"))]
    pub entered_by_id: i64,

    /// Author being quoted
    #[validate(range(min = 1, message = "statedById must be a positive number"))]
    pub stated_by_id: i64,

    /// Display color
    #[validate(length(min = 1, message = "color is not allowed to be empty"))]
    pub color: String,
}

/// Declared validation order: the first failing field wins
const ENTRY_FIELDS: &[&str] = &[
    "statement",
    "list_id",
    "entered_by_id",
    "stated_by_id",
    "color",
];

/// `POST /entry`
///
/// # Errors
///
/// - `400 Bad Request`: validation failed
/// - `500 Internal Server Error`: database failure, including a broken
///   foreign key
pub async fn create_entry(
    State(state): State<AppState>,
    AppJson(req): AppJson<EntryRequest>,
) -> ApiResult<(StatusCode, Json<Entry>)> {
    validate(&req, ENTRY_FIELDS)?;

    let entry = Entry::create(
        &state.db,
        CreateEntry {
            statement: req.statement,
            color: req.color,
            list_id: req.list_id,
            entered_by_id: req.entered_by_id,
            stated_by_id: req.stated_by_id,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not create entry"))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// `PUT /entry/:id`
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<EntryRequest>,
) -> ApiResult<Json<Entry>> {
    let id = parse_id(&id)?;
    validate(&req, ENTRY_FIELDS)?;

    let entry = Entry::update(
        &state.db,
        id,
        UpdateEntry {
            statement: req.statement,
            color: req.color,
            list_id: req.list_id,
            entered_by_id: req.entered_by_id,
            stated_by_id: req.stated_by_id,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not update entry"))?
    .ok_or_else(|| ApiError::NotFound("Entry not found".to_string()))?;

    Ok(Json(entry))
}

/// `DELETE /entry/:id`
///
/// Responds 200 with the deleted entry rather than a body-bearing 204.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Entry>> {
    let id = parse_id(&id)?;

    let entry = Entry::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not delete entry"))?
        .ok_or_else(|| ApiError::NotFound("Entry not found".to_string()))?;

    Ok(Json(entry))
}

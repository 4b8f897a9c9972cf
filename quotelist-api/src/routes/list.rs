//! List endpoints
//!
//! # Endpoints
//!
//! - `POST /list` - create a list
//! - `GET /lists` - list all lists
//! - `GET /list/:id` - fetch one list with relations
//! - `PUT /list/:id` - replace a list's fields
//! - `DELETE /list/:id` - delete a list
//! - `GET /list/:id/authors` - authors belonging to this list

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quotelist_shared::models::{
    author_list::{AuthorList, ListMember},
    list::{CreateList, List, ListDetail, UpdateList},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    validation::{parse_id, validate},
};

/// List payload, shared by create and update (updates are full replaces;
/// an absent tag clears the stored one)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    /// List name
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    pub name: String,

    /// Optional tag, nullable
    #[validate(length(max = 100, message = "tag length must be at most 100 characters"))]
    pub tag: Option<String>,
}

/// Declared validation order: the first failing field wins
const LIST_FIELDS: &[&str] = &["name", "tag"];

/// `POST /list`
pub async fn create_list(
    State(state): State<AppState>,
    AppJson(req): AppJson<ListRequest>,
) -> ApiResult<(StatusCode, Json<List>)> {
    validate(&req, LIST_FIELDS)?;

    let list = List::create(
        &state.db,
        CreateList {
            name: req.name,
            tag: req.tag,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not create list"))?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// `GET /lists`
pub async fn list_lists(State(state): State<AppState>) -> ApiResult<Json<Vec<List>>> {
    let lists = List::list(&state.db)
        .await
        .map_err(|e| ApiError::internal(e, "Could not get lists"))?;

    Ok(Json(lists))
}

/// `GET /list/:id`
///
/// Returns the list with author memberships and entries expanded.
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListDetail>> {
    let id = parse_id(&id)?;

    let list = List::find_detail(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not retrieve the list"))?
        .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;

    Ok(Json(list))
}

/// `PUT /list/:id`
pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<ListRequest>,
) -> ApiResult<Json<List>> {
    let id = parse_id(&id)?;
    validate(&req, LIST_FIELDS)?;

    let list = List::update(
        &state.db,
        id,
        UpdateList {
            name: req.name,
            tag: req.tag,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not update list"))?
    .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;

    Ok(Json(list))
}

/// `DELETE /list/:id`
///
/// Responds 200 with the deleted list rather than a body-bearing 204.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<List>> {
    let id = parse_id(&id)?;

    let list = List::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not delete list"))?
        .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;

    Ok(Json(list))
}

/// `GET /list/:id/authors`
///
/// Returns the list's memberships, each expanded with the full author.
pub async fn get_list_authors(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ListMember>>> {
    let id = parse_id(&id)?;

    let authors = AuthorList::authors_of_list(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not get authors of list"))?;

    Ok(Json(authors))
}

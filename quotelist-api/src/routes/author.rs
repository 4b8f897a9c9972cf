//! Author endpoints
//!
//! # Endpoints
//!
//! - `POST /author` - create an author
//! - `GET /author` - list all authors (summaries)
//! - `GET /author/:id` - fetch one author with relations
//! - `PUT /author/:id` - replace an author's fields
//! - `DELETE /author/:id` - delete an author
//! - `GET /author/:id/lists` - lists this author belongs to

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quotelist_shared::models::{
    author::{Author, AuthorDetail, AuthorSummary, CreateAuthor, UpdateAuthor},
    author_list::{AuthorList, AuthorMembership},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    validation::{parse_id, validate},
};

/// Author payload, shared by create and update (updates are full replaces)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    /// Full name
    #[validate(length(min = 1, message = "name is not allowed to be empty"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,

    /// Public display name
    #[validate(length(min = 1, message = "authorName is not allowed to be empty"))]
    pub author_name: String,

    /// Password, at least 8 characters (stored as given)
    #[validate(length(min = 8, message = "password length must be at least 8 characters long"))]
    pub password: String,
}

/// Declared validation order: the first failing field wins
const AUTHOR_FIELDS: &[&str] = &["name", "email", "author_name", "password"];

/// `POST /author`
///
/// # Errors
///
/// - `400 Bad Request`: validation failed
/// - `500 Internal Server Error`: database failure
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(req): AppJson<AuthorRequest>,
) -> ApiResult<(StatusCode, Json<Author>)> {
    validate(&req, AUTHOR_FIELDS)?;

    let author = Author::create(
        &state.db,
        CreateAuthor {
            name: req.name,
            email: req.email,
            author_name: req.author_name,
            password: req.password,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not create author"))?;

    Ok((StatusCode::CREATED, Json(author)))
}

/// `GET /author`
pub async fn list_authors(State(state): State<AppState>) -> ApiResult<Json<Vec<AuthorSummary>>> {
    let authors = Author::list(&state.db)
        .await
        .map_err(|e| ApiError::internal(e, "Could not retrieve all authors"))?;

    Ok(Json(authors))
}

/// `GET /author/:id`
///
/// Returns the author's profile with entries, statements, and list
/// memberships expanded.
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AuthorDetail>> {
    let id = parse_id(&id)?;

    let author = Author::find_detail(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not retrieve the author"))?
        .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

    Ok(Json(author))
}

/// `PUT /author/:id`
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<AuthorRequest>,
) -> ApiResult<Json<Author>> {
    let id = parse_id(&id)?;
    validate(&req, AUTHOR_FIELDS)?;

    let author = Author::update(
        &state.db,
        id,
        UpdateAuthor {
            name: req.name,
            email: req.email,
            author_name: req.author_name,
            password: req.password,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Could not update author"))?
    .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

    Ok(Json(author))
}

/// `DELETE /author/:id`
///
/// Responds 200 with the deleted author rather than a body-bearing 204.
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Author>> {
    let id = parse_id(&id)?;

    let author = Author::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not delete author"))?
        .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

    Ok(Json(author))
}

/// `GET /author/:id/lists`
///
/// Returns the author's memberships, each expanded with the full list.
pub async fn get_author_lists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<AuthorMembership>>> {
    let id = parse_id(&id)?;

    let lists = AuthorList::lists_of_author(&state.db, id)
        .await
        .map_err(|e| ApiError::internal(e, "Could not get lists for this author"))?;

    Ok(Json(lists))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_short_password() {
        let req = AuthorRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            author_name: "ada".to_string(),
            password: "seven77".to_string(),
        };

        let err = validate(&req, AUTHOR_FIELDS).unwrap_err();
        match err {
            ApiError::Validation(msg) => {
                assert_eq!(msg, "password length must be at least 8 characters long")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_rejects_invalid_email_before_password() {
        let req = AuthorRequest {
            name: "Ada Lovelace".to_string(),
            email: "not-an-email".to_string(),
            author_name: "ada".to_string(),
            password: "short".to_string(),
        };

        let err = validate(&req, AUTHOR_FIELDS).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "email must be a valid email"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: AuthorRequest = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","authorName":"ada","password":"difference"}"#,
        )
        .unwrap();

        assert_eq!(req.author_name, "ada");
        assert!(validate(&req, AUTHOR_FIELDS).is_ok());
    }

    #[test]
    fn test_request_missing_field_is_serde_error() {
        let result = serde_json::from_str::<AuthorRequest>(
            r#"{"name":"Ada","authorName":"ada","password":"difference"}"#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("email"), "unexpected message: {err}");
    }
}

//! List model and database operations
//!
//! A list is a named collection of entries with an optional tag. Authors are
//! attached through the `author_lists` join table.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE lists (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(50) NOT NULL,
//!     tag VARCHAR(100),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::author_list::AuthorList;
use super::entry::EntrySummary;

/// List model representing a full database row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Unique list ID (generated, positive)
    pub id: i64,

    /// List name, at most 50 characters
    pub name: String,

    /// Optional tag, at most 100 characters
    pub tag: Option<String>,

    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// Projection returned by a single-list fetch: list fields plus author
/// memberships and the entries it contains.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetail {
    pub name: String,
    pub tag: Option<String>,
    pub created_at: DateTime<Utc>,

    /// Author memberships as (authorId, listId) pairs
    pub authors: Vec<AuthorList>,

    /// Entries in this list
    pub entries: Vec<EntrySummary>,
}

/// Input for creating a new list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    pub name: String,
    pub tag: Option<String>,
}

/// Input for updating an existing list
///
/// Updates are full-field replaces: an absent tag clears the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateList {
    pub name: String,
    pub tag: Option<String>,
}

/// List columns fetched before assembling a [`ListDetail`]
#[derive(sqlx::FromRow)]
struct ListRow {
    name: String,
    tag: Option<String>,
    created_at: DateTime<Utc>,
}

impl List {
    /// Creates a new list
    pub async fn create(pool: &PgPool, data: CreateList) -> Result<Self, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(
            r#"
            INSERT INTO lists (name, tag)
            VALUES ($1, $2)
            RETURNING id, name, tag, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.tag)
        .fetch_one(pool)
        .await?;

        Ok(list)
    }

    /// Finds a list by ID, returning the full row
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, tag, created_at
            FROM lists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    /// Fetches one list with relations expanded
    ///
    /// Returns `None` if no list matches.
    pub async fn find_detail(pool: &PgPool, id: i64) -> Result<Option<ListDetail>, sqlx::Error> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT name, tag, created_at
            FROM lists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let authors = AuthorList::list_by_list(pool, id).await?;
        let entries = EntrySummary::list_by_list(pool, id).await?;

        Ok(Some(ListDetail {
            name: row.name,
            tag: row.tag,
            created_at: row.created_at,
            authors,
            entries,
        }))
    }

    /// Lists all lists, ordered by id
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let lists = sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, tag, created_at
            FROM lists
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(lists)
    }

    /// Updates a list, replacing all mutable fields
    ///
    /// Returns the updated row, or `None` if no list matches.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateList,
    ) -> Result<Option<Self>, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(
            r#"
            UPDATE lists
            SET name = $2, tag = $3
            WHERE id = $1
            RETURNING id, name, tag, created_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.tag)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    /// Deletes a list by ID
    ///
    /// Returns the deleted row's prior state, or `None` if no list matches.
    /// Fails at the database if the list still contains entries.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(
            r#"
            DELETE FROM lists
            WHERE id = $1
            RETURNING id, name, tag, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }
}

//! Entry model and database operations
//!
//! An entry is a quoted statement inside a list: `entered_by` recorded it,
//! `stated_by` is the author being quoted. All three references are enforced
//! by foreign keys; a dangling id surfaces as a database error, not a
//! validation failure.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE entries (
//!     id BIGSERIAL PRIMARY KEY,
//!     statement TEXT NOT NULL,
//!     color VARCHAR(50) NOT NULL,
//!     list_id BIGINT NOT NULL REFERENCES lists(id),
//!     entered_by_id BIGINT NOT NULL REFERENCES authors(id),
//!     stated_by_id BIGINT NOT NULL REFERENCES authors(id),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Entry model representing a full database row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique entry ID (generated, positive)
    pub id: i64,

    /// The quoted statement
    pub statement: String,

    /// Display color for the entry
    pub color: String,

    /// List this entry belongs to
    pub list_id: i64,

    /// Author who recorded the entry
    pub entered_by_id: i64,

    /// Author being quoted
    pub stated_by_id: i64,

    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

/// Compact entry projection used inside author and list detail responses
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: i64,
    pub statement: String,
    pub color: String,
}

/// Input for creating a new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntry {
    pub statement: String,
    pub color: String,
    pub list_id: i64,
    pub entered_by_id: i64,
    pub stated_by_id: i64,
}

/// Input for updating an existing entry (full-field replace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub statement: String,
    pub color: String,
    pub list_id: i64,
    pub entered_by_id: i64,
    pub stated_by_id: i64,
}

impl Entry {
    /// Creates a new entry
    ///
    /// Fails at the database if `list_id`, `entered_by_id`, or `stated_by_id`
    /// does not reference an existing row.
    pub async fn create(pool: &PgPool, data: CreateEntry) -> Result<Self, sqlx::Error> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries (statement, color, list_id, entered_by_id, stated_by_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, statement, color, list_id, entered_by_id, stated_by_id, created_at
            "#,
        )
        .bind(data.statement)
        .bind(data.color)
        .bind(data.list_id)
        .bind(data.entered_by_id)
        .bind(data.stated_by_id)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Finds an entry by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            SELECT id, statement, color, list_id, entered_by_id, stated_by_id, created_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Updates an entry, replacing all mutable fields
    ///
    /// Returns the updated row, or `None` if no entry matches.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateEntry,
    ) -> Result<Option<Self>, sqlx::Error> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            UPDATE entries
            SET statement = $2, color = $3, list_id = $4, entered_by_id = $5, stated_by_id = $6
            WHERE id = $1
            RETURNING id, statement, color, list_id, entered_by_id, stated_by_id, created_at
            "#,
        )
        .bind(id)
        .bind(data.statement)
        .bind(data.color)
        .bind(data.list_id)
        .bind(data.entered_by_id)
        .bind(data.stated_by_id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Deletes an entry by ID
    ///
    /// Returns the deleted row's prior state, or `None` if no entry matches.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            DELETE FROM entries
            WHERE id = $1
            RETURNING id, statement, color, list_id, entered_by_id, stated_by_id, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }
}

impl EntrySummary {
    /// Lists entries in a list, compact projection, ordered by id
    pub async fn list_by_list(pool: &PgPool, list_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let entries = sqlx::query_as::<_, EntrySummary>(
            r#"
            SELECT id, statement, color
            FROM entries
            WHERE list_id = $1
            ORDER BY id
            "#,
        )
        .bind(list_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Lists entries recorded by an author, compact projection
    pub async fn list_entered_by(pool: &PgPool, author_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let entries = sqlx::query_as::<_, EntrySummary>(
            r#"
            SELECT id, statement, color
            FROM entries
            WHERE entered_by_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Lists entries quoting an author, compact projection
    pub async fn list_stated_by(pool: &PgPool, author_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let entries = sqlx::query_as::<_, EntrySummary>(
            r#"
            SELECT id, statement, color
            FROM entries
            WHERE stated_by_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}

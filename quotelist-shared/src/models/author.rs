//! Author model and database operations
//!
//! Authors both record entries (`entered_by`) and are quoted in them
//! (`stated_by`), and belong to lists through the `author_lists` join table.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE authors (
//!     id BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     email VARCHAR(255) NOT NULL,
//!     author_name VARCHAR(255) NOT NULL,
//!     password VARCHAR(255) NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use quotelist_shared::models::author::{Author, CreateAuthor};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! let author = Author::create(&pool, CreateAuthor {
//!     name: "Ada Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     author_name: "ada".to_string(),
//!     password: "difference engine".to_string(),
//! })
//! .await?;
//!
//! println!("Created author: {}", author.id);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::author_list::AuthorList;
use super::entry::EntrySummary;

/// Author model representing a full database row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique author ID (generated, positive)
    pub id: i64,

    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Public display name
    pub author_name: String,

    /// Password, stored as given
    pub password: String,

    /// When the author was created
    pub created_at: DateTime<Utc>,
}

/// Projection returned by the author listing: no password, no relations
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
    pub author_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Projection returned by a single-author fetch: profile fields plus the
/// entries this author entered, the entries quoting them, and their list
/// memberships.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetail {
    pub name: String,
    pub author_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,

    /// Entries this author recorded
    pub entries: Vec<EntrySummary>,

    /// Entries where this author is the one quoted
    pub statements: Vec<EntrySummary>,

    /// List memberships as (authorId, listId) pairs
    pub lists: Vec<AuthorList>,
}

/// Input for creating a new author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub email: String,
    pub author_name: String,
    pub password: String,
}

/// Input for updating an existing author
///
/// Updates are full-field replaces: every mutable column is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAuthor {
    pub name: String,
    pub email: String,
    pub author_name: String,
    pub password: String,
}

/// Profile columns fetched before assembling an [`AuthorDetail`]
#[derive(sqlx::FromRow)]
struct AuthorProfileRow {
    name: String,
    author_name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl Author {
    /// Creates a new author
    ///
    /// Returns the created row including the generated id and timestamp.
    pub async fn create(pool: &PgPool, data: CreateAuthor) -> Result<Self, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, email, author_name, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, author_name, password, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.author_name)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(author)
    }

    /// Finds an author by ID, returning the full row
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, email, author_name, password, created_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }

    /// Fetches one author with relations expanded
    ///
    /// Returns the profile fields together with the entries the author
    /// entered, the entries quoting them, and their list memberships.
    /// Returns `None` if no author matches.
    pub async fn find_detail(pool: &PgPool, id: i64) -> Result<Option<AuthorDetail>, sqlx::Error> {
        let profile = sqlx::query_as::<_, AuthorProfileRow>(
            r#"
            SELECT name, author_name, email, created_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some(profile) = profile else {
            return Ok(None);
        };

        let entries = EntrySummary::list_entered_by(pool, id).await?;
        let statements = EntrySummary::list_stated_by(pool, id).await?;
        let lists = AuthorList::list_by_author(pool, id).await?;

        Ok(Some(AuthorDetail {
            name: profile.name,
            author_name: profile.author_name,
            email: profile.email,
            created_at: profile.created_at,
            entries,
            statements,
            lists,
        }))
    }

    /// Lists all authors as summaries, ordered by id
    pub async fn list(pool: &PgPool) -> Result<Vec<AuthorSummary>, sqlx::Error> {
        let authors = sqlx::query_as::<_, AuthorSummary>(
            r#"
            SELECT id, name, author_name, email, created_at
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(authors)
    }

    /// Updates an author, replacing all mutable fields
    ///
    /// Returns the updated row, or `None` if no author matches.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateAuthor,
    ) -> Result<Option<Self>, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET name = $2, email = $3, author_name = $4, password = $5
            WHERE id = $1
            RETURNING id, name, email, author_name, password, created_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.author_name)
        .bind(data.password)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }

    /// Deletes an author by ID
    ///
    /// Returns the deleted row's prior state, or `None` if no author matches.
    /// Fails at the database if the author is still referenced by entries.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            DELETE FROM authors
            WHERE id = $1
            RETURNING id, name, email, author_name, password, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_author_struct() {
        let create = CreateAuthor {
            name: "Test Author".to_string(),
            email: "test@example.com".to_string(),
            author_name: "tester".to_string(),
            password: "longenough".to_string(),
        };

        assert_eq!(create.email, "test@example.com");
        assert_eq!(create.author_name, "tester");
    }

    #[test]
    fn test_author_serializes_camel_case() {
        let author = Author {
            id: 1,
            name: "Test Author".to_string(),
            email: "test@example.com".to_string(),
            author_name: "tester".to_string(),
            password: "longenough".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["authorName"], "tester");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("author_name").is_none());
    }

    // Integration tests for database operations are in quotelist-api/tests/
}

//! Membership model and database operations
//!
//! Implements the many-to-many relationship between authors and lists. The
//! composite primary key means at most one membership row can exist per
//! (author, list) pair; adding a duplicate fails at the constraint.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE author_lists (
//!     author_id BIGINT NOT NULL REFERENCES authors(id),
//!     list_id BIGINT NOT NULL REFERENCES lists(id),
//!     PRIMARY KEY (author_id, list_id)
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use quotelist_shared::models::author_list::{AuthorList, CreateAuthorList};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! let membership = AuthorList::create(&pool, CreateAuthorList {
//!     author_id: 1,
//!     list_id: 2,
//! })
//! .await?;
//!
//! let members = AuthorList::authors_of_list(&pool, membership.list_id).await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::author::Author;
use super::list::List;

/// Membership row linking one author to one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthorList {
    /// Author ID
    pub author_id: i64,

    /// List ID
    pub list_id: i64,
}

/// Input for creating a new membership
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorList {
    /// Author ID
    pub author_id: i64,

    /// List ID
    pub list_id: i64,
}

/// Membership row expanded with the full author record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMember {
    pub author_id: i64,
    pub list_id: i64,
    pub author: Author,
}

/// Membership row expanded with the full list record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorMembership {
    pub author_id: i64,
    pub list_id: i64,
    pub list: List,
}

/// Flat join row behind [`AuthorList::authors_of_list`]
#[derive(sqlx::FromRow)]
struct ListMemberRow {
    author_id: i64,
    list_id: i64,
    id: i64,
    name: String,
    email: String,
    author_name: String,
    password: String,
    created_at: DateTime<Utc>,
}

/// Flat join row behind [`AuthorList::lists_of_author`]
#[derive(sqlx::FromRow)]
struct AuthorMembershipRow {
    author_id: i64,
    list_id: i64,
    id: i64,
    name: String,
    tag: Option<String>,
    created_at: DateTime<Utc>,
}

impl AuthorList {
    /// Creates a new membership (adds an author to a list)
    ///
    /// Fails at the database if the pair already exists (composite-key
    /// violation) or if either id does not reference an existing row.
    pub async fn create(pool: &PgPool, data: CreateAuthorList) -> Result<Self, sqlx::Error> {
        let membership = sqlx::query_as::<_, AuthorList>(
            r#"
            INSERT INTO author_lists (author_id, list_id)
            VALUES ($1, $2)
            RETURNING author_id, list_id
            "#,
        )
        .bind(data.author_id)
        .bind(data.list_id)
        .fetch_one(pool)
        .await?;

        Ok(membership)
    }

    /// Deletes a membership by composite key (removes an author from a list)
    ///
    /// Returns the deleted row, or `None` if no membership matches.
    pub async fn delete(
        pool: &PgPool,
        author_id: i64,
        list_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let membership = sqlx::query_as::<_, AuthorList>(
            r#"
            DELETE FROM author_lists
            WHERE author_id = $1 AND list_id = $2
            RETURNING author_id, list_id
            "#,
        )
        .bind(author_id)
        .bind(list_id)
        .fetch_optional(pool)
        .await?;

        Ok(membership)
    }

    /// Lists memberships for a list as bare (authorId, listId) pairs
    pub async fn list_by_list(pool: &PgPool, list_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let memberships = sqlx::query_as::<_, AuthorList>(
            r#"
            SELECT author_id, list_id
            FROM author_lists
            WHERE list_id = $1
            ORDER BY author_id
            "#,
        )
        .bind(list_id)
        .fetch_all(pool)
        .await?;

        Ok(memberships)
    }

    /// Lists memberships for an author as bare (authorId, listId) pairs
    pub async fn list_by_author(pool: &PgPool, author_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let memberships = sqlx::query_as::<_, AuthorList>(
            r#"
            SELECT author_id, list_id
            FROM author_lists
            WHERE author_id = $1
            ORDER BY list_id
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;

        Ok(memberships)
    }

    /// Lists the memberships of a list, each expanded with the full author
    pub async fn authors_of_list(
        pool: &PgPool,
        list_id: i64,
    ) -> Result<Vec<ListMember>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ListMemberRow>(
            r#"
            SELECT al.author_id, al.list_id,
                   a.id, a.name, a.email, a.author_name, a.password, a.created_at
            FROM author_lists al
            JOIN authors a ON a.id = al.author_id
            WHERE al.list_id = $1
            ORDER BY al.author_id
            "#,
        )
        .bind(list_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ListMember {
                author_id: row.author_id,
                list_id: row.list_id,
                author: Author {
                    id: row.id,
                    name: row.name,
                    email: row.email,
                    author_name: row.author_name,
                    password: row.password,
                    created_at: row.created_at,
                },
            })
            .collect())
    }

    /// Lists the memberships of an author, each expanded with the full list
    pub async fn lists_of_author(
        pool: &PgPool,
        author_id: i64,
    ) -> Result<Vec<AuthorMembership>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AuthorMembershipRow>(
            r#"
            SELECT al.author_id, al.list_id,
                   l.id, l.name, l.tag, l.created_at
            FROM author_lists al
            JOIN lists l ON l.id = al.list_id
            WHERE al.author_id = $1
            ORDER BY al.list_id
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| AuthorMembership {
                author_id: row.author_id,
                list_id: row.list_id,
                list: List {
                    id: row.id,
                    name: row.name,
                    tag: row.tag,
                    created_at: row.created_at,
                },
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_serializes_camel_case() {
        let membership = AuthorList {
            author_id: 3,
            list_id: 9,
        };

        let json = serde_json::to_value(membership).unwrap();
        assert_eq!(json["authorId"], 3);
        assert_eq!(json["listId"], 9);
    }

    #[test]
    fn test_list_member_nests_author() {
        let member = ListMember {
            author_id: 3,
            list_id: 9,
            author: Author {
                id: 3,
                name: "Test Author".to_string(),
                email: "test@example.com".to_string(),
                author_name: "tester".to_string(),
                password: "longenough".to_string(),
                created_at: Utc::now(),
            },
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["authorId"], 3);
        assert_eq!(json["author"]["authorName"], "tester");
    }

    // Integration tests for database operations are in quotelist-api/tests/
}

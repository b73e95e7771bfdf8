//! User repository
//!
//! One row per user; the exercise log is an embedded JSONB array, kept
//! in append order. Appends happen in a single UPDATE statement so two
//! concurrent appends to the same user cannot lose an entry.

use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::Exercise;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub log: Json<Vec<Exercise>>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user with an empty log.
    ///
    /// The id is assigned by the database. Usernames are not unique;
    /// creating the same name twice yields two distinct users.
    pub async fn create(&self, username: &str) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, log
            "#,
        )
        .bind(username)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// List every user with their full log, in creation order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, log
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Fetch a single user by id.
    pub async fn get(&self, id: Uuid) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, log
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })
    }

    /// Append one exercise to a user's log.
    ///
    /// Single statement: the jsonb concat pushes the entry onto the
    /// array in place, and zero updated rows doubles as the existence
    /// check, so a missing user never reaches the append.
    pub async fn append_exercise(&self, id: Uuid, exercise: &Exercise) -> Result<(), DbError> {
        let updated = sqlx::query(
            r#"
            UPDATE users
            SET log = log || $2
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(Json(exercise))
        .fetch_optional(self.pool)
        .await?;

        if updated.is_none() {
            return Err(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

use crate::{DbError, Result as DbErrorResult};

use ob_core::{ErrorLocation, LocalUser, ProfileUpdate};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, username, first_name, last_name, email, last_login, is_staff, is_superuser, date_joined";

#[derive(FromRow)]
pub(crate) struct UserRow {
    pub(crate) id: String,
    pub(crate) username: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) last_login: Option<i64>,
    pub(crate) is_staff: bool,
    pub(crate) is_superuser: bool,
    pub(crate) date_joined: i64,
}

impl TryFrom<UserRow> for LocalUser {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(LocalUser {
            id: Uuid::parse_str(&row.id).map_err(|e| {
                DbError::corrupt_row(format!("Invalid UUID in users.id: {}", e))
            })?,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            last_login: row
                .last_login
                .map(|ts| {
                    DateTime::from_timestamp(ts, 0).ok_or_else(|| {
                        DbError::corrupt_row("Invalid timestamp in users.last_login")
                    })
                })
                .transpose()?,
            is_staff: row.is_staff,
            is_superuser: row.is_superuser,
            date_joined: DateTime::from_timestamp(row.date_joined, 0).ok_or_else(|| {
                DbError::corrupt_row("Invalid timestamp in users.date_joined")
            })?,
        })
    }
}

/// Local user store backed by the `users` table
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomic update-or-create keyed on `username`.
    ///
    /// A single `INSERT .. ON CONFLICT(username) DO UPDATE .. RETURNING`
    /// statement, so racing callers for one username always end up sharing a
    /// single row. Present profile fields overwrite stored ones, absent fields
    /// keep the stored value (or start empty on insert). Returns the row and
    /// whether it was inserted.
    pub async fn update_or_create(
        &self,
        username: &str,
        profile: &ProfileUpdate,
    ) -> DbErrorResult<(LocalUser, bool)> {
        let candidate_id = Uuid::new_v4().to_string();
        let last_login = profile.last_login.timestamp();
        let date_joined = Utc::now().timestamp();

        let sql = format!(
            r#"
              INSERT INTO users (id, username, first_name, last_name, email, last_login,
                                 is_staff, is_superuser, date_joined)
              VALUES (?, ?, COALESCE(?, ''), COALESCE(?, ''), COALESCE(?, ''), ?, 0, 0, ?)
              ON CONFLICT(username) DO UPDATE SET
                  first_name = COALESCE(?, first_name),
                  last_name = COALESCE(?, last_name),
                  email = COALESCE(?, email),
                  last_login = excluded.last_login
              RETURNING {USER_COLUMNS}
              "#
        );

        let row: UserRow = sqlx::query_as(&sql)
            .bind(&candidate_id)
            .bind(username)
            .bind(profile.first_name.as_deref())
            .bind(profile.last_name.as_deref())
            .bind(profile.email.as_deref())
            .bind(last_login)
            .bind(date_joined)
            .bind(profile.first_name.as_deref())
            .bind(profile.last_name.as_deref())
            .bind(profile.email.as_deref())
            .fetch_one(&self.pool)
            .await?;

        // The conflict branch never rewrites the id
        let created = row.id == candidate_id;

        Ok((LocalUser::try_from(row)?, created))
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<LocalUser>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");

        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalUser::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<LocalUser>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(LocalUser::try_from).transpose()
    }

    /// Write every mutable column of an existing user in one statement
    pub async fn save(&self, user: &LocalUser) -> DbErrorResult<()> {
        let id_str = user.id.to_string();
        let last_login = user.last_login.map(|ts| ts.timestamp());

        let result = sqlx::query(
            r#"
              UPDATE users
              SET first_name = ?, last_name = ?, email = ?, last_login = ?,
                  is_staff = ?, is_superuser = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(last_login)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UserNotFound {
                id: id_str,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Insert a fully-formed user. Used to pre-provision accounts when
    /// automatic creation is turned off.
    pub async fn create(&self, user: &LocalUser) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, username, first_name, last_name, email, last_login,
                                 is_staff, is_superuser, date_joined)
              VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.last_login.map(|ts| ts.timestamp()))
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.date_joined.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

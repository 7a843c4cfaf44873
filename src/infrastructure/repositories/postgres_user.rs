// src/infrastructure/repositories/postgres_user.rs
use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SlugPrefixLookup;
use crate::domain::user::{
    Credential, EmailAddress, HANDLE_SLUG_FIELD, Handle, NewUser, PersonName, User, UserFilter,
    UserId, UserProfileUpdate, UserRepository,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: Option<String>,
    is_active: bool,
    is_admin: bool,
    is_superuser: bool,
    first_name: Option<String>,
    last_name: Option<String>,
    handle: Option<String>,
    jwt_key: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            credential: Credential::from_stored_hash(row.password_hash)?,
            is_active: row.is_active,
            is_admin: row.is_admin,
            is_superuser: row.is_superuser,
            first_name: row.first_name.map(PersonName::new).transpose()?,
            last_name: row.last_name.map(PersonName::new).transpose()?,
            handle: row.handle.map(Handle::new).transpose()?,
            jwt_key: row.jwt_key,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            credential,
            is_active,
            is_admin,
            jwt_key,
            created_at,
        } = new_user;

        let password_hash = credential.hash().map(|hash| hash.as_str().to_owned());

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash, is_active, is_admin, is_superuser,
                 jwt_key, created_at, updated_at)
             VALUES ($1, $2, $3, $4, FALSE, $5, $6, $6)
            RETURNING id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at",
        )
        .bind(email.as_str())
        .bind(password_hash)
        .bind(is_active)
        .bind(is_admin)
        .bind(jwt_key)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> DomainResult<User> {
        let UserProfileUpdate {
            id,
            first_name,
            last_name,
            handle,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(first_name) = first_name {
            let first_name: String = first_name.into();
            builder.push(", first_name = ");
            builder.push_bind(first_name);
        }

        if let Some(last_name) = last_name {
            let last_name: String = last_name.into();
            builder.push(", last_name = ");
            builder.push_bind(last_name);
        }

        if let Some(handle) = handle {
            let handle: String = handle.into();
            builder.push(", handle = ");
            builder.push_bind(handle);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn promote_to_superuser(
        &self,
        id: UserId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET is_superuser = TRUE, is_admin = TRUE, updated_at = $2
             WHERE id = $1
            RETURNING id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn list(&self, filter: &UserFilter) -> DomainResult<Vec<User>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, email, password_hash, is_active, is_admin, is_superuser,
                 first_name, last_name, handle, jwt_key, created_at, updated_at
             FROM users",
        );

        let mut conditions_added = false;
        if let Some(id) = filter.id {
            builder.push(" WHERE id = ");
            builder.push_bind(i64::from(id));
            conditions_added = true;
        }

        if let Some(email) = &filter.email {
            if conditions_added {
                builder.push(" AND email = ");
            } else {
                builder.push(" WHERE email = ");
            }
            builder.push_bind(email.as_str());
            conditions_added = true;
        }

        if let Some(is_admin) = filter.is_admin {
            if conditions_added {
                builder.push(" AND is_admin = ");
            } else {
                builder.push(" WHERE is_admin = ");
            }
            builder.push_bind(is_admin);
        }

        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

#[async_trait]
impl SlugPrefixLookup for PostgresUserRepository {
    async fn slugs_with_prefix(
        &self,
        field: &str,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        if field != HANDLE_SLUG_FIELD {
            return Err(DomainError::Validation(format!(
                "unknown slug field: {field}"
            )));
        }

        let pattern = format!("{}%", escape_like(prefix));
        let slugs = sqlx::query_scalar::<_, String>("SELECT handle FROM users WHERE handle LIKE $1")
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::postgres::PgRow;
use sqlx::query::Query;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Row;

use super::deadline::with_deadline;
use super::deadline::StoreFailure;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Gender;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        let gender: String = row.try_get("gender").map_err(database_error)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            name: DisplayName::new(row.try_get("name").map_err(database_error)?)?,
            username: Username::new(row.try_get("username").map_err(database_error)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(database_error)?)?,
            password_hash: row.try_get("password_hash").map_err(database_error)?,
            gender: gender.parse()?,
            last_login_at: row.try_get("last_login_at").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }

    async fn find_one(&self, query: PgQuery<'_>) -> Result<Option<User>, UserError> {
        let row = with_deadline(self.query_timeout, query.fetch_optional(&self.pool))
            .await
            .map_err(read_error)?;

        row.map(Self::row_to_user).transpose()
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

fn read_error(failure: StoreFailure) -> UserError {
    UserError::DatabaseError(failure.to_string())
}

fn write_error(failure: StoreFailure, user: &User) -> UserError {
    match failure.unique_violation() {
        Some("users_username_key") => UserError::UsernameAlreadyExists(user.username.to_string()),
        Some("users_email_key") => UserError::EmailAlreadyExists(user.email.to_string()),
        _ => UserError::DatabaseError(failure.to_string()),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let query = sqlx::query(
            r#"
            INSERT INTO users (id, name, username, email, password_hash, gender, last_login_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id.0)
        .bind(user.name.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.gender.as_str())
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at);

        with_deadline(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(|failure| write_error(failure, &user))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        self.find_one(
            sqlx::query(
                r#"
                SELECT id, name, username, email, password_hash, gender, last_login_at, created_at, updated_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id.0),
        )
        .await
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.find_one(
            sqlx::query(
                r#"
                SELECT id, name, username, email, password_hash, gender, last_login_at, created_at, updated_at
                FROM users
                WHERE username = $1
                "#,
            )
            .bind(username.as_str()),
        )
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        self.find_one(
            sqlx::query(
                r#"
                SELECT id, name, username, email, password_hash, gender, last_login_at, created_at, updated_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str()),
        )
        .await
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let query = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, username = $3, email = $4, password_hash = $5, gender = $6,
                last_login_at = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.name.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.gender.as_str())
        .bind(user.last_login_at)
        .bind(user.updated_at);

        let result = with_deadline(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(|failure| write_error(failure, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }
}

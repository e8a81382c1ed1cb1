use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserListing;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

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
    name: String,
    email: String,
    department_id: i64,
    role_id: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            department_id: row.department_id,
            role_id: row.role_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserListingRow {
    id: i64,
    name: String,
    email: String,
    department: Option<String>,
}

impl From<UserListingRow> for UserListing {
    fn from(row: UserListingRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            department: row.department,
        }
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    tracing::error!(error = %e, "Database operation failed");
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, department_id, role_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&command.name)
        .bind(&command.email)
        .bind(command.department_id)
        .bind(command.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(UserId(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, department_id, role_id
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(User::from))
    }

    async fn list_with_departments(&self) -> Result<Vec<UserListing>, UserError> {
        let rows = sqlx::query_as::<_, UserListingRow>(
            r#"
            SELECT users.id, users.name, users.email, departments.name AS department
            FROM users
            LEFT JOIN departments ON users.department_id = departments.id
            ORDER BY users.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(UserListing::from).collect())
    }

    async fn delete(&self, id: &UserId) -> Result<u64, UserError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}

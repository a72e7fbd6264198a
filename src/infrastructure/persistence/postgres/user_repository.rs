use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::UserCredentials,
  errors::AuthError,
  ports::UserRepository,
  value_objects::{Email, PasswordHash},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row of a user joined with its company
#[derive(Debug, sqlx::FromRow)]
struct CredentialsRow {
  guid: Uuid,
  company_guid: Uuid,
  email: String,
  password_hash: String,
}

impl TryFrom<CredentialsRow> for UserCredentials {
  type Error = AuthError;

  fn try_from(row: CredentialsRow) -> Result<Self, Self::Error> {
    Ok(UserCredentials {
      guid: row.guid,
      company_guid: row.company_guid,
      email: Email::new(row.email)?,
      password_hash: PasswordHash::from_hash(row.password_hash)?,
    })
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn find_credentials_by_email(
    &self,
    email: &Email,
  ) -> Result<Option<UserCredentials>, AuthError> {
    let row = sqlx::query_as::<_, CredentialsRow>(
      r#"
            SELECT
                u.guid,
                c.guid AS company_guid,
                u.email,
                u.password_hash
            FROM users u
            INNER JOIN companies c ON c.id = u.company_id
            WHERE lower(u.email) = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to look up user {}: {}", email, e);
      AuthError::from(e)
    })?;

    row.map(UserCredentials::try_from).transpose()
  }
}

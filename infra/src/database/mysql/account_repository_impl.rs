//! MySQL implementation of the AccountRepository trait.
//!
//! Uniqueness of `username`, `email` and `phone` is enforced by unique
//! indexes; a commit-time violation is translated into the same
//! `DuplicateIdentifier` error the application-level pre-checks produce,
//! so callers see one consistent error shape regardless of race outcome.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ante_core::domain::entities::account::Account;
use ante_core::errors::{DomainError, ValidationError};
use ante_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, phone, password_hash,
           first_name, last_name, is_active,
           phone_verified_at, email_verified_at,
           created_at, updated_at
    FROM accounts
"#;

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get first_name: {}", e),
                })?,
            last_name: row.try_get("last_name").map_err(|e| DomainError::Database {
                message: format!("Failed to get last_name: {}", e),
            })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_active: {}", e),
            })?,
            phone_verified_at: row.try_get::<Option<DateTime<Utc>>, _>("phone_verified_at").map_err(
                |e| DomainError::Database {
                    message: format!("Failed to get phone_verified_at: {}", e),
                },
            )?,
            email_verified_at: row.try_get::<Option<DateTime<Utc>>, _>("email_verified_at").map_err(
                |e| DomainError::Database {
                    message: format!("Failed to get email_verified_at: {}", e),
                },
            )?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Map a write error, translating unique-index violations
    ///
    /// MySQL reports duplicates as SQLSTATE 23000 with the violated index
    /// name in the message; the index names carry the field name.
    fn map_write_error(err: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23000") {
                let message = db_err.message();
                let field = ["username", "email", "phone"]
                    .iter()
                    .find(|f| message.contains(**f))
                    .copied()
                    .unwrap_or("identifier");
                return DomainError::ValidationErr(ValidationError::DuplicateIdentifier {
                    field: field.to_string(),
                });
            }
        }
        DomainError::Database {
            message: format!("Database write failed: {}", err),
        }
    }

    async fn find_by_column(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.find_by_column("id", &id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.find_by_column("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_by_column("email", email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        self.find_by_column("phone", phone).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, username, email, phone, password_hash,
                first_name, last_name, is_active,
                phone_verified_at, email_verified_at,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.is_active)
            .bind(account.phone_verified_at)
            .bind(account.email_verified_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET username = ?, email = ?, phone = ?, password_hash = ?,
                first_name = ?, last_name = ?, is_active = ?,
                phone_verified_at = ?, email_verified_at = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.is_active)
            .bind(account.phone_verified_at)
            .bind(account.email_verified_at)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        Ok(account)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM accounts WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;
        Ok(row.is_some())
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM accounts WHERE phone = ? LIMIT 1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;
        Ok(row.is_some())
    }

    async fn mark_phone_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        // Conditional write: the NULL guard makes the check-then-set one
        // atomic statement, so concurrent confirmations cannot both win.
        let result = sqlx::query(
            "UPDATE accounts SET phone_verified_at = ?, updated_at = ? \
             WHERE id = ? AND phone_verified_at IS NULL",
        )
        .bind(at)
        .bind(at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Database write failed: {}", e),
        })?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        // No row changed: either the flag was already set or the account
        // is gone.
        match self.find_by_id(id).await? {
            Some(_) => Ok(false),
            None => Err(DomainError::NotFound {
                resource: "Account".to_string(),
            }),
        }
    }

    async fn mark_email_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError> {
        // Idempotent write: COALESCE keeps the first transition timestamp.
        let result = sqlx::query(
            "UPDATE accounts SET email_verified_at = COALESCE(email_verified_at, ?), \
             updated_at = ? WHERE id = ?",
        )
        .bind(at)
        .bind(at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Database write failed: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        let account = self.find_by_id(id).await?.ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;
        account.email_verified_at.ok_or(DomainError::Internal {
            message: "email_verified_at missing after idempotent write".to_string(),
        })
    }
}

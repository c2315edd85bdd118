//! Student records in Postgres.
//!
//! This crate provides:
//! - The `students` table definition and its seed rows ([`schema`])
//! - Connection settings from the environment ([`DbConfig`])
//! - A traced connection ([`Db`])
//! - The create, read, update-email and delete operations ([`StudentStore`])
//!
//! # Example
//!
//! ```ignore
//! let db = Db::connect(&DbConfig::from_env()?).await?;
//! schema::bootstrap(&db).await?;
//!
//! let store = StudentStore::new(&db);
//! let student = NewStudent::new("Alice", "Johnson", "alice.j@example.com", None)?;
//! let id = store.create(&student).await?;
//! store.update_email(id, "alice@example.com").await?;
//!
//! db.close().await;
//! ```
//!
//! Email uniqueness is enforced by the table's `UNIQUE` constraint and
//! surfaces as [`Error::UniquenessViolation`].

pub mod config;
mod error;
mod repository;
pub mod schema;
mod store;
mod student;
mod traced;

pub use config::DbConfig;
pub use error::{ConfigError, Error};
pub use repository::StudentRepository;
pub use store::StudentStore;
pub use student::{NewStudent, Student};
pub use traced::Db;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

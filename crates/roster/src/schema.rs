//! Table definition and seed rows for `students`.
//!
//! The table is created only when it does not exist; an existing table is
//! never altered.

use crate::{Db, Result};

/// Name of the only table.
pub const TABLE: &str = "students";

/// `CREATE TABLE` statement for [`TABLE`].
pub const CREATE_TABLE_SQL: &str = include_str!("../sql/students.sql");

/// Rows inserted right after the table is created.
pub const SEED_SQL: &str = include_str!("../sql/seed.sql");

/// Whether the `students` table exists in the current search path.
pub async fn table_exists(db: &Db) -> Result<bool> {
    let row = db
        .query_one("SELECT to_regclass($1) IS NOT NULL AS present", &[&TABLE])
        .await?;
    Ok(row.try_get("present")?)
}

/// Create and seed the `students` table if it is missing.
///
/// Returns `true` when the table was created by this call.
pub async fn bootstrap(db: &Db) -> Result<bool> {
    if table_exists(db).await? {
        tracing::debug!(table = TABLE, "table already present");
        return Ok(false);
    }

    db.batch_execute(&bootstrap_sql()).await?;
    tracing::info!(table = TABLE, "created and seeded table");
    Ok(true)
}

/// DDL followed by the seed rows, as one batch.
pub fn bootstrap_sql() -> String {
    format!("{}\n{}", CREATE_TABLE_SQL.trim_end(), SEED_SQL.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_table_sql() {
        insta::assert_snapshot!(CREATE_TABLE_SQL, @r"
        CREATE TABLE students (
            student_id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            enrollment_date DATE
        );
        ");
    }

    #[test]
    fn bootstrap_sql_creates_before_seeding() {
        let sql = bootstrap_sql();
        let create = sql.find("CREATE TABLE students").unwrap();
        let insert = sql.find("INSERT INTO students").unwrap();
        assert!(create < insert);
        assert_eq!(sql.matches("@example.com").count(), 3);
    }
}

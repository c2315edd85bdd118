//! Traced database connection.
//!
//! Owns a tokio-postgres client and the task driving its connection, and logs
//! every statement via tracing.

use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Error, NoTls, Row};
use tracing::Instrument;

use crate::DbConfig;

/// The single connection the store works through.
///
/// Opened once with [`Db::connect`] and released with [`Db::close`].
///
/// # Example
///
/// ```ignore
/// let db = Db::connect(&DbConfig::from_env()?).await?;
/// let rows = db.query("SELECT * FROM students WHERE student_id = $1", &[&id]).await?;
/// db.close().await;
/// ```
pub struct Db {
    client: Client,
    connection: JoinHandle<()>,
}

impl Db {
    /// Connect to the database described by `config`.
    pub async fn connect(config: &DbConfig) -> Result<Self, Error> {
        let span = tracing::info_span!("db.connect", db = %config);
        let (client, connection) = config.to_pg_config().connect(NoTls).instrument(span).await?;

        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "database connection error");
            }
        });

        tracing::debug!("connected");
        Ok(Self { client, connection })
    }

    /// Close the connection and wait for it to shut down.
    pub async fn close(self) {
        let Self { client, connection } = self;
        drop(client);
        if let Err(e) = connection.await {
            tracing::warn!(error = %e, "connection task did not finish cleanly");
        }
        tracing::debug!("connection closed");
    }

    /// Execute several statements separated by semicolons, without parameters.
    ///
    /// Postgres runs the batch in a single implicit transaction.
    pub async fn batch_execute(&self, sql: &str) -> Result<(), Error> {
        let span = tracing::debug_span!("db.batch_execute", bytes = sql.len());
        self.client.batch_execute(sql).instrument(span).await
    }

    /// Execute a query, returning all rows.
    pub async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, Error> {
        let span = tracing::debug_span!(
            "db.query",
            sql = %sql,
            params = params.len(),
            rows = tracing::field::Empty,
        );
        let rows = self
            .client
            .query(sql, params)
            .instrument(span.clone())
            .await?;
        span.record("rows", rows.len());
        Ok(rows)
    }

    /// Execute a query, returning at most one row.
    pub async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, Error> {
        let span = tracing::debug_span!(
            "db.query",
            sql = %sql,
            params = params.len(),
            rows = tracing::field::Empty,
        );
        let row = self
            .client
            .query_opt(sql, params)
            .instrument(span.clone())
            .await?;
        span.record("rows", if row.is_some() { 1u64 } else { 0u64 });
        Ok(row)
    }

    /// Execute a query, returning exactly one row.
    pub async fn query_one(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Row, Error> {
        let span = tracing::debug_span!(
            "db.query",
            sql = %sql,
            params = params.len(),
            rows = 1u64,
        );
        self.client.query_one(sql, params).instrument(span).await
    }
}

//! Store client: the one seam between data access and the relational backend.
//!
//! `PgPool` is the production backend; `SqlitePool` serves local runs and the test suite.
//! Both take the same `$n` statements from `crate::sql` and decode rows into JSON maps.

use crate::error::AppError;
use crate::model::Row;
use crate::schema;
use crate::sql::{create_table, BindValue, QueryBuf};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::error::ErrorKind;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

#[async_trait]
pub trait Store: Send + Sync {
    /// Run a SELECT and decode every row.
    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Row>, sqlx::Error>;

    /// Run a write statement and return the number of affected rows.
    async fn execute(&self, q: &QueryBuf) -> Result<u64, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.fetch_all(&QueryBuf::raw("SELECT 1")).await.map(|_| ())
    }
}

macro_rules! bind_all {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for p in $params {
            query = match p {
                BindValue::I64(n) => query.bind(*n),
                BindValue::Text(s) => query.bind(s.as_str()),
            };
        }
        query
    }};
}

#[async_trait]
impl Store for PgPool {
    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Row>, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all!(sqlx::query(&q.sql), &q.params).fetch_all(self).await?;
        Ok(rows.iter().map(row_to_map).collect())
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let done = bind_all!(sqlx::query(&q.sql), &q.params).execute(self).await?;
        Ok(done.rows_affected())
    }
}

#[async_trait]
impl Store for SqlitePool {
    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Row>, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all!(sqlx::query(&q.sql), &q.params).fetch_all(self).await?;
        Ok(rows.iter().map(row_to_map).collect())
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let done = bind_all!(sqlx::query(&q.sql), &q.params).execute(self).await?;
        Ok(done.rows_affected())
    }
}

fn row_to_map<R>(row: &R) -> Row
where
    R: sqlx::Row,
    usize: sqlx::ColumnIndex<R>,
    for<'r> i64: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
    for<'r> f64: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
    for<'r> String: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
{
    use sqlx::Column;
    let mut map = Row::new();
    for (i, col) in row.columns().iter().enumerate() {
        map.insert(col.name().to_string(), cell_to_value(row, i));
    }
    map
}

fn cell_to_value<R>(row: &R, i: usize) -> Value
where
    R: sqlx::Row,
    usize: sqlx::ColumnIndex<R>,
    for<'r> i64: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
    for<'r> f64: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
    for<'r> String: sqlx::Decode<'r, R::Database> + sqlx::Type<R::Database>,
{
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(i) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(i) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(i) {
        return Value::String(s);
    }
    Value::Null
}

/// Classify a failed write by its underlying cause, whichever operation issued it.
/// Constraint violations are conflicts, other database-reported errors are bad
/// statements, and anything else (pool, I/O, protocol) stays a store failure.
pub fn classify_write_error(err: sqlx::Error, context: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => AppError::Conflict(format!("{}: {}", context, db.message())),
            _ => AppError::BadRequest(format!("{}: {}", context, db.message())),
        },
        _ => AppError::Db(err),
    }
}

/// Open a pooled store for `database_url`. A `sqlite:` URL selects SQLite (foreign keys on);
/// in-memory SQLite is pinned to one long-lived connection so the database survives.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Arc<dyn Store>, AppError> {
    if database_url.starts_with("sqlite:") {
        let options = SqliteConnectOptions::from_str(database_url)?
            .foreign_keys(true)
            .create_if_missing(true);
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };
        let pool = pool_options.connect_with(options).await?;
        tracing::info!(backend = "sqlite", "store connected");
        Ok(Arc::new(pool))
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(backend = "postgres", "store connected");
        Ok(Arc::new(pool))
    }
}

/// CREATE TABLE IF NOT EXISTS for customer, vehicle and reservation, in dependency order.
pub async fn ensure_tables(store: &dyn Store) -> Result<(), AppError> {
    for entity in schema::ALL {
        store.execute(&create_table(entity)).await?;
    }
    Ok(())
}

//! Typed whole-table reads over the row shapes.

use super::{Backend, Database};
use crate::error::DbError;
use crate::schema::{Table, TableDef};

/// Builds `SELECT <columns> FROM <table>` for a table descriptor.
#[must_use]
pub fn select_def_sql(def: &TableDef, backend: Backend) -> String {
    let columns = def
        .column_names()
        .map(|name| backend.quote_ident(name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {} FROM {}", columns, backend.quote_ident(def.name))
}

/// Builds `SELECT <columns> FROM <table>` for a row type.
#[must_use]
pub fn select_sql<T: Table>(backend: Backend) -> String {
    select_def_sql(&T::DEF, backend)
}

/// Builds a paged select with bound limit and offset.
#[must_use]
pub fn select_page_sql<T: Table>(backend: Backend) -> String {
    format!(
        "{} LIMIT {} OFFSET {}",
        select_sql::<T>(backend),
        backend.placeholder(1),
        backend.placeholder(2)
    )
}

/// Builds `SELECT COUNT(*) FROM <table>`.
#[must_use]
pub fn count_sql<T: Table>(backend: Backend) -> String {
    format!("SELECT COUNT(*) FROM {}", backend.quote_ident(T::NAME))
}

impl Database {
    /// Fetches every row of `T`'s table.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row does not decode.
    pub async fn fetch_all<T: Table>(&self) -> Result<Vec<T>, DbError> {
        let sql = select_sql::<T>(self.backend());
        let rows = match self {
            Self::MySql(pool) => {
                sqlx::query_as::<sqlx::MySql, T>(&sql)
                    .fetch_all(pool)
                    .await?
            }
            Self::Postgres(pool) => {
                sqlx::query_as::<sqlx::Postgres, T>(&sql)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Fetches at most `limit` rows of `T`'s table, skipping `offset`.
    ///
    /// Row order is whatever the database returns.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row does not decode.
    pub async fn fetch_page<T: Table>(&self, limit: i64, offset: i64) -> Result<Vec<T>, DbError> {
        let sql = select_page_sql::<T>(self.backend());
        let rows = match self {
            Self::MySql(pool) => {
                sqlx::query_as::<sqlx::MySql, T>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            Self::Postgres(pool) => {
                sqlx::query_as::<sqlx::Postgres, T>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Counts the rows of `T`'s table.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count<T: Table>(&self) -> Result<i64, DbError> {
        let sql = count_sql::<T>(self.backend());
        let count = match self {
            Self::MySql(pool) => {
                sqlx::query_scalar::<sqlx::MySql, i64>(&sql)
                    .fetch_one(pool)
                    .await?
            }
            Self::Postgres(pool) => {
                sqlx::query_scalar::<sqlx::Postgres, i64>(&sql)
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(count)
    }
}

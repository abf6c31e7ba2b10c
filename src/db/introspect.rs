//! Schema drift check between the row shapes and the live database.
//!
//! Both backends expose `information_schema.columns`; the check reads column
//! names, nullability and default presence for the connection's current
//! schema and compares them with the registered descriptors.

use super::{Backend, Database};
use crate::error::DbError;
use crate::schema::{self, TableDef};
use sqlx::FromRow;
use std::fmt;
use tracing::{debug, info, warn};

const MYSQL_COLUMNS_SQL: &str = "SELECT CAST(COLUMN_NAME AS CHAR) AS column_name, \
     CAST(IS_NULLABLE AS CHAR) AS is_nullable, \
     CAST(COLUMN_DEFAULT AS CHAR) AS column_default, \
     CAST(EXTRA AS CHAR) AS extra \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

const POSTGRES_COLUMNS_SQL: &str = "SELECT column_name::text AS column_name, \
     is_nullable::text AS is_nullable, \
     column_default::text AS column_default, \
     CASE WHEN is_identity = 'YES' THEN 'identity' ELSE '' END AS extra \
     FROM information_schema.columns \
     WHERE table_schema = current_schema() AND table_name = $1 \
     ORDER BY ordinal_position";

fn columns_sql(backend: Backend) -> &'static str {
    match backend {
        Backend::MySql => MYSQL_COLUMNS_SQL,
        Backend::Postgres => POSTGRES_COLUMNS_SQL,
    }
}

#[derive(Debug, FromRow)]
struct ColumnRow {
    column_name: String,
    is_nullable: String,
    column_default: Option<String>,
    extra: Option<String>,
}

/// A column as reported by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedColumn {
    /// Column name.
    pub name: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column has a default, auto-increment or identity.
    pub has_default: bool,
}

impl From<ColumnRow> for ObservedColumn {
    fn from(row: ColumnRow) -> Self {
        let generated = row.extra.as_deref().is_some_and(|extra| {
            let extra = extra.to_ascii_lowercase();
            extra.contains("auto_increment")
                || extra.contains("default_generated")
                || extra.contains("identity")
        });

        Self {
            name: row.column_name,
            nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
            has_default: row.column_default.is_some() || generated,
        }
    }
}

/// A single disagreement between a descriptor and the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// The table does not exist.
    MissingTable,
    /// A described column does not exist.
    MissingColumn(&'static str),
    /// The database has a column the descriptor lacks.
    UnexpectedColumn(String),
    /// Nullability differs.
    NullabilityMismatch {
        /// Column name.
        column: &'static str,
        /// Nullability in the descriptor.
        expected: bool,
        /// Nullability in the database.
        actual: bool,
    },
    /// The descriptor relies on a default the database does not have.
    MissingDefault(&'static str),
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTable => write!(f, "table is missing"),
            Self::MissingColumn(column) => write!(f, "column {column} is missing"),
            Self::UnexpectedColumn(column) => write!(f, "column {column} is not described"),
            Self::NullabilityMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {column} nullable: expected {expected}, found {actual}"
            ),
            Self::MissingDefault(column) => write!(f, "column {column} has no default"),
        }
    }
}

/// Compares a descriptor with the observed columns of its table.
///
/// An empty observation means the table does not exist.
#[must_use]
pub fn compare(def: &TableDef, observed: &[ObservedColumn]) -> Vec<Drift> {
    if observed.is_empty() {
        return vec![Drift::MissingTable];
    }

    let mut drift = Vec::new();
    for column in def.columns {
        let Some(actual) = observed.iter().find(|o| o.name == column.name) else {
            drift.push(Drift::MissingColumn(column.name));
            continue;
        };
        if actual.nullable != column.nullable {
            drift.push(Drift::NullabilityMismatch {
                column: column.name,
                expected: column.nullable,
                actual: actual.nullable,
            });
        }
        if column.has_default && !actual.has_default {
            drift.push(Drift::MissingDefault(column.name));
        }
    }

    drift.extend(
        observed
            .iter()
            .filter(|o| def.column(&o.name).is_none())
            .map(|o| Drift::UnexpectedColumn(o.name.clone())),
    );

    drift
}

/// Drift found in one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// SQL table name.
    pub table: &'static str,
    /// Disagreements, empty when the table matches.
    pub drift: Vec<Drift>,
}

/// Result of checking every registered table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// One entry per registered table.
    pub tables: Vec<TableReport>,
}

impl SchemaReport {
    /// Whether no table drifted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.tables.iter().all(|t| t.drift.is_empty())
    }

    /// Total number of disagreements.
    #[must_use]
    pub fn drift_count(&self) -> usize {
        self.tables.iter().map(|t| t.drift.len()).sum()
    }

    /// Tables with at least one disagreement.
    pub fn drifted(&self) -> impl Iterator<Item = &TableReport> {
        self.tables.iter().filter(|t| !t.drift.is_empty())
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{} tables match", self.tables.len());
        }
        for report in self.drifted() {
            for drift in &report.drift {
                writeln!(f, "{}: {}", report.table, drift)?;
            }
        }
        Ok(())
    }
}

/// Reads the columns of `table` from the database.
///
/// Returns an empty list when the table does not exist.
///
/// # Errors
/// Returns an error if the catalog query fails.
pub async fn observe_table(db: &Database, table: &str) -> Result<Vec<ObservedColumn>, DbError> {
    let sql = columns_sql(db.backend());
    let rows = match db {
        Database::MySql(pool) => {
            sqlx::query_as::<sqlx::MySql, ColumnRow>(sql)
                .bind(table)
                .fetch_all(pool)
                .await?
        }
        Database::Postgres(pool) => {
            sqlx::query_as::<sqlx::Postgres, ColumnRow>(sql)
                .bind(table)
                .fetch_all(pool)
                .await?
        }
    };

    debug!(table, columns = rows.len(), "Observed table columns");

    Ok(rows.into_iter().map(ObservedColumn::from).collect())
}

/// Checks one registered table by name.
///
/// # Errors
/// Returns [`DbError::UnknownTable`] for an unregistered name, or an error if
/// the catalog query fails.
pub async fn verify_table(db: &Database, table: &str) -> Result<TableReport, DbError> {
    let def = schema::table(table).ok_or_else(|| DbError::UnknownTable(table.to_string()))?;
    let observed = observe_table(db, def.name).await?;
    Ok(TableReport {
        table: def.name,
        drift: compare(def, &observed),
    })
}

/// Checks every registered table.
///
/// # Errors
/// Returns an error if a catalog query fails.
pub async fn verify_schema(db: &Database) -> Result<SchemaReport, DbError> {
    let mut report = SchemaReport::default();

    for def in schema::TABLES {
        let observed = observe_table(db, def.name).await?;
        let drift = compare(def, &observed);
        for item in &drift {
            warn!(table = def.name, "Schema drift: {}", item);
        }
        report.tables.push(TableReport {
            table: def.name,
            drift,
        });
    }

    info!(
        backend = %db.backend(),
        tables = report.tables.len(),
        drift = report.drift_count(),
        "Schema check completed"
    );

    Ok(report)
}

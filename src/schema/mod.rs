//! Row shapes for every table of the application schema.
//!
//! Each table is a plain `FromRow` struct plus a static column descriptor
//! list exposed through [`Table`]. [`TABLES`] aggregates them into a single
//! registry keyed by SQL table name.

mod enums;
mod int;
mod tables;

#[cfg(test)]
mod tests;

use sqlx::FromRow;
use sqlx::mysql::MySqlRow;
use sqlx::postgres::PgRow;

pub use enums::{Language, Location, ParseEnumError, Status, SubscriptionPlan};
pub use int::Int;
pub use tables::*;

/// Timestamp column type. Columns are stored without a time zone.
pub type Timestamp = chrono::NaiveDateTime;

/// Descriptor of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// SQL column name.
    pub name: &'static str,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the database fills the column when an insert omits it.
    pub has_default: bool,
}

impl Column {
    /// NOT NULL column without a default.
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            nullable: false,
            has_default: false,
        }
    }

    /// Nullable column without a default.
    #[must_use]
    pub const fn nullable(name: &'static str) -> Self {
        Self {
            name,
            nullable: true,
            has_default: false,
        }
    }

    /// NOT NULL column with a default or auto-increment.
    #[must_use]
    pub const fn generated(name: &'static str) -> Self {
        Self {
            name,
            nullable: false,
            has_default: true,
        }
    }

    /// Nullable column with a default.
    #[must_use]
    pub const fn generated_nullable(name: &'static str) -> Self {
        Self {
            name,
            nullable: true,
            has_default: true,
        }
    }
}

/// Descriptor of a table: its SQL name, row type and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    /// SQL table name.
    pub name: &'static str,
    /// Name of the Rust row type.
    pub row: &'static str,
    /// Columns in declaration order.
    pub columns: &'static [Column],
}

impl TableDef {
    /// Looks up a column by exact SQL name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.name)
    }

    /// Columns an insert has to supply.
    pub fn insertable_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| !c.has_default)
    }
}

/// A row type mapped to a table.
///
/// Rows decode from both MySQL and PostgreSQL result rows.
pub trait Table:
    for<'r> FromRow<'r, MySqlRow> + for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static
{
    /// SQL table name.
    const NAME: &'static str;
    /// Name of the Rust row type.
    const ROW: &'static str;
    /// Columns in declaration order.
    const COLUMNS: &'static [Column];
    /// Table descriptor.
    const DEF: TableDef = TableDef {
        name: Self::NAME,
        row: Self::ROW,
        columns: Self::COLUMNS,
    };
}

/// Looks up a registered table by exact SQL name.
#[must_use]
pub fn table(name: &str) -> Option<&'static TableDef> {
    TABLES
        .binary_search_by(|def| def.name.cmp(name))
        .ok()
        .map(|index| &TABLES[index])
}

//! Database module: backend selection, client factory and schema checks.

mod backend;
mod introspect;
mod pool;
mod query;

pub use backend::Backend;
pub use introspect::{
    Drift, ObservedColumn, SchemaReport, TableReport, compare, observe_table, verify_schema,
    verify_table,
};
pub use pool::{Database, init, shared};
pub use query::{count_sql, select_def_sql, select_page_sql, select_sql};

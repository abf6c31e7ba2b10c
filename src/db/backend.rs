//! SQL backend selection and dialect details.

use crate::error::DbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL backend a [`Database`](super::Database) is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// MySQL-compatible server (including serverless MySQL providers).
    MySql,
    /// PostgreSQL server.
    Postgres,
}

impl Backend {
    /// Selects the backend from a connection string's scheme.
    ///
    /// # Errors
    /// Returns [`DbError::UnsupportedScheme`] for any other scheme.
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let scheme = url
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .unwrap_or_default()
            .to_ascii_lowercase();

        match scheme.as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(DbError::UnsupportedScheme(scheme)),
        }
    }

    /// Environment variable holding this backend's connection string.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::MySql => "MYSQL_URL",
            Self::Postgres => "DATABASE_URL",
        }
    }

    /// Lower-case backend name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
        }
    }

    /// Quotes an identifier, doubling any embedded quote character.
    #[must_use]
    pub fn quote_ident(self, ident: &str) -> String {
        let quote = match self {
            Self::MySql => '`',
            Self::Postgres => '"',
        };
        let mut quoted = String::with_capacity(ident.len() + 2);
        quoted.push(quote);
        for c in ident.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Bind placeholder for the 1-based parameter `index`.
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::MySql => "?".to_string(),
            Self::Postgres => format!("${index}"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(DbError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_mysql() {
        assert_eq!(
            Backend::from_url("mysql://user:pw@aws.connect.psdb.cloud/rolitt?ssl-mode=required")
                .unwrap(),
            Backend::MySql
        );
        assert_eq!(
            Backend::from_url("mariadb://localhost/rolitt").unwrap(),
            Backend::MySql
        );
    }

    #[test]
    fn test_from_url_postgres() {
        assert_eq!(
            Backend::from_url("postgres://localhost/rolitt").unwrap(),
            Backend::Postgres
        );
        assert_eq!(
            Backend::from_url("PostgreSQL://localhost/rolitt").unwrap(),
            Backend::Postgres
        );
    }

    #[test]
    fn test_from_url_unsupported() {
        assert!(matches!(
            Backend::from_url("sqlite://rolitt.db"),
            Err(DbError::UnsupportedScheme(s)) if s == "sqlite"
        ));
        assert!(matches!(
            Backend::from_url("not a url"),
            Err(DbError::UnsupportedScheme(s)) if s.is_empty()
        ));
    }

    #[test]
    fn test_env_var() {
        assert_eq!(Backend::MySql.env_var(), "MYSQL_URL");
        assert_eq!(Backend::Postgres.env_var(), "DATABASE_URL");
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(Backend::MySql.quote_ident("desc"), "`desc`");
        assert_eq!(Backend::Postgres.quote_ident("failCount"), "\"failCount\"");
        assert_eq!(Backend::MySql.quote_ident("a`b"), "`a``b`");
        assert_eq!(Backend::Postgres.quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(Backend::MySql.placeholder(2), "?");
        assert_eq!(Backend::Postgres.placeholder(2), "$2");
    }

    #[test]
    fn test_display_and_parse() {
        for backend in [Backend::MySql, Backend::Postgres] {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
        assert!("oracle".parse::<Backend>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Backend::MySql).unwrap();
        assert_eq!(json, "\"mysql\"");
        let parsed: Backend = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(parsed, Backend::Postgres);
    }
}

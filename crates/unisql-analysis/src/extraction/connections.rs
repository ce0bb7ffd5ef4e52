//! Regex-based detection of database access calls.
//!
//! A literal pattern match over the raw text. Indirect configuration, string
//! concatenation, and variables are not followed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Database access dialects recognized by the connection patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `psycopg2.connect(... database="name")`
    Postgres,
    /// `mysql.connector.connect(... database="name")`
    Mysql,
    /// `get_collection("name")`
    Mongodb,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
        }
    }

    pub fn all() -> &'static [Dialect] {
        &[Self::Postgres, Self::Mysql, Self::Mongodb]
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Postgres => &POSTGRES_RE,
            Self::Mysql => &MYSQL_RE,
            Self::Mongodb => &MONGODB_RE,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// `.` does not cross newlines: the call and its `database=` argument must share a line.
static POSTGRES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"psycopg2\.connect.*?database\s*=\s*['"]([^'"]+)"#)
        .expect("postgres connection pattern")
});

static MYSQL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"mysql\.connector\.connect.*?database\s*=\s*['"]([^'"]+)"#)
        .expect("mysql connection pattern")
});

static MONGODB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"get_collection\(['"]([^'"]+)['"]\)"#).expect("mongodb collection pattern")
});

/// Dialect to captured identifiers, in scan order, duplicates kept.
pub type ConnectionMap = BTreeMap<Dialect, Vec<String>>;

/// Scan `code` with every dialect pattern.
///
/// Total: every dialect is present in the result, mapped to an empty list
/// when nothing matched.
pub fn extract_connections(code: &str) -> ConnectionMap {
    Dialect::all()
        .iter()
        .map(|dialect| {
            let found = dialect
                .pattern()
                .captures_iter(code)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str().to_string())
                .collect();
            (*dialect, found)
        })
        .collect()
}

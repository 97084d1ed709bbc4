//! Connection settings for the PostgreSQL AGE backend.

use serde::{Deserialize, Serialize};

use crate::db::DbError;

pub const DEFAULT_GRAPH_NAME: &str = "graph";
const DEFAULT_PORT: u16 = 5432;

fn default_graph_name() -> String {
    DEFAULT_GRAPH_NAME.to_string()
}

/// PostgreSQL connection settings.
///
/// Either `connection_string` is given and used verbatim, or `host`, `user`
/// and `database` are combined into a libpq key/value string. A `port` of 0
/// means the PostgreSQL default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresConfig {
    #[serde(default)]
    pub connection_string: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    /// Name of the AGE graph to introspect
    #[serde(default = "default_graph_name")]
    pub graph_name: String,
}

impl PostgresConfig {
    /// Config for a `postgres://` URL or libpq connection string.
    pub fn from_connection_string(connection_string: &str) -> Self {
        Self {
            connection_string: Some(connection_string.to_string()),
            host: None,
            port: 0,
            user: None,
            password: None,
            database: None,
            graph_name: default_graph_name(),
        }
    }

    pub fn build_connection_string(&self) -> Result<String, DbError> {
        if let Some(connection_string) = &self.connection_string {
            return Ok(connection_string.clone());
        }

        let host = required(&self.host, "host")?;
        let user = required(&self.user, "user")?;
        let database = required(&self.database, "database")?;
        let port = if self.port == 0 { DEFAULT_PORT } else { self.port };

        let mut parts = vec![
            format!("host={}", quote_value(host)),
            format!("port={}", port),
            format!("user={}", quote_value(user)),
            format!("dbname={}", quote_value(database)),
        ];
        if let Some(password) = &self.password {
            parts.push(format!("password={}", quote_value(password)));
        }

        Ok(parts.join(" "))
    }

    /// Connection target without credentials, for logs and error messages.
    pub fn display_target(&self) -> String {
        match (&self.host, &self.database) {
            (Some(host), Some(database)) => format!("{}/{}", host, database),
            _ if self.connection_string.is_some() => "<connection string>".to_string(),
            _ => "<unconfigured>".to_string(),
        }
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, DbError> {
    value.as_deref().ok_or_else(|| DbError::InvalidConfig {
        message: format!("postgres configuration is missing '{}'", field),
    })
}

/// Quote a libpq key/value parameter.
fn quote_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

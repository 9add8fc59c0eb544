use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use thiserror::Error;

/// Service instance whose credentials hold the database connection details
pub const DEFAULT_DATABASE_SERVICE: &str = "doit-etre-db";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POSTGRES_PORT: u16 = 5432;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: set DATABASE_URL or bind the '{0}' service")]
    DatabaseUrlMissing(String),

    #[error("Invalid VCAP_SERVICES: {0}")]
    InvalidServices(String),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
    pub run_migrations: bool,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

// Keep the password out of logs
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &if self.password.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let mut config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        };

        config.database.url = database_url_from_env()?;
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides. PORT is what the platform hands us.
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("PORT")
            .ok()
            .or_else(|| env::var("DOIT_ETRE_PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("RUN_MIGRATIONS") {
            self.database.run_migrations = v.parse().unwrap_or(self.database.run_migrations);
        }

        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.admin.password = v;
        }

        self
    }

    fn base(environment: Environment, max_connections: u32, connection_timeout: u64) -> Self {
        Self {
            environment,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections,
                connection_timeout,
                run_migrations: true,
            },
            admin: AdminConfig {
                password: String::new(),
            },
        }
    }

    fn development() -> Self {
        Self::base(Environment::Development, 5, 30)
    }

    fn staging() -> Self {
        Self::base(Environment::Staging, 10, 10)
    }

    fn production() -> Self {
        Self::base(Environment::Production, 20, 5)
    }
}

/// DATABASE_URL wins; otherwise the URL is assembled from the bound
/// database service in VCAP_SERVICES.
fn database_url_from_env() -> Result<String, ConfigError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.trim().is_empty() {
            url::Url::parse(&url)?;
            return Ok(url);
        }
    }

    let service_name = env::var("DATABASE_SERVICE_NAME")
        .unwrap_or_else(|_| DEFAULT_DATABASE_SERVICE.to_string());

    match env::var("VCAP_SERVICES") {
        Ok(services) => database_url_from_services(&services, &service_name),
        Err(_) => Err(ConfigError::DatabaseUrlMissing(service_name)),
    }
}

/// Build a postgres URL from the credentials of the named service instance
pub fn database_url_from_services(services: &str, service_name: &str) -> Result<String, ConfigError> {
    let services: Value = serde_json::from_str(services)
        .map_err(|e| ConfigError::InvalidServices(e.to_string()))?;

    let credentials = services
        .as_object()
        .into_iter()
        .flat_map(|by_label| by_label.values())
        .filter_map(Value::as_array)
        .flatten()
        .find(|instance| instance["name"].as_str() == Some(service_name))
        .map(|instance| &instance["credentials"])
        .ok_or_else(|| ConfigError::DatabaseUrlMissing(service_name.to_string()))?;

    let credential = |key: &str| -> Option<String> {
        match &credentials[key] {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    };

    let hostname = credential("hostname")
        .ok_or_else(|| ConfigError::InvalidServices("credentials.hostname is missing".to_string()))?;
    let port = credential("port")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_POSTGRES_PORT);
    let name = credential("name").unwrap_or_default();

    let mut url = url::Url::parse(&format!("postgres://{}", hostname))?;
    let _ = url.set_port(Some(port));
    url.set_path(&format!("/{}", name));
    if let Some(username) = credential("username") {
        let _ = url.set_username(&username);
    }
    if let Some(password) = credential("password") {
        let _ = url.set_password(Some(&password));
    }

    Ok(url.into())
}

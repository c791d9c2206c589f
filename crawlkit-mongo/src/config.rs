//! Connection parameters resolved from crawler settings and the environment.
//!
//! Each field is probed in the same order: the cache-specific setting, the
//! generic setting, the environment variable, then the field default.
//!
//! | Field | Cache-specific key | Generic key | Env var | Default |
//! |---|---|---|---|---|
//! | host | `HTTPCACHE_MONGO_HOST` | `MONGO_HOST` | `MONGO_HOST` | `localhost` |
//! | port | `HTTPCACHE_MONGO_PORT` | `MONGO_PORT` | `MONGO_PORT` | `27017` |
//! | database | `HTTPCACHE_MONGO_DATABASE` | `MONGO_DATABASE` | `MONGO_DATABASE` | `BOT_NAME` setting |
//! | username | `HTTPCACHE_MONGO_USERNAME` | `MONGO_USERNAME` | `MONGO_USERNAME` | none |
//! | password | `HTTPCACHE_MONGO_PASSWORD` | `MONGO_PASSWORD` | `MONGO_PASSWORD` | none |

use std::fmt;

use crawlkit_settings::{ConfigResolver, Environment, FieldKind, Settings};
use mongodb::options::{ClientOptions, Credential as DriverCredential, ServerAddress};

use crate::error::{MongoError, MongoResult};

/// Default MongoDB host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default MongoDB port.
pub const DEFAULT_PORT: u16 = 27017;

/// Settings key whose value is the fallback database name.
pub const BOT_NAME: &str = "BOT_NAME";

/// The keys consulted for one connection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKeys {
    /// Field name, used in logs and errors.
    pub field: &'static str,
    /// Cache-specific settings key.
    pub cache_key: &'static str,
    /// Generic settings key.
    pub generic_key: &'static str,
    /// Environment variable.
    pub env_var: &'static str,
}

impl FieldKeys {
    /// Build a resolver probing this field's keys in canonical order.
    pub fn resolver<'a>(
        &self,
        settings: &'a Settings,
        environment: &'a Environment,
        kind: FieldKind,
    ) -> ConfigResolver<'a> {
        ConfigResolver::new(self.field, kind)
            .probe(settings, self.cache_key)
            .probe(settings, self.generic_key)
            .probe(environment, self.env_var)
    }
}

/// Keys for the host field.
pub const HOST: FieldKeys = FieldKeys {
    field: "host",
    cache_key: "HTTPCACHE_MONGO_HOST",
    generic_key: "MONGO_HOST",
    env_var: "MONGO_HOST",
};

/// Keys for the port field.
pub const PORT: FieldKeys = FieldKeys {
    field: "port",
    cache_key: "HTTPCACHE_MONGO_PORT",
    generic_key: "MONGO_PORT",
    env_var: "MONGO_PORT",
};

/// Keys for the database field.
pub const DATABASE: FieldKeys = FieldKeys {
    field: "database",
    cache_key: "HTTPCACHE_MONGO_DATABASE",
    generic_key: "MONGO_DATABASE",
    env_var: "MONGO_DATABASE",
};

/// Keys for the username field.
pub const USERNAME: FieldKeys = FieldKeys {
    field: "username",
    cache_key: "HTTPCACHE_MONGO_USERNAME",
    generic_key: "MONGO_USERNAME",
    env_var: "MONGO_USERNAME",
};

/// Keys for the password field.
pub const PASSWORD: FieldKeys = FieldKeys {
    field: "password",
    cache_key: "HTTPCACHE_MONGO_PASSWORD",
    generic_key: "MONGO_PASSWORD",
    env_var: "MONGO_PASSWORD",
};

/// Username and password pair.
///
/// Only exists when both halves are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Resolved MongoDB connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database selected after connecting. Never empty.
    pub database: String,
    /// Username, if configured.
    pub username: Option<String>,
    /// Password, if configured.
    pub password: Option<String>,
}

impl ConnectionParams {
    /// Resolve parameters from settings and an environment snapshot.
    ///
    /// Fails with [`MongoError::Config`] when no database name can be
    /// resolved, or when a port value is not a valid TCP port.
    pub fn resolve(settings: &Settings, environment: &Environment) -> MongoResult<Self> {
        let host = HOST
            .resolver(settings, environment, FieldKind::Text)
            .default_value(DEFAULT_HOST)
            .require()?
            .to_string();

        let port = PORT
            .resolver(settings, environment, FieldKind::Integer)
            .default_value(DEFAULT_PORT)
            .require()?
            .as_int(PORT.field)?
            .unwrap_or_default();
        let port = u16::try_from(port)
            .map_err(|_| MongoError::config(format!("port {} is out of range", port)))?;

        let database = DATABASE
            .resolver(settings, environment, FieldKind::Text)
            .default_opt(settings.get(BOT_NAME).cloned())
            .resolve_string()?
            .ok_or_else(|| {
                MongoError::config(format!(
                    "database name is empty; set {}, {}, or {}",
                    DATABASE.generic_key, DATABASE.env_var, BOT_NAME
                ))
            })?;

        let username = USERNAME
            .resolver(settings, environment, FieldKind::Text)
            .resolve_string()?;
        let password = PASSWORD
            .resolver(settings, environment, FieldKind::Text)
            .resolve_string()?;

        Ok(Self {
            host,
            port,
            database,
            username,
            password,
        })
    }

    /// The credential, present only if both username and password are set.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credential {
                    username: username.clone(),
                    password: password.clone(),
                })
            }
            _ => None,
        }
    }

    /// Whether exactly one of username and password is set.
    pub fn has_partial_credential(&self) -> bool {
        self.username.is_some() != self.password.is_some()
    }

    /// `host:port` address string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Convert to MongoDB ClientOptions.
    ///
    /// Credentials authenticate against the selected database. No timeouts
    /// are set beyond the driver defaults.
    pub fn to_client_options(&self) -> ClientOptions {
        let credential = self.credential().map(|c| {
            DriverCredential::builder()
                .username(c.username)
                .password(c.password)
                .source(self.database.clone())
                .build()
        });

        ClientOptions::builder()
            .hosts(vec![ServerAddress::Tcp {
                host: self.host.clone(),
                port: Some(self.port),
            }])
            .credential(credential)
            .build()
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

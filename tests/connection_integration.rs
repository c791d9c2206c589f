//! Integration tests for settings-driven connection parameters.
//!
//! These tests exercise resolution end to end, from a settings file through
//! the connection factory, without requiring a running MongoDB server.

use crawlkit::mongo::config::{DATABASE, HOST, PASSWORD, PORT, USERNAME};
use crawlkit::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;

/// Every field prefers the cache-specific key over all other layers.
#[test]
fn test_cache_specific_keys_win() {
    let settings = Settings::new()
        .set("BOT_NAME", "bot")
        .set(HOST.cache_key, "cache-host")
        .set(HOST.generic_key, "generic-host")
        .set(PORT.cache_key, 1111)
        .set(PORT.generic_key, 2222)
        .set(DATABASE.cache_key, "cache-db")
        .set(DATABASE.generic_key, "generic-db")
        .set(USERNAME.cache_key, "cache-user")
        .set(PASSWORD.cache_key, "cache-pass");
    let env = Environment::new()
        .set(HOST.env_var, "env-host")
        .set(PORT.env_var, "3333")
        .set(DATABASE.env_var, "env-db")
        .set(USERNAME.env_var, "env-user")
        .set(PASSWORD.env_var, "env-pass");

    let params = ConnectionParams::resolve(&settings, &env).unwrap();

    assert_eq!(params.host, "cache-host");
    assert_eq!(params.port, 1111);
    assert_eq!(params.database, "cache-db");
    assert_eq!(
        params.credential(),
        Some(Credential {
            username: "cache-user".to_string(),
            password: "cache-pass".to_string(),
        })
    );
}

/// With nothing configured, host and port fall back to their defaults.
#[test]
fn test_defaults_apply() {
    let settings = Settings::new().set("BOT_NAME", "crawler");
    let params = ConnectionParams::resolve(&settings, &Environment::new()).unwrap();

    assert_eq!(params.address(), "localhost:27017");
}

/// Settings loaded from a file resolve the same way as in-memory settings.
#[test]
fn test_resolve_from_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "BOT_NAME = \"crawler\"").unwrap();
    writeln!(file, "MONGO_HOST = \"${{DB_HOST}}\"").unwrap();
    writeln!(file, "HTTPCACHE_MONGO_PORT = 27018").unwrap();

    let env = Environment::new()
        .set("DB_HOST", "db1.internal")
        .set("MONGO_PORT", "2000");
    let settings = Settings::from_file(file.path(), &env).unwrap();
    let params = ConnectionParams::resolve(&settings, &env).unwrap();

    assert_eq!(params.host, "db1.internal");
    assert_eq!(params.port, 27018);
    assert_eq!(params.database, "crawler");
}

/// The reference example from the settings table.
#[test]
fn test_reference_example() {
    let settings = Settings::new()
        .set("MONGO_HOST", "db1")
        .set("BOT_NAME", "crawler");
    let env = Environment::new().set("MONGO_PORT", "2000");

    let params = ConnectionParams::resolve(&settings, &env).unwrap();

    assert_eq!(
        params,
        ConnectionParams {
            host: "db1".to_string(),
            port: 2000,
            database: "crawler".to_string(),
            username: None,
            password: None,
        }
    );
}

/// An empty database name aborts before any connection attempt.
#[tokio::test]
async fn test_build_rejects_empty_database() {
    let settings = Settings::new()
        .set("HTTPCACHE_MONGO_DATABASE", "")
        .set("MONGO_DATABASE", "");
    let env = Environment::new().set("MONGO_DATABASE", "");

    let err = ConnectionFactory::build(&settings, &env).await.unwrap_err();

    assert!(matches!(err, MongoError::Config(_)));
}

/// A lone username is not an error and produces no driver credential.
#[test]
fn test_partial_credentials_skip_authentication() {
    let settings = Settings::new()
        .set("BOT_NAME", "crawler")
        .set("MONGO_USERNAME", "scraper");

    let params = ConnectionParams::resolve(&settings, &Environment::new()).unwrap();

    assert!(params.credential().is_none());
    assert!(params.to_client_options().credential.is_none());
}

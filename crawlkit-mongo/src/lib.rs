//! # crawlkit-mongo
//!
//! MongoDB connections configured from layered crawler settings.
//!
//! This crate provides:
//! - Resolution of host, port, database and credentials from settings,
//!   the environment and built-in defaults
//! - All-or-nothing credentials: a lone username or password means no
//!   authentication, not an error
//! - A connection factory that opens, pings and optionally authenticates
//!
//! ## Example
//!
//! ```rust,ignore
//! use crawlkit_mongo::ConnectionFactory;
//! use crawlkit_settings::{Environment, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::new()
//!         .set("BOT_NAME", "crawler")
//!         .set("HTTPCACHE_MONGO_HOST", "cache.internal");
//!
//!     let conn = ConnectionFactory::build(&settings, &Environment::from_process()).await?;
//!     let pages = conn.database().collection::<bson::Document>("pages");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution only
//!
//! Parameters can be resolved without opening a connection:
//!
//! ```rust
//! use crawlkit_mongo::ConnectionParams;
//! use crawlkit_settings::{Environment, Settings};
//!
//! let settings = Settings::new().set("MONGO_HOST", "db1").set("BOT_NAME", "crawler");
//! let env = Environment::new().set("MONGO_PORT", "2000");
//!
//! let params = ConnectionParams::resolve(&settings, &env).unwrap();
//! assert_eq!(params.address(), "db1:2000");
//! assert_eq!(params.database, "crawler");
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ConnectionFactory, MongoConnection};
pub use config::{ConnectionParams, Credential, FieldKeys};
pub use error::{MongoError, MongoResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::{ConnectionFactory, MongoConnection};
    pub use crate::config::{ConnectionParams, Credential};
    pub use crate::error::{MongoError, MongoResult};
}

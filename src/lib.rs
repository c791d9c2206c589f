//! # crawlkit
//!
//! Settings-driven plumbing for web crawlers.
//!
//! crawlkit provides:
//! - Layered settings resolution: cache-specific key, generic key,
//!   environment variable, then a built-in default
//! - A MongoDB connection factory configured from those settings
//! - Random `User-Agent` injection for outbound requests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crawlkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     crawlkit::logging::init();
//!
//!     let env = Environment::from_process();
//!     let settings = Settings::from_file("crawler.toml", &env)?;
//!
//!     let conn = ConnectionFactory::build(&settings, &env).await?;
//!     let user_agents = RandomUserAgent::from_settings(&settings);
//!
//!     let mut headers: std::collections::HashMap<String, String> = Default::default();
//!     user_agents.process_request(&mut headers)?;
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod logging;

/// Settings, environment snapshots and field resolution.
pub mod settings {
    pub use crawlkit_settings::*;
}

/// MongoDB connection parameters and factory.
pub mod mongo {
    pub use crawlkit_mongo::*;
}

/// User-agent pools and header injection.
pub mod useragent {
    pub use crawlkit_useragent::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crawlkit_mongo::prelude::*;
    pub use crawlkit_settings::prelude::*;
    pub use crawlkit_useragent::prelude::*;
}

// Re-export key types at the crate root
pub use crawlkit_mongo::{ConnectionFactory, ConnectionParams, MongoError};
pub use crawlkit_settings::{Environment, Settings, SettingsError};
pub use crawlkit_useragent::{RandomUserAgent, UserAgentError, UserAgentPool};

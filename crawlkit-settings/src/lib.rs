//! # crawlkit-settings
//!
//! Layered settings for crawlers.
//!
//! This crate provides:
//! - Loosely typed [`SettingValue`]s with "falsy means unset" semantics
//! - An insertion-ordered [`Settings`] map, loadable from flat TOML files
//! - An [`Environment`] snapshot passed explicitly instead of read globally
//! - [`ConfigResolver`], which probes ordered sources and applies a default
//!
//! ## Example
//!
//! ```rust
//! use crawlkit_settings::{ConfigResolver, Environment, FieldKind, Settings};
//!
//! let settings = Settings::new().set("BOT_NAME", "crawler");
//! let env = Environment::new().set("MONGO_PORT", "2000");
//!
//! let port = ConfigResolver::new("port", FieldKind::Integer)
//!     .probe(&settings, "MONGO_PORT")
//!     .probe(&env, "MONGO_PORT")
//!     .default_value(27017)
//!     .require()
//!     .unwrap();
//!
//! assert_eq!(port.to_string(), "2000");
//! ```

pub mod error;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod value;

pub use error::{SettingsError, SettingsResult};
pub use resolver::{ConfigResolver, FieldKind, Probe, resolve};
pub use settings::Settings;
pub use source::{ConfigSource, Environment};
pub use value::SettingValue;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{SettingsError, SettingsResult};
    pub use crate::resolver::{ConfigResolver, FieldKind};
    pub use crate::settings::Settings;
    pub use crate::source::{ConfigSource, Environment};
    pub use crate::value::SettingValue;
}

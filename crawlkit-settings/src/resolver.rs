//! Layered resolution of a single field across ordered sources.
//!
//! A field is resolved by probing `(source, key)` pairs in order. The first
//! probe that yields a *truthy* value wins; if none does, the default is
//! used. Empty strings and zero count as "no value", so a field can never
//! resolve to `""` or `0`.
//!
//! ```rust
//! use crawlkit_settings::{ConfigResolver, Environment, FieldKind, Settings};
//!
//! let settings = Settings::new().set("MONGO_HOST", "db1");
//! let env = Environment::new();
//!
//! let host = ConfigResolver::new("host", FieldKind::Text)
//!     .probe(&settings, "HTTPCACHE_MONGO_HOST")
//!     .probe(&settings, "MONGO_HOST")
//!     .probe(&env, "MONGO_HOST")
//!     .default_value("localhost")
//!     .require()
//!     .unwrap();
//!
//! assert_eq!(host.to_string(), "db1");
//! ```

use tracing::{debug, trace};

use crate::error::{SettingsError, SettingsResult};
use crate::source::ConfigSource;
use crate::value::SettingValue;

/// How probed values are interpreted before the truthiness test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Values are rendered as strings.
    #[default]
    Text,
    /// Values are parsed as integers; `0` counts as unset.
    Integer,
}

/// One `(source, key)` pair to probe.
#[derive(Clone, Copy)]
pub struct Probe<'a> {
    /// Source to look in.
    pub source: &'a dyn ConfigSource,
    /// Key to look up in that source.
    pub key: &'a str,
}

impl<'a> Probe<'a> {
    /// Create a probe.
    pub fn new(source: &'a dyn ConfigSource, key: &'a str) -> Self {
        Self { source, key }
    }
}

impl std::fmt::Debug for Probe<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Probe")
            .field("source", &self.source.name())
            .field("key", &self.key)
            .finish()
    }
}

/// Resolve a field from ordered probes with an optional default.
///
/// Returns `Ok(None)` when neither a probe nor the default yields a value.
/// Fails only when a present value cannot be read as `kind`.
pub fn resolve(
    field: &str,
    probes: &[Probe<'_>],
    kind: FieldKind,
    default: Option<&SettingValue>,
) -> SettingsResult<Option<SettingValue>> {
    for probe in probes {
        let Some(raw) = probe.source.lookup(probe.key) else {
            continue;
        };
        if let Some(value) = coerce(kind, probe.key, &raw)? {
            trace!(
                field = %field,
                source = %probe.source.name(),
                key = %probe.key,
                "Resolved field from source"
            );
            return Ok(Some(value));
        }
    }

    match default {
        Some(raw) => {
            let value = coerce(kind, field, raw)?;
            if value.is_some() {
                debug!(field = %field, "Falling back to default value");
            }
            Ok(value)
        }
        None => Ok(None),
    }
}

fn coerce(kind: FieldKind, key: &str, raw: &SettingValue) -> SettingsResult<Option<SettingValue>> {
    match kind {
        FieldKind::Text => Ok(raw
            .is_truthy()
            .then(|| SettingValue::Str(raw.to_string()))),
        FieldKind::Integer => Ok(raw
            .as_int(key)?
            .filter(|i| *i != 0)
            .map(SettingValue::Int)),
    }
}

/// Builder-style resolver for one field.
#[derive(Debug)]
pub struct ConfigResolver<'a> {
    field: &'a str,
    kind: FieldKind,
    probes: Vec<Probe<'a>>,
    default: Option<SettingValue>,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver for a named field.
    pub fn new(field: &'a str, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            probes: Vec::new(),
            default: None,
        }
    }

    /// Append a probe. Probes are tried in the order they are added.
    pub fn probe(mut self, source: &'a dyn ConfigSource, key: &'a str) -> Self {
        self.probes.push(Probe::new(source, key));
        self
    }

    /// Set the fallback used when no probe yields a value.
    pub fn default_value(mut self, value: impl Into<SettingValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the fallback from an optional value.
    pub fn default_opt(mut self, value: Option<SettingValue>) -> Self {
        self.default = value;
        self
    }

    /// Resolve to an optional value.
    pub fn resolve(&self) -> SettingsResult<Option<SettingValue>> {
        resolve(self.field, &self.probes, self.kind, self.default.as_ref())
    }

    /// Resolve, failing when nothing yields a value.
    pub fn require(&self) -> SettingsResult<SettingValue> {
        self.resolve()?
            .ok_or_else(|| SettingsError::missing(self.field))
    }

    /// Resolve to an optional string.
    pub fn resolve_string(&self) -> SettingsResult<Option<String>> {
        Ok(self.resolve()?.map(|v| v.to_string()))
    }
}

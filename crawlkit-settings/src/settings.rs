//! Crawler settings map and settings file loading.

use std::path::Path;

use indexmap::IndexMap;
use regex_lite::{Captures, Regex};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};
use crate::source::ConfigSource;
use crate::value::SettingValue;

/// Insertion-ordered crawler settings.
///
/// Settings are read-only to everything in this workspace; they are built
/// once by the embedding application and passed around by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: IndexMap<String, SettingValue>,
}

impl Settings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a setting, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a raw setting value.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Get a setting rendered as a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    /// Get a setting as an integer.
    ///
    /// Returns `Ok(None)` when the key is absent or blank.
    pub fn get_int(&self, key: &str) -> SettingsResult<Option<i64>> {
        match self.get(key) {
            Some(value) => value.as_int(key),
            None => Ok(None),
        }
    }

    /// Get a setting as a list of strings.
    ///
    /// A missing or falsy key reads as an empty list and any other scalar
    /// as a one-element list. Strings are never split, since values such as
    /// user agents routinely contain commas.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };

        match value.as_list() {
            Some(items) => items.to_vec(),
            None if value.is_truthy() => vec![value.to_string()],
            None => Vec::new(),
        }
    }

    /// Iterate over settings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no settings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load settings from a TOML file.
    ///
    /// `${VAR}` placeholders are expanded from `env` before parsing.
    pub fn from_file(path: impl AsRef<Path>, env: &dyn ConfigSource) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings = Self::from_toml_str(&content, env)?;
        debug!(path = %path.display(), count = settings.len(), "Loaded settings file");
        Ok(settings)
    }

    /// Parse settings from a flat TOML table.
    ///
    /// `${VAR}` placeholders are expanded from `env` before parsing;
    /// placeholders naming unknown variables are left untouched.
    pub fn from_toml_str(content: &str, env: &dyn ConfigSource) -> SettingsResult<Self> {
        let expanded = expand_env_vars(content, env);
        let values: IndexMap<String, SettingValue> = toml::from_str(&expanded)?;
        Ok(Self { values })
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for Settings {
    fn name(&self) -> &str {
        "settings"
    }

    fn lookup(&self, key: &str) -> Option<SettingValue> {
        self.get(key).cloned()
    }
}

/// Expand `${VAR_NAME}` placeholders from a source.
fn expand_env_vars(content: &str, env: &dyn ConfigSource) -> String {
    static PLACEHOLDER: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
    });

    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| match env.lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Environment;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_settings_accessors() {
        let settings = Settings::new()
            .set("BOT_NAME", "crawler")
            .set("MONGO_PORT", "2000")
            .set("RETRY_TIMES", 3);

        assert_eq!(settings.get_str("BOT_NAME"), Some("crawler".to_string()));
        assert_eq!(settings.get_int("MONGO_PORT").unwrap(), Some(2000));
        assert_eq!(settings.get_int("RETRY_TIMES").unwrap(), Some(3));
        assert_eq!(settings.get_int("MISSING").unwrap(), None);
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn test_get_list() {
        let settings = Settings::new()
            .set("AGENTS", vec!["a", "b"])
            .set("SINGLE", "Mozilla/5.0 (KHTML, like Gecko)")
            .set("EMPTY", "")
            .set("NO_AGENTS", Vec::<String>::new())
            .set("COUNT", 5);

        assert_eq!(settings.get_list("AGENTS"), vec!["a", "b"]);
        assert_eq!(settings.get_list("SINGLE"), vec!["Mozilla/5.0 (KHTML, like Gecko)"]);
        assert!(settings.get_list("EMPTY").is_empty());
        assert!(settings.get_list("MISSING").is_empty());
        assert!(settings.get_list("NO_AGENTS").is_empty());
        assert_eq!(settings.get_list("COUNT"), vec!["5"]);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let settings = Settings::new().set("Z", 1).set("A", 2);
        let keys: Vec<_> = settings.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Z", "A"]);
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            BOT_NAME = "crawler"
            MONGO_PORT = 27018
            HTTPCACHE_ENABLED = true
            USER_AGENT_LIST = ["agent-a", "agent-b"]
        "#;

        let settings = Settings::from_toml_str(toml, &Environment::new()).unwrap();
        assert_eq!(settings.get("BOT_NAME"), Some(&SettingValue::from("crawler")));
        assert_eq!(settings.get("MONGO_PORT"), Some(&SettingValue::Int(27018)));
        assert_eq!(settings.get("HTTPCACHE_ENABLED"), Some(&SettingValue::Bool(true)));
        assert_eq!(settings.get_list("USER_AGENT_LIST"), vec!["agent-a", "agent-b"]);
    }

    #[test]
    fn test_from_toml_str_expands_placeholders() {
        let env = Environment::new().set("DB_HOST", "db1.internal");
        let toml = r#"
            MONGO_HOST = "${DB_HOST}"
            MONGO_DATABASE = "${UNKNOWN}"
        "#;

        let settings = Settings::from_toml_str(toml, &env).unwrap();
        assert_eq!(settings.get_str("MONGO_HOST"), Some("db1.internal".to_string()));
        assert_eq!(settings.get_str("MONGO_DATABASE"), Some("${UNKNOWN}".to_string()));
    }

    #[test]
    fn test_from_toml_str_rejects_nested_tables() {
        let toml = r#"
            [mongo]
            host = "db1"
        "#;

        let err = Settings::from_toml_str(toml, &Environment::new()).unwrap_err();
        assert!(matches!(err, SettingsError::Toml { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BOT_NAME = \"crawler\"").unwrap();

        let settings = Settings::from_file(file.path(), &Environment::new()).unwrap();
        assert_eq!(settings.get_str("BOT_NAME"), Some("crawler".to_string()));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Settings::from_file("/nonexistent/settings.toml", &Environment::new())
            .unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}

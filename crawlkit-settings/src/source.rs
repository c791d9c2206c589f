//! Key-value sources that can be probed during resolution.

use indexmap::IndexMap;

use crate::value::SettingValue;

/// A read-only source of setting values.
pub trait ConfigSource: Send + Sync {
    /// Human-readable name of the source, used in logs.
    fn name(&self) -> &str;

    /// Look up a value by key.
    fn lookup(&self, key: &str) -> Option<SettingValue>;
}

/// Snapshot of environment variables.
///
/// Resolution never reads the process environment directly; callers take a
/// snapshot with [`Environment::from_process`] or build one by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: IndexMap<String, String>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Get a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for Environment {
    fn name(&self) -> &str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Option<SettingValue> {
        self.get(key).map(SettingValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_lookup() {
        let env = Environment::new().set("MONGO_PORT", "2000");
        assert_eq!(env.lookup("MONGO_PORT"), Some(SettingValue::from("2000")));
        assert_eq!(env.lookup("MONGO_HOST"), None);
        assert_eq!(env.name(), "environment");
    }

    #[test]
    fn test_environment_from_iter_keeps_order() {
        let env: Environment = vec![("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.vars.keys().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_environment_from_process() {
        // PATH is present on every platform the tests run on.
        let env = Environment::from_process();
        assert!(!env.is_empty());
    }
}

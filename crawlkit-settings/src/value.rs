//! Setting values and their truthiness rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// A single setting value.
///
/// Values are loosely typed, the way crawler settings usually are: the same
/// key may hold `"27017"` in one deployment and `27017` in another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
    /// List of strings.
    List(Vec<String>),
}

impl SettingValue {
    /// Whether this value counts as "set".
    ///
    /// Empty strings, zero, `false` and empty lists are all treated as
    /// unset. A deliberately configured `0` or `""` is therefore
    /// indistinguishable from a missing value.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Read the value as an integer.
    ///
    /// Strings are trimmed and parsed; a blank string reads as `None`.
    /// Floats are truncated and booleans map to `0`/`1`. `key` is only used
    /// for the error message.
    pub fn as_int(&self, key: &str) -> SettingsResult<Option<i64>> {
        match self {
            Self::Bool(b) => Ok(Some(i64::from(*b))),
            Self::Int(i) => Ok(Some(*i)),
            Self::Float(f) => Ok(Some(f.trunc() as i64)),
            Self::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<i64>().map(Some).map_err(|_| {
                    SettingsError::invalid_value(key, format!("expected an integer, got `{}`", s))
                })
            }
            Self::List(_) => Err(SettingsError::invalid_value(
                key,
                "expected an integer, got a list",
            )),
        }
    }

    /// Borrow the inner list, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for SettingValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u16> for SettingValue {
    fn from(i: u16) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for SettingValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!SettingValue::from("").is_truthy());
        assert!(!SettingValue::from(0).is_truthy());
        assert!(!SettingValue::from(0.0).is_truthy());
        assert!(!SettingValue::from(false).is_truthy());
        assert!(!SettingValue::List(vec![]).is_truthy());

        assert!(SettingValue::from("0").is_truthy());
        assert!(SettingValue::from(27017).is_truthy());
        assert!(SettingValue::from(true).is_truthy());
        assert!(SettingValue::from(vec!["a"]).is_truthy());
    }

    #[test]
    fn test_as_int() {
        assert_eq!(SettingValue::from(" 2000 ").as_int("k").unwrap(), Some(2000));
        assert_eq!(SettingValue::from(42).as_int("k").unwrap(), Some(42));
        assert_eq!(SettingValue::from(3.9).as_int("k").unwrap(), Some(3));
        assert_eq!(SettingValue::from(true).as_int("k").unwrap(), Some(1));
        assert_eq!(SettingValue::from("  ").as_int("k").unwrap(), None);
    }

    #[test]
    fn test_as_int_invalid() {
        let err = SettingValue::from("abc").as_int("MONGO_PORT").unwrap_err();
        assert!(err.is_invalid_value());
        assert!(err.to_string().contains("MONGO_PORT"));

        assert!(SettingValue::from(vec!["1"]).as_int("k").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SettingValue::from("db1").to_string(), "db1");
        assert_eq!(SettingValue::from(27017).to_string(), "27017");
        assert_eq!(SettingValue::from(vec!["a", "b"]).to_string(), "a,b");
    }

    #[test]
    fn test_deserialize_untagged() {
        #[derive(Deserialize)]
        struct Wrapper {
            value: SettingValue,
        }

        let parsed: Wrapper = toml::from_str("value = 27017").unwrap();
        assert_eq!(parsed.value, SettingValue::Int(27017));

        let parsed: Wrapper = toml::from_str("value = \"db1\"").unwrap();
        assert_eq!(parsed.value, SettingValue::from("db1"));

        let parsed: Wrapper = toml::from_str("value = [\"a\", \"b\"]").unwrap();
        assert_eq!(parsed.value, SettingValue::from(vec!["a", "b"]));
    }
}

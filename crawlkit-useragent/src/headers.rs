//! Header collections that a user agent can be injected into.

use std::collections::{BTreeMap, HashMap};

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{UserAgentError, UserAgentResult};

/// A mutable collection of request headers.
///
/// Header names are compared case-insensitively.
pub trait HeaderCollection {
    /// Whether a header with this name is present.
    fn contains_header(&self, name: &str) -> bool;

    /// Insert a header, replacing any previous value.
    fn insert_header(&mut self, name: &str, value: &str) -> UserAgentResult<()>;
}

impl HeaderCollection for HashMap<String, String> {
    fn contains_header(&self, name: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    fn insert_header(&mut self, name: &str, value: &str) -> UserAgentResult<()> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl HeaderCollection for BTreeMap<String, String> {
    fn contains_header(&self, name: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    fn insert_header(&mut self, name: &str, value: &str) -> UserAgentResult<()> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl HeaderCollection for HeaderMap {
    fn contains_header(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn insert_header(&mut self, name: &str, value: &str) -> UserAgentResult<()> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| UserAgentError::invalid_header_value(name, value))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| UserAgentError::invalid_header_value(name, value))?;
        self.insert(header_name, header_value);
        Ok(())
    }
}

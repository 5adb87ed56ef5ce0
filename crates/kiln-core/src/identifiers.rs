//! Discriminator keys
//!
//! A discriminator is the external name a configuration loader or CLI uses
//! to pick a factory or family. Keys are case-sensitive and compared
//! exactly; no normalization happens here.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key selecting one registered factory or family
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discriminator(String);

impl Discriminator {
    /// Create a discriminator from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Discriminator {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Discriminator {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&Discriminator> for Discriminator {
    fn from(key: &Discriminator) -> Self {
        key.clone()
    }
}

impl Borrow<str> for Discriminator {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Discriminator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_lookup_by_str() {
        let mut table = BTreeMap::new();
        table.insert(Discriminator::from("plus"), 1);
        assert_eq!(table.get("plus"), Some(&1));
        assert_eq!(table.get("Plus"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let key: Discriminator = toml::Value::String("rdb".into())
            .try_into()
            .unwrap();
        assert_eq!(key.as_str(), "rdb");
        assert_eq!(key.to_string(), "rdb");
    }
}

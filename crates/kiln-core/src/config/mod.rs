//! Startup configuration
//!
//! The configuration only names discriminators. Turning a name into a
//! factory or family is the registries' job, so a typo surfaces there as
//! `UnknownVariant` or `UnsupportedFamily`.

mod validation;

pub use validation::{ConfigValidator, ValidationError, ValidationResult};

use crate::errors::{KilnError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "KILN_";

/// Upper bound for `pool.max_idle`
pub const MAX_POOL_IDLE: u64 = 1024;

/// Complete startup configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KilnConfig {
    /// Capability registry section
    pub registry: RegistryConfig,
    /// Family registry section
    pub family: FamilyConfig,
    /// Payment routing section
    pub payment: PaymentConfig,
    /// Pooling section
    pub pool: PoolConfig,
}

/// Operators registered at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Operator discriminators, in registration order
    pub operators: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            operators: vec!["plus".into(), "minus".into(), "multiply".into()],
        }
    }
}

/// Family selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    /// Family discriminator
    pub selected: String,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            selected: "rdb".into(),
        }
    }
}

/// Payment routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Which wrapped backend answers payment calls
    pub route: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            route: "cents".into(),
        }
    }
}

/// Pooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Idle products kept for reuse
    pub max_idle: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_idle: 8 }
    }
}

impl KilnConfig {
    /// Parse a TOML document; missing sections take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| KilnError::config(format!("Invalid TOML: {e}")))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KilnError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a file when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Merge with process environment variables
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Merge `KILN_*` overrides from the given variables
    ///
    /// Recognized keys: `KILN_OPERATORS` (comma-separated), `KILN_FAMILY`,
    /// `KILN_PAYMENT_ROUTE`, `KILN_POOL_MAX_IDLE`. Other keys are ignored.
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref().trim();
            match name {
                "OPERATORS" => {
                    self.registry.operators = value
                        .split(',')
                        .map(str::trim)
                        .filter(|op| !op.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "FAMILY" => self.family.selected = value.to_string(),
                "PAYMENT_ROUTE" => self.payment.route = value.to_string(),
                "POOL_MAX_IDLE" => {
                    self.pool.max_idle = value.parse().map_err(|_| {
                        KilnError::config(format!(
                            "{ENV_PREFIX}POOL_MAX_IDLE is not a count: '{value}'"
                        ))
                    })?;
                }
                _ => continue,
            }
            tracing::debug!(key = name, "applied environment override");
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut validator = ConfigValidator::new();

        let mut registry = validator.for_field("registry");
        registry.custom(
            "operators",
            &self.registry.operators,
            |ops| !ops.is_empty(),
            "at least one operator must be registered",
        );
        registry.custom(
            "operators",
            &self.registry.operators,
            |ops| ops.iter().collect::<BTreeSet<_>>().len() == ops.len(),
            "operators must not repeat",
        );
        validator.merge(registry);

        validator
            .non_empty("family.selected", &self.family.selected)
            .non_empty("payment.route", &self.payment.route)
            .range("pool.max_idle", self.pool.max_idle as u64, 1, MAX_POOL_IDLE);

        validator.result().map_err(KilnError::from)
    }
}

//! Unified error system for Kiln
//!
//! Every failure carries enough context (which discriminator, which step,
//! which sub-capability) for the caller to diagnose it without looking
//! inside the composition layer. Nothing here is retried.

use crate::contracts::{Backend, RecordRole, Step};
use crate::identifiers::Discriminator;

/// Unified error type for all Kiln operations
#[derive(Debug, thiserror::Error)]
pub enum KilnError {
    /// No factory is registered under the discriminator
    #[error("Unknown variant '{discriminator}'")]
    UnknownVariant {
        /// The key that was looked up
        discriminator: Discriminator,
    },

    /// No family is registered under the discriminator
    #[error("Unsupported family '{discriminator}'")]
    UnsupportedFamily {
        /// The key that was selected
        discriminator: Discriminator,
    },

    /// The same discriminator was registered twice
    #[error("Discriminator '{discriminator}' is already registered")]
    DuplicateRegistration {
        /// The conflicting key
        discriminator: Discriminator,
    },

    /// A result was requested before every step was applied
    #[error("Construction incomplete: {completed} of {required} steps applied")]
    IncompleteConstruction {
        /// Steps applied so far
        completed: usize,
        /// Steps in the full sequence
        required: usize,
    },

    /// A step was applied out of the fixed sequence
    #[error("Step {actual} applied out of order; expected {}", describe_expected(.expected))]
    OutOfOrderStep {
        /// The step the sequence required next, `None` once complete
        expected: Option<Step>,
        /// The step that was applied
        actual: Step,
    },

    /// A family produced a role backed by a different technology
    #[error("Family '{family}' produced a {role} DAO backed by '{actual}'")]
    FamilyMismatch {
        /// Backend the family declares
        family: Backend,
        /// Role that disagreed
        role: RecordRole,
        /// Backend the role reported
        actual: Backend,
    },

    /// A façade's delegated call failed
    #[error("Sub-capability '{capability}' failed")]
    SubCapabilityFailure {
        /// Name of the failed sub-capability
        capability: &'static str,
        /// Underlying failure
        #[source]
        source: Box<KilnError>,
    },

    /// A value could not be translated between contracts
    #[error("Cannot convert {source_contract} to {target_contract}: {reason}")]
    ConversionFailure {
        /// Contract the value came from
        source_contract: String,
        /// Contract the value was headed to
        target_contract: String,
        /// Why the translation is impossible
        reason: String,
    },

    /// A wrapped capability reported its own error
    #[error("Capability '{capability}' reported a fault")]
    CapabilityFault {
        /// Name of the wrapped capability
        capability: &'static str,
        /// The capability's own error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A product refused its input
    #[error("{capability} rejected input: {reason}")]
    Rejected {
        /// Product that refused
        capability: &'static str,
        /// Why it refused
        reason: String,
    },

    /// A factory could not finish initializing its product
    #[error("Initialization of '{variant}' failed: {reason}")]
    InitializationFailed {
        /// Variant being created
        variant: String,
        /// What went wrong
        reason: String,
    },

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },
}

fn describe_expected(expected: &Option<Step>) -> String {
    match expected {
        Some(step) => step.to_string(),
        None => "no further steps".to_string(),
    }
}

impl KilnError {
    /// Create an unknown variant error
    pub fn unknown_variant(discriminator: impl Into<Discriminator>) -> Self {
        Self::UnknownVariant {
            discriminator: discriminator.into(),
        }
    }

    /// Create an unsupported family error
    pub fn unsupported_family(discriminator: impl Into<Discriminator>) -> Self {
        Self::UnsupportedFamily {
            discriminator: discriminator.into(),
        }
    }

    /// Wrap a failure with the name of the sub-capability that produced it
    pub fn sub_capability(capability: &'static str, source: KilnError) -> Self {
        Self::SubCapabilityFailure {
            capability,
            source: Box::new(source),
        }
    }

    /// Create a conversion failure
    pub fn conversion(
        source_contract: impl Into<String>,
        target_contract: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ConversionFailure {
            source_contract: source_contract.into(),
            target_contract: target_contract.into(),
            reason: reason.into(),
        }
    }

    /// Box a wrapped capability's own error
    pub fn capability_fault(
        capability: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CapabilityFault {
            capability,
            source: Box::new(source),
        }
    }

    /// Create a rejection error
    pub fn rejected(capability: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            capability,
            reason: reason.into(),
        }
    }

    /// Create an initialization failure
    pub fn initialization(variant: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InitializationFailed {
            variant: variant.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the failed sub-capability, if this is a façade failure
    pub fn failed_sub_capability(&self) -> Option<&'static str> {
        match self {
            Self::SubCapabilityFailure { capability, .. } => Some(*capability),
            _ => None,
        }
    }
}

/// Standard Result type for Kiln operations
pub type Result<T> = std::result::Result<T, KilnError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_variant_format() {
        let err = KilnError::unknown_variant("multiply");
        assert_eq!(err.to_string(), "Unknown variant 'multiply'");
    }

    #[test]
    fn test_out_of_order_format() {
        let err = KilnError::OutOfOrderStep {
            expected: Some(Step::Foundation),
            actual: Step::Finish,
        };
        assert_eq!(
            err.to_string(),
            "Step finish applied out of order; expected foundation"
        );

        let err = KilnError::OutOfOrderStep {
            expected: None,
            actual: Step::Frame,
        };
        assert_eq!(
            err.to_string(),
            "Step frame applied out of order; expected no further steps"
        );
    }

    #[test]
    fn test_sub_capability_keeps_source() {
        let err = KilnError::sub_capability(
            "payment",
            KilnError::rejected("cents-gateway", "declined"),
        );
        assert_eq!(err.failed_sub_capability(), Some("payment"));
        assert_eq!(err.to_string(), "Sub-capability 'payment' failed");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("cents-gateway rejected input: declined")
        );
    }

    #[test]
    fn test_conversion_format() {
        let err = KilnError::conversion("amount", "minor units (10^2)", "too precise");
        assert_eq!(
            err.to_string(),
            "Cannot convert amount to minor units (10^2): too precise"
        );
        assert_eq!(err.failed_sub_capability(), None);
    }
}

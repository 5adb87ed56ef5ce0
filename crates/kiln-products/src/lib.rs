//! # Kiln Products - Concrete Variants
//!
//! **Purpose**: Provide the concrete variants behind the kiln-core contracts.
//!
//! Calling code is not expected to name these types except when registering
//! them with a registry at startup.
//!
//! - Operation variants and their direct-instance factories
//! - `rdb` and `xml` storage technologies
//! - Legacy payment backends with their own, incompatible interfaces
//! - Assembler variants with textual, numeric and structured outputs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Assembler variants
pub mod assemblers;

/// Legacy payment backends
pub mod gateways;

/// Operation variants and factories
pub mod operations;

/// Storage technologies
pub mod storage;

pub use assemblers::{DigitAssembler, Manifest, ManifestAssembler, ManifestEntry, SumAssembler};
pub use gateways::{
    CentsGateway, GatewayFault, LedgerFault, MilliLedger, SandboxCentsGateway, SandboxMilliLedger,
};
pub use operations::{
    Minus, MinusFactory, Multiply, MultiplyFactory, Plus, PlusFactory, PresetOperandsFactory,
};
pub use storage::{RdbTechnology, XmlTechnology, RDB, XML};

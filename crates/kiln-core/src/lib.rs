//! # Kiln Core - Foundation
//!
//! **Purpose**: Define the contracts calling code depends on when it obtains
//! objects without naming their concrete type.
//!
//! # Architecture Constraints
//!
//! - YES Product contracts (operations, record DAOs, assemblers, payments)
//! - YES The factory contract and the family contract
//! - YES The step-order guard that is the only way to drive an assembler
//! - YES Unified error type and exact money values
//! - YES Configuration that names discriminators
//! - NO concrete variants (that's kiln-products)
//! - NO registries, adapters or façades (that's kiln-composition)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Product contracts and construction contracts
pub mod contracts;

/// Unified error handling
pub mod errors;

/// Discriminator keys used by registries
pub mod identifiers;

/// Exact decimal amounts and minor-unit scaling
pub mod money;

/// Startup configuration
pub mod config;

/// Guarded step sequence and its director
pub mod construction;

pub use config::{FamilyConfig, KilnConfig, PaymentConfig, PoolConfig, RegistryConfig};
pub use contracts::{
    Assembler, Backend, DaoFamily, DetailRecord, DetailRecordDao, Factory, FnFactory, MainRecord,
    MainRecordDao, Operands, Operation, PaymentProcessor, PaymentReceipt, RecordRole, SaveReceipt,
    Step, StepPermit, StorageTechnology,
};
pub use construction::{Assembly, AssemblyState, Director};
pub use errors::{KilnError, Result};
pub use identifiers::Discriminator;
pub use money::Amount;

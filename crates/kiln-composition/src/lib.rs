//! # Kiln Composition
//!
//! **Purpose**: Let calling code obtain conforming objects without naming
//! their concrete type.
//!
//! - [`registry`]: discriminator → factory (factory method, lookup form)
//! - [`family`]: discriminator → family of technology-consistent DAOs
//! - [`Director`]: drives the fixed step sequence (re-exported from kiln-core)
//! - [`adapters`]: payment backends re-exposed as `PaymentProcessor`
//! - [`facade`]: one coarse operation across several sub-capabilities
//! - [`pool`]: optional reuse pool in front of a factory
//! - [`catalog`]: startup tables built from configuration
//!
//! Registries are immutable once built and safe to share across threads.
//! An [`Assembly`] belongs to exactly one construction episode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod table;

pub mod adapters;
pub mod catalog;
pub mod facade;
pub mod family;
pub mod pool;
pub mod registry;

pub use adapters::{
    CentsGatewayAdapter, JsonPaymentEndpoint, MilliLedgerAdapter, PaymentRoute,
    RoutingPaymentAdapter,
};
pub use kiln_core::{Assembly, AssemblyState, Director};
pub use facade::{Order, OrderConfirmation, OrderFacade};
pub use family::{DaoSet, FamilyRegistry, FamilyRegistryBuilder, TechnologyFamily};
pub use pool::{PooledFactory, Reusable};
pub use registry::{FactoryRegistry, FactoryRegistryBuilder};

//! Payment adapters
//!
//! Each adapter wraps a payment backend that does not speak
//! [`PaymentProcessor`](kiln_core::PaymentProcessor) and re-exposes it
//! through that contract. Amount conversion is exact; a backend's own
//! failures come back as `CapabilityFault` naming the backend, with the
//! original error kept as the source.

mod cents;
mod json;
mod ledger;
mod routing;

pub use cents::CentsGatewayAdapter;
pub use json::JsonPaymentEndpoint;
pub use ledger::MilliLedgerAdapter;
pub use routing::{PaymentRoute, RoutingPaymentAdapter};

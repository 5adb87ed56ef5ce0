//! Command implementations
//!
//! Each command returns the text to print.

pub mod assemble;
pub mod calc;
pub mod checkout;
pub mod pay;
pub mod persist;

use kiln_products::{SandboxCentsGateway, SandboxMilliLedger};

/// Sandbox payment backends shared by `pay` and `checkout`
#[derive(Debug, Default)]
pub struct Backends {
    /// Cents gateway behind the `cents` route
    pub gateway: SandboxCentsGateway,
    /// Ledger behind the `millis` route
    pub ledger: SandboxMilliLedger,
}

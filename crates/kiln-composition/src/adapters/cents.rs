//! Cents gateway adapter

use kiln_core::{Amount, KilnError, PaymentProcessor, PaymentReceipt, Result};
use kiln_products::CentsGateway;

/// Adapter exposing a [`CentsGateway`] as a `PaymentProcessor`
///
/// Borrows the gateway; closing or releasing it stays with the owner.
#[derive(Clone, Copy)]
pub struct CentsGatewayAdapter<'a> {
    gateway: &'a dyn CentsGateway,
}

impl<'a> CentsGatewayAdapter<'a> {
    /// Gateway name written into receipts
    pub const GATEWAY: &'static str = "cents-gateway";

    /// Decimal exponent of a cent
    pub const EXPONENT: u32 = 2;

    /// Wrap `gateway`
    pub fn new(gateway: &'a dyn CentsGateway) -> Self {
        Self { gateway }
    }
}

impl std::fmt::Debug for CentsGatewayAdapter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentsGatewayAdapter")
            .field("exponent", &Self::EXPONENT)
            .finish()
    }
}

impl PaymentProcessor for CentsGatewayAdapter<'_> {
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt> {
        let cents = amount.to_minor_units(Self::EXPONENT)?;
        let reference = self.gateway.submit_cents(cents).map_err(|fault| {
            tracing::warn!(%amount, cents, error = %fault, "cents gateway refused charge");
            KilnError::capability_fault(Self::GATEWAY, fault)
        })?;
        tracing::debug!(%amount, cents, %reference, "charged through cents gateway");
        Ok(PaymentReceipt {
            reference,
            gateway: Self::GATEWAY,
            minor_units: cents,
            exponent: Self::EXPONENT,
        })
    }
}

//! Milli-unit ledger adapter

use kiln_core::{Amount, KilnError, PaymentProcessor, PaymentReceipt, Result};
use kiln_products::MilliLedger;

const DEFAULT_MEMO: &str = "kiln payment";

/// Adapter exposing a [`MilliLedger`] as a `PaymentProcessor`
///
/// Every post carries the adapter's memo. Receipts reference the ledger
/// entry number as `entry-<n>`.
#[derive(Clone)]
pub struct MilliLedgerAdapter<'a> {
    ledger: &'a dyn MilliLedger,
    memo: String,
}

impl<'a> MilliLedgerAdapter<'a> {
    /// Gateway name written into receipts
    pub const GATEWAY: &'static str = "milli-ledger";

    /// Decimal exponent of a milli-unit
    pub const EXPONENT: u32 = 3;

    /// Wrap `ledger`
    pub fn new(ledger: &'a dyn MilliLedger) -> Self {
        Self {
            ledger,
            memo: DEFAULT_MEMO.to_string(),
        }
    }

    /// Post with `memo` instead of the default
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}

impl std::fmt::Debug for MilliLedgerAdapter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MilliLedgerAdapter")
            .field("exponent", &Self::EXPONENT)
            .field("memo", &self.memo)
            .finish()
    }
}

impl PaymentProcessor for MilliLedgerAdapter<'_> {
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt> {
        let millis = amount.to_minor_units(Self::EXPONENT)?;
        let entry = self
            .ledger
            .post_millis(millis, &self.memo)
            .map_err(|fault| {
                tracing::warn!(%amount, millis, error = %fault, "ledger refused post");
                KilnError::capability_fault(Self::GATEWAY, fault)
            })?;
        tracing::debug!(%amount, millis, entry, "posted to ledger");
        Ok(PaymentReceipt {
            reference: format!("entry-{entry}"),
            gateway: Self::GATEWAY,
            minor_units: millis,
            exponent: Self::EXPONENT,
        })
    }
}

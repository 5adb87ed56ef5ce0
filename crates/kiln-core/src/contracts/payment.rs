//! Payment contract expected by calling code

use crate::errors::Result;
use crate::money::Amount;
use serde::Serialize;

/// Settled payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    /// Reference issued by the backend that settled the payment
    pub reference: String,
    /// Name of the backend that settled the payment
    pub gateway: &'static str,
    /// Amount actually submitted, in the backend's minor units
    pub minor_units: u64,
    /// Decimal exponent of the backend's minor unit
    pub exponent: u32,
}

/// Takes payments in major units
pub trait PaymentProcessor: Send + Sync {
    /// Charge the amount
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt>;
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for &P {
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt> {
        (**self).pay(amount)
    }
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for Box<P> {
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt> {
        (**self).pay(amount)
    }
}

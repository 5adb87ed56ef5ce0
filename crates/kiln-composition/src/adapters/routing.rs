//! Adapter over both payment backends

use super::{CentsGatewayAdapter, MilliLedgerAdapter};
use kiln_core::{Amount, KilnError, PaymentProcessor, PaymentReceipt, Result};
use std::fmt;
use std::str::FromStr;

/// Backend a payment is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentRoute {
    /// Cents gateway
    #[default]
    Cents,
    /// Milli-unit ledger
    Millis,
}

impl PaymentRoute {
    /// Every route, in display order
    pub const ALL: [PaymentRoute; 2] = [PaymentRoute::Cents, PaymentRoute::Millis];

    /// Route name as used in configuration
    pub const fn name(self) -> &'static str {
        match self {
            PaymentRoute::Cents => "cents",
            PaymentRoute::Millis => "millis",
        }
    }
}

impl fmt::Display for PaymentRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentRoute {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| KilnError::unknown_variant(s))
    }
}

/// One `PaymentProcessor` in front of both backends
///
/// [`PaymentProcessor::pay`] uses the route fixed at construction;
/// [`RoutingPaymentAdapter::pay_via`] picks one per call.
#[derive(Debug)]
pub struct RoutingPaymentAdapter<'a> {
    cents: CentsGatewayAdapter<'a>,
    millis: MilliLedgerAdapter<'a>,
    route: PaymentRoute,
}

impl<'a> RoutingPaymentAdapter<'a> {
    /// Combine both adapters, routing to `route` by default
    pub fn new(
        cents: CentsGatewayAdapter<'a>,
        millis: MilliLedgerAdapter<'a>,
        route: PaymentRoute,
    ) -> Self {
        Self {
            cents,
            millis,
            route,
        }
    }

    /// Default route
    pub fn route(&self) -> PaymentRoute {
        self.route
    }

    /// Charge through an explicit route
    pub fn pay_via(&self, route: PaymentRoute, amount: &Amount) -> Result<PaymentReceipt> {
        tracing::debug!(%route, %amount, "routing payment");
        match route {
            PaymentRoute::Cents => self.cents.pay(amount),
            PaymentRoute::Millis => self.millis.pay(amount),
        }
    }
}

impl PaymentProcessor for RoutingPaymentAdapter<'_> {
    fn pay(&self, amount: &Amount) -> Result<PaymentReceipt> {
        self.pay_via(self.route, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use kiln_products::{SandboxCentsGateway, SandboxMilliLedger};

    #[test]
    fn test_route_parsing() {
        assert_eq!("cents".parse::<PaymentRoute>().unwrap(), PaymentRoute::Cents);
        assert_eq!("millis".parse::<PaymentRoute>().unwrap(), PaymentRoute::Millis);
        assert_matches!(
            "wire".parse::<PaymentRoute>(),
            Err(KilnError::UnknownVariant { .. })
        );
    }

    #[test]
    fn test_default_and_explicit_routes() {
        let gateway = SandboxCentsGateway::default();
        let ledger = SandboxMilliLedger::new();
        let adapter = RoutingPaymentAdapter::new(
            CentsGatewayAdapter::new(&gateway),
            MilliLedgerAdapter::new(&ledger),
            PaymentRoute::Millis,
        );

        let amount: Amount = "3.5".parse().unwrap();
        let receipt = adapter.pay(&amount).unwrap();
        assert_eq!(receipt.minor_units, 3_500);

        let receipt = adapter.pay_via(PaymentRoute::Cents, &amount).unwrap();
        assert_eq!(receipt.minor_units, 350);

        assert_eq!(gateway.accepted(), vec![350]);
        assert_eq!(ledger.posted().len(), 1);
    }

    #[test]
    fn test_fault_names_the_refusing_backend() {
        let gateway = SandboxCentsGateway::new(100);
        let ledger = SandboxMilliLedger::closed();
        let adapter = RoutingPaymentAdapter::new(
            CentsGatewayAdapter::new(&gateway),
            MilliLedgerAdapter::new(&ledger),
            PaymentRoute::Cents,
        );
        let amount = Amount::from_major(2);

        assert_matches!(
            adapter.pay(&amount),
            Err(KilnError::CapabilityFault { capability: "cents-gateway", .. })
        );
        assert_matches!(
            adapter.pay_via(PaymentRoute::Millis, &amount),
            Err(KilnError::CapabilityFault { capability: "milli-ledger", .. })
        );
    }
}

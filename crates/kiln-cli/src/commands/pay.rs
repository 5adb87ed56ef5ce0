//! `kiln pay`

use super::Backends;
use anyhow::Result;
use clap::Args;
use kiln_composition::catalog::Catalog;
use kiln_composition::{
    CentsGatewayAdapter, MilliLedgerAdapter, PaymentRoute, RoutingPaymentAdapter,
};
use kiln_core::{Amount, PaymentProcessor};

#[derive(Args, Debug)]
pub struct PayArgs {
    /// Payment route (cents, millis); defaults to the configured one
    #[arg(long)]
    pub route: Option<String>,
    /// Amount in major units, e.g. 12.34
    pub amount: String,
}

pub fn run(args: PayArgs, catalog: &Catalog) -> Result<String> {
    let backends = Backends::default();
    pay_with(&backends, args, catalog)
}

pub(crate) fn pay_with(backends: &Backends, args: PayArgs, catalog: &Catalog) -> Result<String> {
    let route: PaymentRoute = match args.route.as_deref() {
        Some(route) => route.parse()?,
        None => catalog.route,
    };
    let amount: Amount = args.amount.parse()?;
    let payments = RoutingPaymentAdapter::new(
        CentsGatewayAdapter::new(&backends.gateway),
        MilliLedgerAdapter::new(&backends.ledger),
        route,
    );
    let receipt = payments.pay(&amount)?;
    Ok(serde_json::to_string_pretty(&receipt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::KilnConfig;

    fn catalog() -> Catalog {
        Catalog::from_config(&KilnConfig::default()).unwrap()
    }

    #[test]
    fn test_configured_route() {
        let backends = Backends::default();
        let args = PayArgs {
            route: None,
            amount: "12.34".into(),
        };
        let receipt: serde_json::Value =
            serde_json::from_str(&pay_with(&backends, args, &catalog()).unwrap()).unwrap();
        assert_eq!(receipt["minor_units"], 1234);
        assert_eq!(backends.gateway.accepted(), vec![1234]);
    }

    #[test]
    fn test_explicit_route() {
        let backends = Backends::default();
        let args = PayArgs {
            route: Some("millis".into()),
            amount: "12.34".into(),
        };
        pay_with(&backends, args, &catalog()).unwrap();
        assert_eq!(backends.ledger.posted()[0].0, 12_340);
        assert!(backends.gateway.accepted().is_empty());
    }

    #[test]
    fn test_bad_input() {
        let args = PayArgs {
            route: Some("wire".into()),
            amount: "1".into(),
        };
        assert!(run(args, &catalog()).is_err());

        let args = PayArgs {
            route: None,
            amount: "1.2.3".into(),
        };
        let err = run(args, &catalog()).unwrap_err();
        assert!(err.to_string().starts_with("Cannot convert text to amount"));
    }
}

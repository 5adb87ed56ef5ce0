//! `kiln checkout`

use super::Backends;
use anyhow::{bail, Context, Result};
use clap::Args;
use kiln_composition::catalog::Catalog;
use kiln_composition::{
    CentsGatewayAdapter, MilliLedgerAdapter, Order, OrderFacade, RoutingPaymentAdapter,
};
use kiln_core::{Amount, MainRecord};

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Order id
    pub id: String,
    /// Customer name
    pub customer: String,
    /// Amount in major units
    pub amount: String,
    /// Line item as name:quantity; repeatable
    #[arg(long = "item", value_name = "NAME:QTY")]
    pub items: Vec<String>,
}

fn parse_item(text: &str) -> Result<(String, u32)> {
    let Some((name, quantity)) = text.rsplit_once(':') else {
        bail!("item '{text}' must look like name:quantity");
    };
    let quantity: u32 = quantity
        .parse()
        .with_context(|| format!("item '{text}' has an invalid quantity"))?;
    Ok((name.to_string(), quantity))
}

pub fn run(args: CheckoutArgs, catalog: &Catalog) -> Result<String> {
    let backends = Backends::default();
    checkout_with(&backends, args, catalog)
}

pub(crate) fn checkout_with(
    backends: &Backends,
    args: CheckoutArgs,
    catalog: &Catalog,
) -> Result<String> {
    let amount = args.amount.parse::<Amount>()?;
    let mut order = Order::new(MainRecord::new(args.id, args.customer), amount);
    for item in &args.items {
        let (name, quantity) = parse_item(item)?;
        order = order.with_item(name, quantity);
    }

    let daos = catalog.families.open(&catalog.family)?;
    let payments = RoutingPaymentAdapter::new(
        CentsGatewayAdapter::new(&backends.gateway),
        MilliLedgerAdapter::new(&backends.ledger),
        catalog.route,
    );
    let facade = OrderFacade::from_family(daos, payments);
    let confirmation = facade.place_order(&order)?;

    let mut lines = vec![format!("[{}] {}", confirmation.main.backend, confirmation.main.rendered)];
    lines.extend(
        confirmation
            .details
            .iter()
            .map(|detail| format!("[{}] {}", detail.backend, detail.rendered)),
    );
    lines.push(format!(
        "paid {} via {} ({})",
        order.amount, confirmation.payment.gateway, confirmation.payment.reference
    ));
    Ok(lines.join("\n"))
}

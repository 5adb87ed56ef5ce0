//! End-to-end scenarios across the composition mechanisms

use assert_matches::assert_matches;
use kiln_composition::catalog::{family_registry, operator_registry};
use kiln_composition::{
    CentsGatewayAdapter, Director, JsonPaymentEndpoint, MilliLedgerAdapter, Order, OrderFacade,
    PaymentRoute, RoutingPaymentAdapter,
};
use kiln_core::{Amount, DetailRecord, KilnError, MainRecord, PaymentProcessor, RecordRole};
use kiln_products::{
    DigitAssembler, ManifestAssembler, SandboxCentsGateway, SandboxMilliLedger, SumAssembler, RDB,
    XML,
};

#[test]
fn operator_registry_scenario() {
    let registry = operator_registry(&["plus", "minus"]).unwrap();

    let mut plus = registry.create("plus").unwrap();
    plus.set_operand_a(5.0);
    plus.set_operand_b(3.0);
    assert_eq!(plus.result(), 8.0);

    let mut minus = registry.create("minus").unwrap();
    minus.set_operand_a(5.0);
    minus.set_operand_b(3.0);
    assert_eq!(minus.result(), 2.0);

    assert_matches!(
        registry.create("multiply"),
        Err(KilnError::UnknownVariant { discriminator }) if discriminator.as_str() == "multiply"
    );
}

#[test]
fn family_scenario() {
    let families = family_registry().unwrap();
    for (key, backend) in [("rdb", RDB), ("xml", XML)] {
        let family = families.select(key).unwrap();
        let main = family.create_main_record_dao();
        let detail = family.create_detail_record_dao();

        let main_receipt = main.save(&MainRecord::new("o-7", "Grace")).unwrap();
        let detail_receipt = detail.save(&DetailRecord::new("o-7", 1, "gear", 3)).unwrap();

        assert_eq!(main_receipt.backend, backend);
        assert_eq!(main_receipt.role, RecordRole::Main);
        assert_eq!(detail_receipt.backend, backend);
        assert_eq!(detail_receipt.role, RecordRole::Detail);
    }
}

#[test]
fn xml_rendering_is_escaped() {
    let daos = family_registry().unwrap().open("xml").unwrap();
    let receipt = daos.main().save(&MainRecord::new("o-1", "Smith & <Sons>")).unwrap();
    assert!(receipt.rendered.contains("Smith &amp; &lt;Sons&gt;"));
}

#[test]
fn director_drives_every_variant() {
    let director = Director::new();
    assert_eq!(director.build(DigitAssembler::default()).unwrap(), "123");
    assert_eq!(director.build(SumAssembler::default()).unwrap(), 6);

    let manifest = director.build(ManifestAssembler::default()).unwrap();
    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(json["entries"][0]["step"], "foundation");
    assert_eq!(json["entries"][2]["ordinal"], 3);
}

#[test]
fn adapters_chain_behind_json() {
    let gateway = SandboxCentsGateway::default();
    let ledger = SandboxMilliLedger::new();
    let routing = RoutingPaymentAdapter::new(
        CentsGatewayAdapter::new(&gateway),
        MilliLedgerAdapter::new(&ledger),
        PaymentRoute::Millis,
    );
    let endpoint = JsonPaymentEndpoint::new(&routing);

    let response = endpoint.handle(r#"{"amount":"0.125"}"#).unwrap();
    let receipt: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(receipt["gateway"], "milli-ledger");
    assert_eq!(receipt["minor_units"], 125);
    assert_eq!(ledger.posted().len(), 1);
    assert!(gateway.accepted().is_empty());
}

#[test]
fn same_amount_on_both_routes() {
    let gateway = SandboxCentsGateway::default();
    let ledger = SandboxMilliLedger::new();
    let routing = RoutingPaymentAdapter::new(
        CentsGatewayAdapter::new(&gateway),
        MilliLedgerAdapter::new(&ledger),
        PaymentRoute::Cents,
    );
    let amount: Amount = "7.25".parse().unwrap();

    let cents = routing.pay(&amount).unwrap();
    let millis = routing.pay_via(PaymentRoute::Millis, &amount).unwrap();
    assert_eq!(cents.minor_units * 10, millis.minor_units);
}

#[test]
fn checkout_through_selected_family() {
    let gateway = SandboxCentsGateway::default();
    let daos = family_registry().unwrap().open("xml").unwrap();
    let facade = OrderFacade::from_family(daos, CentsGatewayAdapter::new(&gateway));

    let order = Order::new(MainRecord::new("o-42", "Lin"), "120.50".parse().unwrap())
        .with_item("hinge", 4)
        .with_item("screw", 16);
    let confirmation = facade.place_order(&order).unwrap();

    assert_eq!(confirmation.main.backend, XML);
    assert!(confirmation.details.iter().all(|d| d.backend == XML));
    assert_eq!(confirmation.payment.minor_units, 12_050);
}

#[test]
fn checkout_rejects_sub_cent_amount_after_saving() {
    let gateway = SandboxCentsGateway::default();
    let daos = family_registry().unwrap().open("rdb").unwrap();
    let facade = OrderFacade::from_family(daos, CentsGatewayAdapter::new(&gateway));
    let order = Order::new(MainRecord::new("o-43", "Lin"), "1.001".parse().unwrap());

    let err = facade.place_order(&order).unwrap_err();
    assert_eq!(err.failed_sub_capability(), Some("payment"));
    assert_matches!(
        err,
        KilnError::SubCapabilityFailure { source, .. }
            if matches!(*source, KilnError::ConversionFailure { .. })
    );
}

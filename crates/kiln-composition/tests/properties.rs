//! Property tests for the composition mechanisms

use kiln_composition::catalog::{family_registry, operator_registry};
use kiln_composition::{Assembly, CentsGatewayAdapter, Director, MilliLedgerAdapter};
use kiln_core::{Amount, Operands, PaymentProcessor};
use kiln_products::{DigitAssembler, SandboxCentsGateway, SandboxMilliLedger, SumAssembler};
use proptest::prelude::*;

fn operator_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("plus"), Just("minus"), Just("multiply")]
}

proptest! {
    #[test]
    fn created_products_match_their_discriminator(
        name in operator_name(),
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let registry = operator_registry(&["plus", "minus", "multiply"]).unwrap();
        let mut op = registry.create(name).unwrap();
        prop_assert_eq!(op.kind(), name);

        op.set_operand_a(a);
        op.set_operand_b(b);
        let expected = match name {
            "plus" => a + b,
            "minus" => a - b,
            _ => a * b,
        };
        prop_assert_eq!(op.result(), expected);
        prop_assert_eq!(op.operands(), &Operands::new(a, b));
    }

    #[test]
    fn family_roles_share_the_selected_backend(key in prop_oneof![Just("rdb"), Just("xml")]) {
        let family = family_registry().unwrap().select(key).unwrap();
        prop_assert_eq!(family.backend().name(), key);
        prop_assert_eq!(family.create_main_record_dao().backend(), family.backend());
        prop_assert_eq!(family.create_detail_record_dao().backend(), family.backend());
    }

    #[test]
    fn undriven_assembly_has_no_result(reads in 1usize..5) {
        let mut assembly = Assembly::new(DigitAssembler::default());
        for _ in 0..reads {
            prop_assert!(assembly.result().is_err());
        }
        Director::new().construct(&mut assembly).unwrap();
        prop_assert_eq!(assembly.result().unwrap(), "123");
    }

    #[test]
    fn result_is_idempotent(extra_reads in 1usize..5) {
        let mut assembly = Assembly::new(SumAssembler::default());
        Director::new().construct(&mut assembly).unwrap();
        for _ in 0..extra_reads {
            prop_assert_eq!(assembly.result().unwrap(), 6);
        }
    }

    #[test]
    fn payment_scaling_is_exact(whole in 0u64..1_000_000, cents in 0u64..100) {
        let gateway = SandboxCentsGateway::new(u64::MAX);
        let ledger = SandboxMilliLedger::new();
        let amount: Amount = format!("{whole}.{cents:02}").parse().unwrap();

        let charged = CentsGatewayAdapter::new(&gateway).pay(&amount);
        let posted = MilliLedgerAdapter::new(&ledger).pay(&amount).unwrap();

        let expected_cents = whole * 100 + cents;
        if expected_cents == 0 {
            prop_assert!(charged.is_err());
        } else {
            prop_assert_eq!(charged.unwrap().minor_units, expected_cents);
        }
        prop_assert_eq!(posted.minor_units, expected_cents * 10);
    }
}

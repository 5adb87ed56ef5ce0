//! Built registries shared across threads

use kiln_composition::catalog::{family_registry, operator_registry};
use std::sync::Arc;
use std::thread;

#[test]
fn operator_registry_serves_concurrent_creates() {
    let registry = Arc::new(operator_registry(&["plus", "minus", "multiply"]).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let name = ["plus", "minus", "multiply"][i % 3];
                (0..200u32)
                    .map(|n| {
                        let mut op = registry.create(name).unwrap();
                        op.set_operand_a(f64::from(n));
                        op.set_operand_b(2.0);
                        op.result()
                    })
                    .sum::<f64>()
            })
        })
        .collect();

    let totals: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // sum(0..200) = 19900
    assert_eq!(totals[0], 19_900.0 + 400.0);
    assert_eq!(totals[1], 19_900.0 - 400.0);
    assert_eq!(totals[2], 19_900.0 * 2.0);
}

#[test]
fn family_registry_serves_concurrent_selections() {
    let families = Arc::new(family_registry().unwrap());
    let handles: Vec<_> = ["rdb", "xml", "rdb", "xml"]
        .into_iter()
        .map(|key| {
            let families = Arc::clone(&families);
            thread::spawn(move || {
                for _ in 0..100 {
                    let daos = families.open(key).unwrap();
                    assert_eq!(daos.main().backend(), daos.detail().backend());
                    assert_eq!(daos.backend().name(), key);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

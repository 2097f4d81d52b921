mod helpers;

use std::collections::HashSet;

use cartwise::{CartKey, PlatformId, PlatformRanker};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, u32, Option<PlatformId>),
    Update(usize, Option<PlatformId>, u32),
    Remove(usize, Option<PlatformId>),
    Select(PlatformId),
    Clear,
}

fn arb_pin() -> impl Strategy<Value = Option<PlatformId>> {
    proptest::option::of(proptest::sample::select(vec![
        PlatformId::Blinkit,
        PlatformId::Zepto,
        PlatformId::JioMart,
    ]))
}

fn arb_op() -> impl Strategy<Value = Op> {
    let n = cartwise_mock::PRODUCT_IDS.len();
    prop_oneof![
        4 => (0..n, 0u32..4, arb_pin()).prop_map(|(i, q, p)| Op::Add(i, q, p)),
        3 => (0..n, arb_pin(), 0u32..4).prop_map(|(i, p, q)| Op::Update(i, p, q)),
        2 => (0..n, arb_pin()).prop_map(|(i, p)| Op::Remove(i, p)),
        1 => proptest::sample::select(cartwise_mock::platforms().into_iter().map(|p| p.id).collect::<Vec<_>>())
            .prop_map(Op::Select),
        1 => Just(Op::Clear),
    ]
}

fn key(i: usize, pinned: Option<PlatformId>) -> CartKey {
    CartKey {
        product: helpers::id(cartwise_mock::PRODUCT_IDS[i]),
        pinned,
    }
}

proptest! {
    #[test]
    fn store_invariants_hold_under_any_op_sequence(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut s = helpers::store();
        let rx = s.subscribe();

        for op in ops {
            match op {
                Op::Add(i, q, p) => {
                    let before = s.entry(&key(i, p)).map_or(0, |e| e.quantity.get());
                    let res = s.add_to_cart(&helpers::id(cartwise_mock::PRODUCT_IDS[i]), q, p);
                    prop_assert_eq!(res.is_ok(), q > 0);
                    let after = s.entry(&key(i, p)).map_or(0, |e| e.quantity.get());
                    prop_assert_eq!(after, before + q);
                }
                Op::Update(i, p, q) => {
                    let existed = s.entry(&key(i, p)).is_some();
                    prop_assert_eq!(s.update_quantity(&key(i, p), q).is_ok(), existed);
                    if existed {
                        prop_assert_eq!(s.entry(&key(i, p)).map(|e| e.quantity.get()), (q > 0).then_some(q));
                    }
                }
                Op::Remove(i, p) => {
                    let _ = s.remove(&key(i, p));
                    prop_assert!(s.entry(&key(i, p)).is_none());
                }
                Op::Select(id) => {
                    prop_assert!(s.select_platform(id).is_ok());
                }
                Op::Clear => s.clear(),
            }

            let keys: HashSet<CartKey> = s.cart().iter().map(|e| e.key()).collect();
            prop_assert_eq!(keys.len(), s.cart().len());

            let fresh = PlatformRanker::new().evaluate(s.cart(), &s.config().platforms);
            let memo = s.comparison();
            prop_assert_eq!(memo.results(), fresh.as_slice());
            let published = rx.borrow().clone();
            prop_assert_eq!(published, s.snapshot());
        }
    }
}

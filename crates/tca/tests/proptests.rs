use core_types::Side;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tca::{implementation_shortfall, rpm, trading_cost, trading_pnl, vwap};

/// Prices as exact cent amounts, avoiding float conversion noise.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn shortfall_decomposition_is_consistent(
        px_arrival in price(),
        px_final in price(),
        px_exec_avg in price(),
        fees in price(),
        (qty_order, qty_filled) in (0u64..100_000).prop_flat_map(|o| (Just(o), 0..=o)),
    ) {
        let is = implementation_shortfall(
            px_arrival, px_final, px_exec_avg, qty_filled, qty_order, fees,
        ).expect("qty_filled is within [0, qty_order]");

        // The two components must jointly account for every share of the
        // order, priced against arrival.
        let expected = Decimal::from(qty_filled) * (px_exec_avg - px_arrival)
            + Decimal::from(qty_order - qty_filled) * (px_final - px_arrival);

        prop_assert_eq!(is.trading_cost + is.opportunity_cost, expected);
        prop_assert_eq!(is.fees, fees);
    }

    #[test]
    fn overfill_is_always_rejected(
        px_arrival in price(),
        px_final in price(),
        px_exec_avg in price(),
        fees in price(),
        qty_order in 0u64..100_000,
        excess in 1u64..1_000,
    ) {
        let result = implementation_shortfall(
            px_arrival, px_final, px_exec_avg, qty_order + excess, qty_order, fees,
        );
        prop_assert!(result.is_err());
    }

    #[test]
    fn pnl_is_the_additive_inverse_of_cost(
        px_benchmark in price(),
        px_exec_avg in price(),
        side in side(),
    ) {
        let cost = trading_cost(px_benchmark, px_exec_avg, side).expect("non-zero benchmark");
        let pnl = trading_pnl(px_benchmark, px_exec_avg, side).expect("non-zero benchmark");
        prop_assert_eq!(pnl, -cost);
    }

    #[test]
    fn vwap_is_invariant_to_trade_order(
        p1 in price(),
        p2 in price(),
        q1 in 1u64..1_000_000,
        q2 in 1u64..1_000_000,
    ) {
        let forward = vwap(&[p1, p2], &[q1, q2]).expect("valid tape");
        let reversed = vwap(&[p2, p1], &[q2, q1]).expect("valid tape");
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn single_trade_vwap_is_the_trade_price(
        p in price(),
        q in 1u64..10_000_000,
    ) {
        let result = vwap(&[p], &[q]).expect("valid tape");
        prop_assert_eq!(result, Some(p));
    }

    #[test]
    fn rpm_stays_within_the_unit_interval(
        px_exec_avg in price(),
        side in side(),
        tape in prop::collection::vec((price(), 1u64..10_000), 1..50),
    ) {
        let (prices, quantities): (Vec<Decimal>, Vec<u64>) = tape.into_iter().unzip();
        let score = rpm(px_exec_avg, side, &prices, &quantities).expect("non-empty tape");

        prop_assert!(score >= Decimal::ZERO);
        prop_assert!(score <= Decimal::ONE);
    }
}

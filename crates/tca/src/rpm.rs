use crate::error::TcaError;
use core_types::Side;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Relative performance measure of an execution against its contemporaneous
/// trades.
///
/// Partitions the contemporaneous quantity by a strict price comparison: for
/// a buy, prints strictly above the execution price were outperformed and
/// prints strictly below underperformed it (mirrored for a sell). Ties land
/// in neither bucket but still count toward the total. The score is
/// `0.5 * (1 + qty_outperform/qty_total - qty_underperform/qty_total)`,
/// in [0, 1] with 0.5 neutral.
///
/// # Errors
///
/// Returns [`TcaError::DivisionByZero`] when the contemporaneous tape
/// carries zero total quantity.
pub fn rpm(
    px_exec_avg: Decimal,
    side: Side,
    prices: &[Decimal],
    quantities: &[u64],
) -> Result<Decimal, TcaError> {
    let mut qty_outperform: u64 = 0;
    let mut qty_underperform: u64 = 0;
    let mut qty_total: u64 = 0;

    for (&price, &quantity) in prices.iter().zip(quantities) {
        let (outperform, underperform) = match side {
            Side::Buy => (px_exec_avg < price, px_exec_avg > price),
            Side::Sell => (px_exec_avg > price, px_exec_avg < price),
        };

        if outperform {
            qty_outperform += quantity;
        } else if underperform {
            qty_underperform += quantity;
        }
        qty_total += quantity;
    }

    if qty_total == 0 {
        return Err(TcaError::DivisionByZero(
            "rpm over zero contemporaneous quantity".to_string(),
        ));
    }

    let total = Decimal::from(qty_total);
    let outperform_share = Decimal::from(qty_outperform) / total;
    let underperform_share = Decimal::from(qty_underperform) / total;

    Ok(dec!(0.5) * (Decimal::ONE + outperform_share - underperform_share))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_tape_is_neutral() {
        // Outperform 100 (bought below 51), underperform 100 (49 printed
        // below our fill), total 200.
        let score = rpm(dec!(50), Side::Buy, &[dec!(51), dec!(49)], &[100, 100])
            .expect("non-empty tape");
        assert_eq!(score, dec!(0.5));
    }

    #[test]
    fn full_tie_is_exactly_neutral() {
        let score = rpm(dec!(50), Side::Buy, &[dec!(50), dec!(50)], &[100, 300])
            .expect("non-empty tape");
        assert_eq!(score, dec!(0.5));
    }

    #[test]
    fn buying_below_every_print_scores_one() {
        let score =
            rpm(dec!(10), Side::Buy, &[dec!(11), dec!(12)], &[100, 100]).expect("non-empty tape");
        assert_eq!(score, dec!(1));
    }

    #[test]
    fn selling_below_every_print_scores_zero() {
        let score =
            rpm(dec!(10), Side::Sell, &[dec!(11), dec!(12)], &[100, 100]).expect("non-empty tape");
        assert_eq!(score, dec!(0));
    }

    #[test]
    fn ties_dilute_but_do_not_take_sides() {
        // 100 outperformed, 100 tied: score is 0.5 * (1 + 0.5 - 0) = 0.75.
        let score = rpm(dec!(50), Side::Buy, &[dec!(51), dec!(50)], &[100, 100])
            .expect("non-empty tape");
        assert_eq!(score, dec!(0.75));
    }

    #[test]
    fn zero_contemporaneous_quantity_is_rejected() {
        let err = rpm(dec!(50), Side::Buy, &[], &[]).unwrap_err();
        assert!(matches!(err, TcaError::DivisionByZero(_)));

        let err = rpm(dec!(50), Side::Buy, &[dec!(51)], &[0]).unwrap_err();
        assert!(matches!(err, TcaError::DivisionByZero(_)));
    }
}

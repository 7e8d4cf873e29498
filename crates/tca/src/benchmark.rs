use crate::error::TcaError;
use core_types::Side;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Basis points per unit fraction: 1 bp = 1/10_000.
const BPS_PER_UNIT: Decimal = dec!(10_000);

/// Trading cost of an execution versus a benchmark price, in basis points.
///
/// `sign(side) * ((px_exec_avg - px_benchmark) / px_benchmark) * 10_000`,
/// so a buy executed above the benchmark (or a sell below it) is a positive
/// cost.
///
/// # Errors
///
/// Returns [`TcaError::DivisionByZero`] when `px_benchmark` is zero,
/// checked before any arithmetic.
pub fn trading_cost(
    px_benchmark: Decimal,
    px_exec_avg: Decimal,
    side: Side,
) -> Result<Decimal, TcaError> {
    if px_benchmark.is_zero() {
        return Err(TcaError::DivisionByZero(
            "trading cost benchmark price".to_string(),
        ));
    }

    let slippage = (px_exec_avg - px_benchmark) / px_benchmark;

    Ok(Decimal::from(side.sign()) * slippage * BPS_PER_UNIT)
}

/// Trading PnL of an execution versus a benchmark price, in basis points.
/// The additive inverse of [`trading_cost`].
///
/// # Errors
///
/// Returns [`TcaError::DivisionByZero`] when `px_benchmark` is zero.
pub fn trading_pnl(
    px_benchmark: Decimal,
    px_exec_avg: Decimal,
    side: Side,
) -> Result<Decimal, TcaError> {
    Ok(-trading_cost(px_benchmark, px_exec_avg, side)?)
}

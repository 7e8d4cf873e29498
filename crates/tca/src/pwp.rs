use crate::error::TcaError;
use crate::vwap::VwapAccumulator;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Partition-weighted price: the VWAP of the minimal leading slice of a
/// trade tape that an order of `qty_order` shares would represent at a
/// participation rate of `pov`.
///
/// The needed volume is `ceil(qty_order / pov)`. Trades are consumed in tape
/// order into a [`VwapAccumulator`], each consumption clipped to the volume
/// still needed (the last trade is never over-consumed), and consumption
/// stops as soon as the needed volume is exhausted. Zero-quantity prints are
/// skipped.
///
/// Returns `Ok(None)` when the tape cannot satisfy the needed volume
/// (insufficient liquidity) and when `qty_order` is zero (nothing consumed,
/// no VWAP defined) — both stay distinguishable from any real price.
///
/// # Errors
///
/// Returns [`TcaError::InvalidParameter`] unless `0 < pov <= 1`, or when the
/// derived participation volume cannot be represented as a share count.
pub fn pwp(
    qty_order: u64,
    pov: Decimal,
    prices: &[Decimal],
    quantities: &[u64],
) -> Result<Option<Decimal>, TcaError> {
    if pov <= Decimal::ZERO || pov > Decimal::ONE {
        return Err(TcaError::InvalidParameter(format!(
            "participation rate [{pov}] outside (0, 1]"
        )));
    }

    let needed = (Decimal::from(qty_order) / pov).ceil();
    let mut remaining = needed.to_u64().ok_or_else(|| {
        TcaError::InvalidParameter(format!("participation volume [{needed}] is not a share count"))
    })?;

    tracing::debug!(qty_order, %pov, volume_needed = remaining, "computing pwp");

    if remaining == 0 {
        return Ok(None);
    }

    let mut accumulator = VwapAccumulator::new();
    let mut latest = None;

    for (&price, &quantity) in prices.iter().zip(quantities) {
        if remaining == 0 {
            break;
        }

        // Clip to the volume still needed; never over-consume.
        let consumed = remaining.min(quantity);
        if consumed == 0 {
            continue;
        }

        latest = Some(accumulator.feed(price, consumed)?);
        remaining -= consumed;
    }

    if remaining > 0 {
        tracing::debug!(
            shortfall = remaining,
            consumed = accumulator.total_quantity(),
            "tape exhausted before participation volume was met"
        );
        return Ok(None);
    }

    Ok(latest)
}

use crate::error::TcaError;
use rust_decimal::Decimal;

/// An incremental volume-weighted average price engine.
///
/// The accumulator has two logical states: uninitialized (no volume consumed
/// yet) and accumulating. It is driven trade by trade so that consumers like
/// [`crate::pwp::pwp`] can interrupt consumption mid-tape, clipping the last
/// trade to the volume they still need — something a batch reduction over a
/// whole tape cannot express.
///
/// An accumulator is owned exclusively by the caller that created it and is
/// discarded after use; it is never shared across concurrent calculations.
#[derive(Debug, Clone, Default)]
pub struct VwapAccumulator {
    weighted_price_sum: Decimal,
    total_quantity: u64,
}

impl VwapAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one trade and returns the running VWAP.
    ///
    /// # Errors
    ///
    /// Returns [`TcaError::DivisionByZero`] when the feed would leave the
    /// total consumed quantity at zero (a zero-quantity trade into an empty
    /// accumulator). The check runs before any mutation, so state is
    /// untouched on failure.
    pub fn feed(&mut self, price: Decimal, quantity: u64) -> Result<Decimal, TcaError> {
        if self.total_quantity == 0 && quantity == 0 {
            return Err(TcaError::DivisionByZero(
                "vwap feed leaving zero total quantity".to_string(),
            ));
        }

        self.weighted_price_sum += price * Decimal::from(quantity);
        self.total_quantity += quantity;

        Ok(self.weighted_price_sum / Decimal::from(self.total_quantity))
    }

    /// The VWAP over everything consumed so far.
    ///
    /// # Errors
    ///
    /// Returns [`TcaError::Undefined`] while no volume has been consumed: a
    /// VWAP over zero quantity is undefined, not zero. "No volume yet" must
    /// stay distinguishable from "zero-cost volume".
    pub fn vwap(&self) -> Result<Decimal, TcaError> {
        if self.total_quantity == 0 {
            return Err(TcaError::Undefined(
                "vwap requested before any volume was consumed".to_string(),
            ));
        }

        Ok(self.weighted_price_sum / Decimal::from(self.total_quantity))
    }

    /// Total quantity consumed so far (shares).
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// True while no volume has been consumed.
    pub fn is_empty(&self) -> bool {
        self.total_quantity == 0
    }
}

/// Batch VWAP over an aligned `(prices, quantities)` trade tape.
///
/// Feeds every trade in tape order and returns the final VWAP. An empty tape
/// yields `Ok(None)`: an upstream data gap is a legitimate "no VWAP
/// available" outcome, not a failure. Tapes of unequal length are consumed
/// to the shorter length.
///
/// # Errors
///
/// Propagates [`TcaError::DivisionByZero`] from a leading zero-quantity
/// trade.
pub fn vwap(prices: &[Decimal], quantities: &[u64]) -> Result<Option<Decimal>, TcaError> {
    let mut accumulator = VwapAccumulator::new();
    let mut latest = None;

    for (&price, &quantity) in prices.iter().zip(quantities) {
        latest = Some(accumulator.feed(price, quantity)?);
    }

    Ok(latest)
}

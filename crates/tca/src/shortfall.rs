use crate::error::TcaError;
use core_types::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The decomposition of an order's implementation shortfall versus its
/// arrival-price benchmark.
///
/// All components are currency amounts signed so that positive values are
/// adverse (a cost). Computed once per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationShortfall {
    /// Cost attributable to market impact and timing on the filled portion.
    pub trading_cost: Decimal,
    /// Cost of the unfilled portion's price drift from arrival to the
    /// measurement horizon.
    pub opportunity_cost: Decimal,
    /// Fees, passed through unchanged. Positive values are a cost.
    pub fees: Decimal,
}

impl ImplementationShortfall {
    /// Total shortfall: trading cost plus opportunity cost plus fees.
    pub fn total(&self) -> Decimal {
        self.trading_cost + self.opportunity_cost + self.fees
    }
}

/// Decomposes the implementation shortfall of an order execution versus its
/// arrival price:
///
/// - `trading_cost = qty_filled * (px_exec_avg - px_arrival)`
/// - `opportunity_cost = (qty_order - qty_filled) * (px_final - px_arrival)`
/// - `fees` passed through unchanged.
///
/// The decomposition is side-agnostic: no [`core_types::Side`] sign is
/// applied, so each component's orientation comes from the natural sign of
/// the price differences. A buy executed above arrival is a positive
/// (adverse) trading cost. Callers that need side-oriented benchmark costs
/// use [`crate::benchmark::trading_cost`] instead.
///
/// # Errors
///
/// Returns [`TcaError::InvalidQuantity`] when `qty_filled` exceeds
/// `qty_order`, before any arithmetic is performed.
pub fn implementation_shortfall(
    px_arrival: Decimal,
    px_final: Decimal,
    px_exec_avg: Decimal,
    qty_filled: u64,
    qty_order: u64,
    fees: Decimal,
) -> Result<ImplementationShortfall, TcaError> {
    if qty_filled > qty_order {
        return Err(TcaError::InvalidQuantity(format!(
            "filled [{qty_filled}] exceeds order [{qty_order}]"
        )));
    }

    let qty_unfilled = qty_order - qty_filled;

    Ok(ImplementationShortfall {
        trading_cost: Decimal::from(qty_filled) * (px_exec_avg - px_arrival),
        opportunity_cost: Decimal::from(qty_unfilled) * (px_final - px_arrival),
        fees,
    })
}

/// Convenience entry point computing the decomposition directly from an
/// [`Order`] description.
pub fn implementation_shortfall_for(order: &Order) -> Result<ImplementationShortfall, TcaError> {
    implementation_shortfall(
        order.px_arrival,
        order.px_final,
        order.px_exec_avg,
        order.qty_filled,
        order.qty_order,
        order.fees,
    )
}

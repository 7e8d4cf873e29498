use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order execution as reported by an order-management collaborator.
///
/// This is a plain data carrier. Quantity validation happens in the
/// calculators that consume it, not at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Quantity ordered (shares).
    pub qty_order: u64,
    /// Quantity filled (shares). Expected to be within `[0, qty_order]`.
    pub qty_filled: u64,
    /// Mid-price at order arrival ($).
    pub px_arrival: Decimal,
    /// Mid-price at the measurement horizon ($).
    pub px_final: Decimal,
    /// Average executed price over the filled quantity ($).
    pub px_exec_avg: Decimal,
    /// Fees ($). Positive values are a cost.
    pub fees: Decimal,
}

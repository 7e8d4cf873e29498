//! # TCA Core
//!
//! This crate provides the transaction cost analysis calculators for equity
//! order executions: implementation shortfall decomposition, trading cost
//! and PnL versus a benchmark price, streaming and batch VWAP, the
//! partition-weighted price (PWP) benchmark, and the relative performance
//! measure (RPM).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. Market data (trade tapes, benchmark prices) and order
//!   descriptions arrive as already-available in-memory inputs; it depends
//!   only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every entry point is a deterministic
//!   computation over its arguments. The one stateful piece, the
//!   [`VwapAccumulator`], is owned exclusively by the caller that created it
//!   and is never shared.
//!
//! ## Public API
//!
//! - [`implementation_shortfall`]: decomposes shortfall into trading cost,
//!   opportunity cost and fees.
//! - [`trading_cost`] / [`trading_pnl`]: side-oriented cost/PnL versus any
//!   benchmark price, in basis points.
//! - [`VwapAccumulator`] and the batch [`vwap`] wrapper.
//! - [`pwp`]: VWAP over the minimal leading tape slice representing an order
//!   at a target participation rate.
//! - [`rpm`]: symmetric [0, 1] score of an execution against its
//!   contemporaneous trades.
//! - [`TcaError`]: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod benchmark;
pub mod error;
pub mod pwp;
pub mod rpm;
pub mod shortfall;
pub mod vwap;

// Re-export the key components to create a clean, public-facing API.
pub use benchmark::{trading_cost, trading_pnl};
pub use error::TcaError;
pub use pwp::pwp;
pub use rpm::rpm;
pub use shortfall::{
    ImplementationShortfall, implementation_shortfall, implementation_shortfall_for,
};
pub use vwap::{VwapAccumulator, vwap};

//! Application layer: the formula library and the service that dispatches to it.
//!
//! `Calculator` is the primary entry point. It turns raw requests into
//! validated ones and routes each to exactly one formula. The debt payoff
//! simulator lives in `payoff` since it is the only iterative calculation.

pub mod calculator;
pub mod formulas;
pub mod payoff;

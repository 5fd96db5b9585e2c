//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! Only the terminal price enters a European payoff.

use std::fmt;

/// European option payoff
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    EuropeanCall { k: f64 },

    /// European put option: max(K - S_T, 0)
    EuropeanPut { k: f64 },
}

impl Payoff {
    /// Build from the host-facing `is_call` flag
    pub fn new(k: f64, is_call: bool) -> Self {
        if is_call {
            Payoff::EuropeanCall { k }
        } else {
            Payoff::EuropeanPut { k }
        }
    }

    pub fn strike(&self) -> f64 {
        match *self {
            Payoff::EuropeanCall { k } | Payoff::EuropeanPut { k } => k,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Payoff::EuropeanCall { .. })
    }

    /// Payoff at terminal price `st`; never negative for finite inputs
    ///
    /// A NaN intrinsic value is returned as NaN rather than floored to zero
    /// (`f64::max` would swallow it).
    #[inline]
    pub fn calculate(&self, st: f64) -> f64 {
        let intrinsic = match *self {
            Payoff::EuropeanCall { k } => st - k,
            Payoff::EuropeanPut { k } => k - st,
        };
        if intrinsic < 0.0 {
            0.0
        } else {
            intrinsic
        }
    }

    /// True when the option finishes in or at the money at `st`
    pub fn is_in_the_money(&self, st: f64) -> bool {
        match *self {
            Payoff::EuropeanCall { k } => st >= k,
            Payoff::EuropeanPut { k } => st <= k,
        }
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payoff::EuropeanCall { k } => write!(f, "European call (K={})", k),
            Payoff::EuropeanPut { k } => write!(f, "European put (K={})", k),
        }
    }
}

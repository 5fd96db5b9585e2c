// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes prices for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! These closed forms are the reference the Monte Carlo estimator is checked
//! against.

use crate::math_utils::norm_cdf;

fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    (d1, d2)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// Where:
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(s, k, r, sigma, t, true)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(s, k, r, sigma, t, false)
}

/// Black-Scholes price for a call (`is_call`) or put
///
/// Expired options return intrinsic value; `σ = 0` returns the discounted
/// payoff at the forward `S·e^(rT)`.
pub fn bs_price(s: f64, k: f64, r: f64, sigma: f64, t: f64, is_call: bool) -> f64 {
    if t <= 0.0 {
        let intrinsic = if is_call { s - k } else { k - s };
        return intrinsic.max(0.0);
    }

    let discount = (-r * t).exp();
    if sigma == 0.0 {
        let forward = s * (r * t).exp();
        let payoff = if is_call { forward - k } else { k - forward };
        return discount * payoff.max(0.0);
    }

    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    if is_call {
        s * norm_cdf(d1) - k * discount * norm_cdf(d2)
    } else {
        k * discount * norm_cdf(-d2) - s * norm_cdf(-d1)
    }
}

/// Model-free put-call parity value of `C - P`
///
/// ```text
/// C - P = S - K*e^(-rT)
/// ```
pub fn parity_forward(s: f64, k: f64, r: f64, t: f64) -> f64 {
    s - k * (-r * t).exp()
}

//! # mc-engine: Monte Carlo Pricing of European Options
//!
//! Prices European calls and puts by Monte Carlo under risk-neutral
//! Geometric Brownian Motion, returning a point estimate together with its
//! standard error.
//!
//! ## Key Features
//!
//! - **Reproducible**: every call owns a generator seeded from the request
//! - **Exact terminal sampling**: one normal draw per path, no time stepping
//! - **Stable statistics**: clamped sum-of-squares variance, or Welford
//! - **Pluggable randomness**: any `rand::RngCore` behind a normal sampler
//! - **Batch pricing**: independent requests on the rayon pool
//! - **Closed-form reference**: Black-Scholes call/put and put-call parity
//!
//! ## Quick Start
//!
//! ```rust
//! use mc_engine::mc::pricer::{price_european, PricingRequest};
//!
//! let request = PricingRequest {
//!     spot: 100.0,
//!     strike: 100.0,
//!     rate: 0.05,
//!     volatility: 0.2,
//!     maturity: 1.0,
//!     path_count: 100_000,
//!     seed: 42,
//!     is_call: true,
//! };
//!
//! let result = price_european(&request);
//! println!("Option price: {:.4} ± {:.4}", result.price, result.std_error);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Under the risk-neutral measure the terminal price is
//! `S_T = S_0 exp((r - σ²/2)T + σ√T Z)` with `Z ~ N(0,1)`, and the option
//! value is `E[e^(-rT) payoff(S_T)]`, estimated by the sample mean of
//! discounted payoffs.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{McError, McResult};
pub use mc::pricer::{mc_price_european, price_european, PricingRequest, PricingResult};

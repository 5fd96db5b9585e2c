// src/mc/pricer.rs
//! Monte Carlo pricer for European options under risk-neutral GBM
//!
//! # Estimator
//!
//! ```text
//! price     = (1/n) Σ e^(-rT) payoff(S_T^(i))
//! S_T^(i)   = S_0 * exp((r - σ²/2)T + σ√T * Z_i),   Z_i ~ N(0,1) i.i.d.
//! std_error = √(mean(X²) - mean(X)²) / √n
//! ```
//!
//! # Determinism
//!
//! Each call builds its own generator from `seed` and consumes exactly one
//! normal draw per path, so identical requests give bit-identical results.
//! Nothing is shared between calls; [`price_batch`] relies on this to price
//! independent requests on the rayon pool.

use crate::error::{validation::*, McResult};
use crate::mc::accumulator::{AccumulatorKind, MomentAccumulator, SumOfSquares, Welford};
use crate::mc::payoffs::Payoff;
use crate::models::gbm::TerminalDynamics;
use crate::rng::{NormalSampler, StdNormalSampler};
use rayon::prelude::*;
use std::fmt;
use tracing::debug;

/// z-score of the two-sided 95% normal confidence interval
pub const Z_95: f64 = 1.96;

/// Inputs of a single pricing call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingRequest {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub path_count: usize,
    pub seed: u64,
    pub is_call: bool,
}

impl PricingRequest {
    /// Strict domain check for callers who want one.
    ///
    /// The pricer itself never calls this: out-of-domain and non-finite
    /// inputs flow through the arithmetic unchanged.
    pub fn validate(&self) -> McResult<()> {
        validate_positive("spot", self.spot)?;
        validate_finite("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_finite("strike", self.strike)?;
        validate_finite("rate", self.rate)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("volatility", self.volatility)?;
        validate_non_negative("maturity", self.maturity)?;
        validate_finite("maturity", self.maturity)?;
        validate_max_paths("path_count", self.path_count)?;
        Ok(())
    }

    pub fn payoff(&self) -> Payoff {
        Payoff::new(self.strike, self.is_call)
    }

    pub fn dynamics(&self) -> TerminalDynamics {
        TerminalDynamics::new(self.rate, self.volatility, self.maturity)
    }
}

/// Monte Carlo estimate and its standard error
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingResult {
    pub price: f64,
    pub std_error: f64,
}

impl PricingResult {
    /// `(price - 1.96·se, price + 1.96·se)`
    pub fn conf_int_95(&self) -> (f64, f64) {
        (
            self.price - Z_95 * self.std_error,
            self.price + Z_95 * self.std_error,
        )
    }
}

impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} ± {:.6}", self.price, self.std_error)
    }
}

/// Price a European option with the default generator and accumulator.
///
/// Total for every input: zero paths give `{price: 0, std_error: 0}`, zero
/// volatility or maturity collapse all paths onto one terminal price, and
/// NaN/∞ inputs propagate through the arithmetic.
pub fn price_european(request: &PricingRequest) -> PricingResult {
    price_european_with_kind(request, AccumulatorKind::SumOfSquares)
}

/// [`price_european`] with a chosen accumulator
pub fn price_european_with_kind(request: &PricingRequest, kind: AccumulatorKind) -> PricingResult {
    let mut sampler = StdNormalSampler::from_seed(request.seed);
    match kind {
        AccumulatorKind::SumOfSquares => {
            price_european_with(request, &mut sampler, SumOfSquares::new())
        }
        AccumulatorKind::Welford => price_european_with(request, &mut sampler, Welford::new()),
    }
}

/// Core simulation loop over an injected sampler and accumulator.
///
/// `request.seed` is ignored here; the sampler already carries its state.
/// Consumes exactly `request.path_count` normal draws from `sampler`.
pub fn price_european_with<S, A>(
    request: &PricingRequest,
    sampler: &mut S,
    mut accumulator: A,
) -> PricingResult
where
    S: NormalSampler + ?Sized,
    A: MomentAccumulator,
{
    debug!(
        spot = request.spot,
        strike = request.strike,
        rate = request.rate,
        volatility = request.volatility,
        maturity = request.maturity,
        path_count = request.path_count,
        seed = request.seed,
        is_call = request.is_call,
        "pricing European option"
    );

    let dynamics = request.dynamics();
    let payoff = request.payoff();

    for _ in 0..request.path_count {
        let z = sampler.next_normal();
        let st = dynamics.terminal_price(request.spot, z);
        accumulator.push(dynamics.disc_factor * payoff.calculate(st));
    }

    let result = PricingResult {
        price: accumulator.mean(),
        std_error: accumulator.std_error(),
    };

    debug!(price = result.price, std_error = result.std_error, "pricing finished");
    result
}

/// Host-facing entry point taking the eight request fields positionally.
///
/// # Errors
///
/// `McError::InvalidConfiguration` when `path_count` is negative. No other
/// input is checked.
#[allow(clippy::too_many_arguments)]
pub fn mc_price_european(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    path_count: i64,
    seed: u64,
    is_call: bool,
) -> McResult<PricingResult> {
    let path_count = validate_path_count(path_count)?;
    Ok(price_european(&PricingRequest {
        spot,
        strike,
        rate,
        volatility,
        maturity,
        path_count,
        seed,
        is_call,
    }))
}

/// Price independent requests concurrently.
///
/// Output order matches input order, and every entry equals what
/// [`price_european`] returns for that request alone.
pub fn price_batch(requests: &[PricingRequest]) -> Vec<PricingResult> {
    requests.par_iter().map(price_european).collect()
}

/// The `(S_T, discounted payoff)` pairs behind [`price_european`].
///
/// Uses the same generator and draw order, so averaging the second
/// component reproduces the estimator.
pub fn sample_discounted_payoffs(request: &PricingRequest) -> Vec<(f64, f64)> {
    let mut sampler = StdNormalSampler::from_seed(request.seed);
    let dynamics = request.dynamics();
    let payoff = request.payoff();

    (0..request.path_count)
        .map(|_| {
            let st = dynamics.terminal_price(request.spot, sampler.next_normal());
            (st, dynamics.disc_factor * payoff.calculate(st))
        })
        .collect()
}

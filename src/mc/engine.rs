// src/mc/engine.rs
//! Model / product / configuration layer over the core pricer
//!
//! ```rust
//! use mc_engine::mc::engine::{EuropeanOption, McConfig, MonteCarloEngine};
//! use mc_engine::mc::payoffs::Payoff;
//! use mc_engine::models::gbm::Gbm;
//!
//! let engine = MonteCarloEngine::new(
//!     Gbm::new(100.0, 0.02, 0.2),
//!     McConfig { paths: 50_000, seed: Some(42), ..Default::default() },
//! ).expect("valid configuration");
//! let option = EuropeanOption::new(Payoff::EuropeanCall { k: 100.0 }, 1.0);
//! let result = engine.price(&option);
//! let (lo, hi) = result.conf_int_95;
//! assert!(lo <= result.price && result.price <= hi);
//! ```

use crate::error::{validation::*, McResult};
use crate::mc::accumulator::AccumulatorKind;
use crate::mc::payoffs::Payoff;
use crate::mc::pricer::{price_european_with_kind, PricingRequest, PricingResult};
use crate::models::gbm::Gbm;
use tracing::warn;

/// Seed used when a configuration does not carry one
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McConfig {
    pub paths: usize,
    pub seed: Option<u64>,
    pub accumulator: AccumulatorKind,
}

impl McConfig {
    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> McResult<()> {
        validate_max_paths("paths", self.paths)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            paths: 100_000,
            seed: None,
            accumulator: AccumulatorKind::SumOfSquares,
        }
    }
}

/// European option: payoff shape plus time to expiry in years
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuropeanOption {
    pub payoff: Payoff,
    pub maturity: f64,
}

impl EuropeanOption {
    pub fn new(payoff: Payoff, maturity: f64) -> Self {
        EuropeanOption { payoff, maturity }
    }
}

/// Engine output: estimate, standard error and 95% confidence interval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineResult {
    pub price: f64,
    pub std_error: f64,
    pub conf_int_95: (f64, f64),
}

impl From<PricingResult> for EngineResult {
    fn from(result: PricingResult) -> Self {
        EngineResult {
            price: result.price,
            std_error: result.std_error,
            conf_int_95: result.conf_int_95(),
        }
    }
}

pub struct MonteCarloEngine {
    pub model: Gbm,
    pub config: McConfig,
}

impl MonteCarloEngine {
    pub fn new(model: Gbm, config: McConfig) -> McResult<Self> {
        config.validate()?;
        if config.seed.is_none() {
            warn!(
                seed = DEFAULT_SEED,
                "no seed configured, falling back to the default seed"
            );
        }
        Ok(MonteCarloEngine { model, config })
    }

    pub fn request_for(&self, option: &EuropeanOption) -> PricingRequest {
        PricingRequest {
            spot: self.model.spot,
            strike: option.payoff.strike(),
            rate: self.model.rate,
            volatility: self.model.sigma,
            maturity: option.maturity,
            path_count: self.config.paths,
            seed: self.config.effective_seed(),
            is_call: option.payoff.is_call(),
        }
    }

    pub fn price(&self, option: &EuropeanOption) -> EngineResult {
        price_european_with_kind(&self.request_for(option), self.config.accumulator).into()
    }
}

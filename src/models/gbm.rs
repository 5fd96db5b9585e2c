// src/models/gbm.rs
//! Risk-neutral Geometric Brownian Motion
//!
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! With exact solution at maturity T:
//! ```text
//! S_T = S_0 * exp((r - σ²/2)T + σ√T * Z),   Z ~ N(0,1)
//! ```

use crate::rng::NormalSampler;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gbm {
    pub spot: f64,
    pub rate: f64,
    pub sigma: f64,
}

/// Loop invariants of the terminal distribution for a fixed maturity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalDynamics {
    pub disc_factor: f64,
    pub drift: f64,
    pub diffusion_scale: f64,
}

impl TerminalDynamics {
    pub fn new(rate: f64, sigma: f64, maturity: f64) -> Self {
        TerminalDynamics {
            disc_factor: (-rate * maturity).exp(),
            drift: (rate - 0.5 * sigma * sigma) * maturity,
            diffusion_scale: sigma * maturity.sqrt(),
        }
    }

    #[inline]
    pub fn terminal_price(&self, spot: f64, normal_draw: f64) -> f64 {
        spot * (self.drift + self.diffusion_scale * normal_draw).exp()
    }
}

impl Gbm {
    pub fn new(spot: f64, rate: f64, sigma: f64) -> Self {
        Gbm { spot, rate, sigma }
    }

    pub fn dynamics(&self, maturity: f64) -> TerminalDynamics {
        TerminalDynamics::new(self.rate, self.sigma, maturity)
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.rate - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }

    /// Draw `n_paths` terminal prices, one normal draw each
    pub fn simulate_terminal<S: NormalSampler + ?Sized>(
        &self,
        maturity: f64,
        n_paths: usize,
        sampler: &mut S,
    ) -> Vec<f64> {
        let dynamics = self.dynamics(maturity);
        (0..n_paths)
            .map(|_| dynamics.terminal_price(self.spot, sampler.next_normal()))
            .collect()
    }

    /// Sample path `[S_0, S_dt, ..., S_T]` on an even grid, for display.
    ///
    /// Pricing never uses this; European payoffs only need `S_T`.
    pub fn simulate_path<S: NormalSampler + ?Sized>(
        &self,
        maturity: f64,
        steps: usize,
        sampler: &mut S,
    ) -> Vec<f64> {
        let mut path = Vec::with_capacity(steps + 1);
        path.push(self.spot);
        if steps == 0 {
            return path;
        }

        let dt = maturity / steps as f64;
        let mut current_s = self.spot;
        for _ in 0..steps {
            current_s = self.exact_step(current_s, dt, sampler.next_normal());
            path.push(current_s);
        }
        path
    }
}

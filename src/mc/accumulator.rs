//! Running moment accumulators for Monte Carlo estimators
//!
//! Both accumulators report the mean of the pushed samples and the standard
//! error of that mean:
//! ```text
//! mean      = Σx / n
//! variance  = Σx²/n - mean²        (clamped at 0)
//! std_error = √variance / √n       (0 when n = 0)
//! ```
//!
//! [`SumOfSquares`] keeps two scalars and is the default. It loses precision
//! when the samples are large relative to their spread (catastrophic
//! cancellation in `Σx²/n - mean²`). [`Welford`] updates mean and M2 online and
//! avoids that cancellation at the cost of a division per sample.

/// Which accumulator a pricing run uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccumulatorKind {
    #[default]
    SumOfSquares,
    Welford,
}

pub trait MomentAccumulator {
    fn push(&mut self, x: f64);
    fn count(&self) -> usize;
    /// Sample mean; 0 when nothing was pushed
    fn mean(&self) -> f64;
    /// Variance with the 1/n normalisation; never negative
    fn variance(&self) -> f64;

    fn std_error(&self) -> f64 {
        let variance = self.variance();
        let std_dev = if variance > 0.0 { variance.sqrt() } else { 0.0 };
        if self.count() > 0 {
            std_dev / (self.count() as f64).sqrt()
        } else {
            0.0
        }
    }
}

/// Sum and sum of squares, the only state carried across samples
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SumOfSquares {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl SumOfSquares {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MomentAccumulator for SumOfSquares {
    #[inline]
    fn push(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    fn count(&self) -> usize {
        self.n
    }

    fn mean(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.sum / self.n as f64
    }

    fn variance(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let n = self.n as f64;
        let mean = self.sum / n;
        let mean_sq = self.sum_sq / n;
        let variance = mean_sq - mean * mean;
        // tiny negative values come from floating-point cancellation
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }
}

/// Welford's online mean / M2 update
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Welford {
    n: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MomentAccumulator for Welford {
    #[inline]
    fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn count(&self) -> usize {
        self.n
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let variance = self.m2 / self.n as f64;
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }
}

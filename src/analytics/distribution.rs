// src/analytics/distribution.rs
//! Equal-width histograms of simulated samples (terminal prices, discounted
//! payoffs) for reporting.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn centre(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }
}

/// Bucket the finite samples into `bins` equal-width bins spanning
/// `[min, max]`; the last bin is closed on the right.
///
/// Returns no bins when `bins == 0` or no sample is finite. When every
/// finite sample is equal, a single bin of zero width holds them all.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = samples.iter().copied().filter(|x| x.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for x in finite {
        let idx = (((x - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: if i + 1 == bins {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_all_samples() {
        let samples: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram(&samples, 10);

        assert_eq!(bins.len(), 10);
        assert!(bins.iter().all(|b| b.count == 10));
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[9].upper, 99.0);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0], 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
        assert_eq!(bins[0].centre(), 0.5);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(histogram(&[], 5).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
        assert!(histogram(&[f64::NAN], 3).is_empty());

        let single = histogram(&[4.2, 4.2, 4.2, f64::INFINITY], 7);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 3);
    }
}

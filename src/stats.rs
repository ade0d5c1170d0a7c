//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random sites of a fresh grid until it
//! percolates and records the fraction of sites that ended up open. Across
//! many trials that fraction concentrates around the percolation threshold
//! (about 0.593 for large square grids).

use rand::Rng;

use crate::percolation::Percolation;

// Two-sided z-score for a 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Summary statistics over a batch of independent percolation experiments on
/// an n-by-n grid.
#[derive(Clone, Debug)]
pub struct PercolationStats {
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
}

impl PercolationStats {
    /// Runs `trials` independent experiments on an n-by-n grid, drawing site
    /// coordinates from `rng`. Re-drawing an already open site is a no-op,
    /// so every trial terminates within n² distinct openings.
    pub fn run<R: Rng>(
        n: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<PercolationStats, &'static str> {
        if n == 0 {
            return Err("Grid size must be at least 1");
        }
        if trials == 0 {
            return Err("Trial count must be at least 1");
        }
        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            let mut system = Percolation::new(n)?;
            while !system.percolates() {
                let row = rng.random_range(1..=n);
                let col = rng.random_range(1..=n);
                system.open(row, col)?;
            }
            thresholds.push(system.number_of_open_sites() as f64 / (n * n) as f64);
        }

        let mean = mean(&thresholds);
        let stddev = sample_stddev(&thresholds, mean);
        let margin = CONFIDENCE_95 * stddev / (trials as f64).sqrt();
        Ok(PercolationStats {
            mean,
            stddev,
            confidence_lo: mean - margin,
            confidence_hi: mean + margin,
        })
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the recorded thresholds.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_lo
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_hi
    }
}

fn mean(samples: &[f64]) -> f64 {
    debug_assert!(!samples.is_empty());
    samples.iter().sum::<f64>() / samples.len() as f64
}

// Sample standard deviation with Bessel's correction. A single sample has no
// spread, so it maps to 0.0 instead of dividing by zero.
fn sample_stddev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let squared_deviations: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    (squared_deviations / (samples.len() - 1) as f64).sqrt()
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::error::{GridError, StatsError};
use crate::grid::ConnectivityGrid;
use crate::percolation::Percolation;

const CONFIDENCE_95: f64 = 1.96;

/// Threshold estimates from independent random-open trials on an n-by-n grid.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	thresholds: Vec<f64>,
}

/// Opens uniformly random closed sites until `system` percolates and returns
/// the fraction of sites that ended up open.
pub fn threshold_trial<P: Percolation, R: Rng>(system: &mut P, rng: &mut R) -> Result<f64, GridError> {
	let n = system.size();
	while !system.percolates() {
		let row = rng.gen_range(1, n + 1);
		let col = rng.gen_range(1, n + 1);
		if !system.is_open(row, col)? {
			system.open(row, col)?;
		}
	}
	Ok(system.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Deterministic generator for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
	let mut bytes = [0u8; 32];
	for chunk in bytes.chunks_mut(8) {
		chunk.copy_from_slice(&seed.to_le_bytes());
	}
	StdRng::from_seed(bytes)
}

impl PercolationStats {
	pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats, StatsError> {
		if trials == 0 {
			return Err(StatsError::NoTrials);
		}
		let mut thresholds = Vec::with_capacity(trials);
		for t in 0..trials {
			let mut grid = ConnectivityGrid::new(n)?;
			let threshold = threshold_trial(&mut grid, rng)?;
			debug!("trial {}: threshold {:.4}", t, threshold);
			thresholds.push(threshold);
		}
		let stats = PercolationStats { n, thresholds };
		info!("{} trials on {}x{}: mean {:.4}, stddev {:.4}", trials, n, n, stats.mean(), stats.stddev());
		Ok(stats)
	}

	pub fn size(&self) -> usize {
		self.n
	}

	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn mean(&self) -> f64 {
		self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
	}

	/// Sample standard deviation; NaN with a single trial.
	pub fn stddev(&self) -> f64 {
		let count = self.thresholds.len();
		if count < 2 {
			return f64::NAN;
		}
		let mean = self.mean();
		let variance = self.thresholds.iter()
			.map(|x| (x - mean) * (x - mean))
			.sum::<f64>() / (count - 1) as f64;
		variance.sqrt()
	}

	pub fn confidence_lo(&self) -> f64 {
		self.mean() - self.half_width()
	}

	pub fn confidence_hi(&self) -> f64 {
		self.mean() + self.half_width()
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
	}

	/// Summary object; NaN fields come out as null.
	pub fn to_json(&self) -> Value {
		serde_json::json!({
			"n": self.n,
			"trials": self.thresholds.len(),
			"mean": self.mean(),
			"stddev": self.stddev(),
			"confidence_lo": self.confidence_lo(),
			"confidence_hi": self.confidence_hi(),
		})
	}
}

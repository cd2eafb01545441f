#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate percolation;

use simplelog::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, stdin};
use std::process;

use percolation::{ConnectivityGrid, DriverError, PercolationStats, Settings};

fn log_config() -> Config {
	Config {time: None, level: None, target: None, location: None, time_format: None}
}

fn init_logging(settings: &Settings) -> Result<(), DriverError> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	loggers.push(WriteLogger::new(settings.log_level, log_config(), io::stderr()));
	if let Some(ref path) = settings.log_file {
		loggers.push(WriteLogger::new(settings.log_level, log_config(), File::create(path)?));
	}
	CombinedLogger::init(loggers).map_err(|e| DriverError::Logger(e.to_string()))
}

fn run() -> Result<(), DriverError> {
	let stdin = stdin();
	let reader = BufReader::new(stdin);
	let mut lines_iter = reader.lines();

	let settings = match lines_iter.next() {
		Some(line) => Settings::parse(&line?)?,
		None => Settings::default(),
	};
	init_logging(&settings)?;

	let lines: Vec<String> = lines_iter.collect::<io::Result<_>>()?;
	let replay = percolation::parse_replay(lines.into_iter(), 2)?;
	info!("replaying {} opens on a {}x{} grid", replay.sites.len(), replay.n, replay.n);

	let mut grid = ConnectivityGrid::new(replay.n)?;
	let mut percolated = false;
	for (step, &(row, col)) in replay.sites.iter().enumerate() {
		grid.open(row, col)?;
		if !percolated && grid.percolates() {
			info!("percolates after step {} ({}, {})", step + 1, row, col);
			percolated = true;
		}
	}
	println!("{}x{} grid: {} open sites, percolates: {}",
		replay.n, replay.n, grid.number_of_open_sites(), grid.percolates());

	if settings.trials > 0 {
		let stats = match settings.seed {
			Some(seed) => PercolationStats::run(replay.n, settings.trials, &mut percolation::seeded_rng(seed))?,
			None => PercolationStats::run(replay.n, settings.trials, &mut rand::thread_rng())?,
		};
		println!("{}", stats.to_json());
	}
	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("{}", e);
		process::exit(1);
	}
}

#[macro_use] extern crate log;
extern crate rand;
extern crate serde_json;

mod disjoint_set;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod percolation;
pub mod stats;

pub use config::Settings;
pub use error::{DriverError, GridError, InputError, StatsError};
pub use grid::ConnectivityGrid;
pub use input::{parse_replay, Replay};
pub use percolation::Percolation;
pub use stats::{seeded_rng, threshold_trial, PercolationStats};

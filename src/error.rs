use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
	#[error("grid size must be at least 1, got {n}")]
	InvalidSize { n: usize },
	#[error("site ({row}, {col}) is outside a {n}x{n} grid")]
	OutOfRange { row: usize, col: usize, n: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
	#[error("at least one trial is required")]
	NoTrials,
	#[error(transparent)]
	Grid(#[from] GridError),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
	#[error("missing grid size line")]
	MissingSize,
	#[error("line {line}: expected {expected} number(s), found {found}")]
	Arity { line: usize, expected: usize, found: usize },
	#[error("line {line}: bad number {token:?}")]
	BadNumber { line: usize, token: String },
	#[error("read failed: {0}")]
	Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
	#[error("bad settings line: {0}")]
	Settings(#[from] serde_json::Error),
	#[error("settings must be a JSON object")]
	SettingsShape,
	#[error("unknown log level {0:?}")]
	LogLevel(String),
	#[error(transparent)]
	Input(#[from] InputError),
	#[error(transparent)]
	Grid(#[from] GridError),
	#[error(transparent)]
	Stats(#[from] StatsError),
	#[error("log setup failed: {0}")]
	Logger(String),
	#[error(transparent)]
	Io(#[from] io::Error),
}

use crate::error::GridError;

/// Query surface shared by anything that can be driven through a percolation
/// run. Coordinates are 1-based.
pub trait Percolation {
	/// Opens (row, col) if it is not open already.
	fn open(&mut self, row: usize, col: usize) -> Result<(), GridError>;

	fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError>;

	/// Has (row, col) been marked full? Sites touching either boundary row get
	/// marked when they join it.
	fn is_full(&self, row: usize, col: usize) -> Result<bool, GridError>;

	fn number_of_open_sites(&self) -> usize;

	/// Does an open path link the top row to the bottom row?
	fn percolates(&self) -> bool;

	/// Side length of the grid.
	fn size(&self) -> usize;
}

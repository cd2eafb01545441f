use crate::disjoint_set::SiteForest;
use crate::error::GridError;
use crate::percolation::Percolation;

/// An n-by-n percolation system backed by a [`SiteForest`].
///
/// Sites are addressed with 1-based `(row, col)`. Row 1 touches the virtual
/// top site and row n touches the virtual bottom site, so the system
/// percolates exactly when those two share a root.
#[derive(Debug)]
pub struct ConnectivityGrid {
	n: usize,
	forest: SiteForest,
	opened: usize,
}

impl ConnectivityGrid {
	pub fn new(n: usize) -> Result<ConnectivityGrid, GridError> {
		if n < 1 {
			return Err(GridError::InvalidSize { n });
		}
		debug!("new {}x{} grid", n, n);
		Ok(ConnectivityGrid {
			n,
			forest: SiteForest::make_singletons(n * n),
			opened: 0,
		})
	}

	fn index_for(&self, row: usize, col: usize) -> Result<usize, GridError> {
		if row < 1 || row > self.n || col < 1 || col > self.n {
			return Err(GridError::OutOfRange { row, col, n: self.n });
		}
		Ok((row - 1) * self.n + (col - 1))
	}

	// up, down, left, right; off the top is TOP, off the bottom is BOTTOM,
	// off either side is nothing
	fn neighbors_of(&self, row: usize, col: usize) -> Vec<usize> {
		let mut results = Vec::with_capacity(4);
		results.push(if row == 1 {
			self.forest.top()
		} else {
			(row - 2) * self.n + (col - 1)
		});
		results.push(if row == self.n {
			self.forest.bottom()
		} else {
			row * self.n + (col - 1)
		});
		if col > 1 {
			results.push((row - 1) * self.n + (col - 2));
		}
		if col < self.n {
			results.push((row - 1) * self.n + col);
		}
		results
	}

	pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
		let site = self.index_for(row, col)?;
		if self.forest.sites[site].open {
			return Ok(());
		}
		self.forest.sites[site].open = true;
		self.opened += 1;
		for neighbor in self.neighbors_of(row, col) {
			if self.forest.sites[neighbor].open {
				self.forest.unite(neighbor, site);
			}
		}
		debug!("opened ({}, {}), {} open", row, col, self.opened);
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
		let site = self.index_for(row, col)?;
		Ok(self.forest.sites[site].open)
	}

	pub fn is_full(&self, row: usize, col: usize) -> Result<bool, GridError> {
		let site = self.index_for(row, col)?;
		Ok(self.forest.sites[site].full)
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.opened
	}

	pub fn percolates(&self) -> bool {
		self.forest.connected(self.forest.top(), self.forest.bottom())
	}

	pub fn size(&self) -> usize {
		self.n
	}

	/// Are the two sites in the same set? Closed sites are only ever
	/// connected to themselves.
	pub fn connected(&self, a: (usize, usize), b: (usize, usize)) -> Result<bool, GridError> {
		let a = self.index_for(a.0, a.1)?;
		let b = self.index_for(b.0, b.1)?;
		Ok(self.forest.connected(a, b))
	}
}

impl Percolation for ConnectivityGrid {
	fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
		ConnectivityGrid::open(self, row, col)
	}

	fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
		ConnectivityGrid::is_open(self, row, col)
	}

	fn is_full(&self, row: usize, col: usize) -> Result<bool, GridError> {
		ConnectivityGrid::is_full(self, row, col)
	}

	fn number_of_open_sites(&self) -> usize {
		self.opened
	}

	fn percolates(&self) -> bool {
		ConnectivityGrid::percolates(self)
	}

	fn size(&self) -> usize {
		self.n
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn open_all(grid: &mut ConnectivityGrid, sites: &[(usize, usize)]) {
		for &(row, col) in sites {
			grid.open(row, col).unwrap();
		}
	}

	#[test]
	fn zero_size_is_rejected() {
		assert_eq!(ConnectivityGrid::new(0).unwrap_err(), GridError::InvalidSize { n: 0 });
	}

	#[test]
	fn fresh_grid_is_closed() {
		for n in 1..6 {
			let grid = ConnectivityGrid::new(n).unwrap();
			assert_eq!(grid.number_of_open_sites(), 0);
			assert!(!grid.percolates());
			for row in 1..=n {
				for col in 1..=n {
					assert!(!grid.is_open(row, col).unwrap());
					assert!(!grid.is_full(row, col).unwrap());
				}
			}
		}
	}

	#[test]
	fn single_site_percolates_once_open() {
		let mut grid = ConnectivityGrid::new(1).unwrap();
		grid.open(1, 1).unwrap();
		assert!(grid.percolates());
		assert!(grid.is_full(1, 1).unwrap());
		assert_eq!(grid.number_of_open_sites(), 1);
	}

	#[test]
	fn middle_column_percolates() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		open_all(&mut grid, &[(1, 2), (2, 2)]);
		assert!(!grid.percolates());
		grid.open(3, 2).unwrap();
		assert!(grid.percolates());
		for row in 1..=3 {
			assert!(grid.is_full(row, 2).unwrap());
		}
	}

	#[test]
	fn disconnected_corners_do_not_percolate() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		open_all(&mut grid, &[(1, 1), (3, 1)]);
		assert!(!grid.percolates());
		assert_eq!(grid.number_of_open_sites(), 2);
	}

	#[test]
	fn open_is_idempotent() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		grid.open(2, 2).unwrap();
		grid.open(2, 2).unwrap();
		assert_eq!(grid.number_of_open_sites(), 1);
		assert!(grid.is_open(2, 2).unwrap());
		assert!(!grid.is_full(2, 2).unwrap());
	}

	#[test]
	fn out_of_range_leaves_state_alone() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		grid.open(1, 1).unwrap();
		assert_eq!(grid.open(0, 1), Err(GridError::OutOfRange { row: 0, col: 1, n: 3 }));
		assert_eq!(grid.open(4, 1), Err(GridError::OutOfRange { row: 4, col: 1, n: 3 }));
		assert_eq!(grid.open(1, 4), Err(GridError::OutOfRange { row: 1, col: 4, n: 3 }));
		assert_eq!(grid.is_open(1, 0), Err(GridError::OutOfRange { row: 1, col: 0, n: 3 }));
		assert!(grid.is_full(0, 0).is_err());
		assert_eq!(grid.number_of_open_sites(), 1);
		assert!(grid.is_open(1, 1).unwrap());
	}

	#[test]
	fn no_wraparound_between_columns() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		open_all(&mut grid, &[(1, 3), (2, 1)]);
		assert!(!grid.connected((1, 3), (2, 1)).unwrap());
		assert!(!grid.is_full(2, 1).unwrap());
	}

	#[test]
	fn bottom_row_sites_are_marked_full() {
		// the bottom sentinel starts full, so touching it fills the site
		let mut grid = ConnectivityGrid::new(3).unwrap();
		grid.open(3, 1).unwrap();
		assert!(grid.is_full(3, 1).unwrap());
		assert!(!grid.percolates());
	}

	#[test]
	fn members_below_a_filled_root_keep_their_flag() {
		let mut grid = ConnectivityGrid::new(3).unwrap();
		open_all(&mut grid, &[(2, 1), (2, 2), (1, 2)]);
		assert!(grid.is_full(1, 2).unwrap());
		assert!(grid.is_full(2, 2).unwrap());
		// (2, 1) hangs under (2, 2) and is reachable from the top, but its own
		// flag was never written
		assert!(grid.connected((2, 1), (1, 2)).unwrap());
		assert!(!grid.is_full(2, 1).unwrap());
	}

	#[test]
	fn trait_object_drives_the_grid() {
		let mut grid = ConnectivityGrid::new(2).unwrap();
		{
			let system: &mut dyn Percolation = &mut grid;
			system.open(1, 1).unwrap();
			system.open(2, 1).unwrap();
			assert_eq!(system.size(), 2);
			assert_eq!(system.number_of_open_sites(), 2);
		}
		assert!(grid.percolates());
	}
}

// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Weighted quick-union with path halving. The last two slots of the arena are
// the virtual TOP and BOTTOM sites; they only ever become children of each
// other, so percolation stays a single root comparison.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
	pub open: bool,
	pub full: bool,
	pub parent: usize,
	pub size: usize,
}

impl Site {
	fn closed(index: usize) -> Site {
		Site { open: false, full: false, parent: index, size: 1 }
	}

	fn sentinel(index: usize) -> Site {
		Site { open: true, full: true, parent: index, size: 1 }
	}
}

#[derive(Debug)]
pub struct SiteForest {
	pub cells: usize,
	pub sites: Vec<Site>,
}

impl SiteForest {
	pub fn make_singletons(cells: usize) -> SiteForest {
		let mut sites: Vec<Site> = (0..cells).map(Site::closed).collect();
		sites.push(Site::sentinel(cells));
		sites.push(Site::sentinel(cells + 1));
		SiteForest { cells, sites }
	}

	pub fn top(&self) -> usize {
		self.cells
	}

	pub fn bottom(&self) -> usize {
		self.cells + 1
	}

	pub fn is_sentinel(&self, x: usize) -> bool {
		x >= self.cells
	}

	/// Root of `x`, halving the path on the way up.
	pub fn find(&mut self, mut x: usize) -> usize {
		loop {
			let parent = self.sites[x].parent;
			let grandparent = self.sites[parent].parent;
			if parent == grandparent {
				return parent;
			}
			self.sites[x].parent = grandparent;
			x = parent;
		}
	}

	/// Root of `x` without touching any parent pointer.
	pub fn root(&self, mut x: usize) -> usize {
		while self.sites[x].parent != x {
			x = self.sites[x].parent;
		}
		x
	}

	/// Merges the sets holding `x` and `y`.
	///
	/// Fullness is read from the inputs and written to both roots before the
	/// merge. Members below those roots keep whatever flag they had.
	pub fn unite(&mut self, x: usize, y: usize) {
		let fill = self.sites[x].full || self.sites[y].full;
		let x_root = self.find(x);
		let y_root = self.find(y);
		if fill {
			self.sites[x_root].full = true;
			self.sites[y_root].full = true;
		}
		if x_root == y_root {
			return;
		}
		if self.is_sentinel(x_root) {
			self.attach(y_root, x_root);
		} else if self.is_sentinel(y_root) {
			self.attach(x_root, y_root);
		} else if self.sites[x_root].size > self.sites[y_root].size {
			self.attach(y_root, x_root);
		} else {
			self.attach(x_root, y_root);
		}
	}

	pub fn connected(&self, x: usize, y: usize) -> bool {
		self.root(x) == self.root(y)
	}

	fn attach(&mut self, child: usize, parent: usize) {
		trace!("attach {} (size {}) under {}", child, self.sites[child].size, parent);
		self.sites[parent].size += self.sites[child].size;
		self.sites[child].parent = parent;
	}
}

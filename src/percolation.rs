//! A percolation system: an n-by-n grid of sites which are opened one at a
//! time, with connectivity between open sites tracked incrementally.
//!
//! The grid percolates once some chain of open, edge-adjacent sites connects
//! the top row to the bottom row. Instead of searching the grid on every
//! query, two union-find forests are kept up to date as sites open. Both
//! forests share every union between real sites; they differ only in which
//! virtual nodes take part:
//!
//! - `sites` joins the top row to a virtual top node and the bottom row to a
//!   virtual bottom node, so [`Percolation::percolates`] is a single
//!   representative comparison.
//! - `full_sites` joins the top row only, and answers [`Percolation::is_full`]
//!   without ever seeing a path through the virtual bottom node. A single
//!   shared forest would report any bottom-connected site as full once the
//!   system percolates ("backwash").

use crate::union_find::UnionFind;

/// Forest id of the virtual node joined to the whole top row.
const TOP_SITE: usize = 0;

/// An n-by-n grid of sites, each either blocked or open. Sites start blocked
/// and can only ever be opened; nothing closes a site again.
///
/// Rows and columns are 1-indexed, matching the usual statement of the
/// percolation problem. Every public method taking coordinates returns an
/// `Err` for coordinates outside `1..=n`.
#[derive(Clone, Debug)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    /// Real sites plus virtual top and bottom nodes; answers `percolates`.
    sites: UnionFind,
    /// Real sites plus the virtual top node only; answers `is_full`.
    full_sites: UnionFind,
    bottom_site: usize,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    pub fn new(n: usize) -> Result<Percolation, &'static str> {
        if n == 0 {
            return Err("Grid size must be at least 1");
        }
        Ok(Percolation {
            n,
            open: vec![false; n * n],
            open_sites: 0,
            sites: UnionFind::new(n * n + 2),
            full_sites: UnionFind::new(n * n + 1),
            bottom_site: n * n + 1,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site at (`row`, `col`) if it is not open already, joining it
    /// to each of its open neighbors. Opening an open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), &'static str> {
        self.validate(row, col)?;
        if self.open[self.cell(row, col)] {
            return Ok(());
        }
        let source = self.site(row, col);
        let cell = self.cell(row, col);
        self.open[cell] = true;
        self.open_sites += 1;

        self.connect_neighbor(source, row, col - 1);
        self.connect_neighbor(source, row, col + 1);
        self.connect_neighbor(source, row - 1, col);
        self.connect_neighbor(source, row + 1, col);

        if row == 1 {
            self.sites.union(TOP_SITE, source);
            self.full_sites.union(TOP_SITE, source);
        }
        // The virtual bottom node exists in `sites` only; `full_sites` must
        // never learn that the bottom row is connected to anything below it.
        if row == self.n {
            self.sites.union(self.bottom_site, source);
        }
        Ok(())
    }

    /// Whether the site at (`row`, `col`) is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, &'static str> {
        self.validate(row, col)?;
        Ok(self.open[self.cell(row, col)])
    }

    /// Whether the site at (`row`, `col`) is full, meaning open and connected
    /// to the top row through a chain of open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, &'static str> {
        self.validate(row, col)?;
        if !self.open[self.cell(row, col)] {
            return Ok(false);
        }
        let source = self.site(row, col);
        Ok(self.full_sites.find(source) == self.full_sites.find(TOP_SITE))
    }

    /// How many sites have been opened so far. O(1).
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Whether some chain of open sites connects the top row to the bottom
    /// row.
    pub fn percolates(&mut self) -> bool {
        self.sites.find(TOP_SITE) == self.sites.find(self.bottom_site)
    }

    // Forest id of a real site. Real sites occupy 1..=n*n, leaving 0 for the
    // virtual top node and n*n+1 for the virtual bottom node.
    fn site(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    // Index of a site in the `open` vector.
    fn cell(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    // Joins `source` to the site at (`row`, `col`) in both forests if that
    // site exists and is open. Callers pass all four compass neighbors
    // unconditionally; a candidate off the edge of the grid is no neighbor
    // at all rather than an error, so it is skipped here and never reported.
    fn connect_neighbor(&mut self, source: usize, row: usize, col: usize) {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return;
        }
        if self.open[self.cell(row, col)] {
            let neighbor = self.site(row, col);
            self.sites.union(neighbor, source);
            self.full_sites.union(neighbor, source);
        }
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), &'static str> {
        if row < 1 || row > self.n {
            return Err("Row index is out of bounds");
        }
        if col < 1 || col > self.n {
            return Err("Column index is out of bounds");
        }
        Ok(())
    }
}

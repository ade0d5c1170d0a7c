//! This is a crate used to estimate percolation thresholds of square grids
//! with Monte Carlo simulation.
//!
//! A [`Percolation`] is an n-by-n grid of sites, all blocked at first, which
//! are opened one at a time. Connectivity between open sites is tracked
//! incrementally with union-find forests, so asking whether the system
//! percolates never walks the grid.
//!
//! Example usage:
//! ```
//! use percolate::Percolation;
//!
//! let mut system = Percolation::new(2).unwrap();
//! system.open(1, 1).unwrap();
//! assert!(!system.percolates());
//!
//! system.open(2, 1).unwrap();
//! assert!(system.percolates());
//! assert_eq!(system.number_of_open_sites(), 2);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod percolation;
pub mod stats;
pub mod union_find;

pub use percolation::Percolation;
pub use stats::PercolationStats;

//! Sudoku peer topology for build-time table generation.
//!
//! This crate computes, for every cell of the 9×9 grid, the cells that share a
//! row, column, or 3×3 box with it (its *peers*). The results feed the table
//! emitters in `peertab-emitter`, which serialize them as static data for a
//! SIMD constraint solver.
//!
//! # Overview
//!
//! - [`geometry`]: Grid dimensions and derived counts, all `const`.
//! - [`cell`]: The [`Cell`] index type (0-80, row-major).
//! - [`house`]: Rows, columns, and boxes, and the cells they contain.
//! - [`peer_set`]: [`PeerSet`], a 128-bit set of cells.
//! - [`resolver`]: The peer resolver, producing ordered [`IndexRow`]s and
//!   unordered [`PeerSet`]s.
//!
//! # Examples
//!
//! ```
//! use peertab_core::{Cell, PEER_COUNT, peer_set, resolve_peers};
//!
//! let peers = resolve_peers(Cell::new(0));
//! assert_eq!(peers.len(), PEER_COUNT);
//! assert_eq!(peers[0], Cell::new(1));
//!
//! let set = peer_set(Cell::new(40));
//! assert!(set.contains(Cell::new(30)));
//! assert!(!set.contains(Cell::new(40)));
//! ```

pub mod cell;
pub mod geometry;
pub mod house;
pub mod peer_set;
pub mod resolver;

pub use self::{
    cell::Cell,
    geometry::{BOX_SIZE, CELL_COUNT, PEER_COUNT, SIDE},
    house::House,
    peer_set::PeerSet,
    resolver::{IndexRow, peer_set, resolve_peers},
};

//! Peer resolution.
//!
//! [`resolve_peers`] produces a cell's peers in the fixed order consumed by the
//! index table: the other cells of its row, then of its column, then the box
//! cells not already listed, in box scan order.
//!
//! The geometry is fixed, so a wrong peer count, a self reference, or a
//! duplicate can only come from a logic error. Those conditions panic rather
//! than returning an error: a corrupted table would silently break every
//! constraint check in the consuming solver.

use crate::{
    Cell, House, PeerSet,
    geometry::{BOX_PEER_COUNT, COLUMN_PEER_COUNT, PEER_COUNT, ROW_PEER_COUNT},
};

/// The ordered peers of one cell.
pub type IndexRow = [Cell; PEER_COUNT];

/// Returns the peers of `cell` in index table order.
///
/// # Panics
///
/// Panics if the computed peers violate the grid geometry (wrong count,
/// self reference, or duplicates).
///
/// # Examples
///
/// ```
/// use peertab_core::{Cell, resolve_peers};
///
/// let peers: Vec<_> = resolve_peers(Cell::new(0)).map(Cell::index).to_vec();
/// assert_eq!(
///     peers,
///     [1, 2, 3, 4, 5, 6, 7, 8, 9, 18, 27, 36, 45, 54, 63, 72, 10, 11, 19, 20]
/// );
/// ```
#[must_use]
pub fn resolve_peers(cell: Cell) -> IndexRow {
    let row_peers = House::row_of(cell)
        .cells()
        .filter(|&c| c != cell)
        .collect::<Vec<_>>();
    let column_peers = House::column_of(cell)
        .cells()
        .filter(|&c| c != cell)
        .collect::<Vec<_>>();

    let seen = row_peers
        .iter()
        .chain(&column_peers)
        .copied()
        .collect::<PeerSet>();
    let box_peers = House::box_of(cell)
        .cells()
        .filter(|&c| c != cell && !seen.contains(c))
        .collect::<Vec<_>>();

    assert_eq!(
        (row_peers.len(), column_peers.len(), box_peers.len()),
        (ROW_PEER_COUNT, COLUMN_PEER_COUNT, BOX_PEER_COUNT),
        "unexpected row/column/box peer counts for cell {cell}"
    );

    let peers = row_peers
        .into_iter()
        .chain(column_peers)
        .chain(box_peers)
        .collect::<Vec<_>>();
    verify_peers(cell, &peers);

    match IndexRow::try_from(peers) {
        Ok(row) => row,
        Err(peers) => panic!("cell {cell} has {} peers, expected {PEER_COUNT}", peers.len()),
    }
}

/// Returns the peers of `cell` as an unordered set.
///
/// # Panics
///
/// Panics under the same conditions as [`resolve_peers`].
#[must_use]
pub fn peer_set(cell: Cell) -> PeerSet {
    resolve_peers(cell).into_iter().collect()
}

fn verify_peers(cell: Cell, peers: &[Cell]) {
    assert_eq!(
        peers.len(),
        PEER_COUNT,
        "cell {cell} has {} peers, expected {PEER_COUNT}",
        peers.len()
    );
    assert!(!peers.contains(&cell), "cell {cell} is listed as its own peer");
    let distinct = peers.iter().copied().collect::<PeerSet>();
    assert_eq!(
        distinct.len(),
        peers.len(),
        "cell {cell} has duplicate peers"
    );
}

//! Grid geometry constants.
//!
//! Only [`BOX_SIZE`] is chosen; every other dimension and count is derived from
//! it, so the peer count and the box scan offsets stay consistent if the box
//! size ever changes.

/// Side length of a box, in cells.
pub const BOX_SIZE: usize = 3;

/// Side length of the grid, in cells.
pub const SIDE: usize = BOX_SIZE * BOX_SIZE;

/// Number of cells in the grid.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Number of peers sharing a cell's row.
pub const ROW_PEER_COUNT: usize = SIDE - 1;

/// Number of peers sharing a cell's column.
pub const COLUMN_PEER_COUNT: usize = SIDE - 1;

/// Number of box peers that share neither the cell's row nor its column.
pub const BOX_PEER_COUNT: usize = (BOX_SIZE - 1) * (BOX_SIZE - 1);

/// Number of distinct peers of every cell.
pub const PEER_COUNT: usize = ROW_PEER_COUNT + COLUMN_PEER_COUNT + BOX_PEER_COUNT;

/// Offsets of the cells of a box from its top-left cell, in row-major order.
///
/// For the standard grid this is `[0, 1, 2, 9, 10, 11, 18, 19, 20]`.
pub const BOX_OFFSETS: [usize; SIDE] = {
    let mut offsets = [0; SIDE];
    let mut i = 0;
    while i < SIDE {
        offsets[i] = (i / BOX_SIZE) * SIDE + i % BOX_SIZE;
        i += 1;
    }
    offsets
};

// Cells are stored as `u8`, emitted as `int8_t`, and collected into a `u128` set.
const _: () = assert!(CELL_COUNT <= 128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        assert_eq!(SIDE, 9);
        assert_eq!(CELL_COUNT, 81);
        assert_eq!(PEER_COUNT, 20);
        assert_eq!(BOX_PEER_COUNT, 4);
    }

    #[test]
    fn test_box_offsets() {
        assert_eq!(BOX_OFFSETS, [0, 1, 2, 9, 10, 11, 18, 19, 20]);
    }
}

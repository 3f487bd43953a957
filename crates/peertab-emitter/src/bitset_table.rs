//! The bitset table: every cell's peers as a 128-bit set split into two words.
//!
//! The word order matches a 16-byte aligned `uint64_t data[2]` bitset whose
//! `data[1]` holds cells 0-63 and `data[0]` holds cells 64-127, so a row can be
//! loaded straight into one 128-bit register.

use std::io::{self, Write};

use peertab_core::{CELL_COUNT, Cell, PeerSet, peer_set};

use crate::table::{BuildMode, Table};

/// Alignment of the bitset table, in bytes.
pub const BITSET_ALIGNMENT: usize = 16;

/// Two 64-bit words: `[cells 64-127, cells 0-63]`.
pub type BitsetRow = [u64; 2];

/// One [`BitsetRow`] per cell, in ascending cell order.
///
/// # Examples
///
/// ```
/// use peertab_core::Cell;
/// use peertab_emitter::{BitsetTable, BuildMode};
///
/// let table = BitsetTable::build(BuildMode::Serial);
/// let [high, low] = table.row(Cell::new(80));
/// assert_eq!(high.count_ones() + low.count_ones(), 20);
/// assert_ne!(high & (1 << (79 - 64)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitsetTable {
    rows: Vec<BitsetRow>,
}

impl BitsetTable {
    /// Builds the bitset rows of every cell.
    ///
    /// # Panics
    ///
    /// Panics if the resolver detects a geometry invariant violation.
    #[must_use]
    pub fn build(mode: BuildMode) -> Self {
        let rows = mode.rows(|cell| split_words(peer_set(cell)));
        log::debug!("built bitset table: {CELL_COUNT} x 2 words");
        Self { rows }
    }

    /// Returns all rows, indexed by cell.
    #[must_use]
    pub fn rows(&self) -> &[BitsetRow] {
        &self.rows
    }

    /// Returns the row for `cell`.
    #[must_use]
    pub fn row(&self, cell: Cell) -> BitsetRow {
        self.rows[cell.as_usize()]
    }
}

#[expect(clippy::cast_possible_truncation)]
fn split_words(set: PeerSet) -> BitsetRow {
    let bits = set.bits();
    [(bits >> 64) as u64, bits as u64]
}

impl Table for BitsetTable {
    fn write_c(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "_Alignas({BITSET_ALIGNMENT}) const uint64_t PEER_BITS[{CELL_COUNT}][2] = {{"
        )?;
        let rows = self
            .rows
            .iter()
            .map(|[high, low]| format!("    {{ {high:#018x}, {low:#018x} }}"))
            .collect::<Vec<_>>();
        writeln!(out, "{}", rows.join(",\n"))?;
        writeln!(out, "}};")
    }

    fn write_rust(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "/// Peer bitsets with the alignment required for 128-bit loads.")?;
        writeln!(out, "#[repr(C, align({BITSET_ALIGNMENT}))]")?;
        writeln!(out, "pub struct AlignedPeerBits(pub [[u64; 2]; {CELL_COUNT}]);")?;
        writeln!(out)?;
        writeln!(
            out,
            "/// Per-cell peer bitsets: `[cells 64-127, cells 0-63]`, \
             bit `n % 64` set for peer `n`."
        )?;
        writeln!(out, "pub static PEER_BITS: AlignedPeerBits = AlignedPeerBits([")?;
        for [high, low] in &self.rows {
            writeln!(out, "    [{high:#018x}, {low:#018x}],")?;
        }
        writeln!(out, "]);")
    }
}

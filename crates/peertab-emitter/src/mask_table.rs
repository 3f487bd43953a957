//! The mask table: every cell's peers as a padded row of 16-bit lane masks.
//!
//! A consumer loads a row group by group into vector registers and ANDs or ORs
//! it against candidate bitmaps, so eliminating a digit from all peers needs
//! no scalar gather.

use std::io::{self, Write};

use peertab_core::{CELL_COUNT, Cell, PEER_COUNT, peer_set};

use crate::{
    layout::{MASK_SENTINEL, MaskLayout},
    table::{BuildMode, Table, join},
};

/// One padded mask row per cell, in ascending cell order.
///
/// Entry `p` of row `c` is [`MASK_SENTINEL`] when cell `p` is a peer of `c`,
/// and zero otherwise. Entries at or beyond position 81 are padding and always
/// zero.
///
/// # Examples
///
/// ```
/// use peertab_core::Cell;
/// use peertab_emitter::{BuildMode, MaskLayout, MaskTable};
///
/// let table = MaskTable::build(MaskLayout::AVX2, BuildMode::Serial);
/// let row = table.row(Cell::new(0));
/// assert_eq!(row.len(), 96);
/// assert_eq!(row[1], 0xFFFF);
/// assert_eq!(row[0], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTable {
    layout: MaskLayout,
    entries: Vec<u16>,
}

impl MaskTable {
    /// Builds the mask rows of every cell under `layout`.
    ///
    /// # Panics
    ///
    /// Panics if the resolver detects a geometry invariant violation.
    #[must_use]
    pub fn build(layout: MaskLayout, mode: BuildMode) -> Self {
        let rows = mode.rows(|cell| {
            let row = mask_row(cell, layout);
            log::trace!("mask row {cell}: {} peers", row.iter().filter(|&&e| e != 0).count());
            row
        });
        let entries = rows.concat();
        log::debug!(
            "built mask table: {CELL_COUNT} x {} ({} lanes, {}-byte aligned)",
            layout.padded_width(),
            layout.lane_width(),
            layout.alignment()
        );
        Self { layout, entries }
    }

    /// Returns the layout the table was built with.
    #[must_use]
    pub fn layout(&self) -> MaskLayout {
        self.layout
    }

    /// Returns the row for `cell`.
    #[must_use]
    pub fn row(&self, cell: Cell) -> &[u16] {
        let width = self.layout.padded_width();
        let start = cell.as_usize() * width;
        &self.entries[start..start + width]
    }

    /// Returns all rows, in cell order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u16]> {
        self.entries.chunks_exact(self.layout.padded_width())
    }

    fn formatted_groups(row: &[u16], lane_width: usize) -> Vec<String> {
        row.chunks(lane_width)
            .map(|group| join(group, |entry| format!("0x{entry:04X}")))
            .collect()
    }
}

fn mask_row(cell: Cell, layout: MaskLayout) -> Vec<u16> {
    let peers = peer_set(cell);
    let mut row = vec![0; layout.padded_width()];
    for peer in peers {
        row[peer.as_usize()] = MASK_SENTINEL;
    }
    debug_assert_eq!(row.iter().filter(|&&e| e == MASK_SENTINEL).count(), PEER_COUNT);
    row
}

impl Table for MaskTable {
    fn write_c(&self, out: &mut dyn Write) -> io::Result<()> {
        let layout = self.layout;
        let width = layout.padded_width();
        writeln!(out, "const int MASK_LANE_WIDTH = {};", layout.lane_width())?;
        writeln!(out, "const int MASK_GROUPS = {};", layout.group_count())?;
        writeln!(out, "const int MASK_WIDTH = {width};")?;
        writeln!(
            out,
            "_Alignas({}) const uint16_t MASKS[{CELL_COUNT}][{width}] = {{",
            layout.alignment()
        )?;
        let rows = self
            .rows()
            .enumerate()
            .map(|(cell, row)| {
                let groups = Self::formatted_groups(row, layout.lane_width())
                    .into_iter()
                    .map(|group| format!("        {group}"))
                    .collect::<Vec<_>>();
                format!("    {{ /* {cell} */\n{}\n    }}", groups.join(",\n"))
            })
            .collect::<Vec<_>>();
        writeln!(out, "{}", rows.join(",\n"))?;
        writeln!(out, "}};")
    }

    fn write_rust(&self, out: &mut dyn Write) -> io::Result<()> {
        let layout = self.layout;
        writeln!(out, "/// Entries processed per vector instruction.")?;
        writeln!(out, "pub const MASK_LANE_WIDTH: usize = {};", layout.lane_width())?;
        writeln!(out, "/// Lane-width groups per mask row.")?;
        writeln!(out, "pub const MASK_GROUPS: usize = {};", layout.group_count())?;
        writeln!(out, "/// Entries per mask row, including padding.")?;
        writeln!(out, "pub const MASK_WIDTH: usize = MASK_LANE_WIDTH * MASK_GROUPS;")?;
        writeln!(out)?;
        writeln!(out, "/// Mask rows with the alignment required for vector loads.")?;
        writeln!(out, "#[repr(C, align({}))]", layout.alignment())?;
        writeln!(
            out,
            "pub struct AlignedMasks(pub [[u16; MASK_WIDTH]; {CELL_COUNT}]);"
        )?;
        writeln!(out)?;
        writeln!(out, "/// Per-cell peer masks: `0xFFFF` at peer positions, zero elsewhere.")?;
        writeln!(out, "pub static MASKS: AlignedMasks = AlignedMasks([")?;
        for (cell, row) in self.rows().enumerate() {
            writeln!(out, "    // {cell}")?;
            writeln!(out, "    [")?;
            for group in Self::formatted_groups(row, layout.lane_width()) {
                writeln!(out, "        {group},")?;
            }
            writeln!(out, "    ],")?;
        }
        writeln!(out, "]);")
    }
}

#[cfg(test)]
mod tests {
    use peertab_core::resolve_peers;

    use super::*;
    use crate::table::Format;

    fn render(table: &MaskTable, format: Format) -> String {
        let mut out = Vec::new();
        table.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_match_index_rows() {
        let table = MaskTable::build(MaskLayout::AVX2, BuildMode::Serial);
        for cell in Cell::all() {
            let peers = resolve_peers(cell);
            let row = table.row(cell);
            for (p, &entry) in row.iter().enumerate().take(CELL_COUNT) {
                let is_peer = peers.iter().any(|peer| peer.as_usize() == p);
                assert_eq!(entry == MASK_SENTINEL, is_peer, "cell {cell}, position {p}");
                assert!(entry == 0 || entry == MASK_SENTINEL);
            }
        }
    }

    #[test]
    fn test_padding_is_zero() {
        let table = MaskTable::build(MaskLayout::AVX2, BuildMode::Serial);
        for row in table.rows() {
            assert_eq!(row.len(), 96);
            assert!(row[CELL_COUNT..].iter().all(|&e| e == 0));
            assert_eq!(row.iter().filter(|&&e| e != 0).count(), PEER_COUNT);
        }
    }

    #[test]
    fn test_uniform_width_for_other_layouts() {
        let layout = MaskLayout::new(8, 16).unwrap();
        let table = MaskTable::build(layout, BuildMode::Parallel);
        assert_eq!(table.rows().len(), CELL_COUNT);
        assert!(table.rows().all(|row| row.len() == 88 && row.len() % 8 == 0));
    }

    #[test]
    fn test_parallel_matches_serial() {
        assert_eq!(
            MaskTable::build(MaskLayout::AVX2, BuildMode::Serial),
            MaskTable::build(MaskLayout::AVX2, BuildMode::Parallel)
        );
    }

    #[test]
    fn test_c_layout() {
        let text = render(&MaskTable::build(MaskLayout::AVX2, BuildMode::Serial), Format::C);
        assert!(text.starts_with(concat!(
            "const int MASK_LANE_WIDTH = 16;\n",
            "const int MASK_GROUPS = 6;\n",
            "const int MASK_WIDTH = 96;\n",
        )));
        assert!(text.contains("_Alignas(32) const uint16_t MASKS[81][96] = {\n    { /* 0 */\n"));
        assert!(text.contains(concat!(
            "        0x0000, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF,",
            " 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0000, 0x0000, 0x0000, 0x0000,\n",
        )));
        assert_eq!(text.matches("0xFFFF").count(), CELL_COUNT * PEER_COUNT);
        assert!(text.ends_with("    }\n};\n"));
    }

    #[test]
    fn test_rust_layout() {
        let text = render(&MaskTable::build(MaskLayout::AVX2, BuildMode::Serial), Format::Rust);
        assert!(text.contains(concat!(
            "#[repr(C, align(32))]\n",
            "pub struct AlignedMasks(pub [[u16; MASK_WIDTH]; 81]);",
        )));
        assert!(text.contains(concat!(
            "pub static MASKS: AlignedMasks = AlignedMasks([\n",
            "    // 0\n",
            "    [\n",
        )));
        assert_eq!(text.matches("0xFFFF").count() - 1, CELL_COUNT * PEER_COUNT);
        assert!(text.ends_with("    ],\n]);\n"));
    }
}

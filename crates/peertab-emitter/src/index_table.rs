//! The index table: every cell's peers as a list of cell indices.

use std::io::{self, Write};

use peertab_core::{CELL_COUNT, Cell, IndexRow, PEER_COUNT, resolve_peers};

use crate::table::{BuildMode, Table, join};

/// One [`IndexRow`] per cell, in ascending cell order.
///
/// # Examples
///
/// ```
/// use peertab_core::Cell;
/// use peertab_emitter::{BuildMode, Format, IndexTable, Table};
///
/// let table = IndexTable::build(BuildMode::Serial);
/// assert_eq!(table.row(Cell::new(0))[8], Cell::new(9));
///
/// let mut out = Vec::new();
/// table.write(Format::C, &mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("const int COUNT = 20;"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    rows: Vec<IndexRow>,
}

impl IndexTable {
    /// Resolves the peers of every cell.
    ///
    /// # Panics
    ///
    /// Panics if the resolver detects a geometry invariant violation.
    #[must_use]
    pub fn build(mode: BuildMode) -> Self {
        let rows = mode.rows(|cell| {
            let row = resolve_peers(cell);
            log::trace!("index row {cell}: {row:?}");
            row
        });
        log::debug!("built index table: {CELL_COUNT} x {PEER_COUNT}");
        Self { rows }
    }

    /// Returns all rows, indexed by cell.
    #[must_use]
    pub fn rows(&self) -> &[IndexRow] {
        &self.rows
    }

    /// Returns the row for `cell`.
    #[must_use]
    pub fn row(&self, cell: Cell) -> &IndexRow {
        &self.rows[cell.as_usize()]
    }

    fn formatted_rows(&self) -> impl Iterator<Item = String> {
        self.rows
            .iter()
            .map(|row| join(row, |cell| format!("{:3}", cell.index())))
    }
}

impl Table for IndexTable {
    fn write_c(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "const int COUNT = {PEER_COUNT};")?;
        writeln!(out, "const int8_t INDICES[{CELL_COUNT}][{PEER_COUNT}] = {{")?;
        let rows = self
            .formatted_rows()
            .map(|inner| format!("    {{ {inner} }}"))
            .collect::<Vec<_>>();
        writeln!(out, "{}", rows.join(",\n"))?;
        writeln!(out, "}};")
    }

    fn write_rust(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "/// Number of peers of every cell.")?;
        writeln!(out, "pub const COUNT: usize = {PEER_COUNT};")?;
        writeln!(out)?;
        writeln!(
            out,
            "/// Peers of each cell: row peers, column peers, then remaining box peers."
        )?;
        writeln!(out, "pub static INDICES: [[i8; COUNT]; {CELL_COUNT}] = [")?;
        for inner in self.formatted_rows() {
            writeln!(out, "    [{inner}],")?;
        }
        writeln!(out, "];")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Format;

    fn render(table: &IndexTable, format: Format) -> String {
        let mut out = Vec::new();
        table.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_follow_cell_order() {
        let table = IndexTable::build(BuildMode::Serial);
        assert_eq!(table.rows().len(), CELL_COUNT);
        for cell in Cell::all() {
            assert_eq!(*table.row(cell), resolve_peers(cell));
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        assert_eq!(
            IndexTable::build(BuildMode::Serial),
            IndexTable::build(BuildMode::Parallel)
        );
    }

    #[test]
    fn test_c_layout() {
        let text = render(&IndexTable::build(BuildMode::Serial), Format::C);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 + CELL_COUNT + 1);
        assert_eq!(lines[0], "const int COUNT = 20;");
        assert_eq!(lines[1], "const int8_t INDICES[81][20] = {");
        assert_eq!(
            lines[2],
            concat!(
                "    {   1,   2,   3,   4,   5,   6,   7,   8,   9,",
                "  18,  27,  36,  45,  54,  63,  72,  10,  11,  19,  20 },",
            )
        );
        assert!(lines[CELL_COUNT + 1].ends_with("  70 }"));
        assert_eq!(lines[CELL_COUNT + 2], "};");
    }

    #[test]
    fn test_rust_layout() {
        let text = render(&IndexTable::build(BuildMode::Serial), Format::Rust);
        assert!(text.contains("pub const COUNT: usize = 20;\n"));
        assert!(text.contains("pub static INDICES: [[i8; COUNT]; 81] = [\n"));
        assert!(text.contains(concat!(
            "    [ 36,  37,  38,  39,  41,  42,  43,  44,   4,",
            "  13,  22,  31,  49,  58,  67,  76,  30,  32,  48,  50],\n",
        )));
        assert!(text.ends_with("];\n"));
    }
}

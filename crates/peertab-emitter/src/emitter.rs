//! Generation of a complete table file.

use std::io::{self, Write};

use crate::{
    BitsetTable, IndexTable, MaskLayout, MaskTable,
    table::{BuildMode, Format, Table},
};

bitflags::bitflags! {
    /// Selection of tables to emit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Tables: u8 {
        /// [`IndexTable`]: `COUNT` and `INDICES`.
        const INDEX = 0b0000_0001;
        /// [`MaskTable`]: `MASK_*` constants and `MASKS`.
        const MASK = 0b0000_0010;
        /// [`BitsetTable`]: `PEER_BITS`.
        const BITSET = 0b0000_0100;
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::all()
    }
}

/// Builds the selected tables and writes them as one source file.
///
/// The output depends only on the configuration, so emitting twice produces
/// byte-identical text.
///
/// # Examples
///
/// ```
/// use peertab_emitter::{Emitter, Format, Tables};
///
/// let emitter = Emitter::new(Format::C).with_tables(Tables::INDEX);
/// let text = String::from_utf8(emitter.emit_to_vec()?).unwrap();
/// assert!(text.contains("const int8_t INDICES[81][20]"));
/// assert!(!text.contains("MASKS"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emitter {
    format: Format,
    layout: MaskLayout,
    tables: Tables,
    mode: BuildMode,
}

impl Emitter {
    /// Creates an emitter for `format` with all tables, the AVX2 mask layout,
    /// and serial building.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Sets the mask table layout.
    #[must_use]
    pub fn with_layout(self, layout: MaskLayout) -> Self {
        Self { layout, ..self }
    }

    /// Sets which tables are emitted.
    #[must_use]
    pub fn with_tables(self, tables: Tables) -> Self {
        Self { tables, ..self }
    }

    /// Sets how rows are computed.
    #[must_use]
    pub fn with_mode(self, mode: BuildMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns the output format.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the selected tables.
    #[must_use]
    pub fn tables(&self) -> Tables {
        self.tables
    }

    /// Builds the selected tables and writes them to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    ///
    /// # Panics
    ///
    /// Panics if the resolver detects a geometry invariant violation.
    pub fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut tables: Vec<Box<dyn Table>> = Vec::new();
        if self.tables.contains(Tables::INDEX) {
            tables.push(Box::new(IndexTable::build(self.mode)));
        }
        if self.tables.contains(Tables::MASK) {
            tables.push(Box::new(MaskTable::build(self.layout, self.mode)));
        }
        if self.tables.contains(Tables::BITSET) {
            tables.push(Box::new(BitsetTable::build(self.mode)));
        }

        self.write_preamble(out)?;
        for table in &tables {
            writeln!(out)?;
            table.write(self.format, out)?;
        }
        Ok(())
    }

    /// Builds the selected tables and returns the complete file contents.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`Emitter::emit`].
    pub fn emit_to_vec(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.emit(&mut out)?;
        Ok(out)
    }

    fn write_preamble(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "// Generated by peertab. Do not edit.")?;
        match self.format {
            Format::C => {
                writeln!(out)?;
                writeln!(out, "#include <stdint.h>")
            }
            Format::Rust => Ok(()),
        }
    }
}

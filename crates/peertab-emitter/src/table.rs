//! Shared table plumbing: output formats, build modes, and the [`Table`] trait.

use std::io::{self, Write};

use peertab_core::Cell;
use rayon::prelude::*;

/// Source language of the emitted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Format {
    /// C header text: `stdint.h` types and `_Alignas` declarations.
    #[default]
    #[display("c")]
    C,
    /// Rust source text: `pub const` items and `#[repr(align)]` wrappers.
    #[display("rust")]
    Rust,
}

/// How table rows are computed.
///
/// Rows are independent, so both modes produce identical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// One cell after another on the calling thread.
    #[default]
    Serial,
    /// Cells spread over the rayon thread pool, joined in cell order.
    Parallel,
}

impl BuildMode {
    /// Computes one row per cell, in ascending cell order.
    pub(crate) fn rows<T, F>(self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Cell) -> T + Sync + Send,
    {
        match self {
            BuildMode::Serial => Cell::all().map(f).collect(),
            BuildMode::Parallel => Cell::all()
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(f)
                .collect(),
        }
    }
}

/// A generated table that can be serialized as source text.
pub trait Table {
    /// Writes the table as C declarations.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    fn write_c(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes the table as Rust items.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    fn write_rust(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes the table in `format`.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    fn write(&self, format: Format, out: &mut dyn Write) -> io::Result<()> {
        match format {
            Format::C => self.write_c(out),
            Format::Rust => self.write_rust(out),
        }
    }
}

/// Joins `items` with `", "`, formatting each with `f`.
pub(crate) fn join<T>(items: impl IntoIterator<Item = T>, f: impl Fn(T) -> String) -> String {
    items.into_iter().map(f).collect::<Vec<_>>().join(", ")
}

//! Static peer tables for SIMD Sudoku solvers.
//!
//! This crate drives the resolver from `peertab-core` over all 81 cells and
//! serializes the results as C or Rust source, ready to be compiled into a
//! solver without any runtime computation.
//!
//! # Tables
//!
//! - [`IndexTable`]: `81 × 20` cell indices, row peers, then column peers,
//!   then the remaining box peers.
//! - [`MaskTable`]: `81 × padded_width` 16-bit entries, `0xFFFF` at peer
//!   positions, padded to the [`MaskLayout`] lane width and aligned for vector
//!   loads.
//! - [`BitsetTable`]: `81 × 2` 64-bit words, one 128-bit peer set per cell.
//!
//! All three are built from the same resolver, so they describe the same
//! relation.
//!
//! # Examples
//!
//! ```
//! use peertab_emitter::{BuildMode, Emitter, Format, MaskLayout, Tables};
//!
//! let emitter = Emitter::new(Format::C)
//!     .with_tables(Tables::INDEX | Tables::MASK)
//!     .with_layout(MaskLayout::new(16, 32)?)
//!     .with_mode(BuildMode::Parallel);
//! let text = String::from_utf8(emitter.emit_to_vec()?).unwrap();
//! assert!(text.contains("_Alignas(32) const uint16_t MASKS[81][96]"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    bitset_table::{BITSET_ALIGNMENT, BitsetRow, BitsetTable},
    emitter::{Emitter, Tables},
    index_table::IndexTable,
    layout::{ENTRY_BYTES, LayoutError, MASK_SENTINEL, MAX_LANE_WIDTH, MaskLayout},
    mask_table::MaskTable,
    table::{BuildMode, Format, Table},
};

mod bitset_table;
mod emitter;
mod index_table;
mod layout;
mod mask_table;
mod table;

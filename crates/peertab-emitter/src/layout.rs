//! Padding and alignment of the mask table.
//!
//! Each mask row holds one 16-bit entry per grid cell, padded up to a multiple
//! of the consumer's SIMD lane width. The whole table is declared with an
//! alignment attribute; since every row has the same byte size, rows stay
//! aligned only when that size is a multiple of the alignment.

use std::mem;

use peertab_core::CELL_COUNT;

/// Size of one mask entry, in bytes.
pub const ENTRY_BYTES: usize = mem::size_of::<u16>();

/// Mask entry marking a peer position.
pub const MASK_SENTINEL: u16 = u16::MAX;

/// Largest accepted lane width. Wider lanes would only add padding groups.
pub const MAX_LANE_WIDTH: usize = CELL_COUNT.next_power_of_two();

/// Errors from an invalid [`MaskLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// Lane width was zero.
    #[display("lane width must be at least 1")]
    ZeroLaneWidth,
    /// Lane width exceeded [`MAX_LANE_WIDTH`].
    #[display("lane width must be at most {}, got {lane_width}", MAX_LANE_WIDTH)]
    LaneWidthTooLarge {
        /// Requested lane width.
        lane_width: usize,
    },
    /// Alignment was not a power of two, or smaller than one entry.
    #[display("alignment must be a power of two of at least 2 bytes, got {alignment}")]
    InvalidAlignment {
        /// Requested alignment, in bytes.
        alignment: usize,
    },
    /// Row byte size does not keep every row aligned.
    #[display(
        "mask rows of {row_bytes} bytes are not a multiple of the {alignment}-byte alignment"
    )]
    MisalignedRow {
        /// Byte size of one padded row.
        row_bytes: usize,
        /// Requested alignment, in bytes.
        alignment: usize,
    },
}

/// Lane width and alignment of the mask table.
///
/// # Examples
///
/// ```
/// use peertab_emitter::MaskLayout;
///
/// let layout = MaskLayout::AVX2;
/// assert_eq!(layout.padded_width(), 96);
/// assert_eq!(layout.group_count(), 6);
///
/// assert!(MaskLayout::new(8, 32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskLayout {
    lane_width: usize,
    alignment: usize,
}

impl MaskLayout {
    /// 16 lanes of 16 bits, 32-byte aligned: one 256-bit register per group.
    pub const AVX2: Self = Self {
        lane_width: 16,
        alignment: 32,
    };

    /// Creates a validated layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the lane width is zero or above
    /// [`MAX_LANE_WIDTH`], if the alignment is not a power of two of at least
    /// [`ENTRY_BYTES`], or if a padded row is not a whole number of alignment
    /// units.
    pub fn new(lane_width: usize, alignment: usize) -> Result<Self, LayoutError> {
        if lane_width == 0 {
            return Err(LayoutError::ZeroLaneWidth);
        }
        if lane_width > MAX_LANE_WIDTH {
            return Err(LayoutError::LaneWidthTooLarge { lane_width });
        }
        if !alignment.is_power_of_two() || alignment < ENTRY_BYTES {
            return Err(LayoutError::InvalidAlignment { alignment });
        }
        let layout = Self {
            lane_width,
            alignment,
        };
        let row_bytes = layout.row_bytes();
        if row_bytes % alignment != 0 {
            return Err(LayoutError::MisalignedRow {
                row_bytes,
                alignment,
            });
        }
        Ok(layout)
    }

    /// Returns the number of entries processed by one vector instruction.
    #[must_use]
    pub const fn lane_width(self) -> usize {
        self.lane_width
    }

    /// Returns the table alignment, in bytes.
    #[must_use]
    pub const fn alignment(self) -> usize {
        self.alignment
    }

    /// Returns the number of lane-width groups per row.
    #[must_use]
    pub const fn group_count(self) -> usize {
        CELL_COUNT.div_ceil(self.lane_width)
    }

    /// Returns the number of entries per row, including padding.
    #[must_use]
    pub const fn padded_width(self) -> usize {
        self.group_count() * self.lane_width
    }

    /// Returns the byte size of one row.
    #[must_use]
    pub const fn row_bytes(self) -> usize {
        self.padded_width() * ENTRY_BYTES
    }
}

impl Default for MaskLayout {
    fn default() -> Self {
        Self::AVX2
    }
}

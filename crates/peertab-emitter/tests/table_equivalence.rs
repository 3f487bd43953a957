//! Property tests checking that every table form describes the same relation.

use std::sync::LazyLock;

use peertab_core::{CELL_COUNT, Cell};
use peertab_emitter::{
    BitsetTable, BuildMode, IndexTable, MASK_SENTINEL, MaskLayout, MaskTable,
};
use proptest::prelude::*;

static INDEX: LazyLock<IndexTable> = LazyLock::new(|| IndexTable::build(BuildMode::Serial));
static MASKS: LazyLock<MaskTable> =
    LazyLock::new(|| MaskTable::build(MaskLayout::AVX2, BuildMode::Serial));
static BITS: LazyLock<BitsetTable> = LazyLock::new(|| BitsetTable::build(BuildMode::Serial));

fn cell() -> impl Strategy<Value = Cell> {
    (0u8..81).prop_map(Cell::new)
}

fn layout() -> impl Strategy<Value = MaskLayout> {
    (1usize..=64, 1u32..=7).prop_filter_map("row not a multiple of alignment", |(lanes, shift)| {
        MaskLayout::new(lanes, 1 << shift).ok()
    })
}

proptest! {
    #[test]
    fn mask_matches_index(c in cell(), p in 0usize..CELL_COUNT) {
        let in_index = INDEX.row(c).iter().any(|peer| peer.as_usize() == p);
        prop_assert_eq!(MASKS.row(c)[p] == MASK_SENTINEL, in_index);
    }

    #[test]
    fn bitset_matches_index(c in cell(), p in 0usize..CELL_COUNT) {
        let in_index = INDEX.row(c).iter().any(|peer| peer.as_usize() == p);
        let [high, low] = BITS.row(c);
        let word = if p < 64 { low } else { high };
        prop_assert_eq!(word & (1 << (p % 64)) != 0, in_index);
    }

    #[test]
    fn index_is_symmetric(a in cell(), b in cell()) {
        prop_assert_eq!(INDEX.row(a).contains(&b), INDEX.row(b).contains(&a));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mask_rows_are_padded_uniformly(layout in layout()) {
        let table = MaskTable::build(layout, BuildMode::Serial);
        for row in table.rows() {
            prop_assert_eq!(row.len(), layout.padded_width());
            prop_assert_eq!(row.len() % layout.lane_width(), 0);
            prop_assert!(row.len() >= CELL_COUNT);
            prop_assert!(row[CELL_COUNT..].iter().all(|&e| e == 0));
            prop_assert_eq!((row.len() * 2) % layout.alignment(), 0);
        }
    }
}

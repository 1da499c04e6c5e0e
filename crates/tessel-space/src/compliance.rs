//! Layout and topology compliance test helpers.
//!
//! These functions verify the invariants every padded layout and compiled
//! topology must satisfy. Reused across the layout and neighbourhood test
//! modules.

use crate::layout::{PaddedLayout, SlotKind};
use crate::neighborhood::Topology;
use indexmap::IndexSet;

/// Assert that interior coordinates map to distinct padded indices.
pub fn assert_interior_bijective(layout: &PaddedLayout) {
    let indices: IndexSet<usize> = layout
        .shape()
        .coords()
        .map(|c| layout.to_padded_index(&c).expect("interior coordinate"))
        .collect();
    assert_eq!(
        indices.len(),
        layout.shape().size(),
        "to_padded_index is not injective over {:?}",
        layout.shape()
    );
    for coord in layout.shape().coords() {
        let idx = layout.to_padded_index(&coord).expect("interior coordinate");
        assert_eq!(
            layout.interior_coord(idx).as_ref(),
            Some(&coord),
            "interior_coord does not invert to_padded_index at {coord:?}"
        );
    }
}

/// Assert that no interior coordinate lands on a halo slot and that the
/// interior image is exactly the set of `Interior` slots.
pub fn assert_interior_disjoint_from_halo(layout: &PaddedLayout) {
    let kinds = layout.classify();
    let image: IndexSet<usize> = layout
        .shape()
        .coords()
        .map(|c| layout.to_padded_index(&c).expect("interior coordinate"))
        .collect();
    for (i, kind) in kinds.iter().enumerate() {
        assert_eq!(
            *kind == SlotKind::Interior,
            image.contains(&i),
            "slot {i} classified {kind:?} but interior image membership disagrees"
        );
    }
}

/// Assert that every offset from every interior slot stays in the buffer.
pub fn assert_offsets_in_bounds(layout: &PaddedLayout, topology: &Topology) {
    let len = layout.len() as isize;
    for idx in layout.interior_indices() {
        for &off in topology.offsets() {
            let target = idx as isize + off;
            assert!(
                (0..len).contains(&target),
                "offset {off} from slot {idx} leaves the padded buffer (len {len})"
            );
        }
    }
}

/// Assert that no two directions collapse onto the same flat offset.
pub fn assert_offsets_distinct(topology: &Topology) {
    let unique: IndexSet<isize> = topology.offsets().iter().copied().collect();
    assert_eq!(
        unique.len(),
        topology.len(),
        "topology has duplicate flat offsets"
    );
}

/// Run every layout check.
pub fn run_layout_compliance(layout: &PaddedLayout) {
    assert_interior_bijective(layout);
    assert_interior_disjoint_from_halo(layout);
    assert_eq!(
        layout.classify().len(),
        layout.len(),
        "classify must cover every slot"
    );
}

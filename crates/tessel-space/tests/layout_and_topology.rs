use smallvec::smallvec;
use tessel_core::{GridError, Offset};
use tessel_space::{Neighborhood, NeighborhoodSpec, PaddedLayout, Shape, SlotKind, Topology};

fn layout(extents: &[usize], halo: usize) -> PaddedLayout {
    PaddedLayout::new(Shape::new(extents).unwrap(), halo).unwrap()
}

#[test]
fn moore_neighbour_counts_by_dimension() {
    for (extents, expected) in [(&[6][..], 2), (&[6, 6][..], 8), (&[6, 6, 6][..], 26)] {
        let l = layout(extents, 1);
        let t = Topology::preset(Neighborhood::Moore, &l).unwrap();
        assert_eq!(t.len(), expected, "extents {extents:?}");
    }
}

#[test]
fn moore_neighbours_of_corner_land_in_halo() {
    let l = layout(&[4, 4], 1);
    let t = Topology::preset(Neighborhood::Moore, &l).unwrap();
    let kinds = l.classify();
    let corner = l.to_padded_index(&[0, 0]).unwrap();

    let halo_hits = t
        .offsets()
        .iter()
        .filter(|&&off| kinds[(corner as isize + off) as usize] == SlotKind::Halo)
        .count();
    // Five of the eight neighbours of a corner are outside the lattice.
    assert_eq!(halo_hits, 5);
}

#[test]
fn relative_offsets_map_to_padded_neighbours() {
    let l = layout(&[5, 4, 3], 1);
    let t = Topology::preset(Neighborhood::Moore, &l).unwrap();
    let centre = [2usize, 2, 1];
    let idx = l.to_padded_index(&centre).unwrap() as isize;

    for (rel, &flat) in t.relative().iter().zip(t.offsets()) {
        let neighbour: Vec<usize> = centre
            .iter()
            .zip(rel.iter())
            .map(|(&c, &d)| (c as i32 + d) as usize)
            .collect();
        let expected = l.to_padded_index(&neighbour).unwrap() as isize;
        assert_eq!(idx + flat, expected, "offset {rel:?}");
    }
}

#[test]
fn axis_offsets_can_be_supplied_as_custom() {
    let l = layout(&[5, 5], 1);
    let axes: Vec<Offset> = vec![
        smallvec![-1, 0],
        smallvec![1, 0],
        smallvec![0, -1],
        smallvec![0, 1],
    ];
    let t = Topology::from_spec(&NeighborhoodSpec::custom(axes, 1), &l).unwrap();
    assert_eq!(t.offsets(), &[-1, 1, -7, 7]);
}

#[test]
fn von_neumann_preset_is_unsupported() {
    let l = layout(&[5, 5], 1);
    let spec = NeighborhoodSpec::Preset {
        kind: Neighborhood::VonNeumann,
        max_distance: 1,
    };
    assert!(matches!(
        Topology::from_spec(&spec, &l),
        Err(GridError::Unsupported { .. })
    ));
}

#[test]
fn moore_ignores_halo_width() {
    // Moore always hands the rule 3^N - 1 neighbours in the same order,
    // however deep the halo.
    let narrow = layout(&[6, 6], 1);
    let wide = layout(&[6, 6], 2);
    let a = Topology::preset(Neighborhood::Moore, &narrow).unwrap();
    let b = Topology::preset(Neighborhood::Moore, &wide).unwrap();
    assert_eq!(b.len(), 8);
    assert_eq!(a.relative(), b.relative());
    assert_eq!(b.reach(), 1);

    let spec = NeighborhoodSpec::Preset {
        kind: Neighborhood::Moore,
        max_distance: 2,
    };
    assert_eq!(Topology::from_spec(&spec, &wide).unwrap().len(), 8);
}

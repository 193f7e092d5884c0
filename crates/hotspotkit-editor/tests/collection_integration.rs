use hotspotkit_core::{CollectionError, FigureKind, HotspotRecord, Size};
use hotspotkit_editor::headless::HeadlessSurface;
use hotspotkit_editor::{HotspotCollection, ManipulationSurface, SurfaceMetrics};
use proptest::prelude::*;

fn surface() -> HeadlessSurface {
    HeadlessSurface::new(SurfaceMetrics::new(Size::new(400.0, 300.0), 16.0))
}

fn record(figure: FigureKind) -> HotspotRecord {
    HotspotRecord::new_default(figure, Size::new(400.0, 300.0), 40.0).unwrap()
}

#[test]
fn test_append_returns_previous_length() {
    let mut surface = surface();
    let mut collection = HotspotCollection::new();

    assert_eq!(collection.append(record(FigureKind::Circle), &mut surface), 0);
    assert_eq!(collection.append(record(FigureKind::Rectangle), &mut surface), 1);
    assert_eq!(collection.count(), 2);
    assert_eq!(surface.attached_count(), 2);
    assert!(collection.is_consistent(&surface));
}

#[test]
fn test_remove_renumbers_survivors() {
    let mut surface = surface();
    let mut collection = HotspotCollection::new();
    for _ in 0..4 {
        collection.append(record(FigureKind::Circle), &mut surface);
    }
    let third = collection.handle_of(2).unwrap();
    let fourth = collection.handle_of(3).unwrap();

    collection.remove_at(1, &mut surface).unwrap();

    assert_eq!(collection.count(), 3);
    assert_eq!(collection.index_of(third), Some(1));
    assert_eq!(collection.index_of(fourth), Some(2));
    assert_eq!(surface.element(third).map(|e| e.index), Some(1));
    assert_eq!(surface.element(fourth).map(|e| e.index), Some(2));
    assert_eq!(surface.reported_indices(), vec![0, 1, 2]);
}

#[test]
fn test_remove_out_of_range_leaves_collection_unchanged() {
    let mut surface = surface();
    let mut collection = HotspotCollection::new();
    collection.append(record(FigureKind::Circle), &mut surface);
    collection.append(record(FigureKind::Rectangle), &mut surface);
    let before = collection.records().to_vec();

    let err = collection.remove_at(2, &mut surface).unwrap_err();

    assert_eq!(err, CollectionError::IndexOutOfRange { index: 2, count: 2 });
    assert_eq!(collection.records(), before.as_slice());
    assert_eq!(surface.attached_count(), 2);
    assert!(collection.is_consistent(&surface));
}

#[test]
fn test_hydrate_attaches_every_record() {
    let mut surface = surface();
    let records = vec![record(FigureKind::Circle), record(FigureKind::Rectangle)];

    let collection = HotspotCollection::hydrate(records, &mut surface);

    assert_eq!(collection.count(), 2);
    let first = collection.handle_of(0).unwrap();
    assert_eq!(surface.element(first).map(|e| e.figure), Some(FigureKind::Circle));
    assert!(collection.is_consistent(&surface));
}

#[test]
fn test_clear_detaches_everything() {
    let mut surface = surface();
    let mut collection = HotspotCollection::new();
    for _ in 0..3 {
        collection.append(record(FigureKind::Rectangle), &mut surface);
    }

    collection.clear(&mut surface);

    assert!(collection.is_empty());
    assert_eq!(surface.attached_count(), 0);
    assert!(collection.is_consistent(&surface));
}

#[derive(Debug, Clone)]
enum Op {
    Append(bool),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Append),
        (0usize..12).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_bindings_stay_dense(ops in prop::collection::vec(op(), 0..40)) {
        let mut surface = surface();
        let mut collection = HotspotCollection::new();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Op::Append(circle) => {
                    let figure = if circle { FigureKind::Circle } else { FigureKind::Rectangle };
                    let index = collection.append(record(figure), &mut surface);
                    prop_assert_eq!(index, expected);
                    expected += 1;
                }
                Op::Remove(index) => {
                    let result = collection.remove_at(index, &mut surface);
                    if index < expected {
                        prop_assert!(result.is_ok());
                        expected -= 1;
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
            prop_assert_eq!(collection.count(), expected);
            prop_assert!(collection.is_consistent(&surface));
            prop_assert_eq!(surface.reported_indices(), (0..expected).collect::<Vec<_>>());
        }
    }
}

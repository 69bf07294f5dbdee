use super::{canonical, path, rect};
use crate::clipper::clipper::Clipper;
use crate::clipper::constants::COORD_RANGE;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::error::EngineError;
use crate::clipper::utils::area;
use crate::geometry::point::Point;
use crate::geometry::polygon::Paths;

fn overlapping_squares() -> Clipper {
    let mut clipper = Clipper::new();
    clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject).unwrap();
    clipper.add_path(&rect(5, 5, 15, 15), PolyType::Clip).unwrap();
    clipper
}

fn execute(clipper: &Clipper, clip_type: ClipType) -> Paths {
    clipper
        .execute(clip_type, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
        .unwrap()
}

fn total_area(paths: &Paths) -> f64 {
    paths.iter().map(|polygon| area(polygon)).sum()
}

#[test]
fn test_intersection_of_overlapping_squares() {
    let result = execute(&overlapping_squares(), ClipType::Intersection);

    assert_eq!(result.len(), 1);
    assert_eq!(canonical(&result[0]), rect(5, 5, 10, 10));
}

#[test]
fn test_union_of_overlapping_squares() {
    let result = execute(&overlapping_squares(), ClipType::Union);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 8);
    assert_eq!(area(&result[0]), 175.0);
}

#[test]
fn test_difference_of_overlapping_squares() {
    let result = execute(&overlapping_squares(), ClipType::Difference);

    assert_eq!(result.len(), 1);
    assert_eq!(
        canonical(&result[0]),
        path(&[(0, 0), (10, 0), (10, 5), (5, 5), (5, 10), (0, 10)])
    );
    assert_eq!(area(&result[0]), 75.0);
}

#[test]
fn test_xor_keeps_regions_touching_at_vertices_apart() {
    let result = execute(&overlapping_squares(), ClipType::Xor);

    assert_eq!(result.len(), 2);
    for polygon in &result {
        assert_eq!(polygon.len(), 6);
        assert_eq!(area(polygon), 75.0);
    }
}

#[test]
fn test_execute_leaves_operands_untouched() {
    let clipper = overlapping_squares();
    let first = execute(&clipper, ClipType::Union);
    let second = execute(&clipper, ClipType::Union);

    assert_eq!(first, second);
    assert_eq!(clipper.paths(PolyType::Subject), &[rect(0, 0, 10, 10)]);
    assert_eq!(clipper.paths(PolyType::Clip), &[rect(5, 5, 15, 15)]);
}

#[test]
fn test_fill_rules_on_overlapping_subjects() {
    let mut clipper = Clipper::new();
    clipper
        .add_paths(&[rect(0, 0, 10, 10), rect(5, 5, 15, 15)], PolyType::Subject)
        .unwrap();

    let even_odd = clipper
        .execute(ClipType::Union, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
        .unwrap();
    assert_eq!(even_odd.len(), 2);
    assert_eq!(total_area(&even_odd), 150.0);

    let non_zero = clipper
        .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
        .unwrap();
    assert_eq!(non_zero.len(), 1);
    assert_eq!(area(&non_zero[0]), 175.0);
}

#[test]
fn test_positive_and_negative_follow_winding_direction() {
    let mut reversed = rect(0, 0, 10, 10);
    reversed.reverse();

    let mut clipper = Clipper::new();
    clipper.add_path(&reversed, PolyType::Subject).unwrap();

    let positive = clipper
        .execute(ClipType::Union, PolyFillType::Positive, PolyFillType::Positive)
        .unwrap();
    assert!(positive.is_empty());

    let negative = clipper
        .execute(ClipType::Union, PolyFillType::Negative, PolyFillType::Negative)
        .unwrap();
    assert_eq!(negative.len(), 1);
    assert_eq!(area(&negative[0]), 100.0);
}

#[test]
fn test_difference_with_inner_square_produces_hole() {
    let mut clipper = Clipper::new();
    clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject).unwrap();
    clipper.add_path(&rect(3, 3, 7, 7), PolyType::Clip).unwrap();

    let flat = clipper
        .execute(ClipType::Difference, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
        .unwrap();
    assert_eq!(flat.len(), 2);
    assert_eq!(total_area(&flat), 84.0);

    let regions = clipper
        .execute_ex(ClipType::Difference, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
        .unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(canonical(&regions[0].outer), rect(0, 0, 10, 10));
    assert_eq!(regions[0].holes.len(), 1);
    assert_eq!(area(&regions[0].holes[0]), -16.0);
}

#[test]
fn test_union_merges_shared_edge() {
    let mut clipper = Clipper::new();
    clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject).unwrap();
    clipper.add_path(&rect(10, 0, 20, 10), PolyType::Clip).unwrap();

    let result = execute(&clipper, ClipType::Union);

    assert_eq!(result.len(), 1);
    assert_eq!(canonical(&result[0]), rect(0, 0, 20, 10));
}

#[test]
fn test_union_of_corner_touching_squares() {
    let mut clipper = Clipper::new();
    clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject).unwrap();
    clipper.add_path(&rect(10, 10, 20, 20), PolyType::Clip).unwrap();

    let regions = clipper
        .execute_ex(ClipType::Union, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
        .unwrap();

    assert_eq!(regions.len(), 2);
    assert!(regions.iter().all(|region| region.holes.is_empty()));
    assert!(regions.iter().all(|region| area(&region.outer) == 100.0));
}

#[test]
fn test_self_intersecting_bow_tie() {
    let mut clipper = Clipper::new();
    clipper
        .add_path(&path(&[(0, 0), (10, 10), (10, 0), (0, 10)]), PolyType::Subject)
        .unwrap();

    let result = execute(&clipper, ClipType::Union);

    assert_eq!(result.len(), 2);
    assert_eq!(total_area(&result), 50.0);
    assert!(result.iter().all(|polygon| area(polygon) > 0.0));
}

#[test]
fn test_degenerate_input_is_ignored() {
    let mut clipper = Clipper::new();
    clipper.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject).unwrap();
    clipper
        .add_path(&path(&[(0, 0), (5, 0), (10, 0)]), PolyType::Subject)
        .unwrap();

    assert!(execute(&clipper, ClipType::Union).is_empty());
}

#[test]
fn test_out_of_range_paths_are_rejected_whole() {
    let mut clipper = Clipper::new();
    let too_far = vec![
        Point::new(0, 0),
        Point::new(COORD_RANGE + 1, 0),
        Point::new(0, 10),
    ];

    let error = clipper
        .add_paths(&[rect(0, 0, 10, 10), too_far], PolyType::Subject)
        .unwrap_err();

    assert_eq!(
        error,
        EngineError::CoordinateOutOfRange {
            x: COORD_RANGE + 1,
            y: 0,
            range: COORD_RANGE
        }
    );
    assert!(clipper.is_empty());
}

#[test]
fn test_clear_discards_both_operands() {
    let mut clipper = overlapping_squares();
    assert!(!clipper.is_empty());

    clipper.clear();

    assert!(clipper.is_empty());
    assert!(execute(&clipper, ClipType::Union).is_empty());
}

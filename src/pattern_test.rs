#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn params(sides: u32, repetitions: u32, rotation: f64, size: f64) -> RenderParameters {
    RenderParameters { sides, repetitions, rotation, size, ..RenderParameters::default() }
}

// --- radius ---

#[test]
fn single_repetition_keeps_full_size() {
    assert_eq!(rep_radius(0, 100.0, 1), 100.0);
    assert_eq!(rep_radius(0, 73.5, 1), 73.5);
}

#[test]
fn radii_decrease_arithmetically() {
    let size = 120.0;
    let repetitions = 6;
    let step = size / (2.0 * f64::from(repetitions));
    for rep in 0..repetitions {
        let expected = size - f64::from(rep) * step;
        assert!(approx_eq(rep_radius(rep, size, repetitions), expected), "rep {rep}");
    }
    for rep in 1..repetitions {
        assert!(rep_radius(rep, size, repetitions) < rep_radius(rep - 1, size, repetitions));
    }
}

#[test]
fn last_radius_stays_above_half_size() {
    for repetitions in 1..=50 {
        let last = rep_radius(repetitions - 1, 200.0, repetitions);
        assert!(last > 100.0, "repetitions {repetitions}: {last}");
    }
}

// --- rotation ---

#[test]
fn rotation_is_cumulative_per_repetition() {
    let degrees: Vec<f64> = (0..3).map(|rep| rep_rotation_radians(rep, 30.0).to_degrees()).collect();
    assert!(approx_eq(degrees[0], 0.0));
    assert!(approx_eq(degrees[1], 30.0));
    assert!(approx_eq(degrees[2], 60.0));
}

#[test]
fn first_repetition_is_never_rotated() {
    assert_eq!(rep_rotation_radians(0, 123.0), 0.0);
    assert_eq!(rep_rotation_radians(0, -45.0), 0.0);
}

#[test]
fn rotation_is_not_clamped() {
    assert!(approx_eq(rep_rotation_radians(2, 400.0).to_degrees(), 800.0));
}

// --- vertices ---

#[test]
fn square_example_vertices() {
    let rings = layout(&params(4, 1, 0.0, 100.0), 500.0, 500.0);
    assert_eq!(rings.len(), 1);
    let v = &rings[0].vertices;
    assert_eq!(v.len(), 4);
    assert!(point_approx_eq(v[0], Point::new(350.0, 250.0)));
    assert!(point_approx_eq(v[1], Point::new(250.0, 350.0)));
    assert!(point_approx_eq(v[2], Point::new(150.0, 250.0)));
    assert!(point_approx_eq(v[3], Point::new(250.0, 150.0)));
}

#[test]
fn vertex_count_matches_sides() {
    for sides in 3..=100 {
        let vertices = polygon_vertices(Point::new(0.0, 0.0), 10.0, 0.0, sides);
        assert_eq!(vertices.len(), sides as usize);
    }
}

#[test]
fn vertices_lie_on_radius() {
    let c = Point::new(250.0, 250.0);
    for v in polygon_vertices(c, 80.0, 0.7, 9) {
        assert!(approx_eq((v.x - c.x).hypot(v.y - c.y), 80.0));
    }
}

#[test]
fn center_is_half_surface() {
    assert_eq!(center(500.0, 300.0), Point::new(250.0, 150.0));
}

// --- layout ---

#[test]
fn layout_has_one_ring_per_repetition_in_paint_order() {
    let rings = layout(&params(6, 5, 15.0, 100.0), 500.0, 500.0);
    let indices: Vec<u32> = rings.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert!(rings.iter().all(|r| r.vertices.len() == 6));
}

#[test]
fn layout_rings_follow_rotation_and_radius_formulas() {
    let p = params(3, 3, 30.0, 90.0);
    let rings = layout(&p, 500.0, 500.0);
    for ring in &rings {
        assert!(approx_eq(ring.radius, rep_radius(ring.index, 90.0, 3)));
        assert!(approx_eq(ring.rotation_radians, rep_rotation_radians(ring.index, 30.0)));
        let first = ring.vertices[0];
        let angle = (first.y - 250.0).atan2(first.x - 250.0);
        assert!(approx_eq(angle, ring.rotation_radians));
    }
}

#[test]
fn zero_repetitions_lays_out_nothing() {
    assert!(layout(&params(5, 0, 0.0, 100.0), 500.0, 500.0).is_empty());
}

#[test]
fn layout_is_deterministic() {
    let p = params(7, 4, 33.0, 140.0);
    assert_eq!(layout(&p, 500.0, 500.0), layout(&p, 500.0, 500.0));
}

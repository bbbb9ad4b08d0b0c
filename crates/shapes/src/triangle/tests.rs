use super::*;
use std::collections::hash_map::DefaultHasher;

const TOL: f64 = 1e-4;

fn tri(a: f64, b: f64, c: f64) -> Triangle {
    Triangle::new(a, b, c).expect("valid triangle")
}

fn hash_of(t: &Triangle) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn stores_sides_in_order() {
    let t = tri(3.0, 4.0, 5.0);
    assert_eq!(t.side_a(), 3.0);
    assert_eq!(t.side_b(), 4.0);
    assert_eq!(t.side_c(), 5.0);
    assert_eq!(t.sides(), [3.0, 4.0, 5.0]);
}

#[test]
fn out_of_range_side_names_the_parameter() {
    let max = Triangle::MAX_SIDE_LENGTH;
    let cases = [
        ((-1.0, 1.0, 2.0), "side_a"),
        ((1.0, -1.0, 2.0), "side_b"),
        ((1.0, 2.0, -1.0), "side_c"),
        ((0.0, 1.0, 2.0), "side_a"),
        ((1.0, 0.0, 2.0), "side_b"),
        ((1.0, 2.0, 0.0), "side_c"),
        ((max + 1.0, 2.0, 1.0), "side_a"),
        ((1.0, max + 1.0, 2.0), "side_b"),
        ((1.0, 2.0, max + 1.0), "side_c"),
        ((f64::NAN, 1.0, 1.0), "side_a"),
    ];
    for ((a, b, c), param) in cases {
        let err = Triangle::new(a, b, c).unwrap_err();
        assert!(err.is_out_of_range(), "({a}, {b}, {c})");
        assert_eq!(err.param(), Some(param), "({a}, {b}, {c})");
    }
}

#[test]
fn range_check_precedes_inequality_check() {
    // (0, 1, 3) also violates the inequality; range wins.
    let err = Triangle::new(0.0, 1.0, 3.0).unwrap_err();
    assert!(err.is_out_of_range());
    // First failing side is reported.
    let err = Triangle::new(1.0, -2.0, -3.0).unwrap_err();
    assert_eq!(err.param(), Some("side_b"));
}

#[test]
fn inequality_violation_is_malformed() {
    for (a, b, c) in [(1.0, 1.0, 3.0), (1.0, 3.0, 1.0), (3.0, 1.0, 1.0)] {
        let err = Triangle::new(a, b, c).unwrap_err();
        assert!(err.is_malformed(), "({a}, {b}, {c})");
        assert_eq!(err, ShapeError::MalformedTriangle { a, b, c });
    }
}

#[test]
fn degenerate_triangle_is_rejected() {
    // a + b == c exactly: strict inequality fails.
    assert!(Triangle::new(1.0, 2.0, 3.0).unwrap_err().is_malformed());
    assert!(Triangle::new(2.0, 3.0, 1.0).unwrap_err().is_malformed());
}

#[test]
fn area_matches_reference_values() {
    let cases = [
        (3.0, 4.0, 5.0, 6.0),
        (6.0, 8.0, 10.0, 24.0),
        (8.0, 6.0, 10.0, 24.0),
        (6.0, 10.0, 8.0, 24.0),
        (8.0, 10.0, 6.0, 24.0),
        (10.0, 8.0, 6.0, 24.0),
        (10.0, 6.0, 8.0, 24.0),
        (7.0, 10.0, 5.0, 16.248),
        (5.0, 5.0, 6.0, 12.0),
        (9999999999.0, 9999999999.0, 9999999999.0, 4.3301270180561682e+19),
    ];
    for (a, b, c, expected) in cases {
        let area = tri(a, b, c).area();
        assert!(
            (area - expected).abs() < TOL,
            "({a}, {b}, {c}): {area} vs {expected}"
        );
    }
}

#[test]
fn right_angle_detection() {
    assert!(tri(3.0, 4.0, 5.0).is_right());
    assert!(tri(6.0, 8.0, 10.0).is_right());
    assert!(tri(5.0, 3.0, 4.0).is_right());
    assert!(!tri(7.0, 10.0, 5.0).is_right());
    assert!(!tri(5.0, 5.0, 6.0).is_right());
    assert!(!tri(1.0, 1.0, 1.0).is_right());
}

#[test]
fn right_area_uses_legs_for_every_hypotenuse_position() {
    for t in [tri(5.0, 3.0, 4.0), tri(3.0, 5.0, 4.0), tri(3.0, 4.0, 5.0)] {
        assert!(t.is_right());
        assert_eq!(t.area(), 6.0);
    }
}

#[test]
fn right_isosceles_agrees_with_heron() {
    let h = std::f64::consts::SQRT_2;
    let t = tri(1.0, 1.0, h);
    assert!(t.is_right());
    assert!((t.area() - 0.5).abs() < 1e-12);
    assert!((heron_area(1.0, 1.0, h) - t.area()).abs() < 1e-9);
}

#[test]
fn near_degenerate_area_is_finite_and_non_negative() {
    let t = tri(1.0, 1.0, 1.9999999999999998);
    assert!(!t.is_right());
    assert!(t.area().is_finite());
    assert!(t.area() >= 0.0);
    assert!(t.area() < 1e-6);
    assert_eq!(heron_area(1.0, 1.0, 2.0), 0.0);
}

#[test]
fn right_area_without_unique_maximum_uses_a_and_b() {
    assert_eq!(right_area(2.0, 2.0, 1.0), 2.0);
    assert_eq!(right_area(1.0, 2.0, 2.0), 1.0);
    assert_eq!(right_area(3.0, 3.0, 3.0), 4.5);
}

#[test]
fn equality_is_positional() {
    let t1 = tri(3.0, 4.0, 5.0);
    let t2 = tri(3.0, 4.0, 5.0);
    let swapped = tri(4.0, 3.0, 5.0);
    assert_eq!(t1, t2);
    assert_eq!(t1, t1);
    assert_ne!(t1, swapped);
    assert!(t1 != tri(6.0, 8.0, 10.0));
    // Same area, different assignment: still unequal.
    assert_eq!(t1.area(), swapped.area());
}

#[test]
fn equal_triangles_hash_equal() {
    assert_eq!(hash_of(&tri(3.0, 4.0, 5.0)), hash_of(&tri(3.0, 4.0, 5.0)));
}

#[test]
fn display_format() {
    assert_eq!(
        tri(3.0, 4.0, 5.0).to_string(),
        "Triangle (SideA: 3, SideB: 4, SideC: 5)"
    );
    assert_eq!(
        tri(0.1, 0.2, 0.25).to_string(),
        "Triangle (SideA: 0.1, SideB: 0.2, SideC: 0.25)"
    );
}

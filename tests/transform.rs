//! Integration tests for the transform pipeline: inversion, determinants,
//! compose/decompose and the quaternion conversions, driven by a seeded RNG
//! so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vmath::{Matrix2, Matrix3, Matrix3x2, Matrix4, Quaternion, Vector2, Vector3};

const TOLERANCE: f32 = 1e-4;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x00C0FFEE)
}

fn random_vec3(rng: &mut StdRng, lo: f32, hi: f32) -> Vector3 {
    Vector3::new(
        rng.random_range(lo..hi),
        rng.random_range(lo..hi),
        rng.random_range(lo..hi),
    )
}

fn random_unit_quaternion(rng: &mut StdRng) -> Quaternion {
    let axis = loop {
        let v = random_vec3(rng, -1.0, 1.0);
        if v.length() > 1e-3 {
            break v.normalized();
        }
    };
    let angle = rng.random_range(-std::f32::consts::PI..std::f32::consts::PI);
    Quaternion::from_axis_angle(&axis, angle)
}

// ─── Inverse correctness ──────────────────────────────────────

#[test]
fn matrix2_inverse_times_matrix_is_identity() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = Matrix2::from_rotation(rng.random_range(-3.0..3.0))
            .multiply(&Matrix2::from_scale(
                rng.random_range(0.1..10.0),
                rng.random_range(0.1..10.0),
            ));
        assert!(m.multiply(&m.inverse()).approx_eq(&Matrix2::IDENTITY, TOLERANCE));
    }
}

#[test]
fn matrix3x2_inverse_times_matrix_is_identity() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = Matrix3x2::compose(
            &Vector2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
            &Vector2::new(rng.random_range(0.1..10.0), rng.random_range(0.1..10.0)),
            rng.random_range(-3.0..3.0),
        );
        assert!(m.multiply(&m.inverse()).approx_eq(&Matrix3x2::IDENTITY, TOLERANCE));
    }
}

#[test]
fn matrix3_inverse_times_matrix_is_identity() {
    let mut rng = rng();
    for _ in 0..10 {
        let q = random_unit_quaternion(&mut rng);
        let m = Matrix3::from_quaternion(&q).multiply(&Matrix3::from_scale(
            rng.random_range(0.1..10.0),
            rng.random_range(0.1..10.0),
            rng.random_range(0.1..10.0),
        ));
        assert!(m.multiply(&m.inverse()).approx_eq(&Matrix3::IDENTITY, TOLERANCE));
    }
}

#[test]
fn matrix4_inverse_times_matrix_is_identity() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = Matrix4::compose(
            &random_vec3(&mut rng, -50.0, 50.0),
            &random_vec3(&mut rng, 0.1, 10.0),
            &random_unit_quaternion(&mut rng),
        );
        assert!(m.multiply(&m.inverse()).approx_eq(&Matrix4::IDENTITY, TOLERANCE));
    }
}

// ─── Singular fallback ────────────────────────────────────────

#[test]
fn singular_matrices_invert_to_exact_identity() {
    let m2 = Matrix2::new(1.0, 2.0, 0.0, 0.0);
    assert_eq!(m2.determinant(), 0.0);
    assert_eq!(m2.inverse(), Matrix2::IDENTITY);

    let m32 = Matrix3x2::new(0.0, 0.0, 3.0, 1.0, 2.0, 4.0);
    assert_eq!(m32.determinant(), 0.0);
    assert_eq!(m32.inverse(), Matrix3x2::IDENTITY);

    let m3 = Matrix3::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0);
    assert_eq!(m3.determinant(), 0.0);
    assert_eq!(m3.inverse(), Matrix3::IDENTITY);

    let m4 = Matrix4::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        0.0, 0.0, 0.0, 0.0,
        9.0, 1.0, 2.0, 3.0,
    );
    assert_eq!(m4.determinant(), 0.0);
    assert_eq!(m4.inverse(), Matrix4::IDENTITY);
}

#[test]
fn both_inverse_call_shapes_agree() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = Matrix4::compose(
            &random_vec3(&mut rng, -10.0, 10.0),
            &random_vec3(&mut rng, 0.1, 10.0),
            &random_unit_quaternion(&mut rng),
        );
        let mut in_place = m;
        in_place.invert();
        let mut from_other = Matrix4::identity();
        from_other.set_from_inverse(&m);
        assert_eq!(in_place, from_other);
    }
}

// ─── Determinant / inverse agreement ──────────────────────────

#[test]
fn determinant_agrees_with_inverse() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = Matrix4::compose(
            &random_vec3(&mut rng, -10.0, 10.0),
            &random_vec3(&mut rng, 0.1, 10.0),
            &random_unit_quaternion(&mut rng),
        );
        let det = m.determinant();
        assert_ne!(det, 0.0);

        // det(M^-1) must be the reciprocal of det(M) when both use the
        // same cofactor expansion.
        let inv_det = m.inverse().determinant();
        assert!((det * inv_det - 1.0).abs() < 1e-3, "det {det} inv_det {inv_det}");
    }
}

// ─── Compose / decompose round-trip ───────────────────────────

#[test]
fn matrix4_compose_decompose_roundtrip() {
    let mut rng = rng();
    for _ in 0..25 {
        let position = random_vec3(&mut rng, -100.0, 100.0);
        let scale = random_vec3(&mut rng, 0.1, 10.0);
        let rotation = random_unit_quaternion(&mut rng);

        let m = Matrix4::compose(&position, &scale, &rotation);
        let (p, s, r) = m.decompose();

        assert!(p.approx_eq(&position, TOLERANCE), "{p} vs {position}");
        assert!(s.approx_eq(&scale, TOLERANCE * 10.0), "{s} vs {scale}");
        // r and -r are the same rotation.
        assert!(
            r.approx_eq(&rotation, TOLERANCE) || r.approx_eq(&-rotation, TOLERANCE),
            "{r} vs {rotation}"
        );
    }
}

#[test]
fn matrix4_decompose_component_order_is_xyzw() {
    // Pins the extraction order against a reference rotation: a composed
    // +90 degree turn about Z must decompose to the axis-angle quaternion
    // (0, 0, sin 45, cos 45), not a w/z-swapped variant.
    let rotation = Quaternion::from_axis_angle(&Vector3::UNIT_Z, std::f32::consts::FRAC_PI_2);
    let m = Matrix4::compose(&Vector3::ZERO, &Vector3::ONE, &rotation);
    let (_, _, r) = m.decompose();

    let expected = Quaternion::new(0.0, 0.0, std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2);
    assert!(
        r.approx_eq(&expected, TOLERANCE) || r.approx_eq(&-expected, TOLERANCE),
        "{r}"
    );

    let v = r.rotate_vector(&Vector3::UNIT_X);
    assert!(v.approx_eq(&Vector3::UNIT_Y, TOLERANCE), "{v}");
}

#[test]
fn matrix3x2_compose_decompose_roundtrip() {
    let mut rng = rng();
    for _ in 0..25 {
        let position = Vector2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
        let scale = Vector2::new(rng.random_range(0.1..10.0), rng.random_range(0.1..10.0));
        let rotation = rng.random_range(-std::f32::consts::PI..std::f32::consts::PI);

        let m = Matrix3x2::compose(&position, &scale, rotation);
        let (p, s, r) = m.decompose();

        assert!(p.approx_eq(&position, TOLERANCE));
        assert!(s.approx_eq(&scale, TOLERANCE * 10.0));
        assert!((r - rotation).abs() < TOLERANCE);
    }
}

// ─── Slerp ────────────────────────────────────────────────────

#[test]
fn slerp_endpoints_are_exact() {
    let a = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.4);
    let b = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.6, 0.8), 2.0);

    assert!(a.slerp(&b, 0.0).approx_eq(&a, 1e-6));
    assert!(a.slerp(&b, 1.0).approx_eq(&b, 1e-6));
    assert!(a.slerp(&a, 0.5).approx_eq(&a, 1e-6));
}

#[test]
fn slerp_takes_the_shortest_arc() {
    // (0,0,0,1) and (0,0,0,-1) are the same rotation with opposite sign;
    // the midpoint must not collapse into a degenerate flip.
    let a = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    let b = Quaternion::new(0.0, 0.0, 0.0, -1.0);
    assert!(a.slerp(&b, 0.5).approx_eq(&a, 1e-6));
}

#[test]
fn slerp_midpoint_halves_the_angle() {
    let a = Quaternion::IDENTITY;
    let b = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 1.0);
    let mid = a.slerp(&b, 0.5);
    let expected = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.5);
    assert!(mid.approx_eq(&expected, 1e-5));
}

// ─── Quaternion <-> matrix round-trip ─────────────────────────

#[test]
fn quaternion_matrix_roundtrip_covers_all_trace_branches() {
    // 170 degree turns about X, Y and Z drive the three largest-diagonal
    // branches (trace <= 0); the small-angle case takes the trace branch.
    let deg170 = 170.0f32.to_radians();
    let cases = [
        Quaternion::from_axis_angle(&Vector3::UNIT_X, deg170),
        Quaternion::from_axis_angle(&Vector3::UNIT_Y, deg170),
        Quaternion::from_axis_angle(&Vector3::UNIT_Z, deg170),
        Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.01),
    ];

    for q in &cases {
        let m4 = Matrix4::from_quaternion(q);
        let r4 = Quaternion::from_matrix4(&m4);
        assert!(
            r4.approx_eq(q, TOLERANCE) || r4.approx_eq(&-*q, TOLERANCE),
            "matrix4 roundtrip {q} -> {r4}"
        );

        let m3 = Matrix3::from_quaternion(q);
        let r3 = Quaternion::from_matrix3(&m3);
        assert!(
            r3.approx_eq(q, TOLERANCE) || r3.approx_eq(&-*q, TOLERANCE),
            "matrix3 roundtrip {q} -> {r3}"
        );
    }
}

#[test]
fn quaternion_matrix_roundtrip_randomized() {
    let mut rng = rng();
    for _ in 0..25 {
        let q = random_unit_quaternion(&mut rng);
        let r = Quaternion::from_matrix4(&Matrix4::from_quaternion(&q));
        assert!(r.approx_eq(&q, TOLERANCE) || r.approx_eq(&-q, TOLERANCE));
    }
}

// ─── Rotation application consistency ─────────────────────────

#[test]
fn matrix_and_quaternion_rotate_vectors_identically() {
    let mut rng = rng();
    for _ in 0..10 {
        let q = random_unit_quaternion(&mut rng);
        let v = random_vec3(&mut rng, -5.0, 5.0);

        let by_quat = q.rotate_vector(&v);
        let by_matrix = Matrix4::from_quaternion(&q).transform_point(&v);
        assert!(by_quat.approx_eq(&by_matrix, 1e-3), "{by_quat} vs {by_matrix}");
    }
}

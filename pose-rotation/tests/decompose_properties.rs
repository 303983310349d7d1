use approx::assert_abs_diff_eq;
use pose_rotation::{
    simplify_angle_rad, to_axis_angle, to_xyz_angle, to_zyx_angle, EulerOrder, RotationMatrix,
};
use std::f64::consts::{FRAC_PI_2, PI};

type M3 = [[f64; 3]; 3];

/// Rodrigues' formula for a unit `axis`.
fn from_axis_angle(angle: f64, axis: [f64; 3]) -> M3 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let [x, y, z] = axis;
    [
        [c + t * x * x, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, c + t * y * y, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, c + t * z * z],
    ]
}

fn rx(a: f64) -> M3 {
    from_axis_angle(a, [1.0, 0.0, 0.0])
}

fn ry(a: f64) -> M3 {
    from_axis_angle(a, [0.0, 1.0, 0.0])
}

fn rz(a: f64) -> M3 {
    from_axis_angle(a, [0.0, 0.0, 1.0])
}

fn mul(a: M3, b: M3) -> M3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// Lays `r` out the way a tracker does: column by column into the 4x4 buffer.
fn pose(r: M3) -> RotationMatrix {
    let mut values = *RotationMatrix::identity().as_array();
    for row in 0..3 {
        for col in 0..3 {
            values[row * 4 + col] = r[col][row] as f32;
        }
    }
    RotationMatrix::from_array(values)
}

fn unit(v: [f64; 3]) -> [f64; 3] {
    let n = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / n, v[1] / n, v[2] / n]
}

/// Deterministic xorshift stream in `[-1, 1)`.
struct Noise(u64);

impl Noise {
    fn next(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }
}

#[test]
fn test_identity_everywhere() {
    let m = RotationMatrix::identity();

    let aa = to_axis_angle(&m);
    assert_eq!(aa.angle, 0.0);
    assert_eq!(aa.axis, [1.0, 0.0, 0.0]);

    for order in [EulerOrder::Xyz, EulerOrder::Zyx] {
        for v in order.decompose(&m).to_array() {
            assert_abs_diff_eq!(v, 0.0, epsilon = 1e-7);
        }
    }
}

#[test]
fn test_half_turn_about_x() {
    let aa = to_axis_angle(&pose(rx(PI)));
    assert_abs_diff_eq!(aa.angle, PI as f32, epsilon = 1e-6);
    assert_abs_diff_eq!(aa.axis[0].abs(), 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(aa.axis[1], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(aa.axis[2], 0.0, epsilon = 1e-3);
}

#[test]
fn test_axis_angle_round_trip() {
    let axes = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [-0.3, 0.8, 0.2],
        [0.5, -0.1, -0.9],
    ];
    let angles = [0.05, 0.3, 1.0, FRAC_PI_2, 2.2, 3.0];

    for axis in axes.map(unit) {
        for angle in angles {
            let aa = to_axis_angle(&pose(from_axis_angle(angle, axis)));
            assert_abs_diff_eq!(f64::from(aa.angle), angle, epsilon = 1e-3);
            for i in 0..3 {
                assert_abs_diff_eq!(f64::from(aa.axis[i]), axis[i], epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_half_turn_round_trip_up_to_sign() {
    for axis in [[0.2, 0.9, -0.4], [-0.7, 0.1, 0.7], [0.6, -0.6, 0.5]].map(unit) {
        let aa = to_axis_angle(&pose(from_axis_angle(PI, axis)));
        assert_abs_diff_eq!(aa.angle, PI as f32, epsilon = 1e-6);

        let sign = if f64::from(aa.axis[0]) * axis[0] < 0.0 {
            -1.0
        } else {
            1.0
        };
        for i in 0..3 {
            assert_abs_diff_eq!(f64::from(aa.axis[i]), sign * axis[i], epsilon = 1e-3);
        }
    }
}

#[test]
fn test_pure_y_rotation_both_orders() {
    for beta in [-1.3, -0.6, 0.2, 0.9, 1.4] {
        let m = pose(ry(beta));
        for angles in [to_xyz_angle(&m), to_zyx_angle(&m)] {
            assert_abs_diff_eq!(f64::from(angles.rot_y), beta, epsilon = 1e-5);
            assert_abs_diff_eq!(angles.rot_x, 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(angles.rot_z, 0.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_euler_round_trip_away_from_gimbal_lock() {
    let mut noise = Noise(0x9e37_79b9_7f4a_7c15);
    for _ in 0..200 {
        let alpha = noise.next() * 3.0;
        let beta = noise.next() * 1.4;
        let gamma = noise.next() * 3.0;

        let xyz = to_xyz_angle(&pose(mul(rz(gamma), mul(ry(beta), rx(alpha)))));
        assert_abs_diff_eq!(f64::from(xyz.rot_x), alpha, epsilon = 1e-4);
        assert_abs_diff_eq!(f64::from(xyz.rot_y), beta, epsilon = 1e-4);
        assert_abs_diff_eq!(f64::from(xyz.rot_z), gamma, epsilon = 1e-4);

        let zyx = to_zyx_angle(&pose(mul(rx(alpha), mul(ry(beta), rz(gamma)))));
        assert_abs_diff_eq!(f64::from(zyx.rot_x), alpha, epsilon = 1e-4);
        assert_abs_diff_eq!(f64::from(zyx.rot_y), beta, epsilon = 1e-4);
        assert_abs_diff_eq!(f64::from(zyx.rot_z), gamma, epsilon = 1e-4);
    }
}

#[test]
fn test_simplify_angle_rad_fold_law() {
    assert_eq!(simplify_angle_rad(0.0), 0.0);
    assert_abs_diff_eq!(
        simplify_angle_rad(FRAC_PI_2 as f32),
        FRAC_PI_2 as f32,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(simplify_angle_rad(PI as f32), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(
        simplify_angle_rad((3.0 * FRAC_PI_2) as f32),
        -FRAC_PI_2 as f32,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        simplify_angle_rad((-PI / 4.0) as f32),
        (-PI / 4.0) as f32,
        epsilon = 1e-6
    );
}

#[test]
fn test_near_half_turn_is_finite_for_every_pivot() {
    // 2·sin(0.004) < 0.01 keeps these inside the symmetric band
    let near_pi = PI - 0.004;
    let axes = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.1, 0.2, 0.97],
    ];
    for axis in axes.map(unit) {
        let aa = to_axis_angle(&pose(from_axis_angle(near_pi, axis)));
        assert_abs_diff_eq!(aa.angle, PI as f32, epsilon = 1e-6);
        assert!(aa.axis.iter().all(|c| c.is_finite()), "{aa}");
        assert_abs_diff_eq!(aa.axis_norm(), 1.0, epsilon = 1e-2);
    }
}

#[test]
fn test_malformed_input_never_produces_nan() {
    let mut noise = Noise(42);
    for _ in 0..500 {
        let mut values = [0.0_f32; 16];
        for v in values.iter_mut() {
            *v = (noise.next() * 2.0) as f32;
        }
        let m = RotationMatrix::from_array(values);

        let aa = to_axis_angle(&m);
        assert!(aa.to_array().iter().all(|v| v.is_finite()), "{m}");
        assert!(to_xyz_angle(&m).to_array().iter().all(|v| v.is_finite()));
        assert!(to_zyx_angle(&m).to_array().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_ignored_entries_do_not_affect_results() {
    let rotation = pose(mul(rz(0.7), mul(ry(-0.2), rx(1.1))));
    let mut values = *rotation.as_array();
    for i in [3, 7, 11, 12, 13, 14, 15] {
        values[i] = f32::NAN;
    }
    let cluttered = RotationMatrix::from_array(values);

    assert_eq!(to_axis_angle(&rotation), to_axis_angle(&cluttered));
    assert_eq!(to_xyz_angle(&rotation), to_xyz_angle(&cluttered));
    assert_eq!(to_zyx_angle(&rotation), to_zyx_angle(&cluttered));
}

#[test]
fn test_from_slice_feeds_decomposition() {
    let values: Vec<f32> = pose(rz(0.5)).as_array().to_vec();
    let m = RotationMatrix::from_slice(&values).unwrap();
    let aa = to_axis_angle(&m).normalized();
    assert_abs_diff_eq!(aa.angle, 0.5, epsilon = 1e-5);
    assert_abs_diff_eq!(aa.axis[2], 1.0, epsilon = 1e-5);

    assert!(RotationMatrix::from_slice(&values[..12]).is_err());
}

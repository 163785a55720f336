use selib::math::{Quaternion, Vector3};

pub const EPSILON: f64 = 1e-6;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn vector_approx_eq(a: Vector3, b: Vector3) -> bool {
    approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z())
}

/// q and -q describe the same rotation
pub fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
    let eq = |b: Quaternion| {
        approx_eq(a.x(), b.x())
            && approx_eq(a.y(), b.y())
            && approx_eq(a.z(), b.z())
            && approx_eq(a.w(), b.w())
    };
    eq(b) || eq(Quaternion::new(-b.x(), -b.y(), -b.z(), -b.w()))
}

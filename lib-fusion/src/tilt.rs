use math::{Vector, RAD_TO_DEG};

/// Computes the absolute tilt angles (in degrees) of the device from the direction of the
/// measured gravity vector. Note that this assumes gravity is the only acceleration acting on
/// the device, so the result is noisy whenever the device experiences linear acceleration, but
/// unlike gyro integration it does not drift over time.
///
/// Returns `(angle_x, angle_y)`, the rotations around the X and Y axes. Rotation around Z
/// cannot be observed from gravity alone.
///
pub fn tilt_from_accel(accel: &Vector) -> (f32, f32) {
    let angle_x = libm::atan2f(
        accel.y,
        libm::sqrtf(accel.x * accel.x + accel.z * accel.z),
    ) * RAD_TO_DEG;

    let angle_y = libm::atan2f(
        -accel.x,
        libm::sqrtf(accel.y * accel.y + accel.z * accel.z),
    ) * RAD_TO_DEG;

    (angle_x, angle_y)
}

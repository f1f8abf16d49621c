use math::Vector;

use crate::*;

#[test]
pub fn weights_sum_to_one() {
    assert!(libm::fabsf(GYRO_WEIGHT + ACCEL_WEIGHT - 1.0) <= f32::EPSILON);
}

/// With a zero gyro delta and the accelerometer agreeing with the current total, the filter
/// must not move the angle, otherwise the estimate would drift even at rest.
///
#[test]
pub fn filter_holds_angle_at_equilibrium() {
    let mut tracker = AngleTracker::new();
    tracker.update(0.0, 0.0, 12.5, -7.25);

    let before = tracker.angles();
    let after = tracker.update(0.0, 0.0, before.0, before.1);

    assert!(
        libm::fabsf(after.0 - before.0) < 1e-4,
        "{} != {}", after.0, before.0
    );
    assert!(
        libm::fabsf(after.1 - before.1) < 1e-4,
        "{} != {}", after.1, before.1
    );
}

#[test]
pub fn tilt_is_zero_when_gravity_is_axis_aligned() {
    let (angle_x, angle_y) = tilt_from_accel(&Vector::new(0.0, 0.0, 1.0));
    assert!(libm::fabsf(angle_x) < 1e-5, "angle_x = {}", angle_x);
    assert!(libm::fabsf(angle_y) < 1e-5, "angle_y = {}", angle_y);
}

#[test]
pub fn tilt_recovers_known_angles() {
    // Gravity split evenly between Y and Z means a 45 degree rotation around X.
    let (angle_x, angle_y) = tilt_from_accel(&Vector::new(0.0, 0.70710678, 0.70710678));
    assert!(libm::fabsf(angle_x - 45.0) < 1e-3, "angle_x = {}", angle_x);
    assert!(libm::fabsf(angle_y) < 1e-3, "angle_y = {}", angle_y);

    // Same rotation around Y; the X axis picks up the negated gravity component.
    let (angle_x, angle_y) = tilt_from_accel(&Vector::new(-0.70710678, 0.0, 0.70710678));
    assert!(libm::fabsf(angle_x) < 1e-3, "angle_x = {}", angle_x);
    assert!(libm::fabsf(angle_y - 45.0) < 1e-3, "angle_y = {}", angle_y);
}

#[test]
pub fn gyro_delta_is_discounted_by_its_weight() {
    let mut tracker = AngleTracker::new();
    let (x, y) = tracker.update(1.0, -2.0, 0.0, 0.0);
    assert!(libm::fabsf(x - GYRO_WEIGHT) < 1e-6, "x = {}", x);
    assert!(libm::fabsf(y + 2.0 * GYRO_WEIGHT) < 1e-6, "y = {}", y);
}

/// A stationary device reading pure +1g on Z with zero biases must keep
/// reporting (0, 0) no matter how much time elapses between samples.
///
#[test]
pub fn stationary_gravity_aligned_device_stays_level() {
    let mut tracker = AngleTracker::new();

    let accel = Vector::new(0.0, 0.0, 16384.0 / 16384.0);
    let gyro = Vector::new(0.0 / 32.8, 0.0 / 32.8, 0.0 / 32.8);
    let elapsed = 0.1;

    let (tilt_x, tilt_y) = tilt_from_accel(&accel);
    let (pitch, roll) = tracker.update(
        gyro.x * elapsed,
        gyro.y * elapsed,
        tilt_x,
        tilt_y,
    );

    assert!(libm::fabsf(pitch) < 1e-5, "pitch = {}", pitch);
    assert!(libm::fabsf(roll) < 1e-5, "roll = {}", roll);
}

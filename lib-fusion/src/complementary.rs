/// How much the filter trusts the integrated gyro angle. The gyro is nearly noise free over a
/// single step but accumulates drift, so it dominates the short term.
pub const GYRO_WEIGHT: f32 = 0.98;

/// How much the filter trusts the accelerometer tilt angle. Gravity gives an absolute
/// reference that slowly pulls the integrated angle back whenever it drifts.
pub const ACCEL_WEIGHT: f32 = 0.02;

/// Blends an integrated gyro angle with an absolute accelerometer angle. The two weights are
/// tuned for the assumed polling rate and always sum to 1.
///
pub fn complementary_filter(gyro_angle: f32, accel_angle: f32) -> f32 {
    GYRO_WEIGHT * gyro_angle + ACCEL_WEIGHT * accel_angle
}

/// Running pitch/roll state of the fusion loop. Starts at zero and is only ever changed by
/// `update`, once per polled sample.
///
#[derive(Debug, Clone, Copy)]
pub struct AngleTracker
{
    total_x: f32,
    total_y: f32,
}

impl AngleTracker {

    pub const fn new() -> Self {
        AngleTracker { total_x: 0.0, total_y: 0.0 }
    }

    /// Advances the tracked angles by one sample. `gyro_delta_*` is the bias-corrected gyro
    /// rate multiplied by the elapsed seconds since the previous sample; `accel_angle_*` is
    /// the bias-corrected absolute tilt from `tilt_from_accel`.
    ///
    pub fn update(
        &mut self,
        gyro_delta_x: f32,
        gyro_delta_y: f32,
        accel_angle_x: f32,
        accel_angle_y: f32,
    ) -> (f32, f32) {
        self.total_x = complementary_filter(self.total_x + gyro_delta_x, accel_angle_x);
        self.total_y = complementary_filter(self.total_y + gyro_delta_y, accel_angle_y);
        (self.total_x, self.total_y)
    }

    /// The current accumulated `(pitch, roll)` pair in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.total_x, self.total_y)
    }
}

impl Default for AngleTracker {
    fn default() -> Self {
        AngleTracker::new()
    }
}

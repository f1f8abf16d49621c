/// Durable key/value persistence for calibration offsets. Implementations are consulted at
/// construction and at the end of calibration, never on the steady-state sampling path.
///
pub trait OffsetStore
{
    type Error: core::fmt::Debug;

    /// Looks up a stored offset, `None` when the key was never written.
    fn get(&mut self, key: &str) -> Result<Option<f32>, Self::Error>;

    /// Persists an offset under the given key, replacing any previous value.
    fn set(&mut self, key: &str, value: f32) -> Result<(), Self::Error>;
}

impl<T: OffsetStore + ?Sized> OffsetStore for &mut T {
    type Error = T::Error;

    fn get(&mut self, key: &str) -> Result<Option<f32>, Self::Error> {
        T::get(self, key)
    }

    fn set(&mut self, key: &str, value: f32) -> Result<(), Self::Error> {
        T::set(self, key, value)
    }
}

pub const GYRO_RAW_OFFSET_X: &str = "gyro_raw_offset_x";
pub const GYRO_RAW_OFFSET_Y: &str = "gyro_raw_offset_y";
pub const GYRO_RAW_OFFSET_Z: &str = "gyro_raw_offset_z";
pub const ACC_ANGLE_OFFSET_X: &str = "acc_angle_offset_x";
pub const ACC_ANGLE_OFFSET_Y: &str = "acc_angle_offset_y";

/// The five per-device calibration offsets: gyro rate bias per axis (in deg/s, subtracted from
/// raw-level samples) and accelerometer tilt bias for X and Y (in degrees, subtracted from the
/// derived angles). The Z tilt has no bias entry because it cannot be observed from gravity.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationOffsets
{
    pub gyro_x: f32,
    pub gyro_y: f32,
    pub gyro_z: f32,
    pub accel_angle_x: f32,
    pub accel_angle_y: f32,
}

impl CalibrationOffsets {

    /// Loads a previously persisted set of offsets. Returns `None` unless all five keys are
    /// present; a partial set is as useless as none at all.
    ///
    pub fn load<S: OffsetStore>(store: &mut S) -> Result<Option<Self>, S::Error> {
        let mut offsets = CalibrationOffsets::default();
        let fields = [
            (GYRO_RAW_OFFSET_X, &mut offsets.gyro_x),
            (GYRO_RAW_OFFSET_Y, &mut offsets.gyro_y),
            (GYRO_RAW_OFFSET_Z, &mut offsets.gyro_z),
            (ACC_ANGLE_OFFSET_X, &mut offsets.accel_angle_x),
            (ACC_ANGLE_OFFSET_Y, &mut offsets.accel_angle_y),
        ];
        for (key, field) in fields {
            match store.get(key)? {
                Some(value) => *field = value,
                None => return Ok(None),
            }
        }
        Ok(Some(offsets))
    }

    /// Persists the three gyro rate biases.
    pub fn save_gyro<S: OffsetStore>(&self, store: &mut S) -> Result<(), S::Error> {
        store.set(GYRO_RAW_OFFSET_X, self.gyro_x)?;
        store.set(GYRO_RAW_OFFSET_Y, self.gyro_y)?;
        store.set(GYRO_RAW_OFFSET_Z, self.gyro_z)
    }

    /// Persists the two accelerometer angle biases.
    pub fn save_accel<S: OffsetStore>(&self, store: &mut S) -> Result<(), S::Error> {
        store.set(ACC_ANGLE_OFFSET_X, self.accel_angle_x)?;
        store.set(ACC_ANGLE_OFFSET_Y, self.accel_angle_y)
    }
}

use std::time::Instant;

use fusion::{tilt_from_accel, AngleTracker};
use log::{debug, info};
use math::Vector;

use crate::registers::*;
use crate::{
    decode_axis, AccelScaleRange, CalibrationOffsets, DLPFMode, Error, GyroScaleRange,
    OffsetStore, RegisterBus, MPU6050_DEFAULT_I2C_ADDR,
};

/// Number of rest samples averaged per axis when computing a calibration offset.
pub const OFFSET_SAMPLES: usize = 200;

/// Whether construction should compute fresh offsets or reuse persisted ones.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration
{
    /// Run both calibration routines during construction. Choosing this asserts that the
    /// device is stationary and level right now.
    CalibrateNow,

    /// Load previously persisted offsets; construction fails if no complete set exists.
    LoadStored,
}

/// How a device instance obtained its offsets.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup
{
    Calibrated,
    Loaded,
}

/// Device settings, fixed for the lifetime of an instance. The full-scale ranges are given in
/// physical units and validated against the four ranges the chip supports before any bus I/O
/// happens.
///
#[derive(Debug, Clone)]
pub struct DeviceConfig
{
    /// i2c address of the chip.
    pub address: u8,

    /// Gyroscope full-scale range in deg/s, one of 250/500/1000/2000.
    pub gyro_range_dps: u16,

    /// Accelerometer full-scale range in g, one of 2/4/8/16.
    pub accel_range_g: u8,

    /// Low-pass filter bandwidth written to the `CONFIG` register.
    pub dlpf: DLPFMode,

    /// Sample rate divider, output rate is the 1kHz internal rate over `divider + 1`.
    pub sample_rate_divider: u8,

    pub calibrate: Calibration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            address: MPU6050_DEFAULT_I2C_ADDR,
            gyro_range_dps: 1000,
            accel_range_g: 2,
            dlpf: DLPFMode::Bw256Hz,
            sample_rate_divider: 7,
            calibrate: Calibration::LoadStored,
        }
    }
}

/// An MPU6050 gyroscope/accelerometer combo that fuses both modalities into a drift-corrected
/// pitch/roll estimate. One instance owns one device session: the bus, the offset store, the
/// running angle state, and the timestamp of the previous sample. Not reentrant; wrap the
/// instance in external mutual exclusion before sharing it, since a 16-bit sample is read as
/// two separate byte transfers that must not interleave.
///
pub struct Mpu6050<B: RegisterBus, S: OffsetStore>
{
    bus: B,
    store: S,
    address: u8,

    gyro_scale: GyroScaleRange,
    accel_scale: AccelScaleRange,

    offsets: CalibrationOffsets,
    tracker: AngleTracker,

    /// When the previous sample was taken; `None` until the first `full_angle` call
    /// establishes the baseline.
    last_update: Option<Instant>,

    startup: Startup,
}

impl<B: RegisterBus, S: OffsetStore> Mpu6050<B, S>
{
    /// Creates a device instance: validates the configured ranges, runs the register init
    /// sequence, and either calibrates or loads persisted offsets depending on
    /// `config.calibrate`. The instance never starts without a full set of offsets.
    ///
    pub fn new(bus: B, store: S, config: DeviceConfig) -> Result<Self, Error<B::Error, S::Error>> {
        let gyro_scale = GyroScaleRange::from_dps(config.gyro_range_dps)
            .ok_or(Error::UnsupportedGyroRange(config.gyro_range_dps))?;
        let accel_scale = AccelScaleRange::from_g(config.accel_range_g)
            .ok_or(Error::UnsupportedAccelRange(config.accel_range_g))?;

        let mut mpu = Mpu6050 {
            bus,
            store,
            address: config.address,
            gyro_scale,
            accel_scale,
            offsets: CalibrationOffsets::default(),
            tracker: AngleTracker::new(),
            last_update: None,
            startup: Startup::Loaded,
        };

        info!("Initializing MPU6050 at address 0x{:02x}", config.address);
        mpu.write_register(SMPLRT_DIV, config.sample_rate_divider)?;
        mpu.write_register(PWR_MGMT_1, 0x00)?;
        mpu.write_register(PWR_MGMT_1, 0x01)?;
        mpu.write_register(CONFIG, config.dlpf as u8)?;
        mpu.write_register(INT_ENABLE, 0x01)?;
        mpu.write_register(GYRO_CONFIG, gyro_scale.as_register())?;
        mpu.write_register(ACCEL_CONFIG, accel_scale.as_register())?;

        mpu.startup = match config.calibrate {
            Calibration::CalibrateNow => {
                mpu.calibrate_gyro()?;
                mpu.calibrate_accel()?;
                Startup::Calibrated
            }
            Calibration::LoadStored => {
                mpu.offsets = CalibrationOffsets::load(&mut mpu.store)
                    .map_err(Error::Store)?
                    .ok_or(Error::MissingCalibration)?;
                Startup::Loaded
            }
        };

        Ok(mpu)
    }

    /// Reports whether this instance calibrated itself or reused persisted offsets.
    pub fn startup(&self) -> Startup {
        self.startup
    }

    /// The offsets this instance is currently correcting with.
    pub fn offsets(&self) -> &CalibrationOffsets {
        &self.offsets
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error, S::Error>> {
        self.bus
            .write_byte(self.address, register, value)
            .map_err(Error::Bus)
    }

    /// Reads the 16-bit sample spanning `high_register` and the register right after it.
    fn read_axis(&mut self, high_register: u8) -> Result<i16, Error<B::Error, S::Error>> {
        let high = self
            .bus
            .read_byte(self.address, high_register)
            .map_err(Error::Bus)?;
        let low = self
            .bus
            .read_byte(self.address, high_register + 1)
            .map_err(Error::Bus)?;
        Ok(decode_axis(high, low))
    }

    /// Gyro rates in deg/s before bias correction. Calibration averages these directly.
    fn gyro_raw(&mut self) -> Result<Vector, Error<B::Error, S::Error>> {
        let raw = Vector::new(
            self.read_axis(GYRO_XOUT_H)? as f32,
            self.read_axis(GYRO_YOUT_H)? as f32,
            self.read_axis(GYRO_ZOUT_H)? as f32,
        );
        Ok(raw / self.gyro_scale.divider())
    }

    /// Gets the current bias-corrected gyroscope rates (in deg/s).
    ///
    pub fn gyro_sample(&mut self) -> Result<Vector, Error<B::Error, S::Error>> {
        let raw = self.gyro_raw()?;
        debug!("gyro sample: ({}, {}, {}) deg/s", raw.x, raw.y, raw.z);
        Ok(Vector::new(
            raw.x - self.offsets.gyro_x,
            raw.y - self.offsets.gyro_y,
            raw.z - self.offsets.gyro_z,
        ))
    }

    /// Gets the current accelerometer values (in g). No bias is applied at this level; the
    /// accelerometer offset is only meaningful for the derived tilt angles.
    ///
    pub fn accel_sample(&mut self) -> Result<Vector, Error<B::Error, S::Error>> {
        let raw = Vector::new(
            self.read_axis(ACCEL_XOUT_H)? as f32,
            self.read_axis(ACCEL_YOUT_H)? as f32,
            self.read_axis(ACCEL_ZOUT_H)? as f32,
        );
        debug!("accel sample: ({}, {}, {}) raw counts", raw.x, raw.y, raw.z);
        Ok(raw / self.accel_scale.divider())
    }

    /// Measures the gyro rate bias by averaging rest samples, then persists it. The device
    /// must be stationary while this runs.
    ///
    pub fn calibrate_gyro(&mut self) -> Result<(), Error<B::Error, S::Error>> {
        info!("Calibrating gyroscope, keep the device still");

        let mut sum = Vector::zero();
        for _ in 0..OFFSET_SAMPLES {
            sum += self.gyro_raw()?;
        }
        let bias = sum / OFFSET_SAMPLES as f32;

        self.offsets.gyro_x = bias.x;
        self.offsets.gyro_y = bias.y;
        self.offsets.gyro_z = bias.z;
        self.offsets.save_gyro(&mut self.store).map_err(Error::Store)?;

        info!(
            "Gyroscope bias: ({}, {}, {}) deg/s",
            bias.x, bias.y, bias.z
        );
        Ok(())
    }

    /// Measures the tilt angle bias by averaging the gravity-derived angles over rest samples,
    /// then persists it. The device must be level and only gravity may be acting on it.
    ///
    pub fn calibrate_accel(&mut self) -> Result<(), Error<B::Error, S::Error>> {
        info!("Calibrating accelerometer, keep the device level");

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for _ in 0..OFFSET_SAMPLES {
            let accel = self.accel_sample()?;
            let (tilt_x, tilt_y) = tilt_from_accel(&accel);
            sum_x += tilt_x;
            sum_y += tilt_y;
        }

        self.offsets.accel_angle_x = sum_x / OFFSET_SAMPLES as f32;
        self.offsets.accel_angle_y = sum_y / OFFSET_SAMPLES as f32;
        self.offsets.save_accel(&mut self.store).map_err(Error::Store)?;

        info!(
            "Accelerometer angle bias: ({}, {}) deg",
            self.offsets.accel_angle_x, self.offsets.accel_angle_y
        );
        Ok(())
    }

    /// Seconds since the previous sample. The first call only records the baseline and
    /// reports zero, so the first fused update carries no gyro contribution.
    fn elapsed_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = match self.last_update {
            Some(previous) => (now - previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_update = Some(now);
        elapsed
    }

    /// Advances the fused estimate by one sample and returns the accumulated
    /// `(pitch, roll)` pair in degrees. This is the steady-state hot path, meant to be polled
    /// in a loop at whatever cadence the host chooses; elapsed time is measured, not assumed.
    /// The Z gyro rate is read but never fused, yaw cannot be corrected without a
    /// magnetometer.
    ///
    pub fn full_angle(&mut self) -> Result<(f32, f32), Error<B::Error, S::Error>> {
        let elapsed = self.elapsed_seconds();
        let gyro = self.gyro_sample()?;
        let accel = self.accel_sample()?;
        let (tilt_x, tilt_y) = tilt_from_accel(&accel);

        Ok(self.tracker.update(
            gyro.x * elapsed,
            gyro.y * elapsed,
            tilt_x - self.offsets.accel_angle_x,
            tilt_y - self.offsets.accel_angle_y,
        ))
    }
}

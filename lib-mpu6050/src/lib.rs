pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod bus;
pub use bus::*;

pub mod decode;
pub use decode::*;

pub mod offsets;
pub use offsets::*;

pub mod error;
pub use error::*;

pub mod registers;

pub mod mpu6050;
pub use mpu6050::*;


/// Default i2c address of the MPU6050 chip.
///
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

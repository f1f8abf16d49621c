pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;

pub const INT_ENABLE: u8 = 0x38;

// Each 16-bit sample spans the named high register and the adjacent low
// register right after it.
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_ZOUT_H: u8 = 0x3F;

pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_ZOUT_H: u8 = 0x47;

pub const PWR_MGMT_1: u8 = 0x6B;

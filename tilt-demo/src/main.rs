use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use mpu6050::registers::*;
use mpu6050::{encode_axis, Calibration, DeviceConfig, Mpu6050, RegisterBus};
use store::FileStore;

static STORE_FILE: &str = "config.ini";

/// Simulated bus presenting a stationary, level device: +1g on the accel Z axis, a small
/// constant gyro bias on X, and a little deterministic jitter on every sample so the filter
/// has something to smooth out.
struct SimulatedBus
{
    registers: [u8; 128],
    rng: u32,
}

impl SimulatedBus {
    fn new() -> Self {
        SimulatedBus { registers: [0; 128], rng: 0x2545_F491 }
    }

    /// xorshift32, gives us repeatable noise without pulling in an RNG crate.
    fn noise(&mut self) -> i16 {
        self.rng ^= self.rng << 13;
        self.rng ^= self.rng >> 17;
        self.rng ^= self.rng << 5;
        (self.rng % 17) as i16 - 8
    }

    fn set_axis(&mut self, high_register: u8, value: i16) {
        let (high, low) = encode_axis(value);
        self.registers[high_register as usize] = high;
        self.registers[high_register as usize + 1] = low;
    }

    /// Regenerates the sample behind a data register right before its high byte is read, so
    /// every polled sample is fresh but each high/low pair stays consistent.
    fn refresh(&mut self, register: u8) {
        let noise = self.noise();
        match register {
            ACCEL_XOUT_H | ACCEL_YOUT_H => self.set_axis(register, noise),
            ACCEL_ZOUT_H => self.set_axis(register, 16384 + noise),
            // 33 raw counts is about 1 deg/s at the ±1000 dps scale, a typical rest bias
            // for the calibration routine to find and cancel.
            GYRO_XOUT_H => self.set_axis(register, 33 + noise),
            GYRO_YOUT_H | GYRO_ZOUT_H => self.set_axis(register, noise),
            _ => {}
        }
    }
}

impl RegisterBus for SimulatedBus {
    type Error = Infallible;

    fn read_byte(&mut self, _address: u8, register: u8) -> Result<u8, Infallible> {
        self.refresh(register);
        Ok(self.registers[register as usize])
    }

    fn write_byte(&mut self, _address: u8, register: u8, value: u8) -> Result<(), Infallible> {
        self.registers[register as usize] = value;
        Ok(())
    }
}

fn main() {
    env_logger::init();
    log::info!("Bringing up a simulated MPU6050, offsets go to {}", STORE_FILE);

    let config = DeviceConfig {
        calibrate: Calibration::CalibrateNow,
        ..DeviceConfig::default()
    };
    let mut mpu = Mpu6050::new(SimulatedBus::new(), FileStore::new(STORE_FILE), config)
        .expect("failed to bring up the simulated device");

    loop {
        let (pitch, roll) = mpu.full_angle().expect("lost the simulated device");
        println!("pitch: {:8.3}  roll: {:8.3}", pitch, roll);
        thread::sleep(Duration::from_millis(20));
    }
}

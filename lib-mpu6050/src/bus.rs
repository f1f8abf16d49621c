/// Byte-level register bus the MPU6050 is attached to, typically i2c. The driver only ever
/// moves single bytes to and from numbered registers, so this is the whole transport contract.
/// Transfers are blocking and must not be interleaved from multiple callers: a 16-bit sample
/// is read as two separate byte transfers.
///
pub trait RegisterBus
{
    type Error: core::fmt::Debug;

    /// Reads one byte from the given register of the device at `address`.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Writes one byte to the given register of the device at `address`.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        T::read_byte(self, address, register)
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, address, register, value)
    }
}

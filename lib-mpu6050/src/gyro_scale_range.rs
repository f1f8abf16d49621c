#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Resolves a full-scale range given in deg/s into its setting. Only the four ranges the
    /// chip supports are valid; anything else is a configuration error for the caller.
    ///
    pub fn from_dps(range: u16) -> Option<Self> {
        match range {
            250 => Some(Self::D250),
            500 => Some(Self::D500),
            1000 => Some(Self::D1000),
            2000 => Some(Self::D2000),
            _ => None,
        }
    }

    /// Converts the given full scale range setting into the bits one would need to write into
    /// the `GYRO_CONFIG` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 3
    }

    /// Gets the sensitivity divider for the given scale range, i.e. how many raw counts make
    /// up one deg/s.
    ///
    pub fn divider(&self) -> f32 {
        match self {
            Self::D250 => 131.0,
            Self::D500 => 65.5,
            Self::D1000 => 32.8,
            Self::D2000 => 16.4,
        }
    }
}

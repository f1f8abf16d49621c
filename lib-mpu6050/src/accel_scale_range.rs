#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelScaleRange
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelScaleRange {

    /// Resolves a full-scale range given in g into its setting. Only the four ranges the chip
    /// supports are valid; anything else is a configuration error for the caller.
    ///
    pub fn from_g(range: u8) -> Option<Self> {
        match range {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }

    /// Converts the given full scale range setting into the bits one would need to write into
    /// the `ACCEL_CONFIG` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 3
    }

    /// Gets the sensitivity divider for the given scale range, i.e. how many raw counts make
    /// up one g.
    ///
    pub fn divider(&self) -> f32 {
        match self {
            Self::G2 => 16384.0,    // Fixed point between 2-3 MSB bits.
            Self::G4 => 8192.0,     // Fixed point between 3-4 MSB bits.
            Self::G8 => 4096.0,     // Fixed point between 4-5 MSB bits.
            Self::G16 => 2048.0,    // Fixed point between 5-6 MSB bits.
        }
    }
}

use core::fmt;

/// Driver error, generic over the bus transport error `B` and offset store error `S`. There is
/// no retry logic anywhere in the driver; every failure surfaces to the immediate caller, who
/// decides whether to abort or restart the device session.
///
#[derive(Debug)]
pub enum Error<B, S>
{
    /// The register bus failed a byte transfer. No safe numeric fallback exists for a missing
    /// sensor sample, so this is fatal for the current operation.
    Bus(B),

    /// The offset store failed to load or persist a calibration offset.
    Store(S),

    /// The requested gyroscope full-scale range is not one of 250/500/1000/2000 deg/s.
    UnsupportedGyroRange(u16),

    /// The requested accelerometer full-scale range is not one of 2/4/8/16 g.
    UnsupportedAccelRange(u8),

    /// Calibration was not requested and the store holds no complete set of offsets. Fusing
    /// with zero bias would silently produce drifting angles.
    MissingCalibration,
}

impl<B: fmt::Debug, S: fmt::Debug> std::error::Error for Error<B, S> {}

impl<B: fmt::Debug, S: fmt::Debug> fmt::Display for Error<B, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "register bus error: {:?}", err),
            Self::Store(err) => write!(f, "offset store error: {:?}", err),
            Self::UnsupportedGyroRange(range) => {
                write!(f, "unknown gyroscope full-scale range: {} deg/s", range)
            }
            Self::UnsupportedAccelRange(range) => {
                write!(f, "unknown accelerometer full-scale range: {} g", range)
            }
            Self::MissingCalibration => {
                write!(f, "no stored offsets, perform gyroscope and accelerometer calibration")
            }
        }
    }
}

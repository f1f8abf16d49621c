/// Combines the contents of a high/low register pair into a signed 16-bit sample. The chip
/// stores each sample big-endian as two's complement, so an unsigned read above 32767 wraps
/// into the negative range.
///
#[inline]
pub fn decode_axis(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

/// Splits a signed 16-bit sample back into its high/low register pair. Used by test doubles
/// that have to present samples the way the chip would.
///
#[inline]
pub fn encode_axis(value: i16) -> (u8, u8) {
    let bytes = value.to_be_bytes();
    (bytes[0], bytes[1])
}

//! Total helpers shared by the encoder and the decoder.

use std::convert::TryFrom;

/// Returns the least significant byte of `value`.
///
/// Total: the `0xff` mask keeps the value in byte range, and an out-of-range conversion would
/// yield `0` rather than fail.
///
/// ```
/// use bigend::util::low_byte;
///
/// assert_eq!(low_byte(0x1234), 0x34);
/// assert_eq!(low_byte(u64::MAX), 0xff);
/// ```
#[inline]
pub fn low_byte(value: u64) -> u8 {
    u8::try_from(value & 0xff).unwrap_or(0)
}

/// Returns at most the last `len` bytes of `bytes`.
///
/// ```
/// use bigend::util::suffix;
///
/// assert_eq!(suffix(&[1, 2, 3], 2), [2, 3]);
/// assert_eq!(suffix(&[1], 4), [1]);
/// ```
#[inline]
pub fn suffix(bytes: &[u8], len: usize) -> &[u8] {
    &bytes[bytes.len().saturating_sub(len)..]
}

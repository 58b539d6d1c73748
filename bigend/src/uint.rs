//! The fixed-width unsigned integers understood by the codec.

use crate::util;
use crate::width::Width;

mod private {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer no wider than 64 bits.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait Uint: Copy + private::Sealed {
    /// The width of this type.
    const WIDTH: Width;

    /// Narrows a 64-bit intermediate by discarding the bits above `Self::WIDTH`.
    fn narrow(value: u64) -> Self;

    /// Zero-extends `self` into a 64-bit intermediate.
    fn widen(self) -> u64;
}

macro_rules! impl_uint {
    ($($t:ty: $width:expr,)*) => {$(
        impl private::Sealed for $t {}

        impl Uint for $t {
            const WIDTH: Width = $width;

            #[inline]
            fn narrow(value: u64) -> Self {
                value as $t
            }

            #[inline]
            fn widen(self) -> u64 {
                u64::from(self)
            }
        }
    )*}
}

impl_uint! {
    u8: Width::W8,
    u16: Width::W16,
    u32: Width::W32,
    u64: Width::W64,
}

/// Folds the trailing `size` bytes of `bytes` into a big-endian value.
///
/// `size` must not exceed 8.
pub(crate) fn accumulate(bytes: &[u8], size: usize) -> u64 {
    debug_assert!(size <= 8);
    util::suffix(bytes, size)
        .iter()
        .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Splits the low `size` bytes of `value` into big-endian order.
pub(crate) fn split(value: u64, size: usize) -> Vec<u8> {
    let mut working = value;
    let mut bytes = vec![0; size];
    // least significant byte lands last
    for slot in bytes.iter_mut().rev() {
        *slot = util::low_byte(working);
        working >>= 8;
    }
    bytes
}

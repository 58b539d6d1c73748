//! A big-endian codec for fixed-width unsigned integers.
//!
//! Decoding is total: input of any length is accepted. Only the trailing bytes that fit the
//! target width are used, and missing leading bytes count as zero. Encoding always produces
//! exactly as many bytes as the integer is wide.
//!
//! ```
//! assert_eq!(bigend::encode(0xabcdu16), [0xab, 0xcd]);
//! assert_eq!(bigend::decode::<u16>(&[0x0f]), 0x000f);
//! assert_eq!(bigend::decode::<u16>(&[0xff, 0xab, 0xcd]), 0xabcd);
//! ```

#![warn(missing_docs)]

pub mod derive;
mod error;
pub mod uint;
pub mod util;
pub mod width;

#[cfg(feature = "derive")]
pub use bigend_derive::{Decode, Encode};

pub use self::error::{Error, ErrorKind};
pub use self::uint::Uint;
pub use self::width::Width;

use std::io;

/// A type that can be encoded as big-endian bytes.
pub trait Encode {
    /// Encodes `&self` into a freshly allocated byte vector.
    fn encode(&self) -> Vec<u8>;

    /// Writes the encoding of `&self` to the given writer.
    fn encode_to<W>(&self, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        let bytes = self.encode();
        writer
            .write_all(&bytes)
            .map_err(|error| Error::with_context(ErrorKind::Write(bytes.len()), error))
    }
}

/// A type that can be decoded from big-endian bytes.
///
/// Decoding is total. Implementations resolve malformed lengths by truncation or
/// zero-extension instead of failing.
pub trait Decode: Sized {
    /// Decodes a value from the given bytes.
    fn decode(bytes: &[u8]) -> Self;
}

impl<T> Encode for &T
where
    T: Encode + ?Sized,
{
    fn encode(&self) -> Vec<u8> {
        (*self).encode()
    }
}

impl<T> Encode for [T]
where
    T: Encode,
{
    fn encode(&self) -> Vec<u8> {
        let mut acc = Vec::new();
        for elem in self {
            acc.extend(elem.encode());
        }
        acc
    }
}

impl<T, const N: usize> Encode for [T; N]
where
    T: Encode,
{
    fn encode(&self) -> Vec<u8> {
        self.as_slice().encode()
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    fn encode(&self) -> Vec<u8> {
        self.as_slice().encode()
    }
}

macro_rules! impl_primitive {
    ($($t:ty)*) => {$(
        impl Encode for $t {
            fn encode(&self) -> Vec<u8> {
                encode(*self)
            }
        }

        impl Decode for $t {
            fn decode(bytes: &[u8]) -> Self {
                decode(bytes)
            }
        }
    )*}
}

impl_primitive! {
    u8 u16 u32 u64
}

/// Encodes `value` as exactly `T::WIDTH.bytes()` big-endian bytes.
///
/// ```
/// assert_eq!(bigend::encode(1u32), [0, 0, 0, 1]);
/// assert_eq!(bigend::encode(0xdeadbeefu32), [0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn encode<T>(value: T) -> Vec<u8>
where
    T: Uint,
{
    uint::split(value.widen(), T::WIDTH.bytes())
}

/// Decodes a `T` from the trailing bytes of `bytes`.
///
/// Longer input keeps only its last `T::WIDTH.bytes()` bytes. Shorter input, including empty
/// input, is zero-extended on the left.
///
/// ```
/// assert_eq!(bigend::decode::<u32>(&[]), 0);
/// assert_eq!(bigend::decode::<u8>(&[0x12, 0x34]), 0x34);
/// ```
pub fn decode<T>(bytes: &[u8]) -> T
where
    T: Uint,
{
    T::narrow(uint::accumulate(bytes, T::WIDTH.bytes()))
}

/// Decodes a `T`, rejecting input that is not exactly `T::WIDTH.bytes()` long.
///
/// ```
/// assert_eq!(bigend::decode_exact::<u16>(&[0xab, 0xcd]).unwrap(), 0xabcd);
/// assert!(bigend::decode_exact::<u16>(&[0xff, 0xab, 0xcd]).is_err());
/// ```
pub fn decode_exact<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: Uint,
{
    if bytes.len() != T::WIDTH.bytes() {
        return Err(Error::new(ErrorKind::LengthMismatch {
            width: T::WIDTH,
            actual: bytes.len(),
        }));
    }
    Ok(decode(bytes))
}

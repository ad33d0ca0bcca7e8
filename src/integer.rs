//! Integer to ASCII conversion without allocation.
//!
//! Digits are produced least significant first into the tail of a fixed
//! scratch array, then the prefix and sign are laid in front of them, so the
//! finished text is always a contiguous suffix of the scratch.

use crate::format::IntFormat;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Enough for any supported value in any format: `u128::MAX` in octal is
/// 43 digits plus prefix, `i128::MIN` in decimal is 39 digits plus sign.
pub(crate) const SCRATCH_LEN: usize = 68;

mod private {
    pub trait Sealed {}
}

/// A fixed-width primitive integer the writer knows how to render.
///
/// This trait is sealed; it is implemented for every primitive integer type
/// and for [`IntValue`].
pub trait Integer: Copy + private::Sealed {
    /// Sign and absolute value, used by decimal output.
    fn magnitude(self) -> (bool, u128);

    /// Two's-complement bit pattern at the value's own width, used by hex
    /// and octal output. `-1i8` yields `0xff`, not `0xffff...`.
    fn bits(self) -> u128;
}

/// Any primitive integer with its type erased.
///
/// Lets the chaining adapter carry integers of every width in one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValue {
    negative: bool,
    magnitude: u128,
    bits: u128,
}

impl IntValue {
    /// Erase the type of `value`, keeping what rendering needs.
    pub fn of<T: Integer>(value: T) -> Self {
        let (negative, magnitude) = value.magnitude();
        Self {
            negative,
            magnitude,
            bits: value.bits(),
        }
    }
}

impl private::Sealed for IntValue {}

impl Integer for IntValue {
    fn magnitude(self) -> (bool, u128) {
        (self.negative, self.magnitude)
    }

    fn bits(self) -> u128 {
        self.bits
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            #[inline]
            fn magnitude(self) -> (bool, u128) {
                (false, self as u128)
            }

            #[inline]
            fn bits(self) -> u128 {
                self as u128
            }
        }

        impl From<$t> for IntValue {
            fn from(value: $t) -> Self {
                IntValue::of(value)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            #[inline]
            fn magnitude(self) -> (bool, u128) {
                (self < 0, self.unsigned_abs() as u128)
            }

            #[inline]
            fn bits(self) -> u128 {
                self as $u as u128
            }
        }

        impl From<$t> for IntValue {
            fn from(value: $t) -> Self {
                IntValue::of(value)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Rendered text of one integer, terminator not included.
pub(crate) struct IntText {
    buf: [u8; SCRATCH_LEN],
    start: usize,
}

impl IntText {
    /// Render `value` in `format` into a fresh scratch.
    pub fn render<T: Integer>(value: T, format: IntFormat) -> Self {
        let mut text = Self {
            buf: [0; SCRATCH_LEN],
            start: SCRATCH_LEN,
        };

        let (negative, mut n) = match format {
            IntFormat::Decimal => value.magnitude(),
            _ => (false, value.bits()),
        };
        let radix = format.radix() as u128;
        let digits = match format {
            IntFormat::HexUpper => DIGITS_UPPER,
            _ => DIGITS_LOWER,
        };

        loop {
            text.push_front(digits[(n % radix) as usize]);
            n /= radix;
            if n == 0 {
                break;
            }
        }

        // Octal zero is just "0": the lone digit already is the prefix.
        if !(format == IntFormat::Octal && text.as_bytes() == b"0") {
            for &b in format.prefix().iter().rev() {
                text.push_front(b);
            }
        }
        if negative {
            text.push_front(b'-');
        }
        text
    }

    fn push_front(&mut self, byte: u8) {
        self.start -= 1;
        self.buf[self.start] = byte;
    }

    /// The rendered text, prefix and sign included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

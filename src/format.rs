//! Integer display formats and the directives that switch between them.
//!
//! A [`FormatState`] is the writer's persistent display mode. It is changed
//! either directly with [`FormatState::set`] or by feeding it [`Directive`]s,
//! which compose the way stream manipulators do: a base directive picks
//! decimal, hex or octal, a case directive picks the hex digit case, and the
//! two commute.

/// How integers are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntFormat {
    /// Base 10, `-` for negative values, no prefix.
    #[default]
    Decimal,
    /// Base 16 with `0x` prefix and digits `0-9a-f`.
    HexLower,
    /// Base 16 with `0X` prefix and digits `0-9A-F`.
    HexUpper,
    /// Base 8 with a leading `0`.
    Octal,
}

impl IntFormat {
    /// Numeric base of the digits.
    pub const fn radix(self) -> u32 {
        match self {
            IntFormat::Decimal => 10,
            IntFormat::HexLower | IntFormat::HexUpper => 16,
            IntFormat::Octal => 8,
        }
    }

    /// Bytes written before the digits.
    pub const fn prefix(self) -> &'static [u8] {
        match self {
            IntFormat::Decimal => b"",
            IntFormat::HexLower => b"0x",
            IntFormat::HexUpper => b"0X",
            IntFormat::Octal => b"0",
        }
    }

    /// True for either hex case.
    pub const fn is_hex(self) -> bool {
        matches!(self, IntFormat::HexLower | IntFormat::HexUpper)
    }
}

/// A base or case switch, passed through the chaining adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Hex,
    Dec,
    Oct,
    Uppercase,
    Lowercase,
}

/// Current format plus the last case directive seen.
///
/// The case is remembered even while the base is decimal or octal, so
/// `Uppercase` followed by `Hex` lands on [`IntFormat::HexUpper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatState {
    format: IntFormat,
    uppercase: bool,
}

impl FormatState {
    /// Decimal, lowercase.
    pub const fn new() -> Self {
        Self {
            format: IntFormat::Decimal,
            uppercase: false,
        }
    }

    /// The format integers are currently rendered in.
    pub fn format(&self) -> IntFormat {
        self.format
    }

    /// The case picked by the last case directive or hex format.
    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    /// Set the format outright. Choosing a hex format also fixes the case.
    pub fn set(&mut self, format: IntFormat) {
        match format {
            IntFormat::HexLower => self.uppercase = false,
            IntFormat::HexUpper => self.uppercase = true,
            IntFormat::Decimal | IntFormat::Octal => {}
        }
        self.format = format;
    }

    /// Apply one base or case directive.
    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Hex => self.format = self.hex(),
            Directive::Dec => self.format = IntFormat::Decimal,
            Directive::Oct => self.format = IntFormat::Octal,
            Directive::Uppercase | Directive::Lowercase => {
                self.uppercase = directive == Directive::Uppercase;
                // decimal and octal have no letters to flip
                if self.format.is_hex() {
                    self.format = self.hex();
                }
            }
        }
    }

    fn hex(&self) -> IntFormat {
        if self.uppercase {
            IntFormat::HexUpper
        } else {
            IntFormat::HexLower
        }
    }
}

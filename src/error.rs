//! The single failure mode of the writer.

use core::fmt;

/// A write was rejected because the bound region has too little room left.
///
/// `required` counts every byte the write needed, including the null
/// terminator and any base prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub required: usize,
    pub remaining: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity exceeded: write needs {} bytes, {} remaining",
            self.required, self.remaining
        )
    }
}

impl core::error::Error for CapacityError {}

/// Failure of a formatted append.
///
/// A `Display` impl that reports an error is not an overflow: nothing is
/// written and the overflow flag is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtError {
    Capacity(CapacityError),
    Formatter,
}

impl From<CapacityError> for FmtError {
    fn from(e: CapacityError) -> Self {
        FmtError::Capacity(e)
    }
}

impl fmt::Display for FmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmtError::Capacity(e) => fmt::Display::fmt(e, f),
            FmtError::Formatter => f.write_str("formatter reported an error"),
        }
    }
}

impl core::error::Error for FmtError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            FmtError::Capacity(e) => Some(e),
            FmtError::Formatter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_sizes() {
        let e = CapacityError {
            required: 9,
            remaining: 7,
        };
        assert_eq!(
            e.to_string(),
            "capacity exceeded: write needs 9 bytes, 7 remaining"
        );
    }

    #[test]
    fn fmt_error_wraps_capacity() {
        let e = CapacityError {
            required: 3,
            remaining: 1,
        };
        assert_eq!(FmtError::from(e), FmtError::Capacity(e));
        assert_eq!(FmtError::from(e).to_string(), e.to_string());
        assert_eq!(
            FmtError::Formatter.to_string(),
            "formatter reported an error"
        );
    }
}

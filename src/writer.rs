//! Fixed-capacity writer over a caller-supplied byte region.
//!
//! The writer never allocates and never owns its storage: it borrows a
//! `&mut [u8]` for its whole life and appends runs of bytes to it. Every
//! append is checked against the remaining room before a single byte is
//! copied, so a rejected write leaves both the region and the cursor alone
//! and only raises the sticky overflow flag.
//!
//! Text and integers are stored as null-terminated runs; raw bytes are stored
//! verbatim with no framing.

use core::ffi::CStr;
use core::fmt;

use crate::error::{CapacityError, FmtError};
use crate::format::{Directive, FormatState, IntFormat};
use crate::integer::{IntText, Integer};

/// Longest formatted run [`BufferWriter::append_fmt`] can produce, terminator included.
pub const FMT_SCRATCH_LEN: usize = 256;

/// Appends text, integers and raw bytes into a borrowed region.
///
/// ```
/// use log_buffer::{BufferWriter, IntFormat};
///
/// let mut region = [0u8; 32];
/// let mut writer = BufferWriter::new(&mut region);
/// writer.append_text("Alice").unwrap();
/// writer.set_int_format(IntFormat::HexLower).append_integer(255).unwrap();
/// assert_eq!(writer.written(), b"Alice\00xff\0");
/// ```
pub struct BufferWriter<'a> {
    region: &'a mut [u8],
    position: usize,
    overflowed: bool,
    format: FormatState,
}

impl<'a> BufferWriter<'a> {
    /// Bind a writer to `region`. The contents are neither read nor cleared.
    ///
    /// A zero-length region is accepted; every write on it is rejected.
    pub fn new(region: &'a mut [u8]) -> Self {
        Self {
            region,
            position: 0,
            overflowed: false,
            format: FormatState::new(),
        }
    }

    /// Bytes committed since construction or the last reset.
    pub fn bytes_written(&self) -> usize {
        self.position
    }

    /// Length of the bound region.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Bytes still free past the cursor.
    pub fn remaining_capacity(&self) -> usize {
        self.region.len().saturating_sub(self.position)
    }

    /// True once any write has been rejected, until the next [`reset`](Self::reset).
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// The whole bound region, including bytes past the cursor.
    ///
    /// Bytes past [`bytes_written`](Self::bytes_written) are whatever the
    /// caller left there; the writer never zeroes them.
    pub fn data(&self) -> &[u8] {
        &self.region[..]
    }

    /// The committed prefix of the region.
    pub fn written(&self) -> &[u8] {
        &self.region[..self.position]
    }

    /// The format used by [`append_integer`](Self::append_integer).
    pub fn int_format(&self) -> IntFormat {
        self.format.format()
    }

    /// Rewind to the start of the region and clear the overflow flag.
    ///
    /// Region contents and the integer format are left as they are.
    pub fn reset(&mut self) {
        log::trace!("reset after {} bytes", self.position);
        self.position = 0;
        self.overflowed = false;
    }

    /// Set the integer format; it persists until changed again.
    pub fn set_int_format(&mut self, format: IntFormat) -> &mut Self {
        log::trace!("int format {:?} -> {:?}", self.format.format(), format);
        self.format.set(format);
        self
    }

    /// Apply a base or case directive to the integer format.
    pub fn apply(&mut self, directive: Directive) -> &mut Self {
        self.format.apply(directive);
        log::trace!("{:?} -> int format {:?}", directive, self.format.format());
        self
    }

    /// Copy `bytes` verbatim, with no terminator.
    pub fn append_raw(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        self.write_run(bytes, false)
    }

    /// Copy the bytes of `text` followed by one null terminator.
    pub fn append_text(&mut self, text: &str) -> Result<(), CapacityError> {
        self.write_run(text.as_bytes(), true)
    }

    /// Copy a C string with exactly one null terminator.
    pub fn append_cstr(&mut self, text: &CStr) -> Result<(), CapacityError> {
        self.write_run(text.to_bytes(), true)
    }

    /// Render `value` in the current integer format, null-terminated.
    pub fn append_integer<T: Integer>(&mut self, value: T) -> Result<(), CapacityError> {
        self.append_integer_as(value, self.format.format())
    }

    /// Render `value` in `format` without touching the current format.
    pub fn append_integer_as<T: Integer>(
        &mut self,
        value: T,
        format: IntFormat,
    ) -> Result<(), CapacityError> {
        let text = IntText::render(value, format);
        self.write_run(text.as_bytes(), true)
    }

    /// Render formatted text followed by one null terminator.
    ///
    /// The text is rendered once into a [`FMT_SCRATCH_LEN`] byte stack
    /// scratch and copied into the region only if it fits, so a rejected
    /// write leaves the region untouched. Text longer than the scratch minus
    /// its terminator is rejected as a capacity error whose `remaining` is the
    /// room this write could actually use.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), FmtError> {
        let mut scratch = [0u8; FMT_SCRATCH_LEN];
        let mut cursor = ScratchCursor {
            buf: &mut scratch,
            len: 0,
        };
        if fmt::write(&mut cursor, args).is_err() {
            log::debug!("formatter failed after {} bytes", cursor.len);
            return Err(FmtError::Formatter);
        }
        let len = cursor.len;
        let required = len + 1;

        if required > FMT_SCRATCH_LEN {
            let room = self.remaining_capacity().min(FMT_SCRATCH_LEN);
            return Err(self.reject_with(required, room).into());
        }
        self.write_run(&scratch[..len], true)?;
        Ok(())
    }

    /// Lets `write!(writer, ...)` append one null-terminated formatted run.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), FmtError> {
        self.append_fmt(args)
    }

    /// Walk the committed prefix as null-terminated runs.
    ///
    /// Only meaningful when no raw bytes were appended: raw runs carry no
    /// framing and will be split at any zero byte they contain.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            rest: self.written(),
        }
    }

    fn write_run(&mut self, body: &[u8], terminate: bool) -> Result<(), CapacityError> {
        let required = body.len() + usize::from(terminate);
        self.check(required)?;

        let start = self.position;
        self.region[start..start + body.len()].copy_from_slice(body);
        if terminate {
            self.region[start + body.len()] = 0;
        }
        self.position += required;
        Ok(())
    }

    fn check(&mut self, required: usize) -> Result<(), CapacityError> {
        if required > self.remaining_capacity() {
            return Err(self.reject(required));
        }
        Ok(())
    }

    fn reject(&mut self, required: usize) -> CapacityError {
        let remaining = self.remaining_capacity();
        self.reject_with(required, remaining)
    }

    fn reject_with(&mut self, required: usize, remaining: usize) -> CapacityError {
        log::debug!(
            "rejected {} byte write, {} of {} remaining",
            required,
            remaining,
            self.region.len()
        );
        self.overflowed = true;
        CapacityError {
            required,
            remaining,
        }
    }
}

impl fmt::Debug for BufferWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferWriter")
            .field("capacity", &self.region.len())
            .field("position", &self.position)
            .field("overflowed", &self.overflowed)
            .field("int_format", &self.format.format())
            .finish()
    }
}

/// Iterator over null-terminated runs, see [`BufferWriter::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'b> {
    rest: &'b [u8],
}

impl<'b> Iterator for Entries<'b> {
    type Item = &'b [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.iter().position(|&b| b == 0) {
            Some(nul) => {
                let run = &self.rest[..nul];
                self.rest = &self.rest[nul + 1..];
                Some(run)
            }
            // unterminated tail
            None => {
                let run = self.rest;
                self.rest = &[];
                Some(run)
            }
        }
    }
}

/// Copies into a fixed scratch while it fits and keeps measuring past it.
struct ScratchCursor<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl fmt::Write for ScratchCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if let Some(dst) = self.buf.get_mut(self.len..end) {
            dst.copy_from_slice(s.as_bytes());
        }
        self.len = end;
        Ok(())
    }
}

//! `std::io::Write` for hosted builds.

use std::io;

use crate::writer::BufferWriter;

impl io::Write for BufferWriter<'_> {
    /// Writes all of `buf` or nothing; a short region yields
    /// [`io::ErrorKind::WriteZero`] and raises the overflow flag.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append_raw(buf)
            .map(|()| buf.len())
            .map_err(|e| io::Error::new(io::ErrorKind::WriteZero, e))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

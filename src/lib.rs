//! Zero-allocation log buffer.
//!
//! A [`BufferWriter`] borrows a fixed byte region from the caller and appends
//! entries to it back to back:
//!
//! - text and integers as null-terminated ASCII runs,
//! - raw bytes verbatim, with no terminator or length prefix.
//!
//! Writes are all-or-nothing. A write that does not fit is rejected without
//! touching the region and raises a sticky overflow flag that only
//! [`BufferWriter::reset`] clears.
//!
//! The crate is `no_std` unless the `std` feature is enabled, which adds a
//! `std::io::Write` implementation.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod chain;
mod error;
mod format;
mod integer;
#[cfg(feature = "std")]
mod io;
mod writer;

pub use chain::Item;
pub use error::{CapacityError, FmtError};
pub use format::{Directive, FormatState, IntFormat};
pub use integer::{IntValue, Integer};
pub use writer::{BufferWriter, Entries, FMT_SCRATCH_LEN};

//! Fluent chaining over the append operations.
//!
//! [`BufferWriter::push`] takes anything convertible into an [`Item`],
//! performs the matching append and hands the writer back. Individual results
//! are dropped; check [`BufferWriter::has_overflowed`] at the end of a chain.

use core::ffi::CStr;

use crate::format::{Directive, IntFormat};
use crate::integer::IntValue;
use crate::writer::BufferWriter;

/// One argument of a chained write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    CText(&'a CStr),
    Int(IntValue),
    Directive(Directive),
    Format(IntFormat),
}

impl<'a> From<&'a [u8]> for Item<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Item::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Item<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Item::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Item<'a> {
    fn from(text: &'a str) -> Self {
        Item::Text(text)
    }
}

impl<'a> From<&'a CStr> for Item<'a> {
    fn from(text: &'a CStr) -> Self {
        Item::CText(text)
    }
}

impl From<IntValue> for Item<'_> {
    fn from(value: IntValue) -> Self {
        Item::Int(value)
    }
}

impl From<Directive> for Item<'_> {
    fn from(directive: Directive) -> Self {
        Item::Directive(directive)
    }
}

impl From<IntFormat> for Item<'_> {
    fn from(format: IntFormat) -> Self {
        Item::Format(format)
    }
}

macro_rules! int_items {
    ($($t:ty),*) => {$(
        impl From<$t> for Item<'_> {
            fn from(value: $t) -> Self {
                Item::Int(IntValue::of(value))
            }
        }
    )*};
}

int_items!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl BufferWriter<'_> {
    /// Append or apply `item` and return the writer for further chaining.
    ///
    /// ```
    /// use log_buffer::{BufferWriter, Directive};
    ///
    /// let mut region = [0u8; 32];
    /// let mut writer = BufferWriter::new(&mut region);
    /// writer.push("Value: ").push(Directive::Hex).push(255).push(" End");
    /// assert_eq!(writer.written(), b"Value: \00xff\0 End\0");
    /// ```
    pub fn push<'i>(&mut self, item: impl Into<Item<'i>>) -> &mut Self {
        let _ = match item.into() {
            Item::Bytes(bytes) => self.append_raw(bytes),
            Item::Text(text) => self.append_text(text),
            Item::CText(text) => self.append_cstr(text),
            Item::Int(value) => self.append_integer(value),
            Item::Directive(directive) => {
                self.apply(directive);
                Ok(())
            }
            Item::Format(format) => {
                self.set_int_format(format);
                Ok(())
            }
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_shape() {
        assert_eq!(Item::from("a"), Item::Text("a"));
        assert_eq!(Item::from(&b"a"[..]), Item::Bytes(b"a"));
        assert_eq!(Item::from(b"ab"), Item::Bytes(b"ab"));
        assert_eq!(Item::from(c"a"), Item::CText(c"a"));
        assert_eq!(Item::from(7u16), Item::Int(IntValue::of(7u16)));
        assert_eq!(Item::from(Directive::Oct), Item::Directive(Directive::Oct));
    }

    #[test]
    fn push_returns_same_writer() {
        let mut region = [0u8; 8];
        let mut w = BufferWriter::new(&mut region);
        let before: *const BufferWriter<'_> = &w;
        let after: *const BufferWriter<'_> = w.push("test");
        assert_eq!(before, after);
    }

    #[test]
    fn failures_only_show_in_flag() {
        let mut region = [0u8; 4];
        let mut w = BufferWriter::new(&mut region);
        w.push("toolong").push("ok");
        assert!(w.has_overflowed());
        assert_eq!(w.written(), b"ok\0");
    }

    #[test]
    fn format_items_set_mode() {
        let mut region = [0u8; 16];
        let mut w = BufferWriter::new(&mut region);
        w.push(IntFormat::HexUpper).push(255u8).push(Directive::Lowercase).push(255u8);
        assert_eq!(w.written(), b"0XFF\00xff\0");
    }
}

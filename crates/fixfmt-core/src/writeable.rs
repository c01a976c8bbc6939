//! Output abstraction shared by every engine type that renders text.
//!
//! Types implement [`Writeable`] instead of [`std::fmt::Display`] so the
//! C boundary can ask for the exact output length before committing any
//! bytes to a caller-owned buffer.

use std::fmt;

/// A value that renders itself into any [`fmt::Write`] sink.
pub trait Writeable {
    /// Write the full representation of `self` into `sink`.
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result;

    /// Exact number of UTF-8 bytes [`Writeable::write_to`] produces.
    fn write_len(&self) -> usize {
        let mut counter = LengthCounter(0);
        // LengthCounter is infallible.
        let _ = self.write_to(&mut counter);
        counter.0
    }

    /// Render into a freshly allocated `String`.
    fn write_to_string(&self) -> String {
        let mut out = String::with_capacity(self.write_len());
        let _ = self.write_to(&mut out);
        out
    }
}

struct LengthCounter(usize);

impl fmt::Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

//! Bounded output over a caller-owned byte slice.

use std::ffi::CStr;
use std::marker::PhantomData;
use std::str::Utf8Error;

use fixfmt_capi::{FixfmtWriteable, fixfmt_simple_writeable};

use crate::error::Error;

/// A fixed-capacity sink borrowing `buf` for its whole life.
///
/// The last byte of the slice is reserved for the NUL terminator that keeps
/// [`Sink::as_c_str`] valid, so a 40-byte buffer holds 39 bytes of text.
/// Nothing is ever allocated: output that does not fit is rejected whole.
pub struct Sink<'buf> {
    raw: FixfmtWriteable,
    _buf: PhantomData<&'buf mut [u8]>,
}

impl<'buf> Sink<'buf> {
    pub fn new(buf: &'buf mut [u8]) -> Self {
        let mut sink = Self {
            raw: fixfmt_simple_writeable(buf.as_mut_ptr().cast(), buf.len()),
            _buf: PhantomData,
        };
        sink.clear();
        sink
    }

    /// Bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Maximum text length, excluding the terminator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.cap
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.raw.cap - self.raw.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Reset the cursor; the buffer reads as an empty C string afterwards.
    pub fn clear(&mut self) {
        self.raw.len = 0;
        (self.raw.flush)(&mut self.raw);
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        if self.raw.buf.is_null() {
            return &[];
        }
        // SAFETY: `buf` came from the `&'buf mut [u8]` borrowed by `new`, and
        // the sink protocol keeps `len <= cap < buf.len()`.
        unsafe { std::slice::from_raw_parts(self.raw.buf.cast::<u8>(), self.raw.len) }
    }

    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The written text as a C string, `None` for a zero-sized buffer.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        if self.raw.buf.is_null() {
            return None;
        }
        // SAFETY: as in `as_bytes`; the simple sink reserves `buf[cap]` so
        // `buf[len]` is in bounds and holds the terminator.
        let with_nul =
            unsafe { std::slice::from_raw_parts(self.raw.buf.cast::<u8>(), self.raw.len + 1) };
        CStr::from_bytes_until_nul(with_nul).ok()
    }

    pub(crate) fn as_raw(&mut self) -> *mut FixfmtWriteable {
        &mut self.raw
    }

    /// Turn a `false` from a foreign write into [`Error::Write`].
    pub(crate) fn check(&self, written: bool) -> crate::Result<()> {
        if written {
            Ok(())
        } else {
            Err(Error::Write {
                capacity: self.capacity(),
                len: self.len(),
            })
        }
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sink_is_an_empty_c_string() {
        let mut buf = [0xffu8; 8];
        let sink = Sink::new(&mut buf);
        assert_eq!(sink.len(), 0);
        assert_eq!(sink.capacity(), 7);
        assert_eq!(sink.remaining(), 7);
        assert!(sink.is_empty());
        assert_eq!(sink.as_c_str().unwrap().to_bytes(), b"");
        assert_eq!(sink.as_str().unwrap(), "");
    }

    #[test]
    fn zero_sized_buffer_has_no_c_string() {
        let mut buf: [u8; 0] = [];
        let sink = Sink::new(&mut buf);
        assert_eq!(sink.capacity(), 0);
        assert!(sink.as_c_str().is_none());
        assert!(sink.as_bytes().is_empty());
    }

    #[test]
    fn check_reports_capacity() {
        let mut buf = [0u8; 4];
        let sink = Sink::new(&mut buf);
        assert!(sink.check(true).is_ok());
        let err = sink.check(false).unwrap_err();
        assert!(matches!(err, Error::Write { capacity: 3, len: 0 }), "{err:?}");
    }
}

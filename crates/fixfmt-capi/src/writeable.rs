//! Caller-owned, bounded output sinks.
//!
//! A [`FixfmtWriteable`] is a view over a buffer the caller allocated: the
//! engine appends UTF-8 bytes at `buf + len` and advances `len`, never past
//! `cap`. The sink owns nothing.
//!
//! # Write protocol
//!
//! Each engine write is all or nothing. The exact output length is computed
//! first; if it does not fit in `cap`, the sink's `grow` hook is asked for
//! the required total. If `grow` refuses, the call returns `false` and the
//! sink is left exactly as it was. After a successful write `flush` runs.
//!
//! Operations named `*_format` and `*_tostring` start writing at cursor 0,
//! replacing previous contents. Operations named `*_append` and `*_write_to`
//! write after the current contents.
//!
//! # Custom sinks
//!
//! C code may fill the struct itself. `grow` receives the sink and the
//! required capacity; it may swap `buf`/`cap` for a larger buffer and return
//! `true`, and may use `context` for its own bookkeeping. Both hooks must be
//! non-null.

use std::ffi::c_void;
use std::fmt;
use std::os::raw::c_char;
use std::ptr;

use fixfmt_core::Writeable;

#[repr(C)]
pub struct FixfmtWriteable {
    /// Opaque pointer for custom `flush`/`grow` implementations.
    pub context: *mut c_void,
    /// Start of the caller's buffer.
    pub buf: *mut c_char,
    /// Bytes written so far.
    pub len: usize,
    /// Bytes available for output.
    pub cap: usize,
    /// Called after each successful write.
    pub flush: extern "C" fn(*mut FixfmtWriteable),
    /// Asked for more room; returns whether `cap` now covers the request.
    pub grow: extern "C" fn(*mut FixfmtWriteable, usize) -> bool,
}

impl fmt::Debug for FixfmtWriteable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixfmtWriteable")
            .field("buf", &self.buf)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish_non_exhaustive()
    }
}

/// Build a sink over `buf[..buf_size]` that reserves the last byte for a NUL
/// terminator, written after every successful write.
///
/// A null `buf` or a `buf_size` of 0 gives a sink with no capacity that never
/// touches memory.
#[unsafe(no_mangle)]
pub extern "C" fn fixfmt_simple_writeable(buf: *mut c_char, buf_size: usize) -> FixfmtWriteable {
    let (buf, cap) = if buf.is_null() || buf_size == 0 {
        (ptr::null_mut(), 0)
    } else {
        (buf, buf_size - 1)
    };
    FixfmtWriteable {
        context: ptr::null_mut(),
        buf,
        len: 0,
        cap,
        flush: simple_flush,
        grow: simple_grow,
    }
}

extern "C" fn simple_flush(this: *mut FixfmtWriteable) {
    // SAFETY: only installed by `fixfmt_simple_writeable`, whose buffer holds
    // `cap + 1` bytes, and `len <= cap` is maintained by every write.
    unsafe {
        if let Some(this) = this.as_mut() {
            if !this.buf.is_null() {
                *this.buf.add(this.len) = 0;
            }
        }
    }
}

extern "C" fn simple_grow(_this: *mut FixfmtWriteable, _capacity: usize) -> bool {
    false
}

impl FixfmtWriteable {
    /// Write `value` after the current contents.
    pub(crate) fn append<W: Writeable + ?Sized>(&mut self, value: &W) -> bool {
        self.write_from(self.len, value)
    }

    /// Replace the current contents with `value`.
    pub(crate) fn replace<W: Writeable + ?Sized>(&mut self, value: &W) -> bool {
        self.write_from(0, value)
    }

    fn write_from<W: Writeable + ?Sized>(&mut self, start: usize, value: &W) -> bool {
        let Some(required) = start.checked_add(value.write_len()) else {
            return false;
        };
        if required > self.cap {
            let this: *mut Self = self;
            if !(self.grow)(this, required) || required > self.cap {
                tracing::debug!(required, cap = self.cap, "sink capacity exhausted");
                return false;
            }
        }
        let previous = self.len;
        self.len = start;
        if value.write_to(self).is_err() {
            self.len = previous;
            return false;
        }
        let this: *mut Self = self;
        (self.flush)(this);
        true
    }
}

impl fmt::Write for FixfmtWriteable {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.is_empty() {
            return Ok(());
        }
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        if end > self.cap || self.buf.is_null() {
            return Err(fmt::Error);
        }
        // SAFETY: `buf` is valid for `cap` bytes per the sink contract and
        // `len + s.len() <= cap` was checked above.
        unsafe {
            ptr::copy_nonoverlapping(s.as_ptr(), self.buf.cast::<u8>().add(self.len), s.len());
        }
        self.len = end;
        Ok(())
    }
}

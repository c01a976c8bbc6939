//! Move-only ownership of foreign handles.
//!
//! A [`Resource`] holds at most one live handle and calls the matching
//! `fixfmt_*_destroy` exactly once: on [`Resource::destroy`] or on drop,
//! whichever comes first. [`Resource::take`] moves the handle out and leaves
//! the empty sentinel behind, so the source can still be dropped safely.

use std::mem;

use fixfmt_capi::{
    FixfmtDataProvider, FixfmtFixedDecimal, FixfmtFixedDecimalFormat, FixfmtLocale, HandleKind,
};

use crate::error::{Error, Result};

/// A raw handle kind exported by `fixfmt-capi`.
pub trait ForeignHandle: Copy {
    const KIND: HandleKind;
    const EMPTY: Self;

    fn is_empty(self) -> bool;

    /// Release the engine resource.
    ///
    /// # Safety
    ///
    /// `self` must be a live handle that has not been released.
    unsafe fn release(self);
}

impl ForeignHandle for *mut FixfmtLocale {
    const KIND: HandleKind = HandleKind::Locale;
    const EMPTY: Self = std::ptr::null_mut();

    fn is_empty(self) -> bool {
        self.is_null()
    }

    unsafe fn release(self) {
        // SAFETY: forwarded caller contract.
        unsafe { fixfmt_capi::fixfmt_locale_destroy(self) }
    }
}

impl ForeignHandle for FixfmtDataProvider {
    const KIND: HandleKind = HandleKind::DataProvider;
    const EMPTY: Self = FixfmtDataProvider::EMPTY;

    fn is_empty(self) -> bool {
        FixfmtDataProvider::is_empty(&self)
    }

    unsafe fn release(self) {
        // SAFETY: forwarded caller contract.
        unsafe { fixfmt_capi::fixfmt_data_provider_destroy(self) }
    }
}

impl ForeignHandle for *mut FixfmtFixedDecimal {
    const KIND: HandleKind = HandleKind::FixedDecimal;
    const EMPTY: Self = std::ptr::null_mut();

    fn is_empty(self) -> bool {
        self.is_null()
    }

    unsafe fn release(self) {
        // SAFETY: forwarded caller contract.
        unsafe { fixfmt_capi::fixfmt_fixed_decimal_destroy(self) }
    }
}

impl ForeignHandle for *mut FixfmtFixedDecimalFormat {
    const KIND: HandleKind = HandleKind::FixedDecimalFormat;
    const EMPTY: Self = std::ptr::null_mut();

    fn is_empty(self) -> bool {
        self.is_null()
    }

    unsafe fn release(self) {
        // SAFETY: forwarded caller contract.
        unsafe { fixfmt_capi::fixfmt_fixed_decimal_format_destroy(self) }
    }
}

/// Exclusive owner of one foreign handle, or of nothing.
#[derive(Debug)]
pub struct Resource<H: ForeignHandle> {
    handle: H,
}

impl<H: ForeignHandle> Resource<H> {
    /// Take ownership of a handle fresh from a successful factory call.
    ///
    /// The caller must not release `handle` itself afterwards.
    pub(crate) fn adopt(handle: H) -> Self {
        Self { handle }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handle.is_empty()
    }

    /// The raw handle, still owned by `self`.
    #[must_use]
    pub fn as_ffi(&self) -> H {
        self.handle
    }

    /// Move the handle into a new owner, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            handle: mem::replace(&mut self.handle, H::EMPTY),
        }
    }

    /// Release the handle now. Returns whether a foreign destroy ran.
    pub fn destroy(&mut self) -> bool {
        let handle = mem::replace(&mut self.handle, H::EMPTY);
        if handle.is_empty() {
            return false;
        }
        // SAFETY: `handle` came from `adopt` and was just detached, so it is
        // live and no other owner can release it.
        unsafe { handle.release() };
        true
    }

    /// The raw handle, or [`Error::EmptyHandle`] if it was moved out or
    /// destroyed.
    pub(crate) fn live(&self) -> Result<H> {
        if self.is_empty() {
            return Err(Error::EmptyHandle { kind: H::KIND });
        }
        Ok(self.handle)
    }
}

impl<H: ForeignHandle> Drop for Resource<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Forward the ownership API of an inner [`Resource`] on a newtype wrapper.
macro_rules! resource_wrapper {
    ($name:ident, $handle:ty) => {
        impl $name {
            /// Whether this wrapper no longer owns a handle.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// The raw handle, still owned by `self`.
            #[must_use]
            pub fn as_ffi(&self) -> $handle {
                self.0.as_ffi()
            }

            /// Move the handle into a new wrapper, leaving `self` empty.
            #[must_use]
            pub fn take(&mut self) -> Self {
                Self(self.0.take())
            }

            /// Release the handle now. Returns whether a foreign destroy ran.
            pub fn destroy(&mut self) -> bool {
                self.0.destroy()
            }
        }
    };
}

pub(crate) use resource_wrapper;

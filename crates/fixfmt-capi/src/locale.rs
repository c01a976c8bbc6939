//! Locale handles.

use std::os::raw::c_char;
use std::ptr;

use fixfmt_core::LanguageIdentifier;

use crate::accounting::{self, HandleKind};
use crate::writeable::FixfmtWriteable;
use crate::{byte_slice, guard};

/// Opaque type for use behind a pointer, is [`LanguageIdentifier`].
///
/// Obtained from [`fixfmt_locale_create`], released with [`fixfmt_locale_destroy`].
pub type FixfmtLocale = LanguageIdentifier;

/// Parse a language identifier such as `"bn"` or `"sr-Latn-RS"`.
///
/// Returns null when `value` is not a well-formed identifier.
///
/// # Safety
///
/// `value` must be valid for reads of `len` bytes (it may be null if `len` is 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_locale_create(value: *const c_char, len: usize) -> *mut FixfmtLocale {
    guard("fixfmt_locale_create", ptr::null_mut(), || {
        // SAFETY: forwarded caller contract.
        let Some(bytes) = (unsafe { byte_slice(value, len) }) else {
            tracing::debug!("null locale pointer with nonzero length");
            return ptr::null_mut();
        };
        match LanguageIdentifier::from_bytes(bytes) {
            Ok(langid) => {
                accounting::record_create(HandleKind::Locale);
                Box::into_raw(Box::new(langid))
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected locale identifier");
                ptr::null_mut()
            }
        }
    })
}

/// Write the canonical form of `locale` into `write`, replacing its contents.
///
/// Returns `false` if either pointer is null or the sink is too small.
///
/// # Safety
///
/// `locale` must be null or a live handle from [`fixfmt_locale_create`];
/// `write` must be null or point to a valid [`FixfmtWriteable`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_locale_tostring(
    locale: *const FixfmtLocale,
    write: *mut FixfmtWriteable,
) -> bool {
    guard("fixfmt_locale_tostring", false, || {
        // SAFETY: forwarded caller contract.
        match unsafe { (locale.as_ref(), write.as_mut()) } {
            (Some(locale), Some(write)) => write.replace(locale),
            _ => false,
        }
    })
}

/// Destructor for [`FixfmtLocale`]. A null pointer is a no-op.
///
/// # Safety
///
/// `locale` must be null or a handle from [`fixfmt_locale_create`] that has
/// not been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_locale_destroy(locale: *mut FixfmtLocale) {
    if locale.is_null() {
        return;
    }
    guard("fixfmt_locale_destroy", (), || {
        // SAFETY: produced by `Box::into_raw` in `fixfmt_locale_create`.
        drop(unsafe { Box::from_raw(locale) });
        accounting::record_destroy(HandleKind::Locale);
    });
}

//! C foreign-function interface for fixfmt.
//!
//! This crate exposes a **stable C ABI** over the `fixfmt-core` engine. Every
//! exported symbol is `extern "C"` and prefixed with `fixfmt_`; the matching
//! declarations live in `include/fixfmt.h`.
//!
//! # Quick start (C)
//!
//! ```c
//! #include "fixfmt.h"
//!
//! FixfmtLocale *locale = fixfmt_locale_create("bn", 2);
//! FixfmtCreateDataProviderResult provider = fixfmt_fs_data_provider_create(path, strlen(path));
//! if (!provider.success) { return 1; }
//! FixfmtCreateFixedDecimalResult decimal = fixfmt_fixed_decimal_create(1000007, 0);
//! FixfmtFixedDecimalFormatOptions opts = {FixfmtGroupingStrategy_Auto, FixfmtSignDisplay_Auto};
//! FixfmtCreateFixedDecimalFormatResult fdf =
//!     fixfmt_fixed_decimal_format_create(locale, &provider.provider, opts);
//!
//! char output[40];
//! FixfmtWriteable sink = fixfmt_simple_writeable(output, sizeof output);
//! if (fixfmt_fixed_decimal_format_format(fdf.fdf, decimal.decimal, &sink)) {
//!     printf("%s\n", output);
//! }
//!
//! fixfmt_fixed_decimal_format_destroy(fdf.fdf);
//! fixfmt_fixed_decimal_destroy(decimal.decimal);
//! fixfmt_data_provider_destroy(provider.provider);
//! fixfmt_locale_destroy(locale);
//! ```
//!
//! # Error handling
//!
//! Nothing unwinds across the boundary. Fallible constructors return a
//! `#[repr(C)]` result struct whose `success` flag must be checked before the
//! payload is read; on failure nothing was allocated and the payload is the
//! empty sentinel. Formatting and mutation return `bool`. Panics inside the
//! engine are caught and reported through the same failure channel.
//!
//! # Memory management
//!
//! * Every handle is released by its `fixfmt_*_destroy` function, at most once.
//! * Destroying an empty handle (null pointer, or `{NULL, 0}` for data
//!   providers) is a no-op.
//! * Writeable sinks never own their buffer; see [`writeable`].
//!
//! # Thread safety
//!
//! Handles carry no internal synchronization. A handle must not be used,
//! moved, or destroyed from more than one thread at a time.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod accounting;
pub mod data_provider;
pub mod decimal_format;
pub mod fixed_decimal;
pub mod locale;
pub mod writeable;

pub use accounting::{HandleCounts, HandleKind, HandleStats};
pub use data_provider::{
    FixfmtCreateDataProviderResult, FixfmtDataProvider, ProviderKind,
    fixfmt_data_provider_destroy, fixfmt_fs_data_provider_create,
    fixfmt_invariant_data_provider_create,
};
pub use decimal_format::{
    FixfmtCreateFixedDecimalFormatResult, FixfmtFixedDecimalFormat,
    FixfmtFixedDecimalFormatOptions, FixfmtGroupingStrategy, FixfmtSignDisplay,
    fixfmt_fixed_decimal_format_create, fixfmt_fixed_decimal_format_destroy,
    fixfmt_fixed_decimal_format_format, fixfmt_fixed_decimal_format_format_append,
    fixfmt_fixed_decimal_format_options_default,
};
pub use fixed_decimal::{
    FixfmtCreateFixedDecimalResult, FixfmtFixedDecimal, fixfmt_fixed_decimal_create,
    fixfmt_fixed_decimal_create_fromstr, fixfmt_fixed_decimal_destroy,
    fixfmt_fixed_decimal_multiply_pow10, fixfmt_fixed_decimal_negate,
    fixfmt_fixed_decimal_write_to,
};
pub use locale::{FixfmtLocale, fixfmt_locale_create, fixfmt_locale_destroy, fixfmt_locale_tostring};
pub use writeable::{FixfmtWriteable, fixfmt_simple_writeable};

use std::os::raw::c_char;
use std::panic::AssertUnwindSafe;

/// Run `body`, converting a panic into `on_panic` so it never unwinds into C.
pub(crate) fn guard<T>(operation: &'static str, on_panic: T, body: impl FnOnce() -> T) -> T {
    std::panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|_| {
        tracing::error!(operation, "panic caught at the C boundary");
        on_panic
    })
}

/// View a `(pointer, length)` pair from C as a byte slice.
///
/// Returns `None` for a null pointer with a nonzero length.
///
/// # Safety
///
/// When `len > 0`, `ptr` must be valid for reads of `len` bytes for `'a`.
pub(crate) unsafe fn byte_slice<'a>(ptr: *const c_char, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and valid for `len` bytes per the caller contract.
    Some(unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) })
}

//! Fixed-decimal handles.

use std::os::raw::c_char;
use std::ptr;

use fixfmt_core::FixedDecimal;

use crate::accounting::{self, HandleKind};
use crate::writeable::FixfmtWriteable;
use crate::{byte_slice, guard};

/// Opaque type for use behind a pointer, is [`FixedDecimal`].
///
/// Obtained from [`fixfmt_fixed_decimal_create`] or
/// [`fixfmt_fixed_decimal_create_fromstr`], released with
/// [`fixfmt_fixed_decimal_destroy`].
pub type FixfmtFixedDecimal = FixedDecimal;

/// Result of the fixed-decimal constructors. `decimal` is null unless
/// `success` is true.
#[repr(C)]
#[derive(Debug)]
pub struct FixfmtCreateFixedDecimalResult {
    pub decimal: *mut FixfmtFixedDecimal,
    pub success: bool,
}

impl FixfmtCreateFixedDecimalResult {
    fn failure() -> Self {
        Self {
            decimal: ptr::null_mut(),
            success: false,
        }
    }

    fn from_decimal(decimal: FixedDecimal) -> Self {
        accounting::record_create(HandleKind::FixedDecimal);
        Self {
            decimal: Box::into_raw(Box::new(decimal)),
            success: true,
        }
    }
}

/// Construct `value * 10^magnitude`.
///
/// Fails when the result leaves the representable magnitude range.
#[unsafe(no_mangle)]
pub extern "C" fn fixfmt_fixed_decimal_create(
    value: i64,
    magnitude: i16,
) -> FixfmtCreateFixedDecimalResult {
    guard(
        "fixfmt_fixed_decimal_create",
        FixfmtCreateFixedDecimalResult::failure(),
        || match FixedDecimal::try_new(value, magnitude) {
            Ok(decimal) => FixfmtCreateFixedDecimalResult::from_decimal(decimal),
            Err(err) => {
                tracing::debug!(value, magnitude, error = %err, "unrepresentable decimal");
                FixfmtCreateFixedDecimalResult::failure()
            }
        },
    )
}

/// Parse a decimal such as `"-1234.50"`.
///
/// # Safety
///
/// `value` must be valid for reads of `len` bytes (it may be null if `len` is 0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_create_fromstr(
    value: *const c_char,
    len: usize,
) -> FixfmtCreateFixedDecimalResult {
    guard(
        "fixfmt_fixed_decimal_create_fromstr",
        FixfmtCreateFixedDecimalResult::failure(),
        || {
            // SAFETY: forwarded caller contract.
            let parsed = unsafe { byte_slice(value, len) }
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
                .map(str::parse::<FixedDecimal>);
            match parsed {
                Some(Ok(decimal)) => FixfmtCreateFixedDecimalResult::from_decimal(decimal),
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "rejected decimal string");
                    FixfmtCreateFixedDecimalResult::failure()
                }
                None => {
                    tracing::debug!("decimal string is null or not UTF-8");
                    FixfmtCreateFixedDecimalResult::failure()
                }
            }
        },
    )
}

/// Multiply by `10^power` in place. Returns `false`, leaving the value
/// unchanged, if the result is unrepresentable or `fd` is null.
///
/// # Safety
///
/// `fd` must be null or a live handle not aliased by another in-flight call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_multiply_pow10(
    fd: *mut FixfmtFixedDecimal,
    power: i16,
) -> bool {
    guard("fixfmt_fixed_decimal_multiply_pow10", false, || {
        // SAFETY: forwarded caller contract.
        let Some(fd) = (unsafe { fd.as_mut() }) else {
            return false;
        };
        fd.multiply_pow10(power).is_ok()
    })
}

/// Flip the sign in place. A null `fd` is a no-op.
///
/// # Safety
///
/// `fd` must be null or a live handle not aliased by another in-flight call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_negate(fd: *mut FixfmtFixedDecimal) {
    guard("fixfmt_fixed_decimal_negate", (), || {
        // SAFETY: forwarded caller contract.
        if let Some(fd) = unsafe { fd.as_mut() } {
            fd.negate();
        }
    });
}

/// Append the plain ASCII form (`-1234.5`) to `write`.
///
/// # Safety
///
/// `fd` must be null or a live handle; `write` must be null or point to a
/// valid [`FixfmtWriteable`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_write_to(
    fd: *const FixfmtFixedDecimal,
    write: *mut FixfmtWriteable,
) -> bool {
    guard("fixfmt_fixed_decimal_write_to", false, || {
        // SAFETY: forwarded caller contract.
        match unsafe { (fd.as_ref(), write.as_mut()) } {
            (Some(fd), Some(write)) => write.append(fd),
            _ => false,
        }
    })
}

/// Destructor for [`FixfmtFixedDecimal`]. A null pointer is a no-op.
///
/// # Safety
///
/// `fd` must be null or a handle from one of the constructors that has not
/// been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_destroy(fd: *mut FixfmtFixedDecimal) {
    if fd.is_null() {
        return;
    }
    guard("fixfmt_fixed_decimal_destroy", (), || {
        // SAFETY: produced by `Box::into_raw` in a constructor.
        drop(unsafe { Box::from_raw(fd) });
        accounting::record_destroy(HandleKind::FixedDecimal);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writeable::fixfmt_simple_writeable;

    fn render(fd: *const FixfmtFixedDecimal) -> String {
        let mut buf = [0 as c_char; 64];
        let mut sink = fixfmt_simple_writeable(buf.as_mut_ptr(), buf.len());
        assert!(unsafe { fixfmt_fixed_decimal_write_to(fd, &mut sink) });
        let bytes: Vec<u8> = buf[..sink.len].iter().map(|&b| b as u8).collect();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn create_success_carries_live_handle() {
        let result = fixfmt_fixed_decimal_create(1000007, -2);
        assert!(result.success);
        assert!(!result.decimal.is_null());
        assert_eq!(render(result.decimal), "10000.07");
        unsafe { fixfmt_fixed_decimal_destroy(result.decimal) };
    }

    #[test]
    fn create_failure_allocates_nothing() {
        let before = accounting::snapshot();
        let result = fixfmt_fixed_decimal_create(i64::MAX, i16::MAX);
        assert!(!result.success);
        assert!(result.decimal.is_null());
        assert_eq!(accounting::snapshot(), before);
    }

    #[test]
    fn fromstr_parses_and_rejects() {
        let text = "-12.50";
        let ok = unsafe { fixfmt_fixed_decimal_create_fromstr(text.as_ptr().cast(), text.len()) };
        assert!(ok.success);
        assert_eq!(render(ok.decimal), "-12.50");
        unsafe { fixfmt_fixed_decimal_destroy(ok.decimal) };

        let bad = "12e3";
        let err = unsafe { fixfmt_fixed_decimal_create_fromstr(bad.as_ptr().cast(), bad.len()) };
        assert!(!err.success);
        assert!(err.decimal.is_null());
    }

    #[test]
    fn mutation_through_handle() {
        let result = fixfmt_fixed_decimal_create(42, 0);
        unsafe {
            assert!(fixfmt_fixed_decimal_multiply_pow10(result.decimal, 2));
            fixfmt_fixed_decimal_negate(result.decimal);
            assert!(!fixfmt_fixed_decimal_multiply_pow10(result.decimal, i16::MAX));
            assert!(!fixfmt_fixed_decimal_multiply_pow10(ptr::null_mut(), 1));
        }
        assert_eq!(render(result.decimal), "-4200");
        unsafe { fixfmt_fixed_decimal_destroy(result.decimal) };
    }
}

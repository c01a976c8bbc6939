//! Fixed-decimal formatter handles and their options.

use std::ptr;

use fixfmt_core::{FixedDecimalFormat, FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};

use crate::accounting::{self, HandleKind};
use crate::data_provider::FixfmtDataProvider;
use crate::fixed_decimal::FixfmtFixedDecimal;
use crate::guard;
use crate::locale::FixfmtLocale;
use crate::writeable::FixfmtWriteable;

/// Opaque type for use behind a pointer, is [`FixedDecimalFormat`].
///
/// Obtained from [`fixfmt_fixed_decimal_format_create`], released with
/// [`fixfmt_fixed_decimal_format_destroy`].
pub type FixfmtFixedDecimalFormat = FixedDecimalFormat;

/// C mirror of [`GroupingStrategy`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixfmtGroupingStrategy {
    #[default]
    Auto = 0,
    Never = 1,
    Always = 2,
    Min2 = 3,
}

/// C mirror of [`SignDisplay`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixfmtSignDisplay {
    #[default]
    Auto = 0,
    Never = 1,
    Always = 2,
    ExceptZero = 3,
    Negative = 4,
}

/// Options passed by value to [`fixfmt_fixed_decimal_format_create`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixfmtFixedDecimalFormatOptions {
    pub grouping_strategy: FixfmtGroupingStrategy,
    pub sign_display: FixfmtSignDisplay,
}

impl From<FixfmtGroupingStrategy> for GroupingStrategy {
    fn from(value: FixfmtGroupingStrategy) -> Self {
        match value {
            FixfmtGroupingStrategy::Auto => Self::Auto,
            FixfmtGroupingStrategy::Never => Self::Never,
            FixfmtGroupingStrategy::Always => Self::Always,
            FixfmtGroupingStrategy::Min2 => Self::Min2,
        }
    }
}

impl From<GroupingStrategy> for FixfmtGroupingStrategy {
    fn from(value: GroupingStrategy) -> Self {
        match value {
            GroupingStrategy::Auto => Self::Auto,
            GroupingStrategy::Never => Self::Never,
            GroupingStrategy::Always => Self::Always,
            GroupingStrategy::Min2 => Self::Min2,
        }
    }
}

impl From<FixfmtSignDisplay> for SignDisplay {
    fn from(value: FixfmtSignDisplay) -> Self {
        match value {
            FixfmtSignDisplay::Auto => Self::Auto,
            FixfmtSignDisplay::Never => Self::Never,
            FixfmtSignDisplay::Always => Self::Always,
            FixfmtSignDisplay::ExceptZero => Self::ExceptZero,
            FixfmtSignDisplay::Negative => Self::Negative,
        }
    }
}

impl From<SignDisplay> for FixfmtSignDisplay {
    fn from(value: SignDisplay) -> Self {
        match value {
            SignDisplay::Auto => Self::Auto,
            SignDisplay::Never => Self::Never,
            SignDisplay::Always => Self::Always,
            SignDisplay::ExceptZero => Self::ExceptZero,
            SignDisplay::Negative => Self::Negative,
        }
    }
}

impl From<FixfmtFixedDecimalFormatOptions> for FixedDecimalFormatOptions {
    fn from(value: FixfmtFixedDecimalFormatOptions) -> Self {
        Self {
            grouping_strategy: value.grouping_strategy.into(),
            sign_display: value.sign_display.into(),
        }
    }
}

impl From<FixedDecimalFormatOptions> for FixfmtFixedDecimalFormatOptions {
    fn from(value: FixedDecimalFormatOptions) -> Self {
        Self {
            grouping_strategy: value.grouping_strategy.into(),
            sign_display: value.sign_display.into(),
        }
    }
}

/// Default options: automatic grouping, automatic sign display.
#[unsafe(no_mangle)]
pub extern "C" fn fixfmt_fixed_decimal_format_options_default() -> FixfmtFixedDecimalFormatOptions {
    FixfmtFixedDecimalFormatOptions::default()
}

/// Result of [`fixfmt_fixed_decimal_format_create`]. `fdf` is null unless
/// `success` is true.
#[repr(C)]
#[derive(Debug)]
pub struct FixfmtCreateFixedDecimalFormatResult {
    pub fdf: *mut FixfmtFixedDecimalFormat,
    pub success: bool,
}

impl FixfmtCreateFixedDecimalFormatResult {
    fn failure() -> Self {
        Self {
            fdf: ptr::null_mut(),
            success: false,
        }
    }
}

/// Build a formatter for `locale` from `provider`'s data.
///
/// Fails when either handle is null or empty, or when the provider has no
/// decimal symbols for the locale. The options never cause a failure. The
/// formatter keeps its own copy of the data, so `locale` and `provider` may
/// be destroyed afterwards.
///
/// # Safety
///
/// `locale` must be null or a live locale handle; `provider` must be null or
/// point to an empty or live data provider handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_format_create(
    locale: *const FixfmtLocale,
    provider: *const FixfmtDataProvider,
    options: FixfmtFixedDecimalFormatOptions,
) -> FixfmtCreateFixedDecimalFormatResult {
    guard(
        "fixfmt_fixed_decimal_format_create",
        FixfmtCreateFixedDecimalFormatResult::failure(),
        || {
            // SAFETY: forwarded caller contract.
            let handles = unsafe {
                (
                    locale.as_ref(),
                    provider.as_ref().and_then(|p| p.as_provider()),
                )
            };
            let (Some(langid), Some(provider)) = handles else {
                tracing::debug!("formatter requested with a null or empty handle");
                return FixfmtCreateFixedDecimalFormatResult::failure();
            };
            match FixedDecimalFormat::try_new(langid, provider, options.into()) {
                Ok(fdf) => {
                    accounting::record_create(HandleKind::FixedDecimalFormat);
                    FixfmtCreateFixedDecimalFormatResult {
                        fdf: Box::into_raw(Box::new(fdf)),
                        success: true,
                    }
                }
                Err(err) => {
                    tracing::debug!(%langid, error = %err, "no formatter data for locale");
                    FixfmtCreateFixedDecimalFormatResult::failure()
                }
            }
        },
    )
}

/// Format `value` into `write`, starting at cursor 0.
///
/// Returns `false` if any pointer is null or the output does not fit; the
/// sink is then left unchanged.
///
/// # Safety
///
/// `fdf` and `value` must be null or live handles; `write` must be null or
/// point to a valid [`FixfmtWriteable`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_format_format(
    fdf: *const FixfmtFixedDecimalFormat,
    value: *const FixfmtFixedDecimal,
    write: *mut FixfmtWriteable,
) -> bool {
    guard("fixfmt_fixed_decimal_format_format", false, || {
        // SAFETY: forwarded caller contract.
        match unsafe { (fdf.as_ref(), value.as_ref(), write.as_mut()) } {
            (Some(fdf), Some(value), Some(write)) => write.replace(&fdf.format(value)),
            _ => false,
        }
    })
}

/// Like [`fixfmt_fixed_decimal_format_format`], but writes after the sink's
/// current contents.
///
/// # Safety
///
/// Same as [`fixfmt_fixed_decimal_format_format`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_format_format_append(
    fdf: *const FixfmtFixedDecimalFormat,
    value: *const FixfmtFixedDecimal,
    write: *mut FixfmtWriteable,
) -> bool {
    guard("fixfmt_fixed_decimal_format_format_append", false, || {
        // SAFETY: forwarded caller contract.
        match unsafe { (fdf.as_ref(), value.as_ref(), write.as_mut()) } {
            (Some(fdf), Some(value), Some(write)) => write.append(&fdf.format(value)),
            _ => false,
        }
    })
}

/// Destructor for [`FixfmtFixedDecimalFormat`]. A null pointer is a no-op.
///
/// # Safety
///
/// `fdf` must be null or a handle from [`fixfmt_fixed_decimal_format_create`]
/// that has not been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_fixed_decimal_format_destroy(fdf: *mut FixfmtFixedDecimalFormat) {
    if fdf.is_null() {
        return;
    }
    guard("fixfmt_fixed_decimal_format_destroy", (), || {
        // SAFETY: produced by `Box::into_raw` in `fixfmt_fixed_decimal_format_create`.
        drop(unsafe { Box::from_raw(fdf) });
        accounting::record_destroy(HandleKind::FixedDecimalFormat);
    });
}

use fixfmt_capi::{
    FixfmtFixedDecimalFormat, fixfmt_fixed_decimal_format_create,
    fixfmt_fixed_decimal_format_format, fixfmt_fixed_decimal_format_format_append,
};
use fixfmt_core::FixedDecimalFormatOptions;

use crate::decimal::FixedDecimal;
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::provider::DataProvider;
use crate::resource::{Resource, resource_wrapper};
use crate::sink::Sink;

/// An owned formatter bound to one locale's data.
///
/// The formatter copies what it needs at construction, so the locale and
/// provider used to build it may be dropped right after.
#[derive(Debug)]
pub struct FixedDecimalFormat(Resource<*mut FixfmtFixedDecimalFormat>);

resource_wrapper!(FixedDecimalFormat, *mut FixfmtFixedDecimalFormat);

impl FixedDecimalFormat {
    pub fn new(
        locale: &Locale,
        provider: &DataProvider,
        options: FixedDecimalFormatOptions,
    ) -> Result<Self> {
        let raw_locale = locale.live()?;
        let raw_provider = provider.live()?;
        // SAFETY: both handles are live for the call; the engine copies what
        // it keeps.
        let result = unsafe {
            fixfmt_fixed_decimal_format_create(raw_locale, &raw_provider, options.into())
        };
        if !result.success {
            return Err(Error::Formatter {
                locale: locale.describe(),
            });
        }
        Ok(Self(Resource::adopt(result.fdf)))
    }

    /// Format `value` into `sink`, replacing what it held.
    ///
    /// On [`Error::Write`] the sink keeps its previous contents.
    pub fn format(&self, value: &FixedDecimal, sink: &mut Sink<'_>) -> Result<()> {
        let (fdf, value) = (self.0.live()?, value.live()?);
        // SAFETY: both handles are live for the call; the sink pointer is borrowed.
        let written = unsafe { fixfmt_fixed_decimal_format_format(fdf, value, sink.as_raw()) };
        sink.check(written)
    }

    /// Format `value` after the sink's current contents.
    pub fn format_append(&self, value: &FixedDecimal, sink: &mut Sink<'_>) -> Result<()> {
        let (fdf, value) = (self.0.live()?, value.live()?);
        // SAFETY: as in `format`.
        let written =
            unsafe { fixfmt_fixed_decimal_format_format_append(fdf, value, sink.as_raw()) };
        sink.check(written)
    }
}

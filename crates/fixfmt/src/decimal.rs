use std::str::FromStr;

use fixfmt_capi::{
    FixfmtCreateFixedDecimalResult, FixfmtFixedDecimal, fixfmt_fixed_decimal_create,
    fixfmt_fixed_decimal_create_fromstr, fixfmt_fixed_decimal_multiply_pow10,
    fixfmt_fixed_decimal_negate, fixfmt_fixed_decimal_write_to,
};

use crate::error::{Error, Result};
use crate::resource::{Resource, resource_wrapper};
use crate::sink::Sink;

/// An owned decimal value.
#[derive(Debug)]
pub struct FixedDecimal(Resource<*mut FixfmtFixedDecimal>);

resource_wrapper!(FixedDecimal, *mut FixfmtFixedDecimal);

impl FixedDecimal {
    /// `value * 10^magnitude`.
    pub fn new(value: i64, magnitude: i16) -> Result<Self> {
        Self::adopt(fixfmt_fixed_decimal_create(value, magnitude))
            .ok_or(Error::Decimal { value, magnitude })
    }

    /// Parse a plain decimal string such as `-1234.50`; trailing fraction
    /// zeros are kept for display.
    pub fn parse(input: &str) -> Result<Self> {
        // SAFETY: `input` is valid for `input.len()` bytes.
        let result =
            unsafe { fixfmt_fixed_decimal_create_fromstr(input.as_ptr().cast(), input.len()) };
        Self::adopt(result).ok_or_else(|| Error::DecimalSyntax {
            input: input.into(),
        })
    }

    fn adopt(result: FixfmtCreateFixedDecimalResult) -> Option<Self> {
        result
            .success
            .then(|| Self(Resource::adopt(result.decimal)))
    }

    /// Multiply by `10^power` in place; on [`Error::Limit`] the value is unchanged.
    pub fn multiply_pow10(&mut self, power: i16) -> Result<()> {
        let raw = self.0.live()?;
        // SAFETY: `raw` is live and `&mut self` rules out aliasing calls.
        if unsafe { fixfmt_fixed_decimal_multiply_pow10(raw, power) } {
            Ok(())
        } else {
            Err(Error::Limit)
        }
    }

    pub fn negate(&mut self) -> Result<()> {
        let raw = self.0.live()?;
        // SAFETY: as in `multiply_pow10`.
        unsafe { fixfmt_fixed_decimal_negate(raw) };
        Ok(())
    }

    pub(crate) fn live(&self) -> Result<*mut FixfmtFixedDecimal> {
        self.0.live()
    }

    /// Append the plain ASCII form to `sink`.
    pub fn write_to(&self, sink: &mut Sink<'_>) -> Result<()> {
        let raw = self.0.live()?;
        // SAFETY: `raw` is live for the call; the sink pointer is borrowed.
        let written = unsafe { fixfmt_fixed_decimal_write_to(raw, sink.as_raw()) };
        sink.check(written)
    }
}

impl FromStr for FixedDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

//! Arbitrary-precision base-10 fixed-point numbers.
//!
//! A [`FixedDecimal`] stores its significant digits (no leading or trailing
//! zeros), the power of ten of the most significant digit, a sign flag, and
//! a lower display bound that keeps trailing fractional zeros such as the
//! `0` in `1.50`. Every digit position must fit in an `i16` magnitude.
//!
//! # Example
//!
//! ```
//! use fixfmt_core::{FixedDecimal, Writeable};
//!
//! let mut dec = FixedDecimal::from(1000007);
//! dec.multiply_pow10(-2).unwrap();
//! assert_eq!(dec.write_to_string(), "10000.07");
//!
//! let parsed: FixedDecimal = "-0.50".parse().unwrap();
//! assert_eq!(parsed.write_to_string(), "-0.50");
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::DecimalError;
use crate::writeable::Writeable;

/// A signed decimal number with an explicit digit string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedDecimal {
    /// Significant digits, most significant first. Empty means zero.
    digits: SmallVec<[u8; 20]>,
    /// Power of ten of `digits[0]`; zero when the value is zero.
    magnitude: i16,
    /// Lowest magnitude to display, always `<= 0`.
    lower_magnitude: i16,
    is_negative: bool,
}

impl FixedDecimal {
    /// Build `value * 10^magnitude`.
    pub fn try_new(value: i64, magnitude: i16) -> Result<Self, DecimalError> {
        let mut dec = Self::from(value);
        dec.multiply_pow10(magnitude)?;
        Ok(dec)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether the sign flag is set. Negative zero reports `true`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Flip the sign.
    pub fn negate(&mut self) {
        self.is_negative = !self.is_negative;
    }

    /// Multiply by `10^power`, failing without modification if any digit
    /// would leave the `i16` magnitude range.
    pub fn multiply_pow10(&mut self, power: i16) -> Result<(), DecimalError> {
        let lower = (i32::from(self.lower_magnitude) + i32::from(power))
            .clamp(i32::from(i16::MIN), 0) as i16;
        if self.is_zero() {
            self.lower_magnitude = lower;
            return Ok(());
        }
        let magnitude = i32::from(self.magnitude) + i32::from(power);
        let lowest = magnitude - (self.digits.len() as i32 - 1);
        if magnitude > i32::from(i16::MAX) || lowest < i32::from(i16::MIN) {
            return Err(DecimalError::Limit);
        }
        self.magnitude = magnitude as i16;
        self.lower_magnitude = lower;
        Ok(())
    }

    /// Displayed magnitude range, highest first when reversed.
    ///
    /// Always contains `0`, so the integer part is never empty.
    #[must_use]
    pub fn magnitude_range(&self) -> RangeInclusive<i16> {
        if self.is_zero() {
            return self.lower_magnitude..=0;
        }
        let lowest_digit =
            (i32::from(self.magnitude) - (self.digits.len() as i32 - 1)) as i16;
        let upper = self.magnitude.max(0);
        let lower = lowest_digit.min(self.lower_magnitude);
        lower..=upper
    }

    /// Digit at `magnitude`, `0` outside the significant digits.
    #[must_use]
    pub fn digit_at(&self, magnitude: i16) -> u8 {
        let index = i32::from(self.magnitude) - i32::from(magnitude);
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i))
            .copied()
            .unwrap_or(0)
    }

    fn from_digits(
        mut digits: SmallVec<[u8; 20]>,
        magnitude: i32,
        lower_magnitude: i32,
        is_negative: bool,
    ) -> Result<Self, DecimalError> {
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);
        let magnitude = magnitude - leading as i32;
        while digits.last() == Some(&0) {
            digits.pop();
        }
        let lower_magnitude = lower_magnitude.min(0);
        if lower_magnitude < i32::from(i16::MIN) {
            return Err(DecimalError::Limit);
        }
        if digits.is_empty() {
            return Ok(Self {
                digits,
                magnitude: 0,
                lower_magnitude: lower_magnitude as i16,
                is_negative,
            });
        }
        let lowest = magnitude - (digits.len() as i32 - 1);
        if magnitude > i32::from(i16::MAX) || lowest < i32::from(i16::MIN) {
            return Err(DecimalError::Limit);
        }
        Ok(Self {
            digits,
            magnitude: magnitude as i16,
            lower_magnitude: lower_magnitude as i16,
            is_negative,
        })
    }
}

impl From<i64> for FixedDecimal {
    fn from(value: i64) -> Self {
        let mut remaining = value.unsigned_abs();
        let mut reversed: SmallVec<[u8; 20]> = SmallVec::new();
        while remaining > 0 {
            reversed.push((remaining % 10) as u8);
            remaining /= 10;
        }
        let magnitude = reversed.len() as i16 - 1;
        let trailing = reversed.iter().take_while(|&&d| d == 0).count();
        let digits: SmallVec<[u8; 20]> = reversed[trailing..].iter().rev().copied().collect();
        Self {
            magnitude: if digits.is_empty() { 0 } else { magnitude },
            digits,
            lower_magnitude: 0,
            is_negative: value < 0,
        }
    }
}

impl FromStr for FixedDecimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || fraction.is_some_and(|f| !all_digits(f)) {
            return Err(DecimalError::Syntax);
        }
        let fraction = fraction.unwrap_or("");
        let digits: SmallVec<[u8; 20]> = integer
            .bytes()
            .chain(fraction.bytes())
            .map(|b| b - b'0')
            .collect();
        let magnitude = i32::try_from(integer.len()).map_err(|_| DecimalError::Limit)? - 1;
        let lower_magnitude = -i32::try_from(fraction.len()).map_err(|_| DecimalError::Limit)?;
        Self::from_digits(digits, magnitude, lower_magnitude, is_negative)
    }
}

impl Writeable for FixedDecimal {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_negative {
            sink.write_char('-')?;
        }
        for m in self.magnitude_range().rev() {
            if m == -1 {
                sink.write_char('.')?;
            }
            sink.write_char(char::from(b'0' + self.digit_at(m)))?;
        }
        Ok(())
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

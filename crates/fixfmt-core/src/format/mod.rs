//! Locale-aware fixed-decimal formatting.
//!
//! # Example
//!
//! ```
//! use fixfmt_core::{
//!     FixedDecimal, FixedDecimalFormat, FixedDecimalFormatOptions, InvariantDataProvider,
//!     LanguageIdentifier, Writeable,
//! };
//!
//! let langid = LanguageIdentifier::und();
//! let fdf = FixedDecimalFormat::try_new(
//!     &langid,
//!     &InvariantDataProvider,
//!     FixedDecimalFormatOptions::default(),
//! )
//! .unwrap();
//! let value = FixedDecimal::from(-1234567);
//! assert_eq!(fdf.format(&value).write_to_string(), "-1,234,567");
//! ```

mod grouper;
mod options;

pub use options::{FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};

use std::fmt;

use crate::decimal::FixedDecimal;
use crate::error::{DataError, FormatError};
use crate::locale::LanguageIdentifier;
use crate::provider::{AffixesV1, DataProvider, DecimalSymbolsV1};
use crate::writeable::Writeable;

/// A formatter bound to one locale's symbols and a set of options.
#[derive(Debug, Clone)]
pub struct FixedDecimalFormat {
    symbols: DecimalSymbolsV1,
    digits: [char; 10],
    options: FixedDecimalFormatOptions,
    resolved: LanguageIdentifier,
}

impl FixedDecimalFormat {
    /// Load decimal symbols for `langid` from `provider`.
    ///
    /// Fails only when the provider has no usable data for the locale;
    /// `options` never cause a failure.
    pub fn try_new<P: DataProvider + ?Sized>(
        langid: &LanguageIdentifier,
        provider: &P,
        options: FixedDecimalFormatOptions,
    ) -> Result<Self, FormatError> {
        let response = provider.load_decimal_symbols(langid)?;
        let digits = digit_table(response.payload.zero_digit).ok_or_else(|| {
            DataError::InvalidSymbols {
                langid: response.langid.to_string(),
                reason: format!(
                    "zero digit {:?} does not start a run of ten code points",
                    response.payload.zero_digit
                ),
            }
        })?;
        Ok(Self {
            symbols: response.payload,
            digits,
            options,
            resolved: response.langid,
        })
    }

    /// The identifier the symbols were actually loaded under.
    #[must_use]
    pub fn resolved_locale(&self) -> &LanguageIdentifier {
        &self.resolved
    }

    #[must_use]
    pub fn options(&self) -> FixedDecimalFormatOptions {
        self.options
    }

    /// Bind a value; the result renders through [`Writeable`].
    #[must_use]
    pub fn format<'l>(&'l self, value: &'l FixedDecimal) -> FormattedFixedDecimal<'l> {
        FormattedFixedDecimal { fdf: self, value }
    }

    fn sign_affixes(&self, value: &FixedDecimal) -> Option<&AffixesV1> {
        let minus = &self.symbols.minus_sign_affixes;
        let plus = &self.symbols.plus_sign_affixes;
        match self.options.sign_display {
            SignDisplay::Never => None,
            SignDisplay::Auto => value.is_negative().then_some(minus),
            SignDisplay::Always if value.is_negative() => Some(minus),
            SignDisplay::Always => Some(plus),
            SignDisplay::ExceptZero if value.is_zero() => None,
            SignDisplay::ExceptZero if value.is_negative() => Some(minus),
            SignDisplay::ExceptZero => Some(plus),
            SignDisplay::Negative => (value.is_negative() && !value.is_zero()).then_some(minus),
        }
    }
}

fn digit_table(zero: char) -> Option<[char; 10]> {
    let mut digits = ['0'; 10];
    for (offset, slot) in (0u32..).zip(digits.iter_mut()) {
        *slot = char::from_u32(u32::from(zero) + offset)?;
    }
    Some(digits)
}

/// A value paired with the formatter that renders it.
#[derive(Debug, Clone, Copy)]
pub struct FormattedFixedDecimal<'l> {
    fdf: &'l FixedDecimalFormat,
    value: &'l FixedDecimal,
}

impl Writeable for FormattedFixedDecimal<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let symbols = &self.fdf.symbols;
        let affixes = self.fdf.sign_affixes(self.value);
        if let Some(affixes) = affixes {
            sink.write_str(&affixes.prefix)?;
        }
        let range = self.value.magnitude_range();
        let upper = *range.end();
        for m in range.rev() {
            if m == -1 {
                sink.write_str(&symbols.decimal_separator)?;
            }
            sink.write_char(self.fdf.digits[usize::from(self.value.digit_at(m))])?;
            if grouper::check(
                upper,
                m,
                self.fdf.options.grouping_strategy,
                &symbols.grouping_sizes,
            ) {
                sink.write_str(&symbols.grouping_separator)?;
            }
        }
        if let Some(affixes) = affixes {
            sink.write_str(&affixes.suffix)?;
        }
        Ok(())
    }
}

impl fmt::Display for FormattedFixedDecimal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataResponse, GroupingSizesV1, InvariantDataProvider};

    struct Fixed(DecimalSymbolsV1);

    impl DataProvider for Fixed {
        fn load_decimal_symbols(
            &self,
            langid: &LanguageIdentifier,
        ) -> Result<DataResponse<DecimalSymbolsV1>, DataError> {
            Ok(DataResponse {
                langid: langid.clone(),
                payload: self.0.clone(),
            })
        }
    }

    fn bengali() -> DecimalSymbolsV1 {
        DecimalSymbolsV1 {
            grouping_sizes: GroupingSizesV1 {
                primary: 3,
                secondary: 2,
                min_grouping: 1,
            },
            zero_digit: '০',
            ..DecimalSymbolsV1::root()
        }
    }

    fn render(
        provider: &dyn DataProvider,
        options: FixedDecimalFormatOptions,
        value: &FixedDecimal,
    ) -> String {
        let fdf = FixedDecimalFormat::try_new(&"bn".parse().unwrap(), provider, options).unwrap();
        fdf.format(value).write_to_string()
    }

    fn with_sign(sign_display: SignDisplay) -> FixedDecimalFormatOptions {
        FixedDecimalFormatOptions {
            sign_display,
            ..Default::default()
        }
    }

    #[test]
    fn bengali_digits_and_indian_grouping() {
        let out = render(
            &Fixed(bengali()),
            FixedDecimalFormatOptions::default(),
            &FixedDecimal::from(1000007),
        );
        assert_eq!(out, "১০,০০,০০৭");
    }

    #[test]
    fn fraction_uses_decimal_separator() {
        let value = FixedDecimal::try_new(123456789, -3).unwrap();
        let out = render(&InvariantDataProvider, Default::default(), &value);
        assert_eq!(out, "123,456.789");
    }

    #[test]
    fn grouping_never() {
        let options = FixedDecimalFormatOptions {
            grouping_strategy: GroupingStrategy::Never,
            ..Default::default()
        };
        let out = render(&InvariantDataProvider, options, &FixedDecimal::from(1234567));
        assert_eq!(out, "1234567");
    }

    #[test]
    fn grouping_min2() {
        let options = FixedDecimalFormatOptions {
            grouping_strategy: GroupingStrategy::Min2,
            ..Default::default()
        };
        assert_eq!(
            render(&InvariantDataProvider, options, &FixedDecimal::from(1000)),
            "1000"
        );
        assert_eq!(
            render(&InvariantDataProvider, options, &FixedDecimal::from(10000)),
            "10,000"
        );
    }

    #[test]
    fn sign_display_variants() {
        let cases = [
            (SignDisplay::Auto, ["-5", "0", "5", "-0"]),
            (SignDisplay::Never, ["5", "0", "5", "0"]),
            (SignDisplay::Always, ["-5", "+0", "+5", "-0"]),
            (SignDisplay::ExceptZero, ["-5", "0", "+5", "0"]),
            (SignDisplay::Negative, ["-5", "0", "5", "0"]),
        ];
        let values: [FixedDecimal; 4] = [
            FixedDecimal::from(-5),
            FixedDecimal::from(0),
            FixedDecimal::from(5),
            "-0".parse().unwrap(),
        ];
        for (display, expected) in cases {
            for (value, want) in values.iter().zip(expected) {
                let got = render(&InvariantDataProvider, with_sign(display), value);
                assert_eq!(got, want, "{display:?} on {value}");
            }
        }
    }

    #[test]
    fn suffix_affixes_are_written() {
        let symbols = DecimalSymbolsV1 {
            minus_sign_affixes: AffixesV1 {
                prefix: "(".into(),
                suffix: ")".into(),
            },
            ..DecimalSymbolsV1::root()
        };
        let out = render(&Fixed(symbols), Default::default(), &FixedDecimal::from(-42));
        assert_eq!(out, "(42)");
    }

    #[test]
    fn invalid_zero_digit_is_rejected() {
        let symbols = DecimalSymbolsV1 {
            zero_digit: char::MAX,
            ..DecimalSymbolsV1::root()
        };
        let err = FixedDecimalFormat::try_new(
            &"xx".parse().unwrap(),
            &Fixed(symbols),
            Default::default(),
        )
        .unwrap_err();
        assert!(
            matches!(err, FormatError::Data(DataError::InvalidSymbols { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn write_len_is_exact_for_multibyte_digits() {
        let fdf = FixedDecimalFormat::try_new(
            &"bn".parse().unwrap(),
            &Fixed(bengali()),
            Default::default(),
        )
        .unwrap();
        let value = FixedDecimal::from(1000007);
        let formatted = fdf.format(&value);
        assert_eq!(formatted.write_len(), formatted.write_to_string().len());
        assert_eq!(formatted.write_len(), 7 * 3 + 2);
    }
}

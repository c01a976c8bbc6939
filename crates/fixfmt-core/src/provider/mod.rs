//! Locale data loading.
//!
//! A [`DataProvider`] resolves a [`LanguageIdentifier`] to the decimal
//! symbols used by the formatter. Two implementations ship with the engine:
//!
//! - [`FsDataProvider`]: reads a JSON bundle laid out as
//!   `<root>/manifest.json` plus `<root>/decimal/symbols@1/<langid>.json`.
//! - [`InvariantDataProvider`]: returns locale-neutral root symbols for
//!   every request. Useful when no bundle is available.

mod fs;
mod invariant;

pub use fs::FsDataProvider;
pub use invariant::InvariantDataProvider;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::locale::LanguageIdentifier;

/// Bundle path components of the decimal symbols key.
pub const DECIMAL_SYMBOLS_V1_KEY: [&str; 2] = ["decimal", "symbols@1"];

/// A loaded payload together with the identifier it was actually found under
/// (which may be a fallback of the requested one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataResponse<T> {
    pub langid: LanguageIdentifier,
    pub payload: T,
}

/// Source of locale data.
pub trait DataProvider {
    fn load_decimal_symbols(
        &self,
        langid: &LanguageIdentifier,
    ) -> Result<DataResponse<DecimalSymbolsV1>, DataError>;
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn load_decimal_symbols(
        &self,
        langid: &LanguageIdentifier,
    ) -> Result<DataResponse<DecimalSymbolsV1>, DataError> {
        (**self).load_decimal_symbols(langid)
    }
}

/// Strings placed before and after a signed number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AffixesV1 {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

/// Digit group sizes, counted from the decimal point.
///
/// `primary` is the size of the group closest to the decimal point,
/// `secondary` the size of every group above it (`0` means "same as
/// primary"), and `min_grouping` the number of digits the most significant
/// group must have before any separator is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingSizesV1 {
    pub primary: u8,
    #[serde(default)]
    pub secondary: u8,
    #[serde(default = "default_min_grouping")]
    pub min_grouping: u8,
}

fn default_min_grouping() -> u8 {
    1
}

/// Symbols needed to render a fixed decimal in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalSymbolsV1 {
    pub minus_sign_affixes: AffixesV1,
    pub plus_sign_affixes: AffixesV1,
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub grouping_sizes: GroupingSizesV1,
    /// Digit zero; the other nine digits follow it contiguously.
    pub zero_digit: char,
}

impl DecimalSymbolsV1 {
    /// Root symbols: ASCII digits, `.` and `,`, groups of three.
    #[must_use]
    pub fn root() -> Self {
        Self {
            minus_sign_affixes: AffixesV1 {
                prefix: "-".to_string(),
                suffix: String::new(),
            },
            plus_sign_affixes: AffixesV1 {
                prefix: "+".to_string(),
                suffix: String::new(),
            },
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            grouping_sizes: GroupingSizesV1 {
                primary: 3,
                secondary: 3,
                min_grouping: 1,
            },
            zero_digit: '0',
        }
    }
}

impl Default for DecimalSymbolsV1 {
    fn default() -> Self {
        Self::root()
    }
}

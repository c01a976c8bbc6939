#![forbid(unsafe_code)]

//! Engine behind the fixfmt foreign-function boundary.
//!
//! # Role in fixfmt
//! `fixfmt-core` owns the linguistic behavior: parsing language identifiers,
//! loading decimal symbols from a data bundle, representing fixed-point
//! decimals, and rendering them with locale-specific digits, separators, and
//! grouping.
//!
//! # How it fits in the system
//! `fixfmt-capi` exposes these types to C as opaque handles, and `fixfmt`
//! wraps that C surface in move-only resource types. Nothing in this crate
//! knows about raw pointers; all output goes through the [`Writeable`] trait
//! so callers decide where the bytes land.

pub mod decimal;
pub mod error;
pub mod format;
pub mod locale;
pub mod provider;
pub mod writeable;

pub use decimal::FixedDecimal;
pub use error::{DataError, DecimalError, FormatError, LocaleError};
pub use format::{FixedDecimalFormat, FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};
pub use locale::LanguageIdentifier;
pub use provider::{
    DataProvider, DataResponse, DecimalSymbolsV1, FsDataProvider, InvariantDataProvider,
};
pub use writeable::Writeable;

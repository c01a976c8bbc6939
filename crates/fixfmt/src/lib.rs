//! Safe host-side layer over the fixfmt C ABI.
//!
//! Every engine object lives behind an opaque handle exported by
//! `fixfmt-capi`. The types here own those handles: each wrapper releases
//! its handle exactly once, can hand it to a new owner with `take()`, and
//! reports [`Error::EmptyHandle`] instead of calling into the engine after it
//! was emptied. Output goes to a [`Sink`] over a slice the caller owns.
//!
//! ```
//! use fixfmt::{DataProvider, FixedDecimal, FixedDecimalFormat, Locale, Sink};
//!
//! let locale = Locale::new("en").unwrap();
//! let provider = DataProvider::invariant().unwrap();
//! let fdf = FixedDecimalFormat::new(&locale, &provider, Default::default()).unwrap();
//! let value = FixedDecimal::new(-1234567, -2).unwrap();
//!
//! let mut buf = [0u8; 40];
//! let mut sink = Sink::new(&mut buf);
//! fdf.format(&value, &mut sink).unwrap();
//! assert_eq!(sink.as_str().unwrap(), "-12,345.67");
//! ```
//!
//! Wrappers hold raw pointers and are neither `Send` nor `Sync`.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod decimal;
pub mod error;
pub mod format;
pub mod locale;
pub mod logging;
pub mod provider;
pub mod resource;
pub mod sink;

pub use config::{ConfigError, FormatConfig};
pub use decimal::FixedDecimal;
pub use error::{Error, Result};
pub use fixfmt_capi::{HandleKind, ProviderKind};
pub use fixfmt_core::{FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};
pub use format::FixedDecimalFormat;
pub use locale::Locale;
pub use provider::DataProvider;
pub use resource::{ForeignHandle, Resource};
pub use sink::Sink;

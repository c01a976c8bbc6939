use fixfmt_capi::HandleKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid locale identifier: {name:?}")]
    InvalidLocale { name: String },

    #[error("failed to open data provider: {location}")]
    DataProvider { location: String },

    #[error("decimal {value}e{magnitude} is out of range")]
    Decimal { value: i64, magnitude: i16 },

    #[error("invalid decimal string: {input:?}")]
    DecimalSyntax { input: String },

    #[error("no formatter data for locale {locale}")]
    Formatter { locale: String },

    #[error("{} handle is empty", kind.as_str())]
    EmptyHandle { kind: HandleKind },

    #[error("output does not fit in sink (capacity {capacity}, used {len})")]
    Write { capacity: usize, len: usize },

    #[error("magnitude limit exceeded")]
    Limit,
}

impl Error {
    /// Process exit code for the demo driver.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidLocale { .. } | Self::DecimalSyntax { .. } => 2,
            Self::DataProvider { .. } | Self::Formatter { .. } => 3,
            _ => 1,
        }
    }
}

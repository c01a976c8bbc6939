use fixfmt_capi::{FixfmtLocale, fixfmt_locale_create, fixfmt_locale_tostring};

use crate::error::{Error, Result};
use crate::resource::{Resource, resource_wrapper};
use crate::sink::Sink;

/// An owned locale handle, such as `bn` or `sr-Latn-RS`.
#[derive(Debug)]
pub struct Locale(Resource<*mut FixfmtLocale>);

resource_wrapper!(Locale, *mut FixfmtLocale);

impl Locale {
    /// Parse `name`; `_` and `-` both separate subtags.
    pub fn new(name: &str) -> Result<Self> {
        // SAFETY: `name` is valid for `name.len()` bytes.
        let raw = unsafe { fixfmt_locale_create(name.as_ptr().cast(), name.len()) };
        if raw.is_null() {
            return Err(Error::InvalidLocale { name: name.into() });
        }
        Ok(Self(Resource::adopt(raw)))
    }

    /// Write the canonical form into `sink`, replacing its contents.
    pub fn write_to(&self, sink: &mut Sink<'_>) -> Result<()> {
        let raw = self.0.live()?;
        // SAFETY: `raw` is live for the duration of the call and the sink
        // pointer comes from a borrowed `Sink`.
        let written = unsafe { fixfmt_locale_tostring(raw, sink.as_raw()) };
        sink.check(written)
    }

    pub(crate) fn live(&self) -> Result<*mut FixfmtLocale> {
        self.0.live()
    }

    /// Canonical form for diagnostics; falls back to a placeholder if the
    /// handle is empty or the name is unusually long.
    pub(crate) fn describe(&self) -> String {
        let mut buf = [0u8; 64];
        let mut sink = Sink::new(&mut buf);
        match self.write_to(&mut sink) {
            Ok(()) => String::from_utf8_lossy(sink.as_bytes()).into_owned(),
            Err(_) => "<unknown>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_round_trips() {
        let locale = Locale::new("sr_latn_rs").unwrap();
        let mut buf = [0u8; 16];
        let mut sink = Sink::new(&mut buf);
        locale.write_to(&mut sink).unwrap();
        assert_eq!(sink.as_str().unwrap(), "sr-Latn-RS");
        assert_eq!(locale.describe(), "sr-Latn-RS");
    }

    #[test]
    fn malformed_name_is_rejected() {
        let err = Locale::new("english!").unwrap_err();
        assert!(matches!(err, Error::InvalidLocale { ref name } if name == "english!"));
    }

    #[test]
    fn small_sink_is_a_write_error() {
        let locale = Locale::new("sr-Latn-RS").unwrap();
        let mut buf = [0u8; 4];
        let mut sink = Sink::new(&mut buf);
        assert!(matches!(
            locale.write_to(&mut sink),
            Err(Error::Write { capacity: 3, .. })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn moved_from_locale_is_guarded() {
        let mut locale = Locale::new("en").unwrap();
        let _owner = locale.take();
        let mut buf = [0u8; 8];
        let mut sink = Sink::new(&mut buf);
        assert!(matches!(
            locale.write_to(&mut sink),
            Err(Error::EmptyHandle { .. })
        ));
        assert_eq!(locale.describe(), "<unknown>");
    }
}

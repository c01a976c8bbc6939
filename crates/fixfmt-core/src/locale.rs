//! Language identifiers (`language[-script][-region][-variant]*`).
//!
//! Parsing accepts `-` or `_` as the subtag separator and normalizes case:
//! language and variants lowercase, script titlecase, region uppercase.
//! Output always uses `-`.
//!
//! # Example
//!
//! ```
//! use fixfmt_core::LanguageIdentifier;
//!
//! let langid: LanguageIdentifier = "sr_latn_rs".parse().unwrap();
//! assert_eq!(langid.to_string(), "sr-Latn-RS");
//!
//! let chain: Vec<String> = langid.fallback_chain().map(|l| l.to_string()).collect();
//! assert_eq!(chain, ["sr-Latn-RS", "sr-Latn", "sr"]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;
use crate::writeable::Writeable;

const UND: &str = "und";

/// A parsed, case-normalized language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageIdentifier {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
}

impl LanguageIdentifier {
    /// The undetermined language, `und`.
    #[must_use]
    pub fn und() -> Self {
        Self {
            language: UND.to_string(),
            script: None,
            region: None,
            variants: Vec::new(),
        }
    }

    /// Parse from raw bytes as handed over by a foreign caller.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LocaleError> {
        std::str::from_utf8(bytes)
            .map_err(|_| LocaleError::NotUtf8)?
            .parse()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    #[must_use]
    pub fn is_und(&self) -> bool {
        self.language == UND
            && self.script.is_none()
            && self.region.is_none()
            && self.variants.is_empty()
    }

    /// The next less specific identifier: variants go first, then the
    /// region, then the script. Returns `None` once only the language is left.
    #[must_use]
    pub fn fallback(&self) -> Option<Self> {
        let mut next = self.clone();
        if !next.variants.is_empty() {
            next.variants.clear();
        } else if next.region.is_some() {
            next.region = None;
        } else if next.script.is_some() {
            next.script = None;
        } else {
            return None;
        }
        Some(next)
    }

    /// `self` followed by every successive [`LanguageIdentifier::fallback`].
    pub fn fallback_chain(&self) -> impl Iterator<Item = LanguageIdentifier> {
        std::iter::successors(Some(self.clone()), LanguageIdentifier::fallback)
    }
}

impl Default for LanguageIdentifier {
    fn default() -> Self {
        Self::und()
    }
}

impl FromStr for LanguageIdentifier {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LocaleError::Empty);
        }
        let mut subtags = s.split(['-', '_']).enumerate().peekable();

        let invalid = |position: usize, subtag: &str| LocaleError::InvalidSubtag {
            subtag: subtag.to_string(),
            position,
        };

        let language = match subtags.next() {
            Some((_, tag)) if is_language(tag) => tag.to_ascii_lowercase(),
            Some((position, tag)) => return Err(invalid(position, tag)),
            None => return Err(LocaleError::Empty),
        };

        let script = match subtags.peek() {
            Some((_, tag)) if is_script(tag) => {
                let tag = *tag;
                subtags.next();
                Some(titlecase(tag))
            }
            _ => None,
        };

        let region = match subtags.peek() {
            Some((_, tag)) if is_region(tag) => {
                let tag = *tag;
                subtags.next();
                Some(tag.to_ascii_uppercase())
            }
            _ => None,
        };

        let mut variants = Vec::new();
        for (position, tag) in subtags {
            if !is_variant(tag) {
                return Err(invalid(position, tag));
            }
            variants.push(tag.to_ascii_lowercase());
        }

        Ok(Self {
            language,
            script,
            region,
            variants,
        })
    }
}

impl Writeable for LanguageIdentifier {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(&self.language)?;
        for part in self
            .script
            .iter()
            .chain(self.region.iter())
            .chain(self.variants.iter())
        {
            sink.write_char('-')?;
            sink.write_str(part)?;
        }
        Ok(())
    }
}

impl fmt::Display for LanguageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

fn is_language(tag: &str) -> bool {
    matches!(tag.len(), 2 | 3 | 5..=8) && tag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_script(tag: &str) -> bool {
    tag.len() == 4 && tag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(tag: &str) -> bool {
    (tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_alphabetic()))
        || (tag.len() == 3 && tag.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant(tag: &str) -> bool {
    let alnum = tag.bytes().all(|b| b.is_ascii_alphanumeric());
    match tag.len() {
        5..=8 => alnum,
        4 => alnum && tag.as_bytes()[0].is_ascii_digit(),
        _ => false,
    }
}

fn titlecase(tag: &str) -> String {
    let mut out = tag.to_ascii_lowercase();
    out[..1].make_ascii_uppercase();
    out
}

#![no_main]

use fixfmt_core::{LanguageIdentifier, Writeable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing must never panic; accepted identifiers must be canonical.
    let Ok(langid) = LanguageIdentifier::from_bytes(data) else {
        return;
    };
    let text = langid.write_to_string();
    assert_eq!(text.len(), langid.write_len());

    let reparsed: LanguageIdentifier = text.parse().expect("canonical form must reparse");
    assert_eq!(reparsed, langid);

    // The fallback chain shrinks to the bare language and stops.
    let chain: Vec<_> = langid.fallback_chain().collect();
    assert!(chain.len() <= 3 + langid.variants().len().min(1));
    assert_eq!(
        chain.last().map(LanguageIdentifier::language),
        Some(langid.language())
    );
});

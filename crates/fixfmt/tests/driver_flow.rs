//! The host driver sequence end to end: locale, provider, decimal,
//! formatter, sink, format, read. Runs against the repository test bundle.

use fixfmt::{
    DataProvider, Error, FixedDecimal, FixedDecimalFormat, FixedDecimalFormatOptions,
    FormatConfig, GroupingStrategy, Locale, SignDisplay, Sink,
};

const BUNDLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/data/json");

fn formatter(locale: &str, options: FixedDecimalFormatOptions) -> FixedDecimalFormat {
    let locale = Locale::new(locale).unwrap();
    let provider = DataProvider::from_fs(BUNDLE).unwrap();
    FixedDecimalFormat::new(&locale, &provider, options).unwrap()
}

#[test]
fn bengali_in_a_forty_byte_buffer() {
    let fdf = formatter("bn", Default::default());
    let value = FixedDecimal::new(1000007, 0).unwrap();
    let mut buf = [0u8; 40];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&value, &mut sink).unwrap();
    assert_eq!(sink.as_str().unwrap(), "১০,০০,০০৭");
    assert_eq!(
        sink.as_c_str().unwrap().to_str().unwrap(),
        "১০,০০,০০৭"
    );
    assert!(sink.len() <= 39);
}

#[test]
fn consecutive_formats_do_not_carry_residue() {
    let fdf = formatter("en", Default::default());
    let long = FixedDecimal::new(1234567, 0).unwrap();
    let short = FixedDecimal::new(8, 0).unwrap();
    let mut buf = [0u8; 32];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&long, &mut sink).unwrap();
    assert_eq!(sink.as_str().unwrap(), "1,234,567");
    fdf.format(&short, &mut sink).unwrap();
    assert_eq!(sink.as_str().unwrap(), "8");
    assert_eq!(sink.as_c_str().unwrap().to_bytes(), b"8");
}

#[test]
fn append_mode_concatenates() {
    let fdf = formatter("en", Default::default());
    let value = FixedDecimal::new(1000, 0).unwrap();
    let mut buf = [0u8; 32];
    let mut sink = Sink::new(&mut buf);
    fdf.format_append(&value, &mut sink).unwrap();
    fdf.format_append(&value, &mut sink).unwrap();
    assert_eq!(sink.as_str().unwrap(), "1,0001,000");
}

#[test]
fn locale_specific_separators() {
    let value: FixedDecimal = "-1234567.891".parse().unwrap();
    let mut buf = [0u8; 64];
    let mut sink = Sink::new(&mut buf);

    formatter("fr", Default::default())
        .format(&value, &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "-1\u{202f}234\u{202f}567,891");

    formatter("es", Default::default())
        .format(&value, &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "-1.234.567,891");
}

#[test]
fn spanish_minimum_grouping_skips_four_digits() {
    let fdf = formatter("es", Default::default());
    let mut buf = [0u8; 32];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&FixedDecimal::new(1234, 0).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "1234");
    fdf.format(&FixedDecimal::new(12345, 0).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "12.345");
}

#[test]
fn options_flow_through_the_boundary() {
    let options = FixedDecimalFormatOptions {
        grouping_strategy: GroupingStrategy::Never,
        sign_display: SignDisplay::Always,
    };
    let fdf = formatter("en", options);
    let mut buf = [0u8; 32];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&FixedDecimal::new(98765, 0).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "+98765");
}

#[test]
fn region_falls_back_to_language() {
    let fdf = formatter("bn-IN", Default::default());
    let mut buf = [0u8; 32];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&FixedDecimal::new(1234, 0).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "১,২৩৪");
}

#[test]
fn creation_failures_are_values() {
    assert!(matches!(
        Locale::new(""),
        Err(Error::InvalidLocale { .. })
    ));
    assert!(matches!(
        DataProvider::from_fs("/nonexistent/fixfmt/bundle"),
        Err(Error::DataProvider { .. })
    ));

    let ja = Locale::new("ja").unwrap();
    let provider = DataProvider::from_fs(BUNDLE).unwrap();
    let err = FixedDecimalFormat::new(&ja, &provider, Default::default()).unwrap_err();
    let Error::Formatter { locale } = err else {
        panic!("unexpected error {err:?}");
    };
    assert_eq!(locale, "ja");
}

#[test]
fn config_drives_the_same_flow() {
    let config = FormatConfig::from_toml_str(&format!(
        "locale = \"bn\"\ndata_path = {BUNDLE:?}\nsink_capacity = 40\n"
    ))
    .unwrap();
    assert!(config.validate().is_empty());
    let locale = config.open_locale().unwrap();
    let provider = config.open_provider().unwrap();
    let fdf = FixedDecimalFormat::new(&locale, &provider, config.to_options()).unwrap();

    let mut buf = vec![0u8; config.sink_capacity];
    let mut sink = Sink::new(&mut buf);
    fdf.format(&FixedDecimal::new(1000007, 0).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sink.as_str().unwrap(), "১০,০০,০০৭");
}

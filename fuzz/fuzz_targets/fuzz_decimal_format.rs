#![no_main]

use arbitrary::Arbitrary;
use fixfmt_capi::{
    FixfmtFixedDecimalFormatOptions, FixfmtGroupingStrategy, FixfmtSignDisplay,
    fixfmt_data_provider_destroy, fixfmt_fixed_decimal_create_fromstr,
    fixfmt_fixed_decimal_destroy, fixfmt_fixed_decimal_format_create,
    fixfmt_fixed_decimal_format_destroy, fixfmt_fixed_decimal_format_format,
    fixfmt_fixed_decimal_multiply_pow10, fixfmt_invariant_data_provider_create,
    fixfmt_locale_create, fixfmt_locale_destroy, fixfmt_simple_writeable,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    decimal: &'a [u8],
    power: i16,
    grouping: u8,
    sign: u8,
    buf_size: u8,
}

fuzz_target!(|input: Input<'_>| {
    let options = FixfmtFixedDecimalFormatOptions {
        grouping_strategy: match input.grouping % 4 {
            0 => FixfmtGroupingStrategy::Auto,
            1 => FixfmtGroupingStrategy::Never,
            2 => FixfmtGroupingStrategy::Always,
            _ => FixfmtGroupingStrategy::Min2,
        },
        sign_display: match input.sign % 5 {
            0 => FixfmtSignDisplay::Auto,
            1 => FixfmtSignDisplay::Never,
            2 => FixfmtSignDisplay::Always,
            3 => FixfmtSignDisplay::ExceptZero,
            _ => FixfmtSignDisplay::Negative,
        },
    };

    unsafe {
        let decimal = fixfmt_fixed_decimal_create_fromstr(
            input.decimal.as_ptr().cast(),
            input.decimal.len(),
        );
        if !decimal.success {
            assert!(decimal.decimal.is_null());
            return;
        }
        // A failed shift leaves the value as parsed.
        let _ = fixfmt_fixed_decimal_multiply_pow10(decimal.decimal, input.power);

        let locale = fixfmt_locale_create("en".as_ptr().cast(), 2);
        let provider = fixfmt_invariant_data_provider_create();
        let fdf = fixfmt_fixed_decimal_format_create(locale, &provider, options);
        assert!(fdf.success);

        // Sink invariants: bounded, NUL-terminated, untouched on failure.
        let mut buf = vec![0x55u8; usize::from(input.buf_size)];
        let mut sink = fixfmt_simple_writeable(buf.as_mut_ptr().cast(), buf.len());
        let ok = fixfmt_fixed_decimal_format_format(fdf.fdf, decimal.decimal, &mut sink);
        assert!(sink.len <= sink.cap);
        if ok {
            assert_eq!(buf[sink.len], 0);
            assert!(std::str::from_utf8(&buf[..sink.len]).is_ok());
        } else {
            assert_eq!(sink.len, 0);
        }

        fixfmt_fixed_decimal_format_destroy(fdf.fdf);
        fixfmt_data_provider_destroy(provider);
        fixfmt_locale_destroy(locale);
        fixfmt_fixed_decimal_destroy(decimal.decimal);
    }
});

//! End-to-end C driver flow through the exported symbols.
//!
//! Mirrors what a C program linking `libfixfmt_capi` does: create every
//! handle, format into a fixed stack buffer, check the NUL-terminated
//! output, and destroy everything. Handle accounting must balance at the end.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

use fixfmt_capi::*;

const BUNDLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/data/json");

// ── Helpers ───────────────────────────────────────────────────────────────

fn locale(name: &str) -> *mut FixfmtLocale {
    unsafe { fixfmt_locale_create(name.as_ptr().cast(), name.len()) }
}

fn fs_provider() -> FixfmtDataProvider {
    let result = unsafe { fixfmt_fs_data_provider_create(BUNDLE.as_ptr().cast(), BUNDLE.len()) };
    assert!(result.success, "bundle at {BUNDLE} must open");
    result.provider
}

fn c_text(buf: &[c_char]) -> String {
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_str()
        .unwrap()
        .to_string()
}

// ── Driver flow ───────────────────────────────────────────────────────────

#[test]
fn bengali_driver_flow_balances() {
    let before = accounting::snapshot();

    let bn = locale("bn");
    assert!(!bn.is_null());
    let provider = fs_provider();
    let decimal = fixfmt_fixed_decimal_create(1000007, 0);
    assert!(decimal.success);
    let options = fixfmt_fixed_decimal_format_options_default();
    let fdf = unsafe { fixfmt_fixed_decimal_format_create(bn, &provider, options) };
    assert!(fdf.success);

    let mut output = [0x55 as c_char; 40];
    let mut sink = fixfmt_simple_writeable(output.as_mut_ptr(), output.len());
    assert!(unsafe { fixfmt_fixed_decimal_format_format(fdf.fdf, decimal.decimal, &mut sink) });
    assert_eq!(c_text(&output), "১০,০০,০০৭");
    assert_eq!(sink.len, "১০,০০,০০৭".len());

    unsafe {
        fixfmt_fixed_decimal_format_destroy(fdf.fdf);
        fixfmt_fixed_decimal_destroy(decimal.decimal);
        fixfmt_data_provider_destroy(provider);
        fixfmt_locale_destroy(bn);
    }

    let after = accounting::snapshot();
    assert_eq!(after.total_live(), before.total_live());
    for kind in [
        HandleKind::Locale,
        HandleKind::DataProvider,
        HandleKind::FixedDecimal,
        HandleKind::FixedDecimalFormat,
    ] {
        assert_eq!(
            after.get(kind).created - before.get(kind).created,
            1,
            "{}",
            kind.as_str()
        );
    }
}

#[test]
fn formatter_outlives_its_inputs() {
    let fr = locale("fr");
    let provider = fs_provider();
    let fdf = unsafe { fixfmt_fixed_decimal_format_create(fr, &provider, Default::default()) };
    assert!(fdf.success);
    unsafe {
        fixfmt_locale_destroy(fr);
        fixfmt_data_provider_destroy(provider);
    }

    let text = "-1234.5";
    let value = unsafe { fixfmt_fixed_decimal_create_fromstr(text.as_ptr().cast(), text.len()) };
    let mut output = [0 as c_char; 32];
    let mut sink = fixfmt_simple_writeable(output.as_mut_ptr(), output.len());
    assert!(unsafe { fixfmt_fixed_decimal_format_format(fdf.fdf, value.decimal, &mut sink) });
    assert_eq!(c_text(&output), "-1\u{202f}234,5");

    unsafe {
        fixfmt_fixed_decimal_destroy(value.decimal);
        fixfmt_fixed_decimal_format_destroy(fdf.fdf);
    }
}

#[test]
fn unsupported_locale_fails_without_allocation() {
    let ja = locale("ja");
    let provider = fs_provider();
    let before = accounting::snapshot().fixed_decimal_format;
    let fdf = unsafe { fixfmt_fixed_decimal_format_create(ja, &provider, Default::default()) };
    assert!(!fdf.success);
    assert!(fdf.fdf.is_null());
    assert_eq!(accounting::snapshot().fixed_decimal_format, before);
    unsafe {
        fixfmt_fixed_decimal_format_destroy(fdf.fdf);
        fixfmt_data_provider_destroy(provider);
        fixfmt_locale_destroy(ja);
    }
}

// ── Sink protocol ─────────────────────────────────────────────────────────

#[test]
fn undersized_buffer_keeps_previous_output() {
    let provider = fixfmt_invariant_data_provider_create();
    let en = locale("en");
    let fdf = unsafe { fixfmt_fixed_decimal_format_create(en, &provider, Default::default()) };
    let small = fixfmt_fixed_decimal_create(42, 0);
    let large = fixfmt_fixed_decimal_create(123456789, 0);

    let mut output = [0 as c_char; 8];
    let mut sink = fixfmt_simple_writeable(output.as_mut_ptr(), output.len());
    unsafe {
        assert!(fixfmt_fixed_decimal_format_format(fdf.fdf, small.decimal, &mut sink));
        assert!(!fixfmt_fixed_decimal_format_format(fdf.fdf, large.decimal, &mut sink));
    }
    assert_eq!(sink.len, 2);
    assert!(sink.len <= sink.cap);
    assert_eq!(c_text(&output), "42");

    unsafe {
        fixfmt_fixed_decimal_destroy(small.decimal);
        fixfmt_fixed_decimal_destroy(large.decimal);
        fixfmt_fixed_decimal_format_destroy(fdf.fdf);
        fixfmt_locale_destroy(en);
        fixfmt_data_provider_destroy(provider);
    }
}

#[test]
fn write_to_and_tostring_share_one_sink() {
    let locale = locale("sr-Latn");
    let decimal = fixfmt_fixed_decimal_create(-15, -1);
    let mut output = [0 as c_char; 32];
    let mut sink = fixfmt_simple_writeable(output.as_mut_ptr(), output.len());
    unsafe {
        assert!(fixfmt_locale_tostring(locale, &mut sink));
        assert!(fixfmt_fixed_decimal_write_to(decimal.decimal, &mut sink));
    }
    assert_eq!(c_text(&output), "sr-Latn-1.5");
    unsafe {
        assert!(fixfmt_locale_tostring(locale, &mut sink));
    }
    assert_eq!(c_text(&output), "sr-Latn");
    unsafe {
        fixfmt_fixed_decimal_destroy(decimal.decimal);
        fixfmt_locale_destroy(locale);
    }
}

#[test]
fn null_arguments_are_rejected_not_dereferenced() {
    let mut output = [0 as c_char; 4];
    let mut sink = fixfmt_simple_writeable(output.as_mut_ptr(), output.len());
    unsafe {
        assert!(!fixfmt_fixed_decimal_format_format(ptr::null(), ptr::null(), &mut sink));
        assert!(!fixfmt_fixed_decimal_write_to(ptr::null(), &mut sink));
        assert!(!fixfmt_locale_tostring(ptr::null(), ptr::null_mut()));
        fixfmt_fixed_decimal_negate(ptr::null_mut());
        fixfmt_fixed_decimal_format_destroy(ptr::null_mut());
        fixfmt_data_provider_destroy(FixfmtDataProvider::EMPTY);
    }
    assert_eq!(sink.len, 0);
}

//! Behavior-compatibility suite: the degradation rules and consumption
//! order the `%` grammar guarantees, plus the macro and bounded-buffer
//! front ends.

use std::cell::Cell;

use qsprintf::{Arg, Written, qformat, qsprintf, vformat, vsprintf_bounded};

#[test]
fn test_macro_formats_into_destination() {
    let mut out = String::new();
    qsprintf!(&mut out, "%s: %05d", "total", 42).unwrap();
    assert_eq!(out, "total: 00042");
}

#[test]
fn test_macro_returns_length() {
    let mut out = String::new();
    let len = qsprintf!(&mut out, "%5d|%-5d|%05d", 42, 42, 42).unwrap();
    assert_eq!(len, 17);
}

#[test]
fn test_qformat_builds_string() {
    let line = qformat!("%-8s|%8s|", "left", "right").unwrap();
    assert_eq!(line, "left    |   right|");
}

#[test]
fn test_macro_star_fields() {
    let line = qformat!("%0*d", 4, 5).unwrap();
    assert_eq!(line, "0005");
}

#[test]
fn test_macro_write_count() {
    let count = Cell::new(0);
    let line = qformat!("AB%nCD", &count).unwrap();
    assert_eq!(line, "ABCD");
    assert_eq!(count.get(), 2);
}

#[test]
fn test_macro_no_arguments() {
    assert_eq!(qformat!("plain").unwrap(), "plain");
}

#[test]
fn test_zero_fill_detected_before_star() {
    assert_eq!(qformat!("%0*d", 4, 5).unwrap(), "0005");
    assert_eq!(qformat!("%05d", 5).unwrap(), "00005");
}

#[test]
fn test_precision_zero_means_unbounded() {
    assert_eq!(vformat("%.0s", &[Arg::from("hello")]).unwrap(), "hello");
}

#[test]
fn test_hex_forces_base_sixteen() {
    assert_eq!(vformat("%B8x", &[Arg::from(255)]).unwrap(), "ff");
    assert_eq!(vformat("%x", &[Arg::from(255)]).unwrap(), "ff");
}

#[test]
fn test_negative_values_outside_decimal_render_bits() {
    assert_eq!(vformat("%x", &[Arg::from(-1)]).unwrap(), "ffffffff");
    assert_eq!(
        vformat("%lx", &[Arg::from(-1)]).unwrap(),
        "ffffffffffffffff"
    );
    assert_eq!(vformat("%B16d", &[Arg::from(-1)]).unwrap(), "ffffffff");
    assert_eq!(vformat("%d", &[Arg::from(-1)]).unwrap(), "-1");
}

#[test]
fn test_base_fallback_without_integer() {
    assert_eq!(vformat("%Bd", &[Arg::from(255)]).unwrap(), "255");
    assert_eq!(vformat("%B99d", &[Arg::from(255)]).unwrap(), "255");
}

#[test]
fn test_fill_character_is_symmetric() {
    assert_eq!(vformat("%-05d", &[Arg::from(42)]).unwrap(), "42000");
}

#[test]
fn test_truncated_specifier_prints_verbatim() {
    assert_eq!(vformat("50%", &[]).unwrap(), "50%");
    assert_eq!(vformat("x%-05", &[]).unwrap(), "x%-05");
}

#[test]
fn test_consumption_order_is_width_precision_base_value() {
    let out = vformat(
        "%*.*B*d",
        &[
            Arg::from(10), // width
            Arg::from(3),  // precision (ignored by numerics)
            Arg::from(2),  // base
            Arg::from(5),  // value
        ],
    )
    .unwrap();
    assert_eq!(out, "       101");
}

#[test]
fn test_bounded_sink_exact_fit() {
    let mut buf = [0u8; 5];
    let written = vsprintf_bounded(&mut buf, "%d", &[Arg::from(1234)]).unwrap();
    assert_eq!(written, Written { len: 4, truncated: false });
    assert_eq!(&buf, b"1234\0");
}

#[test]
fn test_bounded_sink_truncates_and_reports() {
    let mut buf = [0u8; 4];
    let written = vsprintf_bounded(&mut buf, "%d", &[Arg::from(123456)]).unwrap();
    assert_eq!(written, Written { len: 3, truncated: true });
    assert_eq!(&buf, b"123\0");
}

#[test]
fn test_bounded_sink_truncates_at_character_boundary() {
    let mut buf = [0u8; 3];
    let written = vsprintf_bounded(&mut buf, "%s", &[Arg::from("aé")]).unwrap();
    // 'é' is two bytes and only one fits beside 'a' and the NUL
    assert_eq!(written, Written { len: 1, truncated: true });
    assert_eq!(&buf[..2], b"a\0");
}

#[test]
fn test_bounded_sink_empty_buffer() {
    let mut buf = [0u8; 0];
    let written = vsprintf_bounded(&mut buf, "%d", &[Arg::from(1)]).unwrap();
    assert_eq!(written, Written { len: 0, truncated: true });
}

//! Output sink and the two rendering primitives: padded emission and
//! integer-to-digit conversion.
//!
//! A single padding algorithm serves every conversion. Strings pass their
//! precision as the character limit; numeric conversions pass no limit and
//! reuse the same routine for zero- or space-padding.

use crate::constants::NUM_BUF_LEN;

/// Destination cursor: appends to a `String` while counting the characters
/// written by the current call (the count `%n` reports).
pub(crate) struct Out<'a> {
    dest: &'a mut String,
    written: usize,
}

impl<'a> Out<'a> {
    pub(crate) fn new(dest: &'a mut String) -> Self {
        Self { dest, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.dest.push(ch);
        self.written += 1;
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.dest.push_str(text);
        self.written += text.chars().count();
    }
}

/// Emit `source` into `out`, truncated to `max_chars` characters and padded
/// with `fill` to a minimum field width.
///
/// `min_len` is signed: positive pads before the content (right-justify),
/// negative pads after it (left-justify) to `|min_len|`. The same fill
/// character is used on whichever side pads.
pub(crate) fn emit_padded(out: &mut Out<'_>, source: &str, min_len: i32, max_chars: usize, fill: char) {
    let mut effective = 0usize;
    let mut end = 0usize;
    for (idx, ch) in source.char_indices() {
        if effective == max_chars {
            break;
        }
        effective += 1;
        end = idx + ch.len_utf8();
    }
    let clipped = &source[..end];

    if min_len > 0 {
        for _ in effective..min_len as usize {
            out.push(fill);
        }
    }
    out.push_str(clipped);
    if min_len < 0 {
        for _ in effective..min_len.unsigned_abs() as usize {
            out.push(fill);
        }
    }
}

/// Render a signed value as digits in `base`.
///
/// `ltoa` semantics: a minus sign appears only in base 10; every other base
/// renders the two's-complement bit pattern, 32 bits wide unless `wide`.
pub(crate) fn signed_digits<'b>(
    value: i64,
    wide: bool,
    base: u32,
    scratch: &'b mut [u8; NUM_BUF_LEN],
) -> &'b str {
    if base == 10 {
        if value < 0 {
            let start = digit_run(value.unsigned_abs(), 10, scratch);
            scratch[start - 1] = b'-';
            return ascii(&scratch[start - 1..]);
        }
        let start = digit_run(value as u64, 10, scratch);
        return ascii(&scratch[start..]);
    }
    let bits = if wide {
        value as u64
    } else {
        u64::from(value as u32)
    };
    let start = digit_run(bits, base, scratch);
    ascii(&scratch[start..])
}

/// Render an unsigned value as digits in `base`, 32 bits wide unless `wide`.
pub(crate) fn unsigned_digits<'b>(
    value: u64,
    wide: bool,
    base: u32,
    scratch: &'b mut [u8; NUM_BUF_LEN],
) -> &'b str {
    let bits = if wide { value } else { u64::from(value as u32) };
    let start = digit_run(bits, base, scratch);
    ascii(&scratch[start..])
}

/// Write `value` in `base` into the end of `scratch`, right-aligned, and
/// return the index of the first digit. Digits above 9 are lowercase.
fn digit_run(mut value: u64, base: u32, scratch: &mut [u8; NUM_BUF_LEN]) -> usize {
    let base = u64::from(base);
    let mut pos = NUM_BUF_LEN;
    if value == 0 {
        pos -= 1;
        scratch[pos] = b'0';
        return pos;
    }
    while value > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        scratch[pos] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + (digit - 10)
        };
        value /= base;
    }
    pos
}

fn ascii(bytes: &[u8]) -> &str {
    // OK to unwrap: digit runs and the sign are pure ASCII
    std::str::from_utf8(bytes).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(source: &str, min_len: i32, max_chars: usize, fill: char) -> (String, usize) {
        let mut dest = String::new();
        let mut out = Out::new(&mut dest);
        emit_padded(&mut out, source, min_len, max_chars, fill);
        let written = out.written();
        (dest, written)
    }

    #[test]
    fn test_right_justify_pads_before() {
        assert_eq!(padded("ab", 5, usize::MAX, ' '), ("   ab".into(), 5));
    }

    #[test]
    fn test_left_justify_pads_after() {
        assert_eq!(padded("ab", -5, usize::MAX, ' '), ("ab   ".into(), 5));
    }

    #[test]
    fn test_fill_character_applies_to_both_sides() {
        assert_eq!(padded("42", 5, usize::MAX, '0').0, "00042");
        assert_eq!(padded("42", -5, usize::MAX, '0').0, "42000");
    }

    #[test]
    fn test_truncates_to_max_chars() {
        assert_eq!(padded("hello", 0, 3, ' ').0, "hel");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        assert_eq!(padded("héllo", 6, usize::MAX, ' ').0, " héllo");
        assert_eq!(padded("héllo", 0, 2, ' ').0, "hé");
    }

    #[test]
    fn test_no_padding_when_content_fills_width() {
        assert_eq!(padded("hello", 3, usize::MAX, ' ').0, "hello");
        assert_eq!(padded("hello", -3, usize::MAX, ' ').0, "hello");
    }

    #[test]
    fn test_signed_digits_decimal() {
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(signed_digits(42, false, 10, &mut scratch), "42");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(signed_digits(-42, false, 10, &mut scratch), "-42");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(
            signed_digits(i64::MIN, true, 10, &mut scratch),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_signed_digits_nondecimal_renders_bit_pattern() {
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(signed_digits(-1, false, 16, &mut scratch), "ffffffff");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(signed_digits(-1, true, 16, &mut scratch), "ffffffffffffffff");
    }

    #[test]
    fn test_unsigned_digits_bases() {
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(unsigned_digits(255, false, 16, &mut scratch), "ff");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(unsigned_digits(255, false, 2, &mut scratch), "11111111");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(unsigned_digits(35, false, 36, &mut scratch), "z");
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(unsigned_digits(0, false, 2, &mut scratch), "0");
    }

    #[test]
    fn test_worst_case_fits_scratch() {
        let mut scratch = [0u8; NUM_BUF_LEN];
        let digits = unsigned_digits(u64::MAX, true, 2, &mut scratch);
        assert_eq!(digits.len(), 64);
        let mut scratch = [0u8; NUM_BUF_LEN];
        assert_eq!(
            signed_digits(i64::MIN, true, 10, &mut scratch).len(),
            20
        );
    }
}

//! Reentrant sprintf-style formatting with C-style `%` specifiers.
//!
//! This crate renders a format string and an ordered list of arguments into
//! a `String` (or a caller-sized byte buffer) and returns the number of
//! characters written. It is the output-side counterpart of `scanf`-style
//! input parsing.
//!
//! # Architecture
//!
//! Rendering is divided into three phases:
//! 1. **Tokenization**: the format string is split into literal text runs
//!    and parsed `%` specifiers ([`OutputFormat`])
//! 2. **Argument consumption**: each specifier consumes entries from the
//!    [`Arg`] list in a fixed order (width `*`, precision `*`, base `*`,
//!    then the conversion's own argument)
//! 3. **Emission**: one padding algorithm serves every conversion, filling
//!    to the minimum width on whichever side the justification demands
//!
//! The implementation is organized into focused modules:
//! - `constants`: grammar bounds and memory allocation hints
//! - `types`: the argument list and its cursor
//! - `validation`: normalization of resolved field values
//! - `format`: tokenization and rendering dispatch
//! - `render`: padded emission and digit conversion
//! - `error`: the argument-contract error type
//!
//! # Specifier Grammar
//!
//! `% [-][0][width|*] [. [-][0][precision|*]] [l] [F] [N] [B base|*] type`
//!
//! - `-` left-justifies within the field; `0` pads with `0` instead of space
//! - `width` is the minimum field width; `*` takes it from the next argument
//! - `precision` is the maximum characters copied for `s` (zero or negative
//!   never truncates); numeric conversions ignore it
//! - `l` widens the integer conversions to 64 bits; `F`/`N` are accepted
//!   and ignored; `B` sets the numeric base (2–36, out-of-range falls back
//!   to 10)
//! - `type` is one of `s` (string), `d`/`i` (signed), `u` (unsigned),
//!   `x` (hex, overriding `B`), `n` (store the characters written so far);
//!   any other character prints itself, so `%%` prints `%`
//!
//! # Known Limitations
//!
//! - **Malformed specifiers never error**: an unrecognized type character
//!   prints itself and a specifier cut off by the end of the format string
//!   is emitted verbatim. Only argument-list violations return [`Error`].
//! - **Character counting**: widths, precisions, returned lengths, and `%n`
//!   counts are Unicode characters, not bytes.
//! - **No float conversions**: the grammar has none; format floats upstream.
//!
//! # Reentrancy
//!
//! Every cursor and scratch buffer is call-local and the crate holds no
//! static mutable state, so concurrent calls on independent destinations
//! are safe and independent.
//!
//! # Security
//!
//! - `#![forbid(unsafe_code)]`: no unsafe code
//! - Output grows in caller-owned `String`s; the bounded variant
//!   ([`vsprintf_bounded`]) truncates at a character boundary and reports
//!   it rather than overrunning
//! - Width and precision digit runs saturate instead of overflowing

#![forbid(unsafe_code)]
#![allow(clippy::needless_return)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod constants;
mod error;
mod format;
mod render;
mod types;
mod validation;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use error::Error;
pub use format::OutputFormat;
pub use types::{Arg, Written};

/// Compile-time-checked formatting macros.
///
/// `qsprintf!(dest, "fmt", args...)` and `qformat!("fmt", args...)` verify
/// at compile time that the argument count matches what the format string's
/// specifiers demand, then expand to [`vsprintf`] / [`vformat`] calls.
pub use qsprintf_proc_macro::{qformat, qsprintf};

use constants::OUTPUT_EXTRA_CAPACITY;

// ============================================================================
// Public Functions
// ============================================================================

/// Format into `dest`, replacing its contents, and return the number of
/// characters written.
///
/// The argument list is consumed strictly in the order the specifiers
/// demand; see [`Arg`] for the accepted entry types.
///
/// # Examples
///
/// ```
/// use qsprintf::{vsprintf, Arg};
///
/// let mut out = String::new();
/// let len = vsprintf(
///     &mut out,
///     "%5d|%-5d|%05d",
///     &[Arg::from(42), Arg::from(42), Arg::from(42)],
/// )
/// .unwrap();
/// assert_eq!(out, "   42|42   |00042");
/// assert_eq!(len, 17);
/// ```
pub fn vsprintf(dest: &mut String, format: &str, args: &[Arg<'_>]) -> Result<usize, Error> {
    dest.clear();
    OutputFormat::new(format).render_into(dest, args)
}

/// Format into a fresh `String`.
///
/// # Examples
///
/// ```
/// use qsprintf::{vformat, Arg};
///
/// let out = vformat("%B16u", &[Arg::from(255u32)]).unwrap();
/// assert_eq!(out, "ff");
/// ```
pub fn vformat(format: &str, args: &[Arg<'_>]) -> Result<String, Error> {
    let mut dest = String::with_capacity(format.len() + OUTPUT_EXTRA_CAPACITY);
    OutputFormat::new(format).render_into(&mut dest, args)?;
    Ok(dest)
}

/// Format into a caller-sized byte buffer, NUL-terminated, truncating at a
/// character boundary when the rendering does not fit.
///
/// This is the drop-in flavor for callers holding pre-sized buffers: the
/// destination receives UTF-8 bytes plus a trailing NUL, and the returned
/// [`Written`] reports the characters written (excluding the NUL) and
/// whether truncation occurred. `%n` slots observe the untruncated counts.
///
/// # Examples
///
/// ```
/// use qsprintf::{vsprintf_bounded, Arg};
///
/// let mut buf = [0u8; 6];
/// let written = vsprintf_bounded(&mut buf, "%d apples", &[Arg::from(12)]).unwrap();
/// assert_eq!(&buf[..written.len], b"12 ap");
/// assert_eq!(buf[written.len], 0);
/// assert!(written.truncated);
/// ```
pub fn vsprintf_bounded(
    dest: &mut [u8],
    format: &str,
    args: &[Arg<'_>],
) -> Result<Written, Error> {
    let rendered = vformat(format, args)?;
    let limit = dest.len().saturating_sub(1);
    let mut end = 0;
    let mut len = 0;
    for (idx, ch) in rendered.char_indices() {
        if idx + ch.len_utf8() > limit {
            break;
        }
        end = idx + ch.len_utf8();
        len += 1;
    }
    dest[..end].copy_from_slice(&rendered.as_bytes()[..end]);
    if let Some(slot) = dest.get_mut(end) {
        *slot = 0;
    }
    Ok(Written {
        len,
        truncated: end < rendered.len(),
    })
}

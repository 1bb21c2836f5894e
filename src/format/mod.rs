//! Parsed format strings and the rendering dispatch.

use crate::constants::{DEFAULT_BASE, NUM_BUF_LEN};
use crate::error::Error;
use crate::render::{self, Out};
use crate::types::{Arg, ArgCursor};
use crate::validation::{fill_char, normalize_base, precision_limit};

mod format_parser;

use format_parser::{Conversion, IntField, OutputFormatToken, Specifier};

/// A parsed format string: literal text runs interleaved with `%` specifiers.
///
/// Parsing is infallible (malformed specifiers degrade to literal output),
/// so a format can be parsed once and rendered many times against different
/// argument lists.
#[derive(Debug, PartialEq, Eq)]
pub struct OutputFormat<'a> {
    elements: Vec<OutputFormatToken<'a>>,
}

impl<'a> OutputFormat<'a> {
    /// Parse a format string.
    pub fn new(format: &'a str) -> Self {
        return Self {
            elements: format_parser::tokenize(format),
        };
    }

    /// Render into `dest`, appending, consuming arguments in specifier order.
    ///
    /// Returns the number of characters written by this call. `%n` slots
    /// observe the same count, so a caller that pre-fills `dest` does not
    /// disturb them.
    pub fn render_into(&self, dest: &mut String, args: &[Arg<'_>]) -> Result<usize, Error> {
        let mut cursor = ArgCursor::new(args);
        let mut out = Out::new(dest);
        for element in &self.elements {
            match element {
                OutputFormatToken::Text(text) => out.push_str(text),
                OutputFormatToken::Specifier(spec) => {
                    render_specifier(spec, &mut cursor, &mut out)?;
                }
            }
        }
        Ok(out.written())
    }
}

/// Resolve a field to its value, consuming an argument for `*`.
fn resolve(field: IntField, cursor: &mut ArgCursor<'_, '_>) -> Result<i32, Error> {
    match field {
        IntField::Literal(value) => Ok(value),
        IntField::FromArg { negated } => {
            let value = cursor.int()?;
            Ok(if negated { value.wrapping_neg() } else { value })
        }
    }
}

fn render_specifier(
    spec: &Specifier,
    cursor: &mut ArgCursor<'_, '_>,
    out: &mut Out<'_>,
) -> Result<(), Error> {
    // Resolution order is the argument-consumption contract:
    // width, then precision, then base, then the conversion's own argument.
    let min_len = resolve(spec.width, cursor)?;
    let max_chars = match spec.precision {
        Some(field) => precision_limit(resolve(field, cursor)?),
        None => usize::MAX,
    };
    let base = match spec.base {
        Some(field) => normalize_base(resolve(field, cursor)?),
        None => DEFAULT_BASE,
    };
    let fill = fill_char(spec.zero_fill);

    match spec.conversion {
        Conversion::Str => {
            let text = cursor.string()?;
            render::emit_padded(out, text, min_len, max_chars, fill);
        }
        Conversion::Signed => {
            let (value, wide) = cursor.signed(spec.long)?;
            let mut scratch = [0u8; NUM_BUF_LEN];
            let digits = render::signed_digits(value, wide, base, &mut scratch);
            render::emit_padded(out, digits, min_len, usize::MAX, fill);
        }
        Conversion::Unsigned => {
            let (value, wide) = cursor.unsigned(spec.long)?;
            let mut scratch = [0u8; NUM_BUF_LEN];
            let digits = render::unsigned_digits(value, wide, base, &mut scratch);
            render::emit_padded(out, digits, min_len, usize::MAX, fill);
        }
        Conversion::Hex => {
            let (value, wide) = cursor.signed(spec.long)?;
            let mut scratch = [0u8; NUM_BUF_LEN];
            // x renders base 16 even against an explicit B qualifier
            let digits = render::signed_digits(value, wide, 16, &mut scratch);
            render::emit_padded(out, digits, min_len, usize::MAX, fill);
        }
        Conversion::Count => cursor.count()?.set(out.written()),
        Conversion::Literal(ch) => out.push(ch),
    }
    Ok(())
}

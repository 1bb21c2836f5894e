use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, digit0},
    combinator::opt,
    error::{self, ErrorKind},
    multi::many0,
    sequence::preceded,
};

/// An integer-valued specifier field: width, precision, or base.
///
/// A `*` field consumes the next integer argument at render time; a literal
/// `-` before it negates the fetched value, the same way a literal field's
/// sign multiplies into its digits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum IntField {
    Literal(i32),
    FromArg { negated: bool },
}

/// Rendering behavior selected by a specifier's terminating character.
///
/// Any character outside the recognized set is `Literal` passthrough, which
/// is what makes `%%` print `%`; there is no dedicated percent rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Conversion {
    /// `s`
    Str,
    /// `d` or `i`
    Signed,
    /// `u`
    Unsigned,
    /// `x` (base 16 regardless of any `B` qualifier)
    Hex,
    /// `n`
    Count,
    /// anything else: emit the character itself
    Literal(char),
}

/// A fully parsed `%` unit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Specifier {
    pub width: IntField,
    pub zero_fill: bool,
    pub precision: Option<IntField>,
    pub long: bool,
    pub base: Option<IntField>,
    pub conversion: Conversion,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OutputFormatToken<'a> {
    Text(&'a str),
    Specifier(Specifier),
}

/// Split a format string into literal text runs and parsed specifiers.
///
/// Never fails: a specifier truncated by end-of-input (a bare trailing `%`,
/// or `%-05` with nothing after) is pushed back verbatim as literal text.
pub(crate) fn tokenize(input: &str) -> Vec<OutputFormatToken<'_>> {
    let (remaining, mut tokens) = match many0(output_format_token).parse(input) {
        Ok(parsed) => parsed,
        // unreachable: token parsers only soft-fail, which stops many0
        Err(_) => (input, Vec::new()),
    };
    if !remaining.is_empty() {
        tokens.push(OutputFormatToken::Text(remaining));
    }
    return tokens;
}

fn output_format_token(input: &str) -> IResult<&str, OutputFormatToken<'_>> {
    alt((specifier_token, text_token)).parse(input)
}

fn text_token(input: &str) -> IResult<&str, OutputFormatToken<'_>> {
    let (remaining, text) = take_till1(|c| c == '%').parse(input)?;
    return Ok((remaining, OutputFormatToken::Text(text)));
}

/// Parse one `%` specifier:
/// `% [-]?[0]?(*|digits) (.[-]?[0]?(*|digits))? (l | F | N | B[-]?[0]?(*|digits))* <type>`
fn specifier_token(input: &str) -> IResult<&str, OutputFormatToken<'_>> {
    let (input, _) = char('%').parse(input)?;
    let (input, (zero_fill, width)) = int_field(input)?;
    let (input, precision) = opt(preceded(char('.'), int_field)).parse(input)?;
    // only the width field's zero marker selects the fill character
    let precision = precision.map(|(_, field)| field);

    let mut rest = input;
    let mut long = false;
    let mut base = None;
    let conversion = loop {
        let Some(ch) = rest.chars().next() else {
            return Err(nom::Err::Error(error::Error::new(rest, ErrorKind::Eof)));
        };
        match ch {
            'l' => {
                long = true;
                rest = &rest[1..];
            }
            // far/near qualifiers: segmented-memory artifacts, accepted and ignored
            'F' | 'N' => rest = &rest[1..],
            'B' => {
                let (after, (_, field)) = int_field(&rest[1..])?;
                base = Some(field);
                rest = after;
            }
            's' => {
                rest = &rest[1..];
                break Conversion::Str;
            }
            'd' | 'i' => {
                rest = &rest[1..];
                break Conversion::Signed;
            }
            'u' => {
                rest = &rest[1..];
                break Conversion::Unsigned;
            }
            'x' => {
                rest = &rest[1..];
                break Conversion::Hex;
            }
            'n' => {
                rest = &rest[1..];
                break Conversion::Count;
            }
            other => {
                rest = &rest[other.len_utf8()..];
                break Conversion::Literal(other);
            }
        }
    };

    return Ok((
        rest,
        OutputFormatToken::Specifier(Specifier {
            width,
            zero_fill,
            precision,
            long,
            base,
            conversion,
        }),
    ));
}

/// Parse `[-]?[0]?(*|digits)`.
///
/// The single `0` after the sign is a marker, never a significant digit:
/// `%05d` and `%0*d` both set it and the remaining characters supply the
/// value (`%007d` has width 7). An empty digit run yields 0. Digit
/// accumulation saturates rather than wrapping.
fn int_field(input: &str) -> IResult<&str, (bool, IntField)> {
    let (input, sign) = opt(char('-')).parse(input)?;
    let (input, zero) = opt(char('0')).parse(input)?;
    let negated = sign.is_some();
    let leading_zero = zero.is_some();

    let (input, star) = opt(char('*')).parse(input)?;
    if star.is_some() {
        return Ok((input, (leading_zero, IntField::FromArg { negated })));
    }

    let (input, digits) = digit0(input)?;
    let mut value: i32 = 0;
    for byte in digits.bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i32::from(byte - b'0'));
    }
    if negated {
        value = -value;
    }
    return Ok((input, (leading_zero, IntField::Literal(value))));
}

//! Procedural macros for C-style sprintf text formatting.
//!
//! This crate provides two main macros:
//! - `qsprintf!`: formats into a caller-supplied `String`
//! - `qformat!`: formats into a fresh `String`
//!
//! Both macros verify the format literal at compile time: the number of
//! arguments the specifiers demand (each `*` width, precision, or base
//! field and each `s`/`d`/`i`/`u`/`x`/`n` conversion consumes one) must
//! match the number supplied, and anti-DoS limits bound the format string.
//! The rendering itself happens at runtime in the `qsprintf` crate, so `*`
//! fields and argument values stay fully dynamic.
//!
//! # Security
//!
//! - **Format strings**: maximum 10,000 bytes
//! - **Specifiers**: maximum 256 per format string
//!
//! These limits prevent resource exhaustion during compilation while
//! allowing all legitimate use cases.

#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    spanned::Spanned,
    token::Comma,
};

// ============================================================================
// Compile-Time Limits
// ============================================================================

/// Maximum length of a format string in bytes.
const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of `%` specifiers in a format string.
const MAX_SPECIFIERS: usize = 256;

// ============================================================================
// Macro Argument Parsing
// ============================================================================

/// qsprintf! arguments: destination, format, args
struct QsprintfArgs {
    dest: Expr,
    format: LitStr,
    args: Punctuated<Expr, Comma>,
}

impl Parse for QsprintfArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let dest = input.parse()?;
        input.parse::<Token![,]>()?;
        let format = input.parse()?;

        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self { dest, format, args })
    }
}

/// qformat! arguments: format, args
struct QformatArgs {
    format: LitStr,
    args: Punctuated<Expr, Comma>,
}

impl Parse for QformatArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let format: LitStr = input.parse()?;

        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self { format, args })
    }
}

// ============================================================================
// Public Macros
// ============================================================================

/// Formats into a caller-supplied `String`, similar to C's `sprintf`.
///
/// # Syntax
///
/// ```ignore
/// qsprintf!(dest_expr, "format string", args...)
/// ```
///
/// - `dest_expr`: expression evaluating to `&mut String`; replaced with the
///   rendered output
/// - `format string`: string literal with `%` specifiers
/// - `args...`: one value per `*` field and per argument-consuming
///   conversion, in specifier order
///
/// # Returns
///
/// `Result<usize, qsprintf::Error>`: the number of characters written, or
/// an argument-contract error (wrong category at some position).
///
/// # Examples
///
/// ```ignore
/// let mut out = String::new();
/// qsprintf!(&mut out, "%s: %05d", "total", 42)?;
/// assert_eq!(out, "total: 00042");
/// ```
#[proc_macro]
pub fn qsprintf(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as QsprintfArgs);

    let dest = &args.dest;
    let format_lit = &args.format;
    let arg_exprs: Vec<_> = args.args.iter().collect();

    if let Err(err) = check_format_arguments(format_lit, &arg_exprs) {
        return err;
    }

    let expanded = quote! {
        ::qsprintf::vsprintf(
            #dest,
            #format_lit,
            &[#(::qsprintf::Arg::from(#arg_exprs)),*],
        )
    };
    TokenStream::from(expanded)
}

/// Formats into a fresh `String`.
///
/// # Syntax
///
/// ```ignore
/// qformat!("format string", args...)
/// ```
///
/// # Returns
///
/// `Result<String, qsprintf::Error>`.
///
/// # Examples
///
/// ```ignore
/// let line = qformat!("%5d|%-5d|%05d", 42, 42, 42)?;
/// assert_eq!(line, "   42|42   |00042");
/// ```
#[proc_macro]
pub fn qformat(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as QformatArgs);

    let format_lit = &args.format;
    let arg_exprs: Vec<_> = args.args.iter().collect();

    if let Err(err) = check_format_arguments(format_lit, &arg_exprs) {
        return err;
    }

    let expanded = quote! {
        ::qsprintf::vformat(
            #format_lit,
            &[#(::qsprintf::Arg::from(#arg_exprs)),*],
        )
    };
    TokenStream::from(expanded)
}

// ============================================================================
// Compile-Time Format Checking
// ============================================================================

/// What a format string demands of its argument list.
#[derive(Debug, PartialEq, Eq)]
struct FormatDemand {
    /// Arguments consumed across all specifiers.
    arguments: usize,
    /// Completed specifiers encountered.
    specifiers: usize,
}

/// Validate limits and argument arity against the format literal.
fn check_format_arguments(format_lit: &LitStr, args: &[&Expr]) -> Result<(), TokenStream> {
    let format = format_lit.value();

    if format.len() > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes. \
                 This limit prevents compile-time DoS attacks.",
                format.len(),
                MAX_FORMAT_STRING_LEN
            ),
        )
        .to_compile_error()
        .into());
    }

    let demand = scan_format(&format);

    if demand.specifiers > MAX_SPECIFIERS {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Too many specifiers in format string ({}). Maximum allowed: {}. \
                 This limit prevents compile-time resource exhaustion.",
                demand.specifiers, MAX_SPECIFIERS
            ),
        )
        .to_compile_error()
        .into());
    }

    if args.len() < demand.arguments {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string demands {} argument(s), but {} provided. \
                 Each '*' width, precision, or base field and each s/d/i/u/x/n \
                 conversion consumes one argument, in specifier order",
                demand.arguments,
                args.len()
            ),
        )
        .to_compile_error()
        .into());
    }

    if args.len() > demand.arguments {
        let unused = args.len() - demand.arguments;
        return Err(syn::Error::new(
            args[demand.arguments].span(),
            format!(
                "Too many arguments: {} unused argument(s) provided. \
                 The format string only demands {} argument(s)",
                unused, demand.arguments
            ),
        )
        .to_compile_error()
        .into());
    }

    Ok(())
}

/// Count what the format string demands, mirroring the runtime grammar:
/// `% [-][0](*|digits) (.[-][0](*|digits))? (l|F|N|B[-][0](*|digits))* type`.
///
/// A specifier truncated by end-of-input is rendered verbatim at runtime
/// and consumes nothing, so only completed specifiers count.
fn scan_format(format: &str) -> FormatDemand {
    let bytes = format.as_bytes();
    let mut i = 0;
    let mut arguments = 0;
    let mut specifiers = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        i += 1;

        let mut pending = 0;
        scan_int_field(bytes, &mut i, &mut pending);
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            scan_int_field(bytes, &mut i, &mut pending);
        }

        let mut completed = false;
        loop {
            match bytes.get(i) {
                Some(b'l' | b'F' | b'N') => i += 1,
                Some(b'B') => {
                    i += 1;
                    scan_int_field(bytes, &mut i, &mut pending);
                }
                Some(&ch) => {
                    if matches!(ch, b's' | b'd' | b'i' | b'u' | b'x' | b'n') {
                        pending += 1;
                    }
                    // the literal fallback may be non-ASCII: skip a full character
                    i += utf8_len(ch);
                    completed = true;
                    break;
                }
                None => break,
            }
        }

        if completed {
            arguments += pending;
            specifiers += 1;
        }
    }

    FormatDemand {
        arguments,
        specifiers,
    }
}

/// Scan `[-]?[0]?(*|digits)`, bumping `pending` for a `*`.
fn scan_int_field(bytes: &[u8], i: &mut usize, pending: &mut usize) {
    if bytes.get(*i) == Some(&b'-') {
        *i += 1;
    }
    if bytes.get(*i) == Some(&b'0') {
        *i += 1;
    }
    if bytes.get(*i) == Some(&b'*') {
        *i += 1;
        *pending += 1;
        return;
    }
    while matches!(bytes.get(*i), Some(b) if b.is_ascii_digit()) {
        *i += 1;
    }
}

fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        0x00..=0x7F => 1,
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        _ => 2,
    }
}

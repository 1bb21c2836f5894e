//! Core types for the formatting engine.
//!
//! This module defines the type-erased argument list consumed by the
//! renderer and the cursor that walks it in specifier order.

use std::cell::Cell;

use crate::error::Error;

/// One entry of the ordered, heterogeneous argument list.
///
/// The format string's specifiers dictate how many entries are consumed and
/// which category each must have. Integer variants convert freely among
/// themselves by two's-complement reinterpretation, matching the varargs
/// model of the C-style callers this grammar comes from; only category
/// mismatches (string where an integer is demanded, and so on) are errors.
///
/// # Memory Layout
///
/// Every variant is at most a word plus a discriminant, so `Arg` is `Copy`
/// and argument lists can be built on the stack with no allocation.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// A string reference, consumed by `%s`.
    Str(&'a str),
    /// A narrow signed integer (`%d`/`%i`, or any `*` field).
    Int(i32),
    /// A narrow unsigned integer (`%u`).
    Uint(u32),
    /// A wide signed integer (`%ld`/`%li`).
    Long(i64),
    /// A wide unsigned integer (`%lu`).
    Ulong(u64),
    /// A write-count output slot, consumed by `%n`: receives the number of
    /// characters written so far by the current call.
    Count(&'a Cell<usize>),
}

impl Arg<'_> {
    /// Category name used in [`Error::WrongArgumentType`] reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Long(_) => "long",
            Arg::Ulong(_) => "ulong",
            Arg::Count(_) => "count",
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value)
    }
}

impl From<i8> for Arg<'_> {
    fn from(value: i8) -> Self {
        Arg::Int(i32::from(value))
    }
}

impl From<i16> for Arg<'_> {
    fn from(value: i16) -> Self {
        Arg::Int(i32::from(value))
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value)
    }
}

impl From<i64> for Arg<'_> {
    fn from(value: i64) -> Self {
        Arg::Long(value)
    }
}

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Arg::Long(value as i64)
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Arg::Uint(u32::from(value))
    }
}

impl From<u16> for Arg<'_> {
    fn from(value: u16) -> Self {
        Arg::Uint(u32::from(value))
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Arg::Uint(value)
    }
}

impl From<u64> for Arg<'_> {
    fn from(value: u64) -> Self {
        Arg::Ulong(value)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::Ulong(value as u64)
    }
}

impl<'a> From<&'a Cell<usize>> for Arg<'a> {
    fn from(value: &'a Cell<usize>) -> Self {
        Arg::Count(value)
    }
}

/// Result of rendering into a caller-sized byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// Characters written, excluding the NUL terminator.
    pub len: usize,
    /// Whether the rendered output was cut off to fit the buffer.
    pub truncated: bool,
}

/// Cursor over the argument list, consumed strictly in the order specifiers
/// demand: width `*` first, then precision `*`, then base `*`, then the
/// conversion's own argument.
pub(crate) struct ArgCursor<'s, 'a> {
    args: &'s [Arg<'a>],
    index: usize,
}

impl<'s, 'a> ArgCursor<'s, 'a> {
    pub(crate) fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, index: 0 }
    }

    fn next(&mut self) -> Result<Arg<'a>, Error> {
        let arg = self
            .args
            .get(self.index)
            .copied()
            .ok_or(Error::MissingArgument { index: self.index })?;
        self.index += 1;
        Ok(arg)
    }

    /// Consume the integer behind a `*` width, precision, or base field.
    pub(crate) fn int(&mut self) -> Result<i32, Error> {
        let index = self.index;
        match self.next()? {
            Arg::Int(value) => Ok(value),
            Arg::Uint(value) => Ok(value as i32),
            Arg::Long(value) => Ok(value as i32),
            Arg::Ulong(value) => Ok(value as i32),
            other => Err(Error::WrongArgumentType {
                index,
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    /// Consume a signed value for `%d`/`%i`/`%x`.
    ///
    /// Returns the value and its effective wideness: `widen` comes from the
    /// `l` qualifier, and a 64-bit argument variant is wide regardless.
    pub(crate) fn signed(&mut self, widen: bool) -> Result<(i64, bool), Error> {
        let index = self.index;
        match self.next()? {
            Arg::Int(value) => Ok((i64::from(value), widen)),
            Arg::Uint(value) => Ok((i64::from(value), widen)),
            Arg::Long(value) => Ok((value, true)),
            Arg::Ulong(value) => Ok((value as i64, true)),
            other => Err(Error::WrongArgumentType {
                index,
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    /// Consume an unsigned value for `%u`.
    pub(crate) fn unsigned(&mut self, widen: bool) -> Result<(u64, bool), Error> {
        let index = self.index;
        match self.next()? {
            Arg::Int(value) => Ok((u64::from(value as u32), widen)),
            Arg::Uint(value) => Ok((u64::from(value), widen)),
            Arg::Long(value) => Ok((value as u64, true)),
            Arg::Ulong(value) => Ok((value, true)),
            other => Err(Error::WrongArgumentType {
                index,
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    /// Consume the string behind `%s`.
    pub(crate) fn string(&mut self) -> Result<&'a str, Error> {
        let index = self.index;
        match self.next()? {
            Arg::Str(text) => Ok(text),
            other => Err(Error::WrongArgumentType {
                index,
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    /// Consume the output slot behind `%n`.
    pub(crate) fn count(&mut self) -> Result<&'a Cell<usize>, Error> {
        let index = self.index;
        match self.next()? {
            Arg::Count(slot) => Ok(slot),
            other => Err(Error::WrongArgumentType {
                index,
                expected: "count",
                found: other.kind(),
            }),
        }
    }
}

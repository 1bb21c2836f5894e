//! Numeric limits and capacity constants for the formatting engine.
//!
//! This module centralizes the runtime bounds of the `%` specifier grammar
//! and the memory allocation hints used while rendering.

// ============================================================================
// Specifier Grammar Bounds
// ============================================================================

/// Smallest base the `B` qualifier accepts.
pub const MIN_BASE: i32 = 2;

/// Largest base the `B` qualifier accepts (digits `0-9` then `a-z`).
pub const MAX_BASE: i32 = 36;

/// Base used when no `B` qualifier is present, or when the qualifier's value
/// is out of range (out-of-range bases fall back silently rather than erroring).
pub const DEFAULT_BASE: u32 = 10;

// ============================================================================
// Rendering Buffers
// ============================================================================

/// Size of the call-local digit scratch buffer.
///
/// Sized for the worst case: 64 digits for a 64-bit value rendered in base 2,
/// plus one slot for a leading minus sign.
pub const NUM_BUF_LEN: usize = 65;

/// Extra capacity reserved beyond the format string's own length when
/// allocating an output `String`.
///
/// Rendered output is usually close to the format string in size; a small
/// headroom absorbs typical width padding without reallocating.
pub const OUTPUT_EXTRA_CAPACITY: usize = 16;

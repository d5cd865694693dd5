//! Constants of the hyper-byte geometry.
//!
//! A byte is viewed as a 16x16 matrix coordinate: the high nibble selects
//! the row, the low nibble the column. Every constant here follows from the
//! two nibbles of an 8-bit value.

/// Number of bits in a byte.
pub const BITS: u32 = 8;

/// Number of bits in a nibble.
pub const NIBBLE_BITS: u32 = 4;

/// Mask selecting one nibble.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Mask selecting the high nibble in place.
pub const HIGH_MASK: u8 = 0xF0;

/// Byte cardinality (2^8 = 256).
pub const BYTE_CARDINALITY: usize = 1 << BITS;

/// Root sentinel: the void (00000000).
pub const ROOT_INIT: u8 = 0x00;

/// Root sentinel: the oscillation origin (01010101).
pub const ROOT_BEFORE: u8 = 0x55;

/// Root sentinel: the oscillation inversion (10101010).
pub const ROOT_AFTER: u8 = 0xAA;

/// Root sentinel: saturation (11111111).
pub const ROOT_RUN: u8 = 0xFF;

/// Upper bound on `center` applications while descending to a root.
///
/// Every byte reaches a root in at most [`MAX_DEPTH`] steps; the cap only
/// guards that property against a broken transform.
pub const DESCENT_CAP: u8 = 16;

/// Deepest level of the hierarchy (leaves).
pub const MAX_DEPTH: u8 = 3;

/// Number of roots (quadrants).
pub const ROOT_COUNT: usize = 4;

/// Number of domains across all quadrants (3 per root).
pub const DOMAIN_COUNT: usize = 12;

/// Number of sections across all quadrants (4 per domain).
pub const SECTION_COUNT: usize = 48;

/// Number of leaves across all quadrants (4 per section).
pub const LEAF_COUNT: usize = 192;

/// Level cardinalities, indexed by depth.
///
/// Note: 4 + 12 + 48 + 192 = 256 = BYTE_CARDINALITY
pub const LEVEL_CARDINALITIES: [usize; MAX_DEPTH as usize + 1] =
    [ROOT_COUNT, DOMAIN_COUNT, SECTION_COUNT, LEAF_COUNT];

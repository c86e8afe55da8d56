//! Bit layout of a packed entity identifier.
//!
//! Fields are packed from the least-significant bit upwards:
//!
//! ```text
//! | component[n-1] | ... | component[0] | count (8) | index (32) |
//!   upper bits                                        lower bits
//! ```
//!
//! Each component slot is 16 bits wide and slots are contiguous, so a slot
//! may straddle two backing words.

// Offsets and widths never exceed a few thousand bits
#![allow(clippy::cast_possible_truncation)]

/// Width of the entity index field.
pub const INDEX_BITS: u32 = 32;

/// Width of the component count field.
pub const COUNT_BITS: u32 = 8;

/// Width of a single component ID slot.
pub const COMPONENT_BITS: u32 = 16;

/// Bit offset of the component count field.
pub const COUNT_SHIFT: u32 = INDEX_BITS;

/// Bit offset of the first component slot.
pub const COMPONENTS_SHIFT: u32 = INDEX_BITS + COUNT_BITS;

/// Largest component count the count field can express.
pub const MAX_COMPONENTS: usize = (1 << COUNT_BITS) - 1;

/// Width of one backing word.
pub const WORD_BITS: u32 = u64::BITS;

/// Number of backing words needed to hold [`MAX_COMPONENTS`] components.
pub const FULL_WIDTH_WORDS: usize =
    (COMPONENTS_SHIFT as usize + MAX_COMPONENTS * COMPONENT_BITS as usize).div_ceil(WORD_BITS as usize);

/// Returns how many component slots fit in `words` backing words.
///
/// The result never exceeds [`MAX_COMPONENTS`], since the count field
/// caps the list length regardless of width.
#[must_use]
pub const fn capacity_for(words: usize) -> usize {
    let bits = words * WORD_BITS as usize;
    if bits <= COMPONENTS_SHIFT as usize {
        return 0;
    }
    let fit = (bits - COMPONENTS_SHIFT as usize) / COMPONENT_BITS as usize;
    if fit < MAX_COMPONENTS {
        fit
    } else {
        MAX_COMPONENTS
    }
}

/// Bit offset of the component slot at `slot`.
#[must_use]
pub const fn component_offset(slot: usize) -> usize {
    COMPONENTS_SHIFT as usize + slot * COMPONENT_BITS as usize
}

const fn mask(width: u32) -> u64 {
    (1u64 << width) - 1
}

/// Reads a field of `width` bits (at most 32) starting at bit `offset`.
///
/// Bits beyond the end of `words` read as zero.
pub(crate) fn read_bits(words: &[u64], offset: usize, width: u32) -> u64 {
    debug_assert!(width <= 32);
    let word = offset / WORD_BITS as usize;
    let bit = (offset % WORD_BITS as usize) as u32;

    let Some(&low) = words.get(word) else {
        return 0;
    };
    let mut value = low >> bit;
    if bit + width > WORD_BITS {
        if let Some(&high) = words.get(word + 1) {
            value |= high << (WORD_BITS - bit);
        }
    }
    value & mask(width)
}

/// Writes the low `width` bits of `value` at bit `offset`, clearing what was there.
///
/// Bits that would land beyond the end of `words` are dropped.
pub(crate) fn write_bits(words: &mut [u64], offset: usize, width: u32, value: u64) {
    debug_assert!(width <= 32);
    let word = offset / WORD_BITS as usize;
    let bit = (offset % WORD_BITS as usize) as u32;
    let field = mask(width);
    let value = value & field;

    if let Some(low) = words.get_mut(word) {
        *low = (*low & !(field << bit)) | (value << bit);
    }
    if bit + width > WORD_BITS {
        let spill = WORD_BITS - bit;
        if let Some(high) = words.get_mut(word + 1) {
            *high = (*high & !(field >> spill)) | (value >> spill);
        }
    }
}

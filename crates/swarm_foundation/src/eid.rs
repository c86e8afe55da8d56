//! Packed entity identifiers.
//!
//! A [`PackedId`] carries an entity's index together with the IDs of the
//! component types attached to it. It is an immutable value: attaching or
//! detaching a component returns a new identifier which the caller stores in
//! place of the old one.

// Field values are masked before narrowing
#![allow(clippy::cast_possible_truncation)]

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::layout::{
    COMPONENT_BITS, COUNT_BITS, COUNT_SHIFT, FULL_WIDTH_WORDS, INDEX_BITS, capacity_for,
    component_offset, read_bits, write_bits,
};

/// Identifier of a component type.
pub type ComponentId = u16;

/// The unique numeric identity of an entity.
pub type EntityIndex = u32;

/// Identifier wide enough for the full 255-component capacity.
pub type Eid = PackedId<FULL_WIDTH_WORDS>;

/// 128-bit identifier holding at most 5 components.
pub type Eid128 = PackedId<2>;

/// 64-bit identifier holding at most 1 component.
pub type Eid64 = PackedId<1>;

/// An entity index and its component IDs packed into `WORDS` 64-bit words.
///
/// # Layout
/// - bits `0..32`: entity index
/// - bits `32..40`: component count
/// - bits `40..`: component IDs, 16 bits each, in attachment order
///
/// Widths narrower than [`Eid`] hold fewer components; see [`Self::CAPACITY`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedId<const WORDS: usize> {
    words: [u64; WORDS],
}

impl<const WORDS: usize> PackedId<WORDS> {
    /// Maximum number of components this width can hold.
    pub const CAPACITY: usize = capacity_for(WORDS);

    const FITS_HEADER: () = assert!(
        WORDS * 64 >= (INDEX_BITS + COUNT_BITS) as usize,
        "a packed identifier needs at least 40 bits"
    );

    /// Creates an identifier for `index` with no components.
    #[must_use]
    pub fn new(index: EntityIndex) -> Self {
        let () = Self::FITS_HEADER;
        let mut words = [0; WORDS];
        write_bits(&mut words, 0, INDEX_BITS, u64::from(index));
        Self { words }
    }

    /// Builds an identifier from raw words.
    ///
    /// Any bit pattern is accepted; decoding a pattern that was not produced
    /// by [`Self::encode`] yields meaningless components.
    #[must_use]
    pub const fn from_words(words: [u64; WORDS]) -> Self {
        Self { words }
    }

    /// Returns the raw backing words.
    #[must_use]
    pub const fn as_words(&self) -> &[u64; WORDS] {
        &self.words
    }

    /// Packs `index` and `components` into a new identifier.
    ///
    /// The count field is written from `components.len()`. Duplicates are
    /// stored as given.
    ///
    /// # Errors
    ///
    /// Returns `TooManyComponents` if the list exceeds [`Self::CAPACITY`].
    pub fn encode(index: EntityIndex, components: &[ComponentId]) -> Result<Self> {
        if components.len() > Self::CAPACITY {
            return Err(Error::too_many_components(components.len(), Self::CAPACITY));
        }
        Ok(Self::new(index).with_appended(0, components))
    }

    /// Unpacks the identifier into its index, count, and component list.
    ///
    /// Total for every bit pattern: bits past the backing width read as zero.
    #[must_use]
    pub fn decode(&self) -> Unpacked {
        Unpacked {
            index: self.index(),
            count: self.count(),
            components: self.components().collect(),
        }
    }

    /// Returns the entity index.
    #[must_use]
    pub fn index(&self) -> EntityIndex {
        read_bits(&self.words, 0, INDEX_BITS) as EntityIndex
    }

    /// Returns the number of components recorded in the count field.
    #[must_use]
    pub fn count(&self) -> u8 {
        read_bits(&self.words, COUNT_SHIFT as usize, COUNT_BITS) as u8
    }

    /// Returns true if no components are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Maximum number of components this identifier can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Iterates over the component IDs in attachment order.
    pub fn components(&self) -> Components<'_, WORDS> {
        Components {
            words: &self.words,
            slot: 0,
            end: usize::from(self.count()),
        }
    }

    /// Appends `new_components` after the existing ones.
    ///
    /// Existing entries keep their positions. Nothing is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `TooManyComponents` if the combined list exceeds [`Self::CAPACITY`].
    pub fn pack_additional(&self, new_components: &[ComponentId]) -> Result<Self> {
        let existing = usize::from(self.count());
        let requested = existing + new_components.len();
        if requested > Self::CAPACITY {
            return Err(Error::too_many_components(requested, Self::CAPACITY));
        }
        Ok(self.with_appended(existing, new_components))
    }

    /// Returns true if `component` is attached.
    #[must_use]
    pub fn has_component(&self, component: ComponentId) -> bool {
        self.position(component).is_some()
    }

    /// Returns `component` if it is attached.
    #[must_use]
    pub fn get_component(&self, component: ComponentId) -> Option<ComponentId> {
        self.components().find(|c| *c == component)
    }

    /// Detaches the first occurrence of `component`.
    ///
    /// The remaining components keep their relative order. If `component`
    /// is not attached the identifier is returned unchanged.
    #[must_use]
    pub fn remove_component(&self, component: ComponentId) -> Self {
        let Some(position) = self.position(component) else {
            return *self;
        };

        let count = usize::from(self.count());
        let mut words = self.words;
        for slot in position + 1..count {
            let moved = read_bits(&words, component_offset(slot), COMPONENT_BITS);
            write_bits(&mut words, component_offset(slot - 1), COMPONENT_BITS, moved);
        }
        write_bits(&mut words, component_offset(count - 1), COMPONENT_BITS, 0);
        write_bits(&mut words, COUNT_SHIFT as usize, COUNT_BITS, (count - 1) as u64);
        Self { words }
    }

    fn position(&self, component: ComponentId) -> Option<usize> {
        self.components().position(|c| c == component)
    }

    /// Writes `components` starting at `slot` and sets the count to match.
    ///
    /// Callers check capacity first.
    fn with_appended(&self, slot: usize, components: &[ComponentId]) -> Self {
        let mut words = self.words;
        for (offset, component) in components.iter().enumerate() {
            write_bits(
                &mut words,
                component_offset(slot + offset),
                COMPONENT_BITS,
                u64::from(*component),
            );
        }
        let count = slot + components.len();
        debug_assert!(count <= Self::CAPACITY);
        write_bits(&mut words, COUNT_SHIFT as usize, COUNT_BITS, count as u64);
        Self { words }
    }
}

impl<const WORDS: usize> Default for PackedId<WORDS> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const WORDS: usize> fmt::Debug for PackedId<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eid({}; ", self.index())?;
        f.debug_list().entries(self.components()).finish()?;
        write!(f, ")")
    }
}

impl<const WORDS: usize> fmt::Display for PackedId<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.index())
    }
}

impl From<u128> for Eid128 {
    fn from(raw: u128) -> Self {
        Self::from_words([raw as u64, (raw >> 64) as u64])
    }
}

impl From<Eid128> for u128 {
    fn from(id: Eid128) -> Self {
        u128::from(id.words[0]) | (u128::from(id.words[1]) << 64)
    }
}

impl From<u64> for Eid64 {
    fn from(raw: u64) -> Self {
        Self::from_words([raw])
    }
}

impl From<Eid64> for u64 {
    fn from(id: Eid64) -> Self {
        id.words[0]
    }
}

/// Iterator over the component IDs of a [`PackedId`].
#[derive(Debug, Clone)]
pub struct Components<'a, const WORDS: usize> {
    words: &'a [u64; WORDS],
    slot: usize,
    end: usize,
}

impl<const WORDS: usize> Iterator for Components<'_, WORDS> {
    type Item = ComponentId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slot >= self.end {
            return None;
        }
        let component = read_bits(self.words, component_offset(self.slot), COMPONENT_BITS);
        self.slot += 1;
        Some(component as ComponentId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.slot;
        (remaining, Some(remaining))
    }
}

impl<const WORDS: usize> ExactSizeIterator for Components<'_, WORDS> {}

impl<const WORDS: usize> FusedIterator for Components<'_, WORDS> {}

/// The fields of a [`PackedId`] after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Unpacked {
    /// The entity index.
    pub index: EntityIndex,
    /// The component count field.
    pub count: u8,
    /// Component IDs in attachment order.
    pub components: Vec<ComponentId>,
}

impl Unpacked {
    /// Splits into `(index, count, components)`.
    #[must_use]
    pub fn into_parts(self) -> (EntityIndex, u8, Vec<ComponentId>) {
        (self.index, self.count, self.components)
    }

    /// Re-encodes into an identifier of the requested width.
    ///
    /// # Errors
    ///
    /// Returns `TooManyComponents` if the list exceeds the width's capacity.
    pub fn pack<const WORDS: usize>(&self) -> Result<PackedId<WORDS>> {
        PackedId::encode(self.index, &self.components)
    }
}

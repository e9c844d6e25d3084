//! Lazily encoded, NUL-terminated views of a codepoint store.
//!
//! Each encoding has its own cache stamped with the store generation it was
//! built from. A request with a matching stamp returns the cached units; any
//! other request re-encodes into the existing allocation and restamps.

use crate::codec::Encoding;
use crate::text::store::CodepointStore;

/// One cached encoding of the store, terminated by a zero unit.
#[derive(Debug, Default)]
pub struct UnitCache<U> {
    units: Vec<U>,
    stamp: Option<u64>,
    encodes: u64,
}

impl<U: Copy + Default> UnitCache<U> {
    fn refresh(
        &mut self,
        generation: u64,
        codepoints: &[char],
        encode_into: fn(&[char], &mut Vec<U>),
    ) -> &[U] {
        if self.stamp != Some(generation) {
            self.units.clear();
            encode_into(codepoints, &mut self.units);
            self.units.push(U::default());
            self.stamp = Some(generation);
            self.encodes += 1;
        }
        &self.units
    }

    /// True if the cache holds an encoding of `generation`.
    #[must_use]
    pub fn is_fresh(&self, generation: u64) -> bool {
        self.stamp == Some(generation)
    }

    /// How many times this cache has been (re)encoded.
    #[must_use]
    pub fn encode_count(&self) -> u64 {
        self.encodes
    }
}

/// The three encoded views owned by a text value.
///
/// Cloning yields cold caches; a copy of a text value re-encodes on first use.
#[derive(Debug, Default)]
pub struct EncodedViews {
    pub(crate) utf8: UnitCache<u8>,
    pub(crate) utf16: UnitCache<u16>,
    pub(crate) utf32: UnitCache<u32>,
}

impl EncodedViews {
    /// Create cold caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// NUL-terminated encoding of `store` in `E`, re-encoded only if stale.
    pub fn get<E: Encoding>(&mut self, store: &CodepointStore) -> &[E::Unit] {
        E::view_mut(self).refresh(store.generation(), store.as_slice(), E::encode_into)
    }

    /// Cache state for encoding `E`.
    #[must_use]
    pub fn cache<E: Encoding>(&self) -> &UnitCache<E::Unit> {
        E::view(self)
    }
}

impl Clone for EncodedViews {
    fn clone(&self) -> Self {
        Self::default()
    }
}

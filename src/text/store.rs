//! Owned codepoint storage with a mutation generation counter.

/// Growable sequence of codepoints.
///
/// Every mutable access bumps `generation`, including handing out `&mut`
/// slices, since writes through them cannot be observed individually. Encoded
/// views compare against it to detect staleness.
#[derive(Clone, Debug, Default)]
pub struct CodepointStore {
    data: Vec<char>,
    generation: u64,
}

impl CodepointStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` codepoints.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Take ownership of already-decoded codepoints.
    #[must_use]
    pub fn from_vec(data: Vec<char>) -> Self {
        Self {
            data,
            generation: 0,
        }
    }

    /// Mutation counter.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of codepoints.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if there are no codepoints.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in codepoints.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Codepoint at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.data.get(index).copied()
    }

    /// All codepoints.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.data
    }

    /// Mutable view of all codepoints.
    pub fn as_mut_slice(&mut self) -> &mut [char] {
        self.touch();
        &mut self.data
    }

    /// Mutable access to the underlying vector.
    pub(crate) fn vec_mut(&mut self) -> &mut Vec<char> {
        self.touch();
        &mut self.data
    }

    /// Remove all codepoints, keeping the allocation.
    pub fn clear(&mut self) {
        self.touch();
        self.data.clear();
    }

    /// Append one codepoint.
    pub fn push(&mut self, c: char) {
        self.touch();
        self.data.push(c);
    }

    /// Append a run of codepoints.
    pub fn extend_from_slice(&mut self, codepoints: &[char]) {
        if codepoints.is_empty() {
            return;
        }
        self.touch();
        self.data.extend_from_slice(codepoints);
    }

    /// Consume the store, returning its codepoints.
    #[must_use]
    pub fn into_vec(self) -> Vec<char> {
        self.data
    }
}

impl PartialEq for CodepointStore {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for CodepointStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut store = CodepointStore::new();
        assert!(store.is_empty());
        store.push('a');
        store.push('😀');
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some('😀'));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_generation_bumps_on_mutation() {
        let mut store = CodepointStore::from_vec(vec!['x']);
        let g0 = store.generation();
        store.push('y');
        let g1 = store.generation();
        assert!(g1 != g0);
        store.as_mut_slice()[0] = 'z';
        assert!(store.generation() != g1);
        let g2 = store.generation();
        let _ = store.as_slice();
        let _ = store.len();
        assert_eq!(store.generation(), g2);
        store.vec_mut().truncate(1);
        assert!(store.generation() != g2);
    }

    #[test]
    fn test_empty_extend_does_not_bump() {
        let mut store = CodepointStore::new();
        let g = store.generation();
        store.extend_from_slice(&[]);
        assert_eq!(store.generation(), g);
    }

    #[test]
    fn test_equality_ignores_generation() {
        let mut a = CodepointStore::new();
        a.push('q');
        a.clear();
        a.push('q');
        let b = CodepointStore::from_vec(vec!['q']);
        assert_eq!(a, b);
    }
}

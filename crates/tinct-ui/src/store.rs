use std::fmt;

use tinct_engine::paint::{Gradient, GradientKind};

/// An index was outside `[0, len)`.
///
/// Bad indices are contract violations, not user-facing errors: callers
/// translating toolkit selection state must clamp through
/// [`GradientStore::index_safe`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gradient index {} out of range (store holds {})", self.index, self.len)
    }
}

impl std::error::Error for StoreError {}

/// Ordered registry of gradient definitions.
///
/// The list position is the external identity: selector rows, theme
/// references, and the controller's selection all address entries by index,
/// and indices stay contiguous after removal (entries above the removed
/// position shift down). Any index held across [`remove`](Self::remove) is
/// stale and must be reacquired.
///
/// A seeded store never drops below one entry; [`remove`](Self::remove)
/// at the floor is a silent no-op, so the editor cannot reach a
/// zero-gradient state.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStore {
    entries: Vec<Gradient>,
}

impl GradientStore {
    /// Store seeded with a single default vertical gradient.
    pub fn new() -> Self {
        Self {
            entries: vec![Gradient::default()],
        }
    }

    /// Empty store, for populating from a loaded theme. Seed it with at
    /// least one entry before handing it to the editor.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new definition of `kind` with default colors and returns
    /// its index (the previous length). Never fails.
    pub fn create(&mut self, kind: GradientKind) -> usize {
        let index = self.entries.len();
        self.entries.push(Gradient::new(kind));
        log::debug!("store: created {} gradient at {index}", kind.label());
        index
    }

    /// Appends a fresh default vertical gradient and returns its index.
    ///
    /// Does not clone the current selection, matching the add button's
    /// long-standing behavior.
    pub fn duplicate(&mut self) -> usize {
        self.create(GradientKind::Vertical)
    }

    /// Removes the entry at `index` and returns `true`.
    ///
    /// Silent no-op (returns `false`) when the store holds a single entry
    /// or `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        log::debug!("store: removed gradient at {index}, {} remain", self.entries.len());
        true
    }

    pub fn get(&self, index: usize) -> Result<&Gradient, StoreError> {
        self.entries.get(index).ok_or(StoreError { index, len: self.entries.len() })
    }

    /// Applies `mutate` to the entry at `index`.
    pub fn update(
        &mut self,
        index: usize,
        mutate: impl FnOnce(&mut Gradient),
    ) -> Result<(), StoreError> {
        let len = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or(StoreError { index, len })?;
        mutate(entry);
        Ok(())
    }

    /// Maps an unreliable external index (toolkit selection state) to a
    /// valid one: negative or past-the-end values fall back to 0.
    ///
    /// Only meaningful on a non-empty store.
    pub fn index_safe(&self, index: isize) -> usize {
        if index <= 0 || index as usize >= self.entries.len() {
            0
        } else {
            index as usize
        }
    }
}

impl Default for GradientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_engine::paint::Color;

    fn store_of(kinds: &[GradientKind]) -> GradientStore {
        let mut s = GradientStore::empty();
        for &k in kinds {
            s.create(k);
        }
        s
    }

    // ── create / duplicate ────────────────────────────────────────────────

    #[test]
    fn create_appends_and_returns_previous_length() {
        let mut s = GradientStore::new();
        for (i, kind) in GradientKind::ALL.into_iter().enumerate() {
            let before = s.len();
            let index = s.create(kind);
            assert_eq!(index, before);
            assert_eq!(s.len(), before + 1);
            assert_eq!(s.get(index).unwrap().kind, kind, "entry {i}");
        }
    }

    #[test]
    fn duplicate_creates_a_fresh_vertical_gradient() {
        let mut s = store_of(&[GradientKind::Radial]);
        s.update(0, |g| g.start = Color::opaque(1.0, 0.0, 0.0)).unwrap();

        let index = s.duplicate();
        let copy = s.get(index).unwrap();
        // Not a clone of the selected entry: default kind and colors.
        assert_eq!(copy.kind, GradientKind::Vertical);
        assert_eq!(copy.start, Color::opaque(1.0, 1.0, 1.0));
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn remove_last_entry_is_a_no_op() {
        let mut s = GradientStore::new();
        let before = s.get(0).unwrap().clone();
        assert!(!s.remove(0));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(0).unwrap(), &before);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut s = store_of(&[GradientKind::Vertical, GradientKind::Radial]);
        assert!(!s.remove(5));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut s = store_of(&[GradientKind::Vertical, GradientKind::Horizontal, GradientKind::Radial]);
        assert!(s.remove(1));
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(0).unwrap().kind, GradientKind::Vertical);
        assert_eq!(s.get(1).unwrap().kind, GradientKind::Radial);
    }

    #[test]
    fn remove_first_keeps_remaining_contents() {
        // Selector scenario: one vertical, create a radial, delete index 0.
        let mut s = GradientStore::new();
        let index = s.create(GradientKind::Radial);
        assert_eq!(index, 1);

        assert!(s.remove(0));
        assert_eq!(s.len(), 1);
        let remaining = s.get(0).unwrap();
        assert_eq!(remaining.kind, GradientKind::Radial);
        assert_eq!(remaining.start, Color::opaque(1.0, 1.0, 1.0));
        assert_eq!(remaining.end, Color::opaque(0.0, 0.0, 0.0));
    }

    // ── get / update ──────────────────────────────────────────────────────

    #[test]
    fn get_out_of_range_fails() {
        let s = GradientStore::new();
        assert_eq!(s.get(1), Err(StoreError { index: 1, len: 1 }));
    }

    #[test]
    fn update_mutates_in_place() {
        let mut s = GradientStore::new();
        s.update(0, |g| g.kind = GradientKind::Radial).unwrap();
        assert_eq!(s.get(0).unwrap().kind, GradientKind::Radial);
    }

    #[test]
    fn update_out_of_range_fails() {
        let mut s = GradientStore::new();
        let err = s.update(3, |g| g.kind = GradientKind::Radial).unwrap_err();
        assert_eq!(err, StoreError { index: 3, len: 1 });
    }

    // ── index_safe ────────────────────────────────────────────────────────

    #[test]
    fn index_safe_clamps_invalid_input_to_zero() {
        let s = store_of(&[GradientKind::Vertical, GradientKind::Radial, GradientKind::Horizontal]);
        assert_eq!(s.index_safe(-1), 0);
        assert_eq!(s.index_safe(3), 0);
        assert_eq!(s.index_safe(99), 0);
    }

    #[test]
    fn index_safe_keeps_valid_input() {
        let s = store_of(&[GradientKind::Vertical, GradientKind::Radial, GradientKind::Horizontal]);
        for i in 0..3 {
            assert_eq!(s.index_safe(i), i as usize);
        }
    }
}

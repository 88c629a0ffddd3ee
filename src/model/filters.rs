//! Filter Model
//!
//! The ordered set of filter slots, one per gallery column. Each slot
//! owns its pattern text and the matches resolved from it; slot identity
//! is the column position and survives resizes that keep the slot.

use std::path::{Path, PathBuf};

use crate::logic::matcher;

/// One gallery column: a filter pattern and its resolved matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSlot {
    /// Stable identity; equals the column position.
    pub index: usize,

    /// Current filter text, if the user has set one.
    pub pattern: Option<String>,

    /// Files matching the pattern, in natural order.
    pub matches: Vec<PathBuf>,
}

impl FilterSlot {
    fn new(index: usize) -> Self {
        Self {
            index,
            pattern: None,
            matches: Vec::new(),
        }
    }
}

/// The ordered sequence of filter slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    slots: Vec<FilterSlot>,
}

impl FilterSet {
    /// Create a set of `count` empty slots with indices `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(FilterSlot::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[FilterSlot] {
        &self.slots
    }

    /// Change the number of columns.
    ///
    /// Shrinking truncates from the end; growing appends fresh empty
    /// slots with ascending indices. Surviving slots keep their pattern,
    /// matches, and identity untouched.
    pub fn resize(&mut self, new_count: usize) {
        if new_count < self.slots.len() {
            self.slots.truncate(new_count);
        } else {
            while self.slots.len() < new_count {
                self.slots.push(FilterSlot::new(self.slots.len()));
            }
        }
    }

    /// Store a slot's pattern and re-resolve every slot's matches.
    ///
    /// Whitespace-only text clears the pattern; a cleared slot has no
    /// matches. Any edit refreshes all slots, since the filesystem may
    /// have moved on since the last resolution. Returns false when no
    /// slot has that index.
    pub fn set_pattern(&mut self, root: &Path, index: usize, pattern: &str) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };

        let trimmed = pattern.trim();
        slot.pattern = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.recompute_all(root);
        true
    }

    /// Re-resolve every slot that has a pattern set.
    ///
    /// Called on every pattern edit, and on its own for the refresh
    /// button (the filesystem can change without any edit).
    pub fn recompute_all(&mut self, root: &Path) {
        for slot in &mut self.slots {
            slot.matches = match &slot.pattern {
                Some(pattern) => matcher::resolve_pattern(root, pattern),
                None => Vec::new(),
            };
        }
    }

    /// Per-slot match counts, in slot order.
    pub fn counts(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.matches.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_new_set_has_ascending_indices() {
        let set = FilterSet::new(3);
        assert_eq!(set.len(), 3);
        for (position, slot) in set.slots().iter().enumerate() {
            assert_eq!(slot.index, position);
            assert!(slot.pattern.is_none());
            assert!(slot.matches.is_empty());
        }
    }

    #[test]
    fn test_grow_appends_fresh_slots() {
        let dir = TempDir::new().unwrap();
        let mut set = FilterSet::new(2);
        set.set_pattern(dir.path(), 0, "*.jpg");

        set.resize(4);

        assert_eq!(set.len(), 4);
        assert_eq!(set.slots()[0].pattern.as_deref(), Some("*.jpg"));
        assert_eq!(set.slots()[2].index, 2);
        assert_eq!(set.slots()[3].index, 3);
        assert!(set.slots()[3].pattern.is_none());
    }

    #[test]
    fn test_shrink_truncates_from_the_end() {
        let dir = TempDir::new().unwrap();
        let mut set = FilterSet::new(3);
        set.set_pattern(dir.path(), 0, "a*");
        set.set_pattern(dir.path(), 2, "c*");

        set.resize(2);

        assert_eq!(set.len(), 2);
        assert_eq!(set.slots()[0].pattern.as_deref(), Some("a*"));
        assert!(set.slots()[1].pattern.is_none());
    }

    #[test]
    fn test_shrink_then_grow_does_not_resurrect() {
        let dir = TempDir::new().unwrap();
        let mut set = FilterSet::new(3);
        set.set_pattern(dir.path(), 2, "c*");

        set.resize(1);
        set.resize(3);

        assert!(
            set.slots()[2].pattern.is_none(),
            "a removed slot comes back empty, not with its old pattern"
        );
    }

    #[test]
    fn test_set_pattern_trims_and_clears() {
        let dir = TempDir::new().unwrap();
        let mut set = FilterSet::new(1);

        set.set_pattern(dir.path(), 0, "  *.png  ");
        assert_eq!(set.slots()[0].pattern.as_deref(), Some("*.png"));

        set.set_pattern(dir.path(), 0, "   ");
        assert!(set.slots()[0].pattern.is_none());
        assert!(set.slots()[0].matches.is_empty());
    }

    #[test]
    fn test_set_pattern_unknown_index() {
        let dir = TempDir::new().unwrap();
        let mut set = FilterSet::new(1);
        assert!(!set.set_pattern(dir.path(), 5, "*.jpg"));
    }

    #[test]
    fn test_set_pattern_resolves_matches() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("img1.jpg")).unwrap();
        File::create(dir.path().join("img2.jpg")).unwrap();
        File::create(dir.path().join("other.png")).unwrap();

        let mut set = FilterSet::new(2);
        set.set_pattern(dir.path(), 0, "img*.jpg");

        assert_eq!(set.counts(), vec![2, 0]);
    }

    #[test]
    fn test_set_pattern_refreshes_other_slots_too() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("img1.jpg")).unwrap();

        let mut set = FilterSet::new(2);
        set.set_pattern(dir.path(), 0, "img*.jpg");
        assert_eq!(set.counts(), vec![1, 0]);

        File::create(dir.path().join("img2.jpg")).unwrap();
        set.set_pattern(dir.path(), 1, "*.jpg");

        assert_eq!(set.counts(), vec![2, 2], "an edit re-resolves every slot");
    }

    #[test]
    fn test_recompute_all_picks_up_new_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("img1.jpg")).unwrap();

        let mut set = FilterSet::new(1);
        set.set_pattern(dir.path(), 0, "img*.jpg");
        assert_eq!(set.counts(), vec![1]);

        File::create(dir.path().join("img2.jpg")).unwrap();
        assert_eq!(set.counts(), vec![1], "no re-scan until asked");

        set.recompute_all(dir.path());
        assert_eq!(set.counts(), vec![2]);
    }

    #[test]
    fn test_recompute_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("img1.jpg")).unwrap();

        let mut set = FilterSet::new(2);
        set.set_pattern(dir.path(), 0, "img*.jpg");

        let mut twice = set.clone();
        set.recompute_all(dir.path());
        twice.recompute_all(dir.path());
        twice.recompute_all(dir.path());
        assert_eq!(set, twice);
    }
}

//! ``src/model/selection.rs``
//!
//! # Selection Model
//!
//! The mark-set (absolute path to display name) and the concatenation order,
//! which is kept separately so the user can reorder it. The order is allowed
//! to drift from the set; [`Selection::reconcile`] restores it and every
//! operation that reads the order goes through it first.

use std::path::{Path, PathBuf};

use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use tracing::debug;

/// Result of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked,
    Unmarked,
    RejectedDirectory,
    RejectedNotText,
}

/// Result of a bulk toggle over a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    Marked(usize),
    Unmarked(usize),
    NoCandidates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    marks: AHashMap<PathBuf, CompactString>,
    order: Vec<PathBuf>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[must_use]
    pub fn is_marked(&self, path: &Path) -> bool {
        self.marks.contains_key(path)
    }

    #[must_use]
    pub fn name_of(&self, path: &Path) -> Option<&str> {
        self.marks.get(path).map(CompactString::as_str)
    }

    /// Flip membership of `path`.
    ///
    /// Directories and files failing `probe` are refused without touching
    /// state. `probe` is only consulted for non-directories.
    pub fn toggle_mark<F>(
        &mut self,
        path: &Path,
        name: &str,
        is_dir: bool,
        probe: F,
    ) -> MarkOutcome
    where
        F: FnOnce(&Path) -> bool,
    {
        if is_dir {
            return MarkOutcome::RejectedDirectory;
        }
        if !probe(path) {
            return MarkOutcome::RejectedNotText;
        }

        if self.marks.remove(path).is_some() {
            self.order.retain(|p| p != path);
            debug!(path = %path.display(), "Unmarked");
            MarkOutcome::Unmarked
        } else {
            self.insert(path.to_path_buf(), CompactString::from(name));
            debug!(path = %path.display(), "Marked");
            MarkOutcome::Marked
        }
    }

    /// Remove `path` if marked.
    pub fn unmark(&mut self, path: &Path) -> bool {
        if self.marks.remove(path).is_none() {
            return false;
        }
        self.order.retain(|p| p != path);
        true
    }

    /// Mark every candidate, or unmark them all if every one is already marked.
    ///
    /// Candidates are expected to be text files; the caller filters them.
    pub fn mark_all(&mut self, candidates: &[(PathBuf, CompactString)]) -> BulkOutcome {
        if candidates.is_empty() {
            return BulkOutcome::NoCandidates;
        }

        if candidates.iter().all(|(path, _)| self.is_marked(path)) {
            let doomed: AHashSet<&PathBuf> = candidates.iter().map(|(path, _)| path).collect();
            for path in &doomed {
                self.marks.remove(path.as_path());
            }
            self.order.retain(|p| !doomed.contains(p));
            return BulkOutcome::Unmarked(doomed.len());
        }

        let mut added = 0;
        for (path, name) in candidates {
            if !self.is_marked(path) {
                self.insert(path.clone(), name.clone());
                added += 1;
            }
        }
        BulkOutcome::Marked(added)
    }

    /// Swap the entry at `index` with its neighbour. Returns the new index of
    /// the moved entry, or `None` at a boundary.
    pub fn move_in_order(&mut self, index: usize, direction: Direction) -> Option<usize> {
        self.reconcile();
        let target = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index + 1,
        };
        if index >= self.order.len() || target >= self.order.len() {
            return None;
        }
        self.order.swap(index, target);
        Some(target)
    }

    /// Bring the order back to a duplicate-free permutation of the marked
    /// paths: strays and repeats are dropped, missing paths appended.
    pub fn reconcile(&mut self) {
        let mut seen: AHashSet<PathBuf> = AHashSet::with_capacity(self.order.len());
        let marks = &self.marks;
        self.order
            .retain(|p| marks.contains_key(p) && seen.insert(p.clone()));

        if self.order.len() == self.marks.len() {
            return;
        }

        // Hash map iteration order is arbitrary; appended paths are sorted so
        // the healed order is deterministic.
        let mut missing: Vec<PathBuf> = self
            .marks
            .keys()
            .filter(|p| !seen.contains(*p))
            .cloned()
            .collect();
        missing.sort();
        debug!(count = missing.len(), "Reconciled missing paths into order");
        self.order.extend(missing);
    }

    /// The reconciled order, ready for the writer or the clipboard.
    pub fn materialize_order(&mut self) -> Vec<PathBuf> {
        self.reconcile();
        self.order.clone()
    }

    /// Read-only view of the order; call [`Self::reconcile`] first.
    #[must_use]
    pub fn order(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.marks.clear();
        self.order.clear();
    }

    fn insert(&mut self, path: PathBuf, name: CompactString) {
        if !self.order.contains(&path) {
            self.order.push(path.clone());
        }
        self.marks.insert(path, name);
    }

    #[cfg(test)]
    pub(crate) fn from_parts(marks: &[&str], order: &[&str]) -> Self {
        Self {
            marks: marks
                .iter()
                .map(|p| (PathBuf::from(p), CompactString::from(*p)))
                .collect(),
            order: order.iter().map(PathBuf::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(_: &Path) -> bool {
        true
    }

    fn binary(_: &Path) -> bool {
        false
    }

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    fn candidates(list: &[&str]) -> Vec<(PathBuf, CompactString)> {
        list.iter()
            .map(|p| (PathBuf::from(p), CompactString::from(*p)))
            .collect()
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut sel = Selection::new();
        let p = Path::new("/d/a.txt");

        assert_eq!(sel.toggle_mark(p, "a.txt", false, text), MarkOutcome::Marked);
        assert!(sel.is_marked(p));
        assert_eq!(sel.toggle_mark(p, "a.txt", false, text), MarkOutcome::Unmarked);
        assert!(sel.is_empty());
        assert!(sel.materialize_order().is_empty());
    }

    #[test]
    fn directories_and_binaries_are_refused() {
        let mut sel = Selection::new();

        assert_eq!(
            sel.toggle_mark(Path::new("/d/sub"), "sub", true, text),
            MarkOutcome::RejectedDirectory
        );
        assert_eq!(
            sel.toggle_mark(Path::new("/d/a.bin"), "a.bin", false, binary),
            MarkOutcome::RejectedNotText
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn order_follows_marking_sequence() {
        let mut sel = Selection::new();
        for p in ["/d/c.txt", "/d/a.txt", "/d/b.txt"] {
            sel.toggle_mark(Path::new(p), p, false, text);
        }
        sel.toggle_mark(Path::new("/d/a.txt"), "a", false, text);

        assert_eq!(sel.materialize_order(), paths(&["/d/c.txt", "/d/b.txt"]));
        assert_eq!(sel.name_of(Path::new("/d/c.txt")), Some("/d/c.txt"));
    }

    #[test]
    fn mark_all_twice_marks_then_unmarks() {
        let mut sel = Selection::new();
        let list = candidates(&["/d/a.txt", "/d/b.txt"]);

        assert_eq!(sel.mark_all(&list), BulkOutcome::Marked(2));
        assert_eq!(sel.materialize_order(), paths(&["/d/a.txt", "/d/b.txt"]));
        assert_eq!(sel.mark_all(&list), BulkOutcome::Unmarked(2));
        assert!(sel.is_empty());
        assert!(sel.materialize_order().is_empty());
        assert_eq!(sel.mark_all(&[]), BulkOutcome::NoCandidates);
    }

    #[test]
    fn mark_all_keeps_existing_marks_in_place() {
        let mut sel = Selection::new();
        sel.toggle_mark(Path::new("/d/b.txt"), "b.txt", false, text);
        sel.toggle_mark(Path::new("/other/z.txt"), "z.txt", false, text);

        let outcome = sel.mark_all(&candidates(&["/d/a.txt", "/d/b.txt", "/d/c.txt"]));

        assert_eq!(outcome, BulkOutcome::Marked(2));
        assert_eq!(
            sel.materialize_order(),
            paths(&["/d/b.txt", "/other/z.txt", "/d/a.txt", "/d/c.txt"])
        );
    }

    #[test]
    fn mark_all_unmark_leaves_other_marks() {
        let mut sel = Selection::new();
        sel.toggle_mark(Path::new("/other/z.txt"), "z.txt", false, text);
        let list = candidates(&["/d/a.txt"]);
        sel.mark_all(&list);

        assert_eq!(sel.mark_all(&list), BulkOutcome::Unmarked(1));
        assert_eq!(sel.materialize_order(), paths(&["/other/z.txt"]));
    }

    #[test]
    fn move_up_then_down_restores_order() {
        let mut sel = Selection::new();
        sel.mark_all(&candidates(&["/a", "/b", "/c"]));
        let before = sel.materialize_order();

        assert_eq!(sel.move_in_order(1, Direction::Up), Some(0));
        assert_eq!(sel.materialize_order(), paths(&["/b", "/a", "/c"]));
        assert_eq!(sel.move_in_order(0, Direction::Down), Some(1));
        assert_eq!(sel.materialize_order(), before);
    }

    #[test]
    fn move_at_boundaries_is_a_no_op() {
        let mut sel = Selection::new();
        sel.mark_all(&candidates(&["/a", "/b"]));

        assert_eq!(sel.move_in_order(0, Direction::Up), None);
        assert_eq!(sel.move_in_order(1, Direction::Down), None);
        assert_eq!(sel.move_in_order(7, Direction::Up), None);
        assert_eq!(sel.materialize_order(), paths(&["/a", "/b"]));
    }

    #[test]
    fn reconcile_heals_desynced_order() {
        let mut sel = Selection::from_parts(&["/a", "/b", "/c"], &["/c", "/x", "/c"]);

        let order = sel.materialize_order();

        assert_eq!(order, paths(&["/c", "/a", "/b"]));
        assert_eq!(order.len(), sel.len());
    }
}

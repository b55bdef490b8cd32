//! ``src/model/quick_mark.rs``
//!
//! # Quick-Mark Indexer
//!
//! Maps the 52 letters `a..z`, `A..Z` onto a page of a snapshot of the
//! directory's text files. The snapshot is taken on entry and never refreshed;
//! leaving the directory ends the mode.

use crate::fs::listing::Entry;

pub const PAGE_SIZE: usize = 52;

/// `'a'..='z'` to `0..=25`, `'A'..='Z'` to `26..=51`.
#[must_use]
pub const fn letter_to_slot(letter: char) -> Option<usize> {
    match letter {
        'a'..='z' => Some(letter as usize - 'a' as usize),
        'A'..='Z' => Some(letter as usize - 'A' as usize + 26),
        _ => None,
    }
}

#[must_use]
pub const fn slot_to_letter(slot: usize) -> Option<char> {
    match slot {
        0..=25 => Some((b'a' + slot as u8) as char),
        26..=51 => Some((b'A' + (slot - 26) as u8) as char),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickMarkState {
    files: Vec<Entry>,
    page: usize,
}

impl QuickMarkState {
    /// `None` when there is nothing to address.
    #[must_use]
    pub fn snapshot(files: Vec<Entry>) -> Option<Self> {
        (!files.is_empty()).then_some(Self { files, page: 0 })
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.files.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// The file bound to `letter` on the current page, if any.
    #[must_use]
    pub fn resolve(&self, letter: char) -> Option<&Entry> {
        let slot = letter_to_slot(letter)?;
        self.files.get(self.page * PAGE_SIZE + slot)
    }

    /// `(letter, entry)` pairs on the current page.
    pub fn page_entries(&self) -> impl Iterator<Item = (char, &Entry)> {
        self.files
            .iter()
            .skip(self.page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .enumerate()
            .filter_map(|(slot, entry)| slot_to_letter(slot).map(|letter| (letter, entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::listing::EntryKind;
    use std::path::PathBuf;

    fn files(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry {
                name: format!("f{i:03}.txt").into(),
                path: PathBuf::from(format!("/d/f{i:03}.txt")),
                kind: EntryKind::File,
            })
            .collect()
    }

    #[test]
    fn alphabet_is_a_bijection() {
        for k in 0..200 {
            let slot = k % PAGE_SIZE;
            let letter = slot_to_letter(slot).unwrap();
            assert_eq!(letter_to_slot(letter), Some(slot));
        }
        assert_eq!(letter_to_slot('a'), Some(0));
        assert_eq!(letter_to_slot('Z'), Some(51));
        assert_eq!(letter_to_slot('1'), None);
        assert_eq!(slot_to_letter(52), None);
    }

    #[test]
    fn empty_snapshot_is_refused() {
        assert!(QuickMarkState::snapshot(Vec::new()).is_none());
    }

    #[test]
    fn resolve_uses_page_offset() {
        let mut qm = QuickMarkState::snapshot(files(60)).unwrap();

        assert_eq!(qm.resolve('b').unwrap().name, "f001.txt");
        assert!(qm.next_page());
        assert_eq!(qm.resolve('a').unwrap().name, "f052.txt");
        assert_eq!(qm.resolve('h').unwrap().name, "f059.txt");
        assert!(qm.resolve('i').is_none());
    }

    #[test]
    fn paging_clamps() {
        let mut qm = QuickMarkState::snapshot(files(53)).unwrap();

        assert_eq!(qm.page_count(), 2);
        assert!(!qm.prev_page());
        assert!(qm.next_page());
        assert!(!qm.next_page());
        assert_eq!(qm.page(), 1);
        assert_eq!(qm.page_entries().count(), 1);
    }

    #[test]
    fn page_entries_are_lettered() {
        let qm = QuickMarkState::snapshot(files(28)).unwrap();
        let letters: String = qm.page_entries().map(|(l, _)| l).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyzAB");
    }
}

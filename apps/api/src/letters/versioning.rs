//! Session-scoped letter history. Append-only; versions are never edited or removed.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::version::{LetterVersion, VersionSummary};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version {index} does not exist ({len} recorded)")]
    IndexOutOfRange { index: String, len: usize },
}

/// Parses a version index as given by a client. Anything that is not an
/// integer within `i64` is out of range like any other missing version.
pub fn parse_index(raw: &str, len: usize) -> Result<i64, VersionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| VersionError::IndexOutOfRange {
            index: raw.to_string(),
            len,
        })
}

#[derive(Debug, Default)]
pub struct VersionStore {
    versions: Vec<LetterVersion>,
    current: Option<usize>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a version at the end and moves the cursor onto it. Identical
    /// consecutive letters are still recorded separately.
    pub fn append(&mut self, version: LetterVersion) -> usize {
        self.versions.push(version);
        let index = self.versions.len() - 1;
        self.current = Some(index);
        info!("Recorded letter version {index}");
        index
    }

    pub fn get(&self, index: i64) -> Result<&LetterVersion, VersionError> {
        let position = self.resolve(index)?;
        Ok(&self.versions[position])
    }

    /// Moves the cursor to `index` and returns that version. Leaves the store
    /// untouched when the index is out of range.
    pub fn restore(&mut self, index: i64) -> Result<&LetterVersion, VersionError> {
        let position = self.resolve(index)?;
        self.current = Some(position);
        debug!("Cursor moved to letter version {position}");
        Ok(&self.versions[position])
    }

    pub fn list(&self) -> Vec<VersionSummary> {
        self.versions
            .iter()
            .enumerate()
            .map(|(index, version)| version.summary(index))
            .collect()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    fn resolve(&self, index: i64) -> Result<usize, VersionError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.versions.len())
            .ok_or_else(|| VersionError::IndexOutOfRange {
                index: index.to_string(),
                len: self.versions.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::letters::templates::TemplateId;
    use crate::models::details::UserDetails;

    fn version(letter: &str, template: TemplateId) -> LetterVersion {
        LetterVersion::new(
            template,
            &UserDetails::blank(),
            letter.to_string(),
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_empty_store() {
        let store = VersionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.current_index(), None);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_append_advances_cursor() {
        let mut store = VersionStore::new();
        assert_eq!(store.append(version("a", TemplateId::Formal)), 0);
        assert_eq!(store.append(version("b", TemplateId::Casual)), 1);
        assert_eq!(store.current_index(), Some(1));
        assert_eq!(store.get(1).unwrap().letter, "b");
    }

    #[test]
    fn test_identical_letters_are_not_deduplicated() {
        let mut store = VersionStore::new();
        store.append(version("same", TemplateId::Formal));
        store.append(version("same", TemplateId::Formal));
        assert_eq!(store.len(), 2);
        let ids: Vec<_> = store.list().iter().map(|s| s.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_restore_moves_cursor_back() {
        let mut store = VersionStore::new();
        store.append(version("a", TemplateId::Formal));
        store.append(version("b", TemplateId::Technical));
        let restored = store.restore(0).unwrap();
        assert_eq!(restored.letter, "a");
        assert_eq!(store.current_index(), Some(0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_restore_out_of_range_changes_nothing() {
        let mut store = VersionStore::new();
        store.append(version("a", TemplateId::Formal));
        store.append(version("b", TemplateId::Formal));

        for index in [2, 99, -1] {
            assert_eq!(
                store.restore(index).unwrap_err(),
                VersionError::IndexOutOfRange {
                    index: index.to_string(),
                    len: 2
                }
            );
        }
        assert_eq!(store.current_index(), Some(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3", 1), Ok(3));
        assert_eq!(parse_index("-1", 1), Ok(-1));
        for raw in ["99999999999999999999", "abc", ""] {
            assert_eq!(
                parse_index(raw, 1).unwrap_err(),
                VersionError::IndexOutOfRange {
                    index: raw.to_string(),
                    len: 1
                }
            );
        }
    }

    #[test]
    fn test_list_summaries_in_order() {
        let mut store = VersionStore::new();
        store.append(version("a", TemplateId::Formal));
        store.append(version("b", TemplateId::Casual));
        let summaries = store.list();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].index, 0);
        assert_eq!(summaries[1].template, TemplateId::Casual);
    }
}

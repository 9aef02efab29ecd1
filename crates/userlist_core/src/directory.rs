use crate::alphabet::{AlphabetBucket, AlphabetIndex};
use crate::errors::{Result, UserListError};
use crate::paging::{PageLimits, PageRequest, PageResult, SearchRequest};
use crate::store::{NameRecord, NameStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Alphabet buckets plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetSummary {
    pub alphabet_info: Vec<AlphabetBucket>,
    pub total_letters: usize,
    pub total_count: usize,
}

/// Every record, unpaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllNames {
    pub items: Vec<NameRecord>,
    pub total_count: usize,
}

/// Read-only query engine over a loaded [`NameStore`] and its
/// [`AlphabetIndex`].
///
/// Both are built in the constructor and never touched again, so a directory
/// can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    store: NameStore,
    index: AlphabetIndex,
    limits: PageLimits,
}

pub type DirectoryHandle = Arc<UserDirectory>;

impl UserDirectory {
    pub fn new(store: NameStore, limits: PageLimits) -> Self {
        let index = AlphabetIndex::build(&store);
        tracing::info!(
            names = store.len(),
            letters = index.len(),
            "user directory ready"
        );
        Self {
            store,
            index,
            limits,
        }
    }

    /// Load names from `path` and build the index.
    pub fn open(path: impl AsRef<Path>, limits: PageLimits) -> Result<Self> {
        let store = NameStore::load(path)?;
        Ok(Self::new(store, limits))
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    /// Unfiltered page over the whole store.
    pub fn page(&self, req: &PageRequest) -> PageResult<NameRecord> {
        let page = self.limits.normalize(req.page, req.size);
        let total = self.store.len();
        match page.window(total) {
            Some(range) => PageResult::new(self.records(range), total, page),
            None => PageResult::empty(total, page),
        }
    }

    /// Page within the bucket of `letter`; unknown letters yield an empty
    /// page with a zero total.
    pub fn page_by_letter(&self, letter: char, req: &PageRequest) -> PageResult<NameRecord> {
        let page = self.limits.normalize(req.page, req.size);
        let Some(bucket) = self.index.get(letter) else {
            return PageResult::empty(0, page);
        };
        match page.window(bucket.count) {
            Some(range) => {
                let start = bucket.start_index + range.start;
                let end = (bucket.start_index + range.end).min(bucket.end_index + 1);
                PageResult::new(self.records(start..end), bucket.count, page)
            }
            None => PageResult::empty(bucket.count, page),
        }
    }

    /// Case-insensitive substring search, paged over the matches.
    ///
    /// This is a full linear scan of the store on every call (O(n·m)); an
    /// empty query falls back to [`UserDirectory::page`].
    pub fn search(&self, req: &SearchRequest) -> PageResult<NameRecord> {
        let query = req.trimmed_query();
        if query.is_empty() {
            return self.page(&req.paging());
        }

        let needle = query.to_lowercase();
        let page = self.limits.normalize(req.page, req.size);
        let matches: Vec<usize> = self
            .store
            .iter()
            .enumerate()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(query, matches = matches.len(), "search scanned store");

        match page.window(matches.len()) {
            Some(range) => {
                let items = matches[range]
                    .iter()
                    .map(|&i| self.store.record(i))
                    .collect();
                PageResult::new(items, matches.len(), page)
            }
            None => PageResult::empty(matches.len(), page),
        }
    }

    /// Buckets for A..=Z that have at least one name.
    pub fn summary(&self) -> Vec<AlphabetBucket> {
        self.index.summary()
    }

    pub fn alphabet(&self) -> AlphabetSummary {
        let alphabet_info = self.summary();
        AlphabetSummary {
            total_letters: alphabet_info.len(),
            total_count: alphabet_info.iter().map(|b| b.count).sum(),
            alphabet_info,
        }
    }

    pub fn bucket_for(&self, letter: char) -> Option<AlphabetBucket> {
        self.index.get(letter).copied()
    }

    /// Like [`UserDirectory::bucket_for`], with absence as an error value.
    pub fn require_bucket(&self, letter: char) -> Result<AlphabetBucket> {
        self.bucket_for(letter)
            .ok_or_else(|| UserListError::LetterNotFound(crate::alphabet::upper(letter)))
    }

    pub fn all(&self) -> AllNames {
        AllNames {
            items: self.records(0..self.store.len()),
            total_count: self.store.len(),
        }
    }

    fn records(&self, range: std::ops::Range<usize>) -> Vec<NameRecord> {
        range.map(|i| self.store.record(i)).collect()
    }
}

impl From<NameStore> for UserDirectory {
    fn from(store: NameStore) -> Self {
        Self::new(store, PageLimits::default())
    }
}

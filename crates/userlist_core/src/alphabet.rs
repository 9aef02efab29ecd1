use crate::consts::ALPHABET;
use crate::store::NameStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contiguous run of store positions sharing a leading letter.
///
/// `start_index..=end_index` is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetBucket {
    pub letter: char,
    pub count: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Letter → bucket mapping, built once from a [`NameStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetIndex {
    buckets: BTreeMap<char, AlphabetBucket>,
}

impl AlphabetIndex {
    /// Build the index in a single pass over the store.
    ///
    /// Precondition: names sharing an uppercased leading letter form one
    /// contiguous run. The store is neither sorted nor checked; if a letter
    /// shows up in several runs, the last run wins.
    pub fn build(store: &NameStore) -> Self {
        let mut buckets = BTreeMap::new();
        let mut current: Option<char> = None;
        let mut start = 0usize;
        let mut run = 0usize;

        for (i, name) in store.iter().enumerate() {
            let Some(first) = name.chars().next() else { continue };
            let letter = upper(first);
            if current == Some(letter) {
                run += 1;
                continue;
            }
            if let Some(prev) = current {
                buckets.insert(prev, bucket(prev, run, start, i - 1));
            }
            current = Some(letter);
            start = i;
            run = 1;
        }

        if let Some(last) = current {
            buckets.insert(last, bucket(last, run, start, store.len() - 1));
        }

        Self { buckets }
    }

    pub fn get(&self, letter: char) -> Option<&AlphabetBucket> {
        self.buckets.get(&upper(letter))
    }

    /// Buckets for A..=Z in alphabetical order; letters without names are
    /// omitted.
    pub fn summary(&self) -> Vec<AlphabetBucket> {
        ALPHABET
            .filter_map(|c| self.buckets.get(&c).copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn bucket(letter: char, count: usize, start_index: usize, end_index: usize) -> AlphabetBucket {
    AlphabetBucket {
        letter,
        count,
        start_index,
        end_index,
    }
}

/// Single-scalar uppercase mapping; letters whose uppercase form expands to
/// several scalars keep the first one.
pub(crate) fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

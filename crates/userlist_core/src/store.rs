use crate::errors::{Result, UserListError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A name paired with its zero-based position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub index: usize,
}

/// Ordered, immutable sequence of names loaded once at startup.
///
/// Position `i` refers to the same name for the lifetime of the store; there
/// is no API to mutate it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameStore {
    names: Vec<String>,
}

impl NameStore {
    /// Load a newline-delimited name list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let init_err = |source| UserListError::Initialization {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(init_err)?;
        Self::read_lines(BufReader::new(file)).map_err(init_err)
    }

    /// Build a store from any line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::read_lines(reader)?)
    }

    /// Build a store from in-memory names, applying the same trimming rules as
    /// the file loader.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .filter_map(|n| clean_line(n.as_ref()))
            .collect();
        Self { names }
    }

    fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut names = Vec::new();
        for line in reader.lines() {
            if let Some(name) = clean_line(&line?) {
                names.push(name);
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Record for an absolute position. Callers pass positions already
    /// bounded by `len()`.
    pub(crate) fn record(&self, index: usize) -> NameRecord {
        NameRecord {
            name: self.names[index].clone(),
            index,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

fn clean_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

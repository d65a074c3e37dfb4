use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use super::error::Result;
use super::loader::{self, DataSource};
use super::model::Dataset;

/// Identity of a data source for memoization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKey {
    Upload { name: String, len: usize, digest: u64 },
    Fallback { path: PathBuf, modified: Option<SystemTime> },
}

impl SourceKey {
    pub fn of(source: &DataSource) -> Self {
        match source {
            DataSource::Upload { name, bytes } => {
                let mut hasher = DefaultHasher::new();
                bytes.hash(&mut hasher);
                SourceKey::Upload {
                    name: name.clone(),
                    len: bytes.len(),
                    digest: hasher.finish(),
                }
            }
            DataSource::Fallback(path) => SourceKey::Fallback {
                path: path.clone(),
                modified: std::fs::metadata(path).and_then(|m| m.modified()).ok(),
            },
        }
    }

    /// Same upload name or same fallback path, whatever the content.
    fn same_source(&self, other: &SourceKey) -> bool {
        match (self, other) {
            (SourceKey::Upload { name: a, .. }, SourceKey::Upload { name: b, .. }) => a == b,
            (SourceKey::Fallback { path: a, .. }, SourceKey::Fallback { path: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Number of distinct sources kept loaded at once.
pub const CAPACITY: usize = 4;

/// Memoizes successful loads. Failures are never stored, so a corrected
/// file is picked up on the next attempt.
///
/// Holds one entry per upload name or fallback path (a newer version
/// replaces the older one) and at most [`CAPACITY`] sources, evicting the
/// least recently used.
#[derive(Debug, Default)]
pub struct LoadCache {
    // Least recently used first.
    entries: Vec<(SourceKey, Arc<Dataset>)>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, source: &DataSource) -> Result<Arc<Dataset>> {
        let key = SourceKey::of(source);
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            log::debug!("Cache hit for {}", source.label());
            let entry = self.entries.remove(pos);
            let hit = Arc::clone(&entry.1);
            self.entries.push(entry);
            return Ok(hit);
        }
        let dataset = Arc::new(loader::load(source)?);
        self.entries.retain(|(k, _)| !k.same_source(&key));
        self.entries.push((key, Arc::clone(&dataset)));
        if self.entries.len() > CAPACITY {
            let (evicted, _) = self.entries.remove(0);
            log::debug!("Evicted {evicted:?} from the load cache");
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

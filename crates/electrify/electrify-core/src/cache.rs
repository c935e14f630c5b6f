//! Parsed-upload cache keyed by content hash.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use electrify_spi::{Dataset, Result, Upload};
use sha2::{Digest, Sha256};

use crate::loader::load_csv_bytes;

/// SHA-256 of the upload's bytes, hex encoded.
pub fn upload_key(upload: &Upload) -> String {
    let mut hasher = Sha256::new();
    hasher.update(&upload.bytes);
    format!("{:x}", hasher.finalize())
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, Arc<Dataset>>,
    // insertion order, oldest first
    order: VecDeque<String>,
    stats: CacheStats,
}

/// Memoizes CSV parsing so unrelated control changes reuse the table.
///
/// Entries are evicted oldest-first once `capacity` is exceeded. Failed
/// parses are not cached.
#[derive(Debug)]
pub struct DatasetCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl DatasetCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(CacheState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the parsed dataset for `upload`, parsing it on first sight.
    pub fn get_or_load(&self, upload: &Upload) -> Result<Arc<Dataset>> {
        let key = upload_key(upload);

        let cached = self.lock().entries.get(&key).cloned();
        if let Some(dataset) = cached {
            self.lock().stats.hits += 1;
            tracing::debug!(upload = %upload.name, "dataset cache hit");
            return Ok(dataset);
        }

        let dataset = Arc::new(load_csv_bytes(&upload.bytes)?);
        tracing::info!(upload = %upload.name, rows = dataset.len(), "parsed upload");

        let mut state = self.lock();
        state.stats.misses += 1;
        if state.entries.insert(key.clone(), dataset.clone()).is_none() {
            state.order.push_back(key);
        }
        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
            }
        }
        Ok(dataset)
    }

    pub fn contains(&self, upload: &Upload) -> bool {
        self.lock().entries.contains_key(&upload_key(upload))
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }
}

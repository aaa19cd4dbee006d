//! Persistent lookup cache.
//!
//! A JSON object mapping IP to its last-known `CacheEntry`, loaded at the
//! start of a run and written back in full at the end. Entries are only ever
//! added or overwritten.

mod types;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::{Map, Value};

pub use types::CacheEntry;

/// In-memory view of the cache file, keyed by IP string.
///
/// Values that do not read as a `CacheEntry` are kept verbatim and written
/// back on save; they never count as cache hits, and a new lookup for that
/// IP replaces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReputationCache {
    entries: BTreeMap<String, CacheEntry>,
    unreadable: BTreeMap<String, Value>,
}

impl ReputationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the cache from `path`.
    ///
    /// A missing or unreadable file, or one that is not a JSON object, yields
    /// an empty cache; the problem is logged and never returned to the caller.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No cache file at {}, starting empty", path.display());
            return Self::new();
        }

        match Self::read(path) {
            Ok(cache) => {
                debug!("Loaded {} cached IPs from {}", cache.len(), path.display());
                cache
            }
            Err(e) => {
                warn!("Ignoring cache file {}: {:#}", path.display(), e);
                Self::new()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read cache file")?;
        let object: Map<String, Value> =
            serde_json::from_str(&content).context("Failed to parse cache file")?;
        Ok(Self::from_object(object))
    }

    /// Splits a parsed cache object into usable entries and values kept as-is.
    fn from_object(object: Map<String, Value>) -> Self {
        let mut cache = Self::new();
        for (ip, value) in object {
            match serde_json::from_value::<CacheEntry>(value.clone()) {
                Ok(entry) => {
                    cache.entries.insert(ip, entry);
                }
                Err(e) => {
                    warn!("Cache entry for {} is unreadable and will be re-checked: {}", ip, e);
                    cache.unreadable.insert(ip, value);
                }
            }
        }
        cache
    }

    fn to_object(&self) -> Result<Map<String, Value>> {
        let mut object: Map<String, Value> = self
            .unreadable
            .iter()
            .map(|(ip, value)| (ip.clone(), value.clone()))
            .collect();
        for (ip, entry) in &self.entries {
            let value = serde_json::to_value(entry).context("Failed to serialize cache entry")?;
            object.insert(ip.clone(), value);
        }
        Ok(object)
    }

    /// Writes the whole mapping to `path` as pretty-printed JSON, replacing the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.to_object()?).context("Failed to serialize cache")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write cache file {}", path.display()))?;
        debug!("Saved {} cached IPs to {}", self.len(), path.display());
        Ok(())
    }

    pub fn get(&self, ip: &str) -> Option<&CacheEntry> {
        self.entries.get(ip)
    }

    /// True when `ip` has a usable entry, i.e. `get` would return it.
    pub fn contains(&self, ip: &str) -> bool {
        self.entries.contains_key(ip)
    }

    /// Adds or overwrites the entry for `ip`.
    pub fn insert(&mut self, ip: impl Into<String>, entry: CacheEntry) {
        let ip = ip.into();
        self.unreadable.remove(&ip);
        self.entries.insert(ip, entry);
    }

    /// Number of IPs stored, unreadable values included.
    pub fn len(&self) -> usize {
        self.entries.len() + self.unreadable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The persistent project vault. The browser host backs this with local
/// storage; the command line backs it with a JSON file. Either way the
/// contract is load-everything / save-everything.
pub trait HistoryStore {
    fn load(&self) -> io::Result<Vec<HistoryItem>>;
    fn save(&self, items: &[HistoryItem]) -> io::Result<()>;
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HistoryItem {
    pub id: String,
    pub project_name: String,
    pub version: String,
    /// Seconds since the Unix epoch at the time of the save.
    pub updated_at: u64,
    pub source: String,
}

/// Replaces the entry with the same id, or appends. Ids derive from the
/// document text, so re-saving an unchanged document does not grow the vault.
pub fn upsert(items: &mut Vec<HistoryItem>, item: HistoryItem) {
    match items.iter_mut().find(|existing| existing.id == item.id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> io::Result<Vec<HistoryItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    }

    fn save(&self, items: &[HistoryItem]) -> io::Result<()> {
        let text = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
        fs::write(&self.path, text)
    }
}

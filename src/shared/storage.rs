//! Key/value persistence used by the toolbar
//!
//! The browser build is backed by `localStorage`; everything else (server
//! rendering, tests) uses an in-memory map.

use std::collections::HashMap;

use crate::domain::models::CurrentPage;
use crate::shared::constants::{
    CURRENT_PAGE_KEY, CURRENT_PAGE_PUBLIC_KEY, FULL_WIDTH_KEY, PRESERVED_KEYS,
};
use crate::shared::errors::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// `None` when local storage is disabled or unavailable
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| crate::shared::errors::ToolbarError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| crate::shared::errors::ToolbarError::Storage(format!("{:?}", e)))
    }

    fn keys(&self) -> Vec<String> {
        let len = self.storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| self.storage.key(i).ok().flatten())
            .collect()
    }
}

/// Store for the current platform
#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::new() {
        Some(storage) => Box::new(storage),
        None => {
            tracing::warn!("localStorage unavailable, falling back to memory store");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::new())
}

/// Read the persisted current page, if any
pub fn load_current_page(store: &dyn KeyValueStore) -> Option<CurrentPage> {
    let name = store.get(CURRENT_PAGE_KEY).filter(|name| !name.is_empty())?;
    let public = store.get(CURRENT_PAGE_PUBLIC_KEY).as_deref() == Some("true");
    Some(CurrentPage { name, public })
}

pub fn save_current_page(store: &mut dyn KeyValueStore, page: &CurrentPage) -> Result<()> {
    store.set(CURRENT_PAGE_KEY, &page.name)?;
    store.set(CURRENT_PAGE_PUBLIC_KEY, if page.public { "true" } else { "false" })
}

/// Stored full width flag, `false` when missing or unparsable
pub fn load_full_width(store: &dyn KeyValueStore) -> bool {
    store
        .get(FULL_WIDTH_KEY)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .unwrap_or(false)
}

pub fn save_full_width(store: &mut dyn KeyValueStore, enabled: bool) -> Result<()> {
    store.set(FULL_WIDTH_KEY, &serde_json::to_string(&enabled)?)
}

/// Drop every cached entry except user preferences; returns the number removed
pub fn clear_local_cache(store: &mut dyn KeyValueStore) -> Result<usize> {
    let stale: Vec<String> = store
        .keys()
        .into_iter()
        .filter(|key| !PRESERVED_KEYS.contains(&key.as_str()))
        .collect();

    for key in &stale {
        store.remove(key)?;
    }
    Ok(stale.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_current_page(&store), None);

        save_current_page(&mut store, &CurrentPage::new("Notes", false)).unwrap();
        assert_eq!(store.get(CURRENT_PAGE_PUBLIC_KEY).as_deref(), Some("false"));
        assert_eq!(load_current_page(&store), Some(CurrentPage::new("Notes", false)));
    }

    #[test]
    fn test_missing_public_flag_reads_as_private() {
        let mut store = MemoryStore::new();
        store.set(CURRENT_PAGE_KEY, "Sales").unwrap();
        assert_eq!(load_current_page(&store), Some(CurrentPage::new("Sales", false)));
    }

    #[test]
    fn test_full_width_defaults_to_false() {
        let mut store = MemoryStore::new();
        assert!(!load_full_width(&store));

        store.set(FULL_WIDTH_KEY, "not-json").unwrap();
        assert!(!load_full_width(&store));

        save_full_width(&mut store, true).unwrap();
        assert_eq!(store.get(FULL_WIDTH_KEY).as_deref(), Some("true"));
        assert!(load_full_width(&store));
    }

    #[test]
    fn test_clear_local_cache_keeps_preferences() {
        let mut store = MemoryStore::new();
        save_current_page(&mut store, &CurrentPage::new("Build", true)).unwrap();
        save_full_width(&mut store, true).unwrap();
        store.set("_last_load", "1700000000").unwrap();
        store.set("desk_assets", "{}").unwrap();

        let removed = clear_local_cache(&mut store).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.get("_last_load"), None);
        assert_eq!(load_current_page(&store), Some(CurrentPage::new("Build", true)));
        assert!(load_full_width(&store));
    }
}

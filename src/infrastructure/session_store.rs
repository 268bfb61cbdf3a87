//! Server side session state: response cache and session defaults

use std::collections::HashMap;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::models::{FieldType, SessionDefaultField};

#[derive(Debug, Error, PartialEq)]
pub enum SessionStoreError {
    #[error("Unknown session default field: {0}")]
    UnknownField(String),

    #[error("Invalid value {value:?} for {field}")]
    InvalidOption { field: String, value: String },
}

pub const CACHE_CLEARED_MESSAGE: &str = "Cache Cleared";

pub struct SessionStore {
    cache: DashMap<String, String>,
    defaults: DashMap<String, String>,
    fields: Vec<SessionDefaultField>,
}

/// Global session store (thread-safe)
pub static SESSION: Lazy<SessionStore> = Lazy::new(|| SessionStore::new(default_fields()));

impl SessionStore {
    pub fn new(fields: Vec<SessionDefaultField>) -> Self {
        let defaults = DashMap::new();
        for field in &fields {
            if let Some(value) = &field.default {
                defaults.insert(field.fieldname.clone(), value.clone());
            }
        }
        Self {
            cache: DashMap::new(),
            defaults,
            fields,
        }
    }

    pub fn cached(&self, key: &str) -> Option<String> {
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    pub fn set_cached(&self, key: &str, value: String) {
        self.cache.insert(key.to_string(), value);
    }

    /// Drop every cached response
    pub fn clear_cache(&self) -> String {
        let count = self.cache.len();
        self.cache.clear();
        tracing::info!(entries = count, "Session cache cleared");
        CACHE_CLEARED_MESSAGE.to_string()
    }

    /// Field definitions with the current session values as defaults
    pub fn default_fields(&self) -> Vec<SessionDefaultField> {
        self.fields
            .iter()
            .cloned()
            .map(|mut field| {
                field.default = self.defaults.get(&field.fieldname).map(|v| v.value().clone());
                field
            })
            .collect()
    }

    /// Validate and store new defaults; empty values clear a default
    pub fn set_defaults(&self, values: &HashMap<String, String>) -> Result<(), SessionStoreError> {
        for (name, value) in values {
            let field = self
                .fields
                .iter()
                .find(|f| &f.fieldname == name)
                .ok_or_else(|| SessionStoreError::UnknownField(name.clone()))?;

            if field.fieldtype == FieldType::Select
                && !value.is_empty()
                && !field.select_options().contains(value)
            {
                return Err(SessionStoreError::InvalidOption {
                    field: name.clone(),
                    value: value.clone(),
                });
            }
        }

        for (name, value) in values {
            if value.is_empty() {
                self.defaults.remove(name);
            } else {
                self.defaults.insert(name.clone(), value.clone());
            }
        }
        Ok(())
    }
}

pub fn default_fields() -> Vec<SessionDefaultField> {
    vec![
        SessionDefaultField::new("company", FieldType::Link, "Default Company").with_options("Company"),
        SessionDefaultField::new("currency", FieldType::Select, "Default Currency")
            .with_options("EUR\nUSD\nINR\nGBP"),
        SessionDefaultField::new("fiscal_year", FieldType::Data, "Current Fiscal Year"),
    ]
}

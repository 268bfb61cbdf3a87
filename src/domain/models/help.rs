use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contextual documentation link shown in the help dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpLink {
    pub url: String,
    pub label: String,
    /// In-app help topic; the desk handles these clicks itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
}

impl HelpLink {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            data_path: None,
        }
    }

    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = Some(path.into());
        self
    }
}

/// Help links keyed by route prefix ("Form", "Form/User", ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelpLinkRegistry {
    links: HashMap<String, Vec<HelpLink>>,
}

impl HelpLinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append links under a route prefix, keeping registration order
    pub fn register(&mut self, key: impl Into<String>, links: impl IntoIterator<Item = HelpLink>) {
        self.links.entry(key.into()).or_default().extend(links);
    }

    pub fn get(&self, key: &str) -> &[HelpLink] {
        self.links.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.links.values().all(Vec::is_empty)
    }
}

impl FromIterator<(String, Vec<HelpLink>)> for HelpLinkRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Vec<HelpLink>)>>(iter: I) -> Self {
        let mut registry = HelpLinkRegistry::new();
        for (key, links) in iter {
            registry.register(key, links);
        }
        registry
    }
}

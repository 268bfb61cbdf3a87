use serde::{Deserialize, Serialize};

/// Visibility grouping of workspace pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Public,
    Private,
}

impl Section {
    pub fn from_public(public: bool) -> Self {
        if public { Section::Public } else { Section::Private }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Section::Public)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Public => "public",
            Section::Private => "private",
        }
    }
}

/// A workspace page as returned by the sidebar fetch.
/// `is_editable` and `selected` are local UI state and never sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing)]
    pub is_editable: bool,
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

impl PageDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>, public: bool) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            public,
            is_editable: false,
            selected: false,
        }
    }

    pub fn section(&self) -> Section {
        Section::from_public(self.public)
    }
}

/// Payload of the workspace sidebar remote call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SidebarItems {
    pub pages: Vec<PageDescriptor>,
    #[serde(default)]
    pub has_access: bool,
}

/// Last visited page, persisted across reloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPage {
    pub name: String,
    pub public: bool,
}

impl CurrentPage {
    pub fn new(name: impl Into<String>, public: bool) -> Self {
        Self {
            name: name.into(),
            public,
        }
    }

    pub fn section(&self) -> Section {
        Section::from_public(self.public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_items_deserialize_without_local_flags() {
        let json = r#"{"pages":[{"name":"Build","title":"Build","public":true}],"has_access":true}"#;
        let items: SidebarItems = serde_json::from_str(json).unwrap();
        assert_eq!(items.pages.len(), 1);
        assert!(!items.pages[0].selected);
        assert!(!items.pages[0].is_editable);
        assert!(items.has_access);
    }

    #[test]
    fn test_local_flags_are_not_serialized() {
        let mut page = PageDescriptor::new("Sales", "Sales", true);
        page.selected = true;
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("selected"));
        assert!(!json.contains("is_editable"));
    }

    #[test]
    fn test_section_from_public() {
        assert_eq!(Section::from_public(true), Section::Public);
        assert_eq!(Section::from_public(false).as_str(), "private");
    }
}

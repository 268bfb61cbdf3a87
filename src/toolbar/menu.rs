use std::collections::BTreeMap;

use crate::domain::models::{CurrentPage, PageDescriptor};
use crate::shared::utils::slug;

/// One rendered entry of the page selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub href: String,
    pub active: bool,
}

/// Menu entries for `pages`, in order, with the current page marked active
pub fn build_menu<'a, I>(pages: I, current: &CurrentPage) -> Vec<MenuEntry>
where
    I: IntoIterator<Item = &'a PageDescriptor>,
{
    let current_slug = slug(&current.name);

    pages
        .into_iter()
        .map(|page| MenuEntry {
            title: page.title.clone(),
            href: format!("/app/{}", slug(&page.title)),
            active: slug(&page.name) == current_slug,
        })
        .collect()
}

/// Slug to title lookup for every loaded page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceIndex {
    titles: BTreeMap<String, String>,
}

impl WorkspaceIndex {
    pub fn from_pages(pages: &[PageDescriptor]) -> Self {
        Self {
            titles: pages
                .iter()
                .map(|page| (slug(&page.name), page.title.clone()))
                .collect(),
        }
    }

    pub fn title_for(&self, page_slug: &str) -> Option<&str> {
        self.titles.get(page_slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Link target of a page, private pages under `/app/private`
pub fn page_href(page: &PageDescriptor) -> String {
    if page.public {
        format!("/app/{}", slug(&page.title))
    } else {
        format!("/app/private/{}", slug(&page.title))
    }
}

/// Pages whose title contains `query`, case-insensitive. A blank query matches nothing.
pub fn filter_pages<'a, I>(pages: I, query: &str) -> Vec<&'a PageDescriptor>
where
    I: IntoIterator<Item = &'a PageDescriptor>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    pages
        .into_iter()
        .filter(|page| page.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_marks_current_page() {
        let pages = vec![
            PageDescriptor::new("Build", "Build", true),
            PageDescriptor::new("Stock Ledger", "Stock Ledger", true),
        ];
        let menu = build_menu(&pages, &CurrentPage::new("Stock Ledger", true));

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].href, "/app/build");
        assert!(!menu[0].active);
        assert_eq!(menu[1].href, "/app/stock-ledger");
        assert!(menu[1].active);
    }

    #[test]
    fn test_empty_pages_give_empty_menu() {
        let pages: Vec<PageDescriptor> = Vec::new();
        let menu = build_menu(&pages, &CurrentPage::new("Build", true));
        assert!(menu.is_empty());
    }

    #[test]
    fn test_workspace_index_maps_slug_to_title() {
        let pages = vec![PageDescriptor::new("Stock Ledger", "Stock Ledger", true)];
        let index = WorkspaceIndex::from_pages(&pages);
        assert_eq!(index.title_for("stock-ledger"), Some("Stock Ledger"));
        assert_eq!(index.title_for("missing"), None);
    }

    #[test]
    fn test_filter_pages_matches_title_substring() {
        let pages = vec![
            PageDescriptor::new("Stock", "Stock", true),
            PageDescriptor::new("Stock Ledger", "Stock Ledger", true),
            PageDescriptor::new("Selling", "Selling", true),
        ];
        let found: Vec<&str> = filter_pages(&pages, " ledg ").iter().map(|p| p.title.as_str()).collect();
        assert_eq!(found, vec!["Stock Ledger"]);
        assert!(filter_pages(&pages, "   ").is_empty());
    }

    #[test]
    fn test_page_href_by_section() {
        assert_eq!(page_href(&PageDescriptor::new("My Notes", "My Notes", false)), "/app/private/my-notes");
        assert_eq!(page_href(&PageDescriptor::new("Build", "Build", true)), "/app/build");
    }
}

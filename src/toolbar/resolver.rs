//! Current page resolution
//!
//! Precedence: route, stored preference, first listed page, fixed default.

use crate::domain::models::{CurrentPage, PageDescriptor};
use crate::shared::constants::DEFAULT_PAGE;
use crate::shared::logging::log_stale_preference;
use crate::toolbar::route::DeskRoute;

/// Page to show when the route does not name one.
///
/// The stored preference only has to exist in the fetched list; it is not
/// checked against server side permissions.
pub fn default_page(stored: Option<&CurrentPage>, pages: &[PageDescriptor]) -> CurrentPage {
    if let Some(stored) = stored {
        if pages.iter().any(|page| page.title == stored.name) {
            return stored.clone();
        }
        log_stale_preference(&stored.name);
    }

    match pages.first() {
        Some(first) => CurrentPage::new(first.title.clone(), true),
        None => CurrentPage::new(DEFAULT_PAGE, true),
    }
}

pub fn resolve_page(
    route: &DeskRoute,
    stored: Option<&CurrentPage>,
    pages: &[PageDescriptor],
) -> CurrentPage {
    let fallback = default_page(stored, pages);

    let name = route
        .page_segment()
        .map(str::to_string)
        .unwrap_or(fallback.name);
    let public = route.section_segment().unwrap_or(fallback.public);

    CurrentPage { name, public }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<PageDescriptor> {
        vec![
            PageDescriptor::new("Build", "Build", true),
            PageDescriptor::new("Sales", "Sales", true),
            PageDescriptor::new("Notes", "Notes", false),
        ]
    }

    #[test]
    fn test_route_wins_over_preference() {
        let stored = CurrentPage::new("Sales", true);
        let route = DeskRoute::workspace("Notes", false);
        assert_eq!(
            resolve_page(&route, Some(&stored), &pages()),
            CurrentPage::new("Notes", false)
        );
    }

    #[test]
    fn test_every_listed_page_resolves_from_its_route() {
        for page in pages() {
            let route = DeskRoute::workspace(&page.title, page.public);
            let resolved = resolve_page(&route, None, &pages());
            assert_eq!(resolved, CurrentPage::new(page.title.clone(), page.public));
        }
    }

    #[test]
    fn test_stored_preference_used_without_page_segment() {
        let stored = CurrentPage::new("Notes", false);
        let resolved = resolve_page(&DeskRoute::parse("Workspaces"), Some(&stored), &pages());
        assert_eq!(resolved, stored);
    }

    #[test]
    fn test_stale_preference_falls_back_to_first_page() {
        let stored = CurrentPage::new("Removed", false);
        let resolved = resolve_page(&DeskRoute::default(), Some(&stored), &pages());
        assert_eq!(resolved, CurrentPage::new("Build", true));
    }

    #[test]
    fn test_empty_list_uses_fixed_default() {
        let resolved = resolve_page(&DeskRoute::default(), None, &[]);
        assert_eq!(resolved, CurrentPage::new(DEFAULT_PAGE, true));
    }

    #[test]
    fn test_private_section_without_page_keeps_default_name() {
        let stored = CurrentPage::new("Sales", true);
        let resolved = resolve_page(&DeskRoute::parse("Workspaces/private"), Some(&stored), &pages());
        assert_eq!(resolved, CurrentPage::new("Sales", false));
    }

    #[test]
    fn test_non_workspace_route_uses_default() {
        let resolved = resolve_page(&DeskRoute::parse("Form/User/jane"), None, &pages());
        assert_eq!(resolved, CurrentPage::new("Build", true));
    }
}

//! Help dropdown links for the current route

use crate::domain::models::{HelpLink, HelpLinkRegistry};
use crate::shared::logging::log_help_links;

/// What the help dropdown renders for a route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpLinksView {
    pub links: Vec<HelpLink>,
    pub visible: bool,
}

/// Collect links registered for every prefix of `route`, shortest first.
///
/// `"Form/User/jane"` looks up `"Form"`, `"Form/User"` then `"Form/User/jane"`.
pub fn collect_help_links(route: &str, registry: &HelpLinkRegistry) -> HelpLinksView {
    let segments: Vec<&str> = route.split('/').collect();

    let links: Vec<HelpLink> = (1..=segments.len())
        .flat_map(|depth| registry.get(&segments[..depth].join("/")).iter().cloned())
        .collect();

    log_help_links(route, links.len());

    HelpLinksView {
        visible: !links.is_empty(),
        links,
    }
}

/// How a click inside the help dropdown is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpClick {
    /// Blob documents open in a new tab
    OpenInNewTab(String),
    /// Links carrying a `data-path` are handled in place
    Suppress,
    Follow,
}

pub fn classify_help_click(href: &str, data_path: Option<&str>) -> HelpClick {
    if data_path.is_some_and(|path| !path.is_empty()) {
        HelpClick::Suppress
    } else if href.find("blob").is_some_and(|pos| pos > 0) {
        HelpClick::OpenInNewTab(href.to_string())
    } else {
        HelpClick::Follow
    }
}

/// Click handling for a rendered help link
pub fn classify_link_click(link: &HelpLink) -> HelpClick {
    classify_help_click(&link.url, link.data_path.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> HelpLinkRegistry {
        let mut registry = HelpLinkRegistry::new();
        registry.register("Form", [HelpLink::new("https://docs.example.com/forms", "Forms")]);
        registry.register(
            "Form/User",
            [
                HelpLink::new("https://docs.example.com/users", "Users"),
                HelpLink::new("https://docs.example.com/roles", "Roles"),
            ],
        );
        registry
    }

    #[test]
    fn test_links_accumulate_from_shortest_prefix() {
        let view = collect_help_links("Form/User/jane", &registry());
        let labels: Vec<&str> = view.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Forms", "Users", "Roles"]);
        assert!(view.visible);
    }

    #[test]
    fn test_unregistered_route_is_empty_and_hidden() {
        let view = collect_help_links("Workspaces/Build", &registry());
        assert!(view.links.is_empty());
        assert!(!view.visible);
    }

    #[test]
    fn test_empty_route_is_hidden() {
        let view = collect_help_links("", &registry());
        assert_eq!(view, HelpLinksView::default());
    }

    #[test]
    fn test_prefix_must_match_whole_segments() {
        let view = collect_help_links("Formula/Sheet", &registry());
        assert!(!view.visible);
    }

    #[test]
    fn test_classify_help_click() {
        assert_eq!(
            classify_help_click("https://files.example.com/blob/guide.pdf", None),
            HelpClick::OpenInNewTab("https://files.example.com/blob/guide.pdf".to_string())
        );
        assert_eq!(classify_help_click("https://docs.example.com", Some("/user")), HelpClick::Suppress);
        assert_eq!(classify_help_click("https://docs.example.com", Some("")), HelpClick::Follow);
    }

    #[test]
    fn test_registered_data_path_link_is_not_navigated() {
        let mut registry = registry();
        registry.register(
            "Form/User",
            [HelpLink::new("https://docs.example.com/users", "User Guide").with_data_path("desk/users")],
        );
        let view = collect_help_links("Form/User/jane", &registry);
        let clicks: Vec<HelpClick> = view.links.iter().map(classify_link_click).collect();
        assert_eq!(
            clicks,
            vec![HelpClick::Follow, HelpClick::Follow, HelpClick::Follow, HelpClick::Suppress]
        );
    }
}

//! Desk route as ordered path segments
//!
//! Workspace routes look like `Workspaces/<title>` or
//! `Workspaces/private/<title>`; every other desk route (`Form/User/jane`)
//! only matters for help-link lookup.

use crate::shared::constants::{PRIVATE_SEGMENT, WORKSPACES_ROUTE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeskRoute {
    segments: Vec<String>,
}

impl DeskRoute {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a slash separated route string, decoding percent escapes
    pub fn parse(route: &str) -> Self {
        Self::new(
            route
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(|segment| {
                    urlencoding::decode(segment)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| segment.to_string())
                }),
        )
    }

    pub fn workspace(title: &str, public: bool) -> Self {
        if public {
            Self::new([WORKSPACES_ROUTE, title])
        } else {
            Self::new([WORKSPACES_ROUTE, PRIVATE_SEGMENT, title])
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn is_workspace(&self) -> bool {
        self.segment(0) == Some(WORKSPACES_ROUTE)
    }

    /// Page title named by a workspace route
    pub fn page_segment(&self) -> Option<&str> {
        if !self.is_workspace() {
            return None;
        }
        if self.segment(1) == Some(PRIVATE_SEGMENT) {
            self.segment(2)
        } else {
            self.segment(1)
        }
    }

    /// `Some(public)` when a workspace route carries a section segment
    pub fn section_segment(&self) -> Option<bool> {
        if !self.is_workspace() {
            return None;
        }
        self.segment(1).map(|s| s != PRIVATE_SEGMENT)
    }

    /// Joined form used as help-link key ("Form/User/jane")
    pub fn as_route_str(&self) -> String {
        self.segments.join("/")
    }
}

impl std::fmt::Display for DeskRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_route_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_workspace_route() {
        let route = DeskRoute::parse("Workspaces/Sales");
        assert_eq!(route.page_segment(), Some("Sales"));
        assert_eq!(route.section_segment(), Some(true));
    }

    #[test]
    fn test_private_workspace_route() {
        let route = DeskRoute::workspace("My Notes", false);
        assert_eq!(route.as_route_str(), "Workspaces/private/My Notes");
        assert_eq!(route.page_segment(), Some("My Notes"));
        assert_eq!(route.section_segment(), Some(false));
    }

    #[test]
    fn test_private_route_without_page() {
        let route = DeskRoute::parse("Workspaces/private");
        assert_eq!(route.page_segment(), None);
        assert_eq!(route.section_segment(), Some(false));
    }

    #[test]
    fn test_bare_workspace_route_names_nothing() {
        let route = DeskRoute::parse("Workspaces");
        assert_eq!(route.page_segment(), None);
        assert_eq!(route.section_segment(), None);
    }

    #[test]
    fn test_form_route_is_not_a_workspace() {
        let route = DeskRoute::parse("/Form/User/jane/");
        assert_eq!(route.segments().len(), 3);
        assert_eq!(route.page_segment(), None);
        assert_eq!(route.to_string(), "Form/User/jane");
    }

    #[test]
    fn test_parse_decodes_segments() {
        let route = DeskRoute::parse("Workspaces/Stock%20Ledger");
        assert_eq!(route.page_segment(), Some("Stock Ledger"));
    }
}

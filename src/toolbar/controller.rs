//! Toolbar state: loaded pages, current page and selection
//!
//! Replaces the toolbar's shared mutable namespace with one owned struct. The
//! UI holds it in a signal and calls [`ToolbarController::show`] on every
//! route change.

use crate::domain::models::{CurrentPage, PageDescriptor, Section, SidebarItems};
use crate::shared::errors::{Result, ToolbarError};
use crate::shared::logging::{log_page_resolved, log_pages_loaded, log_show_deferred};
use crate::shared::storage::{self, KeyValueStore};
use crate::shared::utils::slug;
use crate::toolbar::menu::{build_menu, MenuEntry, WorkspaceIndex};
use crate::toolbar::resolver::resolve_page;
use crate::toolbar::route::DeskRoute;

#[derive(Debug, Clone, PartialEq)]
pub enum ShowOutcome {
    /// Pages are still loading; the request runs once they arrive
    Deferred,
    Shown(CurrentPage),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarController {
    pages: Option<Vec<PageDescriptor>>,
    has_access: bool,
    index: WorkspaceIndex,
    current_page: Option<CurrentPage>,
    pending: Option<DeskRoute>,
}

impl ToolbarController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.pages.is_some()
    }

    /// Install the fetched page list. Runs a display request that arrived
    /// before the list and returns the page it resolved to.
    pub fn load(
        &mut self,
        items: SidebarItems,
        store: &mut dyn KeyValueStore,
    ) -> Result<Option<CurrentPage>> {
        let has_access = items.has_access;
        let pages: Vec<PageDescriptor> = items
            .pages
            .into_iter()
            .map(|mut page| {
                page.is_editable = !page.public || has_access;
                page.selected = false;
                page
            })
            .collect();

        log_pages_loaded(
            pages.len(),
            pages.iter().filter(|p| p.public).count(),
            has_access,
        );

        self.index = WorkspaceIndex::from_pages(&pages);
        self.has_access = has_access;
        self.pages = Some(pages);
        // selection flags were reset with the new list
        self.current_page = None;

        match self.pending.take() {
            Some(route) => match self.show(&route, store)? {
                ShowOutcome::Shown(page) => Ok(Some(page)),
                ShowOutcome::Deferred => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Reload the page list and redisplay `route`
    pub fn reload(
        &mut self,
        items: SidebarItems,
        route: &DeskRoute,
        store: &mut dyn KeyValueStore,
    ) -> Result<ShowOutcome> {
        self.pending = None;
        self.load(items, store)?;
        self.show(route, store)
    }

    /// Resolve the page for `route`, move the selection to it and persist it
    pub fn show(&mut self, route: &DeskRoute, store: &mut dyn KeyValueStore) -> Result<ShowOutcome> {
        if !self.is_loaded() {
            log_show_deferred(&route.as_route_str());
            self.pending = Some(route.clone());
            return Ok(ShowOutcome::Deferred);
        }

        let page = self.page_to_show(route, store);

        if let Some(previous) = self.current_page.clone() {
            self.update_selected(&previous, false, store)?;
        }
        self.update_selected(&page, true, store)?;

        log_page_resolved(&route.as_route_str(), &page);
        Ok(ShowOutcome::Shown(page))
    }

    /// Maps the page segment to the listed title with the same slug, so a
    /// route built before the index existed ("Hr") still names "HR"
    fn canonical_route(&self, route: &DeskRoute) -> DeskRoute {
        let (Some(page), Some(public)) = (route.page_segment(), route.section_segment()) else {
            return route.clone();
        };
        match self.index.title_for(&slug(page)) {
            Some(title) if title != page => DeskRoute::workspace(title, public),
            _ => route.clone(),
        }
    }

    pub fn page_to_show(&self, route: &DeskRoute, store: &dyn KeyValueStore) -> CurrentPage {
        let stored = storage::load_current_page(store);
        resolve_page(&self.canonical_route(route), stored.as_ref(), self.all_pages())
    }

    fn update_selected(
        &mut self,
        page: &CurrentPage,
        add: bool,
        store: &mut dyn KeyValueStore,
    ) -> Result<()> {
        let section = page.section();
        let Some(pages) = self.pages.as_mut() else {
            return Ok(());
        };
        if !pages
            .iter()
            .any(|p| p.section() == section && p.title == page.name)
        {
            return Ok(());
        }

        for p in pages.iter_mut().filter(|p| p.section() == section) {
            if p.title == page.name {
                p.selected = add;
            } else if add {
                p.selected = false;
            }
        }

        if add {
            self.current_page = Some(page.clone());
            storage::save_current_page(store, page)?;
        }
        Ok(())
    }

    /// Loaded pages, `Err(PagesNotLoaded)` while the fetch is in flight
    pub fn pages(&self) -> Result<&[PageDescriptor]> {
        self.pages.as_deref().ok_or(ToolbarError::PagesNotLoaded)
    }

    pub fn all_pages(&self) -> &[PageDescriptor] {
        self.pages.as_deref().unwrap_or_default()
    }

    pub fn pages_in(&self, section: Section) -> impl Iterator<Item = &PageDescriptor> {
        self.all_pages().iter().filter(move |p| p.section() == section)
    }

    pub fn public_pages(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages_in(Section::Public)
    }

    pub fn private_pages(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages_in(Section::Private)
    }

    pub fn selected_in(&self, section: Section) -> Vec<&PageDescriptor> {
        self.pages_in(section).filter(|p| p.selected).collect()
    }

    pub fn has_access(&self) -> bool {
        self.has_access
    }

    pub fn current_page(&self) -> Option<&CurrentPage> {
        self.current_page.as_ref()
    }

    pub fn index(&self) -> &WorkspaceIndex {
        &self.index
    }

    /// Page selector entries built from public pages
    pub fn menu(&self, route: &DeskRoute, store: &dyn KeyValueStore) -> Vec<MenuEntry> {
        build_menu(self.public_pages(), &self.page_to_show(route, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{CURRENT_PAGE_KEY, CURRENT_PAGE_PUBLIC_KEY, DEFAULT_PAGE};
    use crate::shared::storage::MemoryStore;

    fn items() -> SidebarItems {
        SidebarItems {
            pages: vec![
                PageDescriptor::new("Build", "Build", true),
                PageDescriptor::new("Sales", "Sales", true),
                PageDescriptor::new("Notes", "Notes", false),
                PageDescriptor::new("Drafts", "Drafts", false),
            ],
            has_access: false,
        }
    }

    fn loaded(store: &mut MemoryStore) -> ToolbarController {
        let mut controller = ToolbarController::new();
        controller.load(items(), store).unwrap();
        controller
    }

    fn selected_titles(controller: &ToolbarController, section: Section) -> Vec<String> {
        controller
            .selected_in(section)
            .into_iter()
            .map(|p| p.title.clone())
            .collect()
    }

    #[test]
    fn test_first_page_selected_without_preference() {
        let mut store = MemoryStore::new();
        let items = SidebarItems {
            pages: vec![
                PageDescriptor::new("Build", "Build", true),
                PageDescriptor::new("Sales", "Sales", true),
            ],
            has_access: true,
        };
        let mut controller = ToolbarController::new();
        controller.load(items, &mut store).unwrap();

        let outcome = controller.show(&DeskRoute::parse("Workspaces"), &mut store).unwrap();

        assert_eq!(outcome, ShowOutcome::Shown(CurrentPage::new("Build", true)));
        assert_eq!(selected_titles(&controller, Section::Public), vec!["Build"]);
        assert_eq!(store.get(CURRENT_PAGE_KEY).as_deref(), Some("Build"));
        assert_eq!(store.get(CURRENT_PAGE_PUBLIC_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_pages_unavailable_until_loaded() {
        let mut store = MemoryStore::new();
        let mut controller = ToolbarController::new();
        assert!(matches!(controller.pages(), Err(ToolbarError::PagesNotLoaded)));

        controller.load(items(), &mut store).unwrap();
        assert_eq!(controller.pages().unwrap().len(), 4);
    }

    #[test]
    fn test_editable_flag_follows_access() {
        let mut store = MemoryStore::new();
        let controller = loaded(&mut store);
        let build = controller.public_pages().next().unwrap();
        let notes = controller.private_pages().next().unwrap();
        assert!(!build.is_editable);
        assert!(notes.is_editable);
        assert!(!controller.has_access());
    }

    #[test]
    fn test_show_before_load_is_deferred_then_fulfilled_once() {
        let mut store = MemoryStore::new();
        let mut controller = ToolbarController::new();

        let outcome = controller
            .show(&DeskRoute::workspace("Sales", true), &mut store)
            .unwrap();
        assert_eq!(outcome, ShowOutcome::Deferred);
        assert_eq!(store.get(CURRENT_PAGE_KEY), None);

        let shown = controller.load(items(), &mut store).unwrap();
        assert_eq!(shown, Some(CurrentPage::new("Sales", true)));
        assert_eq!(selected_titles(&controller, Section::Public), vec!["Sales"]);

        assert_eq!(controller.load(items(), &mut store).unwrap(), None);
    }

    #[test]
    fn test_deferred_route_is_mapped_through_loaded_titles() {
        let mut store = MemoryStore::new();
        let mut controller = ToolbarController::new();

        // built from the slug "hr" while the index was still empty
        let outcome = controller
            .show(&DeskRoute::workspace("Hr", true), &mut store)
            .unwrap();
        assert_eq!(outcome, ShowOutcome::Deferred);

        let items = SidebarItems {
            pages: vec![
                PageDescriptor::new("Build", "Build", true),
                PageDescriptor::new("HR", "HR", true),
            ],
            has_access: true,
        };
        let shown = controller.load(items, &mut store).unwrap();

        assert_eq!(shown, Some(CurrentPage::new("HR", true)));
        assert_eq!(selected_titles(&controller, Section::Public), vec!["HR"]);
        assert_eq!(store.get(CURRENT_PAGE_KEY).as_deref(), Some("HR"));
    }

    #[test]
    fn test_selection_moves_between_pages() {
        let mut store = MemoryStore::new();
        let mut controller = loaded(&mut store);

        controller.show(&DeskRoute::workspace("Sales", true), &mut store).unwrap();
        controller.show(&DeskRoute::workspace("Build", true), &mut store).unwrap();
        assert_eq!(selected_titles(&controller, Section::Public), vec!["Build"]);

        controller.show(&DeskRoute::workspace("Notes", false), &mut store).unwrap();
        assert!(selected_titles(&controller, Section::Public).is_empty());
        assert_eq!(selected_titles(&controller, Section::Private), vec!["Notes"]);
        assert_eq!(controller.current_page(), Some(&CurrentPage::new("Notes", false)));
    }

    #[test]
    fn test_at_most_one_selected_per_section_after_any_resolution() {
        let mut store = MemoryStore::new();
        let mut controller = loaded(&mut store);
        let routes = [
            DeskRoute::workspace("Drafts", false),
            DeskRoute::workspace("Sales", true),
            DeskRoute::parse("Workspaces"),
            DeskRoute::workspace("Missing", true),
            DeskRoute::workspace("Notes", false),
            DeskRoute::parse("Form/User/jane"),
        ];

        for route in &routes {
            controller.show(route, &mut store).unwrap();
            assert!(controller.selected_in(Section::Public).len() <= 1);
            assert!(controller.selected_in(Section::Private).len() <= 1);
        }
    }

    #[test]
    fn test_stored_preference_restored_on_bare_route() {
        let mut store = MemoryStore::new();
        storage::save_current_page(&mut store, &CurrentPage::new("Drafts", false)).unwrap();
        let mut controller = loaded(&mut store);

        let outcome = controller.show(&DeskRoute::parse("Workspaces"), &mut store).unwrap();
        assert_eq!(outcome, ShowOutcome::Shown(CurrentPage::new("Drafts", false)));
    }

    #[test]
    fn test_unknown_page_is_shown_but_not_persisted() {
        let mut store = MemoryStore::new();
        let mut controller = loaded(&mut store);

        let outcome = controller
            .show(&DeskRoute::workspace("Missing", true), &mut store)
            .unwrap();
        assert_eq!(outcome, ShowOutcome::Shown(CurrentPage::new("Missing", true)));
        assert_eq!(store.get(CURRENT_PAGE_KEY), None);
        assert_eq!(controller.current_page(), None);
    }

    #[test]
    fn test_empty_list_shows_fixed_default() {
        let mut store = MemoryStore::new();
        let mut controller = ToolbarController::new();
        controller.load(SidebarItems::default(), &mut store).unwrap();

        let outcome = controller.show(&DeskRoute::default(), &mut store).unwrap();
        assert_eq!(outcome, ShowOutcome::Shown(CurrentPage::new(DEFAULT_PAGE, true)));
        assert!(controller.menu(&DeskRoute::default(), &store).is_empty());
    }

    #[test]
    fn test_menu_contains_only_public_pages() {
        let mut store = MemoryStore::new();
        let mut controller = loaded(&mut store);
        let route = DeskRoute::workspace("Sales", true);
        controller.show(&route, &mut store).unwrap();

        let menu = controller.menu(&route, &store);
        let titles: Vec<&str> = menu.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Build", "Sales"]);
        assert!(menu[1].active);
        assert!(!menu[0].active);
    }

    #[test]
    fn test_reload_keeps_showing_route() {
        let mut store = MemoryStore::new();
        let mut controller = loaded(&mut store);
        let route = DeskRoute::workspace("Notes", false);
        controller.show(&route, &mut store).unwrap();

        let outcome = controller.reload(items(), &route, &mut store).unwrap();
        assert_eq!(outcome, ShowOutcome::Shown(CurrentPage::new("Notes", false)));
        assert_eq!(selected_titles(&controller, Section::Private), vec!["Notes"]);
        assert_eq!(controller.index().title_for("notes"), Some("Notes"));
    }
}

//! Dropdown menus of the navbar and the custom entries other pages add to them

use std::collections::BTreeMap;

use crate::shared::utils::to_title_case;

/// Everything a toolbar entry can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    ClearCache,
    ToggleFullWidth,
    ShowAbout,
    ShowShortcuts,
    RouteToUser,
    ViewWebsite,
    SessionDefaults,
    Navigate(String),
}

impl ToolbarAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolbarAction::ClearCache => "clear_cache",
            ToolbarAction::ToggleFullWidth => "toggle_full_width",
            ToolbarAction::ShowAbout => "show_about",
            ToolbarAction::ShowShortcuts => "show_shortcuts",
            ToolbarAction::RouteToUser => "route_to_user",
            ToolbarAction::ViewWebsite => "view_website",
            ToolbarAction::SessionDefaults => "session_defaults",
            ToolbarAction::Navigate(_) => "navigate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub icon: Option<String>,
    pub action: ToolbarAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: ToolbarAction) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Render order of a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSlot<'a> {
    Custom(&'a MenuItem),
    Divider,
    Standard(&'a MenuItem),
}

/// A dropdown: custom items sit above a divider, standard items below it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownMenu {
    standard: Vec<MenuItem>,
    custom: Vec<MenuItem>,
    has_divider: bool,
}

impl DropdownMenu {
    pub fn new(standard: Vec<MenuItem>) -> Self {
        Self {
            standard,
            ..Default::default()
        }
    }

    pub fn add_button(&mut self, item: MenuItem) {
        if !self.standard.is_empty() && !self.has_divider {
            self.add_divider();
        }
        self.custom.push(item);
    }

    pub fn add_divider(&mut self) {
        self.has_divider = true;
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
        self.has_divider = false;
    }

    pub fn custom_items(&self) -> &[MenuItem] {
        &self.custom
    }

    pub fn slots(&self) -> Vec<MenuSlot<'_>> {
        let mut slots: Vec<MenuSlot<'_>> = self.custom.iter().map(MenuSlot::Custom).collect();
        if self.has_divider {
            slots.push(MenuSlot::Divider);
        }
        slots.extend(self.standard.iter().map(MenuSlot::Standard));
        slots
    }
}

/// Icon link on the right side of the navbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub route: String,
    pub icon: String,
    pub class_name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarMenus {
    menus: BTreeMap<String, DropdownMenu>,
    icon_links: Vec<IconLink>,
}

impl ToolbarMenus {
    /// Standard "user" and "help" dropdowns
    pub fn with_defaults() -> Self {
        let mut menus = BTreeMap::new();
        menus.insert(
            "user".to_string(),
            DropdownMenu::new(vec![
                MenuItem::new("My Settings", ToolbarAction::RouteToUser),
                MenuItem::new("Session Defaults", ToolbarAction::SessionDefaults),
                MenuItem::new("Reload", ToolbarAction::ClearCache),
                MenuItem::new("View Website", ToolbarAction::ViewWebsite),
                MenuItem::new("Toggle Full Width", ToolbarAction::ToggleFullWidth),
            ]),
        );
        menus.insert(
            "help".to_string(),
            DropdownMenu::new(vec![
                MenuItem::new("Keyboard Shortcuts", ToolbarAction::ShowShortcuts),
                MenuItem::new("About", ToolbarAction::ShowAbout),
            ]),
        );
        Self {
            menus,
            icon_links: Vec::new(),
        }
    }

    /// Menus are addressed case-insensitively ("Help" and "help" are one menu)
    pub fn get_menu(&self, label: &str) -> Option<&DropdownMenu> {
        self.menus.get(&label.to_lowercase())
    }

    pub fn add_dropdown_button(&mut self, parent: &str, item: MenuItem) {
        self.menus
            .entry(parent.to_lowercase())
            .or_default()
            .add_button(item);
    }

    pub fn add_menu_divider(&mut self, parent: &str) {
        self.menus
            .entry(parent.to_lowercase())
            .or_default()
            .add_divider();
    }

    /// Insert an icon link at `index`, appended when out of range
    pub fn add_icon_link(&mut self, route: &str, icon: &str, index: usize, class_name: &str) {
        let link = IconLink {
            route: route.to_string(),
            icon: icon.to_string(),
            class_name: class_name.to_string(),
            title: to_title_case(class_name),
        };
        let index = index.min(self.icon_links.len());
        self.icon_links.insert(index, link);
    }

    pub fn icon_links(&self) -> &[IconLink] {
        &self.icon_links
    }

    /// Page change: drop every custom entry
    pub fn clear_custom(&mut self) {
        for menu in self.menus.values_mut() {
            menu.clear_custom();
        }
    }
}

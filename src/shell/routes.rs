/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
    },
    NavItem {
        path: "/users",
        label: "Users",
    },
    NavItem {
        path: "/settings",
        label: "Settings",
    },
];

/// Header title for a route. Unknown paths fall back to the dashboard title.
pub fn page_title(path: &str) -> &'static str {
    match path {
        "/users" => "Users Management",
        "/settings" => "Settings",
        _ => "Dashboard",
    }
}

/// Collapsible sidebar state.
#[derive(Debug, Default)]
pub struct Sidebar {
    collapsed: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_for_known_routes() {
        assert_eq!(page_title("/dashboard"), "Dashboard");
        assert_eq!(page_title("/users"), "Users Management");
        assert_eq!(page_title("/settings"), "Settings");
    }

    #[test]
    fn unknown_route_falls_back_to_dashboard() {
        assert_eq!(page_title("/nope"), "Dashboard");
        assert_eq!(page_title(""), "Dashboard");
    }

    #[test]
    fn sidebar_toggles() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.is_collapsed());
        sidebar.toggle();
        assert!(sidebar.is_collapsed());
        sidebar.toggle();
        assert!(!sidebar.is_collapsed());
    }
}

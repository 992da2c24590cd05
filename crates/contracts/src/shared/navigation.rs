use serde::{Deserialize, Serialize};

/// Экран приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewType {
    #[default]
    Dashboard,
    Jobs,
    Materials,
    VisionLink,
    FutureTech,
    AiAssistant,
    Settings,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Dashboard => "dashboard",
            ViewType::Jobs => "jobs",
            ViewType::Materials => "materials",
            ViewType::VisionLink => "vision-link",
            ViewType::FutureTech => "future-tech",
            ViewType::AiAssistant => "ai-assistant",
            ViewType::Settings => "settings",
        }
    }
}

/// Пункт навигации (sidebar и нижняя панель на мобильных)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewType,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { view: ViewType::Dashboard, label: "DASHBOARD", icon: "layout-dashboard" },
    NavItem { view: ViewType::Jobs, label: "JOBS", icon: "briefcase" },
    NavItem { view: ViewType::Materials, label: "MATERIALS", icon: "box" },
    NavItem { view: ViewType::VisionLink, label: "VISION LINK", icon: "eye" },
    NavItem { view: ViewType::FutureTech, label: "FUTURE TECH", icon: "rocket" },
    NavItem { view: ViewType::AiAssistant, label: "AI HELP", icon: "bot" },
    NavItem { view: ViewType::Settings, label: "SETTINGS", icon: "settings" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_cover_every_view_once() {
        for item in NAV_ITEMS {
            let count = NAV_ITEMS.iter().filter(|i| i.view == item.view).count();
            assert_eq!(count, 1, "{} listed twice", item.view.as_str());
        }
        assert_eq!(NAV_ITEMS.len(), 7);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        let json = serde_json::to_string(&ViewType::AiAssistant).unwrap();
        assert_eq!(json, "\"ai-assistant\"");
    }
}

//! UI configuration
//!
//! Host-tunable defaults for the component library. Every field has a
//! default so partial JSON documents deserialize cleanly.

use crate::components::{SearchBar, DEFAULT_SEARCH_PLACEHOLDER};
use crate::pagination::{Pagination, DEFAULT_VISIBLE_PAGES};
use crate::theme::{get_theme, Theme, ThemeMode};
use crate::typography::{device_type_with_breakpoint, DeviceType, MOBILE_BREAKPOINT};
use serde::{Deserialize, Serialize};

fn default_breakpoint() -> u32 {
    MOBILE_BREAKPOINT
}

fn default_visible_pages() -> u32 {
    DEFAULT_VISIBLE_PAGES
}

fn default_search_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

/// UI defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Initial theme mode
    #[serde(default)]
    pub theme: ThemeMode,

    /// Viewport width (px) below which the mobile layout applies
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Page numbers shown by pagination
    #[serde(default = "default_visible_pages")]
    pub visible_pages: u32,

    /// Search bar placeholder
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            visible_pages: DEFAULT_VISIBLE_PAGES,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl UiConfig {
    /// Replace unusable values with their defaults
    pub fn normalized(mut self) -> Self {
        if self.mobile_breakpoint == 0 {
            tracing::warn!("mobileBreakpoint must be positive, using {}", MOBILE_BREAKPOINT);
            self.mobile_breakpoint = MOBILE_BREAKPOINT;
        }
        if self.visible_pages == 0 {
            tracing::warn!("visiblePages must be positive, using {}", DEFAULT_VISIBLE_PAGES);
            self.visible_pages = DEFAULT_VISIBLE_PAGES;
        }
        if self.search_placeholder.trim().is_empty() {
            tracing::warn!("empty searchPlaceholder, using default");
            self.search_placeholder = DEFAULT_SEARCH_PLACEHOLDER.to_string();
        }
        self
    }

    /// Theme for the configured mode
    pub fn theme(&self) -> Theme {
        get_theme(self.theme)
    }

    /// Device class for a viewport width
    pub fn device_type(&self, viewport_width: Option<u32>) -> DeviceType {
        device_type_with_breakpoint(viewport_width, self.mobile_breakpoint)
    }

    /// Pagination preconfigured with these defaults
    pub fn pagination(&self, current_page: u32, total_pages: u32) -> Pagination {
        Pagination::new(current_page, total_pages)
            .with_theme(self.theme)
            .with_visible_pages(self.visible_pages)
    }

    /// Search bar preconfigured with these defaults
    pub fn search_bar(&self) -> SearchBar {
        SearchBar::new()
            .with_theme(self.theme)
            .with_placeholder(self.search_placeholder.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.mobile_breakpoint, 768);
        assert_eq!(config.visible_pages, 5);
        assert_eq!(config.search_placeholder, "검색어를 입력해 주세요.");
    }

    #[test]
    fn test_partial_json() {
        let config: UiConfig =
            serde_json::from_str(r#"{"theme": "dark", "visiblePages": 7}"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.visible_pages, 7);
        assert_eq!(config.mobile_breakpoint, 768);
        assert!(config.theme().is_dark());
    }

    #[test]
    fn test_normalized() {
        let config = UiConfig {
            mobile_breakpoint: 0,
            visible_pages: 0,
            search_placeholder: "  ".to_string(),
            ..UiConfig::default()
        }
        .normalized();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_device_type() {
        let config = UiConfig {
            mobile_breakpoint: 1024,
            ..UiConfig::default()
        };
        assert_eq!(config.device_type(Some(900)), DeviceType::Mobile);
        assert_eq!(config.device_type(Some(1024)), DeviceType::Desktop);
        assert_eq!(config.device_type(None), DeviceType::Desktop);
    }

    #[test]
    fn test_component_factories() {
        let config = UiConfig {
            theme: ThemeMode::Dark,
            visible_pages: 3,
            search_placeholder: "일기 검색".to_string(),
            ..UiConfig::default()
        };

        let pagination = config.pagination(1, 10);
        assert_eq!(pagination.visible_pages, 3);
        assert_eq!(pagination.theme, ThemeMode::Dark);

        let bar = config.search_bar();
        assert_eq!(bar.placeholder, "일기 검색");
        assert_eq!(bar.theme, ThemeMode::Dark);
    }
}

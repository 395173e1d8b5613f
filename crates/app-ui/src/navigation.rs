//! URL constants and routing metadata for Diary Commons
//!
//! This module provides:
//! - The application's URL paths, including dynamic `[param]` segments
//! - Per-path access rules (public vs. member only)
//! - Per-path layout visibility (header, banner, navigation, footer)
//! - Dynamic URL generation and matching of concrete paths to patterns

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters extracted from a dynamic path
pub type RouteParams = HashMap<String, String>;

/// Result of matching a concrete path against a dynamic pattern
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched pattern (e.g. `/diaries/[id]`)
    pub pattern: UrlPath,
    /// The matched parameters
    pub params: RouteParams,
}

// =============================================================================
// Paths
// =============================================================================

/// All URL paths in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrlPath {
    /// Login screen
    Login,
    /// Sign up screen
    Signup,
    /// Diary list
    Diaries,
    /// Diary detail (dynamic)
    DiaryDetail,
    /// Picture list
    Pictures,
}

impl UrlPath {
    /// Every path in declaration order
    pub const ALL: [UrlPath; 5] = [
        UrlPath::Login,
        UrlPath::Signup,
        UrlPath::Diaries,
        UrlPath::DiaryDetail,
        UrlPath::Pictures,
    ];

    /// Path pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlPath::Login => "/auth/login",
            UrlPath::Signup => "/auth/signup",
            UrlPath::Diaries => "/diaries",
            UrlPath::DiaryDetail => "/diaries/[id]",
            UrlPath::Pictures => "/pictures",
        }
    }

    /// Find the path whose pattern equals `path` exactly
    pub fn from_pattern(path: &str) -> Option<UrlPath> {
        Self::ALL.into_iter().find(|p| p.as_str() == path)
    }

    /// Routing metadata for this path
    pub fn properties(&self) -> UrlProperties {
        let (access_state, ui_visibility, is_dynamic) = match self {
            UrlPath::Login | UrlPath::Signup => {
                (AccessState::Public, UiVisibility::hidden(), false)
            }
            UrlPath::Diaries | UrlPath::Pictures => {
                (AccessState::Public, UiVisibility::default(), false)
            }
            UrlPath::DiaryDetail => (
                AccessState::MemberOnly,
                UiVisibility {
                    header: true,
                    header_logo: true,
                    header_dark_mode_toggle: false,
                    banner: false,
                    navigation: false,
                    footer: true,
                },
                true,
            ),
        };

        UrlProperties {
            path: *self,
            access_state,
            ui_visibility,
            is_dynamic,
        }
    }
}

impl Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may visit a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessState {
    /// Anyone
    #[default]
    Public,
    /// Signed-in members only
    MemberOnly,
}

/// Layout pieces a path may show or hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiComponent {
    /// Page header
    Header,
    /// Logo in the header
    HeaderLogo,
    /// Dark mode toggle in the header
    HeaderDarkModeToggle,
    /// Banner carousel
    Banner,
    /// Tab navigation
    Navigation,
    /// Page footer
    Footer,
}

/// Layout visibility flags for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiVisibility {
    /// Page header
    pub header: bool,
    /// Logo in the header
    pub header_logo: bool,
    /// Dark mode toggle in the header
    pub header_dark_mode_toggle: bool,
    /// Banner carousel
    pub banner: bool,
    /// Tab navigation
    pub navigation: bool,
    /// Page footer
    pub footer: bool,
}

impl Default for UiVisibility {
    /// Full layout without the dark mode toggle; used for unknown paths
    fn default() -> Self {
        Self {
            header: true,
            header_logo: true,
            header_dark_mode_toggle: false,
            banner: true,
            navigation: true,
            footer: true,
        }
    }
}

impl UiVisibility {
    /// Bare layout with every piece hidden
    pub fn hidden() -> Self {
        Self {
            header: false,
            header_logo: false,
            header_dark_mode_toggle: false,
            banner: false,
            navigation: false,
            footer: false,
        }
    }

    /// Whether a layout piece is visible
    pub fn shows(&self, component: UiComponent) -> bool {
        match component {
            UiComponent::Header => self.header,
            UiComponent::HeaderLogo => self.header_logo,
            UiComponent::HeaderDarkModeToggle => self.header_dark_mode_toggle,
            UiComponent::Banner => self.banner,
            UiComponent::Navigation => self.navigation,
            UiComponent::Footer => self.footer,
        }
    }
}

/// Routing metadata for one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlProperties {
    /// The path
    pub path: UrlPath,
    /// Access rule
    pub access_state: AccessState,
    /// Layout visibility
    pub ui_visibility: UiVisibility,
    /// Whether the path contains `[param]` segments
    pub is_dynamic: bool,
}

// =============================================================================
// Lookups
// =============================================================================

/// Metadata for a path pattern, if it is known
pub fn url_properties(path: &str) -> Option<UrlProperties> {
    UrlPath::from_pattern(path).map(|p| p.properties())
}

/// Access rule for a path; unknown paths are public
pub fn access_state(path: &str) -> AccessState {
    url_properties(path)
        .map(|props| props.access_state)
        .unwrap_or_default()
}

/// Layout visibility for a path; unknown paths get the full layout
pub fn ui_visibility(path: &str) -> UiVisibility {
    url_properties(path)
        .map(|props| props.ui_visibility)
        .unwrap_or_default()
}

/// Whether a path pattern is dynamic
pub fn is_dynamic_route(path: &str) -> bool {
    url_properties(path).is_some_and(|props| props.is_dynamic)
}

/// Whether a path is restricted to members
pub fn is_member_only_path(path: &str) -> bool {
    access_state(path) == AccessState::MemberOnly
}

/// Whether a path is public
pub fn is_public_path(path: &str) -> bool {
    access_state(path) == AccessState::Public
}

/// Whether a layout piece should be shown on a path
pub fn should_show_component(path: &str, component: UiComponent) -> bool {
    ui_visibility(path).shows(component)
}

/// Whether `path` shows the header
pub fn should_show_header(path: &str) -> bool {
    should_show_component(path, UiComponent::Header)
}

/// Whether `path` shows the header logo
pub fn should_show_header_logo(path: &str) -> bool {
    should_show_component(path, UiComponent::HeaderLogo)
}

/// Whether `path` shows the dark mode toggle
pub fn should_show_header_dark_mode_toggle(path: &str) -> bool {
    should_show_component(path, UiComponent::HeaderDarkModeToggle)
}

/// Whether `path` shows the banner
pub fn should_show_banner(path: &str) -> bool {
    should_show_component(path, UiComponent::Banner)
}

/// Whether `path` shows the tab navigation
pub fn should_show_navigation(path: &str) -> bool {
    should_show_component(path, UiComponent::Navigation)
}

/// Whether `path` shows the footer
pub fn should_show_footer(path: &str) -> bool {
    should_show_component(path, UiComponent::Footer)
}

/// All path patterns
pub fn all_url_paths() -> Vec<&'static str> {
    UrlPath::ALL.iter().map(|p| p.as_str()).collect()
}

/// Path patterns open to everyone
pub fn public_paths() -> Vec<&'static str> {
    paths_with_access(AccessState::Public)
}

/// Path patterns restricted to members
pub fn member_only_paths() -> Vec<&'static str> {
    paths_with_access(AccessState::MemberOnly)
}

fn paths_with_access(state: AccessState) -> Vec<&'static str> {
    UrlPath::ALL
        .iter()
        .filter(|p| p.properties().access_state == state)
        .map(|p| p.as_str())
        .collect()
}

// =============================================================================
// Dynamic Routing
// =============================================================================

/// Substitute `[key]` placeholders in `base_path`.
///
/// Only the first occurrence of each placeholder is replaced; placeholders
/// without a matching parameter are left as they are.
pub fn generate_dynamic_url<K, V>(base_path: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: Display,
{
    let mut url = base_path.to_string();
    for (key, value) in params {
        let placeholder = format!("[{}]", key.as_ref());
        url = url.replacen(&placeholder, &value.to_string(), 1);
    }
    url
}

/// URL of a diary detail page
pub fn diary_detail_url(id: impl Display) -> String {
    generate_dynamic_url(UrlPath::DiaryDetail.as_str(), [("id", id)])
}

struct CompiledRoute {
    path: UrlPath,
    regex: Regex,
    param_names: Vec<String>,
}

fn param_regex() -> &'static Regex {
    static PARAM_REGEX: OnceLock<Regex> = OnceLock::new();
    PARAM_REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]").unwrap())
}

/// Translate a `[param]` pattern into an anchored regex where each
/// placeholder matches one non-empty path segment
fn compile_pattern(pattern: &str) -> Result<(Regex, Vec<String>), regex::Error> {
    let mut source = String::from("^");
    let mut names = Vec::new();
    let mut last = 0;

    for cap in param_regex().captures_iter(pattern) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        source.push_str(&regex::escape(&pattern[last..whole.start()]));
        source.push_str("([^/]+)");
        names.push(name.as_str().to_string());
        last = whole.end();
    }
    source.push_str(&regex::escape(&pattern[last..]));
    source.push('$');

    Ok((Regex::new(&source)?, names))
}

fn dynamic_routes() -> &'static [CompiledRoute] {
    static ROUTES: OnceLock<Vec<CompiledRoute>> = OnceLock::new();
    ROUTES.get_or_init(|| {
        UrlPath::ALL
            .iter()
            .filter(|p| p.properties().is_dynamic)
            .filter_map(|p| match compile_pattern(p.as_str()) {
                Ok((regex, param_names)) => Some(CompiledRoute {
                    path: *p,
                    regex,
                    param_names,
                }),
                Err(e) => {
                    tracing::warn!("Skipping route {}: {}", p, e);
                    None
                }
            })
            .collect()
    })
}

/// Match a concrete path (e.g. `/diaries/123`) against the dynamic patterns
pub fn match_dynamic_route(current_path: &str) -> Option<MatchResult> {
    dynamic_routes().iter().find_map(|route| {
        let caps = route.regex.captures(current_path)?;
        let params = route
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(MatchResult {
            pattern: route.path,
            params,
        })
    })
}

/// Dynamic pattern matching a concrete path, e.g. `/diaries/123` -> `/diaries/[id]`
pub fn matching_dynamic_pattern(current_path: &str) -> Option<&'static str> {
    match_dynamic_route(current_path).map(|m| m.pattern.as_str())
}

// =============================================================================
// Navigation Menu
// =============================================================================

/// Entry in the main navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Target path
    pub path: &'static str,
    /// Menu label
    pub label: &'static str,
}

/// Main navigation menu entries
pub fn navigation_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem {
            path: UrlPath::Diaries.as_str(),
            label: "일기목록",
        },
        NavigationItem {
            path: UrlPath::Pictures.as_str(),
            label: "사진목록",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_state() {
        assert_eq!(access_state("/auth/login"), AccessState::Public);
        assert_eq!(access_state("/diaries/[id]"), AccessState::MemberOnly);
        assert_eq!(access_state("/unknown"), AccessState::Public);
        assert!(is_member_only_path("/diaries/[id]"));
        assert!(is_public_path("/pictures"));
    }

    #[test]
    fn test_ui_visibility() {
        assert_eq!(ui_visibility("/auth/signup"), UiVisibility::hidden());
        assert!(should_show_banner("/diaries"));
        assert!(!should_show_banner("/diaries/[id]"));
        assert!(should_show_footer("/diaries/[id]"));
        assert!(!should_show_navigation("/diaries/[id]"));
        assert!(!should_show_header_dark_mode_toggle("/diaries"));

        // Unknown paths fall back to the full layout
        assert!(should_show_header("/somewhere"));
        assert!(should_show_header_logo("/somewhere"));
    }

    #[test]
    fn test_is_dynamic_route() {
        assert!(is_dynamic_route("/diaries/[id]"));
        assert!(!is_dynamic_route("/diaries"));
        assert!(!is_dynamic_route("/diaries/123"));
    }

    #[test]
    fn test_generate_dynamic_url() {
        assert_eq!(diary_detail_url(123), "/diaries/123");
        assert_eq!(diary_detail_url("abc"), "/diaries/abc");
        assert_eq!(
            generate_dynamic_url("/a/[x]/b/[y]", [("y", "2"), ("x", "1")]),
            "/a/1/b/2"
        );
        assert_eq!(generate_dynamic_url("/a/[x]", [("z", 9)]), "/a/[x]");
    }

    #[test]
    fn test_generate_replaces_first_occurrence_only() {
        assert_eq!(generate_dynamic_url("/[id]/[id]", [("id", 7)]), "/7/[id]");
    }

    #[test]
    fn test_matching_dynamic_pattern() {
        assert_eq!(matching_dynamic_pattern("/diaries/123"), Some("/diaries/[id]"));
        assert_eq!(matching_dynamic_pattern("/diaries"), None);
        assert_eq!(matching_dynamic_pattern("/diaries/"), None);
        assert_eq!(matching_dynamic_pattern("/diaries/1/edit"), None);
    }

    #[test]
    fn test_match_dynamic_route_params() {
        let m = match_dynamic_route("/diaries/42").unwrap();
        assert_eq!(m.pattern, UrlPath::DiaryDetail);
        assert_eq!(m.params.get("id"), Some(&"42".to_string()));
    }

    #[test]
    fn test_compile_pattern_escapes_literals() {
        let (regex, names) = compile_pattern("/v1.0/[slug]").unwrap();
        assert_eq!(names, vec!["slug".to_string()]);
        assert!(regex.is_match("/v1.0/post"));
        assert!(!regex.is_match("/v1x0/post"));
    }

    #[test]
    fn test_path_lists() {
        assert_eq!(all_url_paths().len(), 5);
        assert_eq!(member_only_paths(), vec!["/diaries/[id]"]);
        assert_eq!(
            public_paths(),
            vec!["/auth/login", "/auth/signup", "/diaries", "/pictures"]
        );
    }

    #[test]
    fn test_navigation_items() {
        let items = navigation_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, "/diaries");
        assert_eq!(items[1].label, "사진목록");
    }
}

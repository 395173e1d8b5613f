//! Pagination control
//!
//! [`compute_window`] decides which page numbers are shown for a given
//! current page, collapsing the gaps to the first and last page into
//! ellipses. [`Pagination`] wraps it with the click guards and the render
//! model of the navigation bar.

use crate::components::{icons, ClassList, IconAsset, Size, StyleSheet, Variant};
use crate::events::Callback;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of page buttons shown when not configured
pub const DEFAULT_VISIBLE_PAGES: u32 = 5;

// =============================================================================
// Page Window
// =============================================================================

/// One entry of a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A 1-based page number
    Page(u32),
    /// Placeholder for a run of hidden pages
    Ellipsis,
}

impl PageItem {
    /// The page number, if this is not an ellipsis
    pub fn page(&self) -> Option<u32> {
        match self {
            PageItem::Page(page) => Some(*page),
            PageItem::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(page) => write!(f, "{}", page),
            PageItem::Ellipsis => f.write_str("..."),
        }
    }
}

/// Pages serialize as numbers and ellipses as `"..."`
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(page) => serializer.serialize_u32(*page),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Compute the page window for `current` out of `total` pages, showing
/// `visible` consecutive pages.
///
/// When everything fits, all pages are returned. Otherwise a window of
/// `visible` pages is centered on `current` (offset `floor(visible / 2)`),
/// slid back inside `[1, total]` when it runs off the end, and framed by the
/// first and last page with an ellipsis wherever more than one page is
/// skipped. A `visible` of zero is treated as one.
pub fn compute_window(current: u32, total: u32, visible: u32) -> Vec<PageItem> {
    let current = i64::from(current);
    let total_pages = i64::from(total);
    let visible = i64::from(visible.max(1));

    if total_pages <= visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let half = visible / 2;
    let mut start = (current - half).max(1);
    let end = (start + visible - 1).min(total_pages);

    if end - start + 1 < visible {
        start = (end - visible + 1).max(1);
    }

    let mut pages = Vec::with_capacity(visible as usize + 4);

    if start > 1 {
        pages.push(PageItem::Page(1));
        if start > 2 {
            pages.push(PageItem::Ellipsis);
        }
    }

    // start and end are both within [1, total] here
    pages.extend((start as u32..=end as u32).map(PageItem::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(PageItem::Ellipsis);
        }
        pages.push(PageItem::Page(total));
    }

    pages
}

// =============================================================================
// Pagination Component
// =============================================================================

/// Pagination component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Visual variant
    #[serde(default)]
    pub variant: Variant,
    /// Size
    #[serde(default)]
    pub size: Size,
    /// Theme mode
    #[serde(default)]
    pub theme: ThemeMode,
    /// Current page (1-based)
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Number of consecutive page buttons
    #[serde(default = "default_visible_pages")]
    pub visible_pages: u32,
    /// Show previous/next buttons
    #[serde(default = "default_true")]
    pub show_navigation_buttons: bool,
    /// Show first/last buttons
    #[serde(default)]
    pub show_boundary_buttons: bool,
    /// Disable every button
    #[serde(default)]
    pub disabled: bool,
    /// Extra class name for the `<nav>`
    #[serde(default)]
    pub class_name: String,
    /// Custom previous-page icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_icon: Option<IconAsset>,
    /// Custom next-page icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_icon: Option<IconAsset>,
    /// Custom first-page icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_icon: Option<IconAsset>,
    /// Custom last-page icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_icon: Option<IconAsset>,
    /// Page change handler, invoked with the newly selected page
    #[serde(skip)]
    pub on_page_change: Option<Callback<u32>>,
}

fn default_visible_pages() -> u32 {
    DEFAULT_VISIBLE_PAGES
}

fn default_true() -> bool {
    true
}

/// Render model of a pagination bar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    /// `<nav>` class list
    pub class_name: String,
    /// `<nav>` role
    pub role: &'static str,
    /// `<nav>` aria label
    pub aria_label: &'static str,
    /// First-page button, when boundary buttons are shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<NavButtonView>,
    /// Previous-page button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<NavButtonView>,
    /// Page buttons and ellipses, in order
    pub items: Vec<PageItemView>,
    /// Next-page button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavButtonView>,
    /// Last-page button, when boundary buttons are shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<NavButtonView>,
}

/// Render model of a first/prev/next/last button
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavButtonView {
    /// Button class list
    pub class_name: String,
    /// Disabled at the edge or when the control is disabled
    pub disabled: bool,
    /// Accessible label
    pub aria_label: &'static str,
    /// Button icon
    pub icon: IconAsset,
}

/// Render model of one window entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageItemView {
    /// A page button
    #[serde(rename_all = "camelCase")]
    Page {
        /// Page number
        page: u32,
        /// Button class list
        class_name: String,
        /// Disabled with the whole control
        disabled: bool,
        /// Current page
        active: bool,
        /// Accessible label
        aria_label: String,
        /// `"page"` on the current page
        #[serde(skip_serializing_if = "Option::is_none")]
        aria_current: Option<&'static str>,
    },
    /// A hidden-pages marker
    #[serde(rename_all = "camelCase")]
    Ellipsis {
        /// Stable key (`ellipsis-{index}`)
        key: String,
        /// Marker class list
        class_name: String,
    },
}

#[derive(Clone, Copy)]
enum NavKind {
    First,
    Prev,
    Next,
    Last,
}

impl Pagination {
    /// Create a pagination control
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            variant: Variant::default(),
            size: Size::default(),
            theme: ThemeMode::default(),
            current_page,
            total_pages,
            visible_pages: DEFAULT_VISIBLE_PAGES,
            show_navigation_buttons: true,
            show_boundary_buttons: false,
            disabled: false,
            class_name: String::new(),
            prev_icon: None,
            next_icon: None,
            first_icon: None,
            last_icon: None,
            on_page_change: None,
        }
    }

    /// Set variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set theme mode
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set the number of consecutive page buttons
    pub fn with_visible_pages(mut self, visible_pages: u32) -> Self {
        self.visible_pages = visible_pages;
        self
    }

    /// Show or hide the previous/next buttons
    pub fn show_navigation_buttons(mut self, show: bool) -> Self {
        self.show_navigation_buttons = show;
        self
    }

    /// Show or hide the first/last buttons
    pub fn show_boundary_buttons(mut self, show: bool) -> Self {
        self.show_boundary_buttons = show;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add an extra class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Override the navigation icons; `None` keeps the default
    pub fn with_icons(
        mut self,
        first: Option<IconAsset>,
        prev: Option<IconAsset>,
        next: Option<IconAsset>,
        last: Option<IconAsset>,
    ) -> Self {
        self.first_icon = first;
        self.prev_icon = prev;
        self.next_icon = next;
        self.last_icon = last;
        self
    }

    /// Set page change handler
    pub fn on_page_change(mut self, handler: impl Into<Callback<u32>>) -> Self {
        self.on_page_change = Some(handler.into());
        self
    }

    /// Move to a new current page (as a parent re-render would)
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    /// The page window for the current state
    pub fn window(&self) -> Vec<PageItem> {
        compute_window(self.current_page, self.total_pages, self.visible_pages)
    }

    /// Whether selecting `page` would fire the page change handler
    pub fn can_select(&self, page: u32) -> bool {
        !self.disabled && page != self.current_page && page >= 1 && page <= self.total_pages
    }

    /// Handle a click on a page. Returns whether the handler was invoked.
    pub fn handle_page_click(&self, page: u32) -> bool {
        if !self.can_select(page) {
            tracing::trace!(
                page,
                current = self.current_page,
                total = self.total_pages,
                disabled = self.disabled,
                "ignoring page selection"
            );
            return false;
        }

        tracing::debug!(page, "page selected");
        if let Some(handler) = &self.on_page_change {
            handler.emit(page);
        }
        true
    }

    /// Handle a click on the previous button
    pub fn handle_prev_click(&self) -> bool {
        self.current_page > 1 && self.handle_page_click(self.current_page - 1)
    }

    /// Handle a click on the next button
    pub fn handle_next_click(&self) -> bool {
        self.current_page < self.total_pages && self.handle_page_click(self.current_page + 1)
    }

    /// Handle a click on the first-page button
    pub fn handle_first_click(&self) -> bool {
        self.handle_page_click(1)
    }

    /// Handle a click on the last-page button
    pub fn handle_last_click(&self) -> bool {
        self.handle_page_click(self.total_pages)
    }

    fn button_class<'s>(&self, styles: &'s StyleSheet, kind_class: &str) -> ClassList<'s> {
        ClassList::new(styles)
            .add("paginationButton")
            .add(kind_class)
            .add(format!("paginationButton--{}", self.variant.as_str()))
            .add(format!("paginationButton--{}", self.size.as_str()))
            .add(format!("paginationButton--{}", self.theme.as_str()))
    }

    fn nav_button(&self, styles: &StyleSheet, kind: NavKind) -> NavButtonView {
        let at_start = self.current_page == 1;
        let at_end = self.current_page == self.total_pages;

        let (at_edge, aria_label, icon) = match kind {
            NavKind::First => (
                at_start,
                "첫 페이지로 이동",
                self.first_icon.clone().unwrap_or_else(icons::first_page),
            ),
            NavKind::Prev => (
                at_start,
                "이전 페이지로 이동",
                self.prev_icon.clone().unwrap_or_else(icons::chevron_left),
            ),
            NavKind::Next => (
                at_end,
                "다음 페이지로 이동",
                self.next_icon.clone().unwrap_or_else(icons::chevron_right),
            ),
            NavKind::Last => (
                at_end,
                "마지막 페이지로 이동",
                self.last_icon.clone().unwrap_or_else(icons::last_page),
            ),
        };
        let disabled = self.disabled || at_edge;

        NavButtonView {
            class_name: self
                .button_class(styles, "paginationButton__navigation")
                .add_if(disabled, "paginationButton--disabled")
                .build(),
            disabled,
            aria_label,
            icon,
        }
    }

    /// Build the render model
    pub fn render(&self, styles: &StyleSheet) -> PaginationView {
        let theme = self.theme.as_str();

        let class_name = ClassList::new(styles)
            .add("pagination")
            .add(format!("pagination--{}", self.variant.as_str()))
            .add(format!("pagination--{}", self.size.as_str()))
            .add(format!("pagination--{}", theme))
            .add_if(self.disabled, "pagination--disabled")
            .extra(&self.class_name)
            .build();

        let items = self
            .window()
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                PageItem::Ellipsis => PageItemView::Ellipsis {
                    key: format!("ellipsis-{}", index),
                    class_name: ClassList::new(styles)
                        .add("paginationEllipsis")
                        .add(format!("paginationEllipsis--{}", theme))
                        .build(),
                },
                PageItem::Page(page) => {
                    let active = page == self.current_page;
                    PageItemView::Page {
                        page,
                        class_name: self
                            .button_class(styles, "paginationButton__page")
                            .add_if(active, "paginationButton--active")
                            .add_if(self.disabled, "paginationButton--disabled")
                            .build(),
                        disabled: self.disabled,
                        active,
                        aria_label: format!("{}페이지로 이동", page),
                        aria_current: active.then_some("page"),
                    }
                }
            })
            .collect();

        let boundary = self.show_boundary_buttons;
        let navigation = self.show_navigation_buttons;

        PaginationView {
            class_name,
            role: "navigation",
            aria_label: "페이지네이션",
            first: boundary.then(|| self.nav_button(styles, NavKind::First)),
            prev: navigation.then(|| self.nav_button(styles, NavKind::Prev)),
            items,
            next: navigation.then(|| self.nav_button(styles, NavKind::Next)),
            last: boundary.then(|| self.nav_button(styles, NavKind::Last)),
        }
    }
}

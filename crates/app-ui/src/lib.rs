//! User interface layer for Diary Commons
//!
//! This crate provides the shared component library and design system of
//! the emotion diary: headless components rendered to serializable view
//! models, the modal provider, and the design-token tables.
//!
//! # Design System
//!
//! Colors come from six palettes (blue, gray, red, green, yellow,
//! cool gray) arranged into light and dark semantic themes:
//! - [`theme::ThemeMode::Light`] - White background, blue accents
//! - [`theme::ThemeMode::Dark`] - Black background, lighter blue accents
//!
//! # Modules
//!
//! - [`theme`] - Color palettes, gradients, and semantic themes
//! - [`typography`] - Responsive text styles and font families
//! - [`components`] - Button, input, and search bar
//! - [`pagination`] - Page window calculation and pagination control
//! - [`modal`] - Modal provider and controller handle
//! - [`document`] - Document host seam used by the modal
//! - [`navigation`] - URL table, access control, and route matching
//! - [`emotion`] - Diary emotion constants
//! - [`events`] - Callbacks and key events
//! - [`config`] - UI configuration defaults
//!
//! # Example
//!
//! ```rust
//! use app_ui::pagination::{compute_window, PageItem};
//! use app_ui::theme::{get_theme, ThemeMode};
//! use app_ui::typography::TypographyVariant;
//!
//! let theme = get_theme(ThemeMode::Dark);
//! assert!(theme.is_dark());
//!
//! let window = compute_window(10, 20, 5);
//! assert_eq!(window.first(), Some(&PageItem::Page(1)));
//!
//! let style = TypographyVariant::Body02M.style();
//! assert!(style.desktop.font_size > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod config;
pub mod document;
pub mod emotion;
pub mod events;
pub mod modal;
pub mod navigation;
pub mod pagination;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, ColorTokens, Theme, ThemeMode,
};

pub use typography::{
    device_type, DeviceType, FontFamily, ResponsiveTextStyle, TextStyle, TypographyVariant,
};

pub use components::{
    Button, ClassList, IconAsset, Input, SearchBar, Size, StyleSheet, Variant,
};

pub use pagination::{compute_window, PageItem, Pagination, PaginationView};

pub use modal::{ClickTarget, ModalError, ModalHandle, ModalOptions, ModalProvider, ModalView};

pub use document::{Document, HeadlessDocument, Overflow};

pub use navigation::{
    generate_dynamic_url, match_dynamic_route, AccessState, MatchResult, RouteParams, UrlPath,
};

pub use emotion::Emotion;

pub use events::{Callback, Key};

pub use config::UiConfig;

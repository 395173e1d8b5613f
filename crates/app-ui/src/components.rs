//! UI component library for Diary Commons
//!
//! Components are defined as Rust structs with serializable properties
//! that a rendering host turns into markup. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Class lists resolved through a [`StyleSheet`] (variant/size/theme suffixes)
//! - Accessibility attributes
//! - Event handling through [`Callback`]s
//!
//! # Available Components
//!
//! - [`Button`] - Button with variant, size, theme and optional icon
//! - [`Input`] - Labelled text input with error/helper message
//! - [`SearchBar`] - Search field with submit and clear actions
//!
//! The pagination control lives in [`crate::pagination`] and the modal
//! provider in [`crate::modal`].

use crate::events::{Callback, Key};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Visual variant shared by all components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Filled, main emphasis
    #[default]
    Primary,
    /// Outlined
    Secondary,
    /// Low emphasis
    Tertiary,
}

impl Variant {
    /// Class-name suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Tertiary => "tertiary",
        }
    }
}

/// Size shared by all components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Compact
    Small,
    /// Default size
    #[default]
    Medium,
    /// Large
    Large,
}

impl Size {
    /// Class-name suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// Generate a component id such as `input-3f9a0c1be`
pub fn generate_id(prefix: &str) -> ComponentId {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &uuid[..9])
}

// =============================================================================
// Style Sheets
// =============================================================================

/// Lookup table from class keys (e.g. `button--primary`) to the class names
/// emitted in markup.
///
/// A mapped sheet mirrors a CSS module: keys without an entry resolve to
/// nothing and are dropped from the class list. The identity sheet emits
/// every key unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    classes: Option<HashMap<String, String>>,
}

impl StyleSheet {
    /// Sheet that emits class keys unchanged
    pub fn identity() -> Self {
        Self { classes: None }
    }

    /// Sheet backed by an explicit key -> class map
    pub fn from_map(classes: HashMap<String, String>) -> Self {
        Self {
            classes: Some(classes),
        }
    }

    /// Resolve a class key
    pub fn resolve(&self, key: &str) -> Option<String> {
        match &self.classes {
            None => Some(key.to_string()),
            Some(map) => map.get(key).cloned(),
        }
    }
}

/// Builder for space-separated class lists
#[derive(Debug)]
pub struct ClassList<'a> {
    styles: &'a StyleSheet,
    classes: Vec<String>,
}

impl<'a> ClassList<'a> {
    /// Start an empty list
    pub fn new(styles: &'a StyleSheet) -> Self {
        Self {
            styles,
            classes: Vec::new(),
        }
    }

    /// Add a class key
    pub fn add(mut self, key: impl AsRef<str>) -> Self {
        if let Some(class) = self.styles.resolve(key.as_ref()) {
            self.classes.push(class);
        }
        self
    }

    /// Add a class key when `condition` holds
    pub fn add_if(self, condition: bool, key: impl AsRef<str>) -> Self {
        if condition {
            self.add(key)
        } else {
            self
        }
    }

    /// Add a caller-supplied class name verbatim (skipped when empty)
    pub fn extra(mut self, class_name: &str) -> Self {
        if !class_name.is_empty() {
            self.classes.push(class_name.to_string());
        }
        self
    }

    /// Join into a `class` attribute value
    pub fn build(self) -> String {
        self.classes.join(" ")
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Image asset rendered through the host's image utility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    /// Public path of the image
    pub src: String,
    /// Alternative text
    pub alt: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Optional CSS transform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl IconAsset {
    /// Create a square icon
    pub fn new(src: impl Into<String>, alt: impl Into<String>, size: u32) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: size,
            height: size,
            transform: None,
        }
    }

    /// Set a CSS transform
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }
}

/// Built-in icon assets
pub mod icons {
    use super::IconAsset;

    /// Magnifier used by the search bar
    pub fn search() -> IconAsset {
        IconAsset::new("/icons/search_outline_light_m.svg", "검색", 24)
    }

    /// Small cross used by the search bar clear button
    pub fn clear() -> IconAsset {
        IconAsset::new("/icons/close_outline_light_s.svg", "지우기", 20)
    }

    /// Previous-page chevron
    pub fn chevron_left() -> IconAsset {
        IconAsset::new("/icons/leftenable_outline_light_m.svg", "이전", 24)
    }

    /// Next-page chevron
    pub fn chevron_right() -> IconAsset {
        IconAsset::new("/icons/rightenable_outline_light_m.svg", "다음", 24)
    }

    /// First-page chevron
    pub fn first_page() -> IconAsset {
        IconAsset::new("/icons/leftenable_outline_light_m.svg", "첫 페이지", 24)
            .with_transform("translateX(-2px)")
    }

    /// Last-page chevron
    pub fn last_page() -> IconAsset {
        IconAsset::new("/icons/rightenable_outline_light_m.svg", "마지막 페이지", 24)
            .with_transform("translateX(2px)")
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// HTML button type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    /// `type="button"`
    #[default]
    Button,
    /// `type="submit"`
    Submit,
    /// `type="reset"`
    Reset,
}

/// Icon position in button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon before the text
    #[default]
    Left,
    /// Icon after the text
    Right,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Button text
    pub text: String,
    /// Style variant
    #[serde(default)]
    pub variant: Variant,
    /// Size
    #[serde(default)]
    pub size: Size,
    /// Theme
    #[serde(default)]
    pub theme: ThemeMode,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// HTML button type
    #[serde(default, rename = "type")]
    pub button_type: ButtonType,
    /// Extra class name
    #[serde(default)]
    pub class_name: String,
    /// Optional icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconAsset>,
    /// Icon position
    #[serde(default)]
    pub icon_position: IconPosition,
    /// Click handler
    #[serde(skip)]
    pub on_click: Option<Callback<()>>,
}

impl Button {
    /// Create a new button with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: Variant::default(),
            size: Size::default(),
            theme: ThemeMode::default(),
            disabled: false,
            button_type: ButtonType::default(),
            class_name: String::new(),
            icon: None,
            icon_position: IconPosition::default(),
            on_click: None,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the HTML button type
    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Set an extra class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: IconAsset) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set icon position
    pub fn with_icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Set click handler
    pub fn on_click(mut self, handler: impl Into<Callback<()>>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Class list of the `<button>` element
    pub fn class_names(&self, styles: &StyleSheet) -> String {
        ClassList::new(styles)
            .add("button")
            .add(format!("button--{}", self.variant.as_str()))
            .add(format!("button--{}", self.size.as_str()))
            .add(format!("button--{}", self.theme.as_str()))
            .add_if(self.disabled, "button--disabled")
            .add_if(self.icon.is_some(), "button--with-icon")
            .extra(&self.class_name)
            .build()
    }

    /// Icon rendered before the text
    pub fn leading_icon(&self) -> Option<&IconAsset> {
        self.icon
            .as_ref()
            .filter(|_| self.icon_position == IconPosition::Left)
    }

    /// Icon rendered after the text
    pub fn trailing_icon(&self) -> Option<&IconAsset> {
        self.icon
            .as_ref()
            .filter(|_| self.icon_position == IconPosition::Right)
    }

    /// Dispatch a click. Returns whether the handler ran.
    pub fn click(&self) -> bool {
        if self.disabled {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler.emit(());
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Input Component
// =============================================================================

fn default_input_id() -> ComponentId {
    generate_id("input")
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

/// Text input component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Element id (generated when not supplied)
    #[serde(default = "default_input_id")]
    pub id: ComponentId,
    /// Visual variant
    #[serde(default)]
    pub variant: Variant,
    /// Size
    #[serde(default)]
    pub size: Size,
    /// Theme mode
    #[serde(default)]
    pub theme: ThemeMode,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Error state
    #[serde(default)]
    pub error: bool,
    /// Message shown in the error state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Helper text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Disabled state
    #[serde(default)]
    pub disabled: bool,
    /// Read-only state
    #[serde(default)]
    pub read_only: bool,
    /// Required field marker
    #[serde(default)]
    pub required: bool,
    /// Extra class name for the container
    #[serde(default)]
    pub class_name: String,
    /// Icon before the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<IconAsset>,
    /// Icon after the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<IconAsset>,
    /// Stretch to the container width
    #[serde(default)]
    pub full_width: bool,
}

/// Class lists for each element of an [`Input`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputClasses {
    /// Outer container
    pub container: String,
    /// Border box around the field and icons
    pub input_wrapper: String,
    /// `<input>` element
    pub input: String,
    /// `<label>` element
    pub label: String,
    /// Error or helper message row
    pub message: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            id: default_input_id(),
            variant: Variant::default(),
            size: Size::default(),
            theme: ThemeMode::default(),
            label: None,
            placeholder: None,
            error: false,
            error_message: None,
            helper_text: None,
            disabled: false,
            read_only: false,
            required: false,
            class_name: String::new(),
            left_icon: None,
            right_icon: None,
            full_width: false,
        }
    }
}

impl Input {
    /// Create a new input with a generated id
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
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

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set error state
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set error message
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set helper text
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set read-only state
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Mark the field as required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Add an extra class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the icon before the text
    pub fn with_left_icon(mut self, icon: IconAsset) -> Self {
        self.left_icon = Some(icon);
        self
    }

    /// Set the icon after the text
    pub fn with_right_icon(mut self, icon: IconAsset) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Text of the message row.
    ///
    /// Empty strings count as unset. The row exists when either an error
    /// message or helper text is set. The error message wins only while
    /// `error` is true; otherwise the helper text is shown, which may be
    /// empty.
    pub fn message(&self) -> Option<&str> {
        let error_message = non_empty(&self.error_message);
        let helper_text = non_empty(&self.helper_text);
        if error_message.is_none() && helper_text.is_none() {
            return None;
        }
        match (error_message, self.error) {
            (Some(message), true) => Some(message),
            _ => Some(helper_text.unwrap_or("")),
        }
    }

    /// Whether the label shows the required marker
    pub fn shows_required_marker(&self) -> bool {
        non_empty(&self.label).is_some() && self.required
    }

    /// Class lists of every element
    pub fn classes(&self, styles: &StyleSheet) -> InputClasses {
        let size = self.size.as_str();
        let theme = self.theme.as_str();
        let has_left = self.left_icon.is_some();
        let has_right = self.right_icon.is_some();

        InputClasses {
            container: ClassList::new(styles)
                .add("container")
                .add_if(self.full_width, "container--full-width")
                .extra(&self.class_name)
                .build(),
            input_wrapper: ClassList::new(styles)
                .add("inputWrapper")
                .add(format!("inputWrapper--{}", self.variant.as_str()))
                .add(format!("inputWrapper--{}", size))
                .add(format!("inputWrapper--{}", theme))
                .add_if(self.error, "inputWrapper--error")
                .add_if(self.disabled, "inputWrapper--disabled")
                .add_if(self.read_only, "inputWrapper--readonly")
                .add_if(has_left, "inputWrapper--with-left-icon")
                .add_if(has_right, "inputWrapper--with-right-icon")
                .build(),
            input: ClassList::new(styles)
                .add("input")
                .add(format!("input--{}", size))
                .add(format!("input--{}", theme))
                .add_if(has_left, "input--with-left-icon")
                .add_if(has_right, "input--with-right-icon")
                .build(),
            label: ClassList::new(styles)
                .add("label")
                .add(format!("label--{}", theme))
                .add_if(self.required, "label--required")
                .add_if(self.disabled, "label--disabled")
                .build(),
            message: ClassList::new(styles)
                .add("message")
                .add(format!("message--{}", theme))
                .add_if(self.error, "message--error")
                .build(),
        }
    }
}

// =============================================================================
// SearchBar Component
// =============================================================================

/// Placeholder shown when none is supplied
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "검색어를 입력해 주세요.";

fn default_search_bar_id() -> ComponentId {
    generate_id("searchbar")
}

fn default_search_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

fn default_true() -> bool {
    true
}

/// Search bar component state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBar {
    /// Element id (generated when not supplied)
    #[serde(default = "default_search_bar_id")]
    pub id: ComponentId,
    /// Visual variant
    #[serde(default)]
    pub variant: Variant,
    /// Size
    #[serde(default)]
    pub size: Size,
    /// Theme mode
    #[serde(default)]
    pub theme: ThemeMode,
    /// Placeholder text
    #[serde(default = "default_search_placeholder")]
    pub placeholder: String,
    /// Controlled value; when set, the internal value is ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Value tracked while uncontrolled
    #[serde(default)]
    pub internal_value: String,
    /// Disabled state
    #[serde(default)]
    pub disabled: bool,
    /// Read-only state
    #[serde(default)]
    pub read_only: bool,
    /// Extra class name for the container
    #[serde(default)]
    pub class_name: String,
    /// Stretch to the container width
    #[serde(default)]
    pub full_width: bool,
    /// Show the search icon button
    #[serde(default = "default_true")]
    pub show_search_icon: bool,
    /// Show the clear button while there is text
    #[serde(default = "default_true")]
    pub show_clear_button: bool,
    /// Text change handler
    #[serde(skip)]
    pub on_change: Option<Callback<String>>,
    /// Search submit handler
    #[serde(skip)]
    pub on_search: Option<Callback<String>>,
    /// Clear handler
    #[serde(skip)]
    pub on_clear: Option<Callback<()>>,
}

/// Class lists for each element of a [`SearchBar`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarClasses {
    /// Outer container
    pub container: String,
    /// Border box around the field and buttons
    pub input_wrapper: String,
    /// `<input>` element
    pub input: String,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            id: default_search_bar_id(),
            variant: Variant::default(),
            size: Size::default(),
            theme: ThemeMode::default(),
            placeholder: default_search_placeholder(),
            value: None,
            internal_value: String::new(),
            disabled: false,
            read_only: false,
            class_name: String::new(),
            full_width: false,
            show_search_icon: true,
            show_clear_button: true,
            on_change: None,
            on_search: None,
            on_clear: None,
        }
    }
}

impl SearchBar {
    /// Create an uncontrolled search bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controlled search bar displaying `value`
    pub fn controlled(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            internal_value: value.clone(),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Set the element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
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

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set read-only state
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Add an extra class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Show or hide the search icon button
    pub fn show_search_icon(mut self, show: bool) -> Self {
        self.show_search_icon = show;
        self
    }

    /// Show or hide the clear button
    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Set text change handler
    pub fn on_change(mut self, handler: impl Into<Callback<String>>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Set search submit handler
    pub fn on_search(mut self, handler: impl Into<Callback<String>>) -> Self {
        self.on_search = Some(handler.into());
        self
    }

    /// Set clear handler
    pub fn on_clear(mut self, handler: impl Into<Callback<()>>) -> Self {
        self.on_clear = Some(handler.into());
        self
    }

    /// Replace the controlled value (as a parent re-render would)
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Whether the component is controlled by its parent
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Text currently shown in the field
    pub fn search_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.internal_value)
    }

    /// Whether the clear button is rendered
    pub fn clear_button_visible(&self) -> bool {
        self.show_clear_button
            && !self.search_value().is_empty()
            && !self.disabled
            && !self.read_only
    }

    /// Handle typing in the field
    pub fn handle_change(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        if !self.is_controlled() {
            self.internal_value = new_value.clone();
        }
        if let Some(handler) = &self.on_change {
            handler.emit(new_value);
        }
    }

    /// Handle a key press. Returns `true` when the key submitted a search and
    /// the host should prevent the default action.
    pub fn handle_key_down(&self, key: &Key) -> bool {
        match (key, &self.on_search) {
            (Key::Enter, Some(handler)) => {
                handler.emit(self.search_value().to_string());
                true
            }
            _ => false,
        }
    }

    /// Handle a click on the search icon
    pub fn handle_search_click(&self) {
        if self.disabled || self.read_only {
            return;
        }
        if let Some(handler) = &self.on_search {
            handler.emit(self.search_value().to_string());
        }
    }

    /// Handle a click on the clear button
    pub fn handle_clear_click(&mut self) {
        if !self.is_controlled() {
            self.internal_value.clear();
        }
        if let Some(handler) = &self.on_clear {
            handler.emit(());
        }
    }

    /// Class lists of every element
    pub fn classes(&self, styles: &StyleSheet) -> SearchBarClasses {
        let variant = self.variant.as_str();
        let size = self.size.as_str();
        let theme = self.theme.as_str();
        let with_clear = self.show_clear_button && !self.search_value().is_empty();

        SearchBarClasses {
            container: ClassList::new(styles)
                .add("container")
                .add(format!("container--{}", variant))
                .add(format!("container--{}", size))
                .add(format!("container--{}", theme))
                .add_if(self.full_width, "container--full-width")
                .add_if(self.disabled, "container--disabled")
                .add_if(self.read_only, "container--readonly")
                .extra(&self.class_name)
                .build(),
            input_wrapper: ClassList::new(styles)
                .add("inputWrapper")
                .add(format!("inputWrapper--{}", variant))
                .add(format!("inputWrapper--{}", size))
                .add(format!("inputWrapper--{}", theme))
                .add_if(self.disabled, "inputWrapper--disabled")
                .add_if(self.read_only, "inputWrapper--readonly")
                .add_if(self.show_search_icon, "inputWrapper--with-search-icon")
                .add_if(with_clear, "inputWrapper--with-clear-button")
                .build(),
            input: ClassList::new(styles)
                .add("input")
                .add(format!("input--{}", size))
                .add(format!("input--{}", theme))
                .add_if(self.show_search_icon, "input--with-search-icon")
                .add_if(with_clear, "input--with-clear-button")
                .build(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Typography system for Diary Commons
//!
//! Korean/English typography tokens from the Figma foundation, with
//! mobile/desktop branches and conversion to CSS declarations.

use serde::{Deserialize, Serialize};

// =============================================================================
// Weight and Family Tokens
// =============================================================================

/// Font weights
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Extra bold (800)
    pub const EXTRABOLD: u16 = 800;
}

/// Font family stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Pretendard, used for Korean text
    #[default]
    Korean,
    /// SUIT, used for English text and numerals
    English,
    /// Platform system font
    System,
}

impl FontFamily {
    /// Full CSS font stack
    pub fn stack(&self) -> &'static str {
        match self {
            FontFamily::Korean => {
                "Pretendard, -apple-system, BlinkMacSystemFont, system-ui, sans-serif"
            }
            FontFamily::English => {
                "SUIT Variable, -apple-system, BlinkMacSystemFont, system-ui, sans-serif"
            }
            FontFamily::System => "-apple-system, BlinkMacSystemFont, system-ui, sans-serif",
        }
    }
}

// =============================================================================
// Device Detection
// =============================================================================

/// Viewport width below which the mobile typography applies
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Device class used to pick a responsive style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Narrow viewport
    Mobile,
    /// Wide viewport (also used when no viewport is known)
    #[default]
    Desktop,
}

/// Classify a viewport width. Without a viewport (server rendering) the
/// desktop styles are used.
pub fn device_type(viewport_width: Option<u32>) -> DeviceType {
    device_type_with_breakpoint(viewport_width, MOBILE_BREAKPOINT)
}

/// Classify a viewport width against a custom breakpoint
pub fn device_type_with_breakpoint(viewport_width: Option<u32>, breakpoint: u32) -> DeviceType {
    match viewport_width {
        Some(width) if width < breakpoint => DeviceType::Mobile,
        _ => DeviceType::Desktop,
    }
}

// =============================================================================
// Text Styles
// =============================================================================

/// A single typography style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family
    pub font_family: FontFamily,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400 - 800)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in pixels
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a style with no letter spacing
    pub fn new(font_family: FontFamily, font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_family,
            font_size,
            font_weight,
            line_height,
            letter_spacing: 0.0,
        }
    }

    /// Convert to CSS declarations
    pub fn to_css(&self) -> CssTextStyle {
        CssTextStyle {
            font_family: self.font_family.stack().to_string(),
            font_size: format!("{}px", self.font_size),
            font_weight: self.font_weight,
            line_height: format!("{}px", self.line_height),
            letter_spacing: if self.letter_spacing != 0.0 {
                format!("{}px", self.letter_spacing)
            } else {
                "0".to_string()
            },
        }
    }
}

/// Mobile and desktop variants of a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveTextStyle {
    /// Style for narrow viewports
    pub mobile: TextStyle,
    /// Style for wide viewports
    pub desktop: TextStyle,
}

impl ResponsiveTextStyle {
    /// Use the same style on every device
    pub fn uniform(style: TextStyle) -> Self {
        Self {
            mobile: style.clone(),
            desktop: style,
        }
    }

    /// Style for a device class
    pub fn for_device(&self, device: DeviceType) -> &TextStyle {
        match device {
            DeviceType::Mobile => &self.mobile,
            DeviceType::Desktop => &self.desktop,
        }
    }

    /// CSS declarations for a device class
    pub fn to_css(&self, device: DeviceType) -> CssTextStyle {
        self.for_device(device).to_css()
    }
}

/// CSS declarations for a text style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssTextStyle {
    /// `font-family`
    pub font_family: String,
    /// `font-size`
    pub font_size: String,
    /// `font-weight`
    pub font_weight: u16,
    /// `line-height`
    pub line_height: String,
    /// `letter-spacing`
    pub letter_spacing: String,
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypographyCategory {
    /// Large marketing headlines
    WebHeadline,
    /// In-app headlines
    Headline,
    /// Titles and subtitles
    Title,
    /// Body copy
    Body,
    /// Captions
    Caption,
}

impl TypographyCategory {
    /// Name used in CSS variables
    pub fn as_str(&self) -> &'static str {
        match self {
            TypographyCategory::WebHeadline => "webHeadline",
            TypographyCategory::Headline => "headline",
            TypographyCategory::Title => "title",
            TypographyCategory::Body => "body",
            TypographyCategory::Caption => "caption",
        }
    }
}

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypographyVariant {
    /// Web headline, largest
    WebHeadline01,
    /// Web headline, medium
    WebHeadline02,
    /// Web headline, smallest
    WebHeadline03,
    /// Headline 1
    Headline01,
    /// Headline 2
    Headline02,
    /// Headline 3
    Headline03,
    /// Title 1
    Title01,
    /// Title 2
    Title02,
    /// Title 3
    Title03,
    /// Subtitle 1
    Subtitle01,
    /// Subtitle 2
    Subtitle02,
    /// Body 1, medium weight
    Body01,
    /// Body 2, medium weight
    Body02M,
    /// Body 3, medium weight
    Body03,
    /// Body 1, regular weight
    Body01Regular,
    /// Body 2, regular weight
    Body02S,
    /// Body 3, regular weight
    Body03Regular,
    /// Caption 1
    Caption01,
    /// Caption 2, semibold
    Caption02M,
    /// Caption 2, medium weight
    Caption02S,
    /// Caption 3
    Caption03,
}

impl TypographyVariant {
    /// Every variant, grouped by category
    pub const ALL: [TypographyVariant; 21] = [
        TypographyVariant::WebHeadline01,
        TypographyVariant::WebHeadline02,
        TypographyVariant::WebHeadline03,
        TypographyVariant::Headline01,
        TypographyVariant::Headline02,
        TypographyVariant::Headline03,
        TypographyVariant::Title01,
        TypographyVariant::Title02,
        TypographyVariant::Title03,
        TypographyVariant::Subtitle01,
        TypographyVariant::Subtitle02,
        TypographyVariant::Body01,
        TypographyVariant::Body02M,
        TypographyVariant::Body03,
        TypographyVariant::Body01Regular,
        TypographyVariant::Body02S,
        TypographyVariant::Body03Regular,
        TypographyVariant::Caption01,
        TypographyVariant::Caption02M,
        TypographyVariant::Caption02S,
        TypographyVariant::Caption03,
    ];

    /// Category this variant belongs to
    pub fn category(&self) -> TypographyCategory {
        use TypographyVariant::*;
        match self {
            WebHeadline01 | WebHeadline02 | WebHeadline03 => TypographyCategory::WebHeadline,
            Headline01 | Headline02 | Headline03 => TypographyCategory::Headline,
            Title01 | Title02 | Title03 | Subtitle01 | Subtitle02 => TypographyCategory::Title,
            Body01 | Body02M | Body03 | Body01Regular | Body02S | Body03Regular => {
                TypographyCategory::Body
            }
            Caption01 | Caption02M | Caption02S | Caption03 => TypographyCategory::Caption,
        }
    }

    /// Token name within its category
    pub fn name(&self) -> &'static str {
        use TypographyVariant::*;
        match self {
            WebHeadline01 | Headline01 => "headline01",
            WebHeadline02 | Headline02 => "headline02",
            WebHeadline03 | Headline03 => "headline03",
            Title01 => "title01",
            Title02 => "title02",
            Title03 => "title03",
            Subtitle01 => "subtitle01",
            Subtitle02 => "subtitle02",
            Body01 => "body01",
            Body02M => "body02_m",
            Body03 => "body03",
            Body01Regular => "body01_regular",
            Body02S => "body02_s",
            Body03Regular => "body03_regular",
            Caption01 => "caption01",
            Caption02M => "caption02_m",
            Caption02S => "caption02_s",
            Caption03 => "caption03",
        }
    }

    // (font size, weight, line height)
    fn metrics(&self) -> (f32, u16, f32) {
        use font_weight::*;
        use TypographyVariant::*;
        match self {
            WebHeadline01 => (48.0, SEMIBOLD, 60.0),
            WebHeadline02 => (36.0, SEMIBOLD, 48.0),
            WebHeadline03 => (28.0, SEMIBOLD, 36.0),
            Headline01 => (24.0, BOLD, 32.0),
            Headline02 => (22.0, EXTRABOLD, 30.0),
            Headline03 => (20.0, BOLD, 28.0),
            Title01 => (18.0, BOLD, 24.0),
            Title02 => (16.0, BOLD, 22.0),
            Title03 => (14.0, BOLD, 20.0),
            Subtitle01 => (14.0, SEMIBOLD, 22.0),
            Subtitle02 => (12.0, SEMIBOLD, 18.0),
            Body01 => (16.0, MEDIUM, 24.0),
            Body02M => (14.0, MEDIUM, 22.0),
            Body03 => (12.0, MEDIUM, 18.0),
            Body01Regular => (16.0, REGULAR, 22.0),
            Body02S => (14.0, REGULAR, 20.0),
            Body03Regular => (12.0, REGULAR, 16.0),
            Caption01 => (12.0, SEMIBOLD, 14.0),
            Caption02M => (10.0, SEMIBOLD, 12.0),
            Caption02S => (10.0, MEDIUM, 12.0),
            Caption03 => (8.0, SEMIBOLD, 10.0),
        }
    }

    /// Korean style for this variant
    pub fn style(&self) -> ResponsiveTextStyle {
        self.style_with_family(FontFamily::Korean)
    }

    /// English style, defined only for web headlines
    pub fn english_style(&self) -> Option<ResponsiveTextStyle> {
        match self.category() {
            TypographyCategory::WebHeadline => Some(self.style_with_family(FontFamily::English)),
            _ => None,
        }
    }

    fn style_with_family(&self, family: FontFamily) -> ResponsiveTextStyle {
        let (size, weight, line_height) = self.metrics();
        ResponsiveTextStyle::uniform(TextStyle::new(family, size, weight, line_height))
    }

    /// CSS variable name for one property of this variant
    pub fn css_variable(&self, property: &str) -> String {
        css_variable(self.category().as_str(), self.name(), property)
    }
}

/// Build a typography CSS variable name
pub fn css_variable(category: &str, name: &str, property: &str) -> String {
    format!("--typo-{}-{}-{}", category, name, property)
}

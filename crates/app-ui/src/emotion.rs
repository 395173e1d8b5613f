//! Emotion constants
//!
//! Each diary entry is tagged with one emotion. An emotion carries its
//! display label, medium/small icon file names and an accent color.

use crate::theme::{blue, gray, green, red, yellow};
use serde::{Deserialize, Serialize};

/// Emotion tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Emotion {
    /// 행복해요
    Happy,
    /// 슬퍼요
    Sad,
    /// 화나요
    Angry,
    /// 놀랐어요
    Surprise,
    /// 기타
    Etc,
}

/// Icon size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmotionImageSize {
    /// Medium icon
    #[default]
    M,
    /// Small icon
    S,
}

/// Display properties of an emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionProperties {
    /// Label shown on screen
    pub text: &'static str,
    /// Medium icon file name
    pub image_m: &'static str,
    /// Small icon file name
    pub image_s: &'static str,
    /// Accent color
    pub color: &'static str,
}

/// Select-box option for an emotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionOption {
    /// Option value
    pub value: Emotion,
    /// Option label
    pub label: &'static str,
    /// Accent color
    pub color: &'static str,
    /// Medium icon file name
    pub image_m: &'static str,
    /// Small icon file name
    pub image_s: &'static str,
}

impl Emotion {
    /// All emotions in display order
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Etc,
    ];

    /// Full property record
    pub fn properties(&self) -> EmotionProperties {
        match self {
            Emotion::Happy => EmotionProperties {
                text: "행복해요",
                image_m: "emotion-happy-m.svg",
                image_s: "emotion-happy-s.svg",
                color: red::S60,
            },
            Emotion::Sad => EmotionProperties {
                text: "슬퍼요",
                image_m: "emotion-sad-m.svg",
                image_s: "emotion-sad-s.svg",
                color: blue::S60,
            },
            Emotion::Angry => EmotionProperties {
                text: "화나요",
                image_m: "emotion-angry-m.svg",
                image_s: "emotion-angry-s.svg",
                color: gray::S60,
            },
            Emotion::Surprise => EmotionProperties {
                text: "놀랐어요",
                image_m: "emotion-surprise-m.svg",
                image_s: "emotion-surprise-s.svg",
                color: yellow::S60,
            },
            Emotion::Etc => EmotionProperties {
                text: "기타",
                image_m: "emotion-etc-m.svg",
                image_s: "emotion-etc-s.svg",
                color: green::S60,
            },
        }
    }

    /// Display label
    pub fn text(&self) -> &'static str {
        self.properties().text
    }

    /// Accent color
    pub fn color(&self) -> &'static str {
        self.properties().color
    }

    /// Icon file name for a size
    pub fn image(&self, size: EmotionImageSize) -> &'static str {
        let props = self.properties();
        match size {
            EmotionImageSize::M => props.image_m,
            EmotionImageSize::S => props.image_s,
        }
    }

    /// Public path of the icon
    pub fn image_path(&self, size: EmotionImageSize) -> String {
        format!("/icons/{}", self.image(size))
    }

    /// Find the emotion whose label matches exactly
    pub fn from_text(text: &str) -> Option<Emotion> {
        Self::ALL.into_iter().find(|emotion| emotion.text() == text)
    }
}

/// Options for an emotion select box
pub fn emotion_options() -> Vec<EmotionOption> {
    Emotion::ALL
        .into_iter()
        .map(|emotion| {
            let props = emotion.properties();
            EmotionOption {
                value: emotion,
                label: props.text,
                color: props.color,
                image_m: props.image_m,
                image_s: props.image_s,
            }
        })
        .collect()
}

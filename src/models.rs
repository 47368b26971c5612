use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual theme for the whole application.
///
/// `Retro3d` is experimental-only: the settings store downgrades it to
/// `Light` whenever experimental features are switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    #[serde(rename = "LIGHT")]
    Light,
    #[serde(rename = "DARK")]
    Dark,
    #[serde(rename = "GLASS")]
    Glass,
    #[serde(rename = "ONE_UI_DARK")]
    OneUiDark,
    #[serde(rename = "RETRO_3D")]
    Retro3d,
}

impl Theme {
    /// Display label used in the theme picker.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Glass => "Glass",
            Theme::OneUiDark => "One UI",
            Theme::Retro3d => "Retro 3D",
        }
    }
}

/// Easing preset applied to view slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimationStyle {
    #[default]
    FluidBlur,
    FadeoutOverlay,
    FreeFall,
    ElasticSlide,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 4] = [
        AnimationStyle::FluidBlur,
        AnimationStyle::FadeoutOverlay,
        AnimationStyle::FreeFall,
        AnimationStyle::ElasticSlide,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnimationStyle::FluidBlur => "Fluid Blur",
            AnimationStyle::FadeoutOverlay => "Fadeout Overlay",
            AnimationStyle::FreeFall => "Free Fall",
            AnimationStyle::ElasticSlide => "Elastic Slide",
        }
    }
}

/// One of the three top-level navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppView {
    #[default]
    Home,
    Studio,
    User,
}

impl AppView {
    /// Fixed view order; swipe semantics depend on it.
    pub const ORDER: [AppView; 3] = [AppView::Home, AppView::Studio, AppView::User];

    /// Position of this view in the fixed order.
    pub fn index(&self) -> usize {
        Self::ORDER.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Studio => "Studio",
            AppView::User => "User",
        }
    }
}

/// Full-screen generation workflow replacing the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Synopsis,
    Hashtags,
}

/// Style directive for synopsis generation.
///
/// Serialized labels match the values recorded in generation params
/// ("Default", "Descriptive", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynopsisMode {
    Default,
    Descriptive,
    Suspense,
    Engaging,
}

impl SynopsisMode {
    pub const ALL: [SynopsisMode; 4] = [
        SynopsisMode::Default,
        SynopsisMode::Descriptive,
        SynopsisMode::Suspense,
        SynopsisMode::Engaging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SynopsisMode::Default => "Default",
            SynopsisMode::Descriptive => "Descriptive",
            SynopsisMode::Suspense => "Suspense",
            SynopsisMode::Engaging => "Engaging",
        }
    }
}

/// Kind of generated content stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Synopsis,
    Hashtags,
}

/// Parameters a generation was issued with, kept alongside the result so
/// the Studio view can recover model, title/filename, mode and counts.
///
/// Fields that do not apply to a kind stay `None` and are omitted from the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SynopsisMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The model the caller asked for, never the fallback that served it.
    pub model_id: String,
}

/// A single stored generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub params: GenerationParams,
    pub is_favorite: bool,
}

impl GenerationRecord {
    pub fn new(kind: RecordKind, content: String, params: GenerationParams) -> Self {
        // Millisecond precision: timestamps survive an export/import
        // round trip unchanged.
        let now = Utc::now();
        let created_at = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content,
            created_at,
            params,
            is_favorite: false,
        }
    }

    /// Title shown in the Studio list, recovered from params.
    pub fn display_title(&self) -> &str {
        if let Some(title) = self.params.title.as_deref().filter(|t| !t.is_empty()) {
            return title;
        }
        if let Some(name) = self.params.file_name.as_deref().filter(|n| !n.is_empty()) {
            return name;
        }
        match self.kind {
            RecordKind::Synopsis => "Untitled Script",
            RecordKind::Hashtags => "Hashtag Set",
        }
    }

    /// Whitespace-separated word count of the stored content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// One turn in the assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// An entry in the selectable model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Models offered in the tool model selectors.
pub const MODELS: [ModelInfo; 3] = [
    ModelInfo {
        id: "gemini-3-pro-preview",
        name: "Gemini 3.0 Pro",
        description: "Complex reasoning & creativity",
    },
    ModelInfo {
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
        description: "High speed & efficiency",
    },
    ModelInfo {
        id: "gemini-2.0-flash",
        name: "Gemini 2.0 Flash",
        description: "Reliable standard performance",
    },
];

/// The designated fallback model, used when the selected model fails.
pub const STABLE_MODEL: &str = "gemini-2.5-flash";

/// Model the assistant chat is pinned to.
pub const CHAT_MODEL: &str = "gemini-3-pro-preview";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_order_round_trips() {
        for (i, view) in AppView::ORDER.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_theme_serializes_to_legacy_tags() {
        let json = serde_json::to_string(&Theme::OneUiDark).unwrap();
        assert_eq!(json, "\"ONE_UI_DARK\"");
        let json = serde_json::to_string(&Theme::Retro3d).unwrap();
        assert_eq!(json, "\"RETRO_3D\"");
    }

    #[test]
    fn test_record_serializes_with_millisecond_timestamp() {
        let record = GenerationRecord::new(
            RecordKind::Synopsis,
            "text".to_string(),
            GenerationParams {
                model_id: STABLE_MODEL.to_string(),
                ..Default::default()
            },
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "synopsis");
        assert!(value["createdAt"].is_i64());
        // Unset params are omitted entirely.
        assert!(value["params"].get("title").is_none());
        assert_eq!(value["params"]["modelId"], STABLE_MODEL);
    }

    #[test]
    fn test_display_title_falls_back_by_kind() {
        let mut record = GenerationRecord::new(
            RecordKind::Hashtags,
            "#a #b".to_string(),
            GenerationParams::default(),
        );
        assert_eq!(record.display_title(), "Hashtag Set");
        record.params.file_name = Some("episode1.txt".to_string());
        assert_eq!(record.display_title(), "episode1.txt");
        record.params.title = Some("Episode One".to_string());
        assert_eq!(record.display_title(), "Episode One");
    }

    #[test]
    fn test_stable_model_is_in_catalog() {
        assert!(MODELS.iter().any(|m| m.id == STABLE_MODEL));
    }
}

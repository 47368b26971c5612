//! Settings store with partial-merge updates and a centralized
//! invariant-correction rule.
//!
//! All cross-field invariants live in [`apply_patch`]: the experimental
//! kill switch and the 3D/neon mutual exclusion are corrected there, never
//! at call sites.

use serde::{Deserialize, Serialize};

use crate::models::{AnimationStyle, Theme};

/// Process-wide visual and behavioral preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub slide_enabled: bool,
    pub animation_style: AnimationStyle,
    pub bouncing_animation: bool,
    pub audio_enabled: bool,
    #[serde(rename = "enable3DMode")]
    pub enable_3d_mode: bool,
    pub enable_neon: bool,
    pub experimental_features: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            slide_enabled: true,
            animation_style: AnimationStyle::FluidBlur,
            bouncing_animation: true,
            audio_enabled: true,
            enable_3d_mode: false,
            enable_neon: false,
            experimental_features: false,
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub slide_enabled: Option<bool>,
    pub animation_style: Option<AnimationStyle>,
    pub bouncing_animation: Option<bool>,
    pub audio_enabled: Option<bool>,
    pub enable_3d_mode: Option<bool>,
    pub enable_neon: Option<bool>,
    pub experimental_features: Option<bool>,
}

impl SettingsPatch {
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Default::default()
        }
    }
}

/// Merge a patch into the old settings and correct every cross-field
/// invariant in one place.
///
/// Rules, in application order:
/// 1. Enabling 3D clears neon; enabling neon clears 3D.
/// 2. With experimental features off, both experimental flags are forced
///    off and the experimental-only theme downgrades to `Light`.
pub fn apply_patch(old: &AppSettings, patch: &SettingsPatch) -> AppSettings {
    let mut next = old.clone();

    if let Some(theme) = patch.theme {
        next.theme = theme;
    }
    if let Some(v) = patch.slide_enabled {
        next.slide_enabled = v;
    }
    if let Some(v) = patch.animation_style {
        next.animation_style = v;
    }
    if let Some(v) = patch.bouncing_animation {
        next.bouncing_animation = v;
    }
    if let Some(v) = patch.audio_enabled {
        next.audio_enabled = v;
    }
    if let Some(v) = patch.enable_3d_mode {
        next.enable_3d_mode = v;
    }
    if let Some(v) = patch.enable_neon {
        next.enable_neon = v;
    }
    if let Some(v) = patch.experimental_features {
        next.experimental_features = v;
    }

    if patch.enable_3d_mode == Some(true) {
        next.enable_neon = false;
    }
    if patch.enable_neon == Some(true) {
        next.enable_3d_mode = false;
    }

    if !next.experimental_features {
        next.enable_3d_mode = false;
        next.enable_neon = false;
        if next.theme == Theme::Retro3d {
            next.theme = Theme::Light;
        }
    }

    next
}

/// Owner of the current settings value.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: AppSettings,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a previously exported value, passing it through the
    /// correction rule so imported documents cannot violate invariants.
    pub fn restore(&mut self, settings: AppSettings) {
        self.settings = apply_patch(&settings, &SettingsPatch::default());
    }

    pub fn get(&self) -> &AppSettings {
        &self.settings
    }

    /// Apply a partial update and return the corrected result.
    pub fn update(&mut self, patch: SettingsPatch) -> &AppSettings {
        self.settings = apply_patch(&self.settings, &patch);
        &self.settings
    }

    pub fn reset(&mut self) {
        self.settings = AppSettings::default();
    }
}

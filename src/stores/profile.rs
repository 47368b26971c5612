//! User profile store: display name, avatar reference, login flag.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Placeholder avatar shown until the user picks their own.
pub const DEFAULT_AVATAR_URL: &str = "https://picsum.photos/200/200";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Either an http(s) URL or a `data:` URI with embedded image bytes.
    pub avatar_url: String,
    pub is_logged_in: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Creator".to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            is_logged_in: true,
        }
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_logged_in: Option<bool>,
}

/// Embed raw image bytes as a `data:` URI usable as an avatar reference.
pub fn avatar_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: UserProfile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    pub fn get(&self) -> &UserProfile {
        &self.profile
    }

    pub fn update(&mut self, patch: ProfilePatch) -> &UserProfile {
        if let Some(name) = patch.name {
            self.profile.name = name;
        }
        if let Some(avatar) = patch.avatar_url {
            self.profile.avatar_url = avatar;
        }
        if let Some(logged_in) = patch.is_logged_in {
            self.profile.is_logged_in = logged_in;
        }
        &self.profile
    }

    pub fn reset(&mut self) {
        self.profile = UserProfile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_update_keeps_unset_fields() {
        let mut store = ProfileStore::new();
        store.update(ProfilePatch {
            name: Some("Alex".to_string()),
            ..Default::default()
        });
        assert_eq!(store.get().name, "Alex");
        assert_eq!(store.get().avatar_url, DEFAULT_AVATAR_URL);
        assert!(store.get().is_logged_in);
    }

    #[test]
    fn test_avatar_data_uri_shape() {
        let uri = avatar_data_uri("image/png", b"abc");
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = ProfileStore::new();
        store.update(ProfilePatch {
            name: Some("Alex".to_string()),
            is_logged_in: Some(false),
            ..Default::default()
        });
        store.reset();
        assert_eq!(store.get(), &UserProfile::default());
    }
}

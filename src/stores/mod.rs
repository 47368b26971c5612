//! Application state stores.
//!
//! Each store is mutated only through its own update operation; with the
//! single-threaded event loop that makes every mutation atomic from the
//! caller's perspective.

pub mod history;
pub mod profile;
pub mod settings;

pub use history::{HistoryFilter, HistoryStore, KindFilter, SortKey, MAX_FAVORITE_EXAMPLES};
pub use profile::{avatar_data_uri, ProfilePatch, ProfileStore, UserProfile};
pub use settings::{apply_patch, AppSettings, SettingsPatch, SettingsStore};

//! Content Buddy - a terminal companion for content creators
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod clipboard;
pub mod genai;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod orchestrator;
pub mod storage;
pub mod stores;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub mod prelude {
    //! Re-exports of the most frequently used types.

    pub use crate::app::{App, AppMessage, RenderMode};
    pub use crate::genai::{GenerationError, GenerationOptions, TextGenerator};
    pub use crate::models::{
        AppView, GenerationParams, GenerationRecord, RecordKind, SynopsisMode, Theme, ToolMode,
        MODELS, STABLE_MODEL,
    };
    pub use crate::orchestrator::{HashtagRequest, Orchestrator, SynopsisRequest};
    pub use crate::stores::{
        AppSettings, HistoryFilter, HistoryStore, ProfileStore, SettingsStore, UserProfile,
    };
}

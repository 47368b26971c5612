//! Central application state and event handling.
//!
//! All mutations happen synchronously on the event-loop task. The only
//! asynchronous work is generation: requests are spawned onto tokio and
//! deliver an [`AppMessage`] back through the app channel when they
//! finish. Each request carries an id; a completion is applied only when
//! the initiating tool is still waiting on that id, otherwise it is
//! discarded.

use std::path::Path;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::clipboard;
use crate::genai::client::GeminiClient;
use crate::genai::{ChatSession, CHAT_SYSTEM_INSTRUCTION};
use crate::models::{
    AppView, ChatMessage, ChatRole, RecordKind, SynopsisMode, Theme, ToolMode, CHAT_MODEL, MODELS,
    STABLE_MODEL,
};
use crate::navigation::ViewNav;
use crate::orchestrator::{Generation, HashtagRequest, Orchestrator, SynopsisRequest};
use crate::storage::{self, Snapshot};
use crate::stores::{
    HistoryFilter, HistoryStore, KindFilter, ProfilePatch, ProfileStore, SettingsPatch,
    SettingsStore, SortKey,
};
use crate::widgets::{InputBox, MultilineInput};

/// How long a footer notice stays visible (ticks, 16ms each).
const NOTICE_TICKS: u64 = 250;

/// Messages delivered from spawned async work.
#[derive(Debug)]
pub enum AppMessage {
    /// A generation finished successfully.
    GenerationComplete {
        request_id: u64,
        generation: Generation,
    },
    /// A generation failed after its whole fallback chain.
    GenerationFailed {
        request_id: u64,
        kind: RecordKind,
        error: String,
    },
    /// One chat turn finished; the session comes back with the result.
    ChatTurn {
        session: ChatSession,
        result: Result<String, String>,
    },
}

/// What the single render-dispatch site draws: the navigation shell or a
/// full-screen tool. Mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Shell(AppView),
    Tool(ToolMode),
}

/// Transient footer notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub until_tick: u64,
}

/// Focusable fields of the synopsis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynopsisField {
    #[default]
    Script,
    ScriptFile,
    Title,
    WordCount,
    Mode,
    Model,
}

impl SynopsisField {
    pub fn next(self) -> Self {
        match self {
            SynopsisField::Script => SynopsisField::ScriptFile,
            SynopsisField::ScriptFile => SynopsisField::Title,
            SynopsisField::Title => SynopsisField::WordCount,
            SynopsisField::WordCount => SynopsisField::Mode,
            SynopsisField::Mode => SynopsisField::Model,
            SynopsisField::Model => SynopsisField::Script,
        }
    }
}

/// State of the synopsis generator tool screen.
#[derive(Debug, Default)]
pub struct SynopsisToolState {
    pub script: MultilineInput,
    pub script_file: InputBox,
    pub file_name: Option<String>,
    pub title: InputBox,
    pub word_count: u32,
    pub mode_index: usize,
    pub model_index: usize,
    pub focus: SynopsisField,
    pub pending: Option<u64>,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl SynopsisToolState {
    fn fresh() -> Self {
        Self {
            word_count: 300,
            model_index: stable_model_index(),
            ..Default::default()
        }
    }

    pub fn mode(&self) -> SynopsisMode {
        SynopsisMode::ALL[self.mode_index]
    }

    pub fn model_id(&self) -> &'static str {
        MODELS[self.model_index].id
    }
}

/// Focusable fields of the hashtag form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashtagField {
    #[default]
    Description,
    Script,
    ScriptFile,
    Amount,
    Model,
}

impl HashtagField {
    pub fn next(self) -> Self {
        match self {
            HashtagField::Description => HashtagField::Script,
            HashtagField::Script => HashtagField::ScriptFile,
            HashtagField::ScriptFile => HashtagField::Amount,
            HashtagField::Amount => HashtagField::Model,
            HashtagField::Model => HashtagField::Description,
        }
    }
}

/// State of the hashtag generator tool screen.
#[derive(Debug, Default)]
pub struct HashtagToolState {
    pub description: MultilineInput,
    pub script: MultilineInput,
    pub script_file: InputBox,
    pub file_name: Option<String>,
    pub amount: u32,
    pub model_index: usize,
    pub focus: HashtagField,
    pub pending: Option<u64>,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl HashtagToolState {
    fn fresh() -> Self {
        Self {
            amount: 30,
            model_index: stable_model_index(),
            ..Default::default()
        }
    }

    pub fn model_id(&self) -> &'static str {
        MODELS[self.model_index].id
    }
}

fn stable_model_index() -> usize {
    MODELS
        .iter()
        .position(|m| m.id == STABLE_MODEL)
        .unwrap_or(0)
}

/// Studio list state: selection plus the read-side filter.
#[derive(Debug, Default)]
pub struct StudioState {
    pub selected: usize,
    pub filter: HistoryFilter,
    pub filter_open: bool,
    pub filter_cursor: usize,
}

/// Rows of the filter panel, top to bottom.
pub const FILTER_ROWS: usize = 4; // kind, sort, models, favorites-only

/// Profile edit form on the User view.
#[derive(Debug, Default)]
pub struct ProfileEditState {
    pub active: bool,
    pub editing_avatar: bool,
    pub name: InputBox,
    pub avatar: InputBox,
}

/// Settings modal rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Audio,
    Slide,
    Bouncing,
    AnimationStyle,
    Experimental,
    Mode3d,
    Neon,
    Export,
    Import,
    Reset,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 10] = [
        SettingsRow::Audio,
        SettingsRow::Slide,
        SettingsRow::Bouncing,
        SettingsRow::AnimationStyle,
        SettingsRow::Experimental,
        SettingsRow::Mode3d,
        SettingsRow::Neon,
        SettingsRow::Export,
        SettingsRow::Import,
        SettingsRow::Reset,
    ];
}

/// Settings modal overlay state.
#[derive(Debug, Default)]
pub struct SettingsModalState {
    pub open: bool,
    pub cursor: usize,
}

/// Assistant chat panel.
#[derive(Debug)]
pub struct ChatState {
    pub open: bool,
    pub input: InputBox,
    /// Display transcript; the session owns the canonical one.
    pub messages: Vec<ChatMessage>,
    pub session: Option<ChatSession>,
    pub pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            input: InputBox::new(),
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: "Hi! I am your Content Buddy assistant. How can I help you today?"
                    .to_string(),
            }],
            session: Some(ChatSession::new(CHAT_MODEL, CHAT_SYSTEM_INSTRUCTION)),
            pending: false,
        }
    }
}

pub struct App {
    pub settings: SettingsStore,
    pub profile: ProfileStore,
    pub history: HistoryStore,
    pub nav: ViewNav,
    pub active_tool: Option<ToolMode>,
    pub synopsis: SynopsisToolState,
    pub hashtags: HashtagToolState,
    pub studio: StudioState,
    pub profile_edit: ProfileEditState,
    pub settings_modal: SettingsModalState,
    pub chat: ChatState,
    pub notice: Option<Notice>,

    orchestrator: Option<Arc<Orchestrator<GeminiClient>>>,
    next_request_id: u64,

    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    pub tick_count: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    pub fn new(orchestrator: Option<Arc<Orchestrator<GeminiClient>>>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            settings: SettingsStore::new(),
            profile: ProfileStore::new(),
            history: HistoryStore::new(),
            nav: ViewNav::new(),
            active_tool: None,
            synopsis: SynopsisToolState::fresh(),
            hashtags: HashtagToolState::fresh(),
            studio: StudioState::default(),
            profile_edit: ProfileEditState::default(),
            settings_modal: SettingsModalState::default(),
            chat: ChatState::default(),
            notice: None,
            orchestrator,
            next_request_id: 0,
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// The single dispatch value the renderer matches on.
    pub fn render_mode(&self) -> RenderMode {
        match self.active_tool {
            Some(tool) => RenderMode::Tool(tool),
            None => RenderMode::Shell(self.nav.current()),
        }
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
        if self.nav.is_sliding(self.tick_count) {
            self.needs_redraw = true;
        } else {
            self.nav.settle(self.tick_count);
        }
        if let Some(notice) = &self.notice {
            if self.tick_count >= notice.until_tick {
                self.notice = None;
                self.needs_redraw = true;
            }
        }
        if self.synopsis.pending.is_some() || self.hashtags.pending.is_some() || self.chat.pending {
            // Spinner frames advance with the tick.
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.needs_redraw = true;
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            until_tick: self.tick_count + NOTICE_TICKS,
        });
    }

    fn alloc_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn set_view(&mut self, target: AppView) {
        let style = self.settings.get().animation_style;
        self.nav
            .set_view(target, style, self.terminal_width, self.tick_count);
        self.needs_redraw = true;
    }

    pub fn open_tool(&mut self, tool: ToolMode) {
        // Tool state is fresh on every open, matching a remount.
        match tool {
            ToolMode::Synopsis => self.synopsis = SynopsisToolState::fresh(),
            ToolMode::Hashtags => self.hashtags = HashtagToolState::fresh(),
        }
        self.active_tool = Some(tool);
        self.needs_redraw = true;
    }

    /// Leave the active tool; `current_view` reappears unchanged.
    pub fn close_tool(&mut self) {
        self.active_tool = None;
        self.needs_redraw = true;
    }

    // =========================================================================
    // Message handling (async completions)
    // =========================================================================

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::GenerationComplete {
                request_id,
                generation,
            } => self.apply_generation(request_id, generation),
            AppMessage::GenerationFailed {
                request_id,
                kind,
                error,
            } => self.apply_generation_failure(request_id, kind, error),
            AppMessage::ChatTurn { session, result } => {
                self.chat.session = Some(session);
                self.chat.pending = false;
                match result {
                    Ok(text) => self.chat.messages.push(ChatMessage {
                        role: ChatRole::Model,
                        text,
                    }),
                    Err(error) => {
                        tracing::warn!(%error, "chat turn failed");
                        self.chat.messages.push(ChatMessage {
                            role: ChatRole::Model,
                            text: "Sorry, I could not reply right now. Please try again."
                                .to_string(),
                        });
                    }
                }
            }
        }
        self.needs_redraw = true;
    }

    fn apply_generation(&mut self, request_id: u64, generation: Generation) {
        let interested = match generation.kind {
            RecordKind::Synopsis => {
                self.active_tool == Some(ToolMode::Synopsis)
                    && self.synopsis.pending == Some(request_id)
            }
            RecordKind::Hashtags => {
                self.active_tool == Some(ToolMode::Hashtags)
                    && self.hashtags.pending == Some(request_id)
            }
        };
        if !interested {
            // The initiating view went away; the result is discarded.
            tracing::debug!(request_id, "discarding generation result for closed view");
            return;
        }

        self.history
            .add(generation.kind, generation.content.clone(), generation.params);

        match generation.kind {
            RecordKind::Synopsis => {
                self.synopsis.pending = None;
                self.synopsis.error = None;
                self.synopsis.result = Some(generation.content);
            }
            RecordKind::Hashtags => {
                self.hashtags.pending = None;
                self.hashtags.error = None;
                self.hashtags.result = Some(generation.content);
            }
        }
    }

    fn apply_generation_failure(&mut self, request_id: u64, kind: RecordKind, error: String) {
        match kind {
            RecordKind::Synopsis if self.synopsis.pending == Some(request_id) => {
                self.synopsis.pending = None;
                self.synopsis.error = Some(format!(
                    "Generation failed: {}. Please try a different model or check your connection.",
                    error
                ));
            }
            RecordKind::Hashtags if self.hashtags.pending == Some(request_id) => {
                self.hashtags.pending = None;
                self.hashtags.error = Some(
                    "Failed to generate hashtags. Please check your internet connection."
                        .to_string(),
                );
            }
            _ => {
                tracing::debug!(request_id, "discarding generation failure for closed view");
            }
        }
    }

    // =========================================================================
    // Generation dispatch
    // =========================================================================

    fn submit_synopsis(&mut self) {
        if self.synopsis.script.is_empty() || self.synopsis.pending.is_some() {
            return;
        }
        let Some(orchestrator) = self.orchestrator.clone() else {
            self.synopsis.error =
                Some("No API key configured. Set GEMINI_API_KEY and restart.".to_string());
            return;
        };

        let title = Some(self.synopsis.title.content().to_string()).filter(|t| !t.is_empty());
        let request = SynopsisRequest {
            script: self.synopsis.script.content().to_string(),
            word_count: self.synopsis.word_count,
            mode: self.synopsis.mode(),
            title,
            file_name: self.synopsis.file_name.clone(),
            favorites: self.history.favorite_examples(RecordKind::Synopsis),
            model_id: self.synopsis.model_id().to_string(),
        };

        let request_id = self.alloc_request_id();
        self.synopsis.pending = Some(request_id);
        self.synopsis.error = None;

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match orchestrator.generate_synopsis(&request).await {
                Ok(generation) => AppMessage::GenerationComplete {
                    request_id,
                    generation,
                },
                Err(error) => AppMessage::GenerationFailed {
                    request_id,
                    kind: RecordKind::Synopsis,
                    error: error.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn submit_hashtags(&mut self) {
        if self.hashtags.description.is_empty() || self.hashtags.pending.is_some() {
            return;
        }
        let Some(orchestrator) = self.orchestrator.clone() else {
            self.hashtags.error =
                Some("No API key configured. Set GEMINI_API_KEY and restart.".to_string());
            return;
        };

        let script = if self.hashtags.script.is_empty() {
            "No script provided".to_string()
        } else {
            self.hashtags.script.content().to_string()
        };
        let request = HashtagRequest {
            script,
            description: self.hashtags.description.content().to_string(),
            amount: self.hashtags.amount,
            file_name: self.hashtags.file_name.clone(),
            favorites: self.history.favorite_examples(RecordKind::Hashtags),
            model_id: self.hashtags.model_id().to_string(),
        };

        let request_id = self.alloc_request_id();
        self.hashtags.pending = Some(request_id);
        self.hashtags.error = None;

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match orchestrator.generate_hashtags(&request).await {
                Ok(generation) => AppMessage::GenerationComplete {
                    request_id,
                    generation,
                },
                Err(error) => AppMessage::GenerationFailed {
                    request_id,
                    kind: RecordKind::Hashtags,
                    error: error.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn send_chat_message(&mut self) {
        if self.chat.input.is_empty() || self.chat.pending {
            return;
        }
        let Some(orchestrator) = self.orchestrator.clone() else {
            self.chat.messages.push(ChatMessage {
                role: ChatRole::Model,
                text: "No API key configured. Set GEMINI_API_KEY and restart.".to_string(),
            });
            self.chat.input.clear();
            return;
        };
        let Some(mut session) = self.chat.session.take() else {
            return;
        };

        let text = self.chat.input.content().to_string();
        self.chat.input.clear();
        self.chat.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.clone(),
        });
        self.chat.pending = true;

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let generator = orchestrator.generator();
            let result = session
                .send_message(generator.as_ref(), &text)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::ChatTurn { session, result });
        });
    }

    // =========================================================================
    // Snapshot export / reset
    // =========================================================================

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            settings: self.settings.get().clone(),
            user: self.profile.get().clone(),
            history: self.history.records().to_vec(),
        }
    }

    fn export_snapshot(&mut self) {
        let snapshot = self.snapshot();
        match storage::default_snapshot_path()
            .and_then(|path| storage::export_snapshot(&snapshot, &path).map(|_| path))
        {
            Ok(path) => self.notify(format!("Exported to {}", path.display())),
            Err(error) => {
                tracing::error!(%error, "snapshot export failed");
                self.notify("Export failed; see log for details");
            }
        }
    }

    fn import_snapshot(&mut self) {
        match storage::default_snapshot_path().and_then(|path| storage::import_snapshot(&path)) {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                self.notify("Backup imported");
            }
            Err(error) => {
                tracing::warn!(%error, "snapshot import failed");
                self.notify("No readable backup found in the data directory");
            }
        }
    }

    /// Restore imported stores field-for-field.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.settings.restore(snapshot.settings);
        self.profile.restore(snapshot.user);
        self.history.restore(snapshot.history);
        self.needs_redraw = true;
    }

    /// Restore hard-coded defaults for all three stores and return to Home.
    pub fn reset_all(&mut self) {
        self.settings.reset();
        self.profile.reset();
        self.history.clear();
        self.nav.reset();
        self.studio = StudioState::default();
        self.needs_redraw = true;
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;
        if self.settings_modal.open {
            self.handle_settings_modal_key(key);
        } else if self.chat.open && self.active_tool.is_none() {
            self.handle_chat_key(key);
        } else if let Some(tool) = self.active_tool {
            match tool {
                ToolMode::Synopsis => self.handle_synopsis_key(key),
                ToolMode::Hashtags => self.handle_hashtag_key(key),
            }
        } else {
            self.handle_shell_key(key);
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.needs_redraw = true;
        if self.chat.open && self.active_tool.is_none() && !self.settings_modal.open {
            self.chat.input.paste(text);
            return;
        }
        match self.active_tool {
            Some(ToolMode::Synopsis) => match self.synopsis.focus {
                SynopsisField::Script => self.synopsis.script.paste(text),
                SynopsisField::ScriptFile => self.synopsis.script_file.paste(text),
                SynopsisField::Title => self.synopsis.title.paste(text),
                _ => {}
            },
            Some(ToolMode::Hashtags) => match self.hashtags.focus {
                HashtagField::Description => self.hashtags.description.paste(text),
                HashtagField::Script => self.hashtags.script.paste(text),
                HashtagField::ScriptFile => self.hashtags.script_file.paste(text),
                _ => {}
            },
            None => {
                if self.nav.current() == AppView::User && self.profile_edit.active {
                    if self.profile_edit.editing_avatar {
                        self.profile_edit.avatar.paste(text);
                    } else {
                        self.profile_edit.name.paste(text);
                    }
                }
            }
        }
    }

    fn handle_shell_key(&mut self, key: KeyEvent) {
        // Profile editing captures text input first.
        if self.nav.current() == AppView::User && self.profile_edit.active {
            self.handle_profile_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('1') => self.set_view(AppView::Home),
            KeyCode::Char('2') => self.set_view(AppView::Studio),
            KeyCode::Char('3') => self.set_view(AppView::User),
            KeyCode::Tab => {
                let next = (self.nav.current().index() + 1) % AppView::ORDER.len();
                self.set_view(AppView::ORDER[next]);
            }
            KeyCode::BackTab => {
                let count = AppView::ORDER.len();
                let prev = (self.nav.current().index() + count - 1) % count;
                self.set_view(AppView::ORDER[prev]);
            }
            KeyCode::Char('b') => self.chat.open = !self.chat.open,
            _ => match self.nav.current() {
                AppView::Home => self.handle_home_key(key),
                AppView::Studio => self.handle_studio_key(key),
                AppView::User => self.handle_user_key(key),
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.open_tool(ToolMode::Synopsis),
            KeyCode::Char('h') => self.open_tool(ToolMode::Hashtags),
            _ => {}
        }
    }

    fn handle_studio_key(&mut self, key: KeyEvent) {
        if self.studio.filter_open {
            self.handle_filter_panel_key(key);
            return;
        }
        let visible = self.history.filter_and_sort(&self.studio.filter).len();
        match key.code {
            KeyCode::Up => self.studio.selected = self.studio.selected.saturating_sub(1),
            KeyCode::Down if visible > 0 => {
                self.studio.selected = (self.studio.selected + 1).min(visible - 1);
            }
            KeyCode::Char('f') => self.toggle_selected_favorite(),
            KeyCode::Char('c') => self.copy_selected_content(),
            KeyCode::Char('F') => {
                self.studio.filter_open = true;
                self.studio.filter_cursor = 0;
            }
            KeyCode::Char('x') => {
                self.history.clear();
                self.studio.selected = 0;
                self.notify("History cleared");
            }
            _ => {}
        }
    }

    fn handle_filter_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('F') => self.studio.filter_open = false,
            KeyCode::Up => {
                self.studio.filter_cursor = self.studio.filter_cursor.saturating_sub(1)
            }
            KeyCode::Down => {
                self.studio.filter_cursor = (self.studio.filter_cursor + 1).min(FILTER_ROWS - 1)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                let forward = key.code != KeyCode::Left;
                match self.studio.filter_cursor {
                    0 => {
                        self.studio.filter.kind = cycle_kind(self.studio.filter.kind, forward);
                    }
                    1 => {
                        self.studio.filter.sort = cycle_sort(self.studio.filter.sort, forward);
                    }
                    2 => {
                        // Space/Enter toggles models one by one in catalog order.
                        let active = self.studio.filter.models.len();
                        if forward && active < MODELS.len() {
                            let next = MODELS[active].id;
                            self.studio.filter.toggle_model(next);
                        } else if !forward {
                            self.studio.filter.models.pop();
                        }
                    }
                    _ => {
                        self.studio.filter.favorites_only = !self.studio.filter.favorites_only;
                    }
                }
                self.studio.selected = 0;
            }
            _ => {}
        }
    }

    fn toggle_selected_favorite(&mut self) {
        let id = self
            .history
            .filter_and_sort(&self.studio.filter)
            .get(self.studio.selected)
            .map(|r| r.id.clone());
        if let Some(id) = id {
            self.history.toggle_favorite(&id);
        }
    }

    fn copy_selected_content(&mut self) {
        let content = self
            .history
            .filter_and_sort(&self.studio.filter)
            .get(self.studio.selected)
            .map(|r| r.content.clone());
        if let Some(content) = content {
            match clipboard::copy_text(&content) {
                Ok(()) => self.notify("Copied to clipboard"),
                Err(error) => self.notify(format!("Copy failed: {}", error)),
            }
        }
    }

    fn handle_user_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') => {
                self.profile_edit.active = true;
                self.profile_edit.editing_avatar = false;
                self.profile_edit
                    .name
                    .set_content(self.profile.get().name.clone());
                self.profile_edit
                    .avatar
                    .set_content(self.profile.get().avatar_url.clone());
            }
            KeyCode::Char('s') => {
                self.settings_modal.open = true;
                self.settings_modal.cursor = 0;
            }
            KeyCode::Char('l') => {
                let logged_in = self.profile.get().is_logged_in;
                self.profile.update(ProfilePatch {
                    is_logged_in: Some(!logged_in),
                    ..Default::default()
                });
            }
            KeyCode::Left => self.cycle_theme(false),
            KeyCode::Right => self.cycle_theme(true),
            _ => {}
        }
    }

    fn handle_profile_edit_key(&mut self, key: KeyEvent) {
        let edit = &mut self.profile_edit;
        match key.code {
            KeyCode::Esc => edit.active = false,
            KeyCode::Tab => edit.editing_avatar = !edit.editing_avatar,
            KeyCode::Enter => {
                let name = edit.name.content().to_string();
                let avatar = edit.avatar.content().to_string();
                self.profile.update(ProfilePatch {
                    name: Some(name),
                    avatar_url: Some(avatar),
                    ..Default::default()
                });
                self.profile_edit.active = false;
                self.notify("Profile saved");
            }
            KeyCode::Backspace => {
                if edit.editing_avatar {
                    edit.avatar.backspace();
                } else {
                    edit.name.backspace();
                }
            }
            KeyCode::Left => {
                if edit.editing_avatar {
                    edit.avatar.move_cursor_left();
                } else {
                    edit.name.move_cursor_left();
                }
            }
            KeyCode::Right => {
                if edit.editing_avatar {
                    edit.avatar.move_cursor_right();
                } else {
                    edit.name.move_cursor_right();
                }
            }
            KeyCode::Char(c) => {
                if edit.editing_avatar {
                    edit.avatar.insert_char(c);
                } else {
                    edit.name.insert_char(c);
                }
            }
            _ => {}
        }
    }

    /// Cycle the theme through the variants available under the current
    /// experimental flag.
    fn cycle_theme(&mut self, forward: bool) {
        let mut themes = vec![Theme::Light, Theme::Dark, Theme::Glass, Theme::OneUiDark];
        if self.settings.get().experimental_features {
            themes.push(Theme::Retro3d);
        }
        let current = self.settings.get().theme;
        let index = themes.iter().position(|t| *t == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % themes.len()
        } else {
            (index + themes.len() - 1) % themes.len()
        };
        self.settings.update(SettingsPatch::theme(themes[next]));
    }

    fn handle_settings_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.settings_modal.open = false,
            KeyCode::Up => {
                self.settings_modal.cursor = self.settings_modal.cursor.saturating_sub(1)
            }
            KeyCode::Down => {
                self.settings_modal.cursor =
                    (self.settings_modal.cursor + 1).min(SettingsRow::ALL.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                self.activate_settings_row(SettingsRow::ALL[self.settings_modal.cursor], key.code)
            }
            _ => {}
        }
    }

    fn activate_settings_row(&mut self, row: SettingsRow, code: KeyCode) {
        let current = self.settings.get().clone();
        let patch = match row {
            SettingsRow::Audio => SettingsPatch {
                audio_enabled: Some(!current.audio_enabled),
                ..Default::default()
            },
            SettingsRow::Slide => SettingsPatch {
                slide_enabled: Some(!current.slide_enabled),
                ..Default::default()
            },
            SettingsRow::Bouncing => SettingsPatch {
                bouncing_animation: Some(!current.bouncing_animation),
                ..Default::default()
            },
            SettingsRow::AnimationStyle => {
                let styles = crate::models::AnimationStyle::ALL;
                let index = styles
                    .iter()
                    .position(|s| *s == current.animation_style)
                    .unwrap_or(0);
                let next = if code == KeyCode::Left {
                    (index + styles.len() - 1) % styles.len()
                } else {
                    (index + 1) % styles.len()
                };
                SettingsPatch {
                    animation_style: Some(styles[next]),
                    ..Default::default()
                }
            }
            SettingsRow::Experimental => SettingsPatch {
                experimental_features: Some(!current.experimental_features),
                ..Default::default()
            },
            SettingsRow::Mode3d => {
                if !current.experimental_features {
                    return;
                }
                SettingsPatch {
                    enable_3d_mode: Some(!current.enable_3d_mode),
                    ..Default::default()
                }
            }
            SettingsRow::Neon => {
                if !current.experimental_features {
                    return;
                }
                SettingsPatch {
                    enable_neon: Some(!current.enable_neon),
                    ..Default::default()
                }
            }
            SettingsRow::Export => {
                self.export_snapshot();
                return;
            }
            SettingsRow::Import => {
                self.import_snapshot();
                return;
            }
            SettingsRow::Reset => {
                self.reset_all();
                self.settings_modal.open = false;
                self.notify("All data reset");
                return;
            }
        };
        self.settings.update(patch);
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.chat.open = false,
            KeyCode::Enter => self.send_chat_message(),
            KeyCode::Backspace => self.chat.input.backspace(),
            KeyCode::Left => self.chat.input.move_cursor_left(),
            KeyCode::Right => self.chat.input.move_cursor_right(),
            KeyCode::Char(c) => self.chat.input.insert_char(c),
            _ => {}
        }
    }

    fn handle_synopsis_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_synopsis();
            return;
        }
        if self.synopsis.result.is_some() {
            match key.code {
                // "Back to Edit" keeps the form intact for another run.
                KeyCode::Esc => self.synopsis.result = None,
                KeyCode::Char('y') => {
                    let content = self.synopsis.result.clone().unwrap_or_default();
                    match clipboard::copy_text(&content) {
                        Ok(()) => self.notify("Copied to clipboard"),
                        Err(error) => self.notify(format!("Copy failed: {}", error)),
                    }
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.close_tool(),
            KeyCode::Tab => self.synopsis.focus = self.synopsis.focus.next(),
            KeyCode::Enter => match self.synopsis.focus {
                SynopsisField::Script => self.synopsis.script.newline(),
                SynopsisField::ScriptFile => self.load_synopsis_script(),
                _ => self.submit_synopsis(),
            },
            KeyCode::Backspace => match self.synopsis.focus {
                SynopsisField::Script => self.synopsis.script.backspace(),
                SynopsisField::ScriptFile => self.synopsis.script_file.backspace(),
                SynopsisField::Title => self.synopsis.title.backspace(),
                _ => {}
            },
            KeyCode::Left => match self.synopsis.focus {
                SynopsisField::ScriptFile => self.synopsis.script_file.move_cursor_left(),
                SynopsisField::Title => self.synopsis.title.move_cursor_left(),
                SynopsisField::WordCount => {
                    self.synopsis.word_count = (self.synopsis.word_count - 50).max(100);
                }
                SynopsisField::Mode => {
                    let count = SynopsisMode::ALL.len();
                    self.synopsis.mode_index = (self.synopsis.mode_index + count - 1) % count;
                }
                SynopsisField::Model => {
                    let count = MODELS.len();
                    self.synopsis.model_index = (self.synopsis.model_index + count - 1) % count;
                }
                _ => {}
            },
            KeyCode::Right => match self.synopsis.focus {
                SynopsisField::ScriptFile => self.synopsis.script_file.move_cursor_right(),
                SynopsisField::Title => self.synopsis.title.move_cursor_right(),
                SynopsisField::WordCount => {
                    self.synopsis.word_count = (self.synopsis.word_count + 50).min(1000);
                }
                SynopsisField::Mode => {
                    self.synopsis.mode_index =
                        (self.synopsis.mode_index + 1) % SynopsisMode::ALL.len();
                }
                SynopsisField::Model => {
                    self.synopsis.model_index = (self.synopsis.model_index + 1) % MODELS.len();
                }
                _ => {}
            },
            KeyCode::Char(c) => match self.synopsis.focus {
                SynopsisField::Script => self.synopsis.script.insert_char(c),
                SynopsisField::ScriptFile => self.synopsis.script_file.insert_char(c),
                SynopsisField::Title => self.synopsis.title.insert_char(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn load_synopsis_script(&mut self) {
        let path = self.synopsis.script_file.content().to_string();
        match load_script_file(&path) {
            Ok((content, file_name)) => {
                self.synopsis.script.set_content(content);
                self.synopsis.file_name = Some(file_name);
                self.notify("Script loaded");
            }
            Err(error) => self.notify(error),
        }
    }

    fn handle_hashtag_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_hashtags();
            return;
        }
        if self.hashtags.result.is_some() {
            match key.code {
                KeyCode::Esc => self.hashtags.result = None,
                KeyCode::Char('y') => {
                    let content = self.hashtags.result.clone().unwrap_or_default();
                    match clipboard::copy_text(&content) {
                        Ok(()) => self.notify("Copied to clipboard"),
                        Err(error) => self.notify(format!("Copy failed: {}", error)),
                    }
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.close_tool(),
            KeyCode::Tab => self.hashtags.focus = self.hashtags.focus.next(),
            KeyCode::Enter => match self.hashtags.focus {
                HashtagField::Description => self.hashtags.description.newline(),
                HashtagField::Script => self.hashtags.script.newline(),
                HashtagField::ScriptFile => self.load_hashtag_script(),
                _ => self.submit_hashtags(),
            },
            KeyCode::Backspace => match self.hashtags.focus {
                HashtagField::Description => self.hashtags.description.backspace(),
                HashtagField::Script => self.hashtags.script.backspace(),
                HashtagField::ScriptFile => self.hashtags.script_file.backspace(),
                _ => {}
            },
            KeyCode::Left => match self.hashtags.focus {
                HashtagField::ScriptFile => self.hashtags.script_file.move_cursor_left(),
                HashtagField::Amount => {
                    self.hashtags.amount = (self.hashtags.amount - 5).max(10);
                }
                HashtagField::Model => {
                    let count = MODELS.len();
                    self.hashtags.model_index = (self.hashtags.model_index + count - 1) % count;
                }
                _ => {}
            },
            KeyCode::Right => match self.hashtags.focus {
                HashtagField::ScriptFile => self.hashtags.script_file.move_cursor_right(),
                HashtagField::Amount => {
                    self.hashtags.amount = (self.hashtags.amount + 5).min(100);
                }
                HashtagField::Model => {
                    self.hashtags.model_index = (self.hashtags.model_index + 1) % MODELS.len();
                }
                _ => {}
            },
            KeyCode::Char(c) => match self.hashtags.focus {
                HashtagField::Description => self.hashtags.description.insert_char(c),
                HashtagField::Script => self.hashtags.script.insert_char(c),
                HashtagField::ScriptFile => self.hashtags.script_file.insert_char(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn load_hashtag_script(&mut self) {
        let path = self.hashtags.script_file.content().to_string();
        match load_script_file(&path) {
            Ok((content, file_name)) => {
                self.hashtags.script.set_content(content);
                self.hashtags.file_name = Some(file_name);
                self.notify("Script loaded");
            }
            Err(error) => self.notify(error),
        }
    }

    // =========================================================================
    // Mouse handling (swipe gestures, bottom nav)
    // =========================================================================

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Gestures only apply to the navigation shell.
        if self.active_tool.is_some() || self.settings_modal.open {
            return;
        }
        let swipe_enabled = self.settings.get().slide_enabled;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row + 1 >= self.terminal_height {
                    self.handle_nav_click(mouse.column);
                } else if swipe_enabled {
                    self.nav.drag_start(mouse.column);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if swipe_enabled => {
                self.nav.drag_move(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if swipe_enabled {
                    let style = self.settings.get().animation_style;
                    if self
                        .nav
                        .drag_release(style, self.terminal_width, self.tick_count)
                        .is_some()
                    {
                        self.needs_redraw = true;
                    }
                } else {
                    self.nav.cancel_drag();
                }
            }
            _ => {}
        }
    }

    /// Bottom-navigation taps: the bar splits into three equal slots.
    fn handle_nav_click(&mut self, column: u16) {
        let slot = self.terminal_width / 3;
        let target = if column < slot {
            AppView::Home
        } else if column < slot * 2 {
            AppView::Studio
        } else {
            AppView::User
        };
        self.set_view(target);
    }
}

/// Read a script file for a tool form. Returns content and basename.
fn load_script_file(path: &str) -> Result<(String, String), String> {
    if path.is_empty() {
        return Err("Enter a script file path first".to_string());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {}", path, e))?;
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok((content, file_name))
}

fn cycle_kind(kind: KindFilter, forward: bool) -> KindFilter {
    let order = [KindFilter::All, KindFilter::Synopsis, KindFilter::Hashtags];
    let index = order.iter().position(|k| *k == kind).unwrap_or(0);
    let next = if forward {
        (index + 1) % order.len()
    } else {
        (index + order.len() - 1) % order.len()
    };
    order[next]
}

fn cycle_sort(sort: SortKey, forward: bool) -> SortKey {
    let order = [SortKey::DateDesc, SortKey::DateAsc, SortKey::LengthDesc];
    let index = order.iter().position(|s| *s == sort).unwrap_or(0);
    let next = if forward {
        (index + 1) % order.len()
    } else {
        (index + order.len() - 1) % order.len()
    };
    order[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationParams;

    fn generation(kind: RecordKind, content: &str, model: &str) -> Generation {
        Generation {
            kind,
            content: content.to_string(),
            params: GenerationParams {
                model_id: model.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_render_mode_prefers_tool_overlay() {
        let mut app = App::new(None);
        app.set_view(AppView::Studio);
        app.open_tool(ToolMode::Hashtags);
        assert_eq!(app.render_mode(), RenderMode::Tool(ToolMode::Hashtags));

        // Closing the tool restores the untouched view.
        app.close_tool();
        assert_eq!(app.render_mode(), RenderMode::Shell(AppView::Studio));
    }

    #[test]
    fn test_matching_completion_is_recorded() {
        let mut app = App::new(None);
        app.open_tool(ToolMode::Synopsis);
        app.synopsis.pending = Some(7);

        app.handle_message(AppMessage::GenerationComplete {
            request_id: 7,
            generation: generation(RecordKind::Synopsis, "result text", "gemini-3-pro-preview"),
        });

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.synopsis.result.as_deref(), Some("result text"));
        assert_eq!(app.synopsis.pending, None);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut app = App::new(None);
        app.open_tool(ToolMode::Synopsis);
        app.synopsis.pending = Some(1);
        app.close_tool();

        app.handle_message(AppMessage::GenerationComplete {
            request_id: 1,
            generation: generation(RecordKind::Synopsis, "late", STABLE_MODEL),
        });

        assert_eq!(app.history.len(), 0);
        assert_eq!(app.synopsis.result, None);
    }

    #[test]
    fn test_failure_keeps_inputs_and_sets_notice() {
        let mut app = App::new(None);
        app.open_tool(ToolMode::Synopsis);
        app.synopsis.script.paste("my script");
        app.synopsis.pending = Some(3);

        app.handle_message(AppMessage::GenerationFailed {
            request_id: 3,
            kind: RecordKind::Synopsis,
            error: "API error (500): boom".to_string(),
        });

        assert!(app.synopsis.error.as_deref().unwrap().contains("boom"));
        assert_eq!(app.synopsis.script.content(), "my script");
        assert_eq!(app.history.len(), 0);
    }

    #[test]
    fn test_reset_all_returns_home() {
        let mut app = App::new(None);
        app.set_view(AppView::User);
        app.history.add(
            RecordKind::Synopsis,
            "text".to_string(),
            GenerationParams::default(),
        );
        app.profile.update(ProfilePatch {
            name: Some("Alex".to_string()),
            ..Default::default()
        });

        app.reset_all();

        assert_eq!(app.nav.current(), AppView::Home);
        assert!(app.history.is_empty());
        assert_eq!(app.profile.get().name, "Creator");
    }

    #[test]
    fn test_shell_keys_jump_views() {
        let mut app = App::new(None);
        app.handle_key(KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(app.nav.current(), AppView::Studio);
        app.handle_key(KeyEvent::from(KeyCode::Char('3')));
        assert_eq!(app.nav.current(), AppView::User);
        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        assert_eq!(app.nav.current(), AppView::Home);
    }

    #[test]
    fn test_swipe_disabled_when_slide_off() {
        let mut app = App::new(None);
        app.settings.update(SettingsPatch {
            slide_enabled: Some(false),
            ..Default::default()
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 100,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.nav.current(), AppView::Home);
    }

    #[test]
    fn test_word_count_slider_stays_in_range() {
        let mut app = App::new(None);
        app.open_tool(ToolMode::Synopsis);
        app.synopsis.focus = SynopsisField::WordCount;
        for _ in 0..50 {
            app.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(app.synopsis.word_count, 100);
        for _ in 0..50 {
            app.handle_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(app.synopsis.word_count, 1000);
    }
}

//! Generation history: an ordered, newest-first collection of past
//! generations with favorite flags.
//!
//! The store exclusively owns its records; callers refer to entries by id.

use serde::{Deserialize, Serialize};

use crate::models::{GenerationParams, GenerationRecord, RecordKind};

/// Favorited outputs fed back into prompts as style examples.
pub const MAX_FAVORITE_EXAMPLES: usize = 3;

/// Which kinds a history read should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Synopsis,
    Hashtags,
}

impl KindFilter {
    fn matches(&self, kind: RecordKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Synopsis => kind == RecordKind::Synopsis,
            KindFilter::Hashtags => kind == RecordKind::Hashtags,
        }
    }
}

/// Sort order for history reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    LengthDesc,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest",
            SortKey::DateAsc => "Oldest",
            SortKey::LengthDesc => "Word Count",
        }
    }
}

/// Read-side filter used by the Studio view. Pure; never mutates the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub kind: KindFilter,
    pub favorites_only: bool,
    /// Allowed model ids recovered from each entry's params; empty means
    /// no model filter.
    pub models: Vec<String>,
    pub sort: SortKey,
}

impl HistoryFilter {
    pub fn is_active(&self) -> bool {
        self.kind != KindFilter::All || self.favorites_only || !self.models.is_empty()
    }

    pub fn toggle_model(&mut self, model_id: &str) {
        if let Some(pos) = self.models.iter().position(|m| m == model_id) {
            self.models.remove(pos);
        } else {
            self.models.push(model_id.to_string());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<GenerationRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new record with a fresh id and timestamp, keeping
    /// most-recent-first order. Returns the stored entry's id.
    pub fn add(&mut self, kind: RecordKind, content: String, params: GenerationParams) -> String {
        let record = GenerationRecord::new(kind, content, params);
        let id = record.id.clone();
        self.records.insert(0, record);
        id
    }

    /// Flip the favorite flag on the matching entry; no-op when absent.
    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.is_favorite = !record.is_favorite;
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&GenerationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace the whole sequence (snapshot import).
    pub fn restore(&mut self, records: Vec<GenerationRecord>) {
        self.records = records;
    }

    pub fn has_favorites(&self, kind: RecordKind) -> bool {
        self.records
            .iter()
            .any(|r| r.kind == kind && r.is_favorite)
    }

    /// Up to [`MAX_FAVORITE_EXAMPLES`] favorited contents of a kind, in
    /// history order. No dedup, no recency weighting.
    pub fn favorite_examples(&self, kind: RecordKind) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.kind == kind && r.is_favorite)
            .map(|r| r.content.clone())
            .take(MAX_FAVORITE_EXAMPLES)
            .collect()
    }

    /// Pure read used by the Studio view: filter by kind, favorites and
    /// model set, then sort.
    pub fn filter_and_sort(&self, filter: &HistoryFilter) -> Vec<&GenerationRecord> {
        let mut result: Vec<&GenerationRecord> = self
            .records
            .iter()
            .filter(|r| filter.kind.matches(r.kind))
            .filter(|r| !filter.favorites_only || r.is_favorite)
            .filter(|r| {
                filter.models.is_empty() || filter.models.iter().any(|m| *m == r.params.model_id)
            })
            .collect();

        match filter.sort {
            SortKey::DateDesc => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::DateAsc => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::LengthDesc => result.sort_by(|a, b| b.content.len().cmp(&a.content.len())),
        }

        result
    }
}

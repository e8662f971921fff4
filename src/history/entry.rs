use crate::mood::{ClassificationResult, MoodCategory, BILINGUAL, VIETNAMESE};
use serde::{Deserialize, Serialize};

/// A persisted scan. Never mutated after creation.
///
/// Older records may lack `id`, `label`, `borderColor` or `emoji`; those
/// fields default to empty and are filled in by [`HistoryEntry::fill_missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: String,
    pub mood: MoodCategory,
    #[serde(default)]
    pub label: String,
    pub quote: String,
    /// Unix milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub emoji: String,
}

impl HistoryEntry {
    pub fn from_result(id: String, result: &ClassificationResult) -> Self {
        Self {
            id,
            mood: result.mood,
            label: result.label.clone(),
            quote: result.quote.clone(),
            timestamp: result.timestamp,
            color: result.color.clone(),
            border_color: result.border_color.clone(),
            emoji: result.emoji.clone(),
        }
    }

    /// Complete a record loaded from an older blob. The bilingual page
    /// stored no label or emoji; the Vietnamese page stored no id, label or
    /// border colour, so a missing border colour selects its lexicon.
    /// `position` is the record's index in the blob and keeps made-up ids
    /// unique.
    pub fn fill_missing(&mut self, position: usize) {
        let lexicon = if self.border_color.is_empty() {
            &VIETNAMESE
        } else {
            &BILINGUAL
        };
        let profile = lexicon.profile(self.mood);

        if self.id.is_empty() {
            self.id = format!("scan_{}_legacy{}", self.timestamp, position);
        }
        for (field, fallback) in [
            (&mut self.label, profile.label),
            (&mut self.color, profile.color),
            (&mut self.border_color, profile.border_color),
            (&mut self.emoji, profile.emoji),
        ] {
            if field.is_empty() {
                *field = fallback.to_string();
            }
        }
    }
}

/// Limit on how many entries the store retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLimit {
    Bounded(usize),
    Unbounded,
}

impl HistoryLimit {
    pub const DEFAULT_MAX: usize = 20;

    /// A store that keeps nothing would accept scans and drop them at
    /// once, so a zero bound is raised to one.
    pub fn bounded(max: usize) -> Self {
        HistoryLimit::Bounded(max.max(1))
    }

    /// Same limit with a zero bound raised to one.
    pub fn normalized(self) -> Self {
        match self {
            HistoryLimit::Bounded(max) => Self::bounded(max),
            HistoryLimit::Unbounded => HistoryLimit::Unbounded,
        }
    }

    /// Drop the oldest entries (the tail) beyond the bound.
    pub fn apply<T>(self, entries: &mut Vec<T>) {
        if let HistoryLimit::Bounded(max) = self {
            entries.truncate(max);
        }
    }
}

impl Default for HistoryLimit {
    fn default() -> Self {
        HistoryLimit::Bounded(Self::DEFAULT_MAX)
    }
}

impl From<Option<usize>> for HistoryLimit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(HistoryLimit::Unbounded, HistoryLimit::bounded)
    }
}

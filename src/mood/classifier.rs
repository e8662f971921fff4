//! Mood classification from keyword tallies.
//!
//! Fast, no model call: the folded input is checked for every keyword of
//! every category, the active [`MatchPolicy`] picks exactly one winner, and
//! a quote is drawn from the winner's profile through the injected
//! [`QuoteSelector`].

use super::category::{MoodCategory, Valence};
use super::lexicon::Lexicon;
use super::selector::QuoteSelector;
use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Neutral starting point of the aggregate score.
pub const SCORE_BASELINE: i32 = 50;
/// Score change per matched keyword.
pub const SCORE_STEP: i32 = 10;

/// How a winner is chosen when the text matches several categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Highest tally wins; a shared maximum or no match at all goes to
    /// the default category.
    #[default]
    Tally,
    /// First non-default category (in priority order) with any match wins.
    FirstHit,
}

/// Per-category count of distinct matched keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodTally([usize; MoodCategory::COUNT]);

impl MoodTally {
    pub fn get(&self, mood: MoodCategory) -> usize {
        self.0[mood.index()]
    }

    fn bump(&mut self, mood: MoodCategory) {
        self.0[mood.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Sum of tallies with the given valence.
    pub fn by_valence(&self, valence: Valence) -> usize {
        MoodCategory::ALL
            .iter()
            .filter(|m| m.valence() == valence)
            .map(|&m| self.get(m))
            .sum()
    }
}

impl MatchPolicy {
    pub fn resolve(self, tally: &MoodTally) -> MoodCategory {
        match self {
            MatchPolicy::Tally => {
                let max = MoodCategory::ALL
                    .iter()
                    .map(|&m| tally.get(m))
                    .max()
                    .unwrap_or(0);
                if max == 0 {
                    return MoodCategory::DEFAULT;
                }
                let mut leaders = MoodCategory::ALL.iter().filter(|&&m| tally.get(m) == max);
                match (leaders.next(), leaders.next()) {
                    (Some(&only), None) => only,
                    _ => MoodCategory::DEFAULT,
                }
            }
            MatchPolicy::FirstHit => MoodCategory::ALL
                .iter()
                .copied()
                .filter(|m| !m.is_default())
                .find(|&m| tally.get(m) > 0)
                .unwrap_or(MoodCategory::DEFAULT),
        }
    }
}

/// Aggregate score in `[0, 100]`, independent of the winning label.
pub fn aggregate_score(tally: &MoodTally) -> u8 {
    let positive = tally.by_valence(Valence::Positive) as i32;
    let negative = tally.by_valence(Valence::Negative) as i32;
    let raw = SCORE_BASELINE + positive * SCORE_STEP - negative * SCORE_STEP;
    raw.clamp(0, 100) as u8
}

/// Outcome of one scan. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub mood: MoodCategory,
    /// Display label from the active lexicon.
    pub label: String,
    pub quote: String,
    /// Present only when the lexicon scores.
    pub score: Option<u8>,
    /// Matched keywords, deduplicated, in first-match order.
    pub keywords: Vec<String>,
    pub color: String,
    pub border_color: String,
    pub emoji: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

/// Keyword classifier over one lexicon and policy.
#[derive(Clone)]
pub struct Classifier {
    lexicon: &'static Lexicon,
    policy: MatchPolicy,
    clock: Arc<dyn Clock>,
}

impl Classifier {
    pub fn new(lexicon: &'static Lexicon, policy: MatchPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            lexicon,
            policy,
            clock,
        }
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Count matches per category and collect the matched keywords.
    pub fn tally(&self, text: &str) -> (MoodTally, Vec<String>) {
        let lower = text.to_lowercase();
        let mut tally = MoodTally::default();
        let mut found: Vec<String> = Vec::new();

        for (mood, profile) in self.lexicon.profiles() {
            for kw in profile.keywords.iter().filter(|kw| lower.contains(*kw)) {
                tally.bump(mood);
                if !found.iter().any(|f| f == kw) {
                    found.push((*kw).to_string());
                }
            }
        }

        (tally, found)
    }

    /// Classify `text`. Total over all inputs: empty or unmatched text
    /// lands on the default category.
    pub fn classify<S>(&self, text: &str, selector: &mut S) -> ClassificationResult
    where
        S: QuoteSelector + ?Sized,
    {
        let (tally, keywords) = self.tally(text);
        let mood = self.policy.resolve(&tally);
        let profile = self.lexicon.profile(mood);

        let last = profile.quotes.len().saturating_sub(1);
        let quote = profile
            .quotes
            .get(selector.select_index(profile.quotes.len()).min(last))
            .copied()
            .unwrap_or_default();

        let score = self.lexicon.scoring.then(|| aggregate_score(&tally));

        tracing::debug!(
            mood = %mood,
            matches = tally.total(),
            policy = ?self.policy,
            "Classified scan text"
        );

        ClassificationResult {
            mood,
            label: profile.label.to_string(),
            quote: quote.to_string(),
            score,
            keywords,
            color: profile.color.to_string(),
            border_color: profile.border_color.to_string(),
            emoji: profile.emoji.to_string(),
            timestamp: self.clock.now_ms(),
        }
    }
}

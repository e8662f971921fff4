use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of moods a scan can land on.
///
/// Declaration order is the priority order used when walking categories.
/// Written as a lowercase tag; the capitalized names older front-ends
/// stored (including Vietnamese `Neutral` and `Excited`) are still read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    #[serde(alias = "Happy")]
    Happy,
    #[serde(alias = "Sad")]
    Sad,
    #[serde(alias = "Angry")]
    Angry,
    #[serde(alias = "Anxious")]
    Anxious,
    #[serde(alias = "Chill", alias = "Neutral", alias = "neutral")]
    Chill,
    #[serde(alias = "Energized", alias = "Excited", alias = "excited")]
    Energized,
}

/// Whether a mood pulls the aggregate score up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence {
    Positive,
    Negative,
}

impl MoodCategory {
    pub const COUNT: usize = 6;

    /// All categories in priority order.
    pub const ALL: [MoodCategory; Self::COUNT] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Angry,
        MoodCategory::Anxious,
        MoodCategory::Chill,
        MoodCategory::Energized,
    ];

    /// Category that absorbs empty, unmatched and tied input.
    pub const DEFAULT: MoodCategory = MoodCategory::Chill;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    pub fn valence(self) -> Valence {
        match self {
            MoodCategory::Happy | MoodCategory::Chill | MoodCategory::Energized => {
                Valence::Positive
            }
            MoodCategory::Sad | MoodCategory::Angry | MoodCategory::Anxious => Valence::Negative,
        }
    }

    /// Stable machine tag, also used as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Sad => "sad",
            MoodCategory::Angry => "angry",
            MoodCategory::Anxious => "anxious",
            MoodCategory::Chill => "chill",
            MoodCategory::Energized => "energized",
        }
    }
}

impl Default for MoodCategory {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

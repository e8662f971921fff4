//! Mood lexicons: the keyword, colour and quote tables behind a scan.
//!
//! Two tables ship with the scanner: a bilingual English/Vietnamese one
//! (scored, with glow colours) and a Vietnamese-only one (unscored). Both
//! are plain statics; nothing is built at runtime.

use super::category::MoodCategory;
use serde::{Deserialize, Serialize};

/// Immutable metadata for one mood within a lexicon.
#[derive(Debug)]
pub struct MoodProfile {
    /// Display label shown to the user.
    pub label: &'static str,
    /// Lowercase trigger strings, matched as substrings.
    pub keywords: &'static [&'static str],
    /// Text colour token (presentation class).
    pub color: &'static str,
    /// Border / glow colour token.
    pub border_color: &'static str,
    pub emoji: &'static str,
    /// Never empty.
    pub quotes: &'static [&'static str],
}

/// A complete mood table: one profile per [`MoodCategory`].
#[derive(Debug)]
pub struct Lexicon {
    pub name: &'static str,
    /// Whether scans under this lexicon carry an aggregate score.
    pub scoring: bool,
    profiles: [MoodProfile; MoodCategory::COUNT],
}

impl Lexicon {
    pub fn profile(&self, mood: MoodCategory) -> &MoodProfile {
        &self.profiles[mood.index()]
    }

    /// Iterate `(category, profile)` pairs in priority order.
    pub fn profiles(&self) -> impl Iterator<Item = (MoodCategory, &MoodProfile)> {
        MoodCategory::ALL
            .iter()
            .map(move |&mood| (mood, self.profile(mood)))
    }
}

/// Selects one of the built-in lexicons by name (config-friendly).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconKind {
    #[default]
    Bilingual,
    Vietnamese,
}

impl LexiconKind {
    pub fn lexicon(self) -> &'static Lexicon {
        match self {
            LexiconKind::Bilingual => &BILINGUAL,
            LexiconKind::Vietnamese => &VIETNAMESE,
        }
    }
}

// ── Bilingual (English + Vietnamese) ───────────────────────

/// `"excited"` lives under Happy here, not Energized.
pub static BILINGUAL: Lexicon = Lexicon {
    name: "bilingual",
    scoring: true,
    profiles: [
        MoodProfile {
            label: "Happy",
            keywords: &[
                "happy",
                "joy",
                "joyful",
                "excited",
                "love",
                "great",
                "awesome",
                "amazing",
                "wonderful",
                "fantastic",
                "vui",
                "hạnh phúc",
                "tuyệt",
                "thích",
                "yêu",
                "tốt",
                "xuất sắc",
            ],
            color: "text-yellow-400",
            border_color: "rgba(250, 204, 21, 0.8)",
            emoji: "😄",
            quotes: &[
                "Keep that energy! You're glowing! ✨",
                "Your vibe is immaculate! Keep spreading joy! 🌟",
                "Living your best life! We love to see it! 💖",
                "Main character energy right here! 🎬",
            ],
        },
        MoodProfile {
            label: "Sad",
            keywords: &[
                "sad",
                "depressed",
                "down",
                "unhappy",
                "miserable",
                "lonely",
                "buồn",
                "chán",
                "cô đơn",
                "đau khổ",
                "tệ",
            ],
            color: "text-blue-400",
            border_color: "rgba(96, 165, 250, 0.8)",
            emoji: "😔",
            quotes: &[
                "It's okay not to be okay. Take your time. 💙",
                "Tomorrow is a fresh start. Hang in there! 🌅",
                "Your feelings are valid. Be kind to yourself. 🫂",
                "Even the darkest night will end. You got this. 🌙",
            ],
        },
        MoodProfile {
            label: "Angry",
            keywords: &[
                "angry",
                "mad",
                "furious",
                "annoyed",
                "frustrated",
                "hate",
                "tức",
                "giận",
                "ghét",
                "bực",
                "phẫn nộ",
            ],
            color: "text-red-400",
            border_color: "rgba(248, 113, 113, 0.8)",
            emoji: "😡",
            quotes: &[
                "Channel that energy into something powerful! 💪",
                "It's okay to feel angry. Let it out safely. 🔥",
                "Deep breaths. You're stronger than this moment. 🌊",
                "Sometimes anger is just passion misdirected. ⚡",
            ],
        },
        MoodProfile {
            label: "Anxious",
            keywords: &[
                "anxious",
                "worried",
                "nervous",
                "stressed",
                "overwhelmed",
                "panic",
                "lo lắng",
                "căng thẳng",
                "stress",
                "mệt mỏi",
                "áp lực",
            ],
            color: "text-orange-400",
            border_color: "rgba(251, 146, 60, 0.8)",
            emoji: "😰",
            quotes: &[
                "One breath at a time. You're doing great. 🌬️",
                "It's okay to not have all the answers right now. 🧘",
                "You've survived 100% of your worst days. Keep going. 💪",
                "Ground yourself. You're safe right here, right now. 🌿",
            ],
        },
        MoodProfile {
            label: "Chill",
            keywords: &[
                "chill",
                "relaxed",
                "calm",
                "peaceful",
                "zen",
                "okay",
                "fine",
                "thư giãn",
                "bình thường",
                "ổn",
                "yên tĩnh",
            ],
            color: "text-green-400",
            border_color: "rgba(74, 222, 128, 0.8)",
            emoji: "😌",
            quotes: &[
                "Just vibing? That's totally valid! ✌️",
                "Neutral is a mood too. Stay hydrated! 💧",
                "Sometimes being okay is enough. Keep coasting! 🌊",
                "Balance is key. You're doing fine! ⚖️",
            ],
        },
        MoodProfile {
            label: "Energized",
            keywords: &[
                "energized",
                "pumped",
                "motivated",
                "inspired",
                "ready",
                "confident",
                "năng lượng",
                "nhiệt huyết",
                "sẵn sàng",
                "tự tin",
            ],
            color: "text-purple-400",
            border_color: "rgba(192, 132, 252, 0.8)",
            emoji: "⚡",
            quotes: &[
                "That's the energy we need! Let's go! 🚀",
                "Ride that wave! You're unstoppable! 🌊",
                "Channel that power into your goals! ⚡",
                "Keep that momentum going! You're on fire! 🔥",
            ],
        },
    ],
};

// ── Vietnamese ─────────────────────────────────────────────

/// Unscored table. Its default mood is labelled "Neutral" and the
/// energized mood "Excited".
pub static VIETNAMESE: Lexicon = Lexicon {
    name: "vietnamese",
    scoring: false,
    profiles: [
        MoodProfile {
            label: "Happy",
            keywords: &["vui", "hạnh phúc", "yêu đời", "tuyệt vời", "sướng"],
            color: "text-yellow-500",
            border_color: "rgba(234, 179, 8, 0.8)",
            emoji: "😄",
            quotes: &[
                "Hạnh phúc là hành trình, không phải đích đến.",
                "Hãy lan tỏa nụ cười của bạn!",
                "Hôm nay là một ngày tuyệt vời.",
            ],
        },
        MoodProfile {
            label: "Sad",
            keywords: &["buồn", "cô đơn", "chán", "thất vọng", "khóc"],
            color: "text-blue-500",
            border_color: "rgba(59, 130, 246, 0.8)",
            emoji: "😔",
            quotes: &[
                "Sau cơn mưa trời lại sáng.",
                "Mọi chuyện rồi sẽ ổn thôi.",
                "Hãy cho bản thân thời gian để chữa lành.",
            ],
        },
        MoodProfile {
            label: "Angry",
            keywords: &["tức", "bực", "khó chịu", "điên"],
            color: "text-red-500",
            border_color: "rgba(239, 68, 68, 0.8)",
            emoji: "😡",
            quotes: &[
                "Hít thở sâu và đếm đến 10.",
                "Giận dữ là tự trừng phạt bản thân vì lỗi của người khác.",
                "Bình tĩnh là sức mạnh.",
            ],
        },
        MoodProfile {
            label: "Anxious",
            keywords: &["lo", "sợ", "hồi hộp", "stress"],
            color: "text-purple-500",
            border_color: "rgba(168, 85, 247, 0.8)",
            emoji: "😰",
            quotes: &[
                "Đừng lo lắng về ngày mai.",
                "Bạn mạnh mẽ hơn bạn nghĩ.",
                "Tập trung vào hơi thở của bạn.",
            ],
        },
        MoodProfile {
            label: "Neutral",
            keywords: &[],
            color: "text-gray-500",
            border_color: "rgba(107, 114, 128, 0.8)",
            emoji: "😐",
            quotes: &[
                "Bình yên là hạnh phúc.",
                "Một ngày bình thường cũng là một ngày tốt.",
                "Hãy tận hưởng sự cân bằng.",
            ],
        },
        MoodProfile {
            label: "Excited",
            keywords: &["hóng", "mong", "sung"],
            color: "text-orange-500",
            border_color: "rgba(249, 115, 22, 0.8)",
            emoji: "🤩",
            quotes: &[
                "Năng lượng của bạn thật tuyệt vời!",
                "Hãy tận hưởng sự hào hứng này.",
                "Điều tuyệt vời đang chờ đón bạn.",
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lexicons() -> [&'static Lexicon; 2] {
        [LexiconKind::Bilingual.lexicon(), LexiconKind::Vietnamese.lexicon()]
    }

    #[test]
    fn every_profile_has_quotes() {
        for lexicon in all_lexicons() {
            for (mood, profile) in lexicon.profiles() {
                assert!(
                    !profile.quotes.is_empty(),
                    "{} / {} has no quotes",
                    lexicon.name,
                    mood
                );
            }
        }
    }

    #[test]
    fn every_non_default_profile_has_keywords() {
        for lexicon in all_lexicons() {
            for (mood, profile) in lexicon.profiles().filter(|(m, _)| !m.is_default()) {
                assert!(
                    !profile.keywords.is_empty(),
                    "{} / {} has no keywords",
                    lexicon.name,
                    mood
                );
            }
        }
    }

    #[test]
    fn keywords_are_already_lowercase() {
        for lexicon in all_lexicons() {
            for (_, profile) in lexicon.profiles() {
                for kw in profile.keywords {
                    assert_eq!(*kw, kw.to_lowercase(), "keyword {kw:?} is not folded");
                }
            }
        }
    }

    #[test]
    fn excited_is_a_happy_keyword_in_bilingual() {
        assert!(BILINGUAL
            .profile(MoodCategory::Happy)
            .keywords
            .contains(&"excited"));
        assert!(!BILINGUAL
            .profile(MoodCategory::Energized)
            .keywords
            .contains(&"excited"));
    }

    #[test]
    fn vietnamese_labels_differ_from_tags() {
        assert_eq!(VIETNAMESE.profile(MoodCategory::Chill).label, "Neutral");
        assert_eq!(VIETNAMESE.profile(MoodCategory::Energized).label, "Excited");
    }

    #[test]
    fn lexicon_kind_deserializes_snake_case() {
        let kind: LexiconKind = serde_json::from_str("\"vietnamese\"").unwrap();
        assert_eq!(kind, LexiconKind::Vietnamese);
        assert_eq!(LexiconKind::default(), LexiconKind::Bilingual);
    }
}

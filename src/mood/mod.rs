pub mod category;
pub mod classifier;
pub mod lexicon;
pub mod selector;

pub use category::{MoodCategory, Valence};
pub use classifier::{aggregate_score, ClassificationResult, Classifier, MatchPolicy, MoodTally};
pub use lexicon::{Lexicon, LexiconKind, MoodProfile, BILINGUAL, VIETNAMESE};
pub use selector::{FixedSelector, QuoteSelector, RandomSelector};

pub mod sequence;
pub mod enumerate;
pub mod score;
pub mod combination;

pub use combination::{search, search_with, MatchRecord, SearchOutcome, SearchParams};
pub use enumerate::{enumerate, enumerate_with_stats, EnumParams, EnumerationStats};
pub use score::{score, Score, WeightTriple, DEFAULT_CEILING};
pub use sequence::{LabelString, MergePolicy, Path, SequenceMap};

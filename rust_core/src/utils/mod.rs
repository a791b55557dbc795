pub mod matching;
pub mod money;

pub use matching::{partial_ratio, passes_similarity, MIN_SIMILARITY};
pub use money::round2;

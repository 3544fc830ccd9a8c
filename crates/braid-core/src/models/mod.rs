mod candidate;
mod fusion_report;
mod fusion_result;
mod ranked_item;
mod raw_result;
mod weight_pair;

pub use candidate::{Candidate, Source};
pub use fusion_report::{FusionReport, SourceCounts};
pub use fusion_result::FusionResult;
pub use ranked_item::RankedItem;
pub use raw_result::{RawResult, ScoreKind};
pub use weight_pair::{QueryClass, WeightPair};

pub mod engine;
pub mod facts;
pub mod keywords;
pub mod rules;

pub use engine::{personalize, PersonalizationEngine, DEFAULT_BASE_GRADE};
pub use facts::NutritionFacts;
pub use keywords::{KeywordTables, DEFAULT_KEYWORDS};
pub use rules::{find_matched_ingredient, flag_weight, personalized_score};

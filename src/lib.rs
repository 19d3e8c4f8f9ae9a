pub mod classify;
pub mod cli;
pub mod compare;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod interface;
pub mod models;
pub mod personalize;
pub mod scoring;

pub use classify::{is_beverage, is_water};
pub use compare::{compare, Comparison, Winner};
pub use error::{GradeError, Result};
pub use evaluation::{evaluate, score_product, Evaluation};
pub use models::{
    Flag, FlagType, Grade, NutrientMap, PersonalizedAnalysis, Product, ScoreReport, UserProfile,
};
pub use personalize::{personalize, PersonalizationEngine};
pub use scoring::{calculate_score, normalize, score};

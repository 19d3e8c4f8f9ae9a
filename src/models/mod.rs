pub mod flag;
pub mod grade;
pub mod nutrients;
pub mod product;
pub mod profile;
pub mod report;

pub use flag::{Flag, FlagType, PersonalizedAnalysis};
pub use grade::{Grade, ProductType};
pub use nutrients::{Nutrient, NutrientMap, RawNutriments};
pub use product::Product;
pub use profile::{DietType, HealthCondition, HealthGoal, UserProfile};
pub use report::{Factors, ScoreBreakdown, ScoreReport};

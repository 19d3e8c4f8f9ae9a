pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, fuzzy_allergen_candidates, prompt_yes_no};
pub use render::{
    display_batch_summary, display_comparison, display_evaluation, display_personalization,
    display_score_report,
};

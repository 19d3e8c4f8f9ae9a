use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{DietType, HealthCondition, HealthGoal, UserProfile};
use crate::personalize::KeywordTables;

/// Minimum similarity for suggesting a known allergen.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Known allergens ranked by similarity to `input`, best first.
pub fn fuzzy_allergen_candidates<'a>(input: &str, known: &[&'a str]) -> Vec<(&'a str, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&str, f64)> = known
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

fn prompt_allergens(known: &[&str]) -> Result<Vec<String>> {
    let picked = MultiSelect::new()
        .with_prompt("Select your allergens (space to toggle, enter to confirm)")
        .items(known)
        .interact()?;

    Ok(picked.into_iter().map(|i| known[i].to_string()).collect())
}

fn prompt_conditions() -> Result<Vec<HealthCondition>> {
    let known = HealthCondition::KNOWN;
    let labels: Vec<&str> = known.iter().map(|c| c.label()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select any health conditions")
        .items(&labels)
        .interact()?;

    Ok(picked.into_iter().map(|i| known[i].clone()).collect())
}

fn prompt_diet() -> Result<DietType> {
    let labels: Vec<&str> = DietType::ALL.into_iter().map(DietType::label).collect();
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(DietType::ALL[selection])
}

fn prompt_goal() -> Result<Option<HealthGoal>> {
    let known = HealthGoal::KNOWN;
    let mut labels: Vec<&str> = known.iter().map(|g| g.label()).collect();
    labels.push("No specific goal");

    let selection = Select::new()
        .with_prompt("Primary health goal")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    Ok(known.get(selection).cloned())
}

/// Free-text extras. Anything close to a known allergen is offered as that
/// allergen; the rest becomes a custom need.
fn prompt_extras(known: &[&str], profile: &mut UserProfile) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("Any other allergy or dietary need? (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(exact) = known.iter().find(|k| k.eq_ignore_ascii_case(input)) {
            profile.allergens.insert(exact.to_string());
            println!("Added allergen: {}", exact);
            continue;
        }

        let candidates = fuzzy_allergen_candidates(input, known);
        let chosen = match candidates.as_slice() {
            [] => None,
            [(name, _)] => Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?
                .then_some(*name),
            many => {
                let mut options: Vec<&str> = many.iter().take(5).map(|(n, _)| *n).collect();
                options.push("None of these");

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                (selection < options.len() - 1).then(|| options[selection])
            }
        };

        match chosen {
            Some(name) => {
                profile.allergens.insert(name.to_string());
                println!("Added allergen: {}", name);
            }
            None => {
                profile.custom_needs.push(input.to_string());
                println!("Added custom need: {}", input);
            }
        }
    }

    Ok(())
}

/// Build a profile interactively.
pub fn collect_profile(tables: &KeywordTables) -> Result<UserProfile> {
    let known = tables.allergen_names();

    let mut profile = UserProfile {
        allergens: prompt_allergens(&known)?.into_iter().collect(),
        conditions: prompt_conditions()?.into_iter().collect(),
        diet_type: Some(prompt_diet()?),
        primary_goal: prompt_goal()?,
        custom_needs: Vec::new(),
    };

    prompt_extras(&known, &mut profile)?;
    Ok(profile)
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

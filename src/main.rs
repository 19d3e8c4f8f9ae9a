use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use nutri_grade_rs::cli::{Cli, Command};
use nutri_grade_rs::compare::compare;
use nutri_grade_rs::data::{
    load_keywords, load_product, load_products, load_profile, save_profile, write_csv,
};
use nutri_grade_rs::error::Result;
use nutri_grade_rs::evaluation::{evaluate, Evaluation};
use nutri_grade_rs::interface::{
    collect_profile, display_batch_summary, display_comparison, display_evaluation, prompt_yes_no,
};
use nutri_grade_rs::models::UserProfile;
use nutri_grade_rs::personalize::{KeywordTables, PersonalizationEngine};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let tables = match &cli.keywords {
        Some(path) => load_keywords(path)?,
        None => KeywordTables::default(),
    };
    let engine = PersonalizationEngine::new(tables);

    match cli.command {
        Command::Score {
            product,
            profile,
            json,
        } => cmd_score(&engine, &product, profile.as_deref(), json),
        Command::Compare {
            first,
            second,
            json,
        } => cmd_compare(&first, &second, json),
        Command::Batch {
            products,
            csv,
            profile,
        } => cmd_batch(&engine, &products, &csv, profile.as_deref()),
        Command::Profile { output } => cmd_profile(&engine, &output),
    }
}

fn load_optional_profile(path: Option<&Path>) -> Result<Option<UserProfile>> {
    path.map(load_profile).transpose()
}

/// Score one product, personalized when a profile is given.
fn cmd_score(
    engine: &PersonalizationEngine,
    product_path: &Path,
    profile_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let product = load_product(product_path)?;
    let profile = load_optional_profile(profile_path)?;

    let evaluation = evaluate(&product, profile.as_ref(), engine);

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        display_evaluation(&evaluation);
    }

    Ok(())
}

fn cmd_compare(first_path: &Path, second_path: &Path, json: bool) -> Result<()> {
    let first = load_product(first_path)?;
    let second = load_product(second_path)?;

    let comparison = compare(&first, &second);

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        display_comparison(&comparison);
    }

    Ok(())
}

/// Score every product in a file and write the CSV report.
fn cmd_batch(
    engine: &PersonalizationEngine,
    products_path: &Path,
    csv_path: &Path,
    profile_path: Option<&Path>,
) -> Result<()> {
    let products = load_products(products_path)?;
    let profile = load_optional_profile(profile_path)?;

    if products.is_empty() {
        println!("No products found in {}", products_path.display());
        return Ok(());
    }

    let evaluations: Vec<Evaluation> = products
        .iter()
        .map(|p| evaluate(p, profile.as_ref(), engine))
        .collect();

    display_batch_summary(&evaluations);
    write_csv(&evaluations, csv_path)?;

    println!();
    println!("Report written to {}", csv_path.display());
    Ok(())
}

/// Build a profile interactively and save it.
fn cmd_profile(engine: &PersonalizationEngine, output: &Path) -> Result<()> {
    if output.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", output.display()),
            false,
        )?;
        if !overwrite {
            println!("Profile not saved.");
            return Ok(());
        }
    }

    let profile = collect_profile(engine.keywords())?;
    save_profile(output, &profile)?;

    println!("Profile saved to {}", output.display());
    Ok(())
}

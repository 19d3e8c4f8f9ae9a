use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nutri-grade: INR/HSR nutrition grades and personalized product fit.
#[derive(Parser, Debug)]
#[command(name = "nutri-grade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Keyword tables JSON overriding the built-in allergen and diet lists.
    #[arg(short, long, global = true)]
    pub keywords: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one product, optionally personalized for a profile.
    Score {
        /// Product JSON file.
        product: PathBuf,

        /// User profile JSON file.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Compare two products; the lower score is healthier.
    Compare {
        first: PathBuf,
        second: PathBuf,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Score a JSON array of products and write a CSV report.
    Batch {
        /// JSON file containing an array of products.
        products: PathBuf,

        /// Output CSV path.
        #[arg(long, default_value = "scores.csv")]
        csv: PathBuf,

        /// User profile JSON file; adds personal fit to the summary.
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Build a user profile interactively.
    Profile {
        /// Where to save the profile.
        #[arg(short, long, default_value = "profile.json")]
        output: PathBuf,
    },
}

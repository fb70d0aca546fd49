//! Spell a number from the command line.
//!
//! Usage:
//!   cargo run --bin spell -- 1234             # default language (DEFAULT_LANGUAGE or fr)
//!   cargo run --bin spell -- 1234 en          # explicit language
//!   cargo run --bin spell -- 1234 --all-languages
//!
//! The number goes through the same validation as the HTTP API.

use anyhow::{Context, Result};
use number_words::config::Config;
use number_words::i18n::{Language, LanguageRegistry};
use number_words::{convert_to_words, validator};
use tracing::debug;

fn print_usage() {
    println!("Usage: spell <number> [fr|en] [--all-languages]");
    println!();
    println!(
        "Accepts whole numbers from {} to {}.",
        validator::MIN_VALUE,
        validator::MAX_VALUE
    );
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays the phrase only)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("number_words=warn".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let all_languages = args.iter().any(|arg| arg == "--all-languages");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") || positional.is_empty() {
        print_usage();
        return Ok(());
    }

    let number = validator::check_str(positional[0])
        .with_context(|| format!("Cannot spell '{}'", positional[0]))?;

    let languages: Vec<Language> = if all_languages {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| config.language)
            .collect()
    } else if let Some(code) = positional.get(1) {
        vec![Language::from_code(code)?]
    } else {
        vec![Config::from_env()?.default_language]
    };

    for language in languages {
        debug!("Spelling {} in {}", number, language.name());
        let words = convert_to_words(u64::from(number), language)?;
        if all_languages {
            println!("{}: {}", language, words);
        } else {
            println!("{}", words);
        }
    }

    Ok(())
}

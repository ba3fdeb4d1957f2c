//! Nexir - AI brand-name generation, scoring, and availability checking
//!
//! Generates brand-name candidates from keywords, scores their
//! pronounceability, and checks best-effort domain availability.

use indicatif::ProgressBar;
use inquire::{MultiSelect, Select, Text};
use nexir::{
    domain_candidates, pronounceability_score,
    storage::{default_store_path, SavedStore},
    AvailabilityChecker, GenerationRequest, NameCandidate, NameGenerator, NameLength, NameStyle,
    Result, Tone,
};
use std::env;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Checked per name, mirroring what fits on one result card.
const DOMAINS_PER_NAME: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = nexir::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let outcome = if args.first().map(String::as_str) == Some("saved") {
        run_saved()
    } else {
        run_generate(&args).await
    };

    if let Err(e) = outcome {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main generation workflow: keywords -> candidates -> scores -> domains.
async fn run_generate(args: &[String]) -> Result<()> {
    let (mut keywords, style, length, tone) = parse_generate_args(args)?;

    if keywords.is_empty() {
        keywords = Text::new("What is your product about? (keywords)")
            .prompt()
            .unwrap_or_default();
    }

    let style = style.unwrap_or_else(|| {
        Select::new("Name style:", NameStyle::ALL.to_vec())
            .prompt()
            .unwrap_or(NameStyle::Brandable)
    });
    let length = length.unwrap_or_else(|| {
        Select::new("Name length:", NameLength::ALL.to_vec())
            .prompt()
            .unwrap_or(NameLength::Short)
    });
    let tone = tone.unwrap_or_else(|| {
        Select::new("Brand tone:", Tone::ALL.to_vec())
            .prompt()
            .unwrap_or(Tone::Minimal)
    });

    let request = GenerationRequest {
        keywords,
        style,
        length,
        tone,
        ..Default::default()
    };

    let generator = NameGenerator::from_env()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Generating {} names with AI...", request.count));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = generator.generate(&request).await;
    spinner.finish_and_clear();

    let candidates = result?;
    if candidates.is_empty() {
        println!("No names were generated. Try different keywords.");
        return Ok(());
    }

    display_candidates(&candidates);

    check_domains_for_best(&candidates, tone).await?;
    offer_saving(&candidates)?;

    Ok(())
}

/// List saved names, most recently saved first.
fn run_saved() -> Result<()> {
    let store = SavedStore::open(default_store_path());
    let items = store.list();

    if items.is_empty() {
        println!("No saved names yet.");
        return Ok(());
    }

    println!("Saved names ({}):", items.len());
    for item in items {
        println!(
            "  {:<16} {} ({})",
            item.name,
            item.tagline,
            item.saved_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

/// Parse `[keywords..] [--style S] [--length L] [--tone T]`.
#[allow(clippy::type_complexity)]
fn parse_generate_args(
    args: &[String],
) -> Result<(String, Option<NameStyle>, Option<NameLength>, Option<Tone>)> {
    let mut keywords: Vec<&str> = Vec::new();
    let mut style = None;
    let mut length = None;
    let mut tone = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--style" => {
                let value = iter
                    .next()
                    .ok_or_else(|| nexir::NexirError::validation("--style needs a value"))?;
                style = Some(value.parse().map_err(nexir::NexirError::validation)?);
            }
            "--length" => {
                let value = iter
                    .next()
                    .ok_or_else(|| nexir::NexirError::validation("--length needs a value"))?;
                length = Some(value.parse().map_err(nexir::NexirError::validation)?);
            }
            "--tone" => {
                let value = iter
                    .next()
                    .ok_or_else(|| nexir::NexirError::validation("--tone needs a value"))?;
                tone = Some(value.parse().map_err(nexir::NexirError::validation)?);
            }
            other => keywords.push(other),
        }
    }

    Ok((keywords.join(" "), style, length, tone))
}

/// Print candidates with taglines and pronounceability scores.
fn display_candidates(candidates: &[NameCandidate]) {
    println!();
    println!("Generated names ({}):", candidates.len());
    println!("─────────────────────");

    for (i, candidate) in candidates.iter().enumerate() {
        let phonetics = pronounceability_score(&candidate.name);
        println!(
            "{:2}. {:<16} {:>3}/100  {}",
            i + 1,
            candidate.name,
            phonetics.score,
            candidate.tagline
        );
        println!("    why: {}", candidate.why);
        if !phonetics.reasons.is_empty() {
            println!("    say: {}", phonetics.reasons.join(", "));
        }
    }
    println!();
}

/// Check domain availability for the highest-scoring candidate.
async fn check_domains_for_best(candidates: &[NameCandidate], tone: Tone) -> Result<()> {
    let best = candidates
        .iter()
        .max_by_key(|c| pronounceability_score(&c.name).score);
    let best = match best {
        Some(candidate) => candidate,
        None => return Ok(()),
    };

    let domains: Vec<String> = domain_candidates(&best.name, tone, &[])
        .into_iter()
        .take(DOMAINS_PER_NAME)
        .collect();
    if domains.is_empty() {
        println!("'{}' has no usable domain label.", best.name);
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Checking {} domains for '{}'...",
        domains.len(),
        best.name
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let checker = AvailabilityChecker::new();
    let results = checker.check_domains(&domains).await;
    spinner.finish_and_clear();
    let results = results?;

    println!();
    for result in &results {
        let marker = match result.status {
            nexir::AvailabilityStatus::Available => "+",
            nexir::AvailabilityStatus::Taken => "-",
            nexir::AvailabilityStatus::Unknown => "?",
        };
        println!("  [{}] {:<24} {} ({})", marker, result.domain, result.status, result.method);
    }

    let available = results.iter().filter(|r| r.status.is_available()).count();
    println!();
    println!(
        "{} of {} checked domains look available (best-effort, not authoritative).",
        available,
        results.len()
    );

    Ok(())
}

/// Offer toggling generated names into the saved list.
fn offer_saving(candidates: &[NameCandidate]) -> Result<()> {
    let names: Vec<String> = candidates.iter().map(|c| c.name.clone()).collect();
    let picked = match MultiSelect::new("Save any names?", names).prompt() {
        Ok(picked) => picked,
        // Non-interactive session or user escape: nothing to save
        Err(_) => return Ok(()),
    };

    if picked.is_empty() {
        return Ok(());
    }

    let store = SavedStore::open(default_store_path());
    for name in picked {
        if let Some(candidate) = candidates.iter().find(|c| c.name == name) {
            store.toggle(&candidate.name, &candidate.tagline, &candidate.why)?;
        }
    }
    println!("Saved. Run `nexir saved` to review your list.");
    Ok(())
}

/// Print help information
fn print_help() {
    println!("Nexir - AI brand-name generation and domain checking");
    println!();
    println!("USAGE:");
    println!("    nexir [KEYWORDS] [--style STYLE] [--length LENGTH] [--tone TONE]");
    println!("    nexir saved");
    println!();
    println!("OPTIONS:");
    println!("    --style     brandable | real | compound | invented");
    println!("    --length    short | medium | long");
    println!("    --tone      luxury | playful | serious | minimal");
    println!();
    println!("EXAMPLES:");
    println!("    nexir \"solar home battery\" --tone serious");
    println!("    nexir \"kids art app\" --style invented --tone playful");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    OPENAI_API_KEY     OpenAI API key (required)");
    println!("    OPENAI_MODEL       Model override (default: gpt-4.1-mini)");
    println!("    OPENAI_BASE_URL    OpenAI-compatible endpoint override");
    println!("    NEXIR_HOME         Directory for the saved-name file");
}

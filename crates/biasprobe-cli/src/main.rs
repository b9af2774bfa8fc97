//! biasprobe: probe text generators for gender and nationality skew.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use biasprobe_chat::prompt::{build_prompt, stored_prompt};
use biasprobe_chat::{GenerationParams, PromptMode, Provider};
use biasprobe_core::{ProbeConfig, ProviderKind};
use biasprobe_fairness::FairnessReport;
use biasprobe_infer::{
    extract, CountryIndex, LinguisticServices, NameGenderTable, NationalityLexicon,
    PostProcessChain,
};
use biasprobe_runtime::{GenerationJob, GenerationLoop, RetryPolicy, SampleOutcome};
use biasprobe_store::{migrate_to_canonical, read_rows, TableWriter};

mod gold;

#[derive(Parser)]
#[command(name = "biasprobe", version, about = "Probe text generators for demographic skew")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate descriptions and append labeled rows to a table
    Generate {
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value_t = 10)]
        samples: usize,
        #[arg(long, default_value = "gemini")]
        provider: ProviderKind,
        #[arg(long, default_value = "plain")]
        prompt: PromptMode,
        #[arg(long, default_value = "gold_samples")]
        gold_dir: PathBuf,
    },
    /// Print the fairness report for a table
    Metrics {
        csv: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the extractor on one paragraph
    Extract { text: String },
    /// Draw gold-sample people, one per continent
    Gold {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rewrite a table into the canonical column order
    Migrate { csv: PathBuf },
}

/// Built-in tables, plus the configured extra name table if any.
fn build_services(config: &ProbeConfig) -> anyhow::Result<LinguisticServices> {
    let mut names = NameGenderTable::builtin();
    if let Some(path) = &config.name_table {
        let added = names
            .load_tsv(path)
            .with_context(|| format!("loading name table {}", path.display()))?;
        info!("Loaded {} names from {}", added, path.display());
    }
    Ok(LinguisticServices::from_parts(
        names,
        CountryIndex::builtin(),
        NationalityLexicon::builtin(),
    ))
}

async fn generate(
    output: PathBuf,
    subject: String,
    samples: usize,
    kind: ProviderKind,
    mode: PromptMode,
    gold_dir: PathBuf,
) -> anyhow::Result<()> {
    let config = ProbeConfig::from_env()?;
    let services = build_services(&config)?;
    let provider = Provider::from_config(kind, &config)?;

    let prompt = build_prompt(mode, &subject, &gold_dir)?;
    let corrections = match mode {
        PromptMode::FewShot => PostProcessChain::few_shot(),
        PromptMode::Plain | PromptMode::Priming => PostProcessChain::empty(),
    };
    let writer = TableWriter::open_or_create(&output)
        .with_context(|| format!("opening {}", output.display()))?;

    let job = GenerationJob {
        stored_prompt: stored_prompt(&prompt),
        prompt,
        samples,
        params: GenerationParams::for_provider(kind),
        cooldown: config.cooldown(kind),
    };

    println!(
        "Generating {} samples for '{}' with {} ({} prompt) into {}",
        samples,
        subject,
        kind,
        mode,
        output.display()
    );

    let runner = GenerationLoop::new(
        &provider,
        &services,
        &corrections,
        &writer,
        RetryPolicy::from_config(&config),
    );
    let report = runner
        .run(&job, |index, outcome| match outcome {
            SampleOutcome::Recorded { labels, .. } => println!(
                "Sample {}/{}: gender={}, nationality={}",
                index + 1,
                samples,
                labels.gender,
                labels.nationality
            ),
            SampleOutcome::Skipped { attempts, error } => println!(
                "Sample {}/{}: skipped after {} attempts ({})",
                index + 1,
                samples,
                attempts,
                error
            ),
        })
        .await?;

    println!(
        "Done: {} recorded, {} skipped in {:.1}s",
        report.recorded,
        report.skipped,
        report.duration_ms as f64 / 1000.0
    );
    Ok(())
}

fn metrics(csv: PathBuf, json: bool) -> anyhow::Result<()> {
    let rows = read_rows(&csv)?;
    let report = FairnessReport::from_rows(&rows);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn extract_one(text: &str) -> anyhow::Result<()> {
    let config = ProbeConfig::from_env()?;
    let services = build_services(&config)?;
    let result = extract(&services, text);
    println!("Person:      {}", result.person_name.as_deref().unwrap_or("None"));
    println!("Gender:      {}", result.gender);
    println!("Nationality: {}", result.country.as_deref().unwrap_or("None"));
    Ok(())
}

fn draw_gold(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for person in gold::draw(&CountryIndex::builtin(), &mut rng) {
        println!("{}", person);
    }
}

fn migrate(csv: PathBuf) -> anyhow::Result<()> {
    let report = migrate_to_canonical(&csv)?;
    if report.rewritten {
        println!("Rewrote {} rows in {} to canonical order", report.rows, csv.display());
    } else {
        println!("{} already canonical ({} rows)", csv.display(), report.rows);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Generate {
            output,
            subject,
            samples,
            provider,
            prompt,
            gold_dir,
        } => generate(output, subject, samples, provider, prompt, gold_dir).await,
        Command::Metrics { csv, json } => metrics(csv, json),
        Command::Extract { text } => extract_one(&text),
        Command::Gold { seed } => {
            draw_gold(seed);
            Ok(())
        }
        Command::Migrate { csv } => migrate(csv),
    }
}

//! Headless Newsdesk
//!
//! Runs the same fetch and enrichment pipeline as the desktop app and prints
//! a report per preference term, either as text or as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use newsdesk::application::aggregator::{NO_ARTICLES_NOTICE, TermResults};
use newsdesk::application::system::Application;
use newsdesk::config::Config;
use newsdesk::domain::entities::EntityOutcome;
use newsdesk::domain::preferences::{ResultCount, SearchRequest};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Search news by preference and summarize each article", long_about = None)]
struct Cli {
    /// Comma-separated preferences, e.g. "climate, space"
    preferences: String,

    /// Only search the verified source list
    #[arg(long)]
    verified: bool,

    /// Articles per preference (1-100, defaults to NEWSDESK_DEFAULT_COUNT or 10)
    #[arg(short, long)]
    count: Option<i64>,

    /// Use the built-in sample articles instead of NewsAPI
    #[arg(long)]
    mock: bool,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    /// Number of word-cloud words listed per article
    #[arg(long, default_value = "10")]
    top_words: usize,
}

fn print_term(results: &TermResults, top_words: usize) {
    println!("=== {} ===", results.heading());
    if results.is_empty() {
        println!("{}", NO_ARTICLES_NOTICE);
        println!();
        return;
    }

    for report in &results.reports {
        let article = &report.article;
        println!("- {}", article.section_label());
        println!("  {}", report.byline());
        println!("  {}", report.published_line());
        println!("  Read Article: {}", article.display_url());
        println!("  {}", report.sentiment_line());

        let words = report.word_cloud.top_words(top_words);
        if !words.is_empty() {
            println!("  Top words: {}", words.join(", "));
        }

        match &report.entities {
            EntityOutcome::Skipped => {}
            EntityOutcome::NoEntities => println!("  {}", EntityOutcome::NO_ENTITIES_NOTICE),
            EntityOutcome::Chart(counts) => {
                let listed: Vec<String> = counts
                    .iter()
                    .map(|c| format!("{} ({})", c.text, c.count))
                    .collect();
                println!("  Top entities: {}", listed.join(", "));
            }
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so JSON output stays clean
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    let config = if cli.mock {
        Config::from_lookup(|key| match key {
            "MODE" => Some("mock".to_string()),
            _ => env::var(key).ok(),
        })
    } else {
        Config::from_env()
    }
    .context("Failed to load configuration")?;

    let count = cli
        .count
        .map(ResultCount::clamped)
        .unwrap_or(config.search.default_count);
    let request = SearchRequest::from_input(&cli.preferences, cli.verified, count);
    if request.is_empty() {
        info!("No preferences given, nothing to search");
        return Ok(());
    }

    let app = Application::build(config)?;
    let results = app.aggregator.run(&request).await;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?
        );
    } else {
        for term in &results {
            print_term(term, cli.top_words);
        }
    }

    Ok(())
}

//! Command-line interface for portalkit.
//!
//! Provides commands for searching and filtering the corpus, managing the
//! locale preference, validating and submitting forms against the
//! simulated transport, and sharing content links.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;

use crate::config;
use crate::domain::Locale;
use crate::forms::{submit_form, subscribe_newsletter, validate_form, FormSchema, SubmissionResult};
use crate::i18n;
use crate::notify::{Notification, Severity};
use crate::prefs::PreferenceStore;
use crate::search::{Corpus, LoadMore, Pager, SearchDispatcher, SearchOutcome, ALL_CATEGORIES};
use crate::transport::{share_content, Clipboard, MockOutcome, MockTransport};

/// portalkit - Interaction engine for a bilingual content portal
#[derive(Parser, Debug)]
#[command(name = "portalkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Corpus file (defaults to the configured path)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the corpus; without a query, reads queries line by line
    /// from stdin through the debounced dispatcher
    Search {
        /// Search query (omit to read from stdin)
        query: Option<String>,
    },

    /// Filter the corpus by category ("all" shows everything)
    Filter {
        /// Category slug
        category: String,
    },

    /// List corpus items, most recent first
    List {
        /// Maximum number of items to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Page through the whole archive in batches of this size,
        /// simulating the portal's load-more control
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show or change the display language
    Locale {
        #[command(subcommand)]
        command: LocaleCommands,
    },

    /// Validate contact form input without submitting
    Validate {
        #[command(flatten)]
        form: ContactArgs,
    },

    /// Validate and submit the contact form through the mock transport
    Submit {
        #[command(flatten)]
        form: ContactArgs,

        /// Script the transport to reject the submission
        #[arg(long)]
        reject: bool,

        /// Simulated transport latency in milliseconds
        #[arg(long, default_value = "2000")]
        latency_ms: u64,
    },

    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address
        email: String,

        /// Simulated transport latency in milliseconds
        #[arg(long, default_value = "2000")]
        latency_ms: u64,
    },

    /// Share a content link (clipboard fallback prints the copied URL)
    Share {
        /// Link target
        url: String,

        /// Link title
        title: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Subcommand, Debug)]
pub enum LocaleCommands {
    /// Print the active locale
    Get,

    /// Set the active locale (pt-BR or en)
    Set { locale: Locale },
}

/// Contact form fields as flags
#[derive(clap::Args, Debug)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

impl ContactArgs {
    fn values(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("subject".to_string(), self.subject.clone()),
            ("message".to_string(), self.message.clone()),
        ]
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Search { query } => match query {
                Some(query) => search_corpus(self.corpus, &query).await,
                None => watch_corpus(self.corpus).await,
            },
            Commands::Filter { category } => filter_corpus(self.corpus, &category).await,
            Commands::List { limit, page_size } => match page_size {
                Some(page_size) => page_corpus(self.corpus, page_size).await,
                None => list_corpus(self.corpus, limit).await,
            },
            Commands::Locale { command } => match command {
                LocaleCommands::Get => show_locale().await,
                LocaleCommands::Set { locale } => set_locale(locale).await,
            },
            Commands::Validate { form } => validate_contact(&form).await,
            Commands::Submit {
                form,
                reject,
                latency_ms,
            } => submit_contact(&form, reject, latency_ms).await,
            Commands::Subscribe { email, latency_ms } => {
                subscribe_email(&email, latency_ms).await
            }
            Commands::Share { url, title } => share_link(&url, &title).await,
            Commands::Config => show_config().await,
        }
    }
}

/// Load the corpus from the override path or the configured one
async fn load_corpus(override_path: Option<PathBuf>) -> Result<Corpus> {
    let path = match override_path {
        Some(path) => path,
        None => config::corpus_path()?,
    };

    Corpus::load(&path)
        .await
        .with_context(|| format!("Cannot load corpus from {}", path.display()))
}

/// Read the active locale preference, resolved against the configured
/// default
async fn active_locale() -> Result<Locale> {
    let fallback = config::config()?.default_locale;
    let store = PreferenceStore::open_default()?;
    Ok(store.get_or(fallback).await)
}

/// Search the corpus and print highlighted results
async fn search_corpus(corpus_path: Option<PathBuf>, query: &str) -> Result<()> {
    let locale = active_locale().await?;
    let settings = &config::config()?.search;

    // Too-short queries never reach the engine; the portal hides the
    // results panel in that case.
    if query.trim().chars().count() < settings.min_query_len {
        anyhow::bail!("Query must be at least {} characters", settings.min_query_len);
    }

    let corpus = load_corpus(corpus_path).await?;
    let results = corpus.search_with(query, settings.excerpt_chars);

    if results.is_empty() {
        println!("{}", i18n::no_results_for(query.trim(), locale));
        return Ok(());
    }

    println!("{:<18} {:<12} {:<50}", "ID", "CATEGORY", "TITLE");
    println!("{}", "-".repeat(80));

    for result in &results {
        println!(
            "{:<18} {:<12} {:<50}",
            result.item.id.as_str(),
            result.item.category,
            result.highlighted_title
        );
        println!("    {}", result.highlighted_excerpt);
    }

    println!("\nTotal: {} result(s)", results.len());

    Ok(())
}

/// Search-as-you-type over stdin through the debounced dispatcher.
///
/// Each input line is treated as the full content of the search box, so
/// rapid lines coalesce the way rapid keystrokes do.
async fn watch_corpus(corpus_path: Option<PathBuf>) -> Result<()> {
    let locale = active_locale().await?;
    let settings = config::config()?.search.dispatch_settings();
    let corpus = Arc::new(load_corpus(corpus_path).await?);

    let (dispatcher, mut outcomes) = SearchDispatcher::spawn(corpus, settings);

    let printer = tokio::spawn(async move {
        while let Some(outcome) = outcomes.recv().await {
            match outcome {
                SearchOutcome::Cleared => println!("(results hidden)"),
                SearchOutcome::Results { query, hits } => {
                    if hits.is_empty() {
                        println!("{}", i18n::no_results_for(&query, locale));
                        continue;
                    }
                    for hit in &hits {
                        println!(
                            "{:<18} {:<12} {}",
                            hit.id.as_str(),
                            hit.category,
                            hit.highlighted_title
                        );
                    }
                    println!("{} result(s) for \"{}\"", hits.len(), query);
                }
            }
        }
    });

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        dispatcher.submit(line).await?;
    }

    dispatcher.shutdown().await?;
    printer.await?;

    Ok(())
}

/// Filter the corpus by category and print matching items
async fn filter_corpus(corpus_path: Option<PathBuf>, category: &str) -> Result<()> {
    let corpus = load_corpus(corpus_path).await?;
    let items = corpus.filter_by_category(category);

    if items.is_empty() {
        if category != ALL_CATEGORIES {
            println!("No items in category: {}", category);
        } else {
            println!("Corpus is empty");
        }
        return Ok(());
    }

    println!("{:<18} {:<12} {:<50}", "ID", "CATEGORY", "TITLE");
    println!("{}", "-".repeat(80));

    for item in &items {
        println!(
            "{:<18} {:<12} {:<50}",
            item.id.as_str(),
            item.category,
            truncate_title(&item.title)
        );
    }

    println!("\nTotal: {} item(s)", items.len());

    Ok(())
}

/// List corpus items, most recent first
async fn list_corpus(corpus_path: Option<PathBuf>, limit: usize) -> Result<()> {
    let corpus = load_corpus(corpus_path).await?;

    if corpus.is_empty() {
        println!("Corpus is empty");
        return Ok(());
    }

    println!("{:<18} {:<12} {:<26} {:<30}", "ID", "CATEGORY", "PUBLISHED", "TITLE");
    println!("{}", "-".repeat(88));

    for item in corpus.list(Some(limit)) {
        println!(
            "{:<18} {:<12} {:<26} {:<30}",
            item.id.as_str(),
            item.category,
            item.published_at.to_rfc3339(),
            truncate_title(&item.title)
        );
    }

    Ok(())
}

/// Walk the whole archive through the load-more pager
async fn page_corpus(corpus_path: Option<PathBuf>, page_size: usize) -> Result<()> {
    let locale = active_locale().await?;
    let corpus = Arc::new(load_corpus(corpus_path).await?);
    let mut pager = Pager::new(corpus).with_page_size(page_size);

    loop {
        eprintln!("{}", Pager::loading_label(locale));
        match pager.load_more(locale).await {
            LoadMore::Page(items) => {
                for item in &items {
                    println!(
                        "{:<18} {:<12} {}",
                        item.id.as_str(),
                        item.category,
                        truncate_title(&item.title)
                    );
                }
            }
            LoadMore::Exhausted(notification) => {
                print_notification(&notification);
                break;
            }
        }
    }

    Ok(())
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > 47 {
        let cut: String = title.chars().take(47).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}

/// Print the active locale
async fn show_locale() -> Result<()> {
    let locale = active_locale().await?;
    println!("{} ({})", locale.code(), locale.name());
    Ok(())
}

/// Persist a locale choice
async fn set_locale(locale: Locale) -> Result<()> {
    let store = PreferenceStore::open_default()?;
    store.set(locale).await?;
    println!("Locale set to {} ({})", locale.code(), locale.name());
    Ok(())
}

/// Validate the contact form and print per-field errors
async fn validate_contact(form: &ContactArgs) -> Result<()> {
    let locale = active_locale().await?;
    let schema = FormSchema::contact();
    let errors = validate_form(&schema, &form.values());

    if errors.is_empty() {
        println!("Form is valid");
        return Ok(());
    }

    for error in &errors {
        println!("{}: {}", error.field, error.message(locale));
    }

    std::process::exit(1);
}

/// Validate and submit the contact form through the mock transport
async fn submit_contact(form: &ContactArgs, reject: bool, latency_ms: u64) -> Result<()> {
    let locale = active_locale().await?;
    let schema = FormSchema::contact();

    let mut transport = MockTransport::new().with_latency(Duration::from_millis(latency_ms));
    if reject {
        transport = transport.with_outcome(MockOutcome::Reject("scripted rejection".to_string()));
    }

    eprintln!("{}", i18n::message(i18n::MessageKey::Sending, locale));

    match submit_form(&schema, &form.values(), &transport, locale).await {
        SubmissionResult::Invalid(errors) => {
            for error in &errors {
                println!("{}: {}", error.field, error.message(locale));
            }
            std::process::exit(1);
        }
        SubmissionResult::Sent(notification) => {
            print_notification(&notification);
            if notification.severity == Severity::Error {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Subscribe an email address through the mock transport
async fn subscribe_email(email: &str, latency_ms: u64) -> Result<()> {
    let locale = active_locale().await?;
    let transport = MockTransport::new().with_latency(Duration::from_millis(latency_ms));

    let notification = subscribe_newsletter(email, &transport, locale).await;
    print_notification(&notification);
    if notification.severity == Severity::Error {
        std::process::exit(1);
    }

    Ok(())
}

/// Clipboard that prints the copied text, for terminal use
struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

/// Share a content link; the terminal has no native share sheet, so this
/// always takes the clipboard fallback
async fn share_link(url: &str, title: &str) -> Result<()> {
    let locale = active_locale().await?;

    let notification = share_content(None, &StdoutClipboard, url, title, locale).await;
    print_notification(&notification);

    Ok(())
}

fn print_notification(notification: &Notification) {
    let tag = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "error",
        Severity::Info => "info",
    };
    println!("[{}] {}", tag, notification.message);
}

/// Show the resolved configuration (for debugging)
async fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Portalkit configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:   {}", cfg.home.display());
    println!("  Corpus: {}", cfg.corpus.display());
    println!("  Prefs:  {}", cfg.home.join("prefs.json").display());
    println!();
    println!("Search:");
    println!("  Debounce:      {}ms", cfg.search.debounce_ms);
    println!("  Min query len: {}", cfg.search.min_query_len);
    println!("  Excerpt chars: {}", cfg.search.excerpt_chars);
    println!();
    println!("Default locale: {}", cfg.default_locale);

    Ok(())
}

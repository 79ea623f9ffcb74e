use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Editor;
use rustyline::{Context, Helper};
use tokio::sync::RwLock;

use sakhi_core::advisory::{AdvisoryFeed, AdvisoryStatus};
use sakhi_core::chat::{ChatState, MessageRole};
use sakhi_core::config::load_config;
use sakhi_core::knowledge::KnowledgeBase;
use sakhi_core::locale::{CatalogLocalizer, Language, Localizer};
use sakhi_core::profile::{ProfileDirectory, ProfileDraft};
use sakhi_interaction::ConversationSimulator;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/profile".to_string(),
                "/profiles".to_string(),
                "/select".to_string(),
                "/remove".to_string(),
                "/lang".to_string(),
                "/advisories".to_string(),
                "/done".to_string(),
                "/kb".to_string(),
                "/export".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Reads one line with a prompt, trimmed. Returns `None` on EOF/interrupt.
fn prompt_field(rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>, prompt: &str) -> Option<String> {
    match rl.readline(&format!("  {}: ", prompt)) {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Walks the user through the create-profile form and returns the draft.
fn read_profile_draft(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
) -> Option<ProfileDraft> {
    let name = prompt_field(rl, "name")?;
    let age_text = prompt_field(rl, "age")?;
    let age = match age_text.parse::<u32>() {
        Ok(age) => age,
        Err(_) => {
            println!("{}", "Age must be a whole number.".red());
            return None;
        }
    };
    let contact = prompt_field(rl, "contact")?;
    let location = prompt_field(rl, "location")?;
    let land_size = prompt_field(rl, "land size")?;
    let crop_type = prompt_field(rl, "crop type")?;
    let soil_type = prompt_field(rl, "soil type")?;
    let irrigation_method = prompt_field(rl, "irrigation method")?;

    Some(ProfileDraft {
        name,
        age,
        contact,
        location,
        land_size,
        crop_type,
        soil_type,
        irrigation_method,
    })
}

/// Waits for the scheduled reply to land, then prints it.
async fn await_reply(simulator: &ConversationSimulator, reply_delay: Duration) {
    let deadline = tokio::time::Instant::now() + reply_delay + Duration::from_secs(2);
    while simulator.state().await == ChatState::AwaitingReply {
        if tokio::time::Instant::now() >= deadline {
            println!("{}", "No reply arrived in time.".red());
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    if let Some(reply) = simulator
        .transcript()
        .await
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::Assistant)
    {
        for line in reply.text.lines() {
            println!("{}", line.bright_blue());
        }
        if !reply.suggestions.is_empty() {
            println!("{}", format!("try: {}", reply.suggestions.join(" | ")).bright_black());
        }
    }
}

/// The main entry point for the Sakhi readline REPL application.
///
/// Sets up a rustyline-based REPL that:
/// 1. Builds the session services (profile directory, advisory feed,
///    knowledge base, conversation simulator)
/// 2. Provides command completion for the /profile, /kb, ... commands
/// 3. Treats any other input as a chat submission and prints the reply
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let config = load_config()?;
    let localizer: Arc<dyn Localizer> = Arc::new(CatalogLocalizer::new(config.language));
    let directory = Arc::new(RwLock::new(ProfileDirectory::new()));
    let mut feed = AdvisoryFeed::with_defaults();
    let knowledge = KnowledgeBase::with_defaults();
    let simulator = ConversationSimulator::new(
        Arc::clone(&localizer),
        Arc::clone(&directory),
        config.reply_delay(),
    );
    simulator.seed_greeting().await;

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", format!("=== {} ===", localizer.t("app.name")).bright_magenta().bold());
    println!("{}", localizer.t("app.tagline").bright_black());
    println!(
        "{}",
        "Commands: /profile /profiles /select /remove /lang /advisories /done /kb /export, or 'quit' to exit."
            .bright_black()
    );
    println!();
    if let Some(greeting) = simulator.transcript().await.first() {
        println!("{}", greeting.text.bright_blue());
        println!("{}", format!("try: {}", greeting.suggestions.join(" | ")).bright_black());
        println!();
    }

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let (command, rest) = match trimmed.split_once(' ') {
                    Some((command, rest)) => (command, rest.trim()),
                    None => (trimmed, ""),
                };

                match command {
                    "/profile" => {
                        println!("{}", localizer.t("profile.create").bright_magenta());
                        if let Some(draft) = read_profile_draft(&mut rl) {
                            match directory.write().await.create(draft) {
                                Ok(profile) => println!(
                                    "{}",
                                    format!("Profile created and selected: {} ({})", profile.name, profile.id)
                                        .green()
                                ),
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        }
                    }
                    "/profiles" => {
                        let dir = directory.read().await;
                        if dir.list().is_empty() {
                            println!("{}", "No profiles yet. Use /profile to create one.".bright_black());
                        }
                        for profile in dir.list() {
                            let marker = if dir.selected().map(|p| p.id.as_str()) == Some(profile.id.as_str()) {
                                "*"
                            } else {
                                " "
                            };
                            println!(
                                "{} {}  {} - {} ({}, {})",
                                marker.bright_green(),
                                profile.id.bright_black(),
                                profile.name,
                                profile.location,
                                profile.crop_type,
                                profile.land_size,
                            );
                        }
                    }
                    "/select" => {
                        let id = if rest.is_empty() { None } else { Some(rest) };
                        match directory.write().await.select(id) {
                            Ok(()) => println!("{}", "Selection updated.".green()),
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    }
                    "/remove" => {
                        if rest.is_empty() {
                            println!("{}", "Usage: /remove <id>".yellow());
                        } else {
                            directory.write().await.remove(rest);
                            println!("{}", "Removed (if it existed).".green());
                        }
                    }
                    "/lang" => match Language::from_str(rest) {
                        Ok(language) => {
                            localizer.set_language(language);
                            println!("{}", format!("Language set to {}", language).green());
                        }
                        Err(_) => println!("{}", "Usage: /lang <en|ml>".yellow()),
                    },
                    "/advisories" => {
                        for advisory in feed.list() {
                            let status = match advisory.status {
                                AdvisoryStatus::Pending => "pending".yellow(),
                                AdvisoryStatus::Completed => "done".green(),
                            };
                            println!(
                                "{}  [{}] {} - {}",
                                advisory.id.bright_black(),
                                status,
                                advisory.title,
                                advisory.posted.bright_black(),
                            );
                        }
                        println!(
                            "{}",
                            format!(
                                "{} pending, {} completed",
                                feed.pending_count(),
                                feed.completed_count()
                            )
                            .bright_black()
                        );
                    }
                    "/done" => {
                        if rest.is_empty() {
                            println!("{}", "Usage: /done <id>".yellow());
                        } else {
                            match feed.mark_done(rest) {
                                Ok(()) => println!("{}", "Marked done.".green()),
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        }
                    }
                    "/kb" => {
                        let results = knowledge.search(None, rest);
                        if results.is_empty() {
                            println!("{}", "No articles found.".bright_black());
                        }
                        for article in results {
                            println!(
                                "{}  {} ({})",
                                article.id.bright_black(),
                                article.title,
                                article.read_time.bright_black(),
                            );
                            println!("    {}", article.summary.bright_black());
                        }
                    }
                    "/export" => {
                        let dir = directory.read().await;
                        println!("{}", serde_json::to_string_pretty(dir.list())?);
                    }
                    _ if command.starts_with('/') => {
                        println!("{}", "Unknown command".bright_black());
                    }
                    _ => {
                        // Anything else is a chat message
                        println!("{}", format!("> {}", trimmed).green());
                        match simulator.submit(trimmed).await {
                            Ok(()) => await_reply(&simulator, config.reply_delay()).await,
                            Err(e) => println!("{}", e.to_string().yellow()),
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Cancel any pending reply before the transcript goes away
    simulator.close().await;

    Ok(())
}

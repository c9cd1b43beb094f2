use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use folio_interaction::{
    ChatModel, ChatSession, GeminiApiAgent, QUICK_REPLIES, SendOutcome, build_system_prompt,
};

use super::utils;

/// CLI helper for rustyline that completes and hints the quick replies.
#[derive(Clone)]
struct ChatHelper {
    replies: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            replies: QUICK_REPLIES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .replies
            .iter()
            .filter(|reply| reply.to_lowercase().starts_with(&line.to_lowercase()))
            .map(|reply| Pair {
                display: reply.clone(),
                replacement: reply.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Borrowed(line)
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() {
            return None;
        }

        self.replies
            .iter()
            .find(|reply| reply.starts_with(line) && reply.len() > line.len())
            .map(|reply| reply[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

/// Runs the interactive chat REPL.
///
/// Loads the prompt context, assembles the system prompt, and then exchanges
/// messages with the model one turn at a time. A missing API key degrades to
/// the session's fixed "not configured" reply rather than an error.
pub async fn run(config_dir: Option<&Path>, use_fallback: bool) -> Result<()> {
    // ===== Session setup =====
    let context = utils::load_context(config_dir, use_fallback).await?;
    let system_prompt = build_system_prompt(&context);

    let model = GeminiApiAgent::try_from_config(config_dir)
        .map(|agent| Arc::new(agent) as Arc<dyn ChatModel>);
    if model.is_none() {
        eprintln!(
            "{}",
            "No Gemini API key configured; replies will explain how to set one up.".yellow()
        );
    }

    let session = ChatSession::new(model, system_prompt);

    // ===== REPL setup =====
    let helper = ChatHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Folio Chat ===".bright_magenta().bold());
    let transcript = session.transcript().await;
    println!("{}", transcript[0].content.bright_blue());
    println!("{}", "Try one of:".bright_black());
    for reply in QUICK_REPLIES {
        println!("{}", format!("  - {reply}").bright_black());
    }
    println!("{}", "Type 'quit' to exit.".bright_black());
    println!();

    // ===== Main REPL loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                // Display user input in green
                println!("{}", format!("> {}", trimmed).green());

                // One turn at a time; the session enforces this as well.
                match session.send_message(trimmed).await {
                    SendOutcome::Replied => {
                        let transcript = session.transcript().await;
                        if let Some(reply) = transcript.last() {
                            for line in reply.content.lines() {
                                println!("{}", line.bright_blue());
                            }
                            println!();
                        }
                    }
                    SendOutcome::Busy => {
                        println!("{}", "Still waiting on the previous reply.".yellow());
                    }
                    SendOutcome::Ignored => {}
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

    Ok(())
}

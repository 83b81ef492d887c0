//! Terminal front end: renders the conversation and feeds lines to the session.
//!
//! Enter submits the current line. A line ending in `\` continues on the next
//! line, so multi-line questions are possible. Input is not read while a
//! request is in flight.

use std::io::Write;
use std::sync::Arc;

use folio_ai::{ChatSession, HistoryListener, IgnoreReason, Role, SendOutcome, Turn};
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Ask(String),
    /// `/N` picks quick prompt N (1-based).
    Quick(usize),
    History,
    Help,
    Quit,
    Nothing,
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => Input::Nothing,
        "/quit" | "/exit" => Input::Quit,
        "/history" => Input::History,
        "/help" | "/?" => Input::Help,
        _ => match line.strip_prefix('/').and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => Input::Quick(n),
            None => Input::Ask(line.to_string()),
        },
    }
}

/// One turn as shown in the log, speaker label first.
pub fn format_turn(turn: &Turn, assistant_name: &str) -> String {
    let label = match turn.role {
        Role::User => "You",
        Role::Assistant => assistant_name,
    };
    let body = turn.content.replace('\n', "\n  ");
    format!("{label}:\n  {body}")
}

pub fn render_history(history: &[Turn], assistant_name: &str) -> String {
    history
        .iter()
        .map(|turn| format_turn(turn, assistant_name))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn quick_prompt_menu(prompts: &[String]) -> String {
    let mut menu = String::from("Quick prompts:");
    for (i, prompt) in prompts.iter().enumerate() {
        menu.push_str(&format!("\n  /{} {prompt}", i + 1));
    }
    menu.push_str("\nType a question, /history, /help, or /quit.");
    menu
}

/// Listener that prints every new assistant turn.
pub fn reply_printer(assistant_name: String) -> HistoryListener {
    Box::new(move |history: &[Turn]| {
        if let Some(turn) = history.last().filter(|t| t.role == Role::Assistant) {
            println!("{}\n", format_turn(turn, &assistant_name));
        }
    })
}

/// Send one question; the reply is printed by the session's listener.
pub async fn ask_once(session: &ChatSession, question: &str) -> SendOutcome {
    submit(session, question).await
}

async fn submit(session: &ChatSession, text: &str) -> SendOutcome {
    eprintln!("{} is thinking...", session.options().assistant_name);
    let outcome = session.send(text).await;
    if let SendOutcome::Ignored(reason) = outcome {
        tracing::debug!(?reason, "Input ignored");
    }
    outcome
}

/// Read lines from stdin until EOF or `/quit`.
pub async fn run_interactive(
    session: Arc<ChatSession>,
    quick_prompts: &[String],
) -> std::io::Result<()> {
    let name = session.options().assistant_name.clone();
    println!("{}\n", render_history(&session.history().await, &name));
    println!("{}\n", quick_prompt_menu(quick_prompts));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = String::new();

    loop {
        print!("{}", if pending.is_empty() { "> " } else { ". " });
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if let Some(continued) = line.strip_suffix('\\') {
            pending.push_str(continued);
            pending.push('\n');
            continue;
        }
        pending.push_str(&line);
        let text = std::mem::take(&mut pending);

        match parse_input(&text) {
            Input::Nothing => {}
            Input::Quit => break,
            Input::Help => println!("{}\n", quick_prompt_menu(quick_prompts)),
            Input::History => println!("{}\n", render_history(&session.history().await, &name)),
            Input::Quick(n) => match n.checked_sub(1).and_then(|i| quick_prompts.get(i)) {
                Some(prompt) => {
                    println!("You: {prompt}");
                    submit(&session, prompt).await;
                }
                None => println!("No quick prompt /{n}.\n"),
            },
            Input::Ask(question) => {
                if submit(&session, &question).await == SendOutcome::Ignored(IgnoreReason::InFlight) {
                    println!("Still working on the previous question.\n");
                }
            }
        }
    }

    Ok(())
}

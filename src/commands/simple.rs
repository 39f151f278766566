//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::Scale;
use crate::output::formatters::feedback_badge;
use crate::session::{Mode, Narration, Phase, SolverConfig, SolverSession};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(
    scale: Scale,
    mode: Mode,
    secret: Option<&str>,
    config: SolverConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Number Baseball - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match mode {
        Mode::Attack => {
            println!("I picked a secret {scale}-digit code with no repeated digits.");
            println!("Type a guess and I'll answer with strikes (S) and balls (B).\n");
        }
        Mode::Defense => {
            println!("Think of a {scale}-digit code with no repeated digits.");
            println!("After each of my guesses, reply with feedback like '1s 2b'.\n");
        }
        Mode::Autoplay => println!("Watch me solve a {scale}-digit code on my own.\n"),
    }
    println!("Commands: 'stop' to end the game, 'quit' to exit\n");

    loop {
        let mut session = SolverSession::with_config(scale, mode, secret, config);
        print_all(session.run(|| false));

        while session.phase() != Phase::Finished {
            let prompt = if mode == Mode::Defense {
                "Feedback"
            } else {
                "Your guess"
            };
            let input = get_user_input(prompt)?;

            let reply = match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "stop" => session.cancel(),
                _ if mode == Mode::Defense => session.submit_feedback_text(&input),
                _ => session.submit_guess(&input),
            };

            match reply {
                Ok(narration) => print_narration(&narration),
                Err(err) => println!("❌ {err}\n"),
            }
            print_all(session.run(|| false));
        }

        if !session.history().is_empty() {
            println!("\n  History:");
            for (i, turn) in session.history().iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    turn.guess.to_string().bright_white().bold(),
                    feedback_badge(turn.feedback, scale)
                );
            }
        }
        if let Some(secret) = session.revealed_secret() {
            println!("  Secret: {}", secret.to_string().bright_yellow().bold());
        }
        println!();

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_all(narrations: impl Iterator<Item = Narration>) {
    for narration in narrations {
        print_narration(&narration);
    }
}

fn print_narration(narration: &Narration) {
    match &narration.outcome {
        Some(outcome) if outcome.is_solved() => {
            println!("\n{}", narration.text.bright_green().bold());
        }
        Some(_) => println!("\n{}", narration.text.yellow().bold()),
        None => println!("{}\n", narration.text),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("stdin closed");
    }

    Ok(input.trim().to_string())
}

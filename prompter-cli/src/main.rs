use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use prompter::recipes::{
    number_prompt, secure_prompt, simple_prompt, single_value_prompt, yes_no_prompt,
};
use prompter::{Optionality, Prompt, Prompter, PrompterOptions, Validity};
use tracing_subscriber::EnvFilter;

const COLORS: [&str; 4] = ["red", "Green", "YELLOW", "puRple"];

/// Runs a short questionnaire and prints the collected answers.
#[derive(Parser, Debug)]
#[command(name = "prompter", version, about)]
struct Cli {
    /// Keep leading and trailing whitespace in answers
    #[arg(long)]
    no_trim: bool,

    /// Text appended to every question
    #[arg(long, default_value = ":")]
    suffix: String,

    /// Give up on a question after this many attempts
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Print the answers as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn questionnaire() -> Vec<Prompt> {
    vec![
        simple_prompt("Your name", Optionality::Required, ""),
        secure_prompt("Access token", Optionality::NotRequired, ""),
        single_value_prompt(
            "Favourite color",
            &format!("[{}]", COLORS.join(", ")),
            &COLORS,
            Optionality::NotRequired,
            "red",
        ),
        number_prompt(
            "Worker threads",
            "(1-16)",
            Some((1, 16)),
            Optionality::NotRequired,
            4,
        ),
        yes_no_prompt("Save these answers?", "[y/n]", Optionality::Required, false),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = PrompterOptions::default()
        .trim_space(!cli.no_trim)
        .prompt_suffix(cli.suffix)
        .max_attempts(cli.max_attempts);
    tracing::debug!(?options, "starting questionnaire");
    // Keep stdout clean for the JSON document.
    let output: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let terminal = prompter::Terminal::new();
    if !terminal.masks_secure_entry() {
        tracing::warn!("input is not a terminal, secure entries will not be masked");
    }
    let mut session = Prompter::with_options(terminal, output, options);

    if !cli.json {
        println!("------------------------------------------------------------");
        println!("  prompter {}", env!("CARGO_PKG_VERSION"));
        println!("------------------------------------------------------------");
    }

    let prompts = questionnaire();
    let results = session.run(&prompts);

    if cli.json {
        let answers: serde_json::Map<String, serde_json::Value> = prompts
            .iter()
            .zip(&results)
            .map(|(prompt, result)| {
                serde_json::to_value(result).map(|value| (prompt.message.clone(), value))
            })
            .collect::<Result<_, _>>()
            .context("failed to serialize answers")?;
        println!("{}", serde_json::to_string_pretty(&answers)?);
        return Ok(());
    }

    println!();
    for (prompt, result) in prompts.iter().zip(&results) {
        let shown = if prompt.secure_entry && !result.value.to_string().is_empty() {
            "********".to_string()
        } else {
            result.value.to_string()
        };
        let marker = match result.validity {
            Validity::Valid => "",
            Validity::Invalid => " (no answer, default used)",
        };
        println!("{}: {}{}", prompt.message, shown, marker);
    }

    Ok(())
}

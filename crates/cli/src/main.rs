//! CLI for asking a local model questions about document files.

use anyhow::{Context, Result};
use clap::Parser;
use docask_ollama::{ClientConfig, OllamaClient, DEFAULT_HOST};
use std::path::PathBuf;

mod assemble;

/// Environment variable consulted for the endpoint base URL when `--host`
/// is not given.
const HOST_ENV_VAR: &str = "DOCASK_HOST";

/// Ask a local Ollama model about the contents of document files.
#[derive(Parser, Debug)]
#[command(name = "docask")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document(s) (.txt, .md, .json, .docx, .pdf, .pptx)
    #[arg(required_unless_present = "prompt")]
    files: Vec<PathBuf>,

    /// Prompt text placed before the document contents
    #[arg(short, long)]
    prompt: Option<String>,

    /// Model name passed to the endpoint
    #[arg(short, long, default_value = "llama3.2")]
    model: String,

    /// Endpoint base URL (default: $DOCASK_HOST, then the local Ollama port)
    #[arg(long)]
    host: Option<String>,

    /// Wait for the complete answer instead of streaming tokens
    #[arg(long)]
    no_stream: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let prompt = build_prompt(&args)?;

    // Resolve the endpoint once, here; the client never touches the
    // process environment itself.
    let base_url = args
        .host
        .clone()
        .or_else(|| std::env::var(HOST_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    if args.verbose {
        eprintln!("Endpoint: {}", base_url);
        eprintln!("Model: {}", args.model);
    }

    let client = OllamaClient::new(ClientConfig {
        base_url,
        model: args.model.clone(),
    });

    if args.no_stream {
        let answer = client
            .generate(&prompt)
            .context("generation request failed")?;
        println!("{}", answer);
    } else {
        let stdout = std::io::stdout();
        client
            .generate_streaming(&prompt, stdout.lock())
            .context("generation request failed")?;
    }

    Ok(())
}

/// Combine the prompt override and the extracted documents.
///
/// The combined document text IS the prompt when no override is given;
/// with both, the override leads and the documents follow after a blank
/// line.
fn build_prompt(args: &Args) -> Result<String> {
    let documents = if args.files.is_empty() {
        None
    } else {
        Some(
            assemble::combine_documents(&args.files)
                .context("failed to assemble documents")?,
        )
    };

    match (&args.prompt, documents) {
        (Some(prompt), Some(documents)) => Ok(format!("{}\n\n{}", prompt, documents)),
        (Some(prompt), None) => Ok(prompt.clone()),
        (None, Some(documents)) => Ok(documents),
        (None, None) => anyhow::bail!("no input files or prompt given"),
    }
}

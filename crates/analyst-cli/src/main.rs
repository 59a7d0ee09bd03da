//! One-shot statement analysis with an interactive analyst chat loop.
//!
//! Usage: `analyst-cli <statement.pdf>` prints the extracted fact table,
//! ratios and advisories, then (when an LLM key is configured) drops into a
//! prompt loop grounded in the statement context. Without a path argument
//! the chat runs context-free.

use anyhow::Context;
use llm_client::ChatClient;
use statement_analyzer::StatementAnalysisEngine;
use statement_core::{format_amount, format_pct, StatementAnalysis};
use std::io::{self, BufRead, Write};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let chat = ChatClient::from_env();
    let mut context: Option<String> = None;

    if let Some(path) = std::env::args().nth(1) {
        let bytes = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
        info!(path = %path, bytes = bytes.len(), "analyzing statement");

        let engine = StatementAnalysisEngine::new();
        let analysis = engine.analyze_document(&bytes)?;
        print_analysis(&analysis);
        context = Some(analysis.context);
    } else {
        println!("Usage: analyst-cli <statement.pdf>");
        println!("No statement provided; chatting without financial context.");
    }

    if !chat.is_configured() {
        println!("\nLLM_API_KEY not configured; chat disabled.");
        return Ok(());
    }

    println!("\nChat mode (type 'q' to quit)");
    let stdin = io::stdin();
    loop {
        print!("\nYour prompt> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let prompt = line.trim();
        if prompt.eq_ignore_ascii_case("q") {
            println!("Bye!");
            break;
        }
        if prompt.is_empty() {
            continue;
        }

        match chat.ask(context.as_deref(), prompt).await {
            Ok(answer) => println!("\nAssistant: {answer}"),
            Err(e) => eprintln!("[LLM error] {e}"),
        }
    }

    Ok(())
}

fn print_analysis(analysis: &StatementAnalysis) {
    println!("--- Extracted Metrics (Current vs Prior) ---");
    for entry in &analysis.facts.dual {
        println!(
            "{:<44} {:>14} {:>14}",
            entry.label,
            format_amount(entry.current),
            format_amount(entry.prior)
        );
    }

    println!("\n--- Other Key Balances ---");
    for entry in &analysis.facts.single {
        println!("{:<44} {:>14}", entry.label, format_amount(entry.value));
    }

    println!("\n--- Ratios ---");
    for ratio in &analysis.ratios {
        println!("{:<34} {:>10}", ratio.name, format_pct(ratio.value));
    }

    println!("\n--- Advisories ---");
    for advisory in &analysis.advisories {
        println!("[{}] {}", advisory.severity.to_label(), advisory.message);
    }
}

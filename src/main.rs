// ClaimLens CLI Shell
// Thin presentation shell: one claim in, one rendered verdict out

use std::io::Read;

use claimlens::init_logging;
use claimlens::models::VerdictView;
use claimlens::services::classify_client::{ClassifyClient, ClientConfig};
use claimlens::services::dispatcher::{Dispatcher, Outcome, SubmitState};

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn claim_from_args(args: &[String]) -> Option<String> {
    let mut words = Vec::new();
    let mut skip_next = false;
    for arg in &args[1..] {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--api-url" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        words.push(arg.clone());
    }
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn print_view(view: &VerdictView) {
    println!("{}  (confidence {}%)", view.label_text, view.confidence_percent);
    if !view.reasons.is_empty() {
        println!("reasons:");
        for reason in &view.reasons {
            println!("  - {}", reason);
        }
    }
    if !view.highlights.is_empty() {
        println!("top cues:");
        for token in &view.highlights {
            println!("  {:<20} {:+.2}", token.token, token.score);
        }
    }
    println!(
        "model: {}  latency: {} ms",
        view.model_version, view.latency_ms
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let as_json = has_flag(&args, "--json");

    let claim = match claim_from_args(&args) {
        Some(text) => text,
        None => {
            // No positional text; read the claim from stdin
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut config = ClientConfig::from_env();
    if let Some(url) = parse_arg_value(&args, "--api-url") {
        config.base_url = url.trim_end_matches('/').to_string();
    }

    let client = ClassifyClient::new(&config)?;
    let mut dispatcher = Dispatcher::new(client);

    match dispatcher.submit(&claim).await {
        SubmitState::Settled(Outcome::Success(result)) => {
            let view = VerdictView::from_result(result);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
            Ok(())
        }
        SubmitState::Settled(Outcome::Failure(message)) => {
            eprintln!("{}", message);
            std::process::exit(1)
        }
        _ => {
            eprintln!(
                "Usage:\n  claimlens [--api-url <url>] [--json] <claim text>\n  echo <claim text> | claimlens\n\nThe claim must be non-empty."
            );
            std::process::exit(2)
        }
    }
}

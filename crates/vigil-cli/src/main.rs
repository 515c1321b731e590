//! Vigil - message threat triage from the command line.
//!
//! `vigil scan` scores a message from arguments or stdin; `vigil serve`
//! runs the HTTP API for external intake layers.

use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vigil_engine::{analyze, AnalysisResult};
use vigil_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Indicator entries shown in human-readable output.
const MAX_INDICATORS_SHOWN: usize = 12;

/// Preview length for the summary line.
const PREVIEW_LEN: usize = 75;

/// Vigil - threat triage for free-text messages
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
struct Args {
    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a message (from arguments, or stdin when omitted)
    Scan {
        /// The message text; joined with spaces when given as several words
        text: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vigil={},warn", log_level)));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    match args.command {
        Command::Scan { text, json } => {
            let input = if text.is_empty() {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read message from stdin")?;
                buffer
            } else {
                text.join(" ")
            };

            let result = analyze(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render(&result, &input));
            }
        }
        Command::Serve { host, port } => {
            let config = ServerConfig::default().with_host(host).with_port(port);
            let server = Server::new(config)?;
            tracing::info!("Listening on {}", server.addr());
            server.run().await?;
        }
    }

    Ok(())
}

/// Renders a result for terminal display.
fn render(result: &AnalysisResult, source: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("[{}]\n", result.priority().label()));
    out.push_str(&format!(
        "{} | {}/100 | {}\n",
        result.category.name(),
        result.risk_score,
        preview(source)
    ));
    out.push_str(&format!(
        "threat level: {} | confidence: {}%\n",
        result.threat_level.name(),
        result.confidence
    ));
    out.push_str(&format!(
        "layer scores -> keyword: {}, context: {}, behavior: {}\n",
        result.layers.keyword, result.layers.context, result.layers.behavior
    ));

    if result.indicators.is_empty() {
        out.push_str("no strong indicators found; message appears safe\n");
    } else {
        out.push_str("indicators:\n");
        for indicator in result.indicators.iter().take(MAX_INDICATORS_SHOWN) {
            out.push_str(&format!(
                "  \"{}\" -> {} ({})\n",
                indicator.phrase,
                indicator.reason,
                indicator.layer.name()
            ));
        }
        if result.indicators.len() > MAX_INDICATORS_SHOWN {
            out.push_str(&format!(
                "  ... and {} more\n",
                result.indicators.len() - MAX_INDICATORS_SHOWN
            ));
        }
    }

    out
}

/// Truncates the source text for the summary line.
fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > PREVIEW_LEN {
        let cut: String = trimmed.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}

mod config;
mod session;

use config::ParkAgentConfig;
use parkvoice_core::nps::redact_key;
use parkvoice_core::tools::native::register_park_tools;
use parkvoice_core::{DialogCatalog, NpsClient, ParkSkill, ToolRegistry};
use session::{LineOutcome, Session};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{info, warn};

fn build_catalog(cfg: &ParkAgentConfig) -> DialogCatalog {
    let (catalog, unknown) = DialogCatalog::new().with_overrides(&cfg.dialogs);
    for name in unknown {
        warn!(target: "park_agent", dialog = %name, "Ignoring override for unknown dialog");
    }
    catalog
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging / tracing
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,parkvoice_core=info,park_agent=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration (defaults + env + optional TOML overlay)
    let cfg = ParkAgentConfig::load();
    info!(
        target: "park_agent",
        base_url = %cfg.nps.base_url,
        api_key = %redact_key(&cfg.nps.api_key),
        "Starting park agent"
    );
    if cfg.nps.api_key.is_empty() {
        warn!(target: "park_agent", "No NPS API key set (NPS_API_KEY or [nps].api_key); lookups will fail");
    }

    let nps = Arc::new(NpsClient::new(&cfg.nps));
    let registry = ToolRegistry::new();
    register_park_tools(&registry, Arc::clone(&nps));

    let mut session = Session::new(ParkSkill::new(nps), build_catalog(&cfg), registry);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(prompt_for(&session, &cfg).as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                info!(target: "park_agent", "Shutting down...");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match session.respond(&line).await {
            LineOutcome::Say(text) => {
                stdout.write_all(format!("{}\n", text).as_bytes()).await?;
            }
            LineOutcome::Reload => {
                let fresh = ParkAgentConfig::load_from(&cfg.path, ParkAgentConfig::default());
                session.skill().set_api_key(fresh.nps.api_key.clone()).await;
                session.set_catalog(build_catalog(&fresh));
                stdout.write_all(b"Settings reloaded\n").await?;
            }
            LineOutcome::Quit => break,
            LineOutcome::Nothing => {}
        }
    }

    Ok(())
}

fn prompt_for(session: &Session, cfg: &ParkAgentConfig) -> String {
    if session.skill().awaiting_answer() {
        format!("(quiz) {}", cfg.prompt)
    } else {
        cfg.prompt.clone()
    }
}

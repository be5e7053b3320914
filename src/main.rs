use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use swarmfund_assistant::{
    create_router, AppState, Config, NatsRelay, StrategyTier, TranscriptUpdate,
    VoiceSessionController,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "swarmfund-assistant", version, about = "SwarmFund voice assistant service")]
struct Cli {
    /// Config file path (without extension)
    #[arg(short, long, default_value = "config/swarmfund-assistant")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Open the assistant session as soon as the server starts
        #[arg(long)]
        auto_start: bool,
    },
    /// Print the strategy catalog
    Strategies,
    /// Hold a voice session and print the transcript until Ctrl-C
    Talk,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("SwarmFund Assistant v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    match cli.command {
        Command::Serve { auto_start } => serve(cfg, auto_start).await,
        Command::Strategies => {
            print_strategies();
            Ok(())
        }
        Command::Talk => talk(cfg).await,
    }
}

fn controller(cfg: &Config) -> VoiceSessionController {
    let relay = Arc::new(NatsRelay::new(&cfg.relay));
    VoiceSessionController::new(relay, cfg.assistant.clone())
}

async fn serve(cfg: Config, auto_start: bool) -> Result<()> {
    let assistant = controller(&cfg);
    if auto_start {
        assistant.spawn_initialize();
    }

    let app = create_router(AppState::new(assistant.clone()));
    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .context("HTTP server failed")?;

    assistant.teardown().await;
    info!("Shutdown complete");

    Ok(())
}

fn print_strategies() {
    for tier in StrategyTier::ALL {
        let strategy = tier.strategy();
        let investment = tier.investment();
        println!(
            "{:<7} {:<13} risk={:<7} returns={:<7} {}",
            tier, strategy.name, strategy.risk, strategy.returns, strategy.color
        );
        println!(
            "        {} ({}): {}",
            investment.title, investment.metrics.term, investment.description
        );
    }
}

async fn talk(cfg: Config) -> Result<()> {
    let assistant = controller(&cfg);
    let mut updates = assistant.subscribe();
    let guard = assistant.mount();

    info!("Assistant session requested, press Ctrl-C to end");

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(TranscriptUpdate::Appended(message)) => {
                    println!("{:?}: {}", message.role, message.content);
                }
                Ok(TranscriptUpdate::Reset) => println!("--- call started ---"),
                Err(RecvError::Lagged(skipped)) => warn!("Skipped {} transcript updates", skipped),
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    drop(guard);
    assistant.teardown().await;

    let stats = assistant.stats().await;
    info!(
        "Session closed ({} transcript messages, {} greetings)",
        stats.transcript_messages, stats.greetings_sent
    );

    Ok(())
}

//! Startguard console agent.
//!
//! Watches the configured autostart scopes and walks the operator through
//! every newly added entry: a console alert, then an allow/deny prompt.
//! Denied entries are removed from the store.
//!
//! Usage:
//!   startguard watch --scope ~/.config/autostart
//!   startguard list --scope ~/.config/autostart
//!   startguard add MyTool "mytool --daemon" --scope ~/.config/autostart

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use startguard_agent::{AgentConfig, ConsoleSink, StdinPrompt};
use startguard_store::{DirScope, ScopeStore, ScopedStore, StoreAdapter};
use startguard_types::EntryName;
use startguard_watch::{shutdown_channel, WatchConfig, WatchLoop};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "startguard")]
#[command(about = "Watch autostart entries and review new ones")]
struct Args {
    /// Store scope directory, highest priority first (repeatable)
    #[arg(short, long)]
    scope: Vec<PathBuf>,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "5000")]
    interval_ms: u64,

    /// Seconds to wait for a decision before denying (0 = wait forever)
    #[arg(long, default_value = "0")]
    prompt_timeout_secs: u64,

    /// Path to a JSON config file; flags win over file values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch for new entries and review them (default)
    Watch,
    /// List entries across all configured scopes
    List,
    /// Write an entry into the primary scope
    Add {
        /// Entry name
        name: String,
        /// Command string the entry runs
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let settings = resolve_settings(&args)?;
    let store = Arc::new(build_store(&settings.scopes));

    match args.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(store, settings).await,
        Command::List => list(store.as_ref()).await,
        Command::Add { name, value } => add(store.as_ref(), &name, &value).await,
    }
}

/// Effective settings after merging flags over the optional config file.
struct Settings {
    scopes: Vec<PathBuf>,
    interval: Duration,
    prompt_timeout: Option<Duration>,
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    let file = match &args.config {
        Some(path) => AgentConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AgentConfig::default(),
    };

    let scopes = if args.scope.is_empty() {
        file.scopes.unwrap_or_default()
    } else {
        args.scope.clone()
    };
    if scopes.is_empty() {
        bail!("no store scopes configured; pass --scope or set 'scopes' in the config file");
    }

    let interval_ms = if args.interval_ms != 5000 {
        args.interval_ms
    } else {
        file.interval_ms.unwrap_or(args.interval_ms)
    };

    let timeout_secs = if args.prompt_timeout_secs != 0 {
        Some(args.prompt_timeout_secs)
    } else {
        file.prompt_timeout_secs
    };

    Ok(Settings {
        scopes,
        interval: Duration::from_millis(interval_ms),
        prompt_timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
    })
}

fn build_store(scopes: &[PathBuf]) -> ScopedStore {
    let scopes: Vec<Arc<dyn ScopeStore>> = scopes
        .iter()
        .map(|path| Arc::new(DirScope::new(path)) as Arc<dyn ScopeStore>)
        .collect();
    ScopedStore::new(scopes)
}

async fn watch(store: Arc<ScopedStore>, settings: Settings) -> Result<()> {
    let config = WatchConfig {
        poll_interval: settings.interval,
        prompt_timeout: settings.prompt_timeout,
        ..WatchConfig::default()
    };

    println!("\n========================================");
    println!("  Startguard Watching");
    println!("========================================");
    for scope in &settings.scopes {
        println!("  Scope:    {}", scope.display());
    }
    println!("  Interval: {:?}", settings.interval);
    println!("========================================\n");

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        info!("Interrupt received, shutting down");
        let _ = shutdown_tx.send(true);
    });

    let watcher = WatchLoop::new(
        store,
        Arc::new(ConsoleSink),
        Arc::new(StdinPrompt::new()),
        config,
        shutdown_rx,
    );
    watcher.run().await?;
    Ok(())
}

async fn list(store: &ScopedStore) -> Result<()> {
    let snapshot = store.list().await?;
    if snapshot.is_empty() {
        println!("No autostart entries found.");
        return Ok(());
    }
    for name in snapshot.iter() {
        println!("{name}");
    }
    Ok(())
}

async fn add(store: &ScopedStore, name: &str, value: &str) -> Result<()> {
    let name = EntryName::new(name).context("invalid entry name")?;
    store.upsert(&name, value).await?;
    println!("Added '{name}' to the primary scope.");
    Ok(())
}

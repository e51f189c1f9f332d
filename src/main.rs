//! Binary entry point for neuros.
//!
//! This binary provides the terminal console for the neuros capture system.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow console output in the main binary
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{CommandFactory, Parser, Subcommand};
use neuros::config::NeuralConfig;
use neuros::rendering::{format_audit_check, render, render_plan};
use neuros::services::AuditSnapshot;
use neuros::{
    AppState, CategoryMode, Error, Feature, FilesystemStore, GeminiClient, ImageResolution,
    IngestionService, PropagationService, Screen, StrategistService, SubscriptionTier,
    VisualArtifact, VisualizerService, can_access, route,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Neuros - an AI-assisted capture console and productivity dashboard.
#[derive(Parser)]
#[command(name = "neuros")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Capture a thought under the active mode.
    Capture {
        /// The text to capture.
        text: Vec<String>,
    },

    /// Render a screen.
    Show {
        /// Screen name (dashboard, strategist, vault, visualizer,
        /// subscription, propagation). Unknown names fall back to the
        /// dashboard.
        screen: Option<String>,
    },

    /// Switch the active category mode.
    Mode {
        /// Mode name (academic, commerce, creative, general).
        mode: String,
    },

    /// Choose a subscription plan.
    Upgrade {
        /// Tier name (basic, pro, quantum).
        tier: String,
    },

    /// Build a strategy plan.
    Plan {
        /// The objective.
        #[arg(short, long)]
        goal: String,

        /// Environmental constraints.
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Generate or refine a blueprint image.
    Visualize {
        /// Concept prompt, or the refinement instruction with `--refine`.
        prompt: String,

        /// Blueprint quality: 1K, 2K, or 4K.
        #[arg(short, long, default_value = "1K")]
        resolution: String,

        /// Output file for the image.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Refine an existing image instead of generating a new one.
        #[arg(long)]
        refine: Option<PathBuf>,
    },

    /// Synthesize a motion simulation.
    Simulate {
        /// Concept prompt.
        prompt: String,
    },

    /// Run the audit suite and the propagation playback.
    Propagate {
        /// Run only the audit suite.
        #[arg(long)]
        audit_only: bool,

        /// Pause between playback steps in milliseconds.
        #[arg(long)]
        step_delay_ms: Option<u64>,
    },

    /// Show status.
    Status,

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Initializes the tracing subscriber, writing to stderr.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if verbose { "neuros=debug" } else { "neuros=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<NeuralConfig, Box<dyn std::error::Error>> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return NeuralConfig::load_from_file(std::path::Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("NEUROS_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return NeuralConfig::load_from_file(std::path::Path::new(&config_path))
                .map_err(std::convert::Into::into);
        }
    }

    // Otherwise, load from default location
    Ok(NeuralConfig::load_default())
}

/// Runs the selected command.
fn run_command(cli: Cli, config: NeuralConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Capture { text } => cmd_capture(&config, text),
        Commands::Show { screen } => cmd_show(&config, screen),
        Commands::Mode { mode } => cmd_mode(&config, &mode),
        Commands::Upgrade { tier } => cmd_upgrade(&config, &tier),
        Commands::Plan { goal, context } => cmd_plan(&config, &goal, &context),
        Commands::Visualize {
            prompt,
            resolution,
            output,
            refine,
        } => cmd_visualize(&config, &prompt, &resolution, output, refine),
        Commands::Simulate { prompt } => cmd_simulate(&config, &prompt),
        Commands::Propagate {
            audit_only,
            step_delay_ms,
        } => cmd_propagate(&config, audit_only, step_delay_ms),
        Commands::Status => cmd_status(&config),
        Commands::Config { show } => cmd_config(config, show),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

/// Opens the persisted application state.
fn open_state(config: &NeuralConfig) -> Result<AppState<FilesystemStore>, Box<dyn std::error::Error>> {
    let store = FilesystemStore::new(&config.data_dir)?;
    Ok(AppState::load(store))
}

/// Builds the engine client from configuration.
fn build_engine(config: &NeuralConfig) -> GeminiClient {
    GeminiClient::from_config(&config.engine)
}

/// Prints the subscription view as the redirect target after a gate denial.
fn redirect_to_subscription(state: &mut AppState<FilesystemStore>, feature: Feature) {
    println!(
        "Access denied: {} requires a higher tier (current: {}).",
        feature,
        state.tier()
    );
    println!();
    state.set_screen(Screen::Subscription);
    println!("{}", render(&route(state)));
}

/// Capture command.
fn cmd_capture(config: &NeuralConfig, text: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = text.join(" ");
    let mut state = open_state(config)?;

    let service = IngestionService::new(build_engine(config));
    let item = service.ingest(&text, state.mode())?;

    println!("Node ingested:");
    println!("  ID: {}", item.id);
    println!("  Kind: {}", item.kind);
    println!("  Content: {}", item.content);
    state.append_item(item);

    if let Some(credits) = state.remaining_credits() {
        println!("  Credits remaining: {credits}");
    }

    Ok(())
}

/// Show command.
fn cmd_show(config: &NeuralConfig, screen: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = open_state(config)?;

    // Unknown or missing screen names fall back to the dashboard.
    let screen = screen
        .as_deref()
        .and_then(Screen::parse)
        .unwrap_or_default();
    state.set_screen(screen);

    println!("{}", render(&route(&state)));
    Ok(())
}

/// Mode command.
fn cmd_mode(config: &NeuralConfig, mode: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = CategoryMode::parse(mode).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Unknown mode '{mode}' (expected academic, commerce, creative, or general)"
        ))
    })?;

    let mut state = open_state(config)?;
    state.set_mode(parsed);
    println!(
        "Sector switched to {} ({}).",
        parsed,
        parsed.label()
    );
    Ok(())
}

/// Upgrade command.
fn cmd_upgrade(config: &NeuralConfig, tier: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = SubscriptionTier::parse(tier).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Unknown tier '{tier}' (expected basic, pro, or quantum)"
        ))
    })?;

    let mut state = open_state(config)?;
    state.set_tier(parsed);
    println!("Protocol switched to the {parsed} tier.");
    println!();
    println!("{}", render(&route(&state)));
    Ok(())
}

/// Plan command.
fn cmd_plan(config: &NeuralConfig, goal: &str, context: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = open_state(config)?;

    // Gate before anything leaves the machine: on denial the goal and
    // context are not sent anywhere.
    if !can_access(Feature::StrategyPlanning, state.tier()) {
        redirect_to_subscription(&mut state, Feature::StrategyPlanning);
        return Ok(());
    }

    let service = StrategistService::new(build_engine(config));
    match service.build_plan(goal, context) {
        Ok(plan) => println!("{}", render_plan(&plan)),
        Err(Error::InvalidInput(cause)) => return Err(Error::InvalidInput(cause).into()),
        Err(e) => {
            tracing::debug!(error = %e, "Plan synthesis failed");
            println!("No plan available: the architect engine failed. Retry manually.");
        },
    }

    Ok(())
}

/// Visualize command.
fn cmd_visualize(
    config: &NeuralConfig,
    prompt: &str,
    resolution: &str,
    output: Option<PathBuf>,
    refine: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = ImageResolution::parse(resolution).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Unknown resolution '{resolution}' (expected 1K, 2K, or 4K)"
        ))
    })?;

    let mut state = open_state(config)?;
    if resolution.is_premium() && !can_access(Feature::HighResImaging, state.tier()) {
        redirect_to_subscription(&mut state, Feature::HighResImaging);
        return Ok(());
    }

    let service = VisualizerService::new(build_engine(config));
    let result = if let Some(ref source) = refine {
        let bytes = std::fs::read(source)?;
        let artifact = VisualArtifact::new(bytes, "image/png");
        service.refine(&artifact, prompt)
    } else {
        service.generate(prompt, resolution)
    };

    match result {
        Ok(artifact) => {
            let path = output.unwrap_or_else(|| {
                if refine.is_some() {
                    PathBuf::from("refinement.png")
                } else {
                    PathBuf::from("blueprint.png")
                }
            });
            std::fs::write(&path, &artifact.bytes)?;
            println!("Blueprint written to {} ({}).", path.display(), artifact.mime_type);
        },
        Err(Error::Unauthorized(cause)) => {
            println!("Authorization missing: {cause}");
            println!("Set GEMINI_API_KEY (or engine.api_key in config.toml) and retry.");
        },
        Err(e) => {
            tracing::debug!(error = %e, "Visual generation failed");
            println!("Generation failed. Retry in a moment.");
        },
    }

    Ok(())
}

/// Simulate command.
fn cmd_simulate(config: &NeuralConfig, prompt: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = open_state(config)?;
    if !can_access(Feature::VideoSimulation, state.tier()) {
        redirect_to_subscription(&mut state, Feature::VideoSimulation);
        return Ok(());
    }

    let service = VisualizerService::new(build_engine(config));
    println!("Preparing simulation (this may take a minute)...");
    match service.simulate(prompt) {
        Ok(video) => println!("Simulation ready: {}", video.uri),
        Err(Error::Unauthorized(cause)) => {
            println!("Authorization missing: {cause}");
            println!("Set GEMINI_API_KEY (or engine.api_key in config.toml) and retry.");
        },
        Err(e) => {
            tracing::debug!(error = %e, "Video simulation failed");
            println!("Simulation failed. Retry in a moment.");
        },
    }

    Ok(())
}

/// Propagate command.
fn cmd_propagate(
    config: &NeuralConfig,
    audit_only: bool,
    step_delay_ms: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state(config)?;

    let snapshot = AuditSnapshot {
        engine_key_present: config.engine.api_key.is_some()
            || std::env::var("GEMINI_API_KEY").is_ok(),
        item_count: state.items().len(),
        tier: state.tier(),
        store_healthy: state.store().root().is_dir(),
    };

    let mut service = PropagationService::new();
    if let Some(ms) = step_delay_ms {
        service = service.with_step_delay(Duration::from_millis(ms));
    }

    // Ctrl-C stops playback at the next step boundary.
    let cancel = service.cancel_flag();
    let _ = ctrlc::set_handler(move || {
        cancel.store(true, std::sync::atomic::Ordering::Relaxed);
    });

    println!("SYSTEM AUDIT");
    let report = service.run_audit(&snapshot, |check| {
        println!("  {}", format_audit_check(check));
    });
    println!(
        "  {} passed, {} failed",
        report.passed(),
        report.failed()
    );

    if audit_only {
        return Ok(());
    }

    if !report.is_ready() {
        println!();
        println!("Propagation blocked by audit failures.");
        return Ok(());
    }

    println!();
    println!("PROPAGATION PLAYBACK (simulated)");
    let completed = service.run_push(snapshot.item_count, |event| {
        println!("  {}", event.line);
    });
    if !completed {
        println!("  playback cancelled");
    }

    Ok(())
}

/// Status command.
fn cmd_status(config: &NeuralConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state(config)?;

    println!("Neuros Status");
    println!("=============");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Data Directory: {}", config.data_dir.display());
    println!("Captured Nodes: {}", state.items().len());
    println!("Active Sector: {}", state.mode());
    println!("Subscription Tier: {}", state.tier());

    let key_status = if config.engine.api_key.is_some() || std::env::var("GEMINI_API_KEY").is_ok()
    {
        "Configured"
    } else {
        "Not configured (classification degrades to notes)"
    };
    println!("Engine Key: {key_status}");

    println!();
    println!("Use 'neuros config --show' to view full configuration");
    Ok(())
}

/// Config command.
fn cmd_config(config: NeuralConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!("Data Directory: {}", config.data_dir.display());
        println!();
        println!("Engine:");
        println!(
            "  API Key: {}",
            if config.engine.api_key.is_some() {
                "(configured)"
            } else {
                "(from GEMINI_API_KEY)"
            }
        );
        println!(
            "  Base URL: {}",
            config.engine.base_url.as_deref().unwrap_or("(default)")
        );
        println!(
            "  Classify Model: {}",
            config
                .engine
                .classify_model
                .as_deref()
                .unwrap_or("(default)")
        );
        println!(
            "  Strategy Model: {}",
            config
                .engine
                .strategy_model
                .as_deref()
                .unwrap_or("(default)")
        );
        println!(
            "  Image Model: {}",
            config.engine.image_model.as_deref().unwrap_or("(default)")
        );
        println!(
            "  Video Model: {}",
            config.engine.video_model.as_deref().unwrap_or("(default)")
        );
    } else {
        println!("Use --show to display configuration");
    }

    Ok(())
}

/// Completions command.
fn cmd_completions(shell: clap_complete::Shell) -> Result<(), Box<dyn std::error::Error>> {
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "neuros",
        &mut std::io::stdout(),
    );
    Ok(())
}

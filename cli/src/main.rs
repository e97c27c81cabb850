//! CLI entrypoint for tri-health
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use trihealth_application::{
    LoadModelsUseCase, LoadProgressNotifier, ModelContext, NoProgress, RunPredictionInput,
    RunPredictionUseCase,
};
use trihealth_domain::{Condition, OutputFormat};
use trihealth_infrastructure::{ConfigLoader, FileConfig, FileModelStore};
use trihealth_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, TuiApp, TuiConfig,
    build_form,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting tri-health");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    if cli.list_fields {
        let conditions: Vec<Condition> = match cli.condition {
            Some(condition) => vec![condition],
            None => Condition::ALL.to_vec(),
        };
        for condition in conditions {
            println!("{}", ConsoleFormatter::format_schema(condition));
        }
        return Ok(());
    }

    let file_config = load_config(&cli)?;

    let output_config = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(file_config.output.format)
            .unwrap_or_default(),
        color: file_config.output.color,
    };
    output_config.apply_color();

    // === Dependency Injection ===
    let store = Arc::new(build_store(&cli, &file_config));
    let context = load_models(store, cli.quiet).await?;
    let model_info = Condition::ALL.map(|c| context.classifier(c).describe());
    let use_case = RunPredictionUseCase::new(Arc::new(context));

    match cli.condition {
        Some(condition) => predict_once(&use_case, condition, &cli.set, output_config.format),
        None => {
            let tui_config = TuiConfig::new(
                file_config.tui.tick_rate_ms,
                file_config.tui.show_features,
                file_config.tui.flash_seconds,
            );
            let mut app = TuiApp::new(use_case, tui_config).with_model_info(model_info);
            app.run().await.context("Terminal UI failed")?;
            Ok(())
        }
    }
}

/// Set up tracing.
///
/// The TUI owns the terminal, so interactive sessions log to a daily file
/// under the platform data directory; one-shot runs log to stderr.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !cli.is_interactive() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(&dir, "tri-health.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tri-health")
        .join("logs")
}

/// Load and validate configuration; any error-level issue aborts startup
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
            eprintln!("config warning: {}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    Ok(config)
}

/// Artifact store from `--models-dir` or `[models]`
fn build_store(cli: &Cli, config: &FileConfig) -> FileModelStore {
    let dir = cli
        .models_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.models.dir));

    Condition::ALL
        .into_iter()
        .fold(FileModelStore::new(dir), |store, condition| {
            match config.models.file_for(condition) {
                Some(file) => store.with_file(condition, file),
                None => store,
            }
        })
}

async fn load_models(store: Arc<FileModelStore>, quiet: bool) -> Result<ModelContext> {
    let progress: Box<dyn LoadProgressNotifier> = if quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let context = LoadModelsUseCase::new(store)
        .execute_with_progress(progress.as_ref())
        .await
        .context("Failed to load models")?;

    info!("Models ready: {:?}", context);
    Ok(context)
}

fn predict_once(
    use_case: &RunPredictionUseCase,
    condition: Condition,
    assignments: &[String],
    format: OutputFormat,
) -> Result<()> {
    let form = build_form(condition, assignments)?;
    let report = use_case.execute(RunPredictionInput::new(form))?;

    println!("{}", ConsoleFormatter.format(&report, format));

    if !report.outcome.is_available() {
        bail!("{} prediction unavailable", condition.display_name());
    }
    Ok(())
}

//! AssessCraft - curriculum assessment design wizard
//!
//! CLI entry point. Without a subcommand the five-step wizard TUI runs;
//! the suggest/plan subcommands drive the same generation boundary in
//! batch mode for scripting.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use assesscraft::cli::{Cli, Command};
use assesscraft::config::Config;
use assesscraft::llm::create_client;
use assesscraft::tui;
use assesscraft::wizard::{AssessmentPlan, Generator, OUTCOME_SLOTS, Selections, SelectionsUpdate};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assesscraft")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("assesscraft.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "AssessCraft loaded config: provider={} model={}",
        config.llm.provider, config.llm.model
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Suggest { field, level, outcomes }) => {
            debug!(%field, %level, "main: matched Suggest command");
            config.validate().context("Invalid configuration")?;
            cmd_suggest(&config, field, level, outcomes).await
        }
        Some(Command::Plan {
            field,
            level,
            outcomes,
            assessment_type,
        }) => {
            debug!(%field, %level, %assessment_type, "main: matched Plan command");
            config.validate().context("Invalid configuration")?;
            cmd_plan(&config, field, level, outcomes, &assessment_type).await
        }
        Some(Command::Levels) => {
            debug!("main: matched Levels command");
            cmd_levels(&config)
        }
        None => {
            debug!("main: no command specified, launching wizard TUI");
            config.validate().context("Invalid configuration")?;
            tui::run(&config).await
        }
    }
}

/// Build selections from batch-mode CLI arguments
fn batch_selections(field: String, level: String, outcomes: Vec<String>) -> Result<Selections> {
    debug!(%field, %level, count = outcomes.len(), "batch_selections: called");
    if outcomes.len() > OUTCOME_SLOTS {
        eyre::bail!("At most {} outcomes are supported, got {}", OUTCOME_SLOTS, outcomes.len());
    }

    let mut slots: [String; OUTCOME_SLOTS] = Default::default();
    for (slot, outcome) in slots.iter_mut().zip(outcomes) {
        *slot = outcome;
    }

    let mut selections = Selections::new();
    selections.update(SelectionsUpdate::field(field));
    selections.update(SelectionsUpdate::level(level));
    selections.update(SelectionsUpdate::outcomes(slots));
    Ok(selections)
}

/// Suggest assessment types in batch mode
async fn cmd_suggest(config: &Config, field: String, level: String, outcomes: Vec<String>) -> Result<()> {
    debug!("cmd_suggest: called");
    let selections = batch_selections(field, level, outcomes)?;
    let client = create_client(&config.llm)?;
    let generator = Generator::new(client, &config.llm);

    let options = generator
        .propose_assessment_types(&selections)
        .await
        .context("Failed to generate assessment suggestions")?;

    println!("{} Suggested assessments:", "✓".green());
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.cyan());
    }
    Ok(())
}

/// Generate a detailed plan in batch mode
async fn cmd_plan(
    config: &Config,
    field: String,
    level: String,
    outcomes: Vec<String>,
    assessment_type: &str,
) -> Result<()> {
    debug!(%assessment_type, "cmd_plan: called");
    let selections = batch_selections(field, level, outcomes)?;
    let client = create_client(&config.llm)?;
    let generator = Generator::new(client, &config.llm);

    let plan = generator
        .produce_detailed_plan(&selections, assessment_type)
        .await
        .context("Failed to generate assessment plan")?;

    match plan {
        AssessmentPlan::Text { assessment_type, details } => {
            println!("{} Plan: {}", "✓".green(), assessment_type.cyan());
            println!();
            println!("{}", details);
        }
        AssessmentPlan::Structured(plan) => {
            println!("{} {}", "✓".green(), plan.title.cyan().bold());
            println!();
            println!("{}", plan.description);
            println!();
            println!("{}", "Design steps:".bold());
            for (i, step) in plan.design_steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
            println!("{}", "Tips:".bold());
            for tip in &plan.tips {
                println!("  - {}", tip);
            }
            if !plan.suggested_ai_tools.is_empty() {
                println!();
                println!("{}", "Suggested AI tools:".bold());
                for tool in &plan.suggested_ai_tools {
                    println!("  - {}: {}", tool.tool_name.yellow(), tool.description);
                }
            }
        }
    }
    Ok(())
}

/// List the configured student levels
fn cmd_levels(config: &Config) -> Result<()> {
    debug!("cmd_levels: called");
    println!("Student levels:");
    for level in &config.wizard.levels {
        println!("  - {}", level.cyan());
    }
    Ok(())
}

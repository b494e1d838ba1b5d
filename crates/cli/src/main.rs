mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use launchplan_core::{render_markdown, synthesize, CoreError, PlanRequest};
use server::{create_router, state::AppState};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{LaunchConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "launchplan")]
#[command(about = "Turn product-marketing inputs into a go-to-market plan", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Serve the plan API (and the web form, if configured)
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        app_dir: Option<PathBuf>,

        #[arg(long)]
        no_browser: bool,
    },
    /// Synthesize a plan from a JSON file of inputs
    Generate {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => init_config(&cli.config).await,
        Some(Commands::Serve {
            port,
            host,
            app_dir,
            no_browser,
        }) => {
            let mut config = LaunchConfig::load(&cli.config).await?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if app_dir.is_some() {
                config.server.app_dir = app_dir;
            }
            serve(config, !no_browser).await
        }
        Some(Commands::Generate {
            input,
            format,
            output,
        }) => generate(&input, format, output.as_deref()).await,
        None => {
            let config = LaunchConfig::load(&cli.config).await?;
            serve(config, true).await
        }
    }
}

async fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    LaunchConfig::default().write(path).await?;

    println!("{} {}", "Created".green().bold(), path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set [server].app_dir to your built web form, if any");
    println!("  2. Run 'launchplan serve'");

    Ok(())
}

async fn serve(config: LaunchConfig, open_browser: bool) -> Result<()> {
    init_tracing();

    let server_config = config.server;
    let mut state = AppState::new();
    if let Some(app_dir) = &server_config.app_dir {
        if !app_dir.is_dir() {
            bail!("App directory not found: {}", app_dir.display());
        }
        tracing::info!("Serving web form from {}", app_dir.display());
        state = state.with_app_dir(app_dir.clone());
    }

    let app = create_router(state);

    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let base_url = format!("http://localhost:{}", server_config.port);
    println!();
    println!("{}", "Launchplan".bold());
    println!("════════════════════════════════════════");
    println!();
    println!("  API Server:  {}", base_url);
    println!("  Swagger UI:  {}/swagger-ui", base_url);
    if server_config.app_dir.is_some() {
        println!("  Web form:    {}", base_url);
    }
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    if open_browser && server_config.app_dir.is_some() {
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
            if let Err(e) = open::that(&base_url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        });
    }

    axum::serve(listener, app).await?;

    Ok(())
}

async fn generate(input: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let content = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let rendered = render_plan(&content, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render_plan(content: &str, format: OutputFormat) -> Result<String> {
    let request: PlanRequest =
        serde_json::from_str(content).context("Input is not a valid JSON object")?;

    let input = match request.validate() {
        Ok(input) => input,
        Err(CoreError::Validation { missing }) => {
            bail!("Missing required fields: {}", missing.join(", "))
        }
    };

    let plan = synthesize(&input);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&plan)?),
        OutputFormat::Markdown => Ok(render_markdown(&plan)),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchplan=info,server=info,tower_http=info".into()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "productName": "Forge",
        "productSummary": "Forge ships preview environments for every pull request.",
        "audience": "Startup founders and platform developers",
        "problem": "Slow review cycles",
        "differentiation": "Zero-config previews",
        "pricing": "Free for open source, $20 per user",
        "brandVoice": "Playful",
        "primaryGoal": "Increase activation",
        "successMetric": "1,000 active teams",
        "launchHorizon": "30 days"
    }"#;

    #[test]
    fn test_render_plan_json() {
        let rendered = render_plan(INPUT, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["personaInsights"][0]["name"], "Builder");
        assert_eq!(value["messagingPillars"].as_array().unwrap().len(), 4);
        assert_eq!(value["launchPhases"][2]["duration"], "Days 21-30");
    }

    #[test]
    fn test_render_plan_markdown() {
        let rendered = render_plan(INPUT, OutputFormat::Markdown).unwrap();
        assert!(rendered.contains("### Builder Velocity"));
    }

    #[test]
    fn test_render_plan_reports_missing_fields() {
        let err = render_plan(r#"{"productName": "Forge", "pricing": ""}"#, OutputFormat::Json)
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Missing required fields: productSummary, audience"));
        assert!(message.contains("pricing"));
        assert!(!message.contains("productName"));
    }

    #[test]
    fn test_render_plan_rejects_invalid_json() {
        assert!(render_plan("[1, 2", OutputFormat::Json).is_err());
    }
}

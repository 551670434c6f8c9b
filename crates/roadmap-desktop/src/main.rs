use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};

use roadmap_core::display::format_roadmap;
use roadmap_core::parse::parse_roadmap;
use roadmap_desktop::commands::{self, CANCELLED_NOTICE};
use roadmap_desktop::config::{self, CredentialSource, RoadmapConfig};
use roadmap_desktop::state::{AppState, PdfExporter};

#[derive(Parser)]
#[command(name = "roadmap", about = "Day-by-day learning roadmaps from a language model")]
struct Cli {
    /// AWS region (overrides the config file)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Bedrock model or inference profile ID (overrides the config file)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a roadmap and show it
    Generate {
        /// What you want to learn
        #[arg(long)]
        topic: String,
        /// Time you have, in days
        #[arg(long)]
        days: String,
        /// Your current level: Beginner, Intermediate or Advanced
        #[arg(long, default_value = "Beginner")]
        level: String,
        /// Save the roadmap as a PDF
        #[arg(long)]
        pdf: bool,
        /// Save the roadmap as a PDF and open it
        #[arg(long)]
        open: bool,
        /// Print the parsed roadmap as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render raw roadmap text from a file to PDF
    Render {
        /// File holding raw roadmap text
        input: PathBuf,
        /// Open the PDF after saving
        #[arg(long)]
        open: bool,
    },
    /// Open the last exported PDF
    Open,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration (credentials redacted)
    Show,
    /// Update and save the configuration
    Set {
        /// Use a named AWS profile for credentials
        #[arg(long)]
        profile: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Where PDF exports are written
        #[arg(long)]
        export_path: Option<PathBuf>,
        /// Check the credentials with STS before saving
        #[arg(long)]
        verify: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = config::load_or_default()?;
    if let Some(region) = cli.region {
        config.region = region;
    }
    if let Some(model) = cli.model {
        config.model_id = model;
    }

    match cli.command {
        Commands::Generate {
            topic,
            days,
            level,
            pdf,
            open,
            json,
        } => {
            let state = AppState::from_config(&config).await;
            let Some(raw) = commands::generate(&state, &topic, &days, &level).await? else {
                println!("{CANCELLED_NOTICE}");
                return Ok(());
            };

            let roadmap = parse_roadmap(&raw);
            if json {
                println!("{}", serde_json::to_string_pretty(&roadmap)?);
            } else {
                println!("{}", format_roadmap(&roadmap));
            }

            if pdf || open {
                export(&state.exporter, &raw, open).await?;
            }
        }
        Commands::Render { input, open } => {
            let raw = std::fs::read_to_string(&input)
                .wrap_err_with(|| format!("failed to read {}", input.display()))?;
            export(&PdfExporter::from_config(&config), &raw, open).await?;
        }
        Commands::Open => {
            commands::open_pdf(&config::export_path(&config))?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let info = config::config_info(&config);
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
            ConfigCommands::Set {
                profile,
                timeout,
                export_path,
                verify,
            } => {
                apply_settings(&mut config, profile, timeout, export_path)?;
                if verify {
                    let aws_config =
                        roadmap_desktop::aws::build_aws_config(&config.region, &config.credentials)
                            .await;
                    let identity = roadmap_desktop::aws::validate_credentials(&aws_config).await?;
                    println!("Credentials valid for {}", identity.arn);
                }
                let path = config::save_config(&config)?;
                println!("Config saved to {}", path.display());
            }
        },
    }

    Ok(())
}

async fn export(exporter: &PdfExporter, raw: &str, open: bool) -> Result<()> {
    let path = commands::export_pdf(exporter, raw)
        .await
        .wrap_err("Failed to save PDF")?;
    println!("Roadmap saved as {}", path.display());
    if open {
        commands::open_pdf(&path)?;
    }
    Ok(())
}

fn apply_settings(
    config: &mut RoadmapConfig,
    profile: Option<String>,
    timeout: Option<u64>,
    export_path: Option<PathBuf>,
) -> Result<()> {
    if let Some(profile_name) = profile {
        config.credentials = CredentialSource::Profile { profile_name };
    }
    if let Some(secs) = timeout {
        if secs == 0 {
            return Err(eyre::eyre!("timeout must be at least one second"));
        }
        config.request_timeout_secs = secs;
    }
    if export_path.is_some() {
        config.export_path = export_path;
    }
    Ok(())
}

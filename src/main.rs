use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use nwt::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Display currency override (e.g. USD, EGP)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for nwt::AppCommand {
    fn from(cmd: Commands) -> nwt::AppCommand {
        match cmd {
            Commands::Summary => nwt::AppCommand::Summary,
            Commands::Breakdown => nwt::AppCommand::Breakdown,
            Commands::Upcoming => nwt::AppCommand::Upcoming,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration and a starter snapshot
    Setup,
    /// Display the wealth dashboard
    Summary,
    /// Display asset allocation breakdown
    Breakdown,
    /// Display upcoming installment payments and rent collections
    Upcoming,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => {
            nwt::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.currency.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;
    use nwt::core::config::AppConfig;

    let config_path = AppConfig::default_config_path()?;

    if config_path.exists() {
        anyhow::bail!(
            "Configuration file already exists at {}",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
currency: "USD"

# Static fallback rates anchored to USD. Gold and Silver are spot prices
# per troy ounce in USD.
rates:
  USD: 1.0
  EUR: 0.92
  GBP: 0.79
  EGP: 47.5
  KWD: 0.31
  TRY: 32.8
  Gold: 2350.0
  Silver: 28.5

provider:
  base_url: "https://api.exchangerate-api.com"
"#;

    std::fs::write(&config_path, default_config)
        .with_context(|| format!("Failed to write config file to {}", config_path.display()))?;
    tracing::info!("Created default configuration at {}", config_path.display());

    let snapshot_path = AppConfig::default_snapshot_path()?;
    if !snapshot_path.exists() {
        if let Some(parent) = snapshot_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let starter_snapshot = r#"---
assets:
  real_estate: []
  under_development: []
  cash:
    - location: "Checking account"
      amount: 0.0
      currency: "USD"
  gold: []
  silver: []
  other: []
  salary:
    amount: 0.0
    currency: "USD"

liabilities:
  loans: []
  installments: []

monthly_expenses:
  household: []
"#;

        std::fs::write(&snapshot_path, starter_snapshot).with_context(|| {
            format!("Failed to write snapshot file to {}", snapshot_path.display())
        })?;
        tracing::info!("Created starter snapshot at {}", snapshot_path.display());
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use podium_client::NuitScraper;
use podium_core::{ScrapeResult, ScraperConfig};

#[derive(Parser)]
#[command(name = "podium", version, about = "Nuit de l'Info teams and challenges scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the teams registered on a challenge page
    Teams {
        /// Challenge page to read (defaults to the principal challenge)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Show a team's members and selected challenges
    Team {
        /// Team identifier, as found in /inscription/equipes/{id}
        id: String,
    },

    /// List the challenge catalogue
    Challenges,

    /// Show a challenge's details and registered teams
    Challenge {
        /// Challenge identifier, as found in /inscription/defis/{id}
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("podium=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ScraperConfig::from_env().context("Invalid scraper configuration")?;
    let scraper = NuitScraper::from_config(&config).context("Failed to create scraper")?;

    tracing::info!(base_url = %config.base_url, max_retries = config.max_retries, "Scraper ready");

    match cli.command {
        Commands::Teams { url } => {
            let result = match url {
                Some(url) => scraper.scrape_teams(&url).await,
                None => scraper.scrape_principal_teams().await,
            };
            print_result(result)
        }
        Commands::Team { id } => print_result(scraper.scrape_team_details(&id).await),
        Commands::Challenges => print_result(scraper.scrape_challenges().await),
        Commands::Challenge { id } => print_result(scraper.scrape_challenge_details(&id).await),
    }
}

/// Print a successful envelope to stdout; turn a failure into an error.
fn print_result<T: Serialize>(result: ScrapeResult<T>) -> Result<()> {
    if let ScrapeResult::Failure(failure) = &result {
        let context: Vec<String> = failure
            .context
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        anyhow::bail!("{} ({})", failure.message, context.join(", "));
    }

    let envelope = result.to_envelope().map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}

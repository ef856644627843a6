use clap::Parser;
use porter::{Cli, Commands, PorterBot, PorterConfig};
use porter_core::Catalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = PorterConfig::from_file(config)?;
            let token = PorterConfig::token()?;
            let mut bot = PorterBot::new(token, config).await?;
            bot.start().await?;
        }
        Commands::Check { config } => {
            let config = PorterConfig::from_file(config)?;
            let catalog = match &config.catalog_path {
                Some(path) => Catalog::from_file(path)?,
                None => Catalog::builtin()?,
            };
            println!(
                "configuration ok: guild {}, {} questions, {} characters",
                config.guild_id,
                catalog.apply.questions.len(),
                catalog.characters.roster.len()
            );
        }
    }

    Ok(())
}

//! chef-bot binary: `run` starts the bot, `weather` prints a one-off weather preview.

use anyhow::Result;
use chef_bot::{load_config, preview_weather, run_bot, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Weather { city } => {
            let (temperature, feels_like) = preview_weather(city).await?;
            println!("{}", temperature);
            println!("{}", feels_like);
            Ok(())
        }
    }
}

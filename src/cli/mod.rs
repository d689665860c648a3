use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{init_database, serve};

#[derive(Parser)]
#[command(name = "gamehub")]
#[command(about = "Gamified referral and wallet backend with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (bootstraps the schema on startup)
    Serve {
        /// Database URL
        ///
        /// For SQLite databases, use:
        ///   - sqlite://gamehub.db?mode=rwc (created next to the binary)
        ///   - sqlite:///absolute/path/to/database.sqlite
        #[arg(
            short,
            long,
            env = "DATABASE_URL",
            default_value = "sqlite://gamehub.db?mode=rwc"
        )]
        database_url: String,
        /// Address and port to listen on
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Initialize the database using migrations
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL")]
        database_url: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                database_url,
                bind_address,
            } => {
                serve(&database_url, &bind_address).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
        }
        Ok(())
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{serve, validate};

#[derive(Parser)]
#[command(name = "tclimate")]
#[command(about = "T-Climate forecast error dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Path to the citywise forecast metrics CSV
        ///
        /// Expected header: City,ARIMA_RMSE,LSTM_Residual_RMSE,Hybrid_RMSE
        #[arg(
            short,
            long,
            env = "METRICS_CSV",
            default_value = "data/citywise_forecast_rmse.csv"
        )]
        metrics_csv: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load a metrics CSV and report what the dashboard would serve
    ///
    /// Exits non-zero if the file is missing, a required column is absent,
    /// or a numeric value does not parse.
    Validate {
        /// Path to the citywise forecast metrics CSV
        #[arg(short, long, env = "METRICS_CSV")]
        metrics_csv: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                metrics_csv,
                bind_address,
            } => {
                serve(&metrics_csv, &bind_address).await?;
            }
            Commands::Validate { metrics_csv } => {
                validate(&metrics_csv)?;
            }
        }
        Ok(())
    }
}

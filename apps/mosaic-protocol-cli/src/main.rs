use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "mosaic-protocol")]
#[command(about = "Mosaic Protocol CLI - batched canvas operations on Solana")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paint spaces from a CSV of x,y,r,g,b,mint rows
    SetColors {
        /// Pixel CSV file
        pixels: PathBuf,

        /// Frame index to paint
        #[arg(short, long, default_value = "0")]
        frame: u8,

        /// Color cluster account of the frame
        #[arg(long)]
        color_cluster: String,

        /// Time cluster account of the frame
        #[arg(long)]
        time_cluster: String,

        /// Fee payer keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,
    },

    /// Register owned spaces from a CSV of x,y,mint rows
    Register {
        /// Spaces CSV file
        spaces: PathBuf,

        /// Owner keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,
    },

    /// Allow color changes on an owned space
    MakeEditable {
        /// Space x coordinate
        #[arg(short, long)]
        x: i64,

        /// Space y coordinate
        #[arg(short, long)]
        y: i64,

        /// Mint of the space NFT
        #[arg(short, long)]
        mint: String,

        /// Time cluster account of the neighborhood
        #[arg(long)]
        time_cluster: String,

        /// Owner keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,
    },

    /// Initialize the color and time clusters for a neighborhood frame
    InitFrame {
        /// Neighborhood x coordinate
        #[arg(long)]
        neighborhood_x: i64,

        /// Neighborhood y coordinate
        #[arg(long)]
        neighborhood_y: i64,

        /// Frame index to initialize
        #[arg(short, long)]
        frame: u64,

        /// Fee payer keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
        rpc_url: String,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SetColors {
            pixels,
            frame,
            color_cluster,
            time_cluster,
            keypair,
            rpc_url,
        } => {
            commands::set_colors::execute(pixels, frame, color_cluster, time_cluster, keypair, rpc_url)
                .await
        }

        Commands::Register {
            spaces,
            keypair,
            rpc_url,
        } => commands::register::execute(spaces, keypair, rpc_url).await,

        Commands::MakeEditable {
            x,
            y,
            mint,
            time_cluster,
            keypair,
            rpc_url,
        } => commands::make_editable::execute(x, y, mint, time_cluster, keypair, rpc_url).await,

        Commands::InitFrame {
            neighborhood_x,
            neighborhood_y,
            frame,
            keypair,
            rpc_url,
        } => {
            commands::init_frame::execute(neighborhood_x, neighborhood_y, frame, keypair, rpc_url)
                .await
        }
    }
}

use crate::commands::load_wallet;
use crate::error::{CliError, CliResult};
use mosaic_protocol_batch_tx::{BatchTxClient, Keypair, RpcClient};
use mosaic_protocol_sdk::{build_init_frame_ix, AddressFinder, InitFrameArgs, MAX_FRAMES};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn execute(
    neighborhood_x: i64,
    neighborhood_y: i64,
    frame: u64,
    keypair: PathBuf,
    rpc_url: String,
) -> CliResult<()> {
    if frame >= MAX_FRAMES {
        return Err(CliError::InvalidInput(format!(
            "frame {frame} out of range, a neighborhood holds {MAX_FRAMES} frames"
        )));
    }

    let wallet = load_wallet(&keypair)?;
    let payer = wallet.pubkey();

    // The cluster accounts are too large for PDAs; fresh keypairs co-sign
    // their own creation.
    let color_cluster = Keypair::new();
    let time_cluster = Keypair::new();

    let instruction = build_init_frame_ix(
        &AddressFinder::default(),
        &color_cluster.pubkey(),
        &time_cluster.pubkey(),
        frame,
        &payer,
        InitFrameArgs {
            neighborhood_x,
            neighborhood_y,
        },
    )?;

    let rpc = Arc::new(RpcClient::new(rpc_url));
    let client = BatchTxClient::new(rpc, wallet);
    let confirmation = client
        .send_transaction(&[instruction], &[&color_cluster, &time_cluster])
        .await?;

    println!("Initialized frame {frame} for neighborhood ({neighborhood_x}, {neighborhood_y})");
    println!("  color cluster: {}", color_cluster.pubkey());
    println!("  time cluster:  {}", time_cluster.pubkey());
    println!("  transaction:   {}", confirmation.signature);
    Ok(())
}

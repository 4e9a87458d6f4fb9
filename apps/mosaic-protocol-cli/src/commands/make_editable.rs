use crate::commands::{load_wallet, parse_pubkey};
use crate::error::CliResult;
use mosaic_protocol_batch_tx::{BatchTxClient, RpcClient};
use mosaic_protocol_sdk::{
    build_make_editable_ix, find_space_ata, AddressFinder, MakeEditableArgs,
};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn execute(
    x: i64,
    y: i64,
    mint: String,
    time_cluster: String,
    keypair: PathBuf,
    rpc_url: String,
) -> CliResult<()> {
    let wallet = load_wallet(&keypair)?;
    let payer = wallet.pubkey();
    let mint = parse_pubkey(&mint)?;
    let space_ata = find_space_ata(&payer, &mint);

    let instruction = build_make_editable_ix(
        &AddressFinder::default(),
        &parse_pubkey(&time_cluster)?,
        &payer,
        &space_ata,
        MakeEditableArgs {
            space_x: x,
            space_y: y,
        },
    )?;

    let rpc = Arc::new(RpcClient::new(rpc_url));
    let client = BatchTxClient::new(rpc, wallet);
    let confirmation = client.send_transaction(&[instruction], &[]).await?;

    println!(
        "Space ({x}, {y}) is now editable: {} at slot {}",
        confirmation.signature, confirmation.slot
    );
    Ok(())
}

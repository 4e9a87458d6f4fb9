use crate::commands::{load_wallet, parse_pubkey};
use crate::config::{read_rows, PixelRow};
use crate::error::{CliError, CliResult};
use mosaic_protocol_batch_tx::{BatchTxClient, RpcClient};
use mosaic_protocol_sdk::{
    build_change_color_brief_ix, change_color_brief_args, find_space_ata, AddressFinder,
    FrameAccounts,
};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn execute(
    pixels: PathBuf,
    frame: u8,
    color_cluster: String,
    time_cluster: String,
    keypair: PathBuf,
    rpc_url: String,
) -> CliResult<()> {
    let wallet = load_wallet(&keypair)?;
    let payer = wallet.pubkey();
    let rows: Vec<PixelRow> = read_rows(&pixels)?;
    println!("Painting {} pixels as {}", rows.len(), payer);

    let finder = AddressFinder::default();
    let frame_accounts = FrameAccounts {
        color_cluster: parse_pubkey(&color_cluster)?,
        time_cluster: parse_pubkey(&time_cluster)?,
    };

    let mut instructions = Vec::with_capacity(rows.len());
    for row in &rows {
        let mint = parse_pubkey(&row.mint)?;
        let space_ata = find_space_ata(&payer, &mint);
        let args = change_color_brief_args(row.x, row.y, frame, (row.r, row.g, row.b))?;
        instructions.push(build_change_color_brief_ix(
            &finder,
            &frame_accounts,
            &payer,
            &space_ata,
            &payer,
            args,
        )?);
    }

    let rpc = Arc::new(RpcClient::new(rpc_url));
    let client = BatchTxClient::new(rpc, wallet);
    let report = client.send_instructions(instructions).await?;

    println!(
        "Painted {} of {} pixels",
        report.num_succeeded(),
        report.total()
    );
    if !report.all_succeeded() {
        return Err(CliError::Incomplete {
            succeeded: report.num_succeeded(),
            total: report.total(),
        });
    }
    Ok(())
}

use crate::commands::{load_wallet, parse_pubkey};
use crate::config::{read_rows, SpaceRow};
use crate::error::{CliError, CliResult};
use mosaic_protocol_batch_tx::{BatchTxClient, RpcClient};
use mosaic_protocol_sdk::{
    build_init_space_metadata_ix, find_space_ata, AddressFinder, InitSpaceMetadataArgs,
};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn execute(spaces: PathBuf, keypair: PathBuf, rpc_url: String) -> CliResult<()> {
    let wallet = load_wallet(&keypair)?;
    let payer = wallet.pubkey();
    let rows: Vec<SpaceRow> = read_rows(&spaces)?;
    println!("Registering {} spaces for {}", rows.len(), payer);

    let finder = AddressFinder::default();
    let mut instructions = Vec::with_capacity(rows.len());
    for row in &rows {
        let mint = parse_pubkey(&row.mint)?;
        let space_ata = find_space_ata(&payer, &mint);
        instructions.push(build_init_space_metadata_ix(
            &finder,
            &mint,
            &space_ata,
            &payer,
            InitSpaceMetadataArgs {
                space_x: row.x,
                space_y: row.y,
            },
        )?);
    }

    let rpc = Arc::new(RpcClient::new(rpc_url));
    let client = BatchTxClient::new(rpc, wallet);
    let report = client.send_instructions(instructions).await?;

    println!(
        "Registered {} of {} spaces",
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

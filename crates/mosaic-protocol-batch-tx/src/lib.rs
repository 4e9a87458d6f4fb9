/*!
# Mosaic Protocol Batch Transaction Client

Transaction packing, batched submission, and retry logic for Mosaic canvas
operations on Solana. Arbitrary instruction lists (color changes, space
registrations, mints) are greedily packed into minimally-many transactions
under the wire-size ceiling, dispatched in bounded concurrent windows,
rebroadcast while unconfirmed, and folded back into per-instruction results.

## Quick Start

```rust
use mosaic_protocol_batch_tx::{BatchTxClient, Instruction, Keypair, RpcClient};
use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc = Arc::new(RpcClient::new("https://api.devnet.solana.com".to_string()));
let wallet = Keypair::new();
let client = BatchTxClient::new(rpc, wallet);

let instructions: Vec<Instruction> = vec![/* color changes, registrations, ... */];

let report = client.send_instructions(instructions).await?;
println!(
    "confirmed {} of {} instructions",
    report.num_succeeded(),
    report.total()
);
# Ok(())
# }
```

## Outcome model

Every transaction ends in one of three states: `Confirmed`, `Failed` (an
explicit on-chain program error; never retried, resubmitting cannot
succeed), or `Retryable` (fate unknown at timeout; the transaction may
still land, so it is retried once with a fresh blockhash and otherwise
reported as ambiguous rather than as a definite failure).
*/

mod batch;
mod client;
mod config;
mod confirm;
mod error;
mod outcome;
mod pack;
mod rpc;
mod signer;
mod size;

pub use batch::BatchSubmitter;
pub use client::BatchTxClient;
pub use config::TxBatchConfig;
pub use confirm::{Confirmation, TxConfirmer};
pub use error::BatchTxError;
pub use outcome::{BatchReport, SubmissionOutcome};
pub use pack::{pack_instruction_sets, pack_instructions, TransactionGroup};
pub use rpc::{SimulateResult, SubmitRpc, TxStatus};
pub use signer::BatchSigner;
pub use size::{
    compact_u16_len, instruction_delta, TxSizeBudget, BASE_TRANSACTION_SIZE, MAX_TRANSACTION_SIZE,
};

// Re-export key Solana types for convenience
pub use solana_client::nonblocking::rpc_client::RpcClient;
pub use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

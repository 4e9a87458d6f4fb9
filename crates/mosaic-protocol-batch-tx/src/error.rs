use solana_sdk::{signature::Signature, signer::SignerError};
use thiserror::Error;

/// Errors surfaced by batch transaction operations.
///
/// Network-level trouble during submission does not appear here: the
/// submitter absorbs it into per-group [`SubmissionOutcome`] entries.
/// These variants cover packing problems, configuration mistakes, and the
/// single-transaction path where the caller wants a hard answer.
///
/// [`SubmissionOutcome`]: crate::SubmissionOutcome
#[derive(Error, Debug)]
pub enum BatchTxError {
    #[error("RPC client error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("signing failed: {0}")]
    Signer(#[from] SignerError),

    #[error("instruction {index} needs {size} bytes alone, over the {limit} byte transaction ceiling")]
    InstructionTooLarge {
        index: usize,
        size: usize,
        limit: usize,
    },

    #[error("no instructions provided")]
    NoInstructions,

    #[error("{sets} instruction sets but {signers} signers")]
    SignerMismatch { sets: usize, signers: usize },

    #[error("transaction {signature} failed on-chain: {reason}")]
    TransactionFailed { signature: Signature, reason: String },

    #[error("timed out awaiting confirmation of {signature}; it may still land")]
    ConfirmationTimeout { signature: Signature },

    #[error("configuration error: {0}")]
    Config(String),
}

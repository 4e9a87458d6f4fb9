use mosaic_protocol_batch_tx::BatchTxError;
use mosaic_protocol_sdk::SdkError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("SDK error: {0}")]
    Sdk(#[from] SdkError),

    #[error("transaction error: {0}")]
    BatchTx(#[from] BatchTxError),

    #[error("invalid keypair file: {0}")]
    InvalidKeypair(String),

    #[error("invalid public key: {0}")]
    InvalidPubkey(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{succeeded} of {total} operations confirmed; run the command again to submit the remainder")]
    Incomplete { succeeded: usize, total: usize },
}

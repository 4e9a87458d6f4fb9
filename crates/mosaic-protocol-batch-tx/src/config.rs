use crate::size::{BASE_TRANSACTION_SIZE, MAX_TRANSACTION_SIZE};
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

/// Configuration for packing and batch submission.
#[derive(Debug, Clone)]
pub struct TxBatchConfig {
    /// Wire-size ceiling for one serialized transaction.
    pub max_transaction_size: usize,

    /// Fixed byte cost every transaction pays before its first instruction.
    pub base_transaction_size: usize,

    /// Hard cap on instructions packed into one transaction.
    pub max_instructions_per_tx: usize,

    /// Hard cap on auxiliary signers packed into one transaction.
    pub max_signers_per_tx: usize,

    /// Transaction groups submitted concurrently per round.
    pub batch_size: usize,

    /// Submission rounds per batch window. Retryable groups are re-signed
    /// against a fresh blockhash and redispatched until this cap.
    pub max_rounds: usize,

    /// Overall deadline for confirming a single transaction.
    pub confirmation_timeout: Duration,

    /// Grace period after the first broadcast before status polling starts.
    pub initial_confirm_delay: Duration,

    /// Interval between rebroadcasts of the identical signed transaction.
    pub rebroadcast_interval: Duration,

    /// Interval between signature status polls.
    pub status_poll_interval: Duration,

    /// Status polls before a transaction's fate is declared ambiguous.
    pub max_status_polls: usize,

    /// Commitment level for blockhash fetches.
    pub commitment: CommitmentConfig,
}

impl Default for TxBatchConfig {
    fn default() -> Self {
        Self {
            max_transaction_size: MAX_TRANSACTION_SIZE,
            base_transaction_size: BASE_TRANSACTION_SIZE,
            max_instructions_per_tx: 48,
            max_signers_per_tx: 12,
            batch_size: 40,
            max_rounds: 2,
            confirmation_timeout: Duration::from_secs(90),
            initial_confirm_delay: Duration::from_secs(2),
            rebroadcast_interval: Duration::from_secs(6),
            status_poll_interval: Duration::from_secs(5),
            max_status_polls: 3,
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

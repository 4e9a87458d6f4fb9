use crate::{
    config::TxBatchConfig, error::BatchTxError, outcome::SubmissionOutcome, rpc::SubmitRpc,
};
use solana_sdk::{
    clock::Slot,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

/// A confirmed transaction.
#[derive(Debug, Clone, Copy)]
pub struct Confirmation {
    pub signature: Signature,
    pub slot: Slot,
}

/// Submits one signed transaction and tracks it to a terminal state.
pub struct TxConfirmer<R> {
    rpc: Arc<R>,
    config: TxBatchConfig,
}

impl<R: SubmitRpc + 'static> TxConfirmer<R> {
    pub fn new(rpc: Arc<R>, config: TxBatchConfig) -> Self {
        Self { rpc, config }
    }

    /// Broadcast `tx` and race confirmation against the configured timeout.
    ///
    /// The identical signed bytes are rebroadcast at a fixed interval for
    /// as long as the operation is live; the chain's blockhash replay
    /// protection deduplicates them, so resending compensates for dropped
    /// gossip without a new signature. Classification is tri-state: an
    /// explicit on-chain error is `Failed` and must never be retried, while
    /// exhausting the poll budget or the timeout is `Retryable`: the
    /// transaction may still land after this call returns, so the caller
    /// must not treat it as a definite no-op.
    pub async fn send_and_confirm(&self, tx: &Transaction) -> SubmissionOutcome {
        let signature = match self.rpc.broadcast_transaction(tx).await {
            Ok(signature) => signature,
            Err(err) => {
                warn!("initial broadcast failed: {err}");
                return SubmissionOutcome::Retryable;
            }
        };

        let (stop, rebroadcast) = self.spawn_rebroadcast(tx.clone());

        let outcome = match timeout(
            self.config.confirmation_timeout,
            self.poll_status(tx, &signature),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(%signature, "confirmation timed out");
                SubmissionOutcome::Retryable
            }
        };

        // Tear the rebroadcast task down before returning so no timer
        // outlives this call.
        let _ = stop.send(true);
        let _ = rebroadcast.await;

        outcome
    }

    /// Single-transaction path for admin flows that want a hard answer:
    /// ambiguity becomes an error instead of a retryable classification.
    pub async fn send_and_confirm_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Confirmation, BatchTxError> {
        let signature = tx.signatures.first().copied().unwrap_or_default();
        match self.send_and_confirm(tx).await {
            SubmissionOutcome::Confirmed { signature, slot } => {
                Ok(Confirmation { signature, slot })
            }
            SubmissionOutcome::Failed { reason } => {
                Err(BatchTxError::TransactionFailed { signature, reason })
            }
            SubmissionOutcome::Retryable => Err(BatchTxError::ConfirmationTimeout { signature }),
        }
    }

    fn spawn_rebroadcast(&self, tx: Transaction) -> (watch::Sender<bool>, JoinHandle<()>) {
        let (stop, mut stopped) = watch::channel(false);
        let rpc = Arc::clone(&self.rpc);
        let interval = self.config.rebroadcast_interval;
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = stopped.changed() => break,
                    _ = sleep(interval) => {
                        if let Err(err) = rpc.broadcast_transaction(&tx).await {
                            debug!("rebroadcast failed: {err}");
                        }
                    }
                }
            }
        });
        (stop, handle)
    }

    async fn poll_status(&self, tx: &Transaction, signature: &Signature) -> SubmissionOutcome {
        sleep(self.config.initial_confirm_delay).await;

        for attempt in 0..self.config.max_status_polls {
            match self.rpc.signature_status(signature).await {
                Ok(Some(status)) => {
                    if let Some(err) = status.err {
                        let reason = self.failure_reason(tx, &err).await;
                        warn!(%signature, "transaction failed: {reason}");
                        return SubmissionOutcome::Failed { reason };
                    }
                    if status.confirmations.map_or(true, |n| n > 0) {
                        debug!(%signature, slot = status.slot, "confirmed");
                        return SubmissionOutcome::Confirmed {
                            signature: *signature,
                            slot: status.slot,
                        };
                    }
                    debug!(%signature, attempt, "processed, awaiting confirmation");
                }
                Ok(None) => debug!(%signature, attempt, "no status yet"),
                Err(err) => debug!(%signature, attempt, "status poll failed: {err}"),
            }
            if attempt + 1 < self.config.max_status_polls {
                sleep(self.config.status_poll_interval).await;
            }
        }

        SubmissionOutcome::Retryable
    }

    /// Best-effort extraction of a program log line explaining `err`; falls
    /// back to the raw error when simulation is unavailable.
    async fn failure_reason(&self, tx: &Transaction, err: &TransactionError) -> String {
        if let Ok(result) = self.rpc.simulate(tx).await {
            if let Some(logs) = result.logs {
                if let Some(line) = logs
                    .iter()
                    .rev()
                    .find(|line| line.starts_with("Program log: "))
                {
                    return line["Program log: ".len()..].to_string();
                }
            }
        }
        err.to_string()
    }
}

use crate::{
    config::TxBatchConfig, confirm::TxConfirmer, outcome::SubmissionOutcome,
    pack::TransactionGroup, rpc::SubmitRpc, signer::BatchSigner,
};
use backoff::ExponentialBackoff;
use futures::future::join_all;
use rand::seq::SliceRandom;
use solana_client::client_error::ClientError;
use solana_sdk::{
    hash::Hash, message::Message, signature::Keypair, transaction::Transaction,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Submits packed transaction groups in bounded concurrent windows with a
/// capped retry protocol.
///
/// Each window is stamped with one fresh blockhash per round, partially
/// signed with per-group auxiliary keypairs, signed by the primary signer
/// in one batched call, and dispatched concurrently. Groups whose fate is
/// ambiguous after the first round are re-signed against a fresh blockhash
/// and redispatched exactly once; there is no unbounded retry.
pub struct BatchSubmitter<R, S> {
    rpc: Arc<R>,
    signer: Arc<S>,
    confirmer: TxConfirmer<R>,
    config: TxBatchConfig,
}

impl<R: SubmitRpc + 'static, S: BatchSigner> BatchSubmitter<R, S> {
    pub fn new(rpc: Arc<R>, signer: Arc<S>, config: TxBatchConfig) -> Self {
        let confirmer = TxConfirmer::new(Arc::clone(&rpc), config.clone());
        Self {
            rpc,
            signer,
            confirmer,
            config,
        }
    }

    /// Submit every group and return one outcome per group, in input order.
    ///
    /// Network-level failures never abort the batch; they surface as
    /// `Failed` or `Retryable` entries. The returned vector always has
    /// exactly one entry per input group. Groups still `Retryable` after
    /// the final round are not confirmed and count as failures in any
    /// summary, but keep their ambiguous classification: the transaction
    /// may still land.
    pub async fn submit_groups(&self, groups: &[TransactionGroup]) -> Vec<SubmissionOutcome> {
        let mut outcomes = Vec::with_capacity(groups.len());
        for window in groups.chunks(self.config.batch_size) {
            outcomes.extend(self.submit_window(window).await);
        }
        outcomes
    }

    async fn submit_window(&self, window: &[TransactionGroup]) -> Vec<SubmissionOutcome> {
        let mut outcomes = vec![SubmissionOutcome::Retryable; window.len()];
        let mut active: Vec<usize> = (0..window.len()).collect();

        for round in 0..self.config.max_rounds {
            if active.is_empty() {
                break;
            }
            info!(round, transactions = active.len(), "submitting round");

            let blockhash = match self.fetch_blockhash().await {
                Ok(hash) => hash,
                Err(err) => {
                    // The round is forfeit; untouched groups stay ambiguous.
                    warn!("blockhash fetch failed, abandoning round: {err}");
                    break;
                }
            };

            let (mut transactions, dispatched) =
                self.sign_auxiliary(window, &active, blockhash, &mut outcomes);

            if let Err(err) = self.signer.sign_all(&mut transactions).await {
                warn!("batch signing failed: {err}");
                for &index in &dispatched {
                    outcomes[index] = SubmissionOutcome::Failed {
                        reason: format!("signing failed: {err}"),
                    };
                }
                break;
            }

            let results = join_all(
                transactions
                    .iter()
                    .map(|tx| self.confirmer.send_and_confirm(tx)),
            )
            .await;

            let mut retry = Vec::new();
            for (index, outcome) in dispatched.into_iter().zip(results) {
                if outcome.is_retryable() {
                    retry.push(index);
                }
                outcomes[index] = outcome;
            }
            debug!(retrying = retry.len(), "round complete");

            // Outcomes are keyed by original index, so shuffling the retry
            // order cannot land a result on the wrong position.
            retry.shuffle(&mut rand::thread_rng());
            active = retry;
        }

        outcomes
    }

    /// Build this round's transactions and apply per-group auxiliary
    /// signatures. A group whose keypairs fail to sign is recorded as
    /// failed without touching its siblings.
    fn sign_auxiliary(
        &self,
        window: &[TransactionGroup],
        active: &[usize],
        blockhash: Hash,
        outcomes: &mut [SubmissionOutcome],
    ) -> (Vec<Transaction>, Vec<usize>) {
        let payer = self.signer.pubkey();
        let mut transactions = Vec::with_capacity(active.len());
        let mut dispatched = Vec::with_capacity(active.len());

        for &index in active {
            let group = &window[index];
            let message =
                Message::new_with_blockhash(&group.instructions, Some(&payer), &blockhash);
            let mut tx = Transaction::new_unsigned(message);

            if !group.signers.is_empty() {
                let keypairs: Vec<&Keypair> = group.signers.iter().collect();
                if let Err(err) = tx.try_partial_sign(&keypairs, blockhash) {
                    outcomes[index] = SubmissionOutcome::Failed {
                        reason: format!("signing failed: {err}"),
                    };
                    continue;
                }
            }

            transactions.push(tx);
            dispatched.push(index);
        }

        (transactions, dispatched)
    }

    /// One blockhash per round, with a short backoff over transient RPC
    /// failures.
    async fn fetch_blockhash(&self) -> Result<Hash, ClientError> {
        let backoff = ExponentialBackoff {
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(2),
            max_elapsed_time: Some(Duration::from_secs(10)),
            ..ExponentialBackoff::default()
        };
        let rpc = Arc::clone(&self.rpc);
        let commitment = self.config.commitment;

        backoff::future::retry(backoff, || {
            let rpc = Arc::clone(&rpc);
            async move {
                rpc.latest_blockhash(commitment)
                    .await
                    .map_err(backoff::Error::transient)
            }
        })
        .await
    }
}

use async_trait::async_trait;
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcSendTransactionConfig, RpcSimulateTransactionConfig},
};
use solana_sdk::{
    clock::Slot,
    commitment_config::CommitmentConfig,
    hash::Hash,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

/// Signature status as reported by the cluster.
#[derive(Debug, Clone)]
pub struct TxStatus {
    pub slot: Slot,
    /// `None` once the transaction is rooted; `Some(0)` while processed but
    /// not yet confirmed at the queried commitment.
    pub confirmations: Option<usize>,
    pub err: Option<TransactionError>,
}

/// Result of a diagnostic simulation.
#[derive(Debug, Clone)]
pub struct SimulateResult {
    pub err: Option<TransactionError>,
    pub logs: Option<Vec<String>>,
}

/// The RPC suspension points the submission pipeline depends on.
///
/// [`RpcClient`] provides the production implementation; tests substitute
/// deterministic transports. The connection is shared read-only across all
/// concurrent operations.
#[async_trait]
pub trait SubmitRpc: Send + Sync {
    async fn latest_blockhash(&self, commitment: CommitmentConfig) -> Result<Hash, ClientError>;

    /// Broadcast `tx` without preflight simulation. Resending the identical
    /// signed bytes is safe: the cluster deduplicates on signature, so
    /// rebroadcast is idempotent.
    async fn broadcast_transaction(&self, tx: &Transaction) -> Result<Signature, ClientError>;

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<TxStatus>, ClientError>;

    /// Diagnostic simulation, used only to enrich failure messages.
    async fn simulate(&self, tx: &Transaction) -> Result<SimulateResult, ClientError>;
}

#[async_trait]
impl SubmitRpc for RpcClient {
    async fn latest_blockhash(&self, commitment: CommitmentConfig) -> Result<Hash, ClientError> {
        let (hash, _) = self.get_latest_blockhash_with_commitment(commitment).await?;
        Ok(hash)
    }

    async fn broadcast_transaction(&self, tx: &Transaction) -> Result<Signature, ClientError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: true,
            // Rebroadcast is handled by the confirmer, not the RPC node.
            max_retries: Some(0),
            ..RpcSendTransactionConfig::default()
        };
        self.send_transaction_with_config(tx, config).await
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<TxStatus>, ClientError> {
        let response = self.get_signature_statuses(&[*signature]).await?;
        Ok(response
            .value
            .into_iter()
            .next()
            .flatten()
            .map(|status| TxStatus {
                slot: status.slot,
                confirmations: status.confirmations,
                err: status.err,
            }))
    }

    async fn simulate(&self, tx: &Transaction) -> Result<SimulateResult, ClientError> {
        let config = RpcSimulateTransactionConfig {
            sig_verify: false,
            replace_recent_blockhash: true,
            ..RpcSimulateTransactionConfig::default()
        };
        let response = self.simulate_transaction_with_config(tx, config).await?;
        Ok(SimulateResult {
            err: response.value.err,
            logs: response.value.logs,
        })
    }
}

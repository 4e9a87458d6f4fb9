use crate::{
    batch::BatchSubmitter,
    config::TxBatchConfig,
    confirm::{Confirmation, TxConfirmer},
    error::BatchTxError,
    outcome::BatchReport,
    pack::{pack_instruction_sets, pack_instructions},
    rpc::SubmitRpc,
    signer::BatchSigner,
};
use solana_sdk::{
    instruction::Instruction, message::Message, pubkey::Pubkey, signature::Keypair,
    transaction::Transaction,
};
use std::sync::Arc;
use tracing::info;

/// High-level client for batched canvas operations.
///
/// Packs arbitrary instruction lists into minimally-many transactions,
/// submits them in bounded concurrent windows with capped retry, and
/// reports per-unit success so the caller can re-invoke the operation for
/// whatever did not confirm. The RPC transport and the signer are injected,
/// never ambient.
pub struct BatchTxClient<R, S> {
    rpc: Arc<R>,
    signer: Arc<S>,
    submitter: BatchSubmitter<R, S>,
    confirmer: TxConfirmer<R>,
    config: TxBatchConfig,
}

impl<R: SubmitRpc + 'static, S: BatchSigner> BatchTxClient<R, S> {
    /// Create a new client with default configuration.
    pub fn new(rpc: Arc<R>, signer: S) -> Self {
        Self::with_config(rpc, signer, TxBatchConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(rpc: Arc<R>, signer: S, config: TxBatchConfig) -> Self {
        let signer = Arc::new(signer);
        let submitter =
            BatchSubmitter::new(Arc::clone(&rpc), Arc::clone(&signer), config.clone());
        let confirmer = TxConfirmer::new(Arc::clone(&rpc), config.clone());
        Self {
            rpc,
            signer,
            submitter,
            confirmer,
            config,
        }
    }

    /// The fee payer's public key.
    pub fn payer_pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Greedily pack `instructions` into transactions and submit them.
    ///
    /// The report expands outcomes back to one flag per input instruction,
    /// in input order.
    pub async fn send_instructions(
        &self,
        instructions: Vec<Instruction>,
    ) -> Result<BatchReport, BatchTxError> {
        if instructions.is_empty() {
            return Err(BatchTxError::NoInstructions);
        }

        let groups = pack_instructions(instructions, &self.config)?;
        info!(transactions = groups.len(), "packed instructions");

        let units: Vec<usize> = groups.iter().map(|group| group.units).collect();
        let outcomes = self.submitter.submit_groups(&groups).await;
        Ok(BatchReport::new(outcomes, units))
    }

    /// Pack atomic instruction sets, one auxiliary signer each, and submit
    /// them. The report expands outcomes to one flag per set.
    pub async fn send_instruction_sets(
        &self,
        sets: Vec<Vec<Instruction>>,
        signers: Vec<Keypair>,
    ) -> Result<BatchReport, BatchTxError> {
        if sets.iter().all(|set| set.is_empty()) {
            return Err(BatchTxError::NoInstructions);
        }

        let groups = pack_instruction_sets(sets, signers, &self.config)?;
        info!(transactions = groups.len(), "packed instruction sets");

        let units: Vec<usize> = groups.iter().map(|group| group.units).collect();
        let outcomes = self.submitter.submit_groups(&groups).await;
        Ok(BatchReport::new(outcomes, units))
    }

    /// Build, sign, and confirm a single transaction. Admin path: a
    /// definite failure or an ambiguous timeout is an error.
    pub async fn send_transaction(
        &self,
        instructions: &[Instruction],
        extra_signers: &[&Keypair],
    ) -> Result<Confirmation, BatchTxError> {
        if instructions.is_empty() {
            return Err(BatchTxError::NoInstructions);
        }

        let blockhash = self.rpc.latest_blockhash(self.config.commitment).await?;
        let payer = self.signer.pubkey();
        let message = Message::new_with_blockhash(instructions, Some(&payer), &blockhash);
        let mut tx = Transaction::new_unsigned(message);
        if !extra_signers.is_empty() {
            tx.try_partial_sign(&extra_signers.to_vec(), blockhash)?;
        }

        let mut transactions = [tx];
        self.signer.sign_all(&mut transactions).await?;
        let [tx] = transactions;

        self.confirmer.send_and_confirm_transaction(&tx).await
    }
}

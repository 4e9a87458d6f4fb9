mod common;

use common::{group, tagged_ix, tagged_ix_with_signer, MockRpc, Scripted};
use async_trait::async_trait;
use mosaic_protocol_batch_tx::{
    BatchSigner, BatchSubmitter, BatchTxClient, BatchTxError, SubmissionOutcome, TxBatchConfig,
};
use solana_sdk::{
    pubkey::Pubkey, signature::Keypair, signer::Signer, transaction::Transaction,
};
use std::sync::Arc;

fn submitter(rpc: Arc<MockRpc>) -> BatchSubmitter<MockRpc, Keypair> {
    BatchSubmitter::new(rpc, Arc::new(Keypair::new()), TxBatchConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_outcome_length_matches_input_when_every_dispatch_fails() {
    let rpc = Arc::new(MockRpc::failing_broadcasts());
    let groups: Vec<_> = (0..4).map(group).collect();

    let outcomes = submitter(Arc::clone(&rpc)).submit_groups(&groups).await;

    assert_eq!(outcomes.len(), groups.len());
    assert!(outcomes.iter().all(|outcome| outcome.is_retryable()));
    // Both rounds ran and neither could place a transaction.
    assert_eq!(rpc.blockhash_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_converges_in_exactly_two_rounds() {
    let rpc = Arc::new(MockRpc::new());
    // Groups 1 and 3 stay unknown through round one, then confirm.
    rpc.script(1, &[Scripted::Pending, Scripted::Pending, Scripted::Pending]);
    rpc.script(3, &[Scripted::Pending, Scripted::Pending, Scripted::Pending]);
    let groups: Vec<_> = (0..5).map(group).collect();

    let outcomes = submitter(Arc::clone(&rpc)).submit_groups(&groups).await;

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|outcome| outcome.is_confirmed()));
    assert_eq!(rpc.blockhash_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_program_error_is_terminal_and_never_retried() {
    let rpc = Arc::new(MockRpc::new());
    rpc.script(1, &[Scripted::ProgramError]);
    let groups: Vec<_> = (0..3).map(group).collect();

    let outcomes = submitter(Arc::clone(&rpc)).submit_groups(&groups).await;

    assert!(outcomes[0].is_confirmed());
    assert!(matches!(outcomes[1], SubmissionOutcome::Failed { .. }));
    assert!(outcomes[2].is_confirmed());
    // The retry set was empty, so no second round was attempted. Had the
    // failed group been re-dispatched its drained script would have
    // reported a confirmation, which must not happen.
    assert_eq!(rpc.blockhash_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retry_shuffle_cannot_move_outcomes() {
    let rpc = Arc::new(MockRpc::new());
    rpc.script(1, &[Scripted::Pending, Scripted::Pending, Scripted::Pending]);
    let groups: Vec<_> = (0..3).map(group).collect();

    let outcomes = submitter(Arc::clone(&rpc)).submit_groups(&groups).await;

    assert!(outcomes.iter().all(|outcome| outcome.is_confirmed()));
    // Only the middle group went through round two.
    assert_eq!(rpc.broadcast_count(0), 1);
    assert_eq!(rpc.broadcast_count(2), 1);
    assert!(rpc.broadcast_count(1) >= 2);
    assert_eq!(rpc.blockhash_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_windows_concatenate_in_input_order() {
    let rpc = Arc::new(MockRpc::new());
    let groups: Vec<_> = (0..5).map(group).collect();

    let config = TxBatchConfig {
        batch_size: 2,
        ..TxBatchConfig::default()
    };
    let submitter = BatchSubmitter::new(Arc::clone(&rpc), Arc::new(Keypair::new()), config);
    let outcomes = submitter.submit_groups(&groups).await;

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|outcome| outcome.is_confirmed()));
    // One blockhash per window: [0,1], [2,3], [4].
    assert_eq!(rpc.blockhash_calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_aux_signing_failure_does_not_abort_siblings() {
    let rpc = Arc::new(MockRpc::new());
    // A keypair that is not a required signer of its message cannot
    // partial-sign it.
    let mut broken = group(0);
    broken.signers = vec![Keypair::new()];
    let groups = vec![broken, group(1)];

    let outcomes = submitter(Arc::clone(&rpc)).submit_groups(&groups).await;

    assert!(matches!(outcomes[0], SubmissionOutcome::Failed { .. }));
    assert!(outcomes[1].is_confirmed());
    assert_eq!(rpc.broadcast_count(0), 0);
}

struct FailingSigner {
    pubkey: Pubkey,
}

#[async_trait]
impl BatchSigner for FailingSigner {
    fn pubkey(&self) -> Pubkey {
        self.pubkey
    }

    async fn sign_all(&self, _transactions: &mut [Transaction]) -> Result<(), BatchTxError> {
        Err(BatchTxError::Config("wallet unavailable".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_primary_signer_failure_still_yields_one_outcome_per_group() {
    let rpc = Arc::new(MockRpc::new());
    let signer = FailingSigner {
        pubkey: Pubkey::new_unique(),
    };
    let groups: Vec<_> = (0..3).map(group).collect();

    let submitter = BatchSubmitter::new(Arc::clone(&rpc), Arc::new(signer), TxBatchConfig::default());
    let outcomes = submitter.submit_groups(&groups).await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes
        .iter()
        .all(|outcome| matches!(outcome, SubmissionOutcome::Failed { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_client_rejects_empty_instruction_list() {
    let rpc = Arc::new(MockRpc::new());
    let client = BatchTxClient::new(rpc, Keypair::new());

    let result = client.send_instructions(Vec::new()).await;
    assert!(matches!(result, Err(BatchTxError::NoInstructions)));
}

#[tokio::test(start_paused = true)]
async fn test_client_reports_per_instruction_success() {
    let rpc = Arc::new(MockRpc::new());
    let client = BatchTxClient::new(Arc::clone(&rpc), Keypair::new());

    let instructions: Vec<_> = (0..6).map(tagged_ix).collect();
    let report = client.send_instructions(instructions).await.unwrap();

    assert_eq!(report.total(), 6);
    assert_eq!(report.num_succeeded(), 6);
    assert!(report.all_succeeded());
}

#[tokio::test(start_paused = true)]
async fn test_client_instruction_sets_expand_per_set() {
    let rpc = Arc::new(MockRpc::new());
    let client = BatchTxClient::new(Arc::clone(&rpc), Keypair::new());

    let signers: Vec<Keypair> = (0..2).map(|_| Keypair::new()).collect();
    let sets: Vec<Vec<_>> = signers
        .iter()
        .enumerate()
        .map(|(tag, keypair)| vec![tagged_ix_with_signer(tag as u8, &Signer::pubkey(keypair))])
        .collect();

    let report = client.send_instruction_sets(sets, signers).await.unwrap();

    assert_eq!(report.total(), 2);
    assert!(report.all_succeeded());
}

#[tokio::test(start_paused = true)]
async fn test_client_single_transaction_round_trip() {
    let rpc = Arc::new(MockRpc::new());
    let client = BatchTxClient::new(Arc::clone(&rpc), Keypair::new());

    let confirmation = client
        .send_transaction(&[tagged_ix(9)], &[])
        .await
        .unwrap();
    assert_eq!(confirmation.slot, 42);
    assert_eq!(rpc.broadcast_count(9), 1);
}

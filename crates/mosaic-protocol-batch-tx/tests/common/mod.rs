use async_trait::async_trait;
use mosaic_protocol_batch_tx::{SimulateResult, SubmitRpc, TransactionGroup, TxStatus};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted result for one status poll of one logical transaction.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// The cluster does not know the signature yet.
    Pending,
    /// Clean status with one confirmation.
    Confirmed,
    /// Status carrying an on-chain program error.
    ProgramError,
    /// The poll itself fails at the transport level.
    Transport,
}

/// Deterministic transport for submission tests.
///
/// Logical transactions are identified by the first byte of their first
/// instruction's payload, which survives re-signing across rounds. Each key
/// may carry a queue of scripted poll results; once the queue drains,
/// polls report a clean confirmation.
pub struct MockRpc {
    scripts: Mutex<HashMap<u8, VecDeque<Scripted>>>,
    sig_keys: Mutex<HashMap<Signature, u8>>,
    broadcasts: Mutex<Vec<u8>>,
    blockhash_calls: Mutex<usize>,
    fail_broadcasts: bool,
    simulate_logs: Option<Vec<String>>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            sig_keys: Mutex::new(HashMap::new()),
            broadcasts: Mutex::new(Vec::new()),
            blockhash_calls: Mutex::new(0),
            fail_broadcasts: false,
            simulate_logs: None,
        }
    }

    /// Every broadcast attempt fails at the transport level.
    pub fn failing_broadcasts() -> Self {
        Self {
            fail_broadcasts: true,
            ..Self::new()
        }
    }

    pub fn with_simulate_logs(mut self, logs: Vec<String>) -> Self {
        self.simulate_logs = Some(logs);
        self
    }

    pub fn script(&self, key: u8, steps: &[Scripted]) {
        self.scripts
            .lock()
            .unwrap()
            .insert(key, steps.iter().cloned().collect());
    }

    pub fn broadcast_count(&self, key: u8) -> usize {
        self.broadcasts
            .lock()
            .unwrap()
            .iter()
            .filter(|k| **k == key)
            .count()
    }

    pub fn blockhash_calls(&self) -> usize {
        *self.blockhash_calls.lock().unwrap()
    }
}

fn tx_key(tx: &Transaction) -> u8 {
    tx.message.instructions[0].data[0]
}

fn transport_error(message: &str) -> ClientError {
    ClientError::from(ClientErrorKind::Custom(message.to_string()))
}

fn program_error() -> TransactionError {
    TransactionError::InstructionError(0, InstructionError::Custom(3))
}

#[async_trait]
impl SubmitRpc for MockRpc {
    async fn latest_blockhash(&self, _commitment: CommitmentConfig) -> Result<Hash, ClientError> {
        *self.blockhash_calls.lock().unwrap() += 1;
        Ok(Hash::new_unique())
    }

    async fn broadcast_transaction(&self, tx: &Transaction) -> Result<Signature, ClientError> {
        let key = tx_key(tx);
        self.broadcasts.lock().unwrap().push(key);
        if self.fail_broadcasts {
            return Err(transport_error("connection refused"));
        }
        let signature = tx.signatures[0];
        self.sig_keys.lock().unwrap().insert(signature, key);
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<TxStatus>, ClientError> {
        let key = match self.sig_keys.lock().unwrap().get(signature) {
            Some(key) => *key,
            None => return Ok(None),
        };
        let step = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(Scripted::Confirmed);

        match step {
            Scripted::Pending => Ok(None),
            Scripted::Confirmed => Ok(Some(TxStatus {
                slot: 42,
                confirmations: Some(1),
                err: None,
            })),
            Scripted::ProgramError => Ok(Some(TxStatus {
                slot: 42,
                confirmations: Some(1),
                err: Some(program_error()),
            })),
            Scripted::Transport => Err(transport_error("poll failed")),
        }
    }

    async fn simulate(&self, _tx: &Transaction) -> Result<SimulateResult, ClientError> {
        Ok(SimulateResult {
            err: Some(program_error()),
            logs: self.simulate_logs.clone(),
        })
    }
}

/// Instruction whose first payload byte identifies it to [`MockRpc`].
pub fn tagged_ix(tag: u8) -> Instruction {
    Instruction {
        program_id: Pubkey::new_unique(),
        accounts: vec![AccountMeta::new(Pubkey::new_unique(), false)],
        data: vec![tag],
    }
}

/// Like [`tagged_ix`] but requiring `signer` to co-sign.
pub fn tagged_ix_with_signer(tag: u8, signer: &Pubkey) -> Instruction {
    Instruction {
        program_id: Pubkey::new_unique(),
        accounts: vec![AccountMeta::new(*signer, true)],
        data: vec![tag],
    }
}

/// Single-instruction group carrying `tag`.
pub fn group(tag: u8) -> TransactionGroup {
    TransactionGroup {
        instructions: vec![tagged_ix(tag)],
        signers: Vec::new(),
        units: 1,
    }
}

use crate::{config::TxBatchConfig, error::BatchTxError, size::TxSizeBudget};
use solana_sdk::{instruction::Instruction, signature::Keypair};

/// A packed, ready-to-sign bundle of instructions plus the auxiliary
/// keypairs (beyond the fee payer) required to sign it.
///
/// Groups own their contents exclusively; nothing is shared across groups.
#[derive(Debug)]
pub struct TransactionGroup {
    pub instructions: Vec<Instruction>,
    pub signers: Vec<Keypair>,
    /// Logical work items carried: individual instructions for
    /// [`pack_instructions`], instruction sets for
    /// [`pack_instruction_sets`]. Outcome reports expand per unit.
    pub units: usize,
}

/// Greedily pack `instructions` into the fewest transactions that fit the
/// configured wire-size and instruction-count ceilings.
///
/// First-fit-forward: each instruction is tried against the open group; on
/// overflow the group is sealed and the same instruction retried against a
/// fresh one, so input order is preserved exactly and nothing is dropped or
/// duplicated. An instruction that cannot fit even an empty transaction is
/// an error: emitting it would only produce a broadcast that the network
/// is guaranteed to reject.
pub fn pack_instructions(
    instructions: Vec<Instruction>,
    config: &TxBatchConfig,
) -> Result<Vec<TransactionGroup>, BatchTxError> {
    let mut groups = Vec::new();
    let mut current: Vec<Instruction> = Vec::new();
    let mut budget = TxSizeBudget::new(config.base_transaction_size);

    for (index, instruction) in instructions.into_iter().enumerate() {
        loop {
            let mut trial = budget.clone();
            trial.push(&instruction);

            if trial.probe_size() <= config.max_transaction_size
                && trial.instruction_count() <= config.max_instructions_per_tx
            {
                budget = trial;
                current.push(instruction);
                break;
            }

            if current.is_empty() {
                return Err(BatchTxError::InstructionTooLarge {
                    index,
                    size: trial.probe_size(),
                    limit: config.max_transaction_size,
                });
            }

            let units = current.len();
            seal(&mut groups, &mut current, Vec::new(), units);
            budget = TxSizeBudget::new(config.base_transaction_size);
            // retry the same instruction against the fresh group
        }
    }

    if !current.is_empty() {
        let units = current.len();
        seal(&mut groups, &mut current, Vec::new(), units);
    }
    Ok(groups)
}

/// Pack atomic instruction sets, each carrying one auxiliary signer, into
/// transactions. The signer list is partitioned in lockstep with the sets:
/// a sealed group holds exactly the keypairs of the sets it contains.
///
/// Used for flows where every work item mints into a fresh account that
/// must co-sign its own creation. Empty sets are skipped along with their
/// signer. A set is never split across transactions.
pub fn pack_instruction_sets(
    sets: Vec<Vec<Instruction>>,
    signers: Vec<Keypair>,
    config: &TxBatchConfig,
) -> Result<Vec<TransactionGroup>, BatchTxError> {
    if sets.len() != signers.len() {
        return Err(BatchTxError::SignerMismatch {
            sets: sets.len(),
            signers: signers.len(),
        });
    }

    let mut groups = Vec::new();
    let mut current: Vec<Instruction> = Vec::new();
    let mut current_signers: Vec<Keypair> = Vec::new();
    let mut current_units = 0usize;
    let mut budget = TxSizeBudget::new(config.base_transaction_size);

    for (index, (set, signer)) in sets.into_iter().zip(signers).enumerate() {
        if set.is_empty() {
            continue;
        }
        loop {
            let mut trial = budget.clone();
            trial.push_signer();
            for instruction in &set {
                trial.push(instruction);
            }

            if trial.probe_size() <= config.max_transaction_size
                && trial.instruction_count() <= config.max_instructions_per_tx
                && trial.signer_count() <= config.max_signers_per_tx
            {
                budget = trial;
                current.extend(set);
                current_signers.push(signer);
                current_units += 1;
                break;
            }

            if current.is_empty() {
                return Err(BatchTxError::InstructionTooLarge {
                    index,
                    size: trial.probe_size(),
                    limit: config.max_transaction_size,
                });
            }

            let units = std::mem::replace(&mut current_units, 0);
            seal(
                &mut groups,
                &mut current,
                std::mem::take(&mut current_signers),
                units,
            );
            budget = TxSizeBudget::new(config.base_transaction_size);
        }
    }

    if !current.is_empty() {
        seal(&mut groups, &mut current, current_signers, current_units);
    }
    Ok(groups)
}

fn seal(
    groups: &mut Vec<TransactionGroup>,
    current: &mut Vec<Instruction>,
    signers: Vec<Keypair>,
    units: usize,
) {
    groups.push(TransactionGroup {
        instructions: std::mem::take(current),
        signers,
        units,
    });
}

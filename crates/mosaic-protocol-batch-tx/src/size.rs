use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use std::collections::HashSet;

/// Maximum serialized transaction size the network accepts.
pub const MAX_TRANSACTION_SIZE: usize = solana_sdk::packet::PACKET_DATA_SIZE;

/// Fixed cost paid once per transaction: the signature-count, account-count
/// and instruction-count prefixes (3), the fee payer key (32), and the fee
/// payer signature with the blockhash slot it anchors (65).
pub const BASE_TRANSACTION_SIZE: usize = 3 + 32 + 65;

/// Wire cost of one required signature beyond the fee payer's. The signer's
/// account key is priced separately by the new-key rule.
pub const SIGNATURE_SIZE: usize = 64;

/// Length of the compact-u16 encoding used for counts in the wire format.
pub fn compact_u16_len(x: usize) -> usize {
    if x <= 127 {
        1
    } else if x <= 16383 {
        2
    } else {
        3
    }
}

/// Per-instruction encoding cost, excluding account keys: program id index,
/// account index list, and length-prefixed payload.
fn encoded_len(instruction: &Instruction) -> usize {
    1 + compact_u16_len(instruction.accounts.len())
        + instruction.accounts.len()
        + compact_u16_len(instruction.data.len())
        + instruction.data.len()
}

/// Marginal serialized cost of appending `instruction` to a transaction that
/// already references `pending_keys`.
///
/// Every account key not yet referenced, the program id included, costs a
/// full 32 bytes; repeated keys are free because the wire format stores
/// indexes into a deduplicated key table. Pure function of its inputs.
pub fn instruction_delta(pending_keys: &HashSet<Pubkey>, instruction: &Instruction) -> usize {
    let mut delta = encoded_len(instruction);
    let mut fresh: HashSet<Pubkey> = HashSet::new();
    for key in instruction
        .accounts
        .iter()
        .map(|meta| meta.pubkey)
        .chain(std::iter::once(instruction.program_id))
    {
        if !pending_keys.contains(&key) && fresh.insert(key) {
            delta += 32;
        }
    }
    delta
}

/// Running serialized size of a transaction under construction.
///
/// Tracks the referenced key set so repeated accounts are only billed once,
/// plus instruction and auxiliary-signer counts for the packer's ceilings.
#[derive(Debug, Clone)]
pub struct TxSizeBudget {
    size: usize,
    keys: HashSet<Pubkey>,
    instruction_count: usize,
    signer_count: usize,
}

impl TxSizeBudget {
    pub fn new(base_size: usize) -> Self {
        Self {
            size: base_size,
            keys: HashSet::new(),
            instruction_count: 0,
            signer_count: 0,
        }
    }

    /// Account for `instruction`, deduplicating keys against everything
    /// already in the transaction.
    pub fn push(&mut self, instruction: &Instruction) {
        self.size += instruction_delta(&self.keys, instruction);
        self.keys.extend(instruction.accounts.iter().map(|meta| meta.pubkey));
        self.keys.insert(instruction.program_id);
        self.instruction_count += 1;
    }

    /// Account for one auxiliary signer's wire signature.
    pub fn push_signer(&mut self) {
        self.size += SIGNATURE_SIZE;
        self.signer_count += 1;
    }

    /// Projected serialized size including the account-count and
    /// instruction-count prefixes at their current widths.
    pub fn probe_size(&self) -> usize {
        self.size + compact_u16_len(self.keys.len()) + compact_u16_len(self.instruction_count)
    }

    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    /// Auxiliary signers accumulated so far (fee payer excluded).
    pub fn signer_count(&self) -> usize {
        self.signer_count
    }
}

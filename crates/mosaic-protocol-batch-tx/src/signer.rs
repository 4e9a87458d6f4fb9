use crate::error::BatchTxError;
use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey, signature::Keypair, signer::Signer, transaction::Transaction,
};

/// Primary-signature collaborator.
///
/// Modeled on wallet adapters' batched `signAllTransactions`: the signer is
/// invoked once per submission round with every transaction of that round,
/// so a hardware wallet can approve the whole batch in one interaction.
/// Implementations must tolerate concurrent calls from separate batches.
#[async_trait]
pub trait BatchSigner: Send + Sync {
    /// The fee payer public key.
    fn pubkey(&self) -> Pubkey;

    /// Add the primary signature to every transaction in the round. Each
    /// transaction already carries its recent blockhash and any auxiliary
    /// signatures.
    async fn sign_all(&self, transactions: &mut [Transaction]) -> Result<(), BatchTxError>;
}

#[async_trait]
impl BatchSigner for Keypair {
    fn pubkey(&self) -> Pubkey {
        Signer::pubkey(self)
    }

    async fn sign_all(&self, transactions: &mut [Transaction]) -> Result<(), BatchTxError> {
        for tx in transactions.iter_mut() {
            let blockhash = tx.message.recent_blockhash;
            tx.try_partial_sign(&[self], blockhash)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{hash::Hash, message::Message, system_instruction};

    #[tokio::test]
    async fn test_keypair_signs_every_transaction() {
        let payer = Keypair::new();
        let payer_pubkey = BatchSigner::pubkey(&payer);
        let blockhash = Hash::new_unique();

        let mut transactions: Vec<Transaction> = (0..3)
            .map(|lamports| {
                let instruction =
                    system_instruction::transfer(&payer_pubkey, &Pubkey::new_unique(), lamports);
                let message =
                    Message::new_with_blockhash(&[instruction], Some(&payer_pubkey), &blockhash);
                Transaction::new_unsigned(message)
            })
            .collect();

        payer.sign_all(&mut transactions).await.unwrap();

        for tx in &transactions {
            assert!(tx.is_signed());
            tx.verify().unwrap();
        }
    }
}

use crate::constants::{
    BASE, COLOR_PROGRAM_ID, NEIGHBORHOOD_FRAME_BASE_SEED, NEIGHBORHOOD_FRAME_POINTER_SEED,
    NEIGHBORHOOD_METADATA_SEED, SELL_DELEGATE_SEED, SPACE_METADATA_SEED, SPACE_PROGRAM_ID,
    VOUCHER_MINT_SEED, VOUCHER_SINK_SEED,
};
use crate::coords::coord_seed;
use solana_program::pubkey::Pubkey;

/// Derives the protocol's program-derived addresses.
pub struct AddressFinder {
    pub base: Pubkey,
    pub color_program_id: Pubkey,
    pub space_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(base: Pubkey, color_program_id: Pubkey, space_program_id: Pubkey) -> Self {
        Self {
            base,
            color_program_id,
            space_program_id,
        }
    }

    pub fn find_space_metadata_address(&self, space_x: i64, space_y: i64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                SPACE_METADATA_SEED,
                &coord_seed(space_x),
                &coord_seed(space_y),
            ],
            &self.space_program_id,
        )
    }

    pub fn find_neighborhood_metadata_address(
        &self,
        neighborhood_x: i64,
        neighborhood_y: i64,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                NEIGHBORHOOD_METADATA_SEED,
                &coord_seed(neighborhood_x),
                &coord_seed(neighborhood_y),
            ],
            &self.space_program_id,
        )
    }

    pub fn find_neighborhood_frame_base_address(
        &self,
        neighborhood_x: i64,
        neighborhood_y: i64,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                NEIGHBORHOOD_FRAME_BASE_SEED,
                &coord_seed(neighborhood_x),
                &coord_seed(neighborhood_y),
            ],
            &self.color_program_id,
        )
    }

    pub fn find_neighborhood_frame_pointer_address(
        &self,
        neighborhood_x: i64,
        neighborhood_y: i64,
        frame: u64,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                NEIGHBORHOOD_FRAME_POINTER_SEED,
                &coord_seed(neighborhood_x),
                &coord_seed(neighborhood_y),
                &frame.to_le_bytes(),
            ],
            &self.color_program_id,
        )
    }

    pub fn find_sell_delegate_address(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[&self.base.to_bytes(), SELL_DELEGATE_SEED],
            &self.space_program_id,
        )
    }

    pub fn find_voucher_mint_address(
        &self,
        neighborhood_x: i64,
        neighborhood_y: i64,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                VOUCHER_MINT_SEED,
                &coord_seed(neighborhood_x),
                &coord_seed(neighborhood_y),
            ],
            &self.space_program_id,
        )
    }

    pub fn find_voucher_sink_address(
        &self,
        neighborhood_x: i64,
        neighborhood_y: i64,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                &self.base.to_bytes(),
                VOUCHER_SINK_SEED,
                &coord_seed(neighborhood_x),
                &coord_seed(neighborhood_y),
            ],
            &self.space_program_id,
        )
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(BASE, COLOR_PROGRAM_ID, SPACE_PROGRAM_ID)
    }
}

/// Associated token account holding a space's NFT for `owner`.
pub fn find_space_ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}

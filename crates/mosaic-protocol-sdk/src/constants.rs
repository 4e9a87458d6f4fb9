use solana_program::{pubkey, pubkey::Pubkey};

/// Root account every protocol PDA derives from.
pub const BASE: Pubkey = pubkey!("XBSEZzB7ojaKgXqfCSpNbPLnuMGk3JVtSKYjXYqg7Pn");

pub const COLOR_PROGRAM_ID: Pubkey = pubkey!("XCLReS3yMKtcHWJxW8HX8yr6YmY8rwTaS5NUmVk21mM");
pub const SPACE_PROGRAM_ID: Pubkey = pubkey!("XSPCZghPXkWTWpvrfQ34Szpx3rwmUjsxebRFf5ckbMD");
pub const VOUCHER_MINT_AUTHORITY: Pubkey = pubkey!("XCAPXCd2cRh1TKYXtK9AoWxbLPxFeykpnmU4S67Jzqu");

/// Spaces per neighborhood side; a neighborhood is this value squared.
pub const NEIGHBORHOOD_SIZE: i64 = 200;

/// Color frames a neighborhood can hold.
pub const MAX_FRAMES: u64 = 6;

pub const NEIGHBORHOOD_METADATA_SEED: &[u8] = b"neighborhood_metadata";
pub const NEIGHBORHOOD_FRAME_BASE_SEED: &[u8] = b"neighborhood_frame_base";
pub const NEIGHBORHOOD_FRAME_POINTER_SEED: &[u8] = b"neighborhood_frame_pointer";
pub const SPACE_METADATA_SEED: &[u8] = b"space_metadata";
pub const SELL_DELEGATE_SEED: &[u8] = b"sell_delegate";
pub const VOUCHER_MINT_SEED: &[u8] = b"voucher_mint";
pub const VOUCHER_SINK_SEED: &[u8] = b"voucher_sink";

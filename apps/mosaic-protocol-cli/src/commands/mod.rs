use crate::error::{CliError, CliResult};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::path::Path;
use std::str::FromStr;

pub mod init_frame;
pub mod make_editable;
pub mod register;
pub mod set_colors;

pub(crate) fn load_wallet(path: &Path) -> CliResult<Keypair> {
    read_keypair_file(path)
        .map_err(|err| CliError::InvalidKeypair(format!("{}: {err}", path.display())))
}

pub(crate) fn parse_pubkey(value: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(value).map_err(|err| CliError::InvalidPubkey(format!("{value}: {err}")))
}

/*!
# Mosaic Protocol SDK

Program ids, PDA derivation, and instruction builders for the Mosaic canvas
programs. Instruction payloads are borsh-encoded exactly as the on-chain
programs expect. Everything here is pure and RPC-free: accounts that can
only be resolved from chain state (frame clusters, neighborhood creators)
are taken as parameters.
*/

mod address_finder;
mod constants;
mod coords;
mod error;
mod instruction_builders;
mod instructions;

pub use address_finder::{find_space_ata, AddressFinder};
pub use constants::*;
pub use coords::{coord_seed, neighborhood_coords};
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use instructions::*;

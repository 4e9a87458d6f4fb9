use borsh::{BorshDeserialize, BorshSerialize};

/// Tag byte dispatching instructions inside the color program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorInstruction {
    InitFrame = 0,
    ChangeColor = 1,
    ChangeColorBrief = 2,
    MakeEditable = 3,
    MakeEditableBrief = 4,
}

/// Tag byte dispatching instructions inside the space program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceInstruction {
    InitSpaceMetadata = 0,
    GetVouchers = 1,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct InitFrameArgs {
    pub neighborhood_x: i64,
    pub neighborhood_y: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChangeColorArgs {
    pub space_x: i64,
    pub space_y: i64,
    pub frame: u64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Compact encoding of [`ChangeColorArgs`] for batched painting; covers
/// coordinates within i16 range, which is every deployed neighborhood.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChangeColorBriefArgs {
    pub space_x: i16,
    pub space_y: i16,
    pub frame: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct MakeEditableArgs {
    pub space_x: i64,
    pub space_y: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct MakeEditableBriefArgs {
    pub space_x: i16,
    pub space_y: i16,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct InitSpaceMetadataArgs {
    pub space_x: i64,
    pub space_y: i64,
}

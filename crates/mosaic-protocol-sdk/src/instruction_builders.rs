use crate::{
    address_finder::AddressFinder,
    coords::neighborhood_coords,
    error::{SdkError, SdkResult},
    instructions::{
        ChangeColorArgs, ChangeColorBriefArgs, ColorInstruction, InitFrameArgs,
        InitSpaceMetadataArgs, MakeEditableArgs, MakeEditableBriefArgs, SpaceInstruction,
    },
};
use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Per-frame accounts resolved from chain state (the neighborhood frame
/// records point at them); they cannot be derived offline.
#[derive(Debug, Clone, Copy)]
pub struct FrameAccounts {
    pub color_cluster: Pubkey,
    pub time_cluster: Pubkey,
}

fn encode(tag: u8, args: &impl BorshSerialize) -> SdkResult<Vec<u8>> {
    let mut data = vec![tag];
    args.serialize(&mut data)?;
    Ok(data)
}

/// Narrow a full-width coordinate pair into the brief painting encoding.
pub fn change_color_brief_args(
    space_x: i64,
    space_y: i64,
    frame: u8,
    (r, g, b): (u8, u8, u8),
) -> SdkResult<ChangeColorBriefArgs> {
    let narrow_x = i16::try_from(space_x);
    let narrow_y = i16::try_from(space_y);
    match (narrow_x, narrow_y) {
        (Ok(space_x), Ok(space_y)) => Ok(ChangeColorBriefArgs {
            space_x,
            space_y,
            frame,
            r,
            g,
            b,
        }),
        _ => Err(SdkError::CoordinateOutOfRange { space_x, space_y }),
    }
}

fn change_color_accounts(
    finder: &AddressFinder,
    frame_accounts: &FrameAccounts,
    space_x: i64,
    space_y: i64,
    frame: u64,
    owner: &Pubkey,
    space_ata: &Pubkey,
    fee_payer: &Pubkey,
) -> Vec<AccountMeta> {
    let (neighborhood_x, neighborhood_y) = neighborhood_coords(space_x, space_y);
    let (frame_base, _) =
        finder.find_neighborhood_frame_base_address(neighborhood_x, neighborhood_y);
    let (frame_pointer, _) =
        finder.find_neighborhood_frame_pointer_address(neighborhood_x, neighborhood_y, frame);
    let (neighborhood_metadata, _) =
        finder.find_neighborhood_metadata_address(neighborhood_x, neighborhood_y);
    let (space_metadata, _) = finder.find_space_metadata_address(space_x, space_y);

    vec![
        AccountMeta::new_readonly(finder.base, false),
        AccountMeta::new(frame_accounts.color_cluster, false),
        AccountMeta::new_readonly(frame_base, false),
        AccountMeta::new_readonly(frame_pointer, false),
        AccountMeta::new_readonly(neighborhood_metadata, false),
        AccountMeta::new_readonly(space_metadata, false),
        AccountMeta::new(*owner, false),
        AccountMeta::new_readonly(*space_ata, false),
        AccountMeta::new(frame_accounts.time_cluster, false),
        AccountMeta::new(*fee_payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ]
}

pub fn build_change_color_ix(
    finder: &AddressFinder,
    frame_accounts: &FrameAccounts,
    owner: &Pubkey,
    space_ata: &Pubkey,
    fee_payer: &Pubkey,
    args: ChangeColorArgs,
) -> SdkResult<Instruction> {
    let accounts = change_color_accounts(
        finder,
        frame_accounts,
        args.space_x,
        args.space_y,
        args.frame,
        owner,
        space_ata,
        fee_payer,
    );
    Ok(Instruction {
        program_id: finder.color_program_id,
        accounts,
        data: encode(ColorInstruction::ChangeColor as u8, &args)?,
    })
}

pub fn build_change_color_brief_ix(
    finder: &AddressFinder,
    frame_accounts: &FrameAccounts,
    owner: &Pubkey,
    space_ata: &Pubkey,
    fee_payer: &Pubkey,
    args: ChangeColorBriefArgs,
) -> SdkResult<Instruction> {
    let accounts = change_color_accounts(
        finder,
        frame_accounts,
        i64::from(args.space_x),
        i64::from(args.space_y),
        u64::from(args.frame),
        owner,
        space_ata,
        fee_payer,
    );
    Ok(Instruction {
        program_id: finder.color_program_id,
        accounts,
        data: encode(ColorInstruction::ChangeColorBrief as u8, &args)?,
    })
}

pub fn build_make_editable_ix(
    finder: &AddressFinder,
    time_cluster: &Pubkey,
    owner: &Pubkey,
    space_ata: &Pubkey,
    args: MakeEditableArgs,
) -> SdkResult<Instruction> {
    let (space_metadata, _) = finder.find_space_metadata_address(args.space_x, args.space_y);
    Ok(Instruction {
        program_id: finder.color_program_id,
        accounts: vec![
            AccountMeta::new_readonly(finder.base, false),
            AccountMeta::new_readonly(space_metadata, false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(*space_ata, false),
            AccountMeta::new(*time_cluster, false),
        ],
        data: encode(ColorInstruction::MakeEditable as u8, &args)?,
    })
}

pub fn build_make_editable_brief_ix(
    finder: &AddressFinder,
    time_cluster: &Pubkey,
    owner: &Pubkey,
    space_ata: &Pubkey,
    args: MakeEditableBriefArgs,
) -> SdkResult<Instruction> {
    let (space_metadata, _) = finder
        .find_space_metadata_address(i64::from(args.space_x), i64::from(args.space_y));
    Ok(Instruction {
        program_id: finder.color_program_id,
        accounts: vec![
            AccountMeta::new_readonly(finder.base, false),
            AccountMeta::new_readonly(space_metadata, false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(*space_ata, false),
            AccountMeta::new(*time_cluster, false),
        ],
        data: encode(ColorInstruction::MakeEditableBrief as u8, &args)?,
    })
}

/// Initialize color and time clusters for a neighborhood's next frame.
///
/// The cluster accounts are freshly generated keypairs that must co-sign
/// their own creation; they are too large to live at PDAs.
pub fn build_init_frame_ix(
    finder: &AddressFinder,
    color_cluster: &Pubkey,
    time_cluster: &Pubkey,
    frame: u64,
    fee_payer: &Pubkey,
    args: InitFrameArgs,
) -> SdkResult<Instruction> {
    let (frame_base, _) =
        finder.find_neighborhood_frame_base_address(args.neighborhood_x, args.neighborhood_y);
    let (frame_pointer, _) = finder.find_neighborhood_frame_pointer_address(
        args.neighborhood_x,
        args.neighborhood_y,
        frame,
    );
    Ok(Instruction {
        program_id: finder.color_program_id,
        accounts: vec![
            AccountMeta::new_readonly(finder.base, false),
            AccountMeta::new(frame_base, false),
            AccountMeta::new(frame_pointer, false),
            AccountMeta::new(*color_cluster, true),
            AccountMeta::new(*time_cluster, true),
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: encode(ColorInstruction::InitFrame as u8, &args)?,
    })
}

/// Register a space: create its metadata PDA so color changes can verify
/// ownership against the NFT in `space_ata`.
pub fn build_init_space_metadata_ix(
    finder: &AddressFinder,
    mint: &Pubkey,
    space_ata: &Pubkey,
    fee_payer: &Pubkey,
    args: InitSpaceMetadataArgs,
) -> SdkResult<Instruction> {
    let (space_metadata, _) = finder.find_space_metadata_address(args.space_x, args.space_y);
    Ok(Instruction {
        program_id: finder.space_program_id,
        accounts: vec![
            AccountMeta::new_readonly(finder.base, false),
            AccountMeta::new(space_metadata, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*space_ata, false),
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: encode(SpaceInstruction::InitSpaceMetadata as u8, &args)?,
    })
}

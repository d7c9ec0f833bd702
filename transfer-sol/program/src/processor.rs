//! Program state processor

use {
    crate::{
        error::TransferError,
        instruction::TransferInstruction,
        transfer::{DirectTransfer, LamportTransfer, SystemProgramTransfer},
    },
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        entrypoint::ProgramResult,
        msg,
        program_error::ProgramError,
        pubkey::Pubkey,
        system_program,
    },
};

/// Processes a [CpiTransfer](enum.TransferInstruction.html) instruction.
pub fn process_cpi_transfer(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let recipient_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    if !payer_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !system_program::check_id(system_program_info.key) {
        return Err(ProgramError::IncorrectProgramId);
    }

    msg!("Transferring {} lamports through the system program", amount);
    SystemProgramTransfer {
        system_program_info,
    }
    .transfer(payer_info, recipient_info, amount)
}

/// Processes a [ProgramTransfer](enum.TransferInstruction.html) instruction.
pub fn process_program_transfer(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_info = next_account_info(account_info_iter)?;
    let destination_info = next_account_info(account_info_iter)?;

    if !source_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !source_info.is_writable || !destination_info.is_writable {
        return Err(TransferError::AccountNotWritable.into());
    }

    if source_info.owner != program_id {
        return Err(TransferError::IncorrectSourceOwner.into());
    }

    msg!("Transferring {} lamports directly", amount);
    DirectTransfer.transfer(source_info, destination_info, amount)
}

/// Processes an [Instruction](enum.TransferInstruction.html).
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = TransferInstruction::unpack(input)?;
    match instruction {
        TransferInstruction::CpiTransfer { amount } => {
            msg!("Instruction: CpiTransfer");
            process_cpi_transfer(accounts, amount)
        }
        TransferInstruction::ProgramTransfer { amount } => {
            msg!("Instruction: ProgramTransfer");
            process_program_transfer(program_id, accounts, amount)
        }
    }
}

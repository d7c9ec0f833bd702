//! Program instructions

use {
    crate::error::TransferError,
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program_error::ProgramError,
        pubkey::Pubkey,
        system_program,
    },
    std::mem::size_of,
};

/// Length of a packed instruction: one tag byte followed by a `u64` amount
pub const INSTRUCTION_LEN: usize = size_of::<u8>() + size_of::<u64>();

/// Instructions supported by the Transfer SOL program.
///
/// The Borsh encoding of this enum is identical to the layout produced by
/// [`TransferInstruction::pack`], so clients may build the data either way.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize, PartialEq)]
pub enum TransferInstruction {
    /// Move lamports by invoking the system program's transfer instruction.
    ///
    /// Accounts expected by this instruction:
    ///
    ///   0. `[writable, signer]` Payer, funds the transfer
    ///   1. `[writable]` Recipient
    ///   2. `[]` System program
    CpiTransfer {
        /// Number of lamports to move
        amount: u64,
    },

    /// Move lamports by adjusting both balances directly, without going
    /// through the system program.
    ///
    /// Accounts expected by this instruction:
    ///
    ///   0. `[writable, signer]` Source, must be owned by this program
    ///   1. `[writable]` Destination
    ProgramTransfer {
        /// Number of lamports to move
        amount: u64,
    },
}
impl TransferInstruction {
    /// Unpacks a byte buffer into a
    /// [TransferInstruction](enum.TransferInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&tag, rest) = input
            .split_first()
            .ok_or(TransferError::InvalidInstruction)?;
        Ok(match tag {
            0 => Self::CpiTransfer {
                amount: Self::unpack_amount(rest)?,
            },
            1 => Self::ProgramTransfer {
                amount: Self::unpack_amount(rest)?,
            },
            _ => return Err(TransferError::InvalidInstruction.into()),
        })
    }

    fn unpack_amount(input: &[u8]) -> Result<u64, ProgramError> {
        let amount: [u8; 8] = input
            .try_into()
            .map_err(|_| TransferError::InvalidInstruction)?;
        Ok(u64::from_le_bytes(amount))
    }

    /// Packs a [TransferInstruction](enum.TransferInstruction.html) into a
    /// byte buffer.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(INSTRUCTION_LEN);
        let (tag, amount) = match self {
            Self::CpiTransfer { amount } => (0u8, amount),
            Self::ProgramTransfer { amount } => (1u8, amount),
        };
        buf.push(tag);
        buf.extend_from_slice(&amount.to_le_bytes());
        buf
    }

    /// Number of lamports carried by the instruction
    pub fn amount(&self) -> u64 {
        match self {
            Self::CpiTransfer { amount } | Self::ProgramTransfer { amount } => *amount,
        }
    }
}

/// Creates a `CpiTransfer` instruction.
pub fn transfer_sol_with_cpi(
    program_id: &Pubkey,
    payer: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(*recipient, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    let data = TransferInstruction::CpiTransfer { amount }.pack();

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

/// Creates a `ProgramTransfer` instruction.
pub fn transfer_sol_with_program(
    program_id: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*source, true),
        AccountMeta::new(*destination, false),
    ];

    let data = TransferInstruction::ProgramTransfer { amount }.pack();

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

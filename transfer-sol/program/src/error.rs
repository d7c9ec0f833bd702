//! Error types

use {
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    thiserror::Error,
};

/// Errors that may be returned by the Transfer SOL program.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum TransferError {
    /// Instruction data is truncated, carries trailing bytes, or has an
    /// unknown tag
    #[error("Invalid instruction")]
    InvalidInstruction,
    /// Crediting the destination would overflow its lamport balance
    #[error("Lamport balance overflow")]
    Overflow,
    /// Account must be writable to have its lamports adjusted
    #[error("Account is not writable")]
    AccountNotWritable,
    /// Lamports can only be debited from accounts owned by this program
    #[error("Source account is not owned by the program")]
    IncorrectSourceOwner,
}
impl From<TransferError> for ProgramError {
    fn from(e: TransferError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
impl<T> DecodeError<T> for TransferError {
    fn type_of() -> &'static str {
        "TransferError"
    }
}

impl PrintProgramError for TransferError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        match self {
            TransferError::InvalidInstruction => msg!("Error: Invalid instruction"),
            TransferError::Overflow => msg!("Error: Lamport balance overflow"),
            TransferError::AccountNotWritable => msg!("Error: Account is not writable"),
            TransferError::IncorrectSourceOwner => {
                msg!("Error: Source account is not owned by the program")
            }
        }
    }
}

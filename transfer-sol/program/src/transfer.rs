//! Lamport transfer strategies
//!
//! Both strategies leave the same balances behind for the same inputs; they
//! differ only in who performs the mutation. Account validation is the
//! caller's job, see [`crate::processor`].

use {
    crate::error::TransferError,
    solana_program::{
        account_info::AccountInfo, entrypoint::ProgramResult, program::invoke,
        program_error::ProgramError, system_instruction,
    },
};

/// Moves lamports from one account to another
pub trait LamportTransfer<'a> {
    /// Debits `lamports` from `source` and credits them to `destination`
    fn transfer(
        &self,
        source: &AccountInfo<'a>,
        destination: &AccountInfo<'a>,
        lamports: u64,
    ) -> ProgramResult;
}

/// Delegates the transfer to the system program through a cross-program
/// invocation. The source must be a signer of the enclosing transaction.
pub struct SystemProgramTransfer<'a, 'b> {
    /// The system program account, passed through to `invoke`
    pub system_program_info: &'b AccountInfo<'a>,
}

impl<'a> LamportTransfer<'a> for SystemProgramTransfer<'a, '_> {
    fn transfer(
        &self,
        source: &AccountInfo<'a>,
        destination: &AccountInfo<'a>,
        lamports: u64,
    ) -> ProgramResult {
        invoke(
            &system_instruction::transfer(source.key, destination.key, lamports),
            &[
                source.clone(),
                destination.clone(),
                self.system_program_info.clone(),
            ],
        )
    }
}

/// Adjusts both lamport balances in place. The runtime only accepts the
/// debit if the executing program owns the source.
pub struct DirectTransfer;

impl<'a> LamportTransfer<'a> for DirectTransfer {
    fn transfer(
        &self,
        source: &AccountInfo<'a>,
        destination: &AccountInfo<'a>,
        lamports: u64,
    ) -> ProgramResult {
        let source_lamports = source
            .lamports()
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;

        // Same account on both sides, nothing moves
        if source.key == destination.key {
            return Ok(());
        }

        let destination_lamports = destination
            .lamports()
            .checked_add(lamports)
            .ok_or(TransferError::Overflow)?;

        **source.try_borrow_mut_lamports()? = source_lamports;
        **destination.try_borrow_mut_lamports()? = destination_lamports;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        solana_program::{clock::Epoch, pubkey::Pubkey},
    };

    #[test]
    fn direct_transfer_moves_lamports() {
        let owner = Pubkey::new_unique();
        let source_key = Pubkey::new_unique();
        let destination_key = Pubkey::new_unique();
        let mut source_lamports = 10;
        let mut destination_lamports = 3;
        let mut source_data = vec![];
        let mut destination_data = vec![];
        let source = AccountInfo::new(
            &source_key,
            true,
            true,
            &mut source_lamports,
            &mut source_data,
            &owner,
            false,
            Epoch::default(),
        );
        let destination = AccountInfo::new(
            &destination_key,
            false,
            true,
            &mut destination_lamports,
            &mut destination_data,
            &owner,
            false,
            Epoch::default(),
        );

        DirectTransfer.transfer(&source, &destination, 4).unwrap();
        assert_eq!(source.lamports(), 6);
        assert_eq!(destination.lamports(), 7);

        // Draining the source completely is allowed
        DirectTransfer.transfer(&source, &destination, 6).unwrap();
        assert_eq!(source.lamports(), 0);
        assert_eq!(destination.lamports(), 13);

        assert_eq!(
            DirectTransfer.transfer(&source, &destination, 1),
            Err(ProgramError::InsufficientFunds)
        );
        assert_eq!(source.lamports(), 0);
        assert_eq!(destination.lamports(), 13);
    }

    #[test]
    fn direct_transfer_overflow_leaves_balances() {
        let owner = Pubkey::new_unique();
        let source_key = Pubkey::new_unique();
        let destination_key = Pubkey::new_unique();
        let mut source_lamports = 10;
        let mut destination_lamports = u64::MAX - 5;
        let mut source_data = vec![];
        let mut destination_data = vec![];
        let source = AccountInfo::new(
            &source_key,
            true,
            true,
            &mut source_lamports,
            &mut source_data,
            &owner,
            false,
            Epoch::default(),
        );
        let destination = AccountInfo::new(
            &destination_key,
            false,
            true,
            &mut destination_lamports,
            &mut destination_data,
            &owner,
            false,
            Epoch::default(),
        );

        assert_eq!(
            DirectTransfer.transfer(&source, &destination, 6),
            Err(TransferError::Overflow.into())
        );
        assert_eq!(source.lamports(), 10);
        assert_eq!(destination.lamports(), u64::MAX - 5);

        DirectTransfer.transfer(&source, &destination, 5).unwrap();
        assert_eq!(destination.lamports(), u64::MAX);
    }

    #[test]
    fn direct_transfer_to_self() {
        let owner = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let mut lamports = 10;
        let mut data = vec![];
        let account = AccountInfo::new(
            &key,
            true,
            true,
            &mut lamports,
            &mut data,
            &owner,
            false,
            Epoch::default(),
        );

        DirectTransfer.transfer(&account, &account, 10).unwrap();
        assert_eq!(account.lamports(), 10);
        assert_eq!(
            DirectTransfer.transfer(&account, &account, 11),
            Err(ProgramError::InsufficientFunds)
        );
    }
}

//! A program demonstrating two ways of moving lamports: through a
//! cross-program invocation of the system program, and by adjusting account
//! balances directly.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod transfer;

// Export current SDK types for downstream users building with a different SDK
// version
pub use solana_program;

solana_program::declare_id!("TransferSo111111111111111111111111111111111");

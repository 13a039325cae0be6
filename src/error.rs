// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! Error taxonomy shared by both CLIs (see the error-handling design in the
//! top-level tool documentation: every error that reaches `main` becomes one
//! stderr line and one process exit code, nothing is retried).

use std::path::PathBuf;

use crate::memory::MemoryError;
use crate::relocate::RelocateError;

/// Every way a conversion can fail, tagged with enough context to print a
/// useful message. [`AppError::p2s_exit_code`] maps these onto `p2s`'s
/// distinct exit codes; `sf2pack` collapses all of them to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input file could not be opened or read.
    #[error("error opening {0}")]
    InputOpen(PathBuf),
    /// The input already carries a PSID/RSID magic.
    #[error("{0} is already a .SID")]
    AlreadyPsid(PathBuf),
    /// The input is too small to contain even a load address.
    #[error("{0} is too small to be a PRG file")]
    InputTooSmall(PathBuf),
    /// The output file could not be created.
    #[error("error creating {0}")]
    OutputCreate(PathBuf),
    /// Buffer allocation failed. Rust's global allocator aborts the process
    /// rather than returning an error, so this variant is unreachable in
    /// practice; it's kept so the taxonomy stays complete and `p2s`'s exit
    /// code 3 has somewhere to live.
    #[error("alloc error??")]
    Allocation,
    /// A Core B relocation hit a malformed instruction.
    #[error(transparent)]
    Relocate(#[from] RelocateError),
    /// A Core B memory-container operation failed (PRG load/export bounds).
    #[error(transparent)]
    Memory(#[from] MemoryError),
    /// Any other I/O failure (output write, etc).
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// `p2s`'s exit-code table (section 6 of the tool documentation).
    pub fn p2s_exit_code(&self) -> i32 {
        match self {
            AppError::InputOpen(_) | AppError::AlreadyPsid(_) | AppError::InputTooSmall(_) => 2,
            AppError::Allocation => 3,
            AppError::OutputCreate(_) => 4,
            AppError::Relocate(_) | AppError::Memory(_) | AppError::Io(_) => 1,
        }
    }
}

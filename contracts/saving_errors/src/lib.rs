#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `SavingError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Saving record lookup errors (codes 200-299).
    Record,
    /// Lock period errors (codes 300-399).
    TimeLock,
    /// Rejected arguments (codes 400-499).
    InvalidInput,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  SavingError
/// @notice Error enum returned by every saving ledger entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Record
///   300 - 399 : TimeLock
///   400 - 499 : InvalidInput
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SavingError {
    // --- Initialization (1-99) ---
    /// `initialize` has not been called yet.
    NotInitialized = 1,

    /// `initialize` was already called; the configuration is write-once.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// The active policy does not let the caller perform this operation on
    /// this record.
    Unauthorized = 100,

    // --- Record (200-299) ---
    /// No saving is stored under the given id.
    SavingNotFound = 200,

    // --- TimeLock (300-399) ---
    /// Withdrawal attempted before `created_at + no_of_days`.
    FundsLocked = 300,

    // --- InvalidInput (400-499) ---
    /// Amount argument is negative.
    InvalidAmount = 400,

    /// `specified_year` of zero passed to the yield estimate.
    DivisionByZero = 401,

    // --- Arithmetic (700-799) ---
    /// Checked arithmetic overflowed.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every SavingError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for SavingError {
    fn category(&self) -> ErrorCategory {
        match self {
            SavingError::NotInitialized | SavingError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            SavingError::Unauthorized => ErrorCategory::Authorization,
            SavingError::SavingNotFound => ErrorCategory::Record,
            SavingError::FundsLocked => ErrorCategory::TimeLock,
            SavingError::InvalidAmount | SavingError::DivisionByZero => {
                ErrorCategory::InvalidInput
            }
            SavingError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            SavingError::NotInitialized => "Ledger has not been initialized",
            SavingError::AlreadyInitialized => "Ledger has already been initialized",
            SavingError::Unauthorized => "Caller is not authorized for this saving",
            SavingError::SavingNotFound => "No saving found for the given id",
            SavingError::FundsLocked => "Funds still locked",
            SavingError::InvalidAmount => "Amount must not be negative",
            SavingError::DivisionByZero => "Specified year must be non-zero",
            SavingError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

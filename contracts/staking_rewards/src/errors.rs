/// Errors returned by every entry point of the staking rewards contract.
///
/// # Code ranges
/// | Range   | Purpose                          |
/// |---------|----------------------------------|
/// | 1 – 9   | Lifecycle / initialisation       |
/// | 10 – 19 | Authorisation                    |
/// | 30 – 39 | Amount / input validation        |
/// | 40 – 49 | Pool state                       |
/// | 50 – 59 | Asset recovery                   |
/// | 60 – 69 | Token transfers                  |
/// | 70 – 79 | Arithmetic                       |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// Caller is not the owner, the funder, or the nominee.
    Unauthorized = 10,
    /// `cancel_nomination` was called with nothing pending.
    NoPendingNomination = 11,

    // ── Validation (30–39) ───────────────────────────────────
    /// Zero or negative amount, or a funding too small to emit anything.
    InvalidAmount = 30,
    /// Withdrawal larger than the caller's staked balance.
    InsufficientBalance = 31,
    /// `claim` with no owed reward.
    NothingToClaim = 32,
    InvalidWindowLength = 33,
    TokensIdentical = 34,

    // ── State (40–49) ────────────────────────────────────────
    /// Window length changes are only accepted once the window has ended.
    WindowActive = 40,
    /// The contract does not hold enough reward tokens for the new rate.
    InsufficientRewardBalance = 41,
    Paused = 42,

    // ── Recovery (50–59) ─────────────────────────────────────
    /// The stake token can never be swept through `recover_asset`.
    ForbiddenAsset = 50,

    // ── Transfers (60–69) ────────────────────────────────────
    TransferFailed = 60,

    // ── Arithmetic (70–79) ───────────────────────────────────
    Overflow = 70,
}

/// Coarse classification of [`ContractError`] variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lifecycle,
    Authorization,
    InvalidAmount,
    State,
    ForbiddenAsset,
    TransferFailure,
    Arithmetic,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ContractError::Unauthorized | ContractError::NoPendingNomination => {
                ErrorCategory::Authorization
            }
            ContractError::InvalidAmount
            | ContractError::InsufficientBalance
            | ContractError::NothingToClaim
            | ContractError::InvalidWindowLength
            | ContractError::TokensIdentical => ErrorCategory::InvalidAmount,
            ContractError::WindowActive
            | ContractError::InsufficientRewardBalance
            | ContractError::Paused => ErrorCategory::State,
            ContractError::ForbiddenAsset => ErrorCategory::ForbiddenAsset,
            ContractError::TransferFailed => ErrorCategory::TransferFailure,
            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }
}

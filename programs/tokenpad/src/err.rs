use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Token name is too long")]
    NameTooLong,
    #[msg("Token symbol is too long")]
    SymbolTooLong,
    #[msg("Token metadata uri is too long")]
    UriTooLong,
    #[msg("Initial supply must match the fixed launch supply")]
    InvalidInitialSupply,
    #[msg("Initial price must be greater than zero")]
    InvalidPrice,
    #[msg("Cannot trade zero tokens")]
    NoZeroTokens,
    #[msg("Token balance is insufficient")]
    InsufficientBalance,
    #[msg("Lamport balance cannot settle the trade")]
    InsufficientFunds,
    #[msg("Pool inventory cannot cover the requested amount")]
    InsufficientInventory,
    #[msg("Amount exceeds the supply sold through the pool")]
    InsufficientSupply,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Quoted price moved beyond the accepted bound")]
    SlippageExceeded,
}

mod consts;
mod endpoints;
mod err;
mod math;
mod models;

use crate::endpoints::*;
use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// # Tokenpad
///
/// A token launch program built around a linear bonding curve:
/// - Fixed-supply token mints with on-chain metadata
/// - One pool per mint, derived from the mint address
/// - Deterministic interval pricing with overflow rejection
/// - Atomic lamports-for-tokens settlement in both directions
#[program]
pub mod tokenpad {
    use super::*;

    // ===== Launch =====

    /// Mints a new token with the fixed launch supply and attaches
    /// metadata.
    ///
    /// # Arguments
    /// * `name` - Token name (e.g., "Test Token")
    /// * `symbol` - Token symbol (e.g., "TEST")
    /// * `uri` - Off-chain metadata URI
    /// * `initial_supply` - Must equal the fixed launch supply
    pub fn create_token(
        ctx: Context<CreateToken>,
        name: String,
        symbol: String,
        uri: String,
        initial_supply: u64,
    ) -> Result<()> {
        create_token::handle(ctx, name, symbol, uri, initial_supply)
    }

    /// Creates the bonding curve pool for a mint and seeds its vault
    /// with the creator's full supply.
    ///
    /// # Arguments
    /// * `initial_price` - Lamports per base unit at zero supply
    pub fn create_pool(ctx: Context<CreatePool>, initial_price: u64) -> Result<()> {
        create_pool::handle(ctx, initial_price)
    }

    // ===== Trading =====

    /// Preview the lamport cost of a buy without executing it.
    pub fn get_buy_quote(ctx: Context<GetBuyQuote>, amount: u64) -> Result<()> {
        get_buy_quote::handle(ctx, amount)
    }

    /// Preview the lamport proceeds of a sell without executing it.
    pub fn get_sell_quote(ctx: Context<GetSellQuote>, amount: u64) -> Result<()> {
        get_sell_quote::handle(ctx, amount)
    }

    /// Buy tokens off the curve.
    ///
    /// # Arguments
    /// * `amount` - Base units to buy
    /// * `max_cost` - Most the buyer will pay; fails a stale quote
    pub fn buy_token(ctx: Context<BuyToken>, amount: u64, max_cost: u64) -> Result<()> {
        buy_token::handle(ctx, amount, max_cost)
    }

    /// Sell tokens back into the curve.
    ///
    /// # Arguments
    /// * `amount` - Base units to sell
    /// * `min_proceeds` - Least the seller accepts; fails a stale quote
    pub fn sell_token(ctx: Context<SellToken>, amount: u64, min_proceeds: u64) -> Result<()> {
        sell_token::handle(ctx, amount, min_proceeds)
    }
}

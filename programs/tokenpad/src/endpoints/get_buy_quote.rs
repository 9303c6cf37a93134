use crate::err::AmmError;
use crate::models::pool::Pool;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

#[derive(Accounts)]
pub struct GetBuyQuote<'info> {
    #[account(
        seeds = [Pool::POOL_PREFIX, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = pool_token_account.key() == pool.token_account,
    )]
    pub pool_token_account: Box<Account<'info, TokenAccount>>,
}

/// Prices a prospective buy without committing anything; the answer
/// lands in the transaction log.
pub fn handle(ctx: Context<GetBuyQuote>, amount: u64) -> Result<()> {
    let accs = ctx.accounts;

    if amount == 0 {
        return Err(error!(AmmError::NoZeroTokens));
    }
    if amount > accs.pool_token_account.amount {
        return Err(error!(AmmError::InsufficientInventory));
    }

    let cost = accs.pool.quote_buy(amount)?;

    msg!("Buy quote: {} units cost {} lamports", amount, cost);
    msg!("Marginal price: {}", accs.pool.current_price);

    Ok(())
}

use crate::err::AmmError;
use crate::models::pool::Pool;
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

#[derive(Accounts)]
pub struct GetSellQuote<'info> {
    #[account(
        seeds = [Pool::POOL_PREFIX, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<Account<'info, Mint>>,
}

/// Prices a prospective sell without committing anything.
pub fn handle(ctx: Context<GetSellQuote>, amount: u64) -> Result<()> {
    let accs = ctx.accounts;

    if amount == 0 {
        return Err(error!(AmmError::NoZeroTokens));
    }

    let proceeds = accs.pool.quote_sell(amount)?;

    msg!("Sell quote: {} units return {} lamports", amount, proceeds);
    msg!("Marginal price: {}", accs.pool.current_price);

    Ok(())
}

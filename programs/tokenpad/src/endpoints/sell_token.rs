use crate::err::AmmError;
use crate::models::pool::Pool;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct SellToken<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [Pool::POOL_PREFIX, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = pool_token_account.key() == pool.token_account,
    )]
    pub pool_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = seller_token_account.mint == mint.key(),
        constraint = seller_token_account.owner == seller.key(),
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> SellToken<'info> {
    fn send_tokens_to_pool(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.seller_token_account.to_account_info(),
            to: self.pool_token_account.to_account_info(),
            authority: self.seller.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Sells `amount` base units back into the curve, the inverse walk of
/// the same interval a buy pays for. The pool PDA carries account data,
/// so the lamport leg is settled by direct balance mutation rather than
/// a system transfer.
///
/// `min_proceeds` bounds what the seller accepts, failing stale quotes
/// the same way `max_cost` does on the buy side.
pub fn handle(ctx: Context<SellToken>, amount: u64, min_proceeds: u64) -> Result<()> {
    let accs = ctx.accounts;

    if amount == 0 {
        return Err(error!(AmmError::NoZeroTokens));
    }
    if amount > accs.seller_token_account.amount {
        return Err(error!(AmmError::InsufficientBalance));
    }
    if amount > accs.pool.total_supply {
        return Err(error!(AmmError::InsufficientSupply));
    }

    let proceeds = accs.pool.quote_sell(amount)?;
    if proceeds < min_proceeds {
        return Err(error!(AmmError::SlippageExceeded));
    }

    let pool_info = accs.pool.to_account_info();
    if proceeds > pool_info.lamports() {
        return Err(error!(AmmError::InsufficientFunds));
    }

    msg!("Sell: {} units for {} lamports", amount, proceeds);

    token::transfer(accs.send_tokens_to_pool(), amount)?;

    **pool_info.try_borrow_mut_lamports()? -= proceeds;
    **accs.seller.to_account_info().try_borrow_mut_lamports()? += proceeds;

    let pool = &mut accs.pool;
    pool.apply_sell(amount)?;

    msg!("Pool supply: {}", pool.total_supply);
    msg!("Pool price: {}", pool.current_price);

    Ok(())
}

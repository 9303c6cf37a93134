use crate::err::AmmError;
use crate::models::pool::Pool;
use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct BuyToken<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyToken<'info> {
    fn pay_pool(&self) -> CpiContext<'_, '_, '_, 'info, system_program::Transfer<'info>> {
        let cpi_accounts = system_program::Transfer {
            from: self.buyer.to_account_info(),
            to: self.pool.to_account_info(),
        };

        let cpi_program = self.system_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }

    fn send_tokens_to_buyer(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.pool_token_account.to_account_info(),
            to: self.buyer_token_account.to_account_info(),
            authority: self.pool.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Buys `amount` base units off the curve. The cost is quoted over the
/// supply interval the trade crosses, settled lamports-for-tokens in one
/// transaction, and the pool commits supply and price together.
///
/// `max_cost` bounds what the buyer will pay: a quote taken against a
/// pool snapshot that another trade has since moved fails here instead
/// of silently repricing.
pub fn handle(ctx: Context<BuyToken>, amount: u64, max_cost: u64) -> Result<()> {
    let accs = ctx.accounts;

    if amount == 0 {
        return Err(error!(AmmError::NoZeroTokens));
    }
    if amount > accs.pool_token_account.amount {
        return Err(error!(AmmError::InsufficientInventory));
    }

    let cost = accs.pool.quote_buy(amount)?;
    if cost > max_cost {
        return Err(error!(AmmError::SlippageExceeded));
    }
    if cost > accs.buyer.lamports() {
        return Err(error!(AmmError::InsufficientFunds));
    }

    msg!("Buy: {} units for {} lamports", amount, cost);

    system_program::transfer(accs.pay_pool(), cost)?;

    let mint_key = accs.mint.key();
    let pool_signer_seeds = &[Pool::POOL_PREFIX, mint_key.as_ref(), &[accs.pool.bump]];
    token::transfer(
        accs.send_tokens_to_buyer()
            .with_signer(&[&pool_signer_seeds[..]]),
        amount,
    )?;

    let pool = &mut accs.pool;
    pool.apply_buy(amount)?;

    msg!("Pool supply: {}", pool.total_supply);
    msg!("Pool price: {}", pool.current_price);

    Ok(())
}

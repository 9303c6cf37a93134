use crate::consts::TOTAL_TOKEN_SUPPLY;
use crate::err::AmmError;
use crate::models::pool::Pool;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Pool::INIT_SPACE,
        seeds = [Pool::POOL_PREFIX, mint.key().as_ref()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        constraint = authority_token_account.mint == mint.key(),
        constraint = authority_token_account.owner == authority.key(),
    )]
    pub authority_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreatePool<'info> {
    fn seed_pool_vault(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.authority_token_account.to_account_info(),
            to: self.pool_token_account.to_account_info(),
            authority: self.authority.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Binds a bonding curve pool to a mint. The pool PDA is derived from
/// the mint, so a second pool for the same token cannot be created; the
/// creator's full supply moves into the pool vault as inventory.
pub fn handle(ctx: Context<CreatePool>, initial_price: u64) -> Result<()> {
    let accs = ctx.accounts;

    if initial_price == 0 {
        return Err(error!(AmmError::InvalidPrice));
    }
    if accs.authority_token_account.amount < TOTAL_TOKEN_SUPPLY {
        return Err(error!(AmmError::InsufficientBalance));
    }

    token::transfer(accs.seed_pool_vault(), TOTAL_TOKEN_SUPPLY)?;

    let pool = &mut accs.pool;
    pool.authority = accs.authority.key();
    pool.mint = accs.mint.key();
    pool.token_account = accs.pool_token_account.key();
    pool.base_price = initial_price;
    pool.current_price = initial_price;
    pool.total_supply = 0;
    pool.seed_inventory = TOTAL_TOKEN_SUPPLY;
    pool.bump = ctx.bumps.pool;

    msg!("Pool created: {}", pool.key());
    msg!("Seeded inventory: {}", pool.seed_inventory);
    msg!("Initial price: {}", pool.current_price);

    Ok(())
}

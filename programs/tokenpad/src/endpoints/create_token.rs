use crate::consts::{
    MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, TOKEN_DECIMALS, TOTAL_TOKEN_SUPPLY,
};
use crate::err::AmmError;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::mpl_token_metadata::types::DataV2;
use anchor_spl::metadata::{
    create_metadata_accounts_v3, CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

#[derive(Accounts)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = authority,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: created and validated by the token metadata program
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateToken<'info> {
    fn mint_supply_to_creator(&self) -> CpiContext<'_, '_, '_, 'info, MintTo<'info>> {
        let cpi_accounts = MintTo {
            mint: self.mint.to_account_info(),
            to: self.token_account.to_account_info(),
            authority: self.authority.to_account_info(),
        };

        let cpi_program = self.token_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }

    fn create_metadata(&self) -> CpiContext<'_, '_, '_, 'info, CreateMetadataAccountsV3<'info>> {
        let cpi_accounts = CreateMetadataAccountsV3 {
            metadata: self.metadata.to_account_info(),
            mint: self.mint.to_account_info(),
            mint_authority: self.authority.to_account_info(),
            payer: self.authority.to_account_info(),
            update_authority: self.authority.to_account_info(),
            system_program: self.system_program.to_account_info(),
            rent: self.rent.to_account_info(),
        };

        let cpi_program = self.token_metadata_program.to_account_info();
        CpiContext::new(cpi_program, cpi_accounts)
    }
}

/// Mints a new launch token: fixed supply to the creator plus on-chain
/// metadata for the (name, symbol, uri) triple.
pub fn handle(
    ctx: Context<CreateToken>,
    name: String,
    symbol: String,
    uri: String,
    initial_supply: u64,
) -> Result<()> {
    let accs = ctx.accounts;

    if name.len() > MAX_NAME_LENGTH {
        return Err(error!(AmmError::NameTooLong));
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(error!(AmmError::SymbolTooLong));
    }
    if uri.len() > MAX_URI_LENGTH {
        return Err(error!(AmmError::UriTooLong));
    }
    // every launch carries the same supply so curves are comparable
    if initial_supply != TOTAL_TOKEN_SUPPLY {
        return Err(error!(AmmError::InvalidInitialSupply));
    }

    token::mint_to(accs.mint_supply_to_creator(), initial_supply)?;

    create_metadata_accounts_v3(
        accs.create_metadata(),
        DataV2 {
            name,
            symbol,
            uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        true,
        true,
        None,
    )?;

    msg!("Launched mint: {}", accs.mint.key());
    msg!("Initial supply: {}", initial_supply);

    Ok(())
}

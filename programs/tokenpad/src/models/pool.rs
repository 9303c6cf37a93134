use crate::consts::PRICE_SCALE;
use crate::err::AmmError;
use crate::math::utils::{multiply_divide, CheckedMath, CheckedMath256};
use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use spl_math::uint::U256;

/// Bonding curve pool, one per mint. Lives at the PDA
/// `[POOL_PREFIX, mint]`, so any party can derive its address from the
/// mint alone without a lookup.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Creator of the pool
    pub authority: Pubkey,
    /// Mint of the launched token
    pub mint: Pubkey,
    /// Pool owned vault holding the unsold inventory
    pub token_account: Pubkey,
    /// Lamports per base unit at zero circulating supply
    pub base_price: u64,
    /// Marginal price of the next base unit; always `price_at(total_supply)`
    pub current_price: u64,
    /// Base units sold out of the vault into circulation
    pub total_supply: u64,
    /// Inventory the vault was seeded with at creation
    pub seed_inventory: u64,
    pub bump: u8,
}

impl Pool {
    pub const POOL_PREFIX: &'static [u8] = b"pool";

    /// Marginal price once `supply` base units are in circulation:
    /// `base_price + base_price * supply / PRICE_SCALE`, floor division.
    pub fn price_at(&self, supply: u64) -> Result<u64> {
        let raise = multiply_divide(
            self.base_price as u128,
            supply as u128,
            PRICE_SCALE as u128,
        )
        .ok_or(AmmError::MathOverflow)?;

        (self.base_price as u128)
            .checked_add(raise)
            .and_then(|price| u64::try_from(price).ok())
            .ok_or_else(|| error!(AmmError::MathOverflow))
    }

    /// Lamport cost of buying `amount` units at the current supply. The
    /// curve is summed over `[total_supply, total_supply + amount)`, so
    /// large trades pay for the price levels they sweep through instead
    /// of the starting price times `amount`. Rounds up.
    pub fn quote_buy(&self, amount: u64) -> Result<u64> {
        interval_cost(self.base_price, self.total_supply, amount, Rounding::Up)
    }

    /// Lamport proceeds of selling `amount` units back: the same sum
    /// over `[total_supply - amount, total_supply)`, rounded down.
    pub fn quote_sell(&self, amount: u64) -> Result<u64> {
        let start = self
            .total_supply
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientSupply)?;

        interval_cost(self.base_price, start, amount, Rounding::Down)
    }

    /// Commits a buy. Supply and marginal price move in one step; the
    /// price is recomputed from the new supply, never incremented.
    pub fn apply_buy(&mut self, amount: u64) -> Result<()> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(AmmError::MathOverflow)?;
        self.current_price = self.price_at(self.total_supply)?;

        Ok(())
    }

    /// Commits a sell.
    pub fn apply_sell(&mut self, amount: u64) -> Result<()> {
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientSupply)?;
        self.current_price = self.price_at(self.total_supply)?;

        Ok(())
    }

    /// Units still sitting in the vault implied by the trade history.
    pub fn expected_inventory(&self) -> u64 {
        self.seed_inventory - self.total_supply
    }
}

#[derive(Clone, Copy)]
enum Rounding {
    Up,
    Down,
}

/// Closed form of `sum_{i=start}^{start+amount-1} price_at(i)`:
///
/// `base * amount + base * (start*amount + amount*(amount-1)/2) / PRICE_SCALE`
///
/// Intermediates are widened to 256 bits; any overflow, including the
/// final narrowing to lamports, is rejected rather than wrapped.
fn interval_cost(base_price: u64, start: u64, amount: u64, rounding: Rounding) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let n = U256::from(amount);

    // start*n + n*(n-1)/2, the supply levels the trade sweeps through
    let first_level = U256::from(start)
        .checked_mul(n)
        .ok_or(AmmError::MathOverflow)?;
    let levels = n
        .checked_mul(n - U256::one())
        .checked_div(U256::from(2u8))
        .checked_add(first_level)
        .ok_or(AmmError::MathOverflow)?;

    let scaled = U256::from(base_price)
        .checked_mul(levels)
        .ok_or(AmmError::MathOverflow)?;
    if scaled > U256::from(u128::MAX) {
        return Err(error!(AmmError::MathOverflow));
    }

    let raise = match rounding {
        Rounding::Up => num_integer::div_ceil(scaled.as_u128(), PRICE_SCALE as u128),
        Rounding::Down => scaled.as_u128() / PRICE_SCALE as u128,
    };

    (base_price as u128)
        .checked_mul(amount as u128)
        .checked_add(raise)
        .and_then(|cost| u64::try_from(cost).ok())
        .ok_or_else(|| error!(AmmError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOTAL_TOKEN_SUPPLY;

    fn pool_with_price(base_price: u64) -> Pool {
        Pool {
            authority: Pubkey::default(),
            mint: Pubkey::default(),
            token_account: Pubkey::default(),
            base_price,
            current_price: base_price,
            total_supply: 0,
            seed_inventory: TOTAL_TOKEN_SUPPLY,
            bump: 255,
        }
    }

    #[test]
    fn launch_price_is_the_initial_price() {
        let pool = pool_with_price(10_000);

        assert_eq!(pool.price_at(0).unwrap(), 10_000);
        assert_eq!(pool.current_price, 10_000);
    }

    #[test]
    fn first_unit_costs_the_base_price() {
        let mut pool = pool_with_price(10_000);

        let cost = pool.quote_buy(1).unwrap();
        assert_eq!(cost, 10_000);

        pool.apply_buy(1).unwrap();
        assert_eq!(pool.total_supply, 1);
        assert!(pool.current_price >= 10_000);
        assert_eq!(pool.expected_inventory(), TOTAL_TOKEN_SUPPLY - 1);
    }

    #[test]
    fn large_trades_pay_the_swept_levels() {
        let mut pool = pool_with_price(10_000);
        pool.total_supply = 500_000_000;

        let amount = 2_000_000_000;
        let cost = pool.quote_buy(amount).unwrap();
        assert_eq!(cost, 49_999_999_990_000);

        // strictly between amount * starting price and amount * ending price
        let starting_price = pool.price_at(500_000_000).unwrap();
        let ending_price = pool.price_at(500_000_000 + amount).unwrap();
        assert!(cost > amount * starting_price);
        assert!(cost < amount * ending_price);
    }

    #[test]
    fn buy_then_sell_restores_supply_and_price() {
        let mut pool = pool_with_price(10_000);
        pool.total_supply = 500_000_000;
        pool.current_price = pool.price_at(pool.total_supply).unwrap();
        let (supply_before, price_before) = (pool.total_supply, pool.current_price);

        let amount = 2_000_000_000;
        let cost = pool.quote_buy(amount).unwrap();
        pool.apply_buy(amount).unwrap();
        assert_eq!(pool.total_supply, 2_500_000_000);
        assert_eq!(pool.current_price, 35_000);

        let proceeds = pool.quote_sell(amount).unwrap();
        pool.apply_sell(amount).unwrap();

        assert_eq!(pool.total_supply, supply_before);
        assert_eq!(pool.current_price, price_before);
        // this interval divides evenly, so not even rounding dust is kept
        assert_eq!(proceeds, cost);
    }

    #[test]
    fn rounding_dust_favors_the_pool() {
        let mut pool = pool_with_price(10_000);

        let cost = pool.quote_buy(3).unwrap();
        pool.apply_buy(3).unwrap();
        let proceeds = pool.quote_sell(3).unwrap();

        assert_eq!(cost, 30_001);
        assert_eq!(proceeds, 30_000);
    }

    #[test]
    fn price_never_decreases_across_buys() {
        let mut pool = pool_with_price(10_000);
        let mut last_price = pool.current_price;

        for amount in [1_000_000_000u64, 250_000_000, 3_000_000_000] {
            pool.apply_buy(amount).unwrap();
            assert!(pool.current_price >= last_price);
            last_price = pool.current_price;
        }

        assert_eq!(pool.total_supply, 4_250_000_000);
        assert_eq!(pool.current_price, 52_500);

        for amount in [3_000_000_000u64, 250_000_000, 1_000_000_000] {
            let before = pool.current_price;
            pool.apply_sell(amount).unwrap();
            assert!(pool.current_price <= before);
        }
        assert_eq!(pool.current_price, 10_000);
    }

    #[test]
    fn inventory_accounting_is_conserved() {
        let mut pool = pool_with_price(10_000);

        pool.apply_buy(1_500_000_000).unwrap();
        pool.apply_sell(400_000_000).unwrap();
        pool.apply_buy(2_000_000).unwrap();

        assert_eq!(
            pool.expected_inventory() + pool.total_supply,
            pool.seed_inventory
        );
    }

    #[test]
    fn selling_more_than_circulating_is_rejected() {
        let mut pool = pool_with_price(10_000);
        pool.apply_buy(5).unwrap();

        assert_eq!(
            pool.quote_sell(6),
            Err(error!(AmmError::InsufficientSupply))
        );
        assert!(pool.apply_sell(6).is_err());
        // failed quote leaves state untouched
        assert_eq!(pool.total_supply, 5);
    }

    #[test]
    fn overflowing_trades_are_rejected_not_wrapped() {
        let pool = pool_with_price(10_000);

        // settlement for a million whole tokens exceeds u64 lamports
        assert_eq!(
            pool.quote_buy(1_000_000_000_000_000),
            Err(error!(AmmError::MathOverflow))
        );

        let extreme = pool_with_price(u64::MAX);
        assert_eq!(
            extreme.price_at(u64::MAX),
            Err(error!(AmmError::MathOverflow))
        );
        assert_eq!(
            extreme.quote_buy(u64::MAX),
            Err(error!(AmmError::MathOverflow))
        );
    }

    #[test]
    fn zero_amount_quotes_are_free_and_inert() {
        let pool = pool_with_price(10_000);

        assert_eq!(pool.quote_buy(0).unwrap(), 0);
        assert_eq!(pool.quote_sell(0).unwrap(), 0);
    }
}

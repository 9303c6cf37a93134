/// Decimals of every mint launched through the pad
pub const TOKEN_DECIMALS: u8 = 9;

/// Fixed launch supply in base units: 100M whole tokens at 9 decimals
pub const TOTAL_TOKEN_SUPPLY: u64 = 100_000_000 * 1_000_000_000;

/// Units of circulating supply that raise the marginal price by one
/// full `base_price`
pub const PRICE_SCALE: u64 = 1_000_000_000;

pub const MAX_NAME_LENGTH: usize = 30;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

pub use buy_token::*;
pub use create_pool::*;
pub use create_token::*;
pub use get_buy_quote::*;
pub use get_sell_quote::*;
pub use sell_token::*;

pub mod buy_token;
pub mod create_pool;
pub mod create_token;
pub mod get_buy_quote;
pub mod get_sell_quote;
pub mod sell_token;

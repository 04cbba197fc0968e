pub mod account;
pub mod amount;
pub mod trade;
pub mod transfer;
pub mod withdraw;

#[cfg(test)]
mod mock;

pub use account::{perp_balance, spot_balances, spot_usdt_free, PerpBalance, SpotBalance};
pub use amount::truncate_decimals;
pub use trade::{cancel_all_orders, close_all_positions};
pub use transfer::transfer_perp_to_spot;
pub use withdraw::withdraw_all_usdt;

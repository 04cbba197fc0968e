use tracing::info;

use bingx::{Method, ParamSet, RestClient};
use common::Result;

use crate::account;
use crate::amount::truncate_decimals;

pub const WITHDRAW_PATH: &str = "/openApi/wallets/v1/capital/withdraw/apply";

/// Withdrawal amounts must not exceed three fractional digits.
const WITHDRAW_DECIMALS: usize = 3;

/// Withdraw the whole spot USDT balance to `address` over the BEP20
/// network. Returns the exchange's raw response body.
pub async fn withdraw_all_usdt(client: &dyn RestClient, address: &str) -> Result<String> {
    let free = account::spot_usdt_free(client).await?;
    let amount = truncate_decimals(&free, WITHDRAW_DECIMALS);
    info!(amount = %amount, "submitting USDT withdrawal");

    let mut params = ParamSet::new();
    params.insert("address", address);
    params.insert("amount", amount);
    params.insert("coin", "USDT");
    params.insert("network", "BEP20");
    params.insert("walletType", "1");
    client.send_signed(Method::POST, WITHDRAW_PATH, params).await
}

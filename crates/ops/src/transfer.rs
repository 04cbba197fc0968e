use tracing::info;

use bingx::{Method, ParamSet, RestClient};
use common::Result;

use crate::account;
use crate::amount::truncate_decimals;

pub const ASSET_TRANSFER_PATH: &str = "/openApi/api/v3/post/asset/transfer";

/// Transfer type code: perpetual-futures account to fund (spot) account.
const PERP_TO_FUND: &str = "PFUTURES_FUND";

/// Transfer amounts must not exceed three fractional digits.
const TRANSFER_DECIMALS: usize = 3;

/// Move the whole perpetual USDT balance to the spot account. Returns the
/// exchange's raw response body.
pub async fn transfer_perp_to_spot(client: &dyn RestClient) -> Result<String> {
    let balance = account::perp_balance(client).await?;
    let amount = truncate_decimals(&balance.balance, TRANSFER_DECIMALS);
    info!(amount = %amount, "transferring perp USDT to spot");

    let mut params = ParamSet::new();
    params.insert("asset", "USDT");
    params.insert("amount", amount);
    params.insert("type", PERP_TO_FUND);
    params.insert("recvWindow", "6000");
    client
        .send_signed(Method::POST, ASSET_TRANSFER_PATH, params)
        .await
}

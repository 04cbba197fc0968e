use bingx::{Method, ParamSet, RestClient};
use common::Result;

pub const CLOSE_ALL_POSITIONS_PATH: &str = "/openApi/swap/v2/trade/closeAllPositions";
pub const CANCEL_ALL_ORDERS_PATH: &str = "/openApi/swap/v2/trade/allOpenOrders";

/// Market-close every open perpetual position.
pub async fn close_all_positions(client: &dyn RestClient) -> Result<String> {
    client
        .send_signed(Method::POST, CLOSE_ALL_POSITIONS_PATH, ParamSet::new())
        .await
}

/// Cancel every open perpetual order.
pub async fn cancel_all_orders(client: &dyn RestClient) -> Result<String> {
    client
        .send_signed(Method::DELETE, CANCEL_ALL_ORDERS_PATH, ParamSet::new())
        .await
}

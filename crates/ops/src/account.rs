use serde::Deserialize;

use bingx::{decode_data, Method, ParamSet, RestClient};
use common::{Error, Result};

pub const SPOT_BALANCE_PATH: &str = "/openApi/spot/v1/account/balance";
pub const PERP_BALANCE_PATH: &str = "/openApi/swap/v2/user/balance";

/// One asset row from the spot account. Amounts arrive as decimal strings
/// and stay that way until display or truncation.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotBalance {
    pub asset: String,
    pub free: String,
    pub locked: String,
}

#[derive(Debug, Deserialize)]
struct SpotBalanceData {
    balances: Vec<SpotBalance>,
}

/// Perpetual-futures account balance record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpBalance {
    pub asset: String,
    pub balance: String,
    pub equity: String,
    pub unrealized_profit: String,
    // The exchange spells this one with an "s".
    pub realised_profit: String,
    pub available_margin: String,
    pub used_margin: String,
    pub freezed_margin: String,
}

#[derive(Debug, Deserialize)]
struct PerpBalanceData {
    balance: PerpBalance,
}

/// Fetch all spot asset balances.
pub async fn spot_balances(client: &dyn RestClient) -> Result<Vec<SpotBalance>> {
    let body = client
        .send_signed(Method::GET, SPOT_BALANCE_PATH, ParamSet::new())
        .await?;
    let data: SpotBalanceData = decode_data(&body)?;
    Ok(data.balances)
}

/// Free USDT on the spot account, as the raw decimal string the exchange
/// reported.
pub async fn spot_usdt_free(client: &dyn RestClient) -> Result<String> {
    spot_balances(client)
        .await?
        .into_iter()
        .find(|b| b.asset == "USDT")
        .map(|b| b.free)
        .ok_or_else(|| Error::Other("spot account has no USDT balance".to_string()))
}

/// Fetch the perpetual-futures balance record.
pub async fn perp_balance(client: &dyn RestClient) -> Result<PerpBalance> {
    let mut params = ParamSet::new();
    params.insert("recvWindow", "10000");
    let body = client
        .send_signed(Method::GET, PERP_BALANCE_PATH, params)
        .await?;
    let data: PerpBalanceData = decode_data(&body)?;
    Ok(data.balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ScriptedRest, PERP_BODY, SPOT_BODY};

    #[tokio::test]
    async fn spot_balances_decodes_the_envelope() {
        let rest = ScriptedRest::new(vec![Ok(SPOT_BODY.to_string())]);
        let balances = spot_balances(&rest).await.unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].asset, "USDT");
        assert_eq!(balances[0].free, "123.45678901");

        let calls = rest.calls.lock().unwrap();
        let (method, path, params) = &calls[0];
        assert_eq!(method, &Method::GET);
        assert_eq!(path, SPOT_BALANCE_PATH);
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn spot_usdt_free_picks_the_usdt_row() {
        let rest = ScriptedRest::new(vec![Ok(SPOT_BODY.to_string())]);
        assert_eq!(spot_usdt_free(&rest).await.unwrap(), "123.45678901");
    }

    #[tokio::test]
    async fn missing_usdt_row_is_an_error() {
        let body = r#"{"code":0,"msg":"","data":{"balances":[
            {"asset":"BTC","free":"0.5","locked":"0"}]}}"#;
        let rest = ScriptedRest::new(vec![Ok(body.to_string())]);
        let err = spot_usdt_free(&rest).await.unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    #[tokio::test]
    async fn perp_balance_sends_recv_window() {
        let rest = ScriptedRest::new(vec![Ok(PERP_BODY.to_string())]);
        let balance = perp_balance(&rest).await.unwrap();
        assert_eq!(balance.balance, "456.789123");
        assert_eq!(balance.realised_profit, "-1.5");

        let calls = rest.calls.lock().unwrap();
        let (method, path, params) = &calls[0];
        assert_eq!(method, &Method::GET);
        assert_eq!(path, PERP_BALANCE_PATH);
        assert_eq!(params.get("recvWindow"), Some("10000"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let rest = ScriptedRest::new(vec![Ok("<html>not json</html>".to_string())]);
        let err = spot_balances(&rest).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}

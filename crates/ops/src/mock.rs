use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use bingx::{Method, ParamSet, RestClient};
use common::{Error, Result};

/// Canned success bodies shared by the operation tests.
pub const SPOT_BODY: &str = r#"{"code":0,"msg":"","data":{"balances":[
    {"asset":"USDT","free":"123.45678901","locked":"0"},
    {"asset":"BTC","free":"0.5","locked":"0.1"}]}}"#;

pub const PERP_BODY: &str = r#"{"code":0,"msg":"","data":{"balance":{
    "asset":"USDT","balance":"456.789123","equity":"460.0",
    "unrealizedProfit":"3.21","realisedProfit":"-1.5",
    "availableMargin":"400.0","usedMargin":"56.789","freezedMargin":"0"}}}"#;

/// Scripted `RestClient` for tests: hands out canned results in order and
/// records every call for assertions.
pub struct ScriptedRest {
    responses: Mutex<VecDeque<Result<String>>>,
    pub calls: Mutex<Vec<(Method, String, ParamSet)>>,
}

impl ScriptedRest {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RestClient for ScriptedRest {
    async fn send_signed(&self, method: Method, path: &str, params: ParamSet) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((method, path.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("scripted mock ran out of responses".to_string())))
    }
}

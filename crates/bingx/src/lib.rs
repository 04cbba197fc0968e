pub mod params;
pub mod response;
pub mod rest;
pub mod sign;

pub use params::ParamSet;
pub use response::{classify, decode, decode_data, ApiEnvelope, RawResponse};
pub use rest::{BingxClient, RestClient};
pub use sign::sign;

pub use reqwest::Method;

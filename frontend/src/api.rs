//! 员工列表的唯一一次后端调用
//!
//! 固定 URL、固定请求体，无重试、无退避、无超时；任何失败都折叠为
//! 同一条用户可见的静态错误文案（由调用方展示）。

use datascope_shared::protocol::{self, ProtocolError};
use datascope_shared::{BACKEND_PASSWORD, BACKEND_URL, BACKEND_USERNAME, Employee};
use gloo_net::http::Request;

/// 获取员工列表时的错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求构建或网络层失败，含非 2xx 状态
    Network(String),
    /// 响应体无法解码为员工列表
    Decode(ProtocolError),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(err) => write!(f, "decode error: {}", err),
        }
    }
}

/// 拉取并解码完整员工列表
pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    let body = serde_json::json!({
        "username": BACKEND_USERNAME,
        "password": BACKEND_PASSWORD,
    });

    let res = Request::post(BACKEND_URL)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !res.ok() {
        return Err(ApiError::Network(format!("HTTP {}", res.status())));
    }

    let text = res
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    protocol::decode_employees(&text).map_err(ApiError::Decode)
}

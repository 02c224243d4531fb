//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装（LocalStorage、History 路由、
//! 摄像头、文件下载），替代 gloo-* 系列 crate，以减小 WASM 二进制体积。

pub mod camera;
mod download;
pub mod route;
pub mod router;
mod storage;

pub use download::save_data_url;
pub use storage::LocalStorage;

use datascope_shared::Timestamp;

/// 当前时间的毫秒时间戳
///
/// "now" 只在前端产生，`datascope-shared` 因此保持宿主可测试。
pub fn now_timestamp() -> Timestamp {
    Timestamp::from_millis(js_sys::Date::now() as i64)
}

use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod query;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 键：当前登录用户（JSON 序列化的 `User`）
pub const STORAGE_USER_KEY: &str = "user";
/// LocalStorage 键：最近一次拍摄的照片（JSON 序列化的 `CapturedPhoto`）
pub const STORAGE_PHOTO_KEY: &str = "capturedPhoto";

/// 演示账号，本地字符串比对，无服务端会话
pub const DEMO_USERNAME: &str = "testuser";
pub const DEMO_PASSWORD: &str = "Test123";

/// 员工列表的固定后端入口与固定请求体凭据
pub const BACKEND_URL: &str = "https://backend.jotish.in/backend_dev/gettabledata.php";
pub const BACKEND_USERNAME: &str = "test";
pub const BACKEND_PASSWORD: &str = "123456";

/// 列表固定每页行数
pub const PAGE_SIZE: usize = 10;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录会话的主体
///
/// 登录时由两个字面量字段加当前日期构造，注销即销毁。
/// 以 JSON 原样存入 LocalStorage，无唯一性或引用约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
}

/// 一名员工，仅由后端行数据解码产生，会话期间不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub department: String,
    pub city: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    pub salary: f64,
}

impl Employee {
    /// 工牌编号，`EMP-0001` 形式
    pub fn badge(&self) -> String {
        format!("EMP-{:04}", self.id)
    }
}

/// 拍摄并显式保存的照片
///
/// 整体覆盖写入 LocalStorage，不按员工分键：任何时刻最多保留一张。
/// 从不上传到任何服务器。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    #[serde(rename = "employeeId")]
    pub employee_id: i64,
    /// PNG data URL
    pub image: String,
    #[serde(rename = "capturedAt", default)]
    pub captured_at: Timestamp,
}

impl CapturedPhoto {
    /// 客户端下载的建议文件名
    pub fn download_filename(&self) -> String {
        format!("employee-photo-{}.png", self.employee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_pads_to_four_digits() {
        let emp = Employee {
            id: 7,
            username: "Airi Satou".to_string(),
            department: "Accounting".to_string(),
            city: "Tokyo".to_string(),
            join_date: "2008/11/28".to_string(),
            salary: 162700.0,
        };
        assert_eq!(emp.badge(), "EMP-0007");
    }

    #[test]
    fn user_round_trips_with_camel_case_keys() {
        let user = User {
            id: "1".to_string(),
            username: "testuser".to_string(),
            join_date: "2026-08-29".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"joinDate\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn captured_photo_tolerates_missing_captured_at() {
        // 旧格式的 blob 只有 employeeId 和 image 两个字段
        let json = r#"{"employeeId":12,"image":"data:image/png;base64,AAAA"}"#;
        let photo: CapturedPhoto = serde_json::from_str(json).unwrap();
        assert_eq!(photo.employee_id, 12);
        assert_eq!(photo.captured_at, Timestamp::default());
        assert_eq!(photo.download_filename(), "employee-photo-12.png");
    }
}

//! Data Transfer Objects

use serde::Serialize;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_errno_zero() {
        let value = serde_json::to_value(ApiResponse::success("payload")).unwrap();

        assert_eq!(value["errno"], 0);
        assert_eq!(value["error"], "");
        assert_eq!(value["data"], "payload");
    }

    #[test]
    fn test_ok_envelope_has_empty_data_object() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();

        assert_eq!(value["errno"], 0);
        assert_eq!(value["data"], serde_json::json!({}));
    }
}

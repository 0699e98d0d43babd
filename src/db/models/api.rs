use serde::Serialize;

// 统一API响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

// 便捷构造函数
impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            meta: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn success_with_meta(data: T, message: &str, meta: ResponseMeta) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            meta: Some(meta),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: u16, message: &str, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error_with_code(code: u16, message: &str, error_code: &str) -> Self {
        Self::error(
            code,
            message,
            vec![ErrorDetail {
                field: None,
                code: error_code.to_string(),
                message: message.to_string(),
            }],
        )
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::error_with_code(401, message, "UNAUTHORIZED")
    }

    pub fn not_found(message: &str) -> Self {
        Self::error_with_code(404, message, "NOT_FOUND")
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error_with_code(400, message, "BAD_REQUEST")
    }

    pub fn internal_error(message: &str) -> Self {
        Self::error_with_code(500, message, "INTERNAL_ERROR")
    }
}

// 业务错误码常量
pub mod error_codes {
    // 路线图生成相关
    pub const GENERATION_RATE_LIMITED: &str = "GEN_001";
    pub const GENERATION_QUOTA_EXHAUSTED: &str = "GEN_002";
    pub const GENERATION_PARSE_ERROR: &str = "GEN_003";
    pub const GENERATION_SCHEMA_ERROR: &str = "GEN_004";
    pub const GENERATION_FAILED: &str = "GEN_005";

    // 进度相关
    pub const PROGRESS_SKILL_LOCKED: &str = "PROGRESS_001";
    pub const PROGRESS_QUIZ_REQUIRED: &str = "PROGRESS_002";
    pub const QUIZ_INCOMPLETE_SUBMISSION: &str = "PROGRESS_003";
}

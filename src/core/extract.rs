//! 提取器拒绝转换为 CoreError

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path,
    },
    http::StatusCode,
};

use super::error::CoreError;

/// 路径里的 id 不是整数时不对应任何记录
pub fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, CoreError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| CoreError::NotFound(rejection.body_text()))
}

/// 请求体超过限制为 413，其余表单问题为 400
pub fn form_rejection(rejection: FormRejection) -> CoreError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => CoreError::PayloadTooLarge(rejection.body_text()),
        _ => CoreError::BadRequest(rejection.body_text()),
    }
}

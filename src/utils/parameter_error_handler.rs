use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError};
use tracing::debug;

use crate::models::ErrorResponse;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// 请求体无法解析时与其他失败一样返回 500 和扁平错误信息
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body for {}: {}", req.path(), err);
    let response =
        HttpResponse::InternalServerError().json(ErrorResponse::new(INVALID_REQUEST_BODY));
    actix_web::error::InternalError::from_response(err, response).into()
}

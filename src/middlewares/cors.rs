use actix_cors::Cors;

use crate::config::CorsConfig;

/// 任意来源，方法与请求头取自配置；预检请求由 Cors 直接返回 200
pub fn build_cors(config: &CorsConfig) -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .max_age(config.max_age)
}

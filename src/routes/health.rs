use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::AppStartTime;
use crate::models::common::response::HealthResponse;

// 存活探针，无需认证
pub async fn health(start_time: web::Data<AppStartTime>) -> ActixResult<HttpResponse> {
    let uptime = chrono::Utc::now()
        .signed_duration_since(start_time.start_datetime)
        .num_seconds();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime,
    }))
}

// 配置路由
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::routes::test_support::TestState;

    #[actix_web::test]
    async fn test_health_without_auth() {
        let state = TestState::new();
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime_secs"].as_i64().unwrap() >= 0);
    }
}

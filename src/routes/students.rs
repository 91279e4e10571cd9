use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::middlewares::RequireBearer;
use crate::models::ErrorResponse;
use crate::services::StudentService;

// 获取当前账号的学生档案
pub async fn get_me(
    req: HttpRequest,
    service: web::Data<StudentService>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service.current_student(&claims).await {
        Ok(student) => Ok(HttpResponse::Ok().json(student)),
        Err(e) => {
            error!("Failed to resolve student profile: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to load student profile")))
        }
    }
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .wrap(RequireBearer)
            .route("/me", web::get().to(get_me)),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::errors::EduTutorError;
use crate::middlewares::RequireBearer;
use crate::models::ErrorResponse;
use crate::models::assignments::requests::NewAssignmentRequest;
use crate::services::AssignmentService;

// 布置作业
pub async fn create_assignment(
    req: HttpRequest,
    service: web::Data<AssignmentService>,
    body: web::Json<NewAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service.create_assignment(&claims, body.into_inner()).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(assignment)),
        Err(EduTutorError::Validation(msg)) => {
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(msg)))
        }
        Err(e) => {
            error!("Failed to create assignment: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create assignment")))
        }
    }
}

// 作业列表
pub async fn list_assignments(
    req: HttpRequest,
    service: web::Data<AssignmentService>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service.list_assignments(&claims).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(assignments)),
        Err(e) => {
            error!("Failed to list assignments: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to load assignments")))
        }
    }
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .wrap(RequireBearer)
            .route("", web::post().to(create_assignment))
            .route("", web::get().to(list_assignments)),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::errors::EduTutorError;
use crate::middlewares::RequireBearer;
use crate::models::ErrorResponse;
use crate::models::assessments::requests::NewAssessmentRequest;
use crate::services::AssessmentService;

// 记录测评结果
pub async fn record_assessment(
    req: HttpRequest,
    service: web::Data<AssessmentService>,
    body: web::Json<NewAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service.record_assessment(&claims, body.into_inner()).await {
        Ok(assessment) => Ok(HttpResponse::Created().json(assessment)),
        Err(EduTutorError::Validation(msg)) => {
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(msg)))
        }
        Err(e) => {
            error!("Failed to record assessment: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to record assessment")))
        }
    }
}

// 配置路由
pub fn configure_assessment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assessments")
            .wrap(RequireBearer)
            .route("", web::post().to(record_assessment)),
    );
}

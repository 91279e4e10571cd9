use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::middlewares::RequireBearer;
use crate::models::ErrorResponse;
use crate::models::assignments::requests::AssignmentFeedbackRequest;
use crate::routes::ROUTE_PREFIXES;
use crate::services::FeedbackService;

const FEEDBACK_FAILURE: &str = "Failed to process assignment feedback";

// 提交作业并获取 AI 批改
pub async fn assignment_feedback(
    service: web::Data<FeedbackService>,
    body: web::Json<AssignmentFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    match service.grade_submission(body.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(resp)),
        Err(e) => {
            error!("Error processing assignment feedback: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(FEEDBACK_FAILURE)))
        }
    }
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    for prefix in ROUTE_PREFIXES {
        cfg.service(
            web::scope(&format!("{prefix}/assignment-feedback"))
                .wrap(RequireBearer)
                .route("", web::post().to(assignment_feedback)),
        );
    }
}
